use std::collections::VecDeque;

use core_automaton::{
    Automaton, EventChances, GridState, LifeState, NeighbourRules, RollSource, SimRng,
    TerrainState, FORCED_GRASSLAND_ODDS, MIGRATION_ROLL,
};

/// Hands out a fixed sequence of draws and records every bound asked for.
struct ScriptedRolls {
    draws: VecDeque<u32>,
    uppers: Vec<u32>,
}

impl ScriptedRolls {
    fn new(draws: &[u32]) -> Self {
        Self {
            draws: draws.iter().copied().collect(),
            uppers: Vec::new(),
        }
    }
}

impl RollSource for ScriptedRolls {
    fn roll(&mut self, upper: u32) -> u32 {
        self.uppers.push(upper);
        let draw = self
            .draws
            .pop_front()
            .unwrap_or_else(|| panic!("unexpected draw #{} with bound {upper}", self.uppers.len()));
        assert!(draw < upper, "scripted draw {draw} outside [0, {upper})");
        draw
    }
}

fn grassland_with_fire(fire: (usize, usize)) -> Automaton {
    let mut rules = NeighbourRules::new();
    rules.add(TerrainState::Grassland, TerrainState::OnFire, 1.0);
    let grid = GridState::new(3, 3).expect("valid dimensions");

    let mut automaton = Automaton::with_tables(grid, EventChances::new(), rules);
    automaton.fill_terrain(TerrainState::Grassland);
    automaton.set_terrain(fire.0, fire.1, TerrainState::OnFire);
    automaton
}

fn burning(automaton: &Automaton) -> Vec<(usize, usize)> {
    let mut cells = Vec::new();
    for row in 0..automaton.rows() {
        for column in 0..automaton.columns() {
            if automaton.terrain(row, column) == TerrainState::OnFire {
                cells.push((row, column));
            }
        }
    }
    cells
}

#[test]
fn certain_spontaneous_chance_forces_the_sample() {
    let mut chances = EventChances::new();
    chances.set(TerrainState::Blank, TerrainState::Grassland, 1.0);
    let grid = GridState::new(1, 1).expect("valid dimensions");
    let mut automaton = Automaton::with_tables(grid, chances, NeighbourRules::new());

    automaton.advance(&mut SimRng::seed_from_u64(11));

    assert_eq!(automaton.terrain(0, 0), TerrainState::Grassland);
    assert_eq!(automaton.terrain_count(TerrainState::Grassland), 1);
    assert_eq!(automaton.terrain_count(TerrainState::Blank), 0);
}

#[test]
fn fire_in_the_middle_ignites_orthogonal_neighbours_only() {
    let mut automaton = grassland_with_fire((1, 1));
    automaton.advance(&mut SimRng::seed_from_u64(5));

    assert_eq!(
        burning(&automaton),
        vec![(0, 1), (1, 0), (1, 1), (1, 2), (2, 1)]
    );
    for (row, column) in [(0, 0), (0, 2), (2, 0), (2, 2)] {
        assert_eq!(automaton.terrain(row, column), TerrainState::Grassland);
    }
}

#[test]
fn fire_in_a_corner_reaches_both_edge_neighbours() {
    let mut automaton = grassland_with_fire((0, 0));
    automaton.advance(&mut SimRng::seed_from_u64(5));
    assert_eq!(burning(&automaton), vec![(0, 0), (0, 1), (1, 0)]);

    automaton.advance(&mut SimRng::seed_from_u64(6));
    assert_eq!(
        burning(&automaton),
        vec![(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (2, 0)]
    );
}

#[test]
fn organism_moves_left_into_forest() {
    let grid = GridState::new(5, 5).expect("valid dimensions");
    let mut automaton = Automaton::with_tables(grid, EventChances::new(), NeighbourRules::new());
    automaton.fill_terrain(TerrainState::Forest);
    automaton.set_life(1, 1, LifeState::Alive);

    // Keep the forest under the organism, then roll "left".
    let mut rolls = ScriptedRolls::new(&[1, 0]);
    automaton.advance(&mut rolls);

    assert!(rolls.draws.is_empty());
    assert_eq!(rolls.uppers, vec![FORCED_GRASSLAND_ODDS, MIGRATION_ROLL]);
    assert_eq!(automaton.life(1, 0), LifeState::Alive);
    assert_eq!(automaton.life(1, 1), LifeState::Blank);
    assert_eq!(automaton.terrain(1, 1), TerrainState::Forest);
    assert_eq!(automaton.life_count(LifeState::Alive), 1);
}

#[test]
fn moved_organism_is_sampled_at_its_destination() {
    let mut chances = EventChances::new();
    chances.set(LifeState::Alive, LifeState::Infected, 1.0);
    let grid = GridState::new(5, 5).expect("valid dimensions");
    let mut automaton = Automaton::with_tables(grid, chances, NeighbourRules::new());
    automaton.fill_terrain(TerrainState::Forest);
    automaton.set_life(1, 1, LifeState::Alive);

    let mut rolls = ScriptedRolls::new(&[1, 0, 0]);
    automaton.advance(&mut rolls);

    assert!(rolls.draws.is_empty());
    assert_eq!(automaton.life(1, 0), LifeState::Infected);
    assert_eq!(automaton.life(1, 1), LifeState::Blank);
}
