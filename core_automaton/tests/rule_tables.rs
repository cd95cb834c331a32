use core_automaton::{
    CellState, EventChances, LifeState, NeighbourRules, RollSource, SimRng, TerrainState,
    CHANCE_SCALE,
};

/// Fails the test on any draw.
struct NoDraws;

impl RollSource for NoDraws {
    fn roll(&mut self, upper: u32) -> u32 {
        panic!("unexpected draw with bound {upper}");
    }
}

#[test]
fn certain_rule_has_unit_roll_and_fires_on_any_neighbour() {
    let mut rules = NeighbourRules::new();
    rules.add(LifeState::Blank, LifeState::Alive, 1.0);
    assert_eq!(
        rules.life().max_roll_of(LifeState::Blank, LifeState::Alive),
        1
    );

    let mut rng = SimRng::seed_from_u64(2024);
    for count in 1..=4 {
        for _ in 0..50 {
            assert!(rules.try_transition(LifeState::Blank, LifeState::Alive, count, &mut rng));
        }
    }
    assert!(!rules.try_transition(LifeState::Blank, LifeState::Alive, 0, &mut rng));
}

#[test]
fn removed_rule_leaves_iteration_order() {
    let mut rules = NeighbourRules::new();
    rules.add(TerrainState::Blank, TerrainState::Grassland, 0.5);
    rules.add(TerrainState::Blank, TerrainState::Forest, 0.5);
    rules.add(TerrainState::Blank, TerrainState::OnFire, 0.5);

    rules.add(TerrainState::Blank, TerrainState::Forest, 0.0);

    let remaining: Vec<TerrainState> = (0..rules.rule_count(TerrainState::Blank))
        .map(|index| rules.rule_at(TerrainState::Blank, index))
        .collect();
    assert_eq!(remaining, vec![TerrainState::Grassland, TerrainState::OnFire]);
    assert!(!rules.has_rule(TerrainState::Blank, TerrainState::Forest));
}

#[test]
fn removed_rule_never_fires_and_never_draws() {
    let mut rules = NeighbourRules::new();
    rules.add(TerrainState::Forest, TerrainState::OnFire, 0.5);
    rules.add(TerrainState::Forest, TerrainState::OnFire, 0.0);

    for count in 1..=4 {
        assert!(!rules.try_transition(
            TerrainState::Forest,
            TerrainState::OnFire,
            count,
            &mut NoDraws
        ));
    }
    assert!(!rules.try_transition(LifeState::Alive, LifeState::Infected, 4, &mut NoDraws));

    rules.add(LifeState::Blank, LifeState::Alive, 1.0);
    assert!(rules.remove(LifeState::Blank, LifeState::Alive));
    assert!(!rules.try_transition(LifeState::Blank, LifeState::Alive, 2, &mut NoDraws));
}

#[test]
fn clamped_probabilities_are_accepted() {
    let mut rules = NeighbourRules::new();
    rules.add(TerrainState::Forest, TerrainState::OnFire, 7.5);
    assert_eq!(rules.chance_of(TerrainState::Forest, TerrainState::OnFire), 1.0);
    rules.add(TerrainState::Forest, TerrainState::OnFire, -0.2);
    assert!(!rules.has_rule(TerrainState::Forest, TerrainState::OnFire));
}

#[test]
fn outgoing_chances_never_exceed_one() {
    let requests = [0.45, 0.9, 0.3, 1.0, 0.05, 0.6, 0.33, 0.71];
    let mut chances = EventChances::new();

    for (step, &probability) in requests.iter().enumerate() {
        let target = TerrainState::ALL[step % TerrainState::ALL.len()];
        chances.set(TerrainState::Grassland, target, probability);

        let sum: f64 = TerrainState::ALL
            .iter()
            .map(|&to| chances.get(TerrainState::Grassland, to))
            .sum();
        assert!(sum <= 1.0 + 1.0 / CHANCE_SCALE as f64, "sum {sum} after {step}");
        assert!(chances.terrain().total(TerrainState::Grassland) <= CHANCE_SCALE);
    }
}

#[test]
fn life_budget_is_separate_from_terrain_budget() {
    let mut chances = EventChances::new();
    chances.set(TerrainState::Blank, TerrainState::Grassland, 1.0);
    assert_eq!(chances.set(LifeState::Blank, LifeState::Alive, 1.0), 1.0);
    assert_eq!(chances.get(TerrainState::Blank, TerrainState::Grassland), 1.0);
}
