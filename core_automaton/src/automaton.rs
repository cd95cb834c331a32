//! The generation engine.
//!
//! [`Automaton::advance`] runs two full row-major passes over the grid:
//!
//! 1. **Terrain.** Neighbour counts come from a snapshot of the terrain taken
//!    before the pass, so the outcome does not depend on visiting order.
//! 2. **Life.** Neighbour counts come from the live life layer, so births
//!    and moves earlier in the pass are visible to later cells. A cell that
//!    was just born or moved into is marked and skipped for the rest of the
//!    pass.
//!
//! Afterwards the snapshot is refreshed, the marks are cleared and the
//! population counters are rebuilt from a full scan.

use bevy::prelude::Resource;
use tracing::{debug, info};

use crate::{
    error::AutomatonError,
    event_chances::EventChances,
    grid::GridState,
    neighbour_rules::NeighbourRules,
    rng::RollSource,
    states::{CellState, LifeState, TerrainState},
};

/// Odds (1 in N) that an occupied, non-grassland cell is forced back to
/// grassland at the start of the terrain pass. Fixed; not part of the rule
/// tables.
pub const FORCED_GRASSLAND_ODDS: u32 = 14;

/// Range of the migration draw. Values `0..4` pick a [`Direction`], the rest
/// mean "stay put". Fixed; not part of the rule tables.
pub const MIGRATION_ROLL: u32 = 10;

const MAX_STATES: usize = 4;

/// Orthogonal step taken by a migrating organism.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Up,
    Right,
    Down,
}

impl Direction {
    const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Up,
        Direction::Right,
        Direction::Down,
    ];

    pub fn from_roll(roll: u32) -> Option<Self> {
        Self::ALL.get(roll as usize).copied()
    }

    /// Destination of a step from `(row, column)`, or `None` off the edge.
    pub fn step(
        self,
        row: usize,
        column: usize,
        rows: usize,
        columns: usize,
    ) -> Option<(usize, usize)> {
        match self {
            Direction::Left => column.checked_sub(1).map(|column| (row, column)),
            Direction::Up => row.checked_sub(1).map(|row| (row, column)),
            Direction::Right => (column + 1 < columns).then_some((row, column + 1)),
            Direction::Down => (row + 1 < rows).then_some((row + 1, column)),
        }
    }
}

/// Number of cells in each state, per layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PopulationCounts {
    terrain: [usize; TerrainState::COUNT],
    life: [usize; LifeState::COUNT],
}

impl PopulationCounts {
    pub fn from_grid(grid: &GridState) -> Self {
        let mut counts = Self::default();
        counts.recount(grid);
        counts
    }

    pub fn recount(&mut self, grid: &GridState) {
        self.terrain = [0; TerrainState::COUNT];
        self.life = [0; LifeState::COUNT];
        for &state in grid.terrain_layer() {
            self.terrain[state.ordinal()] += 1;
        }
        for &state in grid.life_layer() {
            self.life[state.ordinal()] += 1;
        }
    }

    pub fn terrain(&self, state: TerrainState) -> usize {
        self.terrain[state.ordinal()]
    }

    pub fn life(&self, state: LifeState) -> usize {
        self.life[state.ordinal()]
    }

    pub fn terrain_counts(&self) -> [usize; TerrainState::COUNT] {
        self.terrain
    }

    pub fn life_counts(&self) -> [usize; LifeState::COUNT] {
        self.life
    }

    pub fn terrain_total(&self) -> usize {
        self.terrain.iter().sum()
    }

    pub fn life_total(&self) -> usize {
        self.life.iter().sum()
    }
}

/// Two-layer stochastic automaton.
///
/// Owns the grid, both rule tables and the scratch buffers used during a
/// sweep. The random source is supplied per call so runs can be replayed.
#[derive(Resource, Debug, Clone)]
pub struct Automaton {
    grid: GridState,
    chances: EventChances,
    rules: NeighbourRules,
    /// Terrain as it stood before the current terrain pass.
    terrain_snapshot: Vec<TerrainState>,
    /// Cells born into or moved into during the current life pass.
    moved: Vec<bool>,
    populations: PopulationCounts,
    generation: u64,
}

impl Automaton {
    /// Blank `rows x columns` automaton with empty rule tables.
    pub fn new(rows: usize, columns: usize) -> Result<Self, AutomatonError> {
        let grid = GridState::new(rows, columns)?;
        Ok(Self::with_tables(
            grid,
            EventChances::default(),
            NeighbourRules::default(),
        ))
    }

    /// Wrap an existing grid, keeping its contents.
    pub fn with_tables(grid: GridState, chances: EventChances, rules: NeighbourRules) -> Self {
        let terrain_snapshot = grid.terrain_layer().to_vec();
        let moved = vec![false; grid.len()];
        let populations = PopulationCounts::from_grid(&grid);
        info!(
            target: "cell_automaton::engine",
            event = "automaton_created",
            rows = grid.rows(),
            columns = grid.columns(),
        );
        Self {
            grid,
            chances,
            rules,
            terrain_snapshot,
            moved,
            populations,
            generation: 0,
        }
    }

    pub fn grid(&self) -> &GridState {
        &self.grid
    }

    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    pub fn columns(&self) -> usize {
        self.grid.columns()
    }

    pub fn cell_count(&self) -> usize {
        self.grid.len()
    }

    pub fn terrain(&self, row: usize, column: usize) -> TerrainState {
        self.grid.terrain(row, column)
    }

    pub fn life(&self, row: usize, column: usize) -> LifeState {
        self.grid.life(row, column)
    }

    pub fn has_life(&self, row: usize, column: usize) -> bool {
        self.grid.has_life(row, column)
    }

    pub fn chances(&self) -> &EventChances {
        &self.chances
    }

    pub fn chances_mut(&mut self) -> &mut EventChances {
        &mut self.chances
    }

    pub fn set_chances(&mut self, chances: EventChances) {
        self.chances = chances;
    }

    pub fn rules(&self) -> &NeighbourRules {
        &self.rules
    }

    pub fn rules_mut(&mut self) -> &mut NeighbourRules {
        &mut self.rules
    }

    pub fn set_rules(&mut self, rules: NeighbourRules) {
        self.rules = rules;
    }

    pub fn populations(&self) -> &PopulationCounts {
        &self.populations
    }

    pub fn terrain_count(&self, state: TerrainState) -> usize {
        self.populations.terrain(state)
    }

    pub fn life_count(&self, state: LifeState) -> usize {
        self.populations.life(state)
    }

    /// Generations advanced since construction or the last reset.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Overwrite one terrain cell between generations.
    pub fn set_terrain(&mut self, row: usize, column: usize, state: TerrainState) {
        let idx = self.grid.index(row, column);
        let previous = self.grid.terrain_layer()[idx];
        self.populations.terrain[previous.ordinal()] -= 1;
        self.populations.terrain[state.ordinal()] += 1;
        self.grid.terrain_layer_mut()[idx] = state;
        self.terrain_snapshot[idx] = state;
    }

    /// Overwrite one life cell between generations.
    pub fn set_life(&mut self, row: usize, column: usize, state: LifeState) {
        let idx = self.grid.index(row, column);
        let previous = self.grid.life_layer()[idx];
        self.populations.life[previous.ordinal()] -= 1;
        self.populations.life[state.ordinal()] += 1;
        self.grid.life_layer_mut()[idx] = state;
    }

    /// Fill every terrain cell with `state`.
    pub fn fill_terrain(&mut self, state: TerrainState) {
        self.grid.terrain_layer_mut().fill(state);
        self.terrain_snapshot.fill(state);
        self.populations.recount(&self.grid);
    }

    /// Blank both layers and restart the generation counter. Rule tables are
    /// kept.
    pub fn reset(&mut self) {
        self.grid.reset();
        self.reset_buffers();
        self.populations.recount(&self.grid);
        self.generation = 0;
        info!(
            target: "cell_automaton::engine",
            event = "automaton_reset",
            rows = self.grid.rows(),
            columns = self.grid.columns(),
        );
    }

    /// Step the whole grid forward one generation.
    pub fn advance<R: RollSource + ?Sized>(&mut self, rng: &mut R) {
        let rows = self.grid.rows();
        let columns = self.grid.columns();

        for row in 0..rows {
            for column in 0..columns {
                self.advance_terrain(row, column, rng);
            }
        }

        for row in 0..rows {
            for column in 0..columns {
                self.advance_life(row, column, rng);
            }
        }

        self.reset_buffers();
        self.populations.recount(&self.grid);
        self.generation += 1;

        debug!(
            target: "cell_automaton::engine",
            event = "generation_advanced",
            generation = self.generation,
            grassland = self.populations.terrain(TerrainState::Grassland),
            forest = self.populations.terrain(TerrainState::Forest),
            on_fire = self.populations.terrain(TerrainState::OnFire),
            alive = self.populations.life(LifeState::Alive),
            infected = self.populations.life(LifeState::Infected),
        );
    }

    fn advance_terrain<R: RollSource + ?Sized>(&mut self, row: usize, column: usize, rng: &mut R) {
        let idx = self.grid.index(row, column);
        let cell = self.grid.terrain_layer()[idx];

        if cell != TerrainState::Grassland
            && self.grid.life_layer()[idx] != LifeState::Blank
            && rng.roll(FORCED_GRASSLAND_ODDS) == 0
        {
            self.grid.terrain_layer_mut()[idx] = TerrainState::Grassland;
            return;
        }

        let neighbours = neighbour_histogram(
            &self.terrain_snapshot,
            self.grid.rows(),
            self.grid.columns(),
            row,
            column,
        );

        let rules = self.rules.terrain();
        let fired = rules.targets(cell).iter().copied().find(|&target| {
            rules.try_transition(cell, target, neighbours[target.ordinal()], rng)
        });
        let next = match fired {
            Some(target) => target,
            None => self.chances.terrain().sample(cell, rng),
        };
        self.grid.terrain_layer_mut()[idx] = next;
    }

    fn advance_life<R: RollSource + ?Sized>(&mut self, row: usize, column: usize, rng: &mut R) {
        let rows = self.grid.rows();
        let columns = self.grid.columns();
        let idx = self.grid.index(row, column);

        if self.moved[idx] {
            return;
        }
        match self.grid.terrain_layer()[idx] {
            TerrainState::Blank => return,
            TerrainState::OnFire => {
                self.grid.life_layer_mut()[idx] = LifeState::Blank;
                return;
            }
            TerrainState::Grassland | TerrainState::Forest => {}
        }

        let cell = self.grid.life_layer()[idx];
        let neighbours = neighbour_histogram(self.grid.life_layer(), rows, columns, row, column);

        let rules = self.rules.life();
        let fired = rules.targets(cell).iter().copied().find(|&target| {
            rules.try_transition(cell, target, neighbours[target.ordinal()], rng)
        });
        if let Some(next) = fired {
            self.grid.life_layer_mut()[idx] = next;
            // Terrain is habitable here, so a birth always lands.
            if cell == LifeState::Blank && next != LifeState::Blank {
                self.moved[idx] = true;
            }
            return;
        }

        if cell.is_organism() {
            let destination = Direction::from_roll(rng.roll(MIGRATION_ROLL))
                .and_then(|direction| direction.step(row, column, rows, columns))
                .map(|(dest_row, dest_column)| self.grid.index(dest_row, dest_column))
                .filter(|&dest| {
                    self.grid.terrain_layer()[dest].is_habitable()
                        && self.grid.life_layer()[dest] == LifeState::Blank
                });
            if let Some(dest) = destination {
                let life = self.grid.life_layer_mut();
                life[idx] = LifeState::Blank;
                self.moved[dest] = true;
                life[dest] = self.chances.life().sample(cell, rng);
                return;
            }
        }

        self.grid.life_layer_mut()[idx] = self.chances.life().sample(cell, rng);
    }

    fn reset_buffers(&mut self) {
        self.terrain_snapshot
            .copy_from_slice(self.grid.terrain_layer());
        self.moved.fill(false);
    }
}

/// Count the states of the up-to-four orthogonal neighbours of a cell.
fn neighbour_histogram<S: CellState>(
    layer: &[S],
    rows: usize,
    columns: usize,
    row: usize,
    column: usize,
) -> [u32; MAX_STATES] {
    debug_assert!(S::COUNT <= MAX_STATES);
    let idx = row * columns + column;
    let mut counts = [0u32; MAX_STATES];
    if row > 0 {
        counts[layer[idx - columns].ordinal()] += 1;
    }
    if column > 0 {
        counts[layer[idx - 1].ordinal()] += 1;
    }
    if row + 1 < rows {
        counts[layer[idx + columns].ordinal()] += 1;
    }
    if column + 1 < columns {
        counts[layer[idx + 1].ordinal()] += 1;
    }
    counts
}
