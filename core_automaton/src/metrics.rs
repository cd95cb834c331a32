use bevy::prelude::*;

use crate::{
    automaton::Automaton,
    hashing::grid_fingerprint,
    states::{CellState, LifeState, TerrainState},
};

#[derive(Resource, Default, Debug, Clone, PartialEq, Eq)]
pub struct SimulationMetrics {
    pub generation: u64,
    pub grid_size: (usize, usize),
    pub terrain: [usize; TerrainState::COUNT],
    pub life: [usize; LifeState::COUNT],
    pub fingerprint: u64,
}

impl SimulationMetrics {
    pub fn from_automaton(automaton: &Automaton) -> Self {
        let populations = automaton.populations();
        Self {
            generation: automaton.generation(),
            grid_size: (automaton.rows(), automaton.columns()),
            terrain: populations.terrain_counts(),
            life: populations.life_counts(),
            fingerprint: grid_fingerprint(automaton.grid()),
        }
    }

    pub fn terrain_count(&self, state: TerrainState) -> usize {
        self.terrain[state.ordinal()]
    }

    pub fn life_count(&self, state: LifeState) -> usize {
        self.life[state.ordinal()]
    }
}

pub fn collect_metrics(automaton: Res<Automaton>, mut metrics: ResMut<SimulationMetrics>) {
    *metrics = SimulationMetrics::from_automaton(&automaton);
}
