use bevy::prelude::*;
use serde::Deserialize;

use crate::presets::RulePreset;

/// Run parameters for a headless automaton.
///
/// Rule tables are never read from here; `preset` only names one of the
/// built-in sets in [`RulePreset`].
#[derive(Resource, Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub rows: usize,
    pub columns: usize,
    /// `0` seeds from entropy.
    pub seed: u64,
    pub preset: RulePreset,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            rows: 120,
            columns: 200,
            seed: 0,
            preset: RulePreset::Wildfire,
        }
    }
}

/// Tracks total generations advanced by the app.
#[derive(Resource, Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationTick(pub u64);
