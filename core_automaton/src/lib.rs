//! Two-layer stochastic cellular automaton.
//!
//! A grid carries a terrain layer and a life layer. Every call to
//! [`Automaton::advance`] steps both forward one generation using
//! neighbour-weighted rules ([`NeighbourRules`]) with spontaneous chances
//! ([`EventChances`]) as the fallback. [`build_headless_app`] wraps the engine
//! in a Bevy [`App`] that advances one generation per [`run_turn`].

mod automaton;
pub mod config;
mod error;
mod event_chances;
mod grid;
pub mod hashing;
pub mod metrics;
mod neighbour_rules;
mod presets;
mod raster;
mod resources;
mod rng;
mod states;
mod systems;

use bevy::prelude::*;
use tracing::info;

pub use automaton::{
    Automaton, Direction, PopulationCounts, FORCED_GRASSLAND_ODDS, MIGRATION_ROLL,
};
pub use config::{load_config_from_env, ConfigError, CONFIG_PATH_ENV};
pub use error::AutomatonError;
pub use event_chances::{ChanceLayer, EventChances, LayerChances, CHANCE_SCALE};
pub use grid::GridState;
pub use metrics::SimulationMetrics;
pub use neighbour_rules::{LayerRules, NeighbourRules, RuleLayer};
pub use presets::RulePreset;
pub use raster::CellView;
pub use resources::{SimulationConfig, SimulationTick};
pub use rng::{RollSource, SimRng};
pub use states::{CellState, LifeState, TerrainState};

/// Construct a Bevy [`App`] that owns an automaton built from `config`.
///
/// The grid starts blank with `config.preset` installed; the generator is
/// seeded from `config.seed`.
pub fn build_headless_app(config: &SimulationConfig) -> Result<App, AutomatonError> {
    let mut automaton = Automaton::new(config.rows, config.columns)?;
    config.preset.apply(&mut automaton);
    let metrics = SimulationMetrics::from_automaton(&automaton);

    info!(
        target: "cell_automaton::engine",
        event = "headless_app_built",
        rows = config.rows,
        columns = config.columns,
        seed = config.seed,
        preset = config.preset.label(),
    );

    let mut app = App::new();
    app.insert_resource(config.clone())
        .insert_resource(automaton)
        .insert_resource(SimRng::from_config_seed(config.seed))
        .insert_resource(SimulationTick::default())
        .insert_resource(metrics)
        .add_plugins(MinimalPlugins)
        .add_systems(
            Update,
            (
                systems::advance_automaton,
                systems::advance_tick,
                metrics::collect_metrics,
            )
                .chain(),
        );

    Ok(app)
}

/// Execute a single generation.
///
/// Each call runs the chained systems configured in [`build_headless_app`]
/// (advance → tick increment → metrics). Timing is left to the caller.
pub fn run_turn(app: &mut App) {
    app.update();
}
