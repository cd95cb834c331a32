use bevy::prelude::*;

use crate::{
    automaton::Automaton,
    resources::SimulationTick,
    rng::SimRng,
};

/// Run exactly one generation per app update.
pub fn advance_automaton(mut automaton: ResMut<Automaton>, mut rng: ResMut<SimRng>) {
    automaton.advance(&mut *rng);
}

pub fn advance_tick(mut tick: ResMut<SimulationTick>) {
    tick.0 += 1;
}
