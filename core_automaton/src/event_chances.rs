//! Neighbour-independent transition chances.
//!
//! Each `(from, to)` pair stores an integer share of [`CHANCE_SCALE`]. The
//! shares leaving one source state form a partition of `[0, CHANCE_SCALE)`;
//! whatever they leave uncovered is the "stay as you are" outcome.

use std::marker::PhantomData;

use crate::{
    rng::RollSource,
    states::{CellState, LifeState, TerrainState},
};

/// Fixed-point denominator for spontaneous chances.
pub const CHANCE_SCALE: u32 = 1_000_000_000;

/// Spontaneous chances for a single layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayerChances<S> {
    /// `COUNT x COUNT`, indexed `from * COUNT + to`.
    shares: Vec<u32>,
    /// Sum of each source row of `shares`; never above `CHANCE_SCALE`.
    totals: Vec<u32>,
    _state: PhantomData<S>,
}

impl<S: CellState> Default for LayerChances<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: CellState> LayerChances<S> {
    pub fn new() -> Self {
        Self {
            shares: vec![0; S::COUNT * S::COUNT],
            totals: vec![0; S::COUNT],
            _state: PhantomData,
        }
    }

    #[inline]
    fn slot(from: S, to: S) -> usize {
        from.ordinal() * S::COUNT + to.ordinal()
    }

    /// Currently configured probability of `from -> to`.
    pub fn get(&self, from: S, to: S) -> f64 {
        self.share(from, to) as f64 / CHANCE_SCALE as f64
    }

    /// Raw fixed-point share of `from -> to`.
    pub fn share(&self, from: S, to: S) -> u32 {
        self.shares[Self::slot(from, to)]
    }

    /// Sum of every share leaving `from`.
    pub fn total(&self, from: S) -> u32 {
        self.totals[from.ordinal()]
    }

    /// Assign the probability of `from -> to`.
    ///
    /// The input is clamped to `[0, 1]` (NaN counts as 0). The pair's old
    /// share is released first, then the new share is capped at whatever
    /// budget the other targets of `from` leave free, so the row can never
    /// sum past `CHANCE_SCALE`. Returns the probability actually stored.
    pub fn set(&mut self, from: S, to: S, probability: f64) -> f64 {
        let probability = clamp_probability(probability);
        let slot = Self::slot(from, to);
        let source = from.ordinal();

        self.totals[source] -= self.shares[slot];
        let budget = CHANCE_SCALE - self.totals[source];
        let requested = (probability * CHANCE_SCALE as f64 + 0.5) as u32;
        let share = requested.min(budget);

        self.shares[slot] = share;
        self.totals[source] += share;
        share as f64 / CHANCE_SCALE as f64
    }

    /// Zero every share leaving `from`.
    pub fn clear_state(&mut self, from: S) {
        let start = from.ordinal() * S::COUNT;
        self.shares[start..start + S::COUNT].fill(0);
        self.totals[from.ordinal()] = 0;
    }

    pub fn clear(&mut self) {
        self.shares.fill(0);
        self.totals.fill(0);
    }

    /// Pick the next state of a cell currently in `state`.
    ///
    /// No draw is consumed when nothing leaves `state`. Otherwise one draw in
    /// `[0, CHANCE_SCALE)` is walked across the targets in ordinal order.
    pub fn sample<R: RollSource + ?Sized>(&self, state: S, rng: &mut R) -> S {
        let total = self.total(state);
        if total == 0 {
            return state;
        }

        let mut draw = rng.roll(CHANCE_SCALE);
        if draw >= total {
            return state;
        }

        let start = state.ordinal() * S::COUNT;
        let row = &self.shares[start..start + S::COUNT];
        for (&target, &share) in S::ALL.iter().zip(row) {
            if draw < share {
                return target;
            }
            draw -= share;
        }
        state
    }
}

/// Spontaneous chances for both layers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventChances {
    terrain: LayerChances<TerrainState>,
    life: LayerChances<LifeState>,
}

/// Routes a state type to its layer inside [`EventChances`].
pub trait ChanceLayer: CellState {
    fn layer(chances: &EventChances) -> &LayerChances<Self>;
    fn layer_mut(chances: &mut EventChances) -> &mut LayerChances<Self>;
}

impl ChanceLayer for TerrainState {
    fn layer(chances: &EventChances) -> &LayerChances<Self> {
        &chances.terrain
    }

    fn layer_mut(chances: &mut EventChances) -> &mut LayerChances<Self> {
        &mut chances.terrain
    }
}

impl ChanceLayer for LifeState {
    fn layer(chances: &EventChances) -> &LayerChances<Self> {
        &chances.life
    }

    fn layer_mut(chances: &mut EventChances) -> &mut LayerChances<Self> {
        &mut chances.life
    }
}

impl EventChances {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn terrain(&self) -> &LayerChances<TerrainState> {
        &self.terrain
    }

    pub fn life(&self) -> &LayerChances<LifeState> {
        &self.life
    }

    pub fn get<S: ChanceLayer>(&self, from: S, to: S) -> f64 {
        S::layer(self).get(from, to)
    }

    /// See [`LayerChances::set`].
    pub fn set<S: ChanceLayer>(&mut self, from: S, to: S, probability: f64) -> f64 {
        S::layer_mut(self).set(from, to, probability)
    }

    pub fn sample<S: ChanceLayer, R: RollSource + ?Sized>(&self, state: S, rng: &mut R) -> S {
        S::layer(self).sample(state, rng)
    }

    pub fn clear(&mut self) {
        self.terrain.clear();
        self.life.clear();
    }
}

pub(crate) fn clamp_probability(probability: f64) -> f64 {
    if probability.is_nan() {
        0.0
    } else {
        probability.clamp(0.0, 1.0)
    }
}
