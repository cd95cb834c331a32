//! Neighbour-driven transition rules.
//!
//! A rule `from -> to` fires with probability `count / max_roll`, where
//! `count` is the number of orthogonal neighbours already in state `to`, and
//! is certain once `count >= max_roll`. Rules for one source state are tried
//! in insertion order and the first one that fires wins.

use crate::{
    event_chances::clamp_probability,
    rng::RollSource,
    states::{CellState, LifeState, TerrainState},
};

/// Neighbour rules for a single layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayerRules<S> {
    /// Ordered candidate targets per source state.
    targets: Vec<Vec<S>>,
    /// `COUNT x COUNT` roll bounds, `0` where no rule exists.
    max_rolls: Vec<u32>,
}

impl<S: CellState> Default for LayerRules<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: CellState> LayerRules<S> {
    pub fn new() -> Self {
        Self {
            targets: (0..S::COUNT)
                .map(|_| Vec::with_capacity(S::COUNT))
                .collect(),
            max_rolls: vec![0; S::COUNT * S::COUNT],
        }
    }

    #[inline]
    fn slot(from: S, to: S) -> usize {
        from.ordinal() * S::COUNT + to.ordinal()
    }

    /// Add or update the rule `from -> to`.
    ///
    /// A probability of 0 (after clamping to `[0, 1]`) removes the rule.
    /// Otherwise the roll bound becomes `round(1 / probability)`, at least 1.
    /// A new target is appended; an existing one keeps its position.
    pub fn add(&mut self, from: S, to: S, probability: f64) {
        let probability = clamp_probability(probability);
        if probability == 0.0 {
            self.remove(from, to);
            return;
        }

        let max_roll = (1.0 / probability + 0.5).min(u32::MAX as f64) as u32;
        self.max_rolls[Self::slot(from, to)] = max_roll.max(1);

        let targets = &mut self.targets[from.ordinal()];
        if !targets.contains(&to) {
            targets.push(to);
        }
    }

    /// Drop the rule `from -> to`, returning whether it existed.
    pub fn remove(&mut self, from: S, to: S) -> bool {
        self.max_rolls[Self::slot(from, to)] = 0;
        let targets = &mut self.targets[from.ordinal()];
        match targets.iter().position(|&target| target == to) {
            Some(position) => {
                targets.remove(position);
                true
            }
            None => false,
        }
    }

    /// Drop every rule leaving `from`.
    pub fn clear_state(&mut self, from: S) {
        self.targets[from.ordinal()].clear();
        let start = from.ordinal() * S::COUNT;
        self.max_rolls[start..start + S::COUNT].fill(0);
    }

    pub fn clear(&mut self) {
        for &state in S::ALL {
            self.clear_state(state);
        }
    }

    pub fn rule_count(&self, from: S) -> usize {
        self.targets[from.ordinal()].len()
    }

    pub fn rule_at(&self, from: S, index: usize) -> S {
        self.targets[from.ordinal()][index]
    }

    /// Candidate targets of `from` in evaluation order.
    pub fn targets(&self, from: S) -> &[S] {
        &self.targets[from.ordinal()]
    }

    pub fn has_rule(&self, from: S, to: S) -> bool {
        self.targets[from.ordinal()].contains(&to)
    }

    /// Roll bound of `from -> to`, `0` without a rule.
    pub fn max_roll_of(&self, from: S, to: S) -> u32 {
        self.max_rolls[Self::slot(from, to)]
    }

    /// Chance of firing with a single matching neighbour.
    pub fn chance_of(&self, from: S, to: S) -> f64 {
        match self.max_roll_of(from, to) {
            0 => 0.0,
            max_roll => 1.0 / max_roll as f64,
        }
    }

    /// Roll the rule `from -> to` against `neighbour_count` matching
    /// neighbours. Without a rule for the pair this is `false`. A draw is
    /// consumed only when the rule exists and `neighbour_count > 0`.
    pub fn try_transition<R: RollSource + ?Sized>(
        &self,
        from: S,
        to: S,
        neighbour_count: u32,
        rng: &mut R,
    ) -> bool {
        let max_roll = self.max_roll_of(from, to);
        if neighbour_count == 0 || max_roll == 0 {
            return false;
        }
        rng.roll(max_roll) < neighbour_count
    }
}

/// Neighbour rules for both layers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NeighbourRules {
    terrain: LayerRules<TerrainState>,
    life: LayerRules<LifeState>,
}

/// Routes a state type to its layer inside [`NeighbourRules`].
pub trait RuleLayer: CellState {
    fn layer(rules: &NeighbourRules) -> &LayerRules<Self>;
    fn layer_mut(rules: &mut NeighbourRules) -> &mut LayerRules<Self>;
}

impl RuleLayer for TerrainState {
    fn layer(rules: &NeighbourRules) -> &LayerRules<Self> {
        &rules.terrain
    }

    fn layer_mut(rules: &mut NeighbourRules) -> &mut LayerRules<Self> {
        &mut rules.terrain
    }
}

impl RuleLayer for LifeState {
    fn layer(rules: &NeighbourRules) -> &LayerRules<Self> {
        &rules.life
    }

    fn layer_mut(rules: &mut NeighbourRules) -> &mut LayerRules<Self> {
        &mut rules.life
    }
}

impl NeighbourRules {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn terrain(&self) -> &LayerRules<TerrainState> {
        &self.terrain
    }

    pub fn life(&self) -> &LayerRules<LifeState> {
        &self.life
    }

    /// See [`LayerRules::add`].
    pub fn add<S: RuleLayer>(&mut self, from: S, to: S, probability: f64) {
        S::layer_mut(self).add(from, to, probability);
    }

    pub fn remove<S: RuleLayer>(&mut self, from: S, to: S) -> bool {
        S::layer_mut(self).remove(from, to)
    }

    pub fn clear_state<S: RuleLayer>(&mut self, from: S) {
        S::layer_mut(self).clear_state(from);
    }

    /// Drop every rule of both layers.
    pub fn clear(&mut self) {
        self.terrain.clear();
        self.life.clear();
    }

    pub fn rule_count<S: RuleLayer>(&self, from: S) -> usize {
        S::layer(self).rule_count(from)
    }

    pub fn rule_at<S: RuleLayer>(&self, from: S, index: usize) -> S {
        S::layer(self).rule_at(from, index)
    }

    pub fn has_rule<S: RuleLayer>(&self, from: S, to: S) -> bool {
        S::layer(self).has_rule(from, to)
    }

    pub fn chance_of<S: RuleLayer>(&self, from: S, to: S) -> f64 {
        S::layer(self).chance_of(from, to)
    }

    pub fn try_transition<S: RuleLayer, R: RollSource + ?Sized>(
        &self,
        from: S,
        to: S,
        neighbour_count: u32,
        rng: &mut R,
    ) -> bool {
        S::layer(self).try_transition(from, to, neighbour_count, rng)
    }
}
