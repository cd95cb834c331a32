use serde::Deserialize;

use crate::{
    automaton::Automaton,
    event_chances::EventChances,
    neighbour_rules::NeighbourRules,
    states::{LifeState, TerrainState},
};

/// Built-in rule sets a host can start from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RulePreset {
    /// Grass and forest spread over bare ground and burn down again; life is
    /// born next to life, drifts around and catches an infection that kills.
    #[default]
    Wildfire,
    /// No rules at all.
    Empty,
}

impl RulePreset {
    pub fn label(self) -> &'static str {
        match self {
            RulePreset::Wildfire => "wildfire",
            RulePreset::Empty => "empty",
        }
    }

    pub fn chances(self) -> EventChances {
        let mut chances = EventChances::new();
        if self == RulePreset::Empty {
            return chances;
        }

        chances.set(TerrainState::Blank, TerrainState::Grassland, 1.0 / 300_000.0);
        chances.set(TerrainState::Blank, TerrainState::Forest, 1.0 / 800_000.0);
        chances.set(TerrainState::Grassland, TerrainState::Forest, 1.0 / 200_000.0);
        chances.set(TerrainState::Grassland, TerrainState::OnFire, 1.0 / 2_000_000.0);
        chances.set(TerrainState::Forest, TerrainState::OnFire, 1.0 / 800_000.0);
        chances.set(TerrainState::OnFire, TerrainState::Blank, 1.0 / 6.0);

        chances.set(LifeState::Blank, LifeState::Alive, 1.0 / 2_000_000.0);
        chances.set(LifeState::Alive, LifeState::Blank, 1.0 / 50_000.0);
        chances.set(LifeState::Alive, LifeState::Infected, 1.0 / 500_000.0);
        chances.set(LifeState::Infected, LifeState::Blank, 1.0 / 70.0);
        chances
    }

    pub fn rules(self) -> NeighbourRules {
        let mut rules = NeighbourRules::new();
        if self == RulePreset::Empty {
            return rules;
        }

        rules.add(TerrainState::Blank, TerrainState::Grassland, 1.0 / 40.0);
        rules.add(TerrainState::Blank, TerrainState::Forest, 1.0 / 80.0);
        rules.add(TerrainState::Grassland, TerrainState::OnFire, 1.0 / 12.0);
        rules.add(TerrainState::Grassland, TerrainState::Forest, 1.0 / 130.0);
        rules.add(TerrainState::Forest, TerrainState::OnFire, 1.0 / 3.0);

        rules.add(LifeState::Blank, LifeState::Alive, 1.0 / 2_000.0);
        rules.add(LifeState::Alive, LifeState::Infected, 1.0 / 30.0);
        rules
    }

    /// Replace both rule tables of `automaton` with this preset.
    pub fn apply(self, automaton: &mut Automaton) {
        automaton.set_chances(self.chances());
        automaton.set_rules(self.rules());
    }
}
