use std::fmt;

use serde::{Deserialize, Serialize};

/// Closed set of per-cell states whose ordinal doubles as an array index.
///
/// Implementors must keep `ALL[s.ordinal()] == s` for every variant and list
/// `BLANK` at ordinal 0.
pub trait CellState: Copy + Eq + fmt::Debug + Send + Sync + 'static {
    /// Number of variants.
    const COUNT: usize;
    /// Every variant in ordinal order.
    const ALL: &'static [Self];
    /// The empty state every layer is reset to.
    const BLANK: Self;

    fn ordinal(self) -> usize;

    fn from_ordinal(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

/// Ground cover of a cell.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TerrainState {
    #[default]
    Blank = 0,
    Grassland = 1,
    Forest = 2,
    OnFire = 3,
}

impl TerrainState {
    pub fn label(self) -> &'static str {
        match self {
            TerrainState::Blank => "blank",
            TerrainState::Grassland => "grassland",
            TerrainState::Forest => "forest",
            TerrainState::OnFire => "on_fire",
        }
    }

    /// Whether an organism may stand on this terrain.
    pub fn is_habitable(self) -> bool {
        !matches!(self, TerrainState::Blank | TerrainState::OnFire)
    }
}

impl CellState for TerrainState {
    const COUNT: usize = 4;
    const ALL: &'static [Self] = &[
        TerrainState::Blank,
        TerrainState::Grassland,
        TerrainState::Forest,
        TerrainState::OnFire,
    ];
    const BLANK: Self = TerrainState::Blank;

    #[inline]
    fn ordinal(self) -> usize {
        self as usize
    }
}

impl From<TerrainState> for u8 {
    fn from(value: TerrainState) -> Self {
        value as u8
    }
}

impl fmt::Display for TerrainState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Organism occupying a cell.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LifeState {
    #[default]
    Blank = 0,
    Alive = 1,
    Infected = 2,
}

impl LifeState {
    pub fn label(self) -> &'static str {
        match self {
            LifeState::Blank => "blank",
            LifeState::Alive => "alive",
            LifeState::Infected => "infected",
        }
    }

    /// Alive and infected organisms are the ones that migrate.
    pub fn is_organism(self) -> bool {
        matches!(self, LifeState::Alive | LifeState::Infected)
    }
}

impl CellState for LifeState {
    const COUNT: usize = 3;
    const ALL: &'static [Self] = &[LifeState::Blank, LifeState::Alive, LifeState::Infected];
    const BLANK: Self = LifeState::Blank;

    #[inline]
    fn ordinal(self) -> usize {
        self as usize
    }
}

impl From<LifeState> for u8 {
    fn from(value: LifeState) -> Self {
        value as u8
    }
}

impl fmt::Display for LifeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
