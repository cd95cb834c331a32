//! Dense storage for the terrain and life layers.
//!
//! Both layers are row-major vectors of identical length, allocated together
//! in [`GridState::new`] and never resized. Coordinates are `(row, column)`;
//! passing coordinates outside the grid is a caller bug and panics on the
//! underlying slice index.

use crate::{
    error::AutomatonError,
    states::{LifeState, TerrainState},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridState {
    rows: usize,
    columns: usize,
    terrain: Vec<TerrainState>,
    life: Vec<LifeState>,
}

impl GridState {
    /// Allocate a `rows x columns` grid with every cell Blank.
    pub fn new(rows: usize, columns: usize) -> Result<Self, AutomatonError> {
        let total = rows
            .checked_mul(columns)
            .filter(|&total| rows > 0 && columns > 0 && total > 0)
            .ok_or(AutomatonError::InvalidDimension { rows, columns })?;
        Ok(Self {
            rows,
            columns,
            terrain: vec![TerrainState::Blank; total],
            life: vec![LifeState::Blank; total],
        })
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Number of cells in each layer.
    #[inline]
    pub fn len(&self) -> usize {
        self.terrain.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.terrain.is_empty()
    }

    #[inline]
    pub fn index(&self, row: usize, column: usize) -> usize {
        debug_assert!(row < self.rows && column < self.columns);
        row * self.columns + column
    }

    #[inline]
    pub fn terrain(&self, row: usize, column: usize) -> TerrainState {
        self.terrain[self.index(row, column)]
    }

    #[inline]
    pub fn life(&self, row: usize, column: usize) -> LifeState {
        self.life[self.index(row, column)]
    }

    #[inline]
    pub fn has_life(&self, row: usize, column: usize) -> bool {
        self.life(row, column) != LifeState::Blank
    }

    #[inline]
    pub fn set_terrain(&mut self, row: usize, column: usize, state: TerrainState) {
        let idx = self.index(row, column);
        self.terrain[idx] = state;
    }

    #[inline]
    pub fn set_life(&mut self, row: usize, column: usize, state: LifeState) {
        let idx = self.index(row, column);
        self.life[idx] = state;
    }

    pub fn terrain_layer(&self) -> &[TerrainState] {
        &self.terrain
    }

    pub fn life_layer(&self) -> &[LifeState] {
        &self.life
    }

    pub(crate) fn terrain_layer_mut(&mut self) -> &mut [TerrainState] {
        &mut self.terrain
    }

    pub(crate) fn life_layer_mut(&mut self) -> &mut [LifeState] {
        &mut self.life
    }

    /// Fill both layers with Blank.
    pub fn reset(&mut self) {
        self.terrain.fill(TerrainState::Blank);
        self.life.fill(LifeState::Blank);
    }
}
