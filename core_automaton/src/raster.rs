//! What a host draws for each cell: the organism when there is one, the
//! terrain otherwise.

use crate::{
    grid::GridState,
    states::{LifeState, TerrainState},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellView {
    Terrain(TerrainState),
    Life(LifeState),
}

impl CellView {
    /// Compact code: terrain ordinals `0..=3`, then `4` alive, `5` infected.
    pub fn as_u8(self) -> u8 {
        match self {
            CellView::Terrain(state) => state as u8,
            CellView::Life(state) => 3 + state as u8,
        }
    }

    pub fn glyph(self) -> char {
        match self {
            CellView::Terrain(TerrainState::Blank) => ' ',
            CellView::Terrain(TerrainState::Grassland) => '.',
            CellView::Terrain(TerrainState::Forest) => '#',
            CellView::Terrain(TerrainState::OnFire) => '^',
            CellView::Life(LifeState::Alive) => 'o',
            CellView::Life(LifeState::Infected) => 'x',
            // has_life() is false for Blank, so this is never produced.
            CellView::Life(LifeState::Blank) => ' ',
        }
    }
}

impl GridState {
    pub fn view(&self, row: usize, column: usize) -> CellView {
        if self.has_life(row, column) {
            CellView::Life(self.life(row, column))
        } else {
            CellView::Terrain(self.terrain(row, column))
        }
    }

    /// Row-major [`CellView::as_u8`] codes.
    pub fn to_byte_raster(&self) -> Vec<u8> {
        let mut raster = Vec::with_capacity(self.len());
        for row in 0..self.rows() {
            for column in 0..self.columns() {
                raster.push(self.view(row, column).as_u8());
            }
        }
        raster
    }

    /// One line of glyphs per row, each line terminated by `\n`.
    pub fn render_text(&self) -> String {
        let mut text = String::with_capacity(self.len() + self.rows());
        for row in 0..self.rows() {
            for column in 0..self.columns() {
                text.push(self.view(row, column).glyph());
            }
            text.push('\n');
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_grid() -> GridState {
        let mut grid = GridState::new(3, 4).expect("valid grid");
        for column in 0..4 {
            grid.set_terrain(0, column, TerrainState::Grassland);
            grid.set_terrain(1, column, TerrainState::Forest);
            grid.set_terrain(2, column, TerrainState::Grassland);
        }
        grid.set_terrain(2, 3, TerrainState::OnFire);
        grid.set_life(0, 1, LifeState::Alive);
        grid.set_life(1, 2, LifeState::Infected);
        grid
    }

    #[test]
    fn life_covers_terrain() {
        let grid = sample_grid();
        assert_eq!(grid.view(0, 1), CellView::Life(LifeState::Alive));
        assert_eq!(grid.view(0, 0), CellView::Terrain(TerrainState::Grassland));
    }

    #[test]
    fn byte_raster_export() {
        let raster = sample_grid().to_byte_raster();
        assert_eq!(raster.len(), 12);
        assert_eq!(raster[0], 1); // grassland
        assert_eq!(raster[1], 4); // alive
        assert_eq!(raster[6], 5); // infected
        assert_eq!(raster[11], 3); // on fire
    }

    #[test]
    fn text_render() {
        insta::assert_snapshot!(sample_grid().render_text().trim_end(), @r"
        .o..
        ##x#
        ...^
        ");
    }
}
