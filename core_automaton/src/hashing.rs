use crate::grid::GridState;

/// Running FNV-1a (64-bit) value over a byte stream.
///
/// The stream and the result are the same on every platform and process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fingerprint(u64);

impl Fingerprint {
    const OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0100_0000_01b3;

    pub const fn new() -> Self {
        Self(Self::OFFSET_BASIS)
    }

    pub fn mix(self, bytes: impl IntoIterator<Item = u8>) -> Self {
        let state = bytes.into_iter().fold(self.0, |state, byte| {
            (state ^ u64::from(byte)).wrapping_mul(Self::PRIME)
        });
        Self(state)
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

impl Default for Fingerprint {
    fn default() -> Self {
        Self::new()
    }
}

/// Identity of a whole grid: shape, then every terrain cell, then every life
/// cell.
///
/// The shape keeps a `1x4` and a `4x1` grid with the same cells apart, and
/// the life layer makes a migration that leaves terrain untouched visible.
pub fn grid_fingerprint(grid: &GridState) -> u64 {
    Fingerprint::new()
        .mix((grid.rows() as u64).to_le_bytes())
        .mix((grid.columns() as u64).to_le_bytes())
        .mix(grid.terrain_layer().iter().map(|&state| u8::from(state)))
        .mix(grid.life_layer().iter().map(|&state| u8::from(state)))
        .value()
}
