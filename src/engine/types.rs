use crate::world::{EMPTY, TileId};

/// Which family of grid lines the ray crossed last before the hit.
#[repr(u8)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Side {
    /// An `x = const` line: the ray struck an east/west wall face.
    #[default]
    Vertical = 0,
    /// A `y = const` line: north/south face.
    Horizontal = 1,
}

/// Per-column output of the kernel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HitResult {
    /// Distance projected onto the camera's forward axis, in `|dir|` units.
    pub distance: f32,
    pub side: Side,
    pub tile: TileId,
}

impl HitResult {
    /// The ray left the map (or never started) without striking a wall.
    pub const MISS: HitResult = HitResult {
        distance: f32::INFINITY,
        side: Side::Vertical,
        tile: EMPTY,
    };

    /// Real hits always carry a non-empty tile.
    #[inline]
    pub fn is_miss(&self) -> bool {
        self.tile == EMPTY
    }
}

impl Default for HitResult {
    fn default() -> Self {
        Self::MISS
    }
}
