//! ---------------------------------------------------------------------------
//! Flat-shaded software (CPU) column compositor
//!
//! * Fills a `Vec<u32>` frame-buffer in **0xAARRGGBB** format.
//! * Strip height is `height / distance`, centred on the horizon.
//! * Faces struck across a horizontal grid line are drawn at half brightness
//!   so corners stay readable.
//! ---------------------------------------------------------------------------

use crate::{
    engine::{HitResult, Side},
    renderer::{Renderer, Rgba},
    world::TileId,
};

const CEILING: Rgba = 0xFF_383838;
const FLOOR: Rgba = 0xFF_707070;

/// Material colour for a wall tile. Unknown ids fall back to light grey.
pub fn tile_colour(tile: TileId) -> Rgba {
    match tile {
        1 => 0xFF_FF0000,
        2 => 0xFF_00FF00,
        3 => 0xFF_0000FF,
        4 => 0xFF_FFFFFF,
        5 => 0xFF_FFFF00,
        6 => 0xFF_00FFFF,
        7 => 0xFF_FF00FF,
        8 => 0xFF_FF8000,
        _ => 0xFF_C0C0C0,
    }
}

/// Halve each colour channel, keep alpha.
#[inline]
fn darken(c: Rgba) -> Rgba {
    (c & 0xFF_000000) | ((c >> 1) & 0x00_7F7F7F)
}

/*───────────────────────────────────────────────────────────────────────*/
/*                              Backend                                 */
/*───────────────────────────────────────────────────────────────────────*/

#[derive(Default)]
pub struct Software {
    scratch: Vec<Rgba>,
    width: usize,
    height: usize,
}

/*──────────────────────── Renderer trait impl ────────────────────────*/
impl Renderer for Software {
    fn begin_frame(&mut self, w: usize, h: usize) {
        // (re)allocate if resolution changed
        if w != self.width || h != self.height {
            self.width = w;
            self.height = h;
            self.scratch.resize(w * h, 0);
        }

        let horizon = (h / 2) * w;
        self.scratch[..horizon].fill(CEILING);
        self.scratch[horizon..].fill(FLOOR);
    }

    fn draw_columns(&mut self, hits: &[HitResult]) {
        for (x, hit) in hits.iter().take(self.width).enumerate() {
            if !hit.is_miss() {
                self.draw_strip(x, hit);
            }
        }
    }

    fn end_frame<F>(&mut self, submit: F)
    where
        F: FnOnce(&[Rgba], usize, usize),
    {
        submit(&self.scratch, self.width, self.height);
    }
}

/*──────────────────────── column rendering ───────────────────────────*/

impl Software {
    /// Vertical extent `[top, bottom]` of a wall at `distance`, clamped to the screen.
    fn strip_span(&self, distance: f32) -> Option<(usize, usize)> {
        if self.height == 0 || distance.is_nan() || distance <= 0.0 {
            return None;
        }
        let h = self.height as f32;
        // saturating float→int cast keeps near-zero distances finite
        let line_h = (h / distance) as i64;
        let half = self.height as i64 / 2;
        let top = (half - line_h / 2).max(0);
        let bottom = (half + line_h / 2).min(self.height as i64 - 1);
        (top <= bottom).then_some((top as usize, bottom as usize))
    }

    fn draw_strip(&mut self, x: usize, hit: &HitResult) {
        let Some((top, bottom)) = self.strip_span(hit.distance) else {
            return;
        };

        let mut colour = tile_colour(hit.tile);
        if hit.side == Side::Horizontal {
            colour = darken(colour);
        }

        for y in top..=bottom {
            self.scratch[y * self.width + x] = colour;
        }
    }
}

/*──────────────────────────────── Tests ───────────────────────────────*/
#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::RendererExt;

    fn hit(distance: f32, side: Side, tile: TileId) -> HitResult {
        HitResult {
            distance,
            side,
            tile,
        }
    }

    fn render(w: usize, h: usize, hits: &[HitResult]) -> Vec<Rgba> {
        let mut sw = Software::default();
        let mut out = Vec::new();
        sw.draw_frame(w, h, hits, |fb, fw, fh| {
            assert_eq!((fw, fh), (w, h));
            out = fb.to_vec();
        });
        out
    }

    fn column(fb: &[Rgba], w: usize, x: usize) -> Vec<Rgba> {
        fb.iter().skip(x).step_by(w).copied().collect()
    }

    #[test]
    fn misses_leave_ceiling_and_floor() {
        let fb = render(4, 8, &[HitResult::MISS; 4]);
        let col = column(&fb, 4, 2);
        assert!(col[..4].iter().all(|&p| p == CEILING));
        assert!(col[4..].iter().all(|&p| p == FLOOR));
    }

    #[test]
    fn nearer_walls_are_taller() {
        let fb = render(2, 100, &[hit(1.0, Side::Vertical, 1), hit(4.0, Side::Vertical, 1)]);
        let red = tile_colour(1);
        let near = column(&fb, 2, 0).iter().filter(|&&p| p == red).count();
        let far = column(&fb, 2, 1).iter().filter(|&&p| p == red).count();
        assert!(near > far * 3, "near {near}, far {far}");
    }

    #[test]
    fn horizontal_side_is_darker() {
        let fb = render(2, 10, &[hit(2.0, Side::Vertical, 4), hit(2.0, Side::Horizontal, 4)]);
        assert_eq!(fb[5 * 2], 0xFF_FFFFFF);
        assert_eq!(fb[5 * 2 + 1], 0xFF_7F7F7F);
    }

    #[test]
    fn zero_distance_fills_column_without_overflow() {
        let fb = render(1, 16, &[hit(0.0, Side::Vertical, 3)]);
        // `0.0` is not a positive distance, nothing drawn
        assert_eq!(fb[8], FLOOR);
        let fb = render(1, 16, &[hit(1e-9, Side::Vertical, 3)]);
        assert!(fb.iter().all(|&p| p == tile_colour(3)));
    }

    #[test]
    fn extra_hits_are_ignored() {
        let fb = render(2, 4, &[hit(1.0, Side::Vertical, 2); 5]);
        assert_eq!(fb.len(), 8);
    }

    #[test]
    fn unknown_tiles_get_fallback_colour() {
        assert_eq!(tile_colour(999), 0xFF_C0C0C0);
        assert_ne!(tile_colour(1), tile_colour(2));
    }
}
