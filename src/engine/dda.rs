//! Grid DDA: walk one ray through the tile map, one cell boundary at a time.

use glam::{IVec2, Vec2, ivec2, vec2};

use super::types::{HitResult, Side};
use crate::world::{Camera, EMPTY, GridMap};

/// Stand-in for `|1 / 0|`: an axis the ray never crosses.
pub const NEVER: f32 = 1e30;

/// Ephemeral walk state for a single column.
#[derive(Clone, Copy, Debug)]
struct Walk {
    map_pos: IVec2,
    delta_dist: Vec2,
    side_dist: Vec2,
    step: IVec2,
    side: Side,
}

#[inline(always)]
fn delta(component: f32) -> f32 {
    // zero and subnormal components both overflow to inf
    let d = (1.0 / component).abs();
    if d.is_finite() { d } else { NEVER }
}

impl Walk {
    fn new(pos: Vec2, ray: Vec2) -> Self {
        let map_pos = pos.floor().as_ivec2();
        let cell = map_pos.as_vec2();
        let delta_dist = vec2(delta(ray.x), delta(ray.y));

        let (step_x, side_x) = if ray.x < 0.0 {
            (-1, (pos.x - cell.x) * delta_dist.x)
        } else {
            (1, (cell.x + 1.0 - pos.x) * delta_dist.x)
        };
        let (step_y, side_y) = if ray.y < 0.0 {
            (-1, (pos.y - cell.y) * delta_dist.y)
        } else {
            (1, (cell.y + 1.0 - pos.y) * delta_dist.y)
        };

        Self {
            map_pos,
            delta_dist,
            side_dist: vec2(side_x, side_y),
            step: ivec2(step_x, step_y),
            side: Side::Vertical,
        }
    }

    /// Cross the nearer grid line. Ties go to `y`.
    #[inline(always)]
    fn advance(&mut self) {
        if self.side_dist.x < self.side_dist.y {
            self.side_dist.x += self.delta_dist.x;
            self.map_pos.x = self.map_pos.x.saturating_add(self.step.x);
            self.side = Side::Vertical;
        } else {
            self.side_dist.y += self.delta_dist.y;
            self.map_pos.y = self.map_pos.y.saturating_add(self.step.y);
            self.side = Side::Horizontal;
        }
    }

    /// Fisheye-free distance to the boundary just crossed.
    #[inline]
    fn perp_distance(&self, pos: Vec2, ray: Vec2) -> f32 {
        match self.side {
            Side::Vertical => {
                (self.map_pos.x as f32 - pos.x + (1 - self.step.x) as f32 * 0.5) / ray.x
            }
            Side::Horizontal => {
                (self.map_pos.y as f32 - pos.y + (1 - self.step.y) as f32 * 0.5) / ray.y
            }
        }
    }
}

/// Upper bound on boundary crossings for one ray.
///
/// Every step moves one cell along one axis and never back, so a walk that
/// starts inside the map leaves it within `width + height` steps. The extra
/// step lets a camera sitting just outside the map enter it.
#[inline]
pub fn max_steps(map: &GridMap) -> usize {
    map.width() + map.height() + 1
}

/// Cast the ray for screen `column` of `width` and return the first wall hit.
pub fn cast_column(camera: &Camera, map: &GridMap, column: usize, width: usize) -> HitResult {
    let ray = camera.ray_dir(column, width);
    if ray == Vec2::ZERO {
        return HitResult::MISS;
    }

    let mut walk = Walk::new(camera.pos, ray);
    for _ in 0..max_steps(map) {
        walk.advance();
        match map.tile(walk.map_pos) {
            None => return HitResult::MISS,
            Some(EMPTY) => {}
            Some(tile) => {
                return HitResult {
                    distance: walk.perp_distance(camera.pos, ray),
                    side: walk.side,
                    tile,
                };
            }
        }
    }
    HitResult::MISS
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
