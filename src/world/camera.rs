use glam::{Vec2, vec2};

/// Player view-point on the grid.
///
/// * `dir` is the forward vector. It is never renormalised, so repeated
///   rotation may drift its length slightly.
/// * `plane` is perpendicular to `dir` and points to the viewer's right;
///   `|plane| / |dir|` is the tangent of half the horizontal FoV.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    pub pos: Vec2,
    pub dir: Vec2,
    pub plane: Vec2,
}

/// Precomputed 2×2 rotation. Trig runs once, in [`Rotation::new`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rotation {
    sin: f32,
    cos: f32,
}

impl Rotation {
    /// Counter-clockwise rotation by `angle` radians.
    pub fn new(angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self { sin, cos }
    }

    /// Same magnitude, opposite direction.
    #[inline]
    pub fn inverse(self) -> Self {
        Self {
            sin: -self.sin,
            cos: self.cos,
        }
    }

    #[inline(always)]
    pub fn apply(self, v: Vec2) -> Vec2 {
        // both components read the pre-update x/y
        vec2(
            v.x * self.cos - v.y * self.sin,
            v.x * self.sin + v.y * self.cos,
        )
    }
}

impl Camera {
    pub fn new(pos: Vec2, dir: Vec2, plane: Vec2) -> Self {
        Self { pos, dir, plane }
    }

    /// Camera at `pos` facing `dir` with `plane = right(dir) * fov_ratio`.
    ///
    /// A ratio of `0.66` gives the classic ~66° horizontal FoV.
    pub fn with_fov(pos: Vec2, dir: Vec2, fov_ratio: f32) -> Self {
        let plane = vec2(dir.y, -dir.x) * fov_ratio;
        Self { pos, dir, plane }
    }

    /// Ray direction for screen column `column` of `width`.
    ///
    /// ```text
    /// ray = dir + plane * (2·column/width − 1)
    /// ```
    #[inline]
    pub fn ray_dir(&self, column: usize, width: usize) -> Vec2 {
        let camera_x = 2.0 * column as f32 / width as f32 - 1.0;
        self.dir + self.plane * camera_x
    }

    /*──────────────────────── movement helpers ──────────────────────*/

    /// `pos += dir * speed`. No collision: walls are walk-through.
    #[inline]
    pub fn move_forward(&mut self, speed: f32) {
        self.pos += self.dir * speed;
    }

    #[inline]
    pub fn move_backward(&mut self, speed: f32) {
        self.move_forward(-speed);
    }

    /// Rotate `dir` and `plane` together so the FoV is preserved.
    pub fn rotate(&mut self, rot: Rotation) {
        self.dir = rot.apply(self.dir);
        self.plane = rot.apply(self.plane);
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
