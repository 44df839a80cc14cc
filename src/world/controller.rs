use bitflags::bitflags;

use super::camera::{Camera, Rotation};

bitflags! {
    /// Input signals sampled once per frame.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    pub struct Controls: u8 {
        const FORWARD      = 0x01;
        const BACKWARD     = 0x02;
        const ROTATE_LEFT  = 0x04;
        const ROTATE_RIGHT = 0x08;
    }
}

/// Maps [`Controls`] to fixed-size camera steps.
#[derive(Clone, Copy, Debug)]
pub struct Controller {
    move_speed: f32,
    turn_left: Rotation,
    turn_right: Rotation,
}

impl Controller {
    /// `move_speed` in cells·|dir| per frame, `rot_speed` in radians per frame.
    pub fn new(move_speed: f32, rot_speed: f32) -> Self {
        let turn_left = Rotation::new(rot_speed);
        Self {
            move_speed,
            turn_left,
            turn_right: turn_left.inverse(),
        }
    }

    /// One step per active signal. Opposite signals cancel out.
    pub fn apply(&self, camera: &mut Camera, controls: Controls) {
        if controls.contains(Controls::FORWARD) {
            camera.move_forward(self.move_speed);
        }
        if controls.contains(Controls::BACKWARD) {
            camera.move_backward(self.move_speed);
        }
        if controls.contains(Controls::ROTATE_RIGHT) {
            camera.rotate(self.turn_right);
        }
        if controls.contains(Controls::ROTATE_LEFT) {
            camera.rotate(self.turn_left);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::vec2;

    fn cam() -> Camera {
        Camera::with_fov(vec2(5.5, 5.5), vec2(1.0, 0.0), 0.66)
    }

    #[test]
    fn idle_frame_leaves_camera_untouched() {
        let mut c = cam();
        Controller::new(0.1, 0.1).apply(&mut c, Controls::empty());
        assert_eq!(c, cam());
    }

    #[test]
    fn forward_moves_one_step() {
        let mut c = cam();
        Controller::new(0.1, 0.1).apply(&mut c, Controls::FORWARD);
        assert!((c.pos - vec2(5.6, 5.5)).length() < 1e-6);
        assert_eq!(c.dir, cam().dir);
    }

    #[test]
    fn left_turns_counter_clockwise() {
        let mut c = cam();
        Controller::new(0.0, 0.2).apply(&mut c, Controls::ROTATE_LEFT);
        assert!(c.dir.y > 0.0);
        let mut c = cam();
        Controller::new(0.0, 0.2).apply(&mut c, Controls::ROTATE_RIGHT);
        assert!(c.dir.y < 0.0);
    }

    #[test]
    fn opposite_signals_cancel() {
        let mut c = cam();
        Controller::new(0.3, 0.3).apply(&mut c, Controls::all());
        assert!((c.pos - cam().pos).length() < 1e-6);
        assert!((c.dir - cam().dir).length() < 1e-6);
        assert!((c.plane - cam().plane).length() < 1e-6);
    }
}
