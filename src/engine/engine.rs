use crate::{
    engine::kernel::{Dispatch, Raycaster},
    renderer::{Renderer, RendererExt, Rgba},
    world::{Camera, Controller, Controls, GridMap},
};

/// Everything one frame needs, owned in one place.
pub struct Engine<R: Renderer> {
    pub renderer: R,
    pub map: GridMap,
    pub camera: Camera,
    pub controller: Controller,
    raycaster: Raycaster,
    height: usize,
}

impl<R: Renderer> Engine<R> {
    pub fn new(
        renderer: R,
        map: GridMap,
        camera: Camera,
        controller: Controller,
        dispatch: Dispatch,
        w: usize,
        h: usize,
    ) -> Self {
        tracing::info!(
            width = w,
            height = h,
            map_w = map.width(),
            map_h = map.height(),
            ?dispatch,
            "engine ready"
        );
        Self {
            renderer,
            map,
            camera,
            controller,
            raycaster: Raycaster::new(w, dispatch),
            height: h,
        }
    }

    /// Screen size in pixels.
    pub fn resolution(&self) -> (usize, usize) {
        (self.raycaster.width(), self.height)
    }

    /// Input → camera → kernel → compositor → `submit`.
    pub fn frame(&mut self, controls: Controls, submit: impl FnOnce(&[Rgba], usize, usize)) {
        self.controller.apply(&mut self.camera, controls);

        let width = self.raycaster.width();
        let hits = self.raycaster.cast_frame(&self.camera, &self.map);

        self.renderer.draw_frame(width, self.height, hits, submit);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::HitResult;
    use crate::renderer::Software;
    use glam::vec2;

    /// Records what the compositor was handed.
    #[derive(Default)]
    struct Recorder {
        frames: Vec<Vec<HitResult>>,
        size: (usize, usize),
    }

    impl Renderer for Recorder {
        fn begin_frame(&mut self, width: usize, height: usize) {
            self.size = (width, height);
        }
        fn draw_columns(&mut self, hits: &[HitResult]) {
            self.frames.push(hits.to_vec());
        }
        fn end_frame<F>(&mut self, submit: F)
        where
            F: FnOnce(&[Rgba], usize, usize),
        {
            submit(&[], self.size.0, self.size.1);
        }
    }

    fn engine<R: Renderer>(renderer: R) -> Engine<R> {
        Engine::new(
            renderer,
            GridMap::sample(),
            Camera::with_fov(vec2(11.0, 10.0), vec2(-1.0, 1.0), 0.66),
            Controller::new(0.05, 0.05),
            Dispatch::Parallel,
            64,
            48,
        )
    }

    #[test]
    fn frame_moves_camera_before_casting() {
        let mut e = engine(Recorder::default());
        let start = e.camera.pos;
        let mut submitted = None;
        e.frame(Controls::FORWARD, |_, w, h| submitted = Some((w, h)));

        assert_eq!(submitted, Some((64, 48)));
        assert!((e.camera.pos - start).length() > 0.0);
        assert_eq!(e.renderer.frames.len(), 1);
        assert_eq!(e.renderer.frames[0].len(), 64);

        // compositor saw hits for the moved camera
        let expected = crate::engine::cast_frame(&e.camera, &e.map, 64, Dispatch::Serial);
        assert_eq!(e.renderer.frames[0], expected);
    }

    #[test]
    fn software_frame_has_full_size() {
        let mut e = engine(Software::default());
        let mut len = 0;
        e.frame(Controls::empty(), |fb, w, h| {
            assert_eq!(fb.len(), w * h);
            len = fb.len();
        });
        assert_eq!(len, 64 * 48);
        assert_eq!(e.resolution(), (64, 48));
    }
}
