//! Windowed grid raycaster.
//!
//! Controls  W/↑ = forward  S/↓ = back  A/← = turn left  D/→ = turn right  Esc = quit
//!
//! ```bash
//! cargo run --release -- --map assets/arena.map --pos-x 3.5 --pos-y 3.5 --dir-x 1 --dir-y 0 --width 960 --height 600
//! ```

use anyhow::Context;
use clap::Parser;
use minifb::{Key, Window, WindowOptions};

use gridcast::{
    config::Config,
    engine::{Engine, FrameDriver, run},
    renderer::Software,
    world::Controls,
};

struct Viewer {
    engine: Engine<Software>,
    fps: usize,
    window: Option<Window>,

    // ────────────────── benchmarking state ──────────────────────────────
    acc_time: f32,
    acc_frames: usize,
}

impl Viewer {
    fn controls(win: &Window) -> Controls {
        let mut c = Controls::empty();
        if win.is_key_down(Key::W) || win.is_key_down(Key::Up) {
            c |= Controls::FORWARD;
        }
        if win.is_key_down(Key::S) || win.is_key_down(Key::Down) {
            c |= Controls::BACKWARD;
        }
        if win.is_key_down(Key::A) || win.is_key_down(Key::Left) {
            c |= Controls::ROTATE_LEFT;
        }
        if win.is_key_down(Key::D) || win.is_key_down(Key::Right) {
            c |= Controls::ROTATE_RIGHT;
        }
        c
    }

    fn report(&mut self, dt: f32) {
        self.acc_time += dt;
        self.acc_frames += 1;
        if self.acc_time >= 3.0 {
            let avg_ms = self.acc_time * 1000.0 / self.acc_frames as f32;
            tracing::debug!(avg_ms, fps = 1000.0 / avg_ms, pos = ?self.engine.camera.pos, "frame stats");
            self.acc_time = 0.0;
            self.acc_frames = 0;
        }
    }
}

impl FrameDriver for Viewer {
    fn init(&mut self) -> anyhow::Result<()> {
        let (w, h) = self.engine.resolution();
        let mut win = Window::new("gridcast", w, h, WindowOptions::default())
            .context("cannot open window")?;
        if self.fps > 0 {
            win.set_target_fps(self.fps);
        }
        self.window = Some(win);
        Ok(())
    }

    fn update(&mut self, dt: f32) -> bool {
        let Some(win) = self.window.as_mut() else {
            return false;
        };
        if !win.is_open() || win.is_key_down(Key::Escape) {
            return false;
        }

        let controls = Self::controls(win);
        let mut presented = Ok(());
        self.engine
            .frame(controls, |fb, w, h| presented = win.update_with_buffer(fb, w, h));

        if let Err(e) = presented {
            tracing::error!("present failed: {e}");
            return false;
        }
        self.report(dt);
        true
    }

    fn shutdown(&mut self) {
        // dropping the window closes it
        self.window = None;
        tracing::info!(pos = ?self.engine.camera.pos, "viewer closed");
    }
}

fn main() -> anyhow::Result<()> {
    let cfg = Config::parse();
    cfg.init_logging();

    let map = cfg
        .load_map()
        .with_context(|| format!("cannot load map {:?}", cfg.map))?;

    let engine = Engine::new(
        Software::default(),
        map,
        cfg.camera(),
        cfg.controller(),
        cfg.dispatch(),
        cfg.width,
        cfg.height,
    );

    let mut viewer = Viewer {
        engine,
        fps: cfg.fps,
        window: None,
        acc_time: 0.0,
        acc_frames: 0,
    };
    run(&mut viewer)
}
