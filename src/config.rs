//! Command-line configuration shared by the binaries.

use std::path::PathBuf;

use clap::Parser;
use glam::vec2;

use crate::{
    engine::Dispatch,
    world::{Camera, Controller, GridMap, MapError, load_map},
};

#[derive(Parser, Debug, Clone)]
#[command(name = "gridcast", version, about = "Grid raycaster")]
pub struct Config {
    /// Screen width in pixels (one ray per column)
    #[arg(long, default_value_t = 700)]
    pub width: usize,

    /// Screen height in pixels
    #[arg(long, default_value_t = 700)]
    pub height: usize,

    /// Text map file; the built-in 20×20 level when omitted
    #[arg(long)]
    pub map: Option<PathBuf>,

    #[arg(long, default_value_t = 11.0, allow_negative_numbers = true)]
    pub pos_x: f32,

    #[arg(long, default_value_t = 10.0, allow_negative_numbers = true)]
    pub pos_y: f32,

    #[arg(long, default_value_t = -1.0, allow_negative_numbers = true)]
    pub dir_x: f32,

    #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
    pub dir_y: f32,

    /// Camera plane length relative to the direction vector
    #[arg(long, default_value_t = 0.66)]
    pub fov: f32,

    /// Distance moved per frame, in multiples of the direction vector
    #[arg(long, default_value_t = 0.01)]
    pub move_speed: f32,

    /// Radians turned per frame
    #[arg(long, default_value_t = 0.01)]
    pub rot_speed: f32,

    /// Cast columns on the calling thread instead of the rayon pool
    #[arg(long)]
    pub serial: bool,

    /// Frame-rate cap for the window (0 = uncapped)
    #[arg(long, default_value_t = 60)]
    pub fps: usize,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    pub fn camera(&self) -> Camera {
        Camera::with_fov(
            vec2(self.pos_x, self.pos_y),
            vec2(self.dir_x, self.dir_y),
            self.fov,
        )
    }

    pub fn controller(&self) -> Controller {
        Controller::new(self.move_speed, self.rot_speed)
    }

    pub fn dispatch(&self) -> Dispatch {
        if self.serial {
            Dispatch::Serial
        } else {
            Dispatch::Parallel
        }
    }

    pub fn load_map(&self) -> Result<GridMap, MapError> {
        match &self.map {
            Some(path) => load_map(path),
            None => Ok(GridMap::sample()),
        }
    }

    /// Install the global `tracing` subscriber. `RUST_LOG` wins when set.
    pub fn init_logging(&self) {
        let fallback = if self.verbose { "debug" } else { "info" };
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback));
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
