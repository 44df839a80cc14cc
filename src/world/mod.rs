mod camera;
mod controller;
mod grid;
mod loader;

pub use camera::{Camera, Rotation};
pub use controller::{Controller, Controls};
pub use grid::{EMPTY, GridMap, TileId};
pub use loader::{MapError, load_map, parse_map};
