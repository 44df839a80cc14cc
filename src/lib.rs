//! Grid raycaster: camera, DDA kernel and column compositor.
//!
//! The library is headless; windowing lives in the binaries.

pub mod config;
pub mod engine;
pub mod renderer;
pub mod world;
