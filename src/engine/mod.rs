mod dda;
pub mod driver;
#[allow(clippy::module_inception)]
mod engine;
mod kernel;
mod types;

pub use dda::{NEVER, cast_column, max_steps};
pub use driver::{FrameDriver, run};
pub use engine::Engine;
pub use kernel::{Dispatch, Raycaster, cast_frame};
pub use types::{HitResult, Side};
