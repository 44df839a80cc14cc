//! Rendering abstraction layer.
//!
//! *The kernel never touches a pixel buffer directly.*
//! It produces one [`HitResult`] per screen column and hands the finished
//! slice to a type that implements [`Renderer`].
//!
//! * Back-ends can be swapped (software, GPU, test doubles) without
//!   touching camera or kernel code.
//! * A blanket-impl [`RendererExt`] adds `draw_frame` so call-sites stay short.

use crate::engine::HitResult;

/// Pixel format of the software frame-buffer (0xAARRGGBB).
pub type Rgba = u32;

/// A renderer that owns an internal scratch buffer for the whole frame.
///
/// `end_frame` hands the finished buffer to a user-supplied closure.
/// Software callers typically forward it to their window-manager;
/// GPU back-ends can pass an empty slice because they never allocate it.
pub trait Renderer {
    /// (Re)allocate internal scratch for the requested resolution and clear it.
    fn begin_frame(&mut self, width: usize, height: usize);

    /// Turn one frame of kernel output into wall strips, column `i` from `hits[i]`.
    fn draw_columns(&mut self, hits: &[HitResult]);

    /// Finish the frame and **loan** the finished buffer to `submit`.
    fn end_frame<F>(&mut self, submit: F)
    where
        F: FnOnce(&[Rgba], usize, usize);
}

/// Convenience blanket-impl with a one-liner `draw_frame` adaptor.
pub trait RendererExt: Renderer {
    fn draw_frame<F>(&mut self, width: usize, height: usize, hits: &[HitResult], submit: F)
    where
        F: FnOnce(&[Rgba], usize, usize),
    {
        self.begin_frame(width, height);
        self.draw_columns(hits);
        self.end_frame(submit);
    }
}
impl<T: Renderer + ?Sized> RendererExt for T {}

pub mod software;

pub use software::{Software, tile_colour};
