//! Frame-level dispatch of [`cast_column`] over every screen column.
//!
//! Columns share nothing but `&Camera` and `&GridMap`, and each owns one
//! output slot, so the parallel path needs no locks. [`Raycaster::cast_frame`]
//! returns the buffer as a shared borrow only once every slot is written:
//! the borrow checker is the frame barrier.

use rayon::prelude::*;

use super::{dda::cast_column, types::HitResult};
use crate::world::{Camera, GridMap};

/// Execution strategy for a kernel pass. Both produce identical output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Dispatch {
    /// One column after another on the calling thread.
    Serial,
    /// One rayon task per column.
    #[default]
    Parallel,
}

/// Owns the per-frame result buffer.
#[derive(Debug)]
pub struct Raycaster {
    hits: Vec<HitResult>,
    width: usize,
    dispatch: Dispatch,
}

impl Raycaster {
    pub fn new(width: usize, dispatch: Dispatch) -> Self {
        Self {
            hits: vec![HitResult::MISS; width],
            width,
            dispatch,
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Change the column count; takes effect on the next pass.
    pub fn set_width(&mut self, width: usize) {
        self.width = width;
    }

    /// Run the kernel for all columns and hand out the finished frame.
    pub fn cast_frame(&mut self, camera: &Camera, map: &GridMap) -> &[HitResult] {
        let width = self.width;
        self.hits.resize(width, HitResult::MISS);

        match self.dispatch {
            Dispatch::Serial => {
                for (column, slot) in self.hits.iter_mut().enumerate() {
                    *slot = cast_column(camera, map, column, width);
                }
            }
            Dispatch::Parallel => {
                self.hits
                    .par_iter_mut()
                    .enumerate()
                    .for_each(|(column, slot)| *slot = cast_column(camera, map, column, width));
            }
        }

        &self.hits
    }
}

/// Convenience one-shot pass into a fresh vector.
pub fn cast_frame(camera: &Camera, map: &GridMap, width: usize, dispatch: Dispatch) -> Vec<HitResult> {
    Raycaster::new(width, dispatch).cast_frame(camera, map).to_vec()
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
