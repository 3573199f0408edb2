//! Row-range partitioning for parallel rendering.
//!
//! Splits the image into contiguous bands of rows, one band per worker.
//! Bands never overlap, so each worker writes its own slice of the frame
//! buffer without locking.

use std::ops::Range;

use crate::error::{RenderError, RenderResult};

/// A contiguous band of image rows assigned to one worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowRange {
    /// First row (inclusive)
    pub start: u32,
    /// Last row (exclusive)
    pub end: u32,
    /// Worker this band belongs to
    pub worker: usize,
}

impl RowRange {
    /// Create a new row range.
    pub fn new(start: u32, end: u32, worker: usize) -> Self {
        Self { start, end, worker }
    }

    /// Number of rows in the band.
    pub fn len(&self) -> u32 {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn rows(&self) -> Range<u32> {
        self.start..self.end
    }

    /// Index range of this band in a row-major buffer of the given width.
    pub fn pixel_range(&self, width: u32) -> Range<usize> {
        let width = width as usize;
        self.start as usize * width..self.end as usize * width
    }
}

/// Split `height` rows between `workers`.
///
/// Every worker but the last gets `height / workers` rows; the last one also
/// takes the remainder. When `height < workers` all bands but the last are
/// empty. Always returns exactly `workers` bands, in row order.
pub fn partition_rows(height: u32, workers: usize) -> RenderResult<Vec<RowRange>> {
    if workers == 0 {
        return Err(RenderError::NoWorkers);
    }

    let per_worker = (height as u64 / workers as u64) as u32;
    let ranges = (0..workers)
        .map(|worker| {
            let start = (worker as u64 * per_worker as u64) as u32;
            let end = if worker + 1 == workers {
                height
            } else {
                start + per_worker
            };
            RowRange::new(start, end, worker)
        })
        .collect();

    Ok(ranges)
}
