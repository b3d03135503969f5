// windows.rs - Candidate three-way splits of a locus

use crate::error::{SwscError, SwscResult};
use std::ops::Range;

/// Split positions `(start, stop)` dividing a locus of length `L` into
/// left flank `[0, start)`, core `[start, stop)` and right flank `[stop, L)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Window {
    pub start: usize,
    pub stop: usize,
}

impl Window {
    pub fn new(start: usize, stop: usize) -> Self {
        Self { start, stop }
    }

    /// The degenerate window covering the whole locus
    pub fn whole(locus_length: usize) -> Self {
        Self::new(0, locus_length)
    }

    pub fn is_whole(&self, locus_length: usize) -> bool {
        self.start == 0 && self.stop == locus_length
    }

    /// Left, core and right site ranges
    pub fn segments(&self, locus_length: usize) -> [Range<usize>; 3] {
        [0..self.start, self.start..self.stop, self.stop..locus_length]
    }

    pub fn segment_lengths(&self, locus_length: usize) -> [usize; 3] {
        [self.start, self.stop - self.start, locus_length - self.stop]
    }

    /// Population variance of the three segment lengths
    pub fn length_variance(&self, locus_length: usize) -> f64 {
        self.length_spread(locus_length) as f64 / 9.0
    }

    /// `9 × variance` of the segment lengths, exact in integers so that
    /// windows with the same length multiset always compare equal
    pub fn length_spread(&self, locus_length: usize) -> u128 {
        let lengths = self.segment_lengths(locus_length).map(|l| l as u128);
        let sum: u128 = lengths.iter().sum();
        let sum_sq: u128 = lengths.iter().map(|l| l * l).sum();
        3 * sum_sq - sum * sum
    }

    /// Per-site flank code: -1 left, 0 core, 1 right
    pub fn plot_codes(&self, locus_length: usize) -> Vec<i8> {
        (0..locus_length)
            .map(|i| {
                if i < self.start {
                    -1
                } else if i < self.stop {
                    0
                } else {
                    1
                }
            })
            .collect()
    }
}

/// A locus shorter than three minimum-size segments cannot be split
pub fn is_unsplittable(locus_length: usize, min_window_size: usize) -> bool {
    locus_length < min_window_size.saturating_mul(3)
}

/// Every admissible split in lexicographic `(start, stop)` order, or the
/// single whole-locus window when the locus is too short to split.
pub fn enumerate_windows(locus_length: usize, min_window_size: usize) -> SwscResult<Vec<Window>> {
    if min_window_size == 0 {
        return Err(SwscError::InvalidMinWindow(min_window_size));
    }
    if is_unsplittable(locus_length, min_window_size) {
        return Ok(vec![Window::whole(locus_length)]);
    }

    let m = min_window_size;
    let mut windows = Vec::new();
    for start in m..=locus_length - 2 * m {
        for stop in start + m..=locus_length - m {
            windows.push(Window::new(start, stop));
        }
    }
    Ok(windows)
}
