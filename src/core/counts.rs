// counts.rs - Canonical base counts per alignment column

use crate::data::LocusWindow;
use std::ops::AddAssign;

/// Counts of A, C, G, T (case-insensitive). Every other symbol is treated as
/// undetermined and ignored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BaseCounts(pub [u32; 4]);

impl BaseCounts {
    /// Index of a canonical base in the count array
    #[inline]
    pub fn base_index(base: u8) -> Option<usize> {
        match base {
            b'A' | b'a' => Some(0),
            b'C' | b'c' => Some(1),
            b'G' | b'g' => Some(2),
            b'T' | b't' => Some(3),
            _ => None,
        }
    }

    pub fn from_bases<I: IntoIterator<Item = u8>>(bases: I) -> Self {
        let mut counts = Self::default();
        for base in bases {
            if let Some(i) = Self::base_index(base) {
                counts.0[i] += 1;
            }
        }
        counts
    }

    pub fn total(&self) -> u32 {
        self.0.iter().sum()
    }

    /// Number of distinct canonical bases observed
    pub fn distinct(&self) -> usize {
        self.0.iter().filter(|&&c| c > 0).count()
    }

    /// Relative frequencies; all zero when nothing was counted
    pub fn frequencies(&self) -> [f64; 4] {
        let total = self.total();
        let denom = if total == 0 { 1.0 } else { total as f64 };
        self.0.map(|c| c as f64 / denom)
    }

    pub fn is_undetermined(&self) -> bool {
        self.total() == 0
    }

    /// True when any of A, C, G, T is absent
    pub fn missing_any_state(&self) -> bool {
        self.0.contains(&0)
    }
}

impl AddAssign for BaseCounts {
    fn add_assign(&mut self, rhs: Self) {
        for (a, b) in self.0.iter_mut().zip(rhs.0) {
            *a += b;
        }
    }
}

/// Per-column counts for a locus window
pub fn column_counts(window: &LocusWindow<'_>) -> Vec<BaseCounts> {
    (0..window.n_sites())
        .map(|site| BaseCounts::from_bases(window.column(site)))
        .collect()
}

/// Pooled counts over a contiguous range of columns
pub fn pooled_counts(columns: &[BaseCounts]) -> BaseCounts {
    let mut pooled = BaseCounts::default();
    for c in columns {
        pooled += *c;
    }
    pooled
}
