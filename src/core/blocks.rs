// blocks.rs - PartitionFinder data-block description for one locus

use crate::core::counts::{pooled_counts, BaseCounts};
use crate::core::windows::Window;
use std::fmt;

/// 1-based inclusive site range in the full alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SiteSpan {
    pub first: usize,
    pub last: usize,
}

impl fmt::Display for SiteSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.first, self.last)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    Left,
    Core,
    Right,
}

impl Segment {
    pub const ALL: [Segment; 3] = [Segment::Left, Segment::Core, Segment::Right];

    pub fn suffix(&self) -> &'static str {
        match self {
            Segment::Left => "left",
            Segment::Core => "core",
            Segment::Right => "right",
        }
    }
}

/// A split collapsed back to a single block because one segment lacks a
/// nucleotide state in its pooled raw counts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockVeto {
    pub segment: Segment,
    pub counts: BaseCounts,
}

impl BlockVeto {
    /// Bases absent from the vetoed segment, in ACGT order
    pub fn missing_states(&self) -> Vec<char> {
        ['A', 'C', 'G', 'T']
            .into_iter()
            .zip(self.counts.0)
            .filter(|&(_, count)| count == 0)
            .map(|(base, _)| base)
            .collect()
    }
}

impl fmt::Display for BlockVeto {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let missing: Vec<String> = self.missing_states().iter().map(char::to_string).collect();
        write!(f, "{} segment lacks {}", self.segment.suffix(), missing.join(", "))
    }
}

/// Data-block lines written for a locus
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PartitionBlock {
    Whole {
        name: String,
        span: SiteSpan,
    },
    Split {
        name: String,
        left: SiteSpan,
        core: SiteSpan,
        right: SiteSpan,
    },
}

impl PartitionBlock {
    /// Whole-locus block for a locus at 0-based `[start, stop)`
    pub fn whole(name: &str, start: usize, stop: usize) -> Self {
        PartitionBlock::Whole {
            name: name.to_string(),
            span: SiteSpan {
                first: start + 1,
                last: stop,
            },
        }
    }

    /// Three sub-blocks for a split window of a locus at `[start, stop)`
    pub fn split(name: &str, start: usize, stop: usize, window: &Window) -> Self {
        PartitionBlock::Split {
            name: name.to_string(),
            left: SiteSpan {
                first: start + 1,
                last: start + window.start,
            },
            core: SiteSpan {
                first: start + window.start + 1,
                last: start + window.stop,
            },
            right: SiteSpan {
                first: start + window.stop + 1,
                last: stop,
            },
        }
    }

    pub fn is_split(&self) -> bool {
        matches!(self, PartitionBlock::Split { .. })
    }
}

impl fmt::Display for PartitionBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PartitionBlock::Whole { name, span } => writeln!(f, "{}_all = {};", name, span),
            PartitionBlock::Split {
                name,
                left,
                core,
                right,
            } => {
                writeln!(f, "{}_left = {};", name, left)?;
                writeln!(f, "{}_core = {};", name, core)?;
                writeln!(f, "{}_right = {};", name, right)
            }
        }
    }
}

/// Check the pooled raw counts of each segment of a split window, left to
/// right, and return the first segment missing any of A, C, G, T.
///
/// Segments that are all invariant or fully undetermined already score `+inf`
/// in the metric layer and never reach this check.
pub fn block_veto(columns: &[BaseCounts], window: &Window) -> Option<BlockVeto> {
    let ranges = window.segments(columns.len());
    Segment::ALL
        .into_iter()
        .zip(ranges)
        .map(|(segment, range)| BlockVeto {
            segment,
            counts: pooled_counts(&columns[range]),
        })
        .find(|veto| veto.counts.missing_any_state())
}

/// Block description for a locus at `[start, stop)` given its chosen window.
/// A whole-locus window, or a split failing the raw-sequence check, yields the
/// single `_all` block.
pub fn partition_block(
    name: &str,
    start: usize,
    stop: usize,
    window: &Window,
    columns: &[BaseCounts],
    require_all_states: bool,
) -> (PartitionBlock, Option<BlockVeto>) {
    if window.is_whole(stop - start) {
        return (PartitionBlock::whole(name, start, stop), None);
    }
    let veto = if require_all_states {
        block_veto(columns, window)
    } else {
        None
    };
    match veto {
        Some(veto) => (PartitionBlock::whole(name, start, stop), Some(veto)),
        None => (PartitionBlock::split(name, start, stop, window), None),
    }
}
