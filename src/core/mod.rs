// mod.rs - Core logic module

pub mod blocks;
pub mod counts;
pub mod driver;
pub mod invariance;
pub mod metrics;
pub mod scoring;
pub mod selection;
pub mod windows;

// Re-export main types for convenience
pub use blocks::{block_veto, partition_block, BlockVeto, PartitionBlock, Segment, SiteSpan};
pub use counts::{column_counts, BaseCounts};
pub use driver::{
    process_alignment, process_alignment_parallel, process_locus, LocusResult, RunSummary, SiteRow,
    SplitConfig,
};
pub use invariance::{all_invariant, invariant_sites};
pub use metrics::{site_entropy, MetricKind};
pub use scoring::{score_window, score_windows, sse};
pub use selection::{select_best_window, BestWindow, WindowOutcome};
pub use windows::{enumerate_windows, Window};
