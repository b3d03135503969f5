// lib.rs - swsc library root

//! # swsc - Sliding-window site characteristics for UCE alignments
//!
//! Splits every ultra-conserved element (UCE) of a concatenated alignment into
//! a conserved core and two more variable flanks, ready for PartitionFinder
//! model selection.
//!
//! For each locus a per-site metric (Shannon entropy by default) is computed,
//! every admissible `(left, core, right)` split respecting a minimum segment
//! size is scored by the summed within-segment SSE of the metric, and the
//! minimum is kept. Ties go to the split with the most balanced segment
//! lengths. Splits that leave a segment made only of invariant sites are
//! vetoed, and so are splits with a segment missing one of A, C, G, T. A
//! locus with no valid split is emitted whole.
//!
//! ## Basic Usage
//!
//! ```rust,no_run
//! use swsc::prelude::*;
//! use std::path::Path;
//!
//! let loci = load_charsets(Path::new("dataset.charsets"))?;
//! let alignment = load_alignment(Path::new("dataset.fasta"), loci)?;
//!
//! let config = SplitConfig { min_window_size: 50, ..SplitConfig::default() };
//! let results = process_alignment(&alignment, &config)?;
//!
//! for locus in &results {
//!     print!("{}", locus.block);
//! }
//! # Ok::<(), swsc::SwscError>(())
//! ```

pub mod cli;
pub mod core;
pub mod data;
pub mod error;
pub mod output;

// Convenience prelude for common imports
pub mod prelude {
    pub use crate::core::{process_alignment, process_alignment_parallel, process_locus};
    pub use crate::core::{LocusResult, MetricKind, RunSummary, SplitConfig, Window};
    pub use crate::data::loaders::{load_alignment, load_charsets};
    pub use crate::data::{Alignment, LocusRange, LocusWindow};
    pub use crate::error::{SwscError, SwscResult};
    pub use crate::output::{write_partition_config, write_site_csv, PartitionFinderSettings};
}

// Re-export main types at the root level for convenience
pub use crate::core::{LocusResult, MetricKind, SplitConfig, Window};
pub use crate::data::{Alignment, LocusRange};
pub use crate::error::{SwscError, SwscResult};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get library information
pub fn get_info() -> String {
    format!(
        "swsc v{} - Core/flank partitioning of UCE alignments",
        VERSION
    )
}
