// error.rs - Library error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SwscError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("FASTA error: {0}")]
    Fasta(String),

    #[error("Charset error: {0}")]
    Charset(String),

    #[error("Alignment contains no loci")]
    EmptyAlignment,

    #[error("Locus '{locus}': taxon '{taxon}' has {found} sites, expected {expected}")]
    RaggedLocus {
        locus: String,
        taxon: String,
        expected: usize,
        found: usize,
    },

    #[error("Locus '{0}' has no taxa or no sites")]
    EmptyLocus(String),

    #[error("Locus '{locus}' range {start}-{stop} lies outside the alignment (length {length})")]
    LocusOutOfBounds {
        locus: String,
        start: usize,
        stop: usize,
        length: usize,
    },

    #[error("Minimum window size must be at least 1 (got {0})")]
    InvalidMinWindow(usize),

    #[error("Unknown metric '{0}'. Use: entropy, gc, multi")]
    UnknownMetric(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type SwscResult<T> = Result<T, SwscError>;
