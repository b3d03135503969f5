// mod.rs - Input loaders

pub mod charsets;
pub mod fasta;

pub use charsets::{load_charsets, parse_charsets};
pub use fasta::{load_alignment, read_aligned_records};
