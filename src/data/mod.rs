// mod.rs - Data structures module

pub mod alignment;
pub mod loaders;

// Re-export main types for convenience
pub use alignment::{Alignment, LocusRange, LocusWindow};
