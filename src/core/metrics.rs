// metrics.rs - Per-site metrics computed from column base counts

use crate::core::counts::{pooled_counts, BaseCounts};
use crate::error::SwscError;
use std::fmt;
use std::str::FromStr;

/// Site metric used to score candidate windows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MetricKind {
    /// Shannon entropy of the column's base composition
    #[default]
    Entropy,
    /// Fraction of G+C among canonical bases
    GcContent,
    /// Log-probability of the column counts under locus-wide base frequencies
    Multinomial,
}

impl FromStr for MetricKind {
    type Err = SwscError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "entropy" => Ok(MetricKind::Entropy),
            "gc" | "gc-content" => Ok(MetricKind::GcContent),
            "multi" | "multinomial" => Ok(MetricKind::Multinomial),
            _ => Err(SwscError::UnknownMetric(s.to_string())),
        }
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl MetricKind {
    /// Name written to the `type` column and used in output file names
    pub fn name(&self) -> &'static str {
        match self {
            MetricKind::Entropy => "entropy",
            MetricKind::GcContent => "gc",
            MetricKind::Multinomial => "multi",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            MetricKind::Entropy => "Shannon entropy of base composition (bits)",
            MetricKind::GcContent => "GC fraction of canonical bases",
            MetricKind::Multinomial => "Multinomial log-likelihood of site base counts",
        }
    }

    /// One value per column, same length as `columns`
    pub fn compute(&self, columns: &[BaseCounts]) -> Vec<f64> {
        match self {
            MetricKind::Entropy => columns.iter().map(site_entropy).collect(),
            MetricKind::GcContent => columns.iter().map(site_gc).collect(),
            MetricKind::Multinomial => sitewise_multinomial(columns),
        }
    }
}

/// Shannon entropy in bits; zero for monomorphic or fully undetermined columns
pub fn site_entropy(counts: &BaseCounts) -> f64 {
    counts
        .frequencies()
        .iter()
        .filter(|&&p| p > 0.0)
        .fold(0.0, |acc, &p| acc - p * p.log2())
}

pub fn site_gc(counts: &BaseCounts) -> f64 {
    if counts.is_undetermined() {
        return 0.0;
    }
    (counts.0[1] + counts.0[2]) as f64 / counts.total() as f64
}

fn sitewise_multinomial(columns: &[BaseCounts]) -> Vec<f64> {
    let freqs = pooled_counts(columns).frequencies();
    let max_n = columns.iter().map(|c| c.total()).max().unwrap_or(0) as usize;

    // ln k! for k in 0..=max_n
    let mut ln_fact = vec![0.0f64; max_n + 1];
    for k in 2..=max_n {
        ln_fact[k] = ln_fact[k - 1] + (k as f64).ln();
    }

    columns
        .iter()
        .map(|c| {
            let n = c.total() as usize;
            if n == 0 {
                return 0.0;
            }
            c.0.iter()
                .zip(freqs)
                .filter(|(&count, _)| count > 0)
                .fold(ln_fact[n], |acc, (&count, p)| {
                    acc - ln_fact[count as usize] + count as f64 * p.ln()
                })
        })
        .collect()
}
