// driver.rs - Per-locus orchestration over an alignment

use crate::core::blocks::{partition_block, BlockVeto, PartitionBlock};
use crate::core::counts::column_counts;
use crate::core::invariance::invariant_sites;
use crate::core::metrics::MetricKind;
use crate::core::scoring::score_windows;
use crate::core::selection::{select_best_window, BestWindow, WindowOutcome};
use crate::core::windows::{enumerate_windows, is_unsplittable};
use crate::data::{Alignment, LocusWindow};
use crate::error::{SwscError, SwscResult};
use indicatif::ProgressBar;
use rayon::prelude::*;
use serde::Serialize;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Run parameters shared by every locus
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplitConfig {
    /// Smallest allowed left, core or right segment
    pub min_window_size: usize,
    pub metric: MetricKind,
    /// Collapse splits whose segments lack one of A, C, G, T
    pub require_all_states: bool,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            min_window_size: 50,
            metric: MetricKind::Entropy,
            require_all_states: true,
        }
    }
}

impl SplitConfig {
    pub fn validate(&self) -> SwscResult<()> {
        if self.min_window_size == 0 {
            return Err(SwscError::InvalidMinWindow(self.min_window_size));
        }
        Ok(())
    }
}

/// One row of the per-site table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SiteRow<'a> {
    pub name: &'a str,
    pub uce_site: i64,
    pub aln_site: usize,
    pub window_start: usize,
    pub window_stop: usize,
    #[serde(rename = "type")]
    pub metric: &'static str,
    pub value: f64,
    pub plot_mtx: i8,
}

/// Everything produced for one locus
#[derive(Debug, Clone)]
pub struct LocusResult {
    pub name: String,
    pub start: usize,
    pub stop: usize,
    pub metric: MetricKind,
    pub values: Vec<f64>,
    pub best: BestWindow,
    pub block: PartitionBlock,
    /// Set when a finite-score split was collapsed by the raw-sequence check
    pub block_veto: Option<BlockVeto>,
}

impl LocusResult {
    pub fn n_sites(&self) -> usize {
        self.stop - self.start
    }

    /// Per-site rows in site order
    pub fn site_rows(&self) -> impl Iterator<Item = SiteRow<'_>> + '_ {
        let n = self.n_sites();
        let middle = (n / 2) as i64;
        let window = self.best.window;
        let codes = window.plot_codes(n);

        self.values
            .iter()
            .zip(codes)
            .enumerate()
            .map(move |(i, (&value, plot_mtx))| SiteRow {
                name: &self.name,
                uce_site: i as i64 - middle,
                aln_site: self.start + i,
                window_start: window.start,
                window_stop: window.stop,
                metric: self.metric.name(),
                value,
                plot_mtx,
            })
    }
}

/// Evaluate one locus: metric, invariance, candidates, scores, selection and
/// the partition block. Nothing is returned for a structurally invalid locus.
pub fn process_locus(window: &LocusWindow<'_>, config: &SplitConfig) -> SwscResult<LocusResult> {
    window.validate()?;
    let length = window.n_sites();

    let columns = column_counts(window);
    let entropy = MetricKind::Entropy.compute(&columns);
    let invariant = invariant_sites(&entropy);
    let values = match config.metric {
        MetricKind::Entropy => entropy,
        other => other.compute(&columns),
    };

    let candidates = enumerate_windows(length, config.min_window_size)?;
    let best = if is_unsplittable(length, config.min_window_size) {
        BestWindow::too_short(length)
    } else {
        let scores = score_windows(&values, &invariant, &candidates);
        select_best_window(&candidates, &scores, length)
    };

    let (block, block_veto) = partition_block(
        window.name,
        window.start,
        window.stop,
        &best.window,
        &columns,
        config.require_all_states,
    );

    match (best.outcome, block_veto) {
        (WindowOutcome::FullyVetoed, _) => {
            warn!(locus = window.name, length, "every candidate window vetoed; keeping locus whole")
        }
        (_, Some(veto)) => warn!(
            locus = window.name,
            start = best.window.start,
            stop = best.window.stop,
            "split collapsed to a single block: {}",
            veto
        ),
        _ => debug!(
            locus = window.name,
            length,
            candidates = candidates.len(),
            start = best.window.start,
            stop = best.window.stop,
            length_variance = best.window.length_variance(length),
            outcome = ?best.outcome,
            "locus processed"
        ),
    }

    Ok(LocusResult {
        name: window.name.to_string(),
        start: window.start,
        stop: window.stop,
        metric: config.metric,
        values,
        best,
        block,
        block_veto,
    })
}

/// Process every locus in alignment order
pub fn process_alignment(alignment: &Alignment, config: &SplitConfig) -> SwscResult<Vec<LocusResult>> {
    config.validate()?;
    let start = Instant::now();
    let results = alignment
        .windows()
        .map(|w| process_locus(&w, config))
        .collect::<SwscResult<Vec<_>>>()?;
    log_run(&results, start);
    Ok(results)
}

/// Process loci on the rayon pool. Results come back in alignment order.
pub fn process_alignment_parallel(
    alignment: &Alignment,
    config: &SplitConfig,
    pb: &ProgressBar,
) -> SwscResult<Vec<LocusResult>> {
    config.validate()?;
    let start = Instant::now();
    let results = (0..alignment.loci().len())
        .into_par_iter()
        .map(|i| {
            let window = alignment
                .locus_window(i)
                .ok_or(SwscError::EmptyAlignment)?;
            let result = process_locus(&window, config);
            pb.inc(1);
            result
        })
        .collect::<SwscResult<Vec<_>>>()?;
    log_run(&results, start);
    Ok(results)
}

fn log_run(results: &[LocusResult], start: Instant) {
    let summary = RunSummary::from_results(results);
    info!(
        loci = summary.loci,
        split = summary.split,
        sites = summary.sites,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "alignment processed"
    );
}

/// Counts of locus outcomes for a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub loci: usize,
    pub sites: usize,
    pub split: usize,
    pub too_short: usize,
    pub fully_vetoed: usize,
    pub block_vetoed: usize,
}

impl RunSummary {
    pub fn from_results(results: &[LocusResult]) -> Self {
        let mut summary = Self::default();
        for r in results {
            summary.loci += 1;
            summary.sites += r.n_sites();
            match (r.best.outcome, r.block_veto) {
                (WindowOutcome::TooShort, _) => summary.too_short += 1,
                (WindowOutcome::FullyVetoed, _) => summary.fully_vetoed += 1,
                (WindowOutcome::Split, Some(_)) => summary.block_vetoed += 1,
                (WindowOutcome::Split, None) => summary.split += 1,
            }
        }
        summary
    }

    pub fn whole(&self) -> usize {
        self.too_short + self.fully_vetoed + self.block_vetoed
    }
}
