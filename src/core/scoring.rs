// scoring.rs - Within-segment dispersion score for candidate windows

use crate::core::invariance::all_invariant;
use crate::core::windows::Window;

/// Sum of squared deviations from the segment mean.
/// Segments of zero or one site contribute nothing.
pub fn sse(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let mean = values.iter().sum::<f64>() / values.len() as f64;
    values.iter().fold(0.0, |acc, &x| {
        let d = x - mean;
        acc + d * d
    })
}

/// True when the left, core or right segment holds only invariant sites
pub fn is_vetoed(invariant: &[bool], window: &Window) -> bool {
    window
        .segments(invariant.len())
        .into_iter()
        .any(|range| all_invariant(&invariant[range]))
}

/// Total SSE of the three segments, or `+∞` for a vetoed window
pub fn score_window(metric: &[f64], invariant: &[bool], window: &Window) -> f64 {
    debug_assert_eq!(metric.len(), invariant.len());
    if is_vetoed(invariant, window) {
        return f64::INFINITY;
    }
    window
        .segments(metric.len())
        .into_iter()
        .map(|range| sse(&metric[range]))
        .sum()
}

/// Score every candidate, preserving candidate order
pub fn score_windows(metric: &[f64], invariant: &[bool], windows: &[Window]) -> Vec<f64> {
    windows
        .iter()
        .map(|w| score_window(metric, invariant, w))
        .collect()
}
