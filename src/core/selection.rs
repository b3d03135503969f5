// selection.rs - Pick the minimum-score window with a balance tie-break

use crate::core::windows::Window;

/// How the best window of a locus came about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowOutcome {
    /// A real three-way split with a finite score
    Split,
    /// Locus shorter than three minimum-size segments; never scored
    TooShort,
    /// Every candidate was vetoed; the locus is kept whole
    FullyVetoed,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BestWindow {
    pub window: Window,
    /// `None` when no scoring took place
    pub score: Option<f64>,
    pub outcome: WindowOutcome,
}

impl BestWindow {
    pub fn too_short(locus_length: usize) -> Self {
        Self {
            window: Window::whole(locus_length),
            score: None,
            outcome: WindowOutcome::TooShort,
        }
    }

    pub fn is_split(&self) -> bool {
        self.outcome == WindowOutcome::Split
    }
}

/// Select among scored candidates.
///
/// Takes every window reaching the minimum score and keeps the one whose
/// left/core/right lengths have the smallest variance; the earliest candidate
/// wins an exact tie. If the minimum is `+∞` the whole locus is returned.
pub fn select_best_window(windows: &[Window], scores: &[f64], locus_length: usize) -> BestWindow {
    debug_assert_eq!(windows.len(), scores.len());

    let min_score = scores.iter().copied().fold(f64::INFINITY, f64::min);
    if min_score == f64::INFINITY {
        return BestWindow {
            window: Window::whole(locus_length),
            score: Some(f64::INFINITY),
            outcome: WindowOutcome::FullyVetoed,
        };
    }

    let mut best: Option<(Window, u128)> = None;
    for (window, _) in windows.iter().zip(scores).filter(|&(_, &s)| s == min_score) {
        let spread = window.length_spread(locus_length);
        match best {
            Some((_, best_spread)) if best_spread <= spread => {}
            _ => best = Some((*window, spread)),
        }
    }

    match best {
        Some((window, _)) => BestWindow {
            window,
            score: Some(min_score),
            outcome: WindowOutcome::Split,
        },
        None => BestWindow {
            window: Window::whole(locus_length),
            score: Some(f64::INFINITY),
            outcome: WindowOutcome::FullyVetoed,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimum_score_wins() {
        let windows = [Window::new(10, 20), Window::new(10, 30), Window::new(20, 30)];
        let best = select_best_window(&windows, &[3.0, 1.5, 2.0], 40);
        assert_eq!(best.window, Window::new(10, 30));
        assert_eq!(best.score, Some(1.5));
        assert!(best.is_split());
    }

    #[test]
    fn test_tie_broken_by_length_variance() {
        // lengths 10/40/50 versus 33/34/33, both perfect scores
        let windows = [Window::new(10, 50), Window::new(33, 67)];
        let best = select_best_window(&windows, &[0.0, 0.0], 100);
        assert_eq!(best.window, Window::new(33, 67));

        let reversed = [Window::new(33, 67), Window::new(10, 50)];
        let best = select_best_window(&reversed, &[0.0, 0.0], 100);
        assert_eq!(best.window, Window::new(33, 67));
    }

    #[test]
    fn test_equal_variance_tie_keeps_first() {
        let windows = [Window::new(10, 50), Window::new(50, 90)];
        let best = select_best_window(&windows, &[1.0, 1.0], 100);
        assert_eq!(best.window, Window::new(10, 50));
    }

    #[test]
    fn test_non_minimal_balanced_window_ignored() {
        let windows = [Window::new(10, 50), Window::new(33, 67)];
        let best = select_best_window(&windows, &[0.0, 0.1], 100);
        assert_eq!(best.window, Window::new(10, 50));
    }

    #[test]
    fn test_fully_vetoed_returns_whole_locus() {
        let windows = [Window::new(10, 50), Window::new(33, 67)];
        let best = select_best_window(&windows, &[f64::INFINITY, f64::INFINITY], 100);
        assert_eq!(best.window, Window::whole(100));
        assert_eq!(best.outcome, WindowOutcome::FullyVetoed);
    }

    #[test]
    fn test_no_candidates_returns_whole_locus() {
        let best = select_best_window(&[], &[], 12);
        assert_eq!(best.window, Window::whole(12));
        assert!(!best.is_split());
    }
}
