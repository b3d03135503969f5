// invariance.rs - Invariant-site flags and the all-invariant segment predicate

/// Flag each site whose entropy is exactly zero
pub fn invariant_sites(entropies: &[f64]) -> Vec<bool> {
    entropies.iter().map(|&e| e == 0.0).collect()
}

/// A range is all-invariant when every flag in it is set.
/// An empty range is vacuously all-invariant.
pub fn all_invariant(flags: &[bool]) -> bool {
    flags.iter().filter(|&&f| f).count() == flags.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invariant_sites_exact_zero() {
        let flags = invariant_sites(&[0.0, 1e-300, 2.0, 0.0]);
        assert_eq!(flags, vec![true, false, false, true]);
    }

    #[test]
    fn test_all_invariant() {
        assert!(all_invariant(&[true, true, true]));
        assert!(!all_invariant(&[true, false, true]));
        assert!(!all_invariant(&[false]));
    }

    #[test]
    fn test_empty_range_is_all_invariant() {
        assert!(all_invariant(&[]));
    }
}
