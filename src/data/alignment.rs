// alignment.rs - Concatenated alignment and per-locus windows

use crate::error::{SwscError, SwscResult};
use regex::Regex;

/// Named site range of one locus within the concatenated alignment.
/// `start` is 0-based inclusive, `stop` is exclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocusRange {
    pub name: String,
    pub start: usize,
    pub stop: usize,
}

impl LocusRange {
    pub fn new(name: impl Into<String>, start: usize, stop: usize) -> Self {
        Self {
            name: name.into(),
            start,
            stop,
        }
    }

    pub fn len(&self) -> usize {
        self.stop.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Multiple-sequence alignment with its locus definitions.
///
/// Rows are taxa, columns are aligned sites. Loci are kept in the order they
/// were defined; that order is the processing and output order.
#[derive(Debug, Clone)]
pub struct Alignment {
    taxa: Vec<String>,
    rows: Vec<Vec<u8>>,
    loci: Vec<LocusRange>,
    length: usize,
}

impl Alignment {
    /// Build an alignment, rejecting ragged rows, empty input and loci that
    /// fall outside the aligned columns.
    pub fn new(taxa: Vec<String>, rows: Vec<Vec<u8>>, loci: Vec<LocusRange>) -> SwscResult<Self> {
        if loci.is_empty() {
            return Err(SwscError::EmptyAlignment);
        }
        if rows.is_empty() || taxa.len() != rows.len() {
            return Err(SwscError::EmptyLocus(loci[0].name.clone()));
        }

        let length = rows[0].len();
        for (taxon, row) in taxa.iter().zip(&rows) {
            if row.len() != length {
                return Err(SwscError::RaggedLocus {
                    locus: "<alignment>".to_string(),
                    taxon: taxon.clone(),
                    expected: length,
                    found: row.len(),
                });
            }
        }

        for locus in &loci {
            if locus.is_empty() {
                return Err(SwscError::EmptyLocus(locus.name.clone()));
            }
            if locus.stop > length {
                return Err(SwscError::LocusOutOfBounds {
                    locus: locus.name.clone(),
                    start: locus.start,
                    stop: locus.stop,
                    length,
                });
            }
        }

        Ok(Self {
            taxa,
            rows,
            loci,
            length,
        })
    }

    pub fn taxa(&self) -> &[String] {
        &self.taxa
    }

    pub fn loci(&self) -> &[LocusRange] {
        &self.loci
    }

    pub fn n_taxa(&self) -> usize {
        self.rows.len()
    }

    /// Number of aligned columns in the concatenated alignment
    pub fn length(&self) -> usize {
        self.length
    }

    /// Borrow the sub-matrix of one locus
    pub fn locus_window(&self, index: usize) -> Option<LocusWindow<'_>> {
        let locus = self.loci.get(index)?;
        Some(LocusWindow {
            name: &locus.name,
            start: locus.start,
            stop: locus.stop,
            rows: self
                .rows
                .iter()
                .map(|row| &row[locus.start..locus.stop])
                .collect(),
        })
    }

    /// Iterate over every locus window in definition order
    pub fn windows(&self) -> impl Iterator<Item = LocusWindow<'_>> + '_ {
        (0..self.loci.len()).filter_map(move |i| self.locus_window(i))
    }

    /// Keep only loci accepted by the include/exclude patterns.
    /// Fails if nothing survives the filter.
    pub fn filter_loci(&mut self, include: Option<&Regex>, exclude: Option<&Regex>) -> SwscResult<usize> {
        let before = self.loci.len();
        self.loci.retain(|locus| {
            include.map_or(true, |re| re.is_match(&locus.name))
                && !exclude.is_some_and(|re| re.is_match(&locus.name))
        });
        if self.loci.is_empty() {
            return Err(SwscError::EmptyAlignment);
        }
        Ok(before - self.loci.len())
    }
}

/// Columns `[start, stop)` of every taxon for one locus.
#[derive(Debug, Clone)]
pub struct LocusWindow<'a> {
    pub name: &'a str,
    pub start: usize,
    pub stop: usize,
    rows: Vec<&'a [u8]>,
}

impl<'a> LocusWindow<'a> {
    /// Structural check run before any scoring
    pub fn validate(&self) -> SwscResult<()> {
        let expected = self.n_sites();
        if self.rows.is_empty() || expected == 0 {
            return Err(SwscError::EmptyLocus(self.name.to_string()));
        }
        for (i, row) in self.rows.iter().enumerate() {
            if row.len() != expected {
                return Err(SwscError::RaggedLocus {
                    locus: self.name.to_string(),
                    taxon: format!("row {}", i + 1),
                    expected,
                    found: row.len(),
                });
            }
        }
        Ok(())
    }

    pub fn n_sites(&self) -> usize {
        self.stop - self.start
    }

    pub fn n_taxa(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> &[&'a [u8]] {
        &self.rows
    }

    /// Bases of column `site` across all taxa
    pub fn column(&self, site: usize) -> impl Iterator<Item = u8> + '_ {
        self.rows.iter().map(move |row| row[site])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(seqs: &[&str]) -> Vec<Vec<u8>> {
        seqs.iter().map(|s| s.as_bytes().to_vec()).collect()
    }

    fn taxa(n: usize) -> Vec<String> {
        (1..=n).map(|i| format!("taxon{}", i)).collect()
    }

    #[test]
    fn test_locus_window_slices_rows() {
        let aln = Alignment::new(
            taxa(2),
            rows(&["AAAACCCC", "AAAAGGGG"]),
            vec![LocusRange::new("uce-1", 0, 4), LocusRange::new("uce-2", 4, 8)],
        )
        .unwrap();

        let second = aln.locus_window(1).unwrap();
        assert_eq!(second.name, "uce-2");
        assert_eq!(second.n_sites(), 4);
        assert_eq!(second.column(0).collect::<Vec<_>>(), b"CG".to_vec());
        assert!(aln.locus_window(2).is_none());
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let err = Alignment::new(taxa(2), rows(&["ACGT", "ACG"]), vec![LocusRange::new("uce-1", 0, 3)])
            .unwrap_err();
        assert!(matches!(err, SwscError::RaggedLocus { expected: 4, found: 3, .. }));
    }

    #[test]
    fn test_empty_locus_list_rejected() {
        let err = Alignment::new(taxa(1), rows(&["ACGT"]), vec![]).unwrap_err();
        assert!(matches!(err, SwscError::EmptyAlignment));
    }

    #[test]
    fn test_out_of_bounds_locus_rejected() {
        let err = Alignment::new(taxa(1), rows(&["ACGT"]), vec![LocusRange::new("uce-1", 2, 9)])
            .unwrap_err();
        assert!(matches!(err, SwscError::LocusOutOfBounds { stop: 9, length: 4, .. }));
    }

    #[test]
    fn test_filter_loci() {
        let mut aln = Alignment::new(
            taxa(1),
            rows(&["ACGTACGT"]),
            vec![
                LocusRange::new("uce-1", 0, 2),
                LocusRange::new("uce-2", 2, 4),
                LocusRange::new("exon-1", 4, 8),
            ],
        )
        .unwrap();

        let include = Regex::new("^uce").unwrap();
        let exclude = Regex::new("-2$").unwrap();
        let removed = aln.filter_loci(Some(&include), Some(&exclude)).unwrap();
        assert_eq!(removed, 2);
        assert_eq!(aln.loci()[0].name, "uce-1");

        let none = Regex::new("nothing").unwrap();
        assert!(aln.filter_loci(Some(&none), None).is_err());
    }
}
