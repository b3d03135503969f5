// fasta.rs - Aligned FASTA loader

use crate::data::alignment::{Alignment, LocusRange};
use crate::error::{SwscError, SwscResult};
use bio::io::fasta;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Read aligned records as (taxon, sequence) pairs in file order
pub fn read_aligned_records<R: Read>(reader: R) -> SwscResult<(Vec<String>, Vec<Vec<u8>>)> {
    let reader = fasta::Reader::new(BufReader::new(reader));
    let mut taxa = Vec::new();
    let mut rows = Vec::new();

    for record_result in reader.records() {
        let record = record_result.map_err(|e| SwscError::Fasta(e.to_string()))?;
        record
            .check()
            .map_err(|e| SwscError::Fasta(format!("record '{}': {}", record.id(), e)))?;
        taxa.push(record.id().to_string());
        rows.push(record.seq().to_vec());
    }

    if rows.is_empty() {
        return Err(SwscError::Fasta("no sequences found".to_string()));
    }
    Ok((taxa, rows))
}

/// Load an aligned FASTA file and attach locus definitions
pub fn load_alignment(fasta_path: &Path, loci: Vec<LocusRange>) -> SwscResult<Alignment> {
    let file = File::open(fasta_path).map_err(|e| {
        SwscError::Fasta(format!("failed to open {}: {}", fasta_path.display(), e))
    })?;
    let (taxa, rows) = read_aligned_records(file)?;
    Alignment::new(taxa, rows, loci)
}
