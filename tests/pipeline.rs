// End-to-end runs: FASTA + charsets in, site table + PartitionFinder config out

use indicatif::ProgressBar;
use std::fs;
use std::path::Path;
use swsc::output::{
    partition_config_path, site_csv_path, write_partition_config_file, write_site_csv_file,
};
use swsc::prelude::*;

const TAXA: usize = 6;

/// Locus 1: 90 sites, mildly variable flanks around a highly variable 40..=50.
/// Locus 2: 30 sites, too short to split at minimum window 20.
/// Locus 3: 60 sites, all constant.
/// Locus 4: as locus 1, but the flanks only ever show A and C.
fn write_dataset(dir: &Path) -> (std::path::PathBuf, std::path::PathBuf) {
    let mut rows = vec![String::new(); TAXA];
    let mut push = |col: &str| {
        for (row, base) in rows.iter_mut().zip(col.chars()) {
            row.push(base);
        }
    };
    let flanks = ["AAAAAC", "AAAAAG", "AAAAAT"];
    for i in 0..90 {
        push(if (40..=50).contains(&i) { "ACGTAC" } else { flanks[i % 3] });
    }
    for _ in 0..30 {
        push("ACGTTT");
    }
    for _ in 0..60 {
        push("GGGGGG");
    }
    for i in 0..90 {
        push(if (40..=50).contains(&i) { "ACGTAC" } else { "AAAAAC" });
    }

    let fasta: String = rows
        .iter()
        .enumerate()
        .map(|(i, seq)| format!(">taxon{}\n{}\n", i + 1, seq))
        .collect();
    let charsets = "#NEXUS\nbegin sets;\n  charset uce-1 = 1-90;\n  charset uce-2 = 91-120;\n  charset uce-3 = 121-180;\n  charset uce-4 = 181-270;\nend;\n";

    let aln_path = dir.join("dataset.fasta");
    let sets_path = dir.join("dataset.charsets");
    fs::write(&aln_path, fasta).unwrap();
    fs::write(&sets_path, charsets).unwrap();
    (aln_path, sets_path)
}

fn run(dir: &Path, out: &Path) -> (String, String) {
    let (aln_path, sets_path) = write_dataset(dir);
    let loci = load_charsets(&sets_path).unwrap();
    let alignment = load_alignment(&aln_path, loci).unwrap();
    let config = SplitConfig {
        min_window_size: 20,
        ..SplitConfig::default()
    };
    let results = process_alignment_parallel(&alignment, &config, &ProgressBar::hidden()).unwrap();

    let csv_path = site_csv_path(out, "dataset");
    let cfg_path = partition_config_path(out, "dataset", config.metric);
    write_site_csv_file(&csv_path, &results).unwrap();
    write_partition_config_file(&cfg_path, &PartitionFinderSettings::new("dataset"), &results)
        .unwrap();

    (
        fs::read_to_string(csv_path).unwrap(),
        fs::read_to_string(cfg_path).unwrap(),
    )
}

#[test]
fn test_outputs_describe_every_locus_in_order() {
    let tmp = tempfile::tempdir().unwrap();
    let (csv, cfg) = run(tmp.path(), &tmp.path().join("out"));

    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 1 + 90 + 30 + 60 + 90);
    assert!(lines[1].starts_with("uce-1,-45,0,"));
    assert!(lines[91].starts_with("uce-2,-15,90,0,30,entropy,"));
    assert!(lines[121].starts_with("uce-3,-30,120,0,60,entropy,0.0,"));

    let blocks: Vec<&str> = cfg
        .lines()
        .filter(|l| l.starts_with("uce-"))
        .collect();
    assert_eq!(blocks.len(), 3 + 1 + 1 + 1);
    assert!(blocks[0].starts_with("uce-1_left = 1-"));
    assert!(blocks[1].starts_with("uce-1_core = "));
    assert!(blocks[2].starts_with("uce-1_right = ") && blocks[2].ends_with("-90;"));
    assert_eq!(blocks[3], "uce-2_all = 91-120;");
    assert_eq!(blocks[4], "uce-3_all = 121-180;");
    assert_eq!(blocks[5], "uce-4_all = 181-270;");

    // uce-4 keeps its chosen window in the site table
    let uce4: Vec<&str> = lines[1..].iter().copied().filter(|l| l.starts_with("uce-4,")).collect();
    assert_eq!(uce4.len(), 90);
    assert!(uce4.iter().any(|l| l.ends_with(",-1")));
}

#[test]
fn test_core_plot_codes_follow_window() {
    let tmp = tempfile::tempdir().unwrap();
    let (csv, _) = run(tmp.path(), tmp.path());

    let mut reader = csv::Reader::from_reader(csv.as_bytes());
    let records: Vec<csv::StringRecord> = reader
        .records()
        .map(|r| r.unwrap())
        .filter(|r| &r[0] == "uce-1")
        .collect();
    assert_eq!(records.len(), 90);

    let start: usize = records[0][3].parse().unwrap();
    let stop: usize = records[0][4].parse().unwrap();
    assert!(start <= 40 && stop >= 51);
    for (i, rec) in records.iter().enumerate() {
        let code: i8 = rec[7].parse().unwrap();
        let expected = if i < start { -1 } else if i < stop { 0 } else { 1 };
        assert_eq!(code, expected, "site {}", i);
    }
}

#[test]
fn test_reruns_are_byte_identical() {
    let tmp = tempfile::tempdir().unwrap();
    let first = run(tmp.path(), &tmp.path().join("a"));
    let second = run(tmp.path(), &tmp.path().join("b"));
    assert_eq!(first, second);
}

#[test]
fn test_ragged_fasta_fails_fast() {
    let tmp = tempfile::tempdir().unwrap();
    let aln_path = tmp.path().join("bad.fasta");
    fs::write(&aln_path, ">a\nACGTACGT\n>b\nACGT\n").unwrap();
    let loci = vec![LocusRange::new("uce-1", 0, 4)];
    assert!(matches!(
        load_alignment(&aln_path, loci),
        Err(SwscError::RaggedLocus { .. })
    ));
}
