// mod.rs - Output writers: per-site CSV and PartitionFinder configuration

use crate::core::{LocusResult, MetricKind};
use crate::error::SwscResult;
use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;

/// Column order of the per-site table
pub const SITE_CSV_HEADER: [&str; 8] = [
    "name",
    "uce_site",
    "aln_site",
    "window_start",
    "window_stop",
    "type",
    "value",
    "plot_mtx",
];

/// Ensure parent directory exists before creating file
fn ensure_parent_dir(file_path: &Path) -> SwscResult<()> {
    if let Some(parent) = file_path.parent() {
        if !parent.as_os_str().is_empty() {
            create_dir_all(parent)?;
        }
    }
    Ok(())
}

/// `{dir}/{name}.csv`
pub fn site_csv_path(dir: &Path, dataset_name: &str) -> PathBuf {
    dir.join(format!("{}.csv", dataset_name))
}

/// `{dir}/{name}_{metric}_partition_finder.cfg`
pub fn partition_config_path(dir: &Path, dataset_name: &str, metric: MetricKind) -> PathBuf {
    dir.join(format!("{}_{}_partition_finder.cfg", dataset_name, metric.name()))
}

/// Write the header and one row per site of every locus, in locus order
pub fn write_site_csv<W: Write>(writer: W, results: &[LocusResult]) -> SwscResult<()> {
    let mut wtr = csv::WriterBuilder::new().has_headers(false).from_writer(writer);
    wtr.write_record(SITE_CSV_HEADER)?;
    for result in results {
        for row in result.site_rows() {
            wtr.serialize(row)?;
        }
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_site_csv_file(path: &Path, results: &[LocusResult]) -> SwscResult<()> {
    ensure_parent_dir(path)?;
    let file = File::create(path)?;
    write_site_csv(BufWriter::new(file), results)?;
    info!(path = %path.display(), "site table written");
    Ok(())
}

/// Search settings written around the data blocks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartitionFinderSettings {
    pub dataset_name: String,
    pub branchlengths: String,
    pub models: String,
    pub model_selection: String,
    pub search: String,
}

impl PartitionFinderSettings {
    pub fn new(dataset_name: &str) -> Self {
        Self {
            dataset_name: dataset_name.to_string(),
            branchlengths: "linked".to_string(),
            models: "GTR+G".to_string(),
            model_selection: "aicc".to_string(),
            search: "rclusterf".to_string(),
        }
    }

    pub fn start_block(&self) -> String {
        format!(
            "## ALIGNMENT FILE ##\n\
             alignment = {}.phy;\n\n\
             ## BRANCHLENGTHS: linked | unlinked ##\n\
             branchlengths = {};\n\n\
             ## MODELS OF EVOLUTION: all | allx | mrbayes | beast | gamma | gammai <list> ##\n\
             models = {};\n\n\
             # MODEL SELECTION: AIC | AICc | BIC #\n\
             model_selection = {};\n\n\
             ## DATA BLOCKS: see manual for how to define ##\n\
             [data_blocks]\n",
            self.dataset_name, self.branchlengths, self.models, self.model_selection
        )
    }

    pub fn end_block(&self) -> String {
        format!(
            "\n## SCHEMES, search: all | user | greedy | rcluster | hcluster | kmeans ##\n\
             [schemes]\n\
             search = {};\n\n",
            self.search
        )
    }
}

/// Write a complete configuration: start block, one block set per locus, end block
pub fn write_partition_config<W: Write>(
    mut writer: W,
    settings: &PartitionFinderSettings,
    results: &[LocusResult],
) -> SwscResult<()> {
    writer.write_all(settings.start_block().as_bytes())?;
    for result in results {
        write!(writer, "{}", result.block)?;
    }
    writer.write_all(settings.end_block().as_bytes())?;
    writer.flush()?;
    Ok(())
}

pub fn write_partition_config_file(
    path: &Path,
    settings: &PartitionFinderSettings,
    results: &[LocusResult],
) -> SwscResult<()> {
    ensure_parent_dir(path)?;
    let file = File::create(path)?;
    write_partition_config(BufWriter::new(file), settings, results)?;
    info!(path = %path.display(), "partition configuration written");
    Ok(())
}
