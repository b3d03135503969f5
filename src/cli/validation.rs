// validation.rs - Input validation utilities

use crate::cli::args::Args;
use crate::core::{MetricKind, SplitConfig};
use crate::output::PartitionFinderSettings;
use regex::Regex;
use std::path::{Path, PathBuf};
use std::str::FromStr;

pub struct ValidationResult {
    pub alignment_path: PathBuf,
    pub charsets_path: PathBuf,
    pub output_dir: PathBuf,
    pub dataset_name: String,
    pub split_config: SplitConfig,
    pub pfinder: PartitionFinderSettings,
    pub loci_include_regex: Option<Regex>,
    pub loci_exclude_regex: Option<Regex>,
}

/// Validate all command line arguments
pub fn validate_args(args: &Args) -> Result<ValidationResult, String> {
    let alignment = args.alignment.as_ref().ok_or("--alignment is required")?;
    let charsets = args.charsets.as_ref().ok_or("--charsets is required")?;
    let alignment_path = PathBuf::from(alignment);
    let charsets_path = PathBuf::from(charsets);

    if !alignment_path.is_file() {
        return Err(format!("Alignment file not found: {}", alignment_path.display()));
    }
    if !charsets_path.is_file() {
        return Err(format!("Charsets file not found: {}", charsets_path.display()));
    }

    // Validate core settings
    let metric = MetricKind::from_str(&args.metric).map_err(|e| e.to_string())?;
    if args.min_window_size == 0 {
        return Err("Minimum window size must be at least 1".to_string());
    }
    if args.threads == Some(0) {
        return Err("Thread count must be at least 1".to_string());
    }

    let model_selection = args.model_selection.to_lowercase();
    if !matches!(model_selection.as_str(), "aic" | "aicc" | "bic") {
        return Err(format!(
            "Invalid model selection '{}'. Use: aic, aicc, bic",
            args.model_selection
        ));
    }
    if !matches!(args.branchlengths.as_str(), "linked" | "unlinked") {
        return Err(format!(
            "Invalid branchlengths '{}'. Use: linked, unlinked",
            args.branchlengths
        ));
    }

    let dataset_name = match &args.name {
        Some(name) => name.clone(),
        None => dataset_name_from_path(&alignment_path)?,
    };

    let output_dir = match &args.output_dir {
        Some(dir) => PathBuf::from(dir),
        None => alignment_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(".")),
    };

    // Compile regex patterns
    let loci_include_regex = if let Some(pattern) = &args.include_loci {
        Some(Regex::new(pattern).map_err(|e| format!("Invalid include_loci regex: {}", e))?)
    } else {
        None
    };

    let loci_exclude_regex = if let Some(pattern) = &args.exclude_loci {
        Some(Regex::new(pattern).map_err(|e| format!("Invalid exclude_loci regex: {}", e))?)
    } else {
        None
    };

    let pfinder = PartitionFinderSettings {
        dataset_name: dataset_name.clone(),
        branchlengths: args.branchlengths.clone(),
        models: args.models.clone(),
        model_selection,
        search: args.search.clone(),
    };

    Ok(ValidationResult {
        alignment_path,
        charsets_path,
        output_dir,
        dataset_name,
        split_config: SplitConfig {
            min_window_size: args.min_window_size,
            metric,
            require_all_states: !args.allow_missing_states,
        },
        pfinder,
        loci_include_regex,
        loci_exclude_regex,
    })
}

/// Alignment file stem, e.g. `data/birds.fasta` -> `birds`
fn dataset_name_from_path(path: &Path) -> Result<String, String> {
    path.file_stem()
        .and_then(|s| s.to_str())
        .map(|s| s.to_string())
        .ok_or_else(|| format!("Cannot derive dataset name from '{}'", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use argh::FromArgs;
    use std::fs;

    fn write_inputs(dir: &Path) -> (String, String) {
        let aln = dir.join("birds.fasta");
        let sets = dir.join("birds.charsets");
        fs::write(&aln, ">a\nACGT\n>b\nACGA\n").unwrap();
        fs::write(&sets, "charset uce-1 = 1-4;\n").unwrap();
        (
            aln.to_string_lossy().into_owned(),
            sets.to_string_lossy().into_owned(),
        )
    }

    fn parse(args: &[&str]) -> Args {
        Args::from_args(&["swsc"], args).unwrap()
    }

    #[test]
    fn test_defaults_resolved() {
        let tmp = tempfile::tempdir().unwrap();
        let (aln, sets) = write_inputs(tmp.path());
        let result = validate_args(&parse(&["--alignment", &aln, "--charsets", &sets])).unwrap();

        assert_eq!(result.dataset_name, "birds");
        assert_eq!(result.output_dir, tmp.path());
        assert_eq!(result.split_config, SplitConfig::default());
        assert!(result.split_config.require_all_states);
        assert_eq!(result.pfinder, PartitionFinderSettings::new("birds"));
    }

    #[test]
    fn test_allow_missing_states_disables_block_check() {
        let tmp = tempfile::tempdir().unwrap();
        let (aln, sets) = write_inputs(tmp.path());
        let args = parse(&["--alignment", &aln, "--charsets", &sets, "--allow-missing-states"]);
        let result = validate_args(&args).unwrap();
        assert!(!result.split_config.require_all_states);
    }

    #[test]
    fn test_invalid_settings_rejected() {
        let tmp = tempfile::tempdir().unwrap();
        let (aln, sets) = write_inputs(tmp.path());
        let base = ["--alignment", aln.as_str(), "--charsets", sets.as_str()];

        for extra in [
            &["--metric", "variance"][..],
            &["--min-window-size", "0"][..],
            &["--threads", "0"][..],
            &["--model-selection", "lrt"][..],
            &["--include-loci", "("][..],
        ] {
            let mut argv = base.to_vec();
            argv.extend_from_slice(extra);
            assert!(validate_args(&parse(&argv)).is_err(), "{:?} accepted", extra);
        }
    }

    #[test]
    fn test_missing_inputs_rejected() {
        assert!(validate_args(&parse(&[])).is_err());
        assert!(validate_args(&parse(&["--alignment", "/nonexistent.fasta", "--charsets", "/x"])).is_err());
    }
}
