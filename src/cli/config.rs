// config.rs - Configuration file support

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    // Input/Output
    pub alignment: Option<String>,
    pub charsets: Option<String>,
    pub output_dir: Option<String>,
    pub name: Option<String>,

    // Core settings
    pub min_window_size: Option<usize>,
    pub metric: Option<String>,
    pub allow_missing_states: Option<bool>,

    // Performance
    pub threads: Option<usize>,

    // Loci filtering
    pub include_loci: Option<String>,
    pub exclude_loci: Option<String>,

    // PartitionFinder settings
    pub branchlengths: Option<String>,
    pub models: Option<String>,
    pub model_selection: Option<String>,
    pub search: Option<String>,

    // Flags
    pub dry_run: Option<bool>,
}

impl Config {
    /// Create a new empty configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| format!("Failed to parse config: {}", e))
    }

    /// Load configuration from TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file '{}': {}", path.display(), e))?;

        let config = Self::from_toml(&content)
            .map_err(|e| format!("{} ('{}')", e, path.display()))?;

        println!("📄 Loaded configuration from: {}", path.display());
        Ok(config)
    }

    /// Save configuration to TOML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), String> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        fs::write(path, content)
            .map_err(|e| format!("Failed to write config file '{}': {}", path.display(), e))?;

        println!("📄 Saved configuration to: {}", path.display());
        Ok(())
    }

    /// Generate a sample configuration file with comments
    pub fn generate_sample() -> String {
        r#"# swsc.toml - Configuration file for swsc
# Command line arguments will override these settings

# =============================================================================
# INPUT/OUTPUT
# =============================================================================

# Aligned FASTA file holding the concatenated loci
alignment = "/path/to/dataset.fasta"

# Charset definitions, e.g. "charset uce-1 = 1-450;" (NEXUS sets block works)
charsets = "/path/to/dataset.charsets"

# Output directory (defaults to the alignment's directory)
output_dir = "swsc_output"

# Dataset name for output files (defaults to the alignment file stem)
# name = "dataset"

# =============================================================================
# CORE SETTINGS
# =============================================================================

# Smallest allowed left flank, core or right flank, in sites
min_window_size = 50

# Site metric: entropy, gc, multi
metric = "entropy"

# Keep splits whose segments lack any of A, C, G, T
# (by default such loci are written as a single block)
allow_missing_states = false

# =============================================================================
# PERFORMANCE
# =============================================================================

# Number of threads (omit for auto-detection)
# threads = 8

# =============================================================================
# LOCI FILTERING
# =============================================================================

# Include only loci matching regex pattern
# include_loci = "^uce-"

# Exclude loci matching regex pattern
# exclude_loci = "_dup$"

# =============================================================================
# PARTITIONFINDER SETTINGS
# =============================================================================

branchlengths = "linked"
models = "GTR+G"
model_selection = "aicc"
search = "rclusterf"

# =============================================================================
# FLAGS
# =============================================================================

# Validate inputs without computation (dry run)
dry_run = false
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_config_parses() {
        let config = Config::from_toml(&Config::generate_sample()).unwrap();
        assert_eq!(config.min_window_size, Some(50));
        assert_eq!(config.metric.as_deref(), Some("entropy"));
        assert_eq!(config.search.as_deref(), Some("rclusterf"));
        assert_eq!(config.allow_missing_states, Some(false));
        assert_eq!(config.threads, None);
    }

    #[test]
    fn test_unknown_value_type_rejected() {
        assert!(Config::from_toml("min_window_size = \"big\"").is_err());
    }

    #[test]
    fn test_round_trip_through_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("swsc.toml");
        let config = Config {
            min_window_size: Some(30),
            metric: Some("gc".to_string()),
            ..Config::new()
        };
        config.to_file(&path).unwrap();
        let loaded = Config::from_file(&path).unwrap();
        assert_eq!(loaded.min_window_size, Some(30));
        assert_eq!(loaded.metric.as_deref(), Some("gc"));
    }
}
