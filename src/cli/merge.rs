// merge.rs - Merge configuration file with CLI arguments

use crate::cli::{Args, Config};

impl Args {
    /// Merge with configuration from file
    /// CLI arguments take precedence over config file values
    pub fn merge_with_config(mut self, config: Config) -> Self {
        // Input/Output
        if self.alignment.is_none() {
            self.alignment = config.alignment;
        }
        if self.charsets.is_none() {
            self.charsets = config.charsets;
        }
        if self.output_dir.is_none() {
            self.output_dir = config.output_dir;
        }
        if self.name.is_none() {
            self.name = config.name;
        }

        // Core settings (only override defaults, not explicit CLI values)
        if let Some(size) = config.min_window_size.filter(|_| self.min_window_size == 50) {
            self.min_window_size = size;
        }
        if let Some(metric) = config.metric.filter(|_| self.metric == "entropy") {
            self.metric = metric;
        }
        if !self.allow_missing_states && config.allow_missing_states.unwrap_or(false) {
            self.allow_missing_states = true;
        }

        // Performance
        if self.threads.is_none() {
            self.threads = config.threads;
        }

        // Loci filtering
        if self.include_loci.is_none() {
            self.include_loci = config.include_loci;
        }
        if self.exclude_loci.is_none() {
            self.exclude_loci = config.exclude_loci;
        }

        // PartitionFinder settings
        if let Some(v) = config.branchlengths.filter(|_| self.branchlengths == "linked") {
            self.branchlengths = v;
        }
        if let Some(v) = config.models.filter(|_| self.models == "GTR+G") {
            self.models = v;
        }
        if let Some(v) = config.model_selection.filter(|_| self.model_selection == "aicc") {
            self.model_selection = v;
        }
        if let Some(v) = config.search.filter(|_| self.search == "rclusterf") {
            self.search = v;
        }

        // Flags
        if !self.dry_run && config.dry_run.unwrap_or(false) {
            self.dry_run = true;
        }

        self
    }

    /// Load configuration and merge with CLI args
    pub fn with_config_file(self, config_path: &str) -> Result<Self, String> {
        let config = Config::from_file(config_path)?;
        Ok(self.merge_with_config(config))
    }
}
