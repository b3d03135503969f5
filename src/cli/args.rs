// args.rs - Command line arguments definition

use argh::FromArgs;

#[derive(FromArgs)]
/// swsc - Split UCE loci into core and flanking partitions
pub struct Args {
    /// path to the aligned FASTA file
    #[argh(option)]
    pub alignment: Option<String>,

    /// path to a file with charset definitions (NEXUS sets block or PartitionFinder style)
    #[argh(option)]
    pub charsets: Option<String>,

    /// output directory (default: directory of the alignment)
    #[argh(option)]
    pub output_dir: Option<String>,

    /// dataset name used for output files (default: alignment file stem)
    #[argh(option)]
    pub name: Option<String>,

    /// smallest allowed flank or core segment, in sites (default: 50)
    #[argh(option, default = "50")]
    pub min_window_size: usize,

    /// site metric: entropy, gc, multi (default: entropy)
    #[argh(option, default = "String::from(\"entropy\")")]
    pub metric: String,

    /// number of threads (default: auto-detect)
    #[argh(option)]
    pub threads: Option<usize>,

    /// include only loci matching regex pattern
    #[argh(option)]
    pub include_loci: Option<String>,

    /// exclude loci matching regex pattern
    #[argh(option)]
    pub exclude_loci: Option<String>,

    /// keep splits even when a segment lacks one of A, C, G, T
    #[argh(switch)]
    pub allow_missing_states: bool,

    /// branch lengths for PartitionFinder: linked, unlinked (default: linked)
    #[argh(option, default = "String::from(\"linked\")")]
    pub branchlengths: String,

    /// substitution models for PartitionFinder (default: GTR+G)
    #[argh(option, default = "String::from(\"GTR+G\")")]
    pub models: String,

    /// model selection criterion for PartitionFinder: aic, aicc, bic (default: aicc)
    #[argh(option, default = "String::from(\"aicc\")")]
    pub model_selection: String,

    /// scheme search algorithm for PartitionFinder (default: rclusterf)
    #[argh(option, default = "String::from(\"rclusterf\")")]
    pub search: String,

    /// path to TOML configuration file
    #[argh(option)]
    pub config: Option<String>,

    /// generate sample configuration file and exit
    #[argh(switch)]
    pub generate_config: bool,

    /// validate inputs without computation (dry run)
    #[argh(switch)]
    pub dry_run: bool,

    /// log per-locus decisions
    #[argh(switch)]
    pub verbose: bool,
}
