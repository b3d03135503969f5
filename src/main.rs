// main.rs - CLI entry point

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Instant;
use swsc::cli::{validate_args, Args, Config};
use swsc::core::RunSummary;
use swsc::output::{
    partition_config_path, site_csv_path, write_partition_config_file, write_site_csv_file,
};
use swsc::prelude::*;
use tracing::Level;

fn main() {
    if let Err(e) = run_main() {
        eprintln!("❌ ERROR: {}", e);
        std::process::exit(1);
    }
}

fn run_main() -> Result<(), String> {
    let mut args: Args = argh::from_env();

    // Handle generate config first
    if args.generate_config {
        let sample_config = Config::generate_sample();
        println!("{}", sample_config);
        println!("\n💡 Save this content to a .toml file and use --config /path/to/config.toml");
        return Ok(());
    }

    // Load configuration file if specified
    if let Some(config_path) = args.config.clone() {
        args = args.with_config_file(&config_path)?;
    }

    tracing_subscriber::fmt()
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::INFO })
        .with_writer(std::io::stderr)
        .init();

    let validation = validate_args(&args)?;

    println!("🚀 swsc v{}", env!("CARGO_PKG_VERSION"));
    println!("🕐 Started: {}", chrono::Local::now().format("%Y-%m-%d %H:%M:%S"));

    // Configure thread pool
    if let Some(n) = args.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(n)
            .build_global()
            .map_err(|e| format!("Failed to configure thread pool: {}", e))?;
        println!("🧵 Threads: {}", n);
    } else {
        println!("🧵 Threads: {} (auto-detected)", rayon::current_num_threads());
    }

    let total_start = Instant::now();

    // Load loci and alignment
    println!("🧬 Loading charsets from: {}", validation.charsets_path.display());
    let loci = load_charsets(&validation.charsets_path).map_err(|e| e.to_string())?;
    println!("🧬 Loading alignment from: {}", validation.alignment_path.display());
    let mut alignment =
        load_alignment(&validation.alignment_path, loci).map_err(|e| e.to_string())?;

    if validation.loci_include_regex.is_some() || validation.loci_exclude_regex.is_some() {
        let removed = alignment
            .filter_loci(
                validation.loci_include_regex.as_ref(),
                validation.loci_exclude_regex.as_ref(),
            )
            .map_err(|e| format!("Locus filters removed every locus ({})", e))?;
        println!("🔍 Locus filters removed {} loci", removed);
    }

    println!(
        "✅ Alignment loaded: {} taxa × {} sites, {} loci",
        alignment.n_taxa(),
        alignment.length(),
        alignment.loci().len()
    );

    if args.dry_run {
        println!("✅ Dry run completed successfully");
        return Ok(());
    }

    let config = validation.split_config;
    println!(
        "🎯 Metric: {} ({}), minimum window size: {}",
        config.metric,
        config.metric.description(),
        config.min_window_size
    );

    let pb = ProgressBar::new(alignment.loci().len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} loci ({percent}%) ETA: {eta}")
            .map_err(|e| format!("Invalid progress template: {}", e))?
            .progress_chars("#>-"),
    );
    let results =
        process_alignment_parallel(&alignment, &config, &pb).map_err(|e| e.to_string())?;
    pb.finish_with_message("✅ Loci processed!");

    // Write outputs
    let csv_path = site_csv_path(&validation.output_dir, &validation.dataset_name);
    write_site_csv_file(&csv_path, &results).map_err(|e| e.to_string())?;
    println!("✅ Site table written to: {}", csv_path.display());

    let cfg_path =
        partition_config_path(&validation.output_dir, &validation.dataset_name, config.metric);
    write_partition_config_file(&cfg_path, &validation.pfinder, &results)
        .map_err(|e| e.to_string())?;
    println!("✅ PartitionFinder configuration written to: {}", cfg_path.display());

    let summary = RunSummary::from_results(&results);
    println!("\n📈 === SUMMARY ===");
    println!("  • Loci processed: {} ({} sites)", summary.loci, summary.sites);
    println!("  • Split into left/core/right: {}", summary.split);
    println!("  • Kept whole: {}", summary.whole());
    println!("      - too short to split: {}", summary.too_short);
    println!("      - every window vetoed: {}", summary.fully_vetoed);
    println!("      - segment check failed: {}", summary.block_vetoed);
    println!(
        "\n✅ Done in {:.2}s ({})",
        total_start.elapsed().as_secs_f64(),
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );

    Ok(())
}
