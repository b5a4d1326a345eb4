//! SizeTree — outline and size breakdown for a directory or a JSON tree.
//!
//! Thin binary entry point. All logic lives in `sizetree-core`.

use anyhow::{Context, Result};
use clap::Parser;
use sizetree_core::model::{format_count, format_size, Node};
use sizetree_core::visitor::{
    run_visitor, CategoryTally, CsvExporter, LargestLeaves, NodeCounter, PrintStyle, Printer,
    SizeCalculator, DEFAULT_TOP_N,
};
use sizetree_core::{load_tree, scan_directory, ScanOptions};
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use tracing::level_filters::LevelFilter;

/// Outline and size breakdown for a directory or a JSON tree description
#[derive(Parser, Debug)]
#[command(name = "sizetree")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory to scan, or a `.json` tree description
    path: PathBuf,

    /// Print the indented outline
    #[arg(short, long)]
    print: bool,

    /// Show leaf sizes as KB/MB/GB in the outline
    #[arg(short = 'H', long)]
    human: bool,

    /// How many of the largest leaves to list (0 to skip)
    #[arg(short, long, default_value_t = DEFAULT_TOP_N)]
    top: usize,

    /// Show the per-category breakdown
    #[arg(short, long)]
    categories: bool,

    /// Write every node as a CSV record to this file
    #[arg(long, value_name = "FILE")]
    csv: Option<PathBuf>,

    /// Deepest directory level to scan
    #[arg(long)]
    max_depth: Option<usize>,

    /// Skip dot-files and dot-directories while scanning
    #[arg(long)]
    skip_hidden: bool,

    /// Follow symbolic links while scanning
    #[arg(long)]
    follow_links: bool,

    /// Directory-reading threads (default: one per CPU)
    #[arg(long)]
    threads: Option<usize>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    tracing::info!("SizeTree starting");

    let root = load_root(&cli)?;

    if cli.print {
        let style = if cli.human {
            PrintStyle::Human
        } else {
            PrintStyle::Bytes
        };
        print!("{}", run_visitor(&root, Printer::with_style(style)));
        println!();
    }

    let total = run_visitor(&root, SizeCalculator::new());
    let counts = run_visitor(&root, NodeCounter::new());
    println!("Total size: {} ({} bytes)", format_size(total), format_count(total));
    println!(
        "Nodes:      {} leaves, {} composites, depth {}",
        format_count(counts.leaves),
        format_count(counts.composites),
        counts.max_depth
    );

    if cli.top > 0 {
        println!("\nLargest leaves:");
        for leaf in run_visitor(&root, LargestLeaves::new(cli.top)) {
            println!("  {:>10}  {}", format_size(leaf.size), leaf.path);
        }
    }

    if cli.categories {
        println!("\nBy category:");
        for stats in run_visitor(&root, CategoryTally::new()) {
            println!(
                "  {:<12} {:>10}  {} leaves",
                stats.category.label(),
                format_size(stats.total_size),
                format_count(stats.leaf_count)
            );
        }
    }

    if let Some(csv_path) = &cli.csv {
        export_csv(&root, csv_path)?;
        println!("\nWrote {}", csv_path.display());
    }

    Ok(())
}

/// Build the tree from a JSON description or a directory scan.
fn load_root(cli: &Cli) -> Result<Node> {
    let is_json = cli
        .path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    if is_json {
        return load_tree(&cli.path)
            .with_context(|| format!("loading tree description {}", cli.path.display()));
    }

    let options = ScanOptions {
        follow_links: cli.follow_links,
        skip_hidden: cli.skip_hidden,
        max_depth: cli.max_depth,
        threads: cli.threads,
    };
    let outcome = scan_directory(&cli.path, &options)
        .with_context(|| format!("scanning {}", cli.path.display()))?;
    tracing::info!(
        files = outcome.files,
        dirs = outcome.dirs,
        errors = outcome.error_count,
        "scanned in {:?}",
        outcome.duration
    );
    if outcome.error_count > 0 {
        eprintln!(
            "warning: {} entries could not be read and were skipped",
            format_count(outcome.error_count)
        );
    }
    Ok(outcome.root)
}

fn export_csv(root: &Node, path: &Path) -> Result<()> {
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    run_visitor(root, CsvExporter::new(BufWriter::new(file)))
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

fn setup_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .init();
}
