mod output;
mod search;
mod tree;
mod utils;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use crate::tree::SuffixTree;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sfx")]
#[command(about = "Online suffix-tree substring search engine")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Emit machine-readable JSON instead of colored text
    #[arg(long, global = true)]
    json: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Check whether a probe string occurs in a text
    Contains {
        /// The text to index
        text: String,
        /// The probe to look up
        probe: String,
        /// Treat TEXT as a path and read the file instead
        #[arg(short, long)]
        file: bool,
    },
    /// List every substring of the shortest of three texts present in the other two
    Common {
        /// Exactly three texts; the shortest becomes the probe
        #[arg(num_args = 3)]
        texts: Vec<String>,
        /// Treat the texts as paths and read the files instead
        #[arg(short, long)]
        file: bool,
    },
    /// Print the tree's edges in breadth-first order (debugging aid)
    Print {
        /// The text to index
        text: String,
        /// Treat TEXT as a path and read the file instead
        #[arg(short, long)]
        file: bool,
    },
    /// Show tree shape statistics
    Stats {
        /// The text to index
        text: String,
        /// Treat TEXT as a path and read the file instead
        #[arg(short, long)]
        file: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let color = !cli.no_color;

    match cli.command {
        Commands::Contains { text, probe, file } => {
            let text = load_text(&text, file)?;
            let tree = build_tree(&text)?;
            let present = tree.contains_str(&probe);
            if cli.json {
                println!(
                    "{}",
                    serde_json::json!({ "probe": probe, "present": present })
                );
            } else {
                output::print_contains(&probe, present, color)?;
            }
        }
        Commands::Common { texts, file } => {
            let loaded: Vec<String> = texts
                .iter()
                .map(|t| load_text(t, file))
                .collect::<Result<_>>()?;
            let (probe_idx, matches) = search::common_substrings_of_three([
                loaded[0].as_bytes(),
                loaded[1].as_bytes(),
                loaded[2].as_bytes(),
            ]);
            if cli.json {
                for m in &matches {
                    println!(
                        "{}",
                        serde_json::json!({
                            "probe_index": probe_idx,
                            "start": m.start,
                            "end": m.end,
                            "substring": m.rendered(),
                            "len": m.len(),
                        })
                    );
                }
            } else {
                output::print_common_substrings(&matches, color)?;
            }
        }
        Commands::Print { text, file } => {
            let text = load_text(&text, file)?;
            let tree = build_tree(&text)?;
            let edges = tree.edges();
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&edges)?);
            } else {
                output::print_edges(&edges)?;
            }
        }
        Commands::Stats { text, file } => {
            let text = load_text(&text, file)?;
            let tree = build_tree(&text)?;
            let stats = tree.stats();
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                output::print_stats(&stats)?;
            }
        }
    }

    Ok(())
}

fn load_text(arg: &str, from_file: bool) -> Result<String> {
    if from_file {
        let path = PathBuf::from(arg);
        std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))
    } else {
        Ok(arg.to_string())
    }
}

/// Build a tree over chars. Large inputs get a progress bar when the
/// `progress` feature is enabled.
fn build_tree(text: &str) -> Result<SuffixTree> {
    #[cfg(feature = "progress")]
    {
        const PROGRESS_THRESHOLD: usize = 1 << 20;
        if text.len() >= PROGRESS_THRESHOLD {
            use crate::tree::{Symbol, TreeBuilder};
            use indicatif::{ProgressBar, ProgressStyle};

            let bar = ProgressBar::new(text.len() as u64);
            bar.set_style(
                ProgressStyle::default_bar()
                    .template("{bar:40} {pos}/{len} symbols ({eta})")
                    .unwrap_or_else(|_| ProgressStyle::default_bar()),
            );
            let mut builder = TreeBuilder::with_capacity(text.len());
            for c in text.chars() {
                builder.push(c as Symbol)?;
                bar.inc(c.len_utf8() as u64);
            }
            bar.finish_and_clear();
            return Ok(builder.finish());
        }
    }
    Ok(SuffixTree::from_text(text))
}
