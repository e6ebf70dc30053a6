//! scrambler: obfuscate a program tree supplied as JSON.
//!
//! Reads a tree from a file or stdin, runs the rewrite rules, and writes the
//! result as JSON (for the external printer) or as a Python-flavoured sketch.

use anyhow::{Context, Result};
use clap::Parser;
use scrambler::render;
use scrambler::{
    obfuscate, parse_keep_patterns, Node, OverflowPolicy, RewriteConfig, RewriteStats, RuleSet,
};
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "scrambler", about = "Obfuscate a program tree")]
struct Cli {
    /// Input tree (JSON). Reads stdin when omitted.
    #[arg(short = 'i', long)]
    input: Option<PathBuf>,

    /// Output file. Writes stdout when omitted.
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Output format: json (default) or source
    #[arg(short = 'f', long, default_value = "json")]
    format: String,

    /// Seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,

    /// Never rename names matching these patterns (comma-separated regexes)
    #[arg(short = 'I', long = "keep", default_value = "")]
    keep: String,

    /// Rules to skip (comma-separated): rename-functions, shuffle-bodies,
    /// dead-code, rename-identifiers, conditions, loops, strings
    #[arg(long, default_value = "")]
    skip: String,

    /// Code point offset for string literals
    #[arg(long, default_value_t = 3)]
    shift: u32,

    /// Wrap shifted characters around the Unicode range instead of failing
    #[arg(long)]
    wrap: bool,

    /// Length of generated names
    #[arg(long, default_value_t = 10)]
    name_length: usize,

    /// Print rewrite statistics to stderr
    #[arg(long)]
    stats: bool,

    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG overrides.
    #[arg(short = 'v', action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn rewrite_config(&self) -> Result<RewriteConfig> {
        let skip: Vec<&str> = self.skip.split(',').collect();
        Ok(RewriteConfig {
            rules: RuleSet::from_skip_list(&skip)?,
            seed: self.seed,
            name_length: self.name_length,
            shift: self.shift,
            overflow: if self.wrap {
                OverflowPolicy::Wrap
            } else {
                OverflowPolicy::Reject
            },
            keep: parse_keep_patterns(&self.keep)?,
        })
    }
}

/// Parse, rewrite, and render one tree.
fn scramble(source: &str, config: &RewriteConfig, format: &str) -> Result<(String, RewriteStats)> {
    let renderer = render::create_renderer(format)?;
    let tree = Node::from_json(source)?;
    let out = obfuscate(tree, config)?;
    Ok((renderer.render(&out.tree)?, out.stats))
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let source = match &cli.input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut input = String::new();
            io::stdin()
                .read_to_string(&mut input)
                .context("Failed to read stdin")?;
            input
        }
    };

    let config = cli.rewrite_config()?;
    let (result, stats) = scramble(&source, &config, &cli.format)?;
    info!(nodes = stats.nodes_visited, "rewrote tree");

    match &cli.output {
        Some(path) => fs::write(path, &result)
            .with_context(|| format!("Failed to write {}", path.display()))?,
        None => print!("{result}"),
    }

    if cli.stats {
        eprintln!("{stats}");
    }

    Ok(())
}
