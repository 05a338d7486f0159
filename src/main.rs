//! arcgen - paginated archive page generation for static-site pipelines.
//!
//! Reads an archive config (TOML) and a JSON file of grouped posts,
//! writes one render record per listing page as JSON. Rendering and
//! file placement stay with the surrounding pipeline.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow, bail};
use clap::{ColorChoice, Parser, Subcommand};

use arcgen::{ArchiveConfig, generate_to_vec, log};

/// arcgen archive page generator CLI
#[derive(Parser, Debug)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    color: ColorChoice,

    /// Config file path (default: arcgen.toml)
    #[arg(short = 'C', long, default_value = "arcgen.toml", value_hint = clap::ValueHint::FilePath)]
    config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short = 'V', long, global = true)]
    verbose: bool,

    /// subcommands
    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate page descriptors from grouped posts
    #[command(visible_alias = "g")]
    Generate {
        /// JSON file mapping group keys to ordered post arrays
        #[arg(value_hint = clap::ValueHint::FilePath)]
        posts: PathBuf,

        /// Pretty-print JSON output
        #[arg(short, long)]
        pretty: bool,

        /// Write output to file instead of stdout
        #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    arcgen::logger::set_verbose(cli.verbose);

    let config = ArchiveConfig::load(&cli.config)
        .with_context(|| format!("failed to load config `{}`", cli.config.display()))?;

    match cli.command {
        Commands::Generate {
            posts,
            pretty,
            output,
        } => run_generate(&config, &posts, pretty, output.as_deref()),
    }
}

/// Generate descriptors and write render records as a JSON array.
fn run_generate(
    config: &ArchiveConfig,
    posts_path: &Path,
    pretty: bool,
    output: Option<&Path>,
) -> Result<()> {
    let groups = load_groups(posts_path)?;
    let group_count = groups.len();

    let pages = generate_to_vec(config, groups)
        .with_context(|| format!("archive `{}` generation failed", config.archive_id))?;

    let records: Vec<_> = pages.iter().map(|p| p.render_record()).collect();
    let json = if pretty {
        serde_json::to_string_pretty(&records)?
    } else {
        serde_json::to_string(&records)?
    };

    match output {
        Some(path) => fs::write(path, json)
            .with_context(|| format!("failed to write `{}`", path.display()))?,
        None => println!("{json}"),
    }

    log!("generate"; "{} page(s) across {} group(s)", pages.len(), group_count);
    Ok(())
}

/// Load grouped posts from a JSON object, preserving group order.
///
/// `serde_json`'s `preserve_order` feature keeps the object's key order,
/// so archives come out in the same order the caller wrote them.
fn load_groups(path: &Path) -> Result<Vec<(String, Vec<serde_json::Value>)>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read posts file `{}`", path.display()))?;
    let value: serde_json::Value = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse `{}` as JSON", path.display()))?;

    let Some(map) = value.as_object() else {
        bail!(
            "`{}` must be a JSON object mapping group keys to post arrays",
            path.display()
        );
    };

    map.iter()
        .map(|(key, items)| {
            items
                .as_array()
                .map(|arr| (key.clone(), arr.clone()))
                .ok_or_else(|| anyhow!("group `{key}` must map to an array of posts"))
        })
        .collect()
}
