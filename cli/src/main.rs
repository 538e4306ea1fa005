//! figmap CLI - design document to Figma-schema converter

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;

use figmap::{ConvertOptions, ConvertStats, Document, Figmap, JsonFormat, Shape};

#[derive(Parser)]
#[command(name = "figmap")]
#[command(version)]
#[command(about = "Convert design documents to the Figma node schema", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a whole document to a file response
    File {
        /// Input design document (JSON)
        #[arg(value_name = "DOC")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        #[command(flatten)]
        convert: ConvertArgs,
    },

    /// Convert individual pages or shapes by id
    Node {
        /// Input design document (JSON)
        #[arg(value_name = "DOC")]
        input: PathBuf,

        /// Node id (repeatable)
        #[arg(long = "id", value_name = "ID", required = true)]
        ids: Vec<String>,

        /// Restrict lookup to one page (single id only)
        #[arg(long, value_name = "PAGE")]
        page: Option<String>,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        #[command(flatten)]
        convert: ConvertArgs,
    },

    /// Show document information
    Info {
        /// Input design document (JSON)
        #[arg(value_name = "DOC")]
        input: PathBuf,
    },

    /// Show version information
    Version,
}

#[derive(clap::Args)]
struct ConvertArgs {
    /// Maximum depth of children below each requested node
    #[arg(long, value_name = "N", value_parser = parse_depth)]
    depth: Option<u32>,

    /// Emit vector geometry (fillGeometry)
    #[arg(long)]
    geometry: bool,

    /// Output compact JSON
    #[arg(long)]
    compact: bool,

    /// Skip hidden shapes
    #[arg(long)]
    hide_hidden: bool,
}

impl ConvertArgs {
    fn options(&self) -> ConvertOptions {
        ConvertOptions::new()
            .with_max_depth(self.depth)
            .with_geometry(self.geometry)
            .with_hidden(!self.hide_hidden)
    }

    fn format(&self) -> JsonFormat {
        if self.compact {
            JsonFormat::Compact
        } else {
            JsonFormat::Pretty
        }
    }
}

fn parse_depth(value: &str) -> Result<u32, figmap::Error> {
    value
        .trim()
        .parse::<u32>()
        .map_err(|_| figmap::Error::InvalidDepth(value.to_string()))
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::File {
            input,
            output,
            convert,
        }) => cmd_file(&input, output.as_deref(), &convert),
        Some(Commands::Node {
            input,
            ids,
            page,
            output,
            convert,
        }) => cmd_node(&input, &ids, page.as_deref(), output.as_deref(), &convert),
        Some(Commands::Info { input }) => cmd_info(&input),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            println!("{}", "Usage: figmap <COMMAND> <DOC>".yellow());
            println!("       figmap --help for more information");
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn cmd_file(
    input: &Path,
    output: Option<&Path>,
    args: &ConvertArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    log::debug!("Converting {} with {:?}", input.display(), args.options());
    let result = Figmap::new().with_options(args.options()).parse(input)?;
    let converted = result.convert();
    let json = figmap::render::to_json(&converted.value, args.format())?;

    write_output(output, &json)?;
    if output.is_some() {
        print_stats(&converted.stats);
    }
    Ok(())
}

fn cmd_node(
    input: &Path,
    ids: &[String],
    page: Option<&str>,
    output: Option<&Path>,
    args: &ConvertArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let result = Figmap::new().with_options(args.options()).parse(input)?;

    let json = match (page, ids) {
        (Some(page), [id]) => {
            let node = result.node(Some(page), id)?;
            figmap::render::to_json(&node, args.format())?
        }
        (Some(_), _) => return Err("--page takes exactly one --id".into()),
        (None, _) => result.to_nodes_json(ids, args.format())?,
    };

    write_output(output, &json)
}

fn write_output(output: Option<&Path>, content: &str) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(path) = output {
        fs::write(path, content)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", content);
    }
    Ok(())
}

fn print_stats(stats: &ConvertStats) {
    println!("  {} {} pages", "├─".dimmed(), stats.page_count);
    println!("  {} {} nodes", "├─".dimmed(), stats.node_count);
    if stats.truncated_count > 0 {
        println!("  {} {} truncated", "├─".dimmed(), stats.truncated_count);
    }
    if stats.hidden_count > 0 {
        println!("  {} {} hidden skipped", "├─".dimmed(), stats.hidden_count);
    }
    println!("  {} {} unknown skipped", "└─".dimmed(), stats.skipped_count);
}

fn cmd_info(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let doc = figmap::parse_file(input)?;

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {}", "Name".bold(), doc.name);
    if let Some(ref version) = doc.version {
        println!("{}: {}", "Version".bold(), version);
    }
    if let Some(ref modified) = doc.last_modified {
        println!("{}: {}", "Modified".bold(), modified.to_rfc3339());
    }
    println!("{}: {}", "Pages".bold(), doc.page_count());

    for page in &doc.pages {
        println!(
            "  {} {} ({} shapes)",
            "•".dimmed(),
            page.name,
            page.total_shapes()
        );
    }

    println!();
    println!("{}", "Content Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    let (kinds, chars) = tally(&doc);
    println!("{}: {}", "Shapes".bold(), doc.total_shapes());
    for (kind, count) in &kinds {
        println!("  {} {}: {}", "•".dimmed(), kind, count);
    }
    println!("{}: {}", "Characters".bold(), chars);

    Ok(())
}

/// Shape counts per kind and the total number of text characters.
fn tally(doc: &Document) -> (BTreeMap<&'static str, usize>, usize) {
    fn walk(shape: &Shape, kinds: &mut BTreeMap<&'static str, usize>, chars: &mut usize) {
        *kinds.entry(shape.kind.as_str()).or_default() += 1;
        if let Some(text) = shape.text() {
            *chars += text.plain_text().chars().count();
        }
        for child in &shape.children {
            walk(child, kinds, chars);
        }
    }

    let mut kinds = BTreeMap::new();
    let mut chars = 0;
    for shape in doc.pages.iter().flat_map(|page| &page.shapes) {
        walk(shape, &mut kinds, &mut chars);
    }
    (kinds, chars)
}

fn cmd_version() {
    println!("{} {}", "figmap".green().bold(), env!("CARGO_PKG_VERSION"));
    println!(
        "{} {}",
        "schema version".dimmed(),
        figmap::convert::SCHEMA_VERSION
    );
}
