use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use cuboid::{Figure, OutputFormat};
use std::io::{self, BufWriter};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "hamster")]
#[command(about = "Print the cuboid hamster as paste-ready triangle data", long_about = None)]
struct Cli {
    /// Built-in figure table to generate
    #[arg(short, long, value_enum, default_value_t = FigureArg::Hamster)]
    figure: FigureArg,

    /// Load the figure from a TOML file instead of a built-in table
    #[arg(short, long, value_name = "PATH", conflicts_with = "figure")]
    config: Option<PathBuf>,

    /// Output layout
    #[arg(long, value_enum, default_value_t = FormatArg::Triangles)]
    format: FormatArg,

    /// Reject full boxes with a collapsed axis before printing
    #[arg(long)]
    strict: bool,

    /// Log debug output to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum FigureArg {
    /// Colored hamster with half-box ears
    Hamster,
    /// First draft, all boxes fully triangulated
    Prototype,
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    /// `Triangle({...}),` initializers, blank line between boxes
    Triangles,
    /// One `X.0f,Y.0f,Z.0f,` line per vertex
    Coords,
    /// Per-vertex color buffer, one line per box
    Colors,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Triangles => OutputFormat::Triangles,
            FormatArg::Coords => OutputFormat::Coords,
            FormatArg::Colors => OutputFormat::Colors,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // stdout carries generated source, so logs go to stderr
    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .init();

    let figure = match &cli.config {
        Some(path) => Figure::load(path)
            .with_context(|| format!("Failed to load figure from {}", path.display()))?,
        None => match cli.figure {
            FigureArg::Hamster => Figure::hamster(),
            FigureArg::Prototype => Figure::prototype(),
        },
    };

    if cli.strict {
        figure.validate().context("Figure failed validation")?;
    }

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let triangle_count = OutputFormat::from(cli.format)
        .write_all(&mut out, figure.groups())
        .context("Failed to write output")?;

    tracing::info!(
        "Wrote {} triangles from {} boxes",
        triangle_count,
        figure.box_count()
    );

    Ok(())
}
