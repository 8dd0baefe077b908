use anyhow::{Context, Result};
use clap::{Args as ClapArgs, Parser, Subcommand};
use starmap_core::GraphSnapshot;
use starmap_graph::{EngineConfig, VisualModel, build_visual_model_with};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "starmap", author, version, about = "Render risk graphs into visual models")]
struct Cli {
    /// Log debug output from the engine
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Build the visual model and write it as JSON.
    Render {
        #[command(flatten)]
        input: InputArgs,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },

    /// Build the visual model and print a short summary.
    Inspect {
        #[command(flatten)]
        input: InputArgs,
    },
}

#[derive(ClapArgs, Debug)]
struct InputArgs {
    /// Graph snapshot JSON ({"nodes": [...], "edges": [...]})
    #[arg(short, long)]
    input: PathBuf,

    /// Engine config JSON; flags below override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Viewport width
    #[arg(long)]
    width: Option<f64>,

    /// Viewport height
    #[arg(long)]
    height: Option<f64>,

    /// Number of background stars
    #[arg(long)]
    stars: Option<usize>,
}

impl InputArgs {
    fn engine_config(&self) -> Result<EngineConfig> {
        let mut config = match &self.config {
            Some(path) => EngineConfig::load(path)
                .with_context(|| format!("Failed to load engine config {:?}", path))?,
            None => EngineConfig::default(),
        };
        if let Some(width) = self.width {
            config.viewport.width = width;
        }
        if let Some(height) = self.height {
            config.viewport.height = height;
        }
        if let Some(stars) = self.stars {
            config.star_count = stars;
        }
        Ok(config)
    }

    fn build(&self) -> Result<VisualModel> {
        let config = self.engine_config()?;
        let snapshot = load_snapshot(&self.input)?;
        tracing::info!(
            "Loaded {} nodes and {} edges from {:?}",
            snapshot.nodes.len(),
            snapshot.edges.len(),
            self.input
        );
        Ok(build_visual_model_with(
            &snapshot.nodes,
            &snapshot.edges,
            &config,
        ))
    }
}

fn load_snapshot(path: &Path) -> Result<GraphSnapshot> {
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read graph {:?}", path))?;
    serde_json::from_str(&content).with_context(|| format!("Failed to parse graph {:?}", path))
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn render(input: &InputArgs, output: Option<&Path>, pretty: bool) -> Result<()> {
    let model = input.build()?;
    let json = if pretty {
        serde_json::to_string_pretty(&model)?
    } else {
        serde_json::to_string(&model)?
    };

    match output {
        Some(path) => {
            fs::write(path, json).with_context(|| format!("Failed to write {:?}", path))?;
            tracing::info!("Wrote visual model to {:?}", path);
        }
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{}", json)?;
        }
    }
    Ok(())
}

fn inspect(input: &InputArgs) -> Result<()> {
    let model = input.build()?;
    println!("{}", model.summary());
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match &cli.command {
        Commands::Render {
            input,
            output,
            pretty,
        } => render(input, output.as_deref(), *pretty),
        Commands::Inspect { input } => inspect(input),
    }
}
