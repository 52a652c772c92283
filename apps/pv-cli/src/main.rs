use std::path::PathBuf;

use clap::{Parser, Subcommand};
use pv_app::{AppError, AppResult, Instance, Settings, fit_subgraph, run_instance};
use pv_graph::{DEFAULT_GRAPH_NAME, EdgeKind, Size};
use pv_source::{FileSource, GraphSource};
use tracing::Level;

#[derive(Parser)]
#[command(name = "pv-cli")]
#[command(about = "pipeviz - ETL pipeline dependency diagrams", long_about = None)]
struct Cli {
    /// Path to the settings YAML file
    #[arg(short, long, default_value = "pipeviz.yaml")]
    config: PathBuf,

    /// Log debug detail
    #[arg(short, long)]
    verbose: bool,

    /// Override the instance's subgraph size budget, as WIDTHxHEIGHT (e.g. 12x8)
    #[arg(long, value_name = "WxH")]
    max_size: Option<Size>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Draw the whole graph, its critical path and every node's subgraph
    Render {
        /// Instance alias from the settings file
        alias: String,
    },
    /// Print a summary of an instance's graph without drawing anything
    Inspect {
        /// Instance alias from the settings file
        alias: String,
        /// Also show the subgraph around this node id
        #[arg(short, long)]
        node: Option<String>,
        /// Subgraph radius (defaults to the instance setting)
        #[arg(short, long)]
        radius: Option<usize>,
    },
}

fn main() -> AppResult<()> {
    let cli = Cli::parse();
    let settings = Settings::load(&cli.config)?;

    let level = if cli.verbose || settings.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    tracing_subscriber::fmt().with_max_level(level).init();

    match cli.command {
        Commands::Render { alias } => cmd_render(&resolve_instance(&settings, &alias, cli.max_size)?),
        Commands::Inspect {
            alias,
            node,
            radius,
        } => cmd_inspect(
            &resolve_instance(&settings, &alias, cli.max_size)?,
            node.as_deref(),
            radius,
        ),
    }
}

/// The named instance, with the command-line size budget applied if given.
fn resolve_instance(settings: &Settings, alias: &str, max_size: Option<Size>) -> AppResult<Instance> {
    let mut instance = settings.instance(alias)?.clone();
    if let Some(max) = max_size {
        instance.max_size = max;
    }
    Ok(instance)
}

fn cmd_render(instance: &Instance) -> AppResult<()> {
    println!(
        "Rendering '{}' into {}",
        instance.alias,
        instance.output_folder.display()
    );
    let report = run_instance(instance)?;
    println!("Rendered {} diagrams", report.rendered);
    if report.failed > 0 {
        println!("Failed to render {} diagrams:", report.failed);
        for name in &report.failures {
            println!("  {}", name);
        }
    }
    Ok(())
}

fn cmd_inspect(instance: &Instance, node: Option<&str>, radius: Option<usize>) -> AppResult<()> {
    let graph = FileSource::new(&instance.source).load_graph(DEFAULT_GRAPH_NAME)?;
    println!("Graph: {}", graph.name());
    let processes = graph
        .nodes()
        .filter(|(_, n)| n.object_type.is_process())
        .count();
    println!("  Nodes: {} ({} processes)", graph.node_count(), processes);
    println!("  Edges: {}", graph.edge_count());
    println!("  Size: {}", graph.size()?);

    let path = graph.critical_path()?;
    println!("Critical path (total weight {}):", path.total_weight());
    for (_, n) in path.nodes() {
        println!(
            "  {} [{}] weight {}",
            n.label(),
            n.object_type.description(),
            n.weight
        );
    }

    let Some(key) = node else {
        return Ok(());
    };
    let centre = graph
        .find(key)
        .ok_or_else(|| AppError::InvalidInput(format!("Node '{}' not in graph", key)))?;
    let radius = radius.unwrap_or(instance.subgraph_radius);
    let sub = fit_subgraph(&graph, centre, radius, instance.max_size()?)?;

    println!("Subgraph: {}", sub.name());
    println!("  Nodes: {}", sub.node_count());
    println!("  Size: {}", sub.size()?);
    for edge in sub.edges() {
        let kind = match edge.kind() {
            EdgeKind::Direct => "",
            EdgeKind::Connection => " (connection)",
        };
        println!("  {}{}", edge.display(&sub), kind);
    }
    Ok(())
}
