use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use ca_app::{AppResult, OpOutcome, apply_script, document_service, load_script};
use ca_geometry::{HitRadii, HitTester};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "ca-cli")]
#[command(
    about = "Circuit annotation CLI - inspect and edit annotation documents",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate document syntax and referential integrity
    Validate {
        /// Path to the annotation JSON file
        document: PathBuf,
    },
    /// List components, ports and connections
    Summary {
        /// Path to the annotation JSON file
        document: PathBuf,
    },
    /// Report the element under a pixel
    Hit {
        /// Path to the annotation JSON file
        document: PathBuf,
        /// X coordinate in image pixels
        #[arg(allow_hyphen_values = true)]
        x: f64,
        /// Y coordinate in image pixels
        #[arg(allow_hyphen_values = true)]
        y: f64,
        /// YAML file overriding hit radii
        #[arg(long)]
        radii: Option<PathBuf>,
    },
    /// Drop dangling endpoints, duplicates and short connections
    Repair {
        /// Path to the annotation JSON file
        document: PathBuf,
        /// Output file (defaults to overwriting the input)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Apply a YAML or JSON edit script
    Apply {
        /// Path to the annotation JSON file
        document: PathBuf,
        /// Path to the edit script
        script: PathBuf,
        /// Output file (defaults to overwriting the input)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> AppResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { document } => cmd_validate(&document),
        Commands::Summary { document } => cmd_summary(&document),
        Commands::Hit {
            document,
            x,
            y,
            radii,
        } => cmd_hit(&document, x, y, radii.as_deref()),
        Commands::Repair { document, output } => {
            cmd_repair(&document, output.as_deref().unwrap_or(&document))
        }
        Commands::Apply {
            document,
            script,
            output,
        } => cmd_apply(&document, &script, output.as_deref().unwrap_or(&document)),
    }
}

fn cmd_validate(document: &Path) -> AppResult<()> {
    println!("Validating document: {}", document.display());
    let graph = document_service::load_graph(document)?;
    document_service::validate_graph(&graph)?;
    println!("✓ Document is valid");
    Ok(())
}

fn cmd_summary(document: &Path) -> AppResult<()> {
    let graph = document_service::load_graph(document)?;
    let summary = document_service::summarize(&graph);

    println!(
        "{} components ({} ports), {} external ports, {} connections ({} endpoints)",
        summary.component_count,
        summary.port_count,
        summary.external_port_count,
        summary.connection_count,
        summary.endpoint_count
    );

    if !graph.components().is_empty() {
        println!("Components (smallest first):");
        for (name, comp) in graph.components_by_area() {
            let ports: Vec<&str> = comp.ports.iter().map(|p| p.name.as_str()).collect();
            println!(
                "  {} [{}] box={:?} area={} ports=[{}]",
                name,
                comp.kind,
                comp.bbox.to_array(),
                comp.bbox.area(),
                ports.join(", ")
            );
        }
    }

    if !graph.external_ports().is_empty() {
        println!("External ports:");
        for (name, port) in graph.external_ports() {
            println!("  {} [{}] at {}", name, port.kind, port.coord);
        }
    }

    if !graph.connections().is_empty() {
        println!("Connections:");
        for (i, conn) in graph.connections().iter().enumerate() {
            let endpoints: Vec<String> = conn.endpoints.iter().map(|e| e.to_string()).collect();
            let centre = graph
                .connection_centroid(i)
                .map(|c| c.to_string())
                .unwrap_or_else(|| "-".to_string());
            println!("  #{} centre={} {}", i, centre, endpoints.join(" + "));
        }
    }
    Ok(())
}

fn cmd_hit(document: &Path, x: f64, y: f64, radii: Option<&Path>) -> AppResult<()> {
    let graph = document_service::load_graph(document)?;
    let radii = match radii {
        Some(path) => document_service::load_radii(path)?,
        None => HitRadii::default(),
    };
    tracing::debug!(?radii, x, y, "hit test");
    match HitTester::with_radii(&graph, radii).hit_test(x, y) {
        Some(hit) => println!("{}", hit),
        None => println!("none"),
    }
    Ok(())
}

fn cmd_repair(document: &Path, output: &Path) -> AppResult<()> {
    let mut graph = document_service::load_graph(document)?;
    let dropped = graph.repair();
    document_service::save_graph(output, &graph)?;
    println!(
        "✓ Dropped {} endpoint(s); wrote {}",
        dropped,
        output.display()
    );
    Ok(())
}

fn cmd_apply(document: &Path, script: &Path, output: &Path) -> AppResult<()> {
    let mut graph = document_service::load_graph(document)?;
    let ops = load_script(script)?;
    let outcomes = apply_script(&mut graph, &ops);

    let mut rejected = 0;
    for (i, outcome) in outcomes.iter().enumerate() {
        match outcome {
            OpOutcome::Applied => println!("  {:>3} applied", i),
            OpOutcome::NoOp => println!("  {:>3} no change", i),
            OpOutcome::Rejected { reason } => {
                rejected += 1;
                println!("  {:>3} rejected: {}", i, reason);
            }
        }
    }

    document_service::save_graph(output, &graph)?;
    println!(
        "✓ {} op(s), {} rejected; wrote {}",
        outcomes.len(),
        rejected,
        output.display()
    );
    Ok(())
}
