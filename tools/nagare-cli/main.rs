use clap::{Parser, ValueEnum};
use itertools::Itertools;
use nagare::prelude::*;
use std::fs;
use std::time::Instant;

/// Inspect and validate exported flow files from the command line.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to an exported flow snapshot (JSON)
    flow: String,

    /// Re-export the flow to this path after a successful validation
    #[arg(short, long)]
    output: Option<String>,

    /// Format for the re-exported flow
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,

    /// Print every node and edge instead of just the summary
    #[arg(long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Pretty-printed JSON, the editor's wire shape
    Json,
    /// Compact binary artifact
    Binary,
}

fn main() -> nagare::prelude::Result<()> {
    let cli = Cli::parse();

    let flow_json = fs::read_to_string(&cli.flow)?;
    let snapshot = FlowSnapshot::from_json(&flow_json)?;

    println!(
        "Flow '{}': {} node(s), {} edge(s), exported at {}",
        cli.flow,
        snapshot.nodes.len(),
        snapshot.edges.len(),
        snapshot.timestamp
    );

    if cli.verbose {
        for node in &snapshot.nodes {
            println!(
                "  node {} ({:?}) at ({:.0}, {:.0})",
                node.id, node.kind, node.position.x, node.position.y
            );
        }
        for edge in &snapshot.edges {
            println!(
                "  edge {}: {} -> {}",
                edge.id, edge.source.node_id, edge.target.node_id
            );
        }
    }

    let start = Instant::now();
    let graph = snapshot.hydrate()?;
    match validate(&graph) {
        Ok(()) => println!("Validation OK ({:.2?})", start.elapsed()),
        Err(e) => {
            eprintln!("Validation failed ({}): {}", e.reason(), e);
            eprintln!(
                "  -> Offending nodes: {}",
                e.offending_node_ids().iter().join(", ")
            );
            std::process::exit(1);
        }
    }

    if let Some(output) = &cli.output {
        match cli.format {
            OutputFormat::Json => fs::write(output, snapshot.to_json()?)?,
            OutputFormat::Binary => fs::write(output, snapshot.to_bytes()?)?,
        }
        println!("Re-exported flow to '{}'", output);
    }

    Ok(())
}
