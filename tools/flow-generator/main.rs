use clap::Parser;
use nagare::prelude::*;
use nagare::snapshot;
use rand::Rng;
use std::fs;

/// A CLI tool to generate random flows for exercising the editor core.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the generated flow JSON to
    #[arg(short, long, default_value = "generated_flow.json")]
    output: String,

    /// Number of message nodes to generate
    #[arg(short, long, default_value_t = 8)]
    nodes: usize,

    /// Leave the nodes unconnected, producing a flow that fails validation
    #[arg(long)]
    disconnected: bool,
}

fn main() -> nagare::prelude::Result<()> {
    let cli = Cli::parse();
    let mut rng = rand::rng();

    println!(
        "Generating a {} flow with {} node(s)...",
        if cli.disconnected { "disconnected" } else { "chained" },
        cli.nodes
    );

    let mut editor = FlowEditor::new();
    let mut ids: Vec<NodeId> = Vec::with_capacity(cli.nodes);
    for _ in 0..cli.nodes {
        // Same placement window the editor's palette uses for new nodes.
        let position = Position::new(rng.random_range(0.0..400.0), rng.random_range(0.0..400.0));
        ids.push(editor.add_node(NodeKind::Text, position));
    }

    if !cli.disconnected {
        for pair in ids.windows(2) {
            editor.on_connect_attempt(ProposedEdge::between(pair[0].clone(), pair[1].clone()))?;
        }
        println!("-> Chained {} edge(s).", ids.len().saturating_sub(1));
    }

    // Disconnected flows can't pass request_save, so serialize directly.
    let flow = snapshot::serialize(editor.graph(), &SystemClock);
    fs::write(&cli.output, flow.to_json()?)?;

    println!("Successfully generated and saved flow to '{}'", cli.output);
    Ok(())
}
