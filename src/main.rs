use itertools::Itertools;
use nagare::prelude::*;
use std::env;
use std::fs;

fn main() {
    // Parse command line arguments
    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: cargo run -- <path/to/flow.json>");
        std::process::exit(1);
    }

    let flow_path = &args[1];
    println!("Loading flow from: {}", flow_path);

    let flow_json = match fs::read_to_string(flow_path) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Failed to read flow file '{}': {}", flow_path, e);
            std::process::exit(1);
        }
    };

    let snapshot = match FlowSnapshot::from_json(&flow_json) {
        Ok(snapshot) => snapshot,
        Err(e) => {
            eprintln!("Failed to parse flow file '{}': {}", flow_path, e);
            std::process::exit(1);
        }
    };

    println!(
        "Loaded flow: {} node(s), {} edge(s), exported at {}",
        snapshot.nodes.len(),
        snapshot.edges.len(),
        snapshot.timestamp
    );

    // Rebuild the graph and run the structural validation
    let graph = match snapshot.hydrate() {
        Ok(graph) => graph,
        Err(e) => {
            eprintln!("Flow is not hydratable: {}", e);
            std::process::exit(1);
        }
    };

    match validate(&graph) {
        Ok(()) => println!("Flow is well-formed: a single entry point."),
        Err(e) => {
            eprintln!("Flow is invalid ({}): {}", e.reason(), e);
            eprintln!(
                "  -> Offending nodes: {}",
                e.offending_node_ids().iter().join(", ")
            );
            std::process::exit(1);
        }
    }
}
