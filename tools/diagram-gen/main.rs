use clap::Parser;
use rand::Rng;
use rand::rngs::ThreadRng;
use serde_json::{Value, json};
use std::fs;

/// A CLI tool to generate random flow diagrams for flowjobs
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the generated JSON file to
    #[arg(short, long, default_value = "generated_diagram.json")]
    output: String,

    /// The number of nodes (buckets) to generate
    #[arg(long, default_value_t = 8)]
    nodes: usize,

    /// The number of edges (jobs) to generate
    #[arg(long, default_value_t = 12)]
    edges: usize,

    /// Fraction of records written with a blank or missing required field
    #[arg(long, default_value_t = 0.0)]
    invalid_ratio: f64,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut rng = rand::rng();

    if cli.edges > 0 && cli.nodes == 0 {
        exit_with_error("--edges needs at least one node to connect (--nodes >= 1)");
    }
    if !(0.0..=1.0).contains(&cli.invalid_ratio) {
        exit_with_error(&format!(
            "--invalid-ratio ({}) must be between 0.0 and 1.0",
            cli.invalid_ratio
        ));
    }

    println!(
        "Generating diagram ({} nodes, {} edges, invalid ratio {})...",
        cli.nodes, cli.edges, cli.invalid_ratio
    );

    let nodes = generate_nodes(&mut rng, cli.nodes, cli.invalid_ratio);
    let edges = generate_edges(&mut rng, cli.nodes, cli.edges, cli.invalid_ratio);

    let diagram = json!({ "nodes": nodes, "edges": edges });
    fs::write(&cli.output, serde_json::to_string_pretty(&diagram)?)?;

    println!(
        "Successfully generated and saved diagram to '{}'",
        cli.output
    );

    Ok(())
}

/// Generates editor-style nodes with positions, some of them broken.
fn generate_nodes(rng: &mut ThreadRng, count: usize, invalid_ratio: f64) -> Vec<Value> {
    let nodes: Vec<Value> = (0..count)
        .map(|i| {
            let id = node_id(i);
            let position = json!({
                "x": rng.random_range(0.0..1200.0),
                "y": rng.random_range(0.0..800.0),
            });
            if rng.random_bool(invalid_ratio) {
                // Either no label at all or a blank one.
                if rng.random_bool(0.5) {
                    json!({ "id": id, "position": position, "data": {} })
                } else {
                    json!({ "id": id, "position": position, "data": { "label": "" } })
                }
            } else {
                json!({
                    "id": id,
                    "type": "default",
                    "position": position,
                    "data": { "label": format!("bucket-{:03}", i) },
                })
            }
        })
        .collect();
    println!("-> Generated {} node(s).", nodes.len());
    nodes
}

/// Generates edges between random pairs of generated nodes.
fn generate_edges(
    rng: &mut ThreadRng,
    node_count: usize,
    count: usize,
    invalid_ratio: f64,
) -> Vec<Value> {
    let edges: Vec<Value> = (0..count)
        .map(|i| {
            let id = format!("e{}", i + 1);
            let source = node_id(rng.random_range(0..node_count));
            let target = node_id(rng.random_range(0..node_count));
            if rng.random_bool(invalid_ratio) {
                match rng.random_range(0..3) {
                    0 => json!({ "id": id, "target": target }),
                    1 => json!({ "id": id, "source": source, "target": null }),
                    _ => json!({ "id": "", "source": source, "target": target }),
                }
            } else {
                json!({ "id": id, "source": source, "target": target })
            }
        })
        .collect();
    println!("-> Generated {} edge(s).", edges.len());
    edges
}

fn node_id(index: usize) -> String {
    format!("{:04}", index + 1)
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("Error: {}", message);
    std::process::exit(1);
}
