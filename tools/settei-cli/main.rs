use clap::{Parser, Subcommand};
use itertools::Itertools;
use settei::overrides::decode_override_id;
use settei::prelude::*;
use settei::schema::NoTypeInformation;
use std::fs;
use std::sync::Arc;
use std::time::Instant;

/// Node schema and input override tooling
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Apply an override file to a graph and print (or write) the updated graph
    Apply {
        /// Path to the definition set JSON file
        definitions_path: String,
        /// Path to the graph JSON file
        graph_path: String,
        /// Path to the override file
        overrides_path: String,
        /// Write the updated graph here instead of printing it
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Print the effective condition of every input of a schema
    Conditions {
        /// Path to the definition set JSON file
        definitions_path: String,
        /// The schema to inspect
        schema_id: String,
        /// Optional graph JSON file; with `--node`, reports which inputs are active
        #[arg(short, long, requires = "node")]
        graph: Option<String>,
        /// Id of the node in `--graph` whose input values are used
        #[arg(short, long)]
        node: Option<String>,
    },
    /// Build the override id of an input of a node
    Encode { node_id: String, input_id: u32 },
    /// Split an override id into its node id and input id
    Decode { override_id: String },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Apply {
            definitions_path,
            graph_path,
            overrides_path,
            output,
        } => run_apply(&definitions_path, &graph_path, &overrides_path, output),
        Command::Conditions {
            definitions_path,
            schema_id,
            graph,
            node,
        } => run_conditions(&definitions_path, &schema_id, graph, node),
        Command::Encode { node_id, input_id } => {
            let id = InputOverrideId::encode(&NodeId::from(node_id), InputId::new(input_id))
                .unwrap_or_else(|e| exit_with_error(&e.to_string()));
            println!("{}", id);
        }
        Command::Decode { override_id } => {
            let (node_id, input_id) = decode_override_id(&override_id)
                .unwrap_or_else(|e| exit_with_error(&e.to_string()));
            println!("node:  {}", node_id);
            println!("input: {}", input_id);
        }
    }
}

fn load_definitions(path: &str) -> (CategoryIndex, SchemaMap) {
    DefinitionSet::from_file(path)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to load definitions: {}", e)))
        .into_parts()
}

fn load_graph(path: &str) -> Graph {
    Graph::from_file(path).unwrap_or_else(|e| exit_with_error(&e.to_string()))
}

fn run_apply(definitions_path: &str, graph_path: &str, overrides_path: &str, output: Option<String>) {
    let start = Instant::now();
    let (_, schemas) = load_definitions(definitions_path);
    let mut graph = load_graph(graph_path);
    let overrides = OverrideFile::from_file(overrides_path)
        .unwrap_or_else(|e| exit_with_error(&e.to_string()));

    let report = apply_overrides(&overrides, &mut graph, &schemas)
        .unwrap_or_else(|e| exit_with_error(&format!("Overrides were not applied: {}", e)));

    let json = serde_json::to_string_pretty(&graph)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to serialize graph: {}", e)));
    match output {
        Some(path) => {
            fs::write(&path, json).unwrap_or_else(|e| {
                exit_with_error(&format!("Failed to write graph to '{}': {}", path, e))
            });
            println!("  -> Wrote updated graph to '{}'", path);
        }
        None => println!("{}", json),
    }

    eprintln!(
        "Applied {} override(s), {} unmatched, in {:?}",
        report.applied,
        report.unmatched,
        start.elapsed()
    );
}

fn run_conditions(
    definitions_path: &str,
    schema_id: &str,
    graph_path: Option<String>,
    node_id: Option<String>,
) {
    let (_, schemas) = load_definitions(definitions_path);
    let schema: &Arc<NodeSchema> = schemas
        .get_shared(&SchemaId::from(schema_id))
        .unwrap_or_else(|| exit_with_error(&format!("Unknown schema '{}'", schema_id)));

    let node_data = match (graph_path, node_id) {
        (Some(path), Some(id)) => {
            let graph = load_graph(&path);
            let node = graph.node(&NodeId::from(id.as_str())).cloned().unwrap_or_else(|| {
                exit_with_error(&format!("Node '{}' is not part of the graph", id))
            });
            Some(node.data)
        }
        _ => None,
    };

    let resolver = ConditionResolver::new();
    let conditions = resolver.resolve(schema);

    println!("Input conditions of '{}' ({}):", schema.name, schema.schema_id);
    for input in schema.inputs.iter().sorted_by_key(|input| input.id) {
        let rendered = match conditions.get(input.id) {
            Some(condition) => condition.to_string(),
            None if conditions.contains(input.id) => "always".to_string(),
            None => "not in layout".to_string(),
        };
        let state = node_data
            .as_ref()
            .map(|data| {
                if conditions.is_active(input.id, &data.input_data, &NoTypeInformation) {
                    " [active]"
                } else {
                    " [inactive]"
                }
            })
            .unwrap_or("");
        println!("  #{} {}: {}{}", input.id, input.label, rendered, state);
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
