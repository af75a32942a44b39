use clap::{Parser, Subcommand};
use serde::Deserialize;
use std::fs;
use std::io::{self, BufRead, Write};

use tenkai::error::ConversionError;
use tenkai::prelude::*;

// --- JSON Deserialization Structs (Runtime Format Specific) ---
// These structs match the editor's runtime dump, where the reveal step
// lives inside each node's data bag. They are only used here for
// conversion into the canonical model.

#[derive(Deserialize)]
struct RuntimeFlow {
    meta: Option<FlowMeta>,
    nodes: Vec<RuntimeNode>,
    edges: Vec<RuntimeEdge>,
}

#[derive(Deserialize)]
struct RuntimeNode {
    id: String,
    #[serde(rename = "type")]
    node_type: String,
    position: Position,
    data: serde_json::Value,
}

#[derive(Deserialize)]
struct RuntimeEdge {
    id: String,
    source: String,
    target: String,
    #[serde(alias = "sourceHandle")]
    source_handle: Option<HandlePosition>,
    #[serde(alias = "targetHandle")]
    target_handle: Option<HandlePosition>,
    data: Option<RuntimeEdgeData>,
}

#[derive(Deserialize)]
struct RuntimeEdgeData {
    #[serde(alias = "revealAtStep")]
    reveal_at_step: Option<u32>,
}

// --- Converter Implementation ---
// Converts the runtime dump into tenkai's canonical FlowGraph.

impl IntoFlowGraph for RuntimeFlow {
    fn into_flow_graph(self) -> std::result::Result<FlowGraph, ConversionError> {
        let nodes = self
            .nodes
            .into_iter()
            .map(runtime_node_to_model)
            .collect::<std::result::Result<Vec<_>, _>>()?;

        let edges = self
            .edges
            .into_iter()
            .map(|raw| Edge {
                id: raw.id,
                source: raw.source,
                target: raw.target,
                source_handle: raw.source_handle.unwrap_or(HandlePosition::DEFAULT_SOURCE),
                target_handle: raw.target_handle.unwrap_or(HandlePosition::DEFAULT_TARGET),
                reveal_at_step: raw.data.and_then(|d| d.reveal_at_step),
                style: EdgeStyle::default(),
            })
            .collect();

        Ok(FlowGraph {
            meta: self.meta.unwrap_or(FlowMeta {
                title: "Untitled Flow".to_string(),
                subtitle: None,
                version: None,
            }),
            nodes,
            edges,
            settings: FlowSettings::default(),
        })
    }
}

fn runtime_node_to_model(raw: RuntimeNode) -> std::result::Result<Node, ConversionError> {
    let data = &raw.data;
    let text = |key: &str| {
        data.get(key)
            .and_then(|v| v.as_str())
            .map(str::to_string)
    };
    let kind = match raw.node_type.as_str() {
        "processStep" => NodeKind::ProcessStep {
            title: text("title").unwrap_or_default(),
            description: text("description"),
        },
        "hint" => NodeKind::Hint {
            content: text("content").unwrap_or_default(),
            is_code: data.get("isCode").and_then(|v| v.as_bool()),
        },
        "image" => NodeKind::Image {
            src: text("src").unwrap_or_default(),
            alt: text("alt"),
            caption: text("caption"),
            width: data.get("width").and_then(|v| v.as_f64()),
            height: data.get("height").and_then(|v| v.as_f64()),
        },
        other => {
            return Err(ConversionError::Validation(format!(
                "unknown node type '{}' on node '{}'",
                other, raw.id
            )));
        }
    };
    let reveal_at_step = data
        .get("revealAtStep")
        .and_then(|v| v.as_u64())
        .unwrap_or(1) as u32;
    Ok(Node {
        id: raw.id,
        position: raw.position,
        reveal_at_step: reveal_at_step.max(1),
        kind,
    })
}

/// A step-gated flow presentation engine CLI
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Treat the input as the editor's runtime dump instead of a flow
    /// document
    #[arg(long, global = true)]
    runtime: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print metadata and step statistics for a flow
    Info { flow_path: String },
    /// Print the per-step visibility ledger
    Steps { flow_path: String },
    /// Compact sparse reveal steps into a dense sequence and print the
    /// resulting document
    Normalize {
        flow_path: String,
        /// Write the normalized document here instead of stdout
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Step through the flow interactively
    Present { flow_path: String },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Info { ref flow_path } => load(flow_path, cli.runtime).map(cmd_info),
        Command::Steps { ref flow_path } => load(flow_path, cli.runtime).map(cmd_steps),
        Command::Normalize {
            ref flow_path,
            ref output,
        } => load(flow_path, cli.runtime).and_then(|s| cmd_normalize(s, output.as_deref())),
        Command::Present { ref flow_path } => {
            load(flow_path, cli.runtime).and_then(cmd_present)
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn load(path: &str, runtime: bool) -> tenkai::prelude::Result<EditorSession> {
    let content = fs::read_to_string(path)?;
    let graph = if runtime {
        let raw: RuntimeFlow = serde_json::from_str(&content)?;
        raw.into_flow_graph()?
    } else {
        FlowGraph::from_config(FlowConfig::from_json(&content)?)
    };
    Ok(EditorSession::new(graph.to_config()))
}

fn cmd_info(session: EditorSession) {
    let graph = session.graph();
    println!("Title:    {}", graph.meta.title);
    if let Some(subtitle) = &graph.meta.subtitle {
        println!("Subtitle: {}", subtitle);
    }
    if let Some(version) = &graph.meta.version {
        println!("Version:  {}", version);
    }
    println!("Nodes:    {}", graph.nodes.len());
    println!("Edges:    {}", graph.edges.len());
    println!("Steps:    {}", session.total_steps());
}

fn cmd_steps(mut session: EditorSession) {
    session.enter_presentation();
    loop {
        let step = session.current_step();
        let view = session.view();
        println!(
            "step {:>3}: {:>3} nodes  {:>3} edges  {:>3} newly revealed",
            step,
            view.nodes.len(),
            view.edges.len(),
            view.newly_revealed.len()
        );
        if session.is_last_step() {
            break;
        }
        session.next();
    }
}

fn cmd_normalize(
    mut session: EditorSession,
    output: Option<&str>,
) -> tenkai::prelude::Result<()> {
    let outcome = session
        .normalize_steps()
        .expect("freshly loaded session is in editor mode");
    if outcome.is_noop() {
        println!("Steps already dense (max {})", outcome.new_max);
    } else {
        println!(
            "Normalized steps: max {} -> {}",
            outcome.old_max, outcome.new_max
        );
    }
    let json = session.config().to_json()?;
    match output {
        Some(path) => fs::write(path, json)?,
        None => println!("{}", json),
    }
    Ok(())
}

fn cmd_present(mut session: EditorSession) -> tenkai::prelude::Result<()> {
    session.enter_presentation();
    println!(
        "Presenting '{}' ({} steps). Commands: n(ext), p(rev), r(eset), e(nd), q(uit)",
        session.graph().meta.title,
        session.total_steps()
    );

    let stdin = io::stdin();
    loop {
        let view = session.view();
        println!(
            "step {}/{}: {} nodes, {} edges visible",
            session.current_step(),
            session.total_steps(),
            view.nodes.len(),
            view.edges.len()
        );
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        match line.trim() {
            "n" | "next" | "" => session.next(),
            "p" | "prev" => session.previous(),
            "r" | "reset" => session.reset(),
            "e" | "end" => session.go_to_end(),
            "q" | "quit" => break,
            other => println!("Unknown command '{}'", other),
        }
    }
    Ok(())
}
