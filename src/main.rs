use std::env;

use tenkai::prelude::*;

fn main() {
    // Parse command line arguments
    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: cargo run -- <path/to/flow.json>");
        std::process::exit(1);
    }

    let flow_path = &args[1];
    println!("Loading flow from: {}", flow_path);

    let config = match FlowConfig::from_file(flow_path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load flow document: {}", e);
            std::process::exit(1);
        }
    };

    println!("Loaded '{}'", config.meta.title);
    if let Some(subtitle) = &config.meta.subtitle {
        println!("  {}", subtitle);
    }
    println!(
        "  {} nodes, {} edges",
        config.nodes.len(),
        config.edges.len()
    );

    let mut session = EditorSession::new(config);
    session.enter_presentation();

    // Walk the whole presentation, printing the step ledger
    println!("\nStep ledger ({} steps):", session.total_steps());
    loop {
        let step = session.current_step();
        let view = session.view();
        println!(
            "  step {}: {} nodes, {} edges, {} newly revealed",
            step,
            view.nodes.len(),
            view.edges.len(),
            view.newly_revealed.len()
        );
        for node in view
            .nodes
            .iter()
            .filter(|n| view.newly_revealed.contains(&n.id.as_str()))
        {
            match &node.kind {
                NodeKind::ProcessStep { title, .. } => println!("    -> {}", title),
                NodeKind::Hint { content, .. } => println!("    -> (hint) {}", content),
                NodeKind::Image { src, .. } => println!("    -> (image) {}", src),
            }
        }
        if session.is_last_step() {
            break;
        }
        session.next();
    }
    println!();
}
