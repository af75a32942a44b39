use clap::Parser;
use rand::Rng;
use std::fs;

use tenkai::prelude::*;

/// A CLI tool to generate demo flow documents for the tenkai stepper
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the generated JSON file to
    #[arg(short, long, default_value = "generated_flow.json")]
    output: String,

    /// The number of process steps to generate
    #[arg(long, default_value_t = 6)]
    steps: u32,

    /// Chance (percent) of attaching a hint to each process step
    #[arg(long, default_value_t = 40)]
    hint_chance: u32,
}

fn main() -> tenkai::prelude::Result<()> {
    let cli = Cli::parse();
    let mut rng = rand::rng();

    if cli.steps == 0 {
        eprintln!("Error: --steps must be at least 1");
        std::process::exit(1);
    }
    if cli.hint_chance > 100 {
        eprintln!(
            "Error: --hint-chance ({}) must be a percentage (0-100)",
            cli.hint_chance
        );
        std::process::exit(1);
    }

    println!(
        "Generating demo flow ({} process steps, {}% hint chance)...",
        cli.steps, cli.hint_chance
    );

    let config = generate_flow(&mut rng, cli.steps, cli.hint_chance);
    let json = config.to_json()?;
    fs::write(&cli.output, json)?;

    println!(
        "Successfully generated and saved demo flow to '{}'",
        cli.output
    );

    Ok(())
}

const STEP_TITLES: [&str; 8] = [
    "Receive Request",
    "Validate Input",
    "Check Permissions",
    "Load Data",
    "Apply Changes",
    "Run Checks",
    "Publish Result",
    "Notify Watchers",
];

const HINT_TEXTS: [&str; 4] = [
    "Watch the logs while this runs.",
    "This is where most retries happen.",
    "Skipped entirely on a cache hit.",
    "Budget roughly 200ms here.",
];

fn generate_flow(rng: &mut impl Rng, steps: u32, hint_chance: u32) -> FlowConfig {
    let mut session = EditorSession::new(FlowConfig {
        meta: FlowMeta {
            title: "Generated Demo Flow".to_string(),
            subtitle: Some(format!("{} steps", steps)),
            version: Some("1.0".to_string()),
        },
        nodes: vec![],
        edges: vec![],
        settings: None,
    });

    let mut previous: Option<String> = None;
    for index in 0..steps {
        let position = Position::new(0.0, index as f64 * 140.0);
        let id = session
            .add_node(NodeTemplate::ProcessStep, position)
            .expect("session starts in editor mode");
        let title = STEP_TITLES[index as usize % STEP_TITLES.len()].to_string();
        session.update_node(
            &id,
            NodePatch::ProcessStep {
                title: Some(title),
                description: None,
            },
        );

        if let Some(prev) = &previous {
            session.connect(prev, &id, None, None);
        }

        if rng.random_range(0..100) < hint_chance {
            let step_of_owner = session
                .graph()
                .node(&id)
                .expect("node was just added")
                .reveal_at_step;
            let hint_position = Position::new(260.0, index as f64 * 140.0);
            if let Some(hint_id) = session.add_node(NodeTemplate::Hint, hint_position) {
                let text = HINT_TEXTS[rng.random_range(0..HINT_TEXTS.len())].to_string();
                session.update_node(
                    &hint_id,
                    NodePatch::Hint {
                        content: Some(text),
                        is_code: Some(false),
                    },
                );
                // Hints reveal together with the step they annotate.
                session.update_node_step(&hint_id, step_of_owner);
                session.connect(
                    &id,
                    &hint_id,
                    Some(HandlePosition::Right),
                    Some(HandlePosition::Left),
                );
            }
        }

        previous = Some(id);
    }

    session.config()
}
