//! story-cli - play a scene directory in the terminal and check its content.

mod config;
mod diagram;
mod source;
mod terminal;

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use story_core::SceneGraph;
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::CliConfig;
use terminal::{Outcome, Terminal};

#[derive(Parser)]
#[command(name = "story-cli")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Play and check branching survival stories")]
struct Cli {
    /// Config file path.
    #[arg(long, global = true, env = "STORY_CONFIG", default_value = "story.toml")]
    config: PathBuf,

    /// Scene directory, overrides `content.scenes_dir`.
    #[arg(long, global = true)]
    scenes: Option<PathBuf>,

    /// Start scene id, overrides `content.start`.
    #[arg(long, global = true)]
    start: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Play the story in this terminal.
    Play {
        /// Print body text at once instead of character by character.
        #[arg(long)]
        no_typewriter: bool,
        /// Keep choices in the order they are declared.
        #[arg(long)]
        no_shuffle: bool,
    },
    /// Report every content error and unreachable scene.
    Check,
    /// Print the scene graph as a Mermaid flowchart.
    Diagram,
    /// Print the scene graph's edge list as JSON.
    Export,
}

fn main() -> anyhow::Result<ExitCode> {
    init_tracing();
    let cli = Cli::parse();

    let mut config = CliConfig::load(&cli.config)?;
    if let Some(scenes) = cli.scenes {
        config.content.scenes_dir = scenes;
    }
    if let Some(start) = cli.start {
        config.content.start = start;
    }

    match cli.command {
        Command::Play {
            no_typewriter,
            no_shuffle,
        } => {
            if no_typewriter {
                config.terminal.typewriter = false;
            }
            if no_shuffle {
                config.terminal.shuffle_choices = false;
            }
            play(&config)
        }
        Command::Check => check(&config),
        Command::Diagram => {
            println!("{}", diagram::to_mermaid(&load_graph(&config)?));
            Ok(ExitCode::SUCCESS)
        }
        Command::Export => {
            let edges = load_graph(&config)?.export_edges();
            println!("{}", serde_json::to_string_pretty(&edges)?);
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Logs go to stderr so they never interleave with story text.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn load_graph(config: &CliConfig) -> anyhow::Result<SceneGraph> {
    let scenes = source::read_scene_dir(&config.content.scenes_dir)?;
    let graph = SceneGraph::load(config.content.start.as_str(), scenes)
        .with_context(|| format!("loading scenes from {}", config.content.scenes_dir.display()))?;
    Ok(graph)
}

fn play(config: &CliConfig) -> anyhow::Result<ExitCode> {
    let graph = Arc::new(load_graph(config)?);
    let mut session = story_core::new_session(&graph);
    info!(session = %session.id(), start = %session.current(), "terminal_session_started");

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let outcome = Terminal::new(stdin.lock(), stdout.lock(), config.terminal.clone()).play(&mut session)?;

    let (label, status) = match &outcome {
        Outcome::GameOver(status) => ("game_over", Some(status)),
        Outcome::Ending(status) => ("ending", Some(status)),
        Outcome::Quit => ("quit", None),
    };
    info!(
        session = %session.id(),
        steps = session.steps_taken(),
        outcome = label,
        health = status.map(|s| s.health),
        "terminal_session_finished"
    );
    Ok(ExitCode::SUCCESS)
}

fn check(config: &CliConfig) -> anyhow::Result<ExitCode> {
    let scenes = source::read_scene_dir(&config.content.scenes_dir)?;
    match SceneGraph::load(config.content.start.as_str(), scenes) {
        Ok(graph) => {
            println!(
                "ok: {} scene(s), {} action(s)",
                graph.len(),
                graph.action_count()
            );
            for scene in graph.unreachable_scenes() {
                println!("warning: scene '{scene}' is unreachable from '{}'", graph.start_id());
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(errors) => {
            for error in errors.iter() {
                println!("error: {error}");
            }
            println!("{} content error(s)", errors.len());
            Ok(ExitCode::FAILURE)
        }
    }
}
