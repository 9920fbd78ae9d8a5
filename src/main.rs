use grid_four::config::{GameConfig, CONFIG_PATH};
use grid_four::game::{run_session, GameOutcome};
use grid_four::ui::TerminalConsole;
use std::path::Path;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    // ログは stderr へ (対局の入出力と混ざらないように)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = GameConfig::load_or_default(Path::new(CONFIG_PATH))?;
    let mut console = TerminalConsole::stdio();

    match run_session(&mut console, &config)? {
        GameOutcome::Winner(id) => info!(?id, "session finished"),
        GameOutcome::Draw => info!("session finished in a draw"),
    }
    Ok(())
}
