use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;

use connect_four::config::AppConfig;
use connect_four::logging;
use connect_four::ui::App;

/// Play Connect Four in the terminal.
#[derive(Parser)]
#[command(name = "connect-four", about = "Two-player Connect Four in the terminal")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect-four.toml")]
    config: PathBuf,

    /// Name of the first player (red, moves first)
    #[arg(long)]
    player1: Option<String>,

    /// Name of the second player (yellow)
    #[arg(long)]
    player2: Option<String>,

    /// Drop tokens instantly instead of animating the fall
    #[arg(long)]
    no_animation: bool,

    /// Override milliseconds per row of the fall animation
    #[arg(long)]
    tick_ms: Option<u64>,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    // Load configuration
    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(name) = cli.player1 {
        config.players.player1 = name;
    }
    if let Some(name) = cli.player2 {
        config.players.player2 = name;
    }
    if cli.no_animation {
        config.animation.enabled = false;
    }
    if let Some(tick_ms) = cli.tick_ms {
        config.animation.tick_ms = tick_ms;
    }
    config.validate().context("invalid settings")?;

    let _log_guard = logging::init(&config.logging).context("initializing logging")?;
    info!(
        player1 = %config.players.player1,
        player2 = %config.players.player2,
        "starting game"
    );

    run(&config).context("terminal UI failed")
}

fn run(config: &AppConfig) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run
    let mut app = App::new(config);
    let res = app.run(&mut terminal);

    // Restore terminal — always runs, even on error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res
}
