use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use connect_four::config::AppConfig;
use connect_four::game::GameEngine;
use connect_four::ui::App;
use connect_four::{headless, logging};

/// Play Connect Four for 2 to 4 players.
#[derive(Parser)]
#[command(name = "connect_four", about = "Play Connect Four for 2 to 4 players")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect_four.toml")]
    config: PathBuf,

    /// Player colors in turn order, comma separated (skips the setup screen)
    #[arg(long, value_delimiter = ',')]
    players: Vec<String>,

    /// Override board height
    #[arg(long)]
    height: Option<usize>,

    /// Override board width
    #[arg(long)]
    width: Option<usize>,

    /// Read zero-based columns from stdin and print one JSON outcome per line
    #[arg(long)]
    headless: bool,

    /// Columns to play in headless mode instead of reading stdin
    #[arg(long, value_delimiter = ',', requires = "headless")]
    moves: Vec<usize>,

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
    let mut app_config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(height) = cli.height {
        app_config.game.height = height;
    }
    if let Some(width) = cli.width {
        app_config.game.width = width;
    }
    app_config.validate().context("invalid command line overrides")?;

    if cli.headless {
        run_headless(&cli, &app_config)
    } else {
        run_tui(&cli, &app_config)
    }
}

fn run_headless(cli: &Cli, config: &AppConfig) -> Result<()> {
    logging::init_stderr(&config.logging);

    let colors = if cli.players.is_empty() {
        config.game.starting_colors().to_vec()
    } else {
        cli.players.clone()
    };
    let mut engine =
        GameEngine::start_with_dimensions(&colors, config.game.height, config.game.width)
            .context("starting game")?;

    let stdout = io::stdout().lock();
    let summary = if cli.moves.is_empty() {
        headless::run(&mut engine, io::stdin().lock(), stdout)?
    } else {
        let script: String = cli.moves.iter().map(|col| format!("{col}\n")).collect();
        headless::run(&mut engine, script.as_bytes(), stdout)?
    };

    tracing::info!(
        moves = summary.moves,
        errors = summary.errors,
        over = engine.is_over(),
        "headless run finished"
    );
    Ok(())
}

fn run_tui(cli: &Cli, config: &AppConfig) -> Result<()> {
    logging::init_file(&config.logging).context("opening log file")?;

    let mut app = if cli.players.is_empty() {
        App::new(&config.game)
    } else {
        App::with_players(&config.game, &cli.players).context("starting game")?
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal even if the app loop failed
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    Ok(res?)
}
