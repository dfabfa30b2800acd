use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use pion_duel::config::AppConfig;
use pion_duel::ui::App;
use ratatui::{backend::CrosstermBackend, Terminal};

/// Play Pion Duel in the terminal.
#[derive(Parser)]
#[command(name = "pion_duel", about = "Place, move and jump on a 5x5 board")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "pion_duel.toml")]
    config: PathBuf,

    /// Override the number of pieces each color may place
    #[arg(long)]
    budget: Option<i32>,

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

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    if let Some(budget) = cli.budget {
        config.rules.placement_budget = budget;
        config.validate().context("applying --budget")?;
    }

    run(&config).context("terminal UI failed")
}

fn run(config: &AppConfig) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config);
    let res = app.run(&mut terminal);

    // Restore terminal; always runs, even on error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res
}
