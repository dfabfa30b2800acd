use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use pion_duel::config::AppConfig;
use pion_duel::game::{GameState, PlayerColor};

/// Replay a sequence of cell clicks without a terminal UI.
#[derive(Parser)]
#[command(name = "pion_duel_script", about = "Apply cell clicks and print the result")]
struct Cli {
    /// Comma-separated cell indices (0-24, row-major), e.g. 0,1,7,8
    #[arg(long, value_delimiter = ',', required = true)]
    clicks: Vec<usize>,

    /// Path to TOML configuration file
    #[arg(long, default_value = "pion_duel.toml")]
    config: PathBuf,

    /// Only print the final board
    #[arg(long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    let mut state = GameState::with_rules(config.rules);

    for (step, &index) in cli.clicks.iter().enumerate() {
        let events = state
            .on_cell_clicked(index)
            .with_context(|| format!("click #{} on cell {}", step + 1, index))?;
        if cli.quiet {
            continue;
        }
        if events.is_empty() {
            println!("{:>3}: click {:>2} -> ignored", step + 1, index);
        }
        for event in &events {
            println!("{:>3}: click {:>2} -> {}", step + 1, index, event.describe());
        }
    }

    if !cli.quiet {
        println!("-------------------------------------------");
    }
    print!("{}", state.board().to_text());
    match state.winner() {
        Some(color) => println!("Winner: {}", color),
        None => println!(
            "No winner  |  next placement: {}  |  Orange left: {}  |  Green left: {}",
            state.next_color(),
            state.remaining_budget(PlayerColor::Orange),
            state.remaining_budget(PlayerColor::Green),
        ),
    }

    Ok(())
}
