use anyhow::Result;
use clap::{Parser, Subcommand};

use mibolsillo::cli::{
    handle_movement_command, handle_report_command, MovementCommands, ReportCommands,
};
use mibolsillo::config::{paths::BolsilloPaths, settings::Settings};
use mibolsillo::models::{EXPENSE_CATEGORIES, INCOME_CATEGORIES};
use mibolsillo::storage::Storage;
use mibolsillo::tui;

#[derive(Parser)]
#[command(
    name = "mibolsillo",
    version,
    about = "Terminal-based personal income/expense tracker",
    long_about = "MiBolsillo is a small personal finance tracker. Record income \
                  and expense movements, filter your history, and watch totals \
                  and a 7-day trend - all from the terminal."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI (default when no command is given)
    #[command(alias = "ui")]
    Tui,

    /// Movement commands: add, list, clear-all
    #[command(subcommand, alias = "mov")]
    Movement(MovementCommands),

    /// Report commands: summary, weekly
    #[command(subcommand)]
    Report(ReportCommands),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = BolsilloPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    // Initialize storage and hydrate the movement collection
    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Movement(cmd)) => {
            handle_movement_command(&storage, cmd)?;
        }
        Some(Commands::Report(cmd)) => {
            handle_report_command(&storage, cmd)?;
        }
        Some(Commands::Config) => {
            println!("MiBolsillo Configuration");
            println!("========================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Data file:      {}", paths.movements_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
            println!();
            println!("Suggested expense categories: {}", EXPENSE_CATEGORIES.join(", "));
            println!("Suggested income categories:  {}", INCOME_CATEGORIES.join(", "));
        }
        Some(Commands::Tui) | None => {
            tui::run_tui(&storage, &settings)?;
        }
    }

    Ok(())
}
