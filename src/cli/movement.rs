//! Movement CLI commands
//!
//! Add, list (with filters) and clear-all. This is the validation boundary:
//! empty descriptions, missing categories and non-positive amounts are
//! rejected here and never reach the store.

use clap::Subcommand;

use crate::display::movement::{format_movement_details, format_movement_register};
use crate::error::{BolsilloError, BolsilloResult};
use crate::models::{Money, MovementKind, NewMovement};
use crate::services::{MovementFilter, MovementService};
use crate::storage::Storage;

/// Movement subcommands
#[derive(Subcommand)]
pub enum MovementCommands {
    /// Add a new movement
    Add {
        /// Movement kind: income or expense
        #[arg(value_parser = parse_kind)]
        kind: MovementKind,
        /// Amount (e.g. "2500", "2500.50" or "2.500,50"); must be positive
        amount: String,
        /// Description
        description: String,
        /// Category (suggested lists: see `mibolsillo config`)
        #[arg(short, long)]
        category: String,
        /// Optional note
        #[arg(short, long)]
        note: Option<String>,
    },
    /// List movements, newest first
    List {
        /// Filter by kind: income or expense
        #[arg(short, long, value_parser = parse_kind)]
        kind: Option<MovementKind>,
        /// Filter by exact category
        #[arg(short, long)]
        category: Option<String>,
        /// Filter by text over description and note
        #[arg(short, long)]
        text: Option<String>,
        /// Only the last N days
        #[arg(short = 'd', long)]
        last_days: Option<i64>,
    },
    /// Delete ALL movements
    ClearAll {
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },
}

/// Parse a movement kind argument
fn parse_kind(s: &str) -> Result<MovementKind, String> {
    match s.to_lowercase().as_str() {
        "income" | "in" => Ok(MovementKind::Income),
        "expense" | "out" => Ok(MovementKind::Expense),
        _ => Err(format!("'{}' is not a kind; use income or expense", s)),
    }
}

/// Validate raw add-form input into a store-ready `NewMovement`
///
/// Shared by the CLI and the TUI form so both boundaries reject the same
/// inputs: missing category, empty description, unparseable or non-positive
/// amount.
pub fn validate_new_movement(
    kind: MovementKind,
    category: &str,
    description: &str,
    amount: &str,
    note: &str,
) -> Result<NewMovement, String> {
    if category.trim().is_empty() {
        return Err("Pick a category".to_string());
    }
    if description.trim().is_empty() {
        return Err("Description is required".to_string());
    }

    let amount = Money::parse(amount)
        .map_err(|_| format!("Invalid amount '{}'. Try 2500 or 2500.50", amount))?;
    if !amount.is_positive() {
        return Err("Amount must be greater than zero".to_string());
    }

    let note = note.trim();
    Ok(NewMovement {
        kind,
        description: description.to_string(),
        amount,
        category: Some(category.trim().to_string()),
        note: if note.is_empty() {
            None
        } else {
            Some(note.to_string())
        },
    })
}

/// Handle a movement command
pub fn handle_movement_command(storage: &Storage, cmd: MovementCommands) -> BolsilloResult<()> {
    let service = MovementService::new(storage);

    match cmd {
        MovementCommands::Add {
            kind,
            amount,
            description,
            category,
            note,
        } => {
            let input = validate_new_movement(
                kind,
                &category,
                &description,
                &amount,
                note.as_deref().unwrap_or(""),
            )
            .map_err(BolsilloError::Validation)?;

            let movement = service.add(input)?;

            println!("Added movement:");
            print!("{}", format_movement_details(&movement));
        }

        MovementCommands::List {
            kind,
            category,
            text,
            last_days,
        } => {
            let mut filter = MovementFilter::new();
            if let Some(kind) = kind {
                filter = filter.kind(kind);
            }
            if let Some(category) = category {
                filter = filter.category(category);
            }
            if let Some(text) = text {
                filter = filter.text(text);
            }
            if let Some(days) = last_days {
                if days < 0 {
                    return Err(BolsilloError::Validation(
                        "Day range must be non-negative".into(),
                    ));
                }
                filter = filter.last_days(days);
            }

            let movements = filter.apply(&service.list()?);
            print!("{}", format_movement_register(&movements));
            println!("\nShowing {} movement(s)", movements.len());
        }

        MovementCommands::ClearAll { force } => {
            let count = service.count()?;
            if !force {
                println!("About to delete ALL {} movement(s).", count);
                println!("Use --force to confirm.");
                return Ok(());
            }

            service.clear_all()?;
            println!("Deleted {} movement(s). The ledger is now empty.", count);
        }
    }

    Ok(())
}
