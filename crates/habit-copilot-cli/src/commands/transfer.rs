//! Export and import of the habit collection as JSON files.

use std::path::PathBuf;

use clap::Subcommand;
use habit_copilot_core::record::export_file_name;
use habit_copilot_core::{parse_exported_payload, serialize_for_export, today, Database, HabitStore};
use tracing::info;

#[derive(Subcommand)]
pub enum TransferAction {
    /// Export all habits to a JSON file
    Export {
        /// Output path, or "-" for stdout (default: habit-copilot-<today>.json)
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Import habits from a JSON export, replacing current data
    Import {
        /// Path to the export file
        path: PathBuf,
        /// Confirm replacing current data
        #[arg(long)]
        yes: bool,
    },
}

pub fn run(action: TransferAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::open()?;

    match action {
        TransferAction::Export { output } => {
            let habits = db.load_habits()?;
            let text = serialize_for_export(&habits).to_pretty_json()?;
            let path = output.unwrap_or_else(|| PathBuf::from(export_file_name(today())));
            if path.as_os_str() == "-" {
                println!("{text}");
            } else {
                std::fs::write(&path, text)?;
                println!("Exported {} habits to {}", habits.len(), path.display());
            }
        }
        TransferAction::Import { path, yes } => {
            let raw = std::fs::read_to_string(&path)?;
            let imported = parse_exported_payload(&raw)?;
            if !yes {
                println!(
                    "Would import {} habits and replace current data. Re-run with --yes to confirm.",
                    imported.len()
                );
                return Ok(());
            }
            db.save_habits(&imported)?;
            info!(count = imported.len(), path = %path.display(), "imported habits");
            println!("Imported {} habits", imported.len());
        }
    }
    Ok(())
}
