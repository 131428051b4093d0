//! Habit management commands for CLI.

use clap::Subcommand;
use habit_copilot_core::habit::{add_habit, delete_habit, edit_habit, find_habit};
use habit_copilot_core::stats::{habit_rows, HabitRow};
use habit_copilot_core::{now_millis, today, Config, Database, Habit, HabitStore};

use super::{day_or_today, describe, short_id};

#[derive(Subcommand)]
pub enum HabitAction {
    /// Add a new habit
    Add {
        /// Habit name
        name: String,
        /// Accent color, or a 1-based index into habits.palette
        /// (default: habits.default_color from config)
        #[arg(long)]
        color: Option<String>,
    },
    /// List habits with streaks and recent history
    List {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Edit a habit's name or color
    Edit {
        /// Habit ID or unique ID prefix
        id: String,
        /// New name
        #[arg(long)]
        name: Option<String>,
        /// New color, or a 1-based index into habits.palette
        #[arg(long)]
        color: Option<String>,
    },
    /// Toggle completion for a day (default: today)
    Done {
        /// Habit ID or unique ID prefix
        id: String,
        /// Day as YYYY-MM-DD
        #[arg(long)]
        date: Option<String>,
    },
    /// Delete a habit. This cannot be undone.
    Delete {
        /// Habit ID or unique ID prefix
        id: String,
        /// Confirm the deletion
        #[arg(long)]
        yes: bool,
    },
}

pub fn run(action: HabitAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::open()?;
    let mut habits = db.load_habits()?;

    match action {
        HabitAction::Add { name, color } => {
            let color = Config::load_or_default()
                .habits
                .resolve_color(color.as_deref())?;
            let habit = Habit::new(&name, color, now_millis())?;
            println!("Habit added: {}", habit.id);
            println!("{}", serde_json::to_string_pretty(&habit)?);
            add_habit(&mut habits, habit);
            db.save_habits(&habits)?;
        }
        HabitAction::List { json } => {
            let config = Config::load_or_default();
            let rows = habit_rows(&habits, today(), config.display.calendar_window());
            if json {
                println!("{}", serde_json::to_string_pretty(&rows)?);
            } else if rows.is_empty() {
                println!("No habits yet. Add one with `habit-copilot add <name>`.");
            } else {
                for row in &rows {
                    println!("{}", render_row(row, config.display.show_longest));
                }
            }
        }
        HabitAction::Edit { id, name, color } => {
            if name.is_none() && color.is_none() {
                return Err("nothing to change: pass --name and/or --color".into());
            }
            let color = match color {
                Some(c) => Some(Config::load_or_default().habits.resolve_color(Some(&c))?),
                None => None,
            };
            let habit = edit_habit(&mut habits, &id, name.as_deref(), color.as_deref())?;
            println!("Habit updated:");
            println!("{}", serde_json::to_string_pretty(habit)?);
            db.save_habits(&habits)?;
        }
        HabitAction::Done { id, date } => {
            let day = day_or_today(date.as_deref())?;
            let idx = find_habit(&habits, &id)?;
            let done = habits[idx].toggle_done(day);
            db.save_habits(&habits)?;
            let habit = describe(&habits[idx]);
            if done {
                println!("Marked done: {habit} on {day}");
            } else {
                println!("Unmarked: {habit} on {day}");
            }
        }
        HabitAction::Delete { id, yes } => {
            if !yes {
                return Err(format!("refusing to delete '{id}' without --yes (this cannot be undone)").into());
            }
            let removed = delete_habit(&mut habits, &id)?;
            db.save_habits(&habits)?;
            println!("Habit deleted: {}", describe(&removed));
        }
    }
    Ok(())
}

fn render_row(row: &HabitRow, show_longest: bool) -> String {
    let strip: String = row
        .recent
        .iter()
        .map(|m| if m.done { '■' } else { '·' })
        .collect();
    let mark = if row.done_today { "✓" } else { " " };
    let mut streak = format!("streak {}d", row.streak.current);
    if show_longest && row.streak.longest > row.streak.current {
        streak.push_str(&format!(" · best {}d", row.streak.longest));
    }
    format!(
        "{mark} {name}  [{id}]  {streak}  {strip}",
        name = row.name,
        id = short_id(&row.id),
    )
}
