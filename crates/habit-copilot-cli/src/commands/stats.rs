use habit_copilot_core::{dashboard_stats, today, Database, HabitStore};

pub fn run(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::open()?;
    let habits = db.load_habits()?;
    let day = today();
    let stats = dashboard_stats(&habits, day);

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        println!("Today:       {day}");
        println!("Habits:      {}", stats.total);
        println!("Done today:  {}/{}", stats.done_today, stats.total);
        println!("Completion:  {}%", stats.completion_rate);
        println!("Best streak: {}d", stats.best_streak);
        println!("Avg streak:  {}d", stats.avg_streak);
    }
    Ok(())
}
