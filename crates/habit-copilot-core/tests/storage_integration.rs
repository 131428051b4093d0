//! End-to-end flow over an on-disk database: load, mutate, save, reload.

use habit_copilot_core::habit::{add_habit, delete_habit, toggle_habit};
use habit_copilot_core::storage::STORAGE_KEY;
use habit_copilot_core::{
    add_days, dashboard_stats, parse_exported_payload, serialize_for_export, CalendarDay,
    Database, Habit, HabitStore,
};

fn day(s: &str) -> CalendarDay {
    CalendarDay::parse(s).unwrap()
}

#[test]
fn test_full_habit_workflow() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("habit-copilot.db");
    let today = day("2024-03-01");

    let db = Database::open_at(&path).unwrap();
    let mut habits = db.load_habits().unwrap();
    assert!(habits.is_empty());

    add_habit(&mut habits, Habit::new("Stretch", "#14b8a6", 1).unwrap());
    add_habit(&mut habits, Habit::new("Read", "#a855f7", 2).unwrap());
    let read_id = habits[0].id.clone();
    for back in 0..3 {
        toggle_habit(&mut habits, &read_id, add_days(today, -back)).unwrap();
    }
    db.save_habits(&habits).unwrap();
    drop(db);

    let db = Database::open_at(&path).unwrap();
    let mut reloaded = db.load_habits().unwrap();
    assert_eq!(reloaded, habits);
    assert_eq!(reloaded[0].name, "Read");
    assert_eq!(reloaded[0].streaks(today).current, 3);

    let stats = dashboard_stats(&reloaded, today);
    assert_eq!(stats.total, 2);
    assert_eq!(stats.done_today, 1);
    assert_eq!(stats.completion_rate, 50);
    assert_eq!(stats.best_streak, 3);
    assert_eq!(stats.avg_streak, 1.5);

    delete_habit(&mut reloaded, &read_id).unwrap();
    db.save_habits(&reloaded).unwrap();
    assert_eq!(db.load_habits().unwrap().len(), 1);
}

#[test]
fn test_import_replaces_collection() {
    let db = Database::open_memory().unwrap();
    db.save_habits(&[Habit::new("Old", "#ef4444", 1).unwrap()]).unwrap();

    let mut exported = Habit::new("Imported", "#3b82f6", 5).unwrap();
    exported.toggle_done(day("2024-02-29"));
    let text = serialize_for_export(&[exported.clone()]).to_pretty_json().unwrap();

    let imported = parse_exported_payload(&text).unwrap();
    db.save_habits(&imported).unwrap();

    assert_eq!(db.load_habits().unwrap(), vec![exported]);
}

#[test]
fn test_legacy_and_corrupt_slots() {
    let db = Database::open_memory().unwrap();

    db.kv_set(STORAGE_KEY, r#"[{"id":"x","name":"Legacy","doneDates":["2024-01-01",3]}]"#)
        .unwrap();
    let habits = db.load_habits().unwrap();
    assert_eq!(habits.len(), 1);
    assert_eq!(habits[0].color, "#22c55e");
    assert_eq!(habits[0].done_dates, ["2024-01-01"]);

    db.kv_set(STORAGE_KEY, "\u{0}garbage").unwrap();
    assert!(db.load_habits().unwrap().is_empty());

    db.kv_set(STORAGE_KEY, r#"{"habits": 12}"#).unwrap();
    assert!(db.load_habits().unwrap().is_empty());
}
