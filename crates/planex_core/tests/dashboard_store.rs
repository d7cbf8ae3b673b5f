use chrono::{NaiveDate, TimeZone, Utc};
use planex_core::{
    CompletionRate, DashboardOp, DashboardState, DashboardStore, DayKey, MemoryKeyValueStore,
    MonthDay, Task, TaskCollection, TaskUnit, TaskViewMode, WeekKey,
};

fn fresh_store() -> DashboardStore<MemoryKeyValueStore> {
    let state = DashboardState::defaults_for(NaiveDate::from_ymd_opt(2024, 5, 6).unwrap());
    DashboardStore::with_state(MemoryKeyValueStore::new(), state)
}

fn month_day(day: u32) -> TaskUnit {
    TaskUnit::MonthDay(MonthDay::new(day).unwrap())
}

#[test]
fn buy_milk_scenario_tracks_completion() {
    let mut store = fresh_store();
    let monday = TaskUnit::Day(DayKey::Monday);

    let id = store.add_task(monday, "Buy milk");
    let rates = store.per_unit_completion(TaskCollection::Daily);
    assert_eq!(rates[&monday], CompletionRate::from_counts(1, 0));
    assert_eq!(rates[&monday].percentage, 0);

    store.toggle_task(monday, &id);
    let rates = store.per_unit_completion(TaskCollection::Daily);
    assert_eq!(
        rates[&monday],
        CompletionRate {
            total: 1,
            completed: 1,
            percentage: 100
        }
    );
}

#[test]
fn habit_with_two_days_reports_twenty_nine_percent() {
    let mut store = fresh_store();
    store.toggle_habit_day("habit-1", 0);
    store.toggle_habit_day("habit-1", 1);

    let progress = store.habit_progress();
    assert_eq!(progress[0].habit.id, "habit-1");
    assert_eq!(
        progress[0].habit.weekly_progress,
        [true, true, false, false, false, false, false]
    );
    assert_eq!(progress[0].completed_days, 2);
    assert_eq!(progress[0].percentage, 29);
    assert_eq!(progress[1].percentage, 0);
}

#[test]
fn overall_is_sum_of_per_unit_counts_for_every_collection() {
    let mut store = fresh_store();
    let units = [
        TaskUnit::Day(DayKey::Monday),
        TaskUnit::Day(DayKey::Monday),
        TaskUnit::Day(DayKey::Sunday),
        TaskUnit::Week(WeekKey::Week2),
        TaskUnit::Week(WeekKey::Week4),
        month_day(1),
        month_day(30),
        month_day(30),
    ];
    for (index, unit) in units.into_iter().enumerate() {
        let id = store.add_task(unit, format!("task {index}"));
        if index % 2 == 0 {
            store.toggle_task(unit, &id);
        }
    }

    for collection in TaskCollection::ALL {
        let per_unit = store.per_unit_completion(collection);
        let overall = store.overall_completion(collection);
        assert_eq!(
            overall.total,
            per_unit.values().map(|rate| rate.total).sum::<u32>()
        );
        assert_eq!(
            overall.completed,
            per_unit.values().map(|rate| rate.completed).sum::<u32>()
        );
    }
}

#[test]
fn overall_percentage_is_not_mean_of_unit_percentages() {
    let mut store = fresh_store();
    let monday = TaskUnit::Day(DayKey::Monday);
    let tuesday = TaskUnit::Day(DayKey::Tuesday);

    let done = store.add_task(monday, "only monday task");
    store.toggle_task(monday, &done);
    for text in ["a", "b", "c"] {
        store.add_task(tuesday, text);
    }

    // Units: 100% and 0%; mean would be 50, sum-then-ratio is 1/4.
    let overall = store.overall_completion(TaskCollection::Daily);
    assert_eq!(overall, CompletionRate::from_counts(4, 1));
    assert_eq!(overall.percentage, 25);
}

#[test]
fn double_toggle_restores_task_state() {
    let mut store = fresh_store();
    let unit = TaskUnit::Week(WeekKey::Week3);
    let id = store.add_task(unit, "plan sprint");
    let before = store.state().clone();

    store.toggle_task(unit, &id);
    store.toggle_task(unit, &id);

    assert_eq!(store.state(), &before);
}

#[test]
fn add_then_remove_restores_unit_list() {
    let mut store = fresh_store();
    let unit = month_day(14);
    store.add_task(unit, "existing");
    let before: Vec<Task> = store.state().tasks(unit).to_vec();

    let id = store.add_task(unit, "temporary");
    assert_eq!(store.state().tasks(unit).len(), before.len() + 1);
    store.remove_task(unit, &id);

    assert_eq!(store.state().tasks(unit), before.as_slice());
}

#[test]
fn reset_all_clears_completion_but_keeps_totals() {
    let mut store = fresh_store();
    for unit in [
        TaskUnit::Day(DayKey::Thursday),
        TaskUnit::Week(WeekKey::Week1),
        month_day(7),
    ] {
        let id = store.add_task(unit, "done already");
        store.toggle_task(unit, &id);
        store.add_task(unit, "still open");
    }
    store.toggle_habit_day("habit-3", 4);
    let totals: Vec<u32> = TaskCollection::ALL
        .into_iter()
        .map(|collection| store.overall_completion(collection).total)
        .collect();

    store.reset_all();

    for (collection, total) in TaskCollection::ALL.into_iter().zip(totals) {
        let overall = store.overall_completion(collection);
        assert_eq!(overall.completed, 0);
        assert_eq!(overall.total, total);
    }
    assert!(store
        .state()
        .habits
        .iter()
        .all(|habit| habit.weekly_progress == [false; 7]));
}

#[test]
fn reset_tasks_only_touches_one_collection() {
    let mut store = fresh_store();
    let day = TaskUnit::Day(DayKey::Saturday);
    let week = TaskUnit::Week(WeekKey::Week2);
    let day_task = store.add_task(day, "laundry");
    let week_task = store.add_task(week, "review budget");
    store.toggle_task(day, &day_task);
    store.toggle_task(week, &week_task);

    store.reset_tasks(TaskCollection::Daily);

    assert_eq!(store.overall_completion(TaskCollection::Daily).completed, 0);
    assert_eq!(store.overall_completion(TaskCollection::Weekly).completed, 1);
}

#[test]
fn month_day_thirty_one_is_never_read() {
    let mut state = DashboardState::defaults_for(NaiveDate::from_ymd_opt(2024, 1, 31).unwrap());
    let stray = Task::new(month_day(1), "stray", Utc::now());
    state.monthly_tasks.raw_mut().insert(31, vec![stray]);
    let mut store = DashboardStore::with_state(MemoryKeyValueStore::new(), state);

    let per_unit = store.per_unit_completion(TaskCollection::Monthly);
    assert_eq!(per_unit.len(), 30);
    assert_eq!(store.overall_completion(TaskCollection::Monthly).total, 0);

    store.reset_tasks(TaskCollection::Monthly);
    assert_eq!(store.state().monthly_tasks.raw()[&31].len(), 1);
}

#[test]
fn unknown_targets_are_silent_noops() {
    let mut store = fresh_store();
    let unit = TaskUnit::Day(DayKey::Monday);
    store.add_task(unit, "real");
    let before = store.state().clone();

    store.toggle_habit_day("habit-404", 0);
    store.toggle_habit_day("habit-1", 9);
    store.update_habit("habit-404", "ghost", "#000000");
    store.remove_habit("habit-404");
    store.toggle_task(unit, "task-404");
    store.update_task(unit, "task-404", "ghost");
    store.remove_task(TaskUnit::Day(DayKey::Tuesday), "task-404");

    assert_eq!(store.state(), &before);
    assert_eq!(store.revision(), 8);
}

#[test]
fn habit_lifecycle_updates_name_and_keeps_progress() {
    let mut store = fresh_store();
    let id = store.add_habit("Stretch", "#ff0000");
    assert!(id.starts_with("habit-"));
    store.toggle_habit_day(&id, 6);

    store.update_habit(&id, "Evening stretch", "#00ff00");
    let habit = store
        .state()
        .habits
        .iter()
        .find(|habit| habit.id == id)
        .unwrap();
    assert_eq!(habit.name, "Evening stretch");
    assert_eq!(habit.color, "#00ff00");
    assert!(habit.weekly_progress[6]);

    store.remove_habit(&id);
    assert_eq!(store.state().habits.len(), 5);
}

#[test]
fn update_task_replaces_text_only() {
    let mut store = fresh_store();
    let unit = TaskUnit::Week(WeekKey::Week1);
    let id = store.add_task(unit, "draft");
    store.toggle_task(unit, &id);

    store.update_task(unit, &id, "final");
    let task = &store.state().tasks(unit)[0];
    assert_eq!(task.id, id);
    assert_eq!(task.text, "final");
    assert!(task.completed);
}

#[test]
fn current_view_follows_view_mode() {
    let mut store = fresh_store();
    let week = TaskUnit::Week(WeekKey::Week4);
    let id = store.add_task(week, "ship release");
    store.toggle_task(week, &id);
    store.add_task(TaskUnit::Day(DayKey::Friday), "open task");

    let daily = store.current_view();
    assert_eq!(daily.mode, TaskViewMode::Daily);
    assert_eq!(daily.per_unit.len(), 7);
    assert_eq!(daily.overall, CompletionRate::from_counts(1, 0));

    store.set_view_mode(TaskViewMode::Weekly);
    let weekly = store.current_view();
    assert_eq!(weekly.mode, TaskViewMode::Weekly);
    assert_eq!(weekly.per_unit.len(), 4);
    assert_eq!(weekly.overall, store.overall_completion(TaskCollection::Weekly));
    assert_eq!(weekly.overall.percentage, 100);

    store.set_view_mode(TaskViewMode::Monthly);
    assert_eq!(store.current_view().per_unit.len(), 30);
}

#[test]
fn projections_are_referentially_transparent() {
    let mut store = fresh_store();
    store.add_task(TaskUnit::Day(DayKey::Monday), "one");
    let id = store.add_task(TaskUnit::Day(DayKey::Monday), "two");
    store.toggle_task(TaskUnit::Day(DayKey::Monday), &id);

    let copy = DashboardStore::with_state(MemoryKeyValueStore::new(), store.state().clone());
    assert_eq!(store.current_view(), copy.current_view());
    assert_eq!(store.habit_progress(), copy.habit_progress());
    assert_eq!(store.current_view(), store.current_view());
}

#[test]
fn mutate_with_fixed_clock_stamps_created_task() {
    let mut store = fresh_store();
    let now = Utc.with_ymd_and_hms(2024, 5, 7, 9, 15, 0).unwrap();
    let unit = TaskUnit::Day(DayKey::Tuesday);

    let id = store
        .mutate_at(
            DashboardOp::AddTask {
                unit,
                text: "dentist".to_string(),
            },
            now,
        )
        .unwrap();

    let task = &store.state().tasks(unit)[0];
    assert_eq!(task.id, id);
    assert_eq!(task.created_at, "2024-05-07T09:15:00.000Z");
    assert!(id.starts_with("task-daily-tuesday-"));
}

#[test]
fn ids_minted_in_same_instant_are_distinct() {
    let mut store = fresh_store();
    let now = Utc::now();
    let unit = TaskUnit::Week(WeekKey::Week1);
    let add = |text: &str| DashboardOp::AddTask {
        unit,
        text: text.to_string(),
    };

    let first = store.mutate_at(add("a"), now).unwrap();
    let second = store.mutate_at(add("b"), now).unwrap();
    assert_ne!(first, second);
}
