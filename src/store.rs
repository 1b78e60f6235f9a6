//! Habit Collection Store
//!
//! The authoritative local mirror of the remote habit collection, plus the
//! synchronization rules that keep it consistent after each mutation: a
//! successful mutation replaces the affected entry wholesale with the
//! server's returned record (matched by id), a create appends it, a remove
//! deletes it. Partial field merges never happen. On any failure the
//! collection is left untouched.
//!
//! The collection-level rules and derived views live in pure functions so
//! they can be tested natively; [`HabitStore`] wires them to the reactive
//! state and the API client.

use chrono::{Local, NaiveDate};
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api;
use crate::error::Error;
use crate::models::{Analytics, Habit, HabitDraft, SortOrder};

/// Reactive state behind one habits view.
#[derive(Clone, Debug, Default, Store)]
pub struct HabitsState {
    /// The collection, in server insertion order. Never reordered in place.
    pub habits: Vec<Habit>,
    /// Current search term; empty matches everything.
    pub search: String,
    /// Presented ordering only; canonical order stays untouched.
    pub sort: SortOrder,
    /// True only during the initial bulk fetch.
    pub loading: bool,
    /// Ids with a mutation currently in flight.
    pub pending: Vec<String>,
}

// ========================
// Pure collection rules
// ========================

/// Append the server's created record.
pub fn append_habit(habits: &mut Vec<Habit>, created: Habit) {
    habits.push(created);
}

/// Replace the entry matching the returned record's id, in place. A record
/// for an id no longer in the collection is dropped.
pub fn sync_habit(habits: &mut Vec<Habit>, updated: Habit) {
    if let Some(habit) = habits.iter_mut().find(|h| h.id == updated.id) {
        *habit = updated;
    }
}

/// Delete the entry with the given id.
pub fn remove_habit(habits: &mut Vec<Habit>, id: &str) {
    habits.retain(|h| h.id != id);
}

/// Case-insensitive substring filter on `name`; preserves order.
pub fn filter_habits(habits: &[Habit], term: &str) -> Vec<Habit> {
    let needle = term.to_lowercase();
    habits
        .iter()
        .filter(|h| h.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Stable sort by streak for the presented view only.
pub fn sort_habits(mut habits: Vec<Habit>, order: SortOrder) -> Vec<Habit> {
    match order {
        SortOrder::Unsorted => {}
        SortOrder::Ascending => habits.sort_by_key(|h| h.streak),
        SortOrder::Descending => habits.sort_by_key(|h| std::cmp::Reverse(h.streak)),
    }
    habits
}

/// Advisory upload gate: blocks when the LAST upload falls on `today`
/// (local calendar date). An empty upload history never blocks. The server
/// re-enforces this rule; a concurrent session can still race past us.
pub fn upload_blocked(habit: &Habit, today: NaiveDate) -> bool {
    match habit.uploads.last() {
        Some(last) => last.date.with_timezone(&Local).date_naive() == today,
        None => false,
    }
}

/// Aggregates for the analytics cards.
pub fn compute_analytics(habits: &[Habit]) -> Analytics {
    Analytics {
        highest_streak: habits.iter().map(|h| h.streak).max().unwrap_or(0),
        total_completed: habits.iter().filter(|h| h.is_completed).count(),
        total_habits: habits.len(),
    }
}

/// Blocking user notification, the only surfacing channel for operation
/// outcomes outside the modal form.
pub(crate) fn notify(message: &str) {
    let _ = window().alert_with_message(message);
}

// ========================
// Reactive store
// ========================

/// Owner of the collection for the lifetime of one page.
///
/// All handles are arena-allocated, so the struct is cheap to copy into
/// event handlers and spawned futures. `alive` is cleared on page teardown;
/// a response resolving after that is discarded instead of being applied to
/// a detached store.
#[derive(Clone, Copy)]
pub struct HabitStore {
    state: Store<HabitsState>,
    alive: StoredValue<bool>,
}

impl HabitStore {
    pub fn new() -> Self {
        Self {
            state: Store::new(HabitsState::default()),
            alive: StoredValue::new(true),
        }
    }

    /// Mark the store detached; call from `on_cleanup`.
    pub fn detach(&self) {
        self.alive.try_update_value(|alive| *alive = false);
    }

    fn is_alive(&self) -> bool {
        self.alive.try_get_value() == Some(true)
    }

    // ---- reads (tracked) ----

    pub fn habits(&self) -> Vec<Habit> {
        self.state.habits().get()
    }

    pub fn search(&self) -> String {
        self.state.search().get()
    }

    pub fn sort(&self) -> SortOrder {
        self.state.sort().get()
    }

    pub fn loading(&self) -> bool {
        self.state.loading().get()
    }

    pub fn is_pending(&self, id: &str) -> bool {
        self.state.pending().get().iter().any(|p| p == id)
    }

    /// The presented view: filtered by search, then stably sorted.
    pub fn visible(&self) -> Vec<Habit> {
        let filtered = filter_habits(&self.habits(), &self.search());
        sort_habits(filtered, self.sort())
    }

    pub fn analytics(&self) -> Analytics {
        compute_analytics(&self.habits())
    }

    // ---- view state ----

    pub fn set_search(&self, term: String) {
        self.state.search().set(term);
    }

    pub fn set_sort(&self, order: SortOrder) {
        self.state.sort().set(order);
    }

    // ---- commands ----

    /// Bulk fetch on mount. The only operation with a loading indicator.
    /// On failure the list renders empty.
    pub fn load(&self) {
        let store = *self;
        store.state.loading().set(true);
        spawn_local(async move {
            let result = api::list().await;
            if !store.is_alive() {
                return;
            }
            match result {
                Ok(habits) => store.state.habits().set(habits),
                Err(e) => {
                    log::error!("failed to load habits: {e}");
                    store.state.habits().set(Vec::new());
                    notify(&format!("Could not load habits: {e}"));
                }
            }
            store.state.loading().set(false);
        });
    }

    /// Create or update from the modal draft. `on_settled(true)` means the
    /// server accepted and the collection was synced; the form closes. On
    /// failure the draft stays in the modal for a retry.
    pub fn save(
        &self,
        draft: HabitDraft,
        editing_id: Option<String>,
        idempotency_key: String,
        on_settled: impl FnOnce(bool) + 'static,
    ) {
        if let Some(id) = &editing_id {
            if !self.begin(id) {
                on_settled(false);
                return;
            }
        }
        let store = *self;
        spawn_local(async move {
            let result = match &editing_id {
                Some(id) => api::update(id, &draft).await,
                None => api::create(&draft, &idempotency_key).await,
            };
            if !store.is_alive() {
                return;
            }
            if let Some(id) = &editing_id {
                store.finish(id);
            }
            match result {
                Ok(habit) => {
                    store.with_habits(|habits| match editing_id {
                        Some(_) => sync_habit(habits, habit),
                        None => append_habit(habits, habit),
                    });
                    on_settled(true);
                }
                Err(e) => {
                    log::error!("failed to save habit: {e}");
                    notify(&format!("Could not save habit: {e}"));
                    on_settled(false);
                }
            }
        });
    }

    /// Remove a habit. Confirmation happens in the view before this runs.
    pub fn delete(&self, id: String) {
        if !self.begin(&id) {
            return;
        }
        let store = *self;
        spawn_local(async move {
            let result = api::remove(&id).await;
            if !store.is_alive() {
                return;
            }
            store.finish(&id);
            match result {
                Ok(()) => {
                    store.with_habits(|habits| remove_habit(habits, &id));
                    notify("Habit deleted successfully.");
                }
                Err(e) => {
                    log::error!("failed to delete habit {id}: {e}");
                    notify(&format!("Could not delete habit: {e}"));
                }
            }
        });
    }

    /// Pre-network gate for the Upload action. Reports the duplicate-day
    /// failure immediately; the file picker should only open when this
    /// returns true.
    pub fn upload_gate_passes(&self, id: &str) -> bool {
        let today = Local::now().date_naive();
        let blocked = self
            .state
            .habits()
            .get_untracked()
            .iter()
            .find(|h| h.id == id)
            .map(|h| upload_blocked(h, today))
            .unwrap_or(false);
        if blocked {
            log::warn!("upload for habit {id} blocked: {}", Error::AlreadyUploadedToday);
            notify("Today's image is already uploaded.");
        }
        !blocked
    }

    /// Send today's proof photo; the server appends the upload record and
    /// recomputes the streak.
    pub fn upload_today(&self, id: String, photo: web_sys::File) {
        if !self.begin(&id) {
            return;
        }
        let store = *self;
        spawn_local(async move {
            let result = api::upload_today(&id, &photo).await;
            if !store.is_alive() {
                return;
            }
            store.finish(&id);
            match result {
                Ok(habit) => {
                    store.with_habits(|habits| sync_habit(habits, habit));
                    notify("Streak updated!");
                }
                Err(e) => {
                    log::error!("failed to upload today's photo for {id}: {e}");
                    notify(&format!("Could not upload today's photo: {e}"));
                }
            }
        });
    }

    /// Remove today's upload record; the server recomputes the streak
    /// downward.
    pub fn delete_today_upload(&self, id: String) {
        if !self.begin(&id) {
            return;
        }
        let store = *self;
        spawn_local(async move {
            let result = api::delete_today_upload(&id).await;
            if !store.is_alive() {
                return;
            }
            store.finish(&id);
            match result {
                Ok(habit) => {
                    store.with_habits(|habits| sync_habit(habits, habit));
                    notify("Today's image has been deleted and streak updated.");
                }
                Err(e) => {
                    log::error!("failed to delete today's upload for {id}: {e}");
                    notify(&format!("Could not delete today's upload: {e}"));
                }
            }
        });
    }

    // ---- internals ----

    /// Register an in-flight mutation for `id`. Returns false when one is
    /// already outstanding, which serializes mutations per habit.
    fn begin(&self, id: &str) -> bool {
        let binding = self.state.pending();
        let mut pending = binding.write();
        if pending.iter().any(|p| p == id) {
            return false;
        }
        pending.push(id.to_string());
        true
    }

    fn finish(&self, id: &str) {
        self.state.pending().write().retain(|p| p != id);
    }

    fn with_habits(&self, f: impl FnOnce(&mut Vec<Habit>)) {
        f(&mut self.state.habits().write());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Days, TimeZone, Utc};

    use crate::models::Upload;

    fn make_habit(id: &str, name: &str, streak: u32) -> Habit {
        Habit {
            id: id.to_string(),
            name: name.to_string(),
            description: format!("{name} every day"),
            streak,
            is_completed: false,
            uploads: Vec::new(),
        }
    }

    fn with_upload(mut habit: Habit, date: DateTime<Utc>) -> Habit {
        habit.uploads.push(Upload { date, photo: None });
        habit
    }

    // ---- filtering ----

    #[test]
    fn test_filter_matches_case_insensitive_substring() {
        let habits = vec![
            make_habit("1", "Read", 0),
            make_habit("2", "Running", 2),
            make_habit("3", "Meditate", 5),
        ];
        let filtered = filter_habits(&habits, "rEaD");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "1");

        let filtered = filter_habits(&habits, "r");
        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].id, "1");
        assert_eq!(filtered[1].id, "2");
    }

    #[test]
    fn test_filter_empty_term_returns_collection_unchanged() {
        let habits = vec![
            make_habit("1", "Read", 0),
            make_habit("2", "Run", 2),
        ];
        assert_eq!(filter_habits(&habits, ""), habits);
    }

    #[test]
    fn test_filter_no_match_returns_empty() {
        let habits = vec![make_habit("1", "Read", 0)];
        assert!(filter_habits(&habits, "swim").is_empty());
    }

    // ---- sorting ----

    #[test]
    fn test_sort_ascending_and_descending_reverse_each_other() {
        let habits = vec![
            make_habit("1", "a", 5),
            make_habit("2", "b", 1),
            make_habit("3", "c", 9),
        ];
        let asc = sort_habits(habits.clone(), SortOrder::Ascending);
        let desc = sort_habits(habits, SortOrder::Descending);
        let ids = |v: &[Habit]| v.iter().map(|h| h.id.clone()).collect::<Vec<_>>();
        let mut reversed = ids(&desc);
        reversed.reverse();
        assert_eq!(ids(&asc), reversed);
        assert_eq!(ids(&asc), ["2", "1", "3"]);
    }

    #[test]
    fn test_sort_is_stable_for_equal_streaks() {
        let habits = vec![
            make_habit("1", "a", 3),
            make_habit("2", "b", 3),
            make_habit("3", "c", 1),
            make_habit("4", "d", 3),
        ];
        let asc = sort_habits(habits.clone(), SortOrder::Ascending);
        assert_eq!(
            asc.iter().map(|h| h.id.as_str()).collect::<Vec<_>>(),
            ["3", "1", "2", "4"]
        );
        let desc = sort_habits(habits, SortOrder::Descending);
        assert_eq!(
            desc.iter().map(|h| h.id.as_str()).collect::<Vec<_>>(),
            ["1", "2", "4", "3"]
        );
    }

    #[test]
    fn test_sort_unsorted_keeps_insertion_order() {
        let habits = vec![
            make_habit("1", "a", 5),
            make_habit("2", "b", 1),
        ];
        assert_eq!(sort_habits(habits.clone(), SortOrder::Unsorted), habits);
    }

    #[test]
    fn test_sort_does_not_touch_the_source_collection() {
        let habits = vec![
            make_habit("1", "a", 5),
            make_habit("2", "b", 1),
        ];
        let _ = sort_habits(habits.clone(), SortOrder::Ascending);
        // Presented ordering only; the canonical vec the caller holds is
        // cloned, never reordered.
        assert_eq!(habits[0].id, "1");
        assert_eq!(habits[1].id, "2");
    }

    // ---- upload gating ----

    #[test]
    fn test_gate_passes_with_no_uploads() {
        let habit = make_habit("1", "Read", 0);
        let today = Local::now().date_naive();
        assert!(!upload_blocked(&habit, today));
    }

    #[test]
    fn test_gate_blocks_when_last_upload_is_today() {
        let date = Utc.with_ymd_and_hms(2026, 8, 4, 12, 0, 0).unwrap();
        let habit = with_upload(make_habit("1", "Read", 1), date);
        let same_local_day = date.with_timezone(&Local).date_naive();
        assert!(upload_blocked(&habit, same_local_day));
    }

    #[test]
    fn test_gate_passes_when_last_upload_is_yesterday() {
        let date = Utc.with_ymd_and_hms(2026, 8, 4, 12, 0, 0).unwrap();
        let habit = with_upload(make_habit("1", "Read", 1), date);
        let next_local_day = date
            .with_timezone(&Local)
            .date_naive()
            .checked_add_days(Days::new(1))
            .unwrap();
        assert!(!upload_blocked(&habit, next_local_day));
    }

    #[test]
    fn test_gate_only_looks_at_the_last_upload() {
        let today_utc = Utc.with_ymd_and_hms(2026, 8, 4, 12, 0, 0).unwrap();
        let yesterday_utc = today_utc - chrono::Duration::days(1);
        // Last entry is yesterday even though an earlier entry matches today.
        let habit = with_upload(
            with_upload(make_habit("1", "Read", 1), today_utc),
            yesterday_utc,
        );
        let today_local = today_utc.with_timezone(&Local).date_naive();
        assert!(!upload_blocked(&habit, today_local));
    }

    // ---- synchronization rules ----

    #[test]
    fn test_create_appends_exactly_the_returned_record() {
        let mut habits = Vec::new();
        let created = make_habit("h1", "Read", 0);
        append_habit(&mut habits, created.clone());
        assert_eq!(habits.len(), 1);
        assert_eq!(habits[0], created);
    }

    #[test]
    fn test_update_replaces_only_the_matched_entry() {
        let mut habits = vec![
            make_habit("1", "Read", 2),
            make_habit("2", "Run", 4),
            make_habit("3", "Meditate", 1),
        ];
        let untouched_first = habits[0].clone();
        let untouched_last = habits[2].clone();

        let mut updated = make_habit("2", "Run outside", 4);
        updated.description = "5km minimum".to_string();
        sync_habit(&mut habits, updated.clone());

        assert_eq!(habits.len(), 3);
        assert_eq!(habits[0], untouched_first);
        assert_eq!(habits[1], updated);
        assert_eq!(habits[2], untouched_last);
    }

    #[test]
    fn test_sync_with_unknown_id_changes_nothing() {
        let mut habits = vec![make_habit("1", "Read", 2)];
        let before = habits.clone();
        sync_habit(&mut habits, make_habit("ghost", "Gone", 9));
        assert_eq!(habits, before);
    }

    #[test]
    fn test_remove_deletes_exactly_the_matched_id() {
        let mut habits = vec![
            make_habit("1", "Read", 2),
            make_habit("2", "Run", 4),
        ];
        remove_habit(&mut habits, "1");
        assert_eq!(habits.len(), 1);
        assert!(habits.iter().all(|h| h.id != "1"));

        // Removing an id that is already gone is a no-op.
        remove_habit(&mut habits, "1");
        assert_eq!(habits.len(), 1);
    }

    // ---- analytics ----

    #[test]
    fn test_analytics_on_empty_collection_is_all_zero() {
        assert_eq!(compute_analytics(&[]), Analytics::default());
    }

    #[test]
    fn test_analytics_aggregates() {
        let mut done = make_habit("2", "Run", 7);
        done.is_completed = true;
        let habits = vec![make_habit("1", "Read", 3), done, make_habit("3", "Med", 0)];
        let analytics = compute_analytics(&habits);
        assert_eq!(analytics.highest_streak, 7);
        assert_eq!(analytics.total_completed, 1);
        assert_eq!(analytics.total_habits, 3);
    }

    // ---- end-to-end collection scenarios ----

    #[test]
    fn test_scenario_create_into_empty_collection() {
        let mut habits: Vec<Habit> = Vec::new();
        let server_response = Habit {
            id: "h1".to_string(),
            name: "Read".to_string(),
            description: "30m/day".to_string(),
            streak: 0,
            is_completed: false,
            uploads: Vec::new(),
        };
        append_habit(&mut habits, server_response.clone());

        assert_eq!(habits, vec![server_response]);
        let analytics = compute_analytics(&habits);
        assert_eq!(analytics.highest_streak, 0);
        assert_eq!(analytics.total_completed, 0);
        assert_eq!(analytics.total_habits, 1);
    }

    #[test]
    fn test_scenario_upload_after_yesterday_syncs_server_record() {
        let yesterday = Utc.with_ymd_and_hms(2026, 8, 3, 9, 0, 0).unwrap();
        let today = Utc.with_ymd_and_hms(2026, 8, 4, 9, 0, 0).unwrap();

        let mut habits = vec![with_upload(make_habit("h1", "Read", 0), yesterday)];

        // Gate passes: last upload was yesterday.
        let today_local = today.with_timezone(&Local).date_naive();
        assert!(!upload_blocked(&habits[0], today_local));

        // Server appends today's record and bumps the streak.
        let returned = with_upload(
            with_upload(make_habit("h1", "Read", 1), yesterday),
            today,
        );
        sync_habit(&mut habits, returned.clone());

        assert_eq!(habits, vec![returned]);
        assert_eq!(habits[0].streak, 1);
        assert_eq!(habits[0].uploads.len(), 2);
    }

    #[test]
    fn test_scenario_upload_today_blocks_and_collection_is_unchanged() {
        let today = Utc.with_ymd_and_hms(2026, 8, 4, 9, 0, 0).unwrap();
        let habits = vec![with_upload(make_habit("h1", "Read", 1), today)];
        let before = habits.clone();

        let today_local = today.with_timezone(&Local).date_naive();
        assert!(upload_blocked(&habits[0], today_local));
        // Blocked means no network call, so no sync runs at all.
        assert_eq!(habits, before);
    }
}
