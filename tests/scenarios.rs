//! End-to-end flows: reducer, worker and a real SQLite store wired together.

use justdo::app::{handle_event, AppState, Event, Key, UiMode, ViewMode, Viewport};
use justdo::storage::{SqliteStore, TaskStore};
use justdo::worker::{EffectRunner, TaskWorker, WorkerResponse};
use justdo::{Priority, Theme};
use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

struct Harness {
    store: Arc<SqliteStore>,
    worker: TaskWorker,
    state: AppState,
}

impl Harness {
    fn new() -> Self {
        let store = Arc::new(SqliteStore::open_in_memory().unwrap());
        let worker = TaskWorker::new(store.clone());
        let (state, load) = justdo::initialize();
        let mut harness = Self { store, worker, state };
        let response = harness.worker.handle_effect(load);
        harness.send(Event::Worker(response));
        harness.send(Event::Resize { width: 80, height: 24 });
        harness
    }

    /// Feeds one event and runs every resulting effect to completion.
    fn send(&mut self, event: Event) {
        let mut queue = VecDeque::from([event]);
        while let Some(event) = queue.pop_front() {
            let state = std::mem::take(&mut self.state);
            let (next, effect) = handle_event(state, event);
            self.state = next;
            assert!(self.state.invariants_hold());
            if let Some(effect) = effect {
                queue.push_back(Event::Worker(self.worker.handle_effect(effect)));
            }
        }
    }

    fn press(&mut self, key: Key) {
        self.send(Event::Key(key));
    }

    fn type_text(&mut self, text: &str) {
        for c in text.chars() {
            self.press(Key::Char(c));
        }
    }

    fn add(&mut self, text: &str) {
        self.press(Key::Char('n'));
        self.type_text(text);
        self.press(Key::Enter);
    }

    fn contents(&self) -> Vec<&str> {
        self.state.tasks.iter().map(|t| t.content.as_str()).collect()
    }
}

#[test]
fn creating_a_task_persists_and_returns_to_browsing() {
    let mut h = Harness::new();
    assert!(h.state.tasks.is_empty());
    assert_eq!(h.state.counts.active, Some(0));

    h.add("buy milk");

    assert_eq!(h.state.ui_mode, UiMode::Browsing);
    assert!(h.state.edit_buffer.is_empty());
    assert_eq!(h.contents(), ["buy milk"]);
    assert_eq!(h.state.tasks[0].priority, Priority::P2);
    assert!(!h.state.tasks[0].completed);
    assert_eq!(h.state.counts.active, Some(1));
    assert_eq!(h.store.count_active().unwrap(), 1);

    let frame = justdo::ui::render(&h.state, &Theme::default());
    assert!(frame.contains("buy milk"));
    assert!(frame.contains("Active (1)"));
}

#[test]
fn priority_cycles_back_to_start_after_three_presses() {
    let mut h = Harness::new();
    h.add("A");

    let seen: Vec<Priority> = (0..3)
        .map(|_| {
            h.press(Key::Char('p'));
            h.state.tasks[0].priority
        })
        .collect();

    assert_eq!(seen, [Priority::P1, Priority::P0, Priority::P2]);
    assert_eq!(h.store.list_active().unwrap()[0].priority, Priority::P2);
}

#[test]
fn completing_the_last_row_reclamps_the_cursor() {
    let mut h = Harness::new();
    h.add("first");
    h.add("second");
    h.press(Key::Down);
    assert_eq!(h.state.cursor, 1);

    h.press(Key::Char(' '));

    assert_eq!(h.contents(), ["first"]);
    assert_eq!(h.state.cursor, 0);
    assert_eq!(h.state.counts.active, Some(1));
    assert_eq!(h.state.counts.completed, Some(1));

    h.press(Key::Tab);
    assert_eq!(h.state.view_mode, ViewMode::Completed);
    assert_eq!(h.contents(), ["second"]);
    assert!(h.state.tasks[0].completed);

    h.press(Key::Char(' '));
    assert!(h.state.tasks.is_empty());
    h.press(Key::BackTab);
    assert_eq!(h.state.tasks.len(), 2);
}

#[test]
fn editing_replaces_content_in_place() {
    let mut h = Harness::new();
    h.add("call mum");

    h.press(Key::Char('e'));
    assert_eq!(h.state.ui_mode, UiMode::Editing);
    assert_eq!(h.state.edit_buffer, "call mum");

    for _ in 0..3 {
        h.press(Key::Backspace);
    }
    h.type_text("dad");
    h.press(Key::Enter);

    assert_eq!(h.state.ui_mode, UiMode::Browsing);
    assert!(h.state.editing_target.is_none());
    assert_eq!(h.contents(), ["call dad"]);
    assert_eq!(h.store.list_active().unwrap()[0].content, "call dad");
}

#[test]
fn blank_submission_stays_in_creating_without_touching_the_store() {
    let mut h = Harness::new();
    h.press(Key::Char('n'));
    h.type_text("   ");
    h.press(Key::Enter);

    assert_eq!(h.state.ui_mode, UiMode::Creating);
    assert_eq!(h.store.count_active().unwrap(), 0);

    h.press(Key::Esc);
    assert_eq!(h.state.ui_mode, UiMode::Browsing);
    assert!(h.state.edit_buffer.is_empty());
}

#[test]
fn deleting_everything_shows_the_empty_state() {
    let mut h = Harness::new();
    h.add("throwaway");
    h.press(Key::Char('d'));

    assert!(h.state.tasks.is_empty());
    assert_eq!(h.store.count_active().unwrap(), 0);
    let frame = justdo::ui::render(&h.state, &Theme::default());
    assert!(frame.contains("No active tasks!"));

    // nothing selected: these are no-ops
    h.press(Key::Char('d'));
    h.press(Key::Char('p'));
    h.press(Key::Char('e'));
    assert_eq!(h.state.ui_mode, UiMode::Browsing);
}

#[test]
fn active_view_is_ordered_by_priority() {
    let mut h = Harness::new();
    h.add("low");
    h.add("urgent");
    h.press(Key::Down);
    h.press(Key::Char('p'));

    // P1 now sorts ahead of P2; the cursor stays on row 1
    assert_eq!(h.contents(), ["urgent", "low"]);
    assert_eq!(h.state.cursor, 1);

    h.press(Key::Up);
    h.press(Key::Char('p'));
    assert_eq!(h.contents(), ["urgent", "low"]);
    assert_eq!(h.state.tasks[0].priority, Priority::P0);
}

#[test]
fn out_of_order_loads_keep_the_newest_result() {
    let mut h = Harness::new();
    h.add("one");

    let state = std::mem::take(&mut h.state);
    let (state, older) = handle_event(state, Event::Key(Key::Tab));
    let (state, newer) = handle_event(state, Event::Key(Key::Tab));
    let older = h.worker.handle_effect(older.unwrap());
    let newer = h.worker.handle_effect(newer.unwrap());
    h.state = state;

    h.send(Event::Worker(newer));
    assert_eq!(h.state.view_mode, ViewMode::Active);
    assert_eq!(h.contents(), ["one"]);

    // completed-view load arriving late is ignored
    h.send(Event::Worker(older));
    assert_eq!(h.state.view_mode, ViewMode::Active);
    assert_eq!(h.contents(), ["one"]);
}

#[test]
fn store_failures_surface_as_status_messages() {
    let mut h = Harness::new();
    h.add("ghost");
    let id = h.state.tasks[0].id;
    h.store.delete(id).unwrap();

    h.press(Key::Char('p'));

    let status = h.state.status_message.clone().unwrap();
    assert!(status.starts_with("update priority:"), "{status}");
    assert_eq!(h.state.ui_mode, UiMode::Browsing);
    let frame = justdo::ui::render(&h.state, &Theme::default());
    assert!(frame.contains("update priority:"));

    // the next successful load clears it
    h.add("real");
    assert!(h.state.status_message.is_none());
}

#[tokio::test]
async fn runner_drives_the_loop_to_quiescence() {
    let store = Arc::new(SqliteStore::open_in_memory().unwrap());
    let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
    let mut runner = EffectRunner::new(TaskWorker::new(store.clone()), tx);

    let (mut state, load) = justdo::initialize();
    state.viewport = Viewport { width: 80, height: 24 };
    runner.dispatch(load);

    let keys = [Key::Char('n'), Key::Char('g'), Key::Char('o'), Key::Enter];
    for key in keys {
        let (next, effect) = handle_event(state, Event::Key(key));
        state = next;
        if let Some(effect) = effect {
            runner.dispatch(effect);
        }
    }

    // initial load, create, reload
    let mut responses = 0;
    while responses < 3 {
        let event = tokio::time::timeout(Duration::from_secs(5), rx.recv())
            .await
            .expect("worker response in time")
            .expect("channel open");
        assert!(matches!(event, Event::Worker(_)));
        if let Event::Worker(WorkerResponse::MutationFailed { message, .. }) = &event {
            panic!("unexpected failure: {message}");
        }
        responses += 1;
        let (next, effect) = handle_event(state, event);
        state = next;
        if let Some(effect) = effect {
            runner.dispatch(effect);
        }
    }

    assert_eq!(runner.drain(Duration::from_secs(5)).await, 0);
    assert_eq!(state.ui_mode, UiMode::Browsing);
    assert_eq!(state.tasks.len(), 1);
    assert_eq!(state.tasks[0].content, "go");
    assert_eq!(store.count_active().unwrap(), 1);
}
