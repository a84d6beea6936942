//! Event handling and state transition logic.
//!
//! This module implements the reducer that turns keystrokes, resizes and worker
//! responses into the next [`AppState`] plus at most one [`Effect`]. It is the
//! only place application state changes.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the terminal or from the effect runner
//! 2. [`handle_event`] consumes the current state and pattern-matches the event
//! 3. The next state is returned together with an optional effect
//! 4. The loop hands the effect to the runner, whose response comes back as an event
//!
//! Persistence results are never patched into `tasks`: every successful
//! mutation answers with a fresh [`Effect::Load`] of the current view.
//!
//! # Example
//!
//! ```rust
//! use justdo::app::{handle_event, AppState, Event, Key, UiMode};
//!
//! let (state, effect) = handle_event(AppState::new(), Event::Key(Key::Char('n')));
//! assert_eq!(state.ui_mode, UiMode::Creating);
//! assert!(effect.is_none());
//! ```

use super::effects::{Effect, MutationKind};
use super::modes::{UiMode, ViewMode};
use super::state::{AppState, Viewport};
use crate::worker::WorkerResponse;

/// Logical keys the reducer understands.
///
/// Terminal key codes are translated into this set by the input adapter; keys
/// outside it never reach the reducer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// A printable character, including space.
    Char(char),
    Up,
    Down,
    Enter,
    Esc,
    Backspace,
    Tab,
    BackTab,
    /// Ctrl+C: quits while browsing, cancels while typing.
    CtrlC,
}

/// Inputs to the reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A key was pressed.
    Key(Key),

    /// The terminal was resized.
    Resize {
        /// New width in cells.
        width: u16,
        /// New height in cells.
        height: u16,
    },

    /// An effect finished running.
    Worker(WorkerResponse),
}

/// Processes an event and returns the next state and the effect to run, if any.
///
/// Guard violations (editing with no selection, an empty submission, cycling
/// priority in the Completed view) are absorbed silently: the state comes back
/// unchanged and no effect is produced.
///
/// # Parameters
///
/// * `state` - Current application state, consumed
/// * `event` - Event to process
///
/// # Returns
///
/// The next state and at most one effect for the runner.
///
/// # Tracing
///
/// Each call creates a debug-level span with the event for debugging.
///
/// # Example
///
/// ```rust
/// use justdo::app::{handle_event, AppState, Event, Key};
///
/// let (state, effect) = handle_event(AppState::new(), Event::Key(Key::Char('q')));
/// assert!(state.should_quit);
/// assert!(effect.is_none());
/// ```
#[must_use]
pub fn handle_event(mut state: AppState, event: Event) -> (AppState, Option<Effect>) {
    let _span = tracing::debug_span!("handle_event", event = ?event).entered();

    let effect = match event {
        Event::Key(key) if state.ui_mode.is_text_entry() => handle_text_key(&mut state, key),
        Event::Key(key) => handle_browsing_key(&mut state, key),
        Event::Resize { width, height } => {
            state.viewport = Viewport { width, height };
            None
        }
        Event::Worker(response) => handle_worker_response(&mut state, response),
    };

    if let Some(effect) = &effect {
        tracing::debug!(effect = ?effect, "effect issued");
    }

    (state, effect)
}

fn handle_browsing_key(state: &mut AppState, key: Key) -> Option<Effect> {
    match key {
        Key::Char('q') | Key::CtrlC => {
            tracing::debug!("quit requested");
            state.should_quit = true;
            None
        }
        Key::Char('k') | Key::Up => {
            state.move_cursor_up();
            None
        }
        Key::Char('j') | Key::Down => {
            state.move_cursor_down();
            None
        }
        Key::Char('n') => {
            state.ui_mode = UiMode::Creating;
            state.edit_buffer.clear();
            state.pending_submission = None;
            None
        }
        Key::Char('e' | 'c') => {
            let Some(task) = state.selected_task().cloned() else {
                tracing::debug!("no task selected to edit");
                return None;
            };
            tracing::debug!(task_id = task.id, "editing task");
            state.ui_mode = UiMode::Editing;
            state.edit_buffer.clone_from(&task.content);
            state.editing_target = Some(task);
            state.pending_submission = None;
            None
        }
        Key::Char(' ') => state
            .selected_task()
            .map(|task| Effect::ToggleCompleted { id: task.id }),
        Key::Char('d') => state.selected_task().map(|task| Effect::Delete { id: task.id }),
        Key::Char('p') => {
            if state.view_mode != ViewMode::Active {
                return None;
            }
            state.selected_task().map(|task| Effect::UpdatePriority {
                id: task.id,
                priority: task.priority.next(),
            })
        }
        Key::Char('a') => switch_view(state, ViewMode::Active),
        Key::Char('l') => switch_view(state, ViewMode::Completed),
        Key::Tab | Key::BackTab => {
            let target = state.view_mode.other();
            switch_view(state, target)
        }
        _ => None,
    }
}

fn switch_view(state: &mut AppState, target: ViewMode) -> Option<Effect> {
    if state.view_mode == target {
        return None;
    }

    tracing::debug!(from = ?state.view_mode, to = ?target, "switching view");
    state.view_mode = target;
    state.tasks.clear();
    state.cursor = 0;
    Some(state.issue_load())
}

fn handle_text_key(state: &mut AppState, key: Key) -> Option<Effect> {
    match key {
        Key::Esc | Key::CtrlC => {
            tracing::debug!(mode = ?state.ui_mode, "edit cancelled");
            state.leave_text_entry();
            None
        }
        Key::Enter => submit(state),
        Key::Backspace => {
            state.edit_buffer.pop();
            None
        }
        Key::Char(c) if !c.is_control() => {
            state.edit_buffer.push(c);
            None
        }
        _ => None,
    }
}

fn submit(state: &mut AppState) -> Option<Effect> {
    if state.edit_buffer.trim().is_empty() {
        tracing::trace!("ignoring empty submission");
        return None;
    }
    if state.pending_submission.is_some() {
        tracing::debug!("submission already in flight");
        return None;
    }

    let content = state.edit_buffer.clone();
    let target = match (state.ui_mode, &state.editing_target) {
        (UiMode::Creating, _) => None,
        (UiMode::Editing, Some(task)) => Some(task.id),
        _ => return None,
    };

    let submission = state.issue_submission();
    Some(match target {
        None => Effect::Create { content, submission },
        Some(id) => Effect::UpdateContent { id, content, submission },
    })
}

fn handle_worker_response(state: &mut AppState, response: WorkerResponse) -> Option<Effect> {
    match response {
        WorkerResponse::TasksLoaded { view, generation, tasks, counts } => {
            if state.is_stale_load(view, generation) {
                tracing::debug!(
                    view = ?view,
                    generation = generation,
                    current_view = ?state.view_mode,
                    applied_generation = state.applied_generation,
                    "discarding stale load"
                );
                return None;
            }

            tracing::debug!(task_count = tasks.len(), generation = generation, "tasks loaded");
            state.tasks = tasks;
            state.counts = counts;
            state.applied_generation = generation;
            state.status_message = None;
            state.reclamp_cursor();
            None
        }
        WorkerResponse::LoadFailed { view, generation, message } => {
            if state.is_stale_load(view, generation) {
                tracing::debug!(view = ?view, generation = generation, "discarding stale load failure");
                return None;
            }

            tracing::warn!(error = %message, "load failed");
            state.status_message = Some(message);
            None
        }
        WorkerResponse::Mutated { kind, submission } => {
            let closes_editor = state.is_pending_submission(submission)
                && matches!(
                    (kind, state.ui_mode),
                    (MutationKind::Create, UiMode::Creating)
                        | (MutationKind::UpdateContent, UiMode::Editing)
                );
            if closes_editor {
                state.leave_text_entry();
            }

            tracing::debug!(operation = kind.describe(), "mutation committed, reloading");
            Some(state.issue_load())
        }
        WorkerResponse::MutationFailed { kind, submission, message } => {
            tracing::warn!(operation = kind.describe(), error = %message, "mutation failed");
            if state.is_pending_submission(submission) {
                state.pending_submission = None;
            }
            state.status_message = Some(message);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::TaskCounts;
    use crate::domain::{Priority, Task, TaskId};
    use chrono::{Duration, TimeZone, Utc};

    fn task(id: TaskId, content: &str) -> Task {
        let at = Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap() + Duration::seconds(id);
        Task::new(id, content, at)
    }

    fn press(state: AppState, key: Key) -> (AppState, Option<Effect>) {
        handle_event(state, Event::Key(key))
    }

    fn type_text(mut state: AppState, text: &str) -> AppState {
        for c in text.chars() {
            let (next, effect) = press(state, Key::Char(c));
            assert!(effect.is_none());
            state = next;
        }
        state
    }

    /// Delivers a load result for the most recently issued load.
    fn deliver(state: AppState, tasks: Vec<Task>) -> AppState {
        let event = Event::Worker(WorkerResponse::TasksLoaded {
            view: state.view_mode,
            generation: state.load_generation,
            tasks,
            counts: TaskCounts::default(),
        });
        let (state, effect) = handle_event(state, event);
        assert!(effect.is_none());
        state
    }

    /// Answers a mutation; creates and updates answer the submission in flight.
    fn mutated(state: AppState, kind: MutationKind) -> (AppState, Option<Effect>) {
        let submission = match kind {
            MutationKind::Create | MutationKind::UpdateContent => state.pending_submission,
            _ => None,
        };
        handle_event(state, Event::Worker(WorkerResponse::Mutated { kind, submission }))
    }

    fn browsing_with(tasks: Vec<Task>) -> AppState {
        let mut state = AppState::new();
        let _ = state.issue_load();
        deliver(state, tasks)
    }

    #[test]
    fn quit_key_sets_flag_only_while_browsing() {
        let (state, _) = press(AppState::new(), Key::CtrlC);
        assert!(state.should_quit);

        let (state, _) = press(AppState::new(), Key::Char('n'));
        let (state, _) = press(state, Key::Char('q'));
        assert!(!state.should_quit);
        assert_eq!(state.edit_buffer, "q");
    }

    #[test]
    fn cursor_never_leaves_task_list() {
        let mut state = browsing_with(vec![task(1, "a"), task(2, "b"), task(3, "c")]);
        let keys = [
            Key::Down,
            Key::Char('j'),
            Key::Down,
            Key::Down,
            Key::Up,
            Key::Char('k'),
            Key::Up,
            Key::Up,
        ];
        for key in keys {
            state = press(state, key).0;
            assert!(state.invariants_hold());
            assert!(state.cursor < 3);
        }
        assert_eq!(state.cursor, 0);
    }

    #[test]
    fn reload_with_fewer_tasks_reclamps_cursor() {
        let mut state = browsing_with(vec![task(1, "a"), task(2, "b"), task(3, "c")]);
        state.cursor = 2;
        let _ = state.issue_load();
        let state = deliver(state, vec![task(1, "a")]);
        assert_eq!(state.cursor, 0);

        let mut state = state;
        let _ = state.issue_load();
        let state = deliver(state, vec![]);
        assert_eq!(state.cursor, 0);
        assert!(state.invariants_hold());
    }

    #[test]
    fn edit_and_cancel_keep_modes_exclusive() {
        let state = browsing_with(vec![task(1, "write report")]);

        let (state, effect) = press(state, Key::Char('e'));
        assert!(effect.is_none());
        assert_eq!(state.ui_mode, UiMode::Editing);
        assert_eq!(state.edit_buffer, "write report");
        assert_eq!(state.editing_target.as_ref().map(|t| t.id), Some(1));
        assert!(state.invariants_hold());

        let (state, _) = press(state, Key::Esc);
        assert_eq!(state.ui_mode, UiMode::Browsing);
        assert!(state.editing_target.is_none());
        assert!(state.edit_buffer.is_empty());
        assert!(state.invariants_hold());

        let (state, _) = press(state, Key::Char('n'));
        assert_eq!(state.ui_mode, UiMode::Creating);
        assert!(state.editing_target.is_none());
        let (state, _) = press(state, Key::CtrlC);
        assert_eq!(state.ui_mode, UiMode::Browsing);
        assert!(!state.should_quit);
    }

    #[test]
    fn edit_without_selection_is_absorbed() {
        let before = browsing_with(vec![]);
        let (after, effect) = press(before.clone(), Key::Char('c'));
        assert!(effect.is_none());
        assert_eq!(after, before);
    }

    #[test]
    fn priority_cycle_only_in_active_view() {
        let state = browsing_with(vec![task(1, "a")]);
        let (_, effect) = press(state, Key::Char('p'));
        assert_eq!(effect, Some(Effect::UpdatePriority { id: 1, priority: Priority::P1 }));

        let (state, _) = press(browsing_with(vec![]), Key::Char('l'));
        let mut done = task(2, "done");
        done.completed = true;
        let state = deliver(state, vec![done]);
        let (_, effect) = press(state, Key::Char('p'));
        assert!(effect.is_none());
    }

    #[test]
    fn every_successful_mutation_reloads_current_view() {
        let kinds = [
            MutationKind::Toggle,
            MutationKind::Delete,
            MutationKind::UpdatePriority,
            MutationKind::Create,
            MutationKind::UpdateContent,
        ];
        for kind in kinds {
            let state = browsing_with(vec![task(1, "a")]);
            let before = state.load_generation;
            let (state, effect) = mutated(state, kind);
            assert_eq!(
                effect,
                Some(Effect::Load { view: ViewMode::Active, generation: before + 1 })
            );
            assert_eq!(state.tasks.len(), 1, "tasks must not be patched in place");
        }
    }

    #[test]
    fn load_for_previous_view_is_discarded() {
        let state = browsing_with(vec![task(1, "a")]);
        let old_generation = state.load_generation;

        let (state, effect) = press(state, Key::Tab);
        assert_eq!(state.view_mode, ViewMode::Completed);
        assert!(matches!(effect, Some(Effect::Load { view: ViewMode::Completed, .. })));

        let late = Event::Worker(WorkerResponse::TasksLoaded {
            view: ViewMode::Active,
            generation: old_generation,
            tasks: vec![task(9, "late")],
            counts: TaskCounts::default(),
        });
        let (after, effect) = handle_event(state.clone(), late);
        assert!(effect.is_none());
        assert_eq!(after, state);
    }

    #[test]
    fn older_generation_of_same_view_is_discarded() {
        let mut state = browsing_with(vec![]);
        let first = state.issue_load();
        let second = state.issue_load();
        let (Effect::Load { generation: g1, .. }, Effect::Load { generation: g2, .. }) =
            (first, second)
        else {
            panic!("expected loads");
        };

        let newer = Event::Worker(WorkerResponse::TasksLoaded {
            view: ViewMode::Active,
            generation: g2,
            tasks: vec![task(1, "fresh")],
            counts: TaskCounts::default(),
        });
        let (state, _) = handle_event(state, newer);

        let older = Event::Worker(WorkerResponse::TasksLoaded {
            view: ViewMode::Active,
            generation: g1,
            tasks: vec![],
            counts: TaskCounts::default(),
        });
        let (state, _) = handle_event(state, older);
        assert_eq!(state.tasks.len(), 1);
        assert_eq!(state.tasks[0].content, "fresh");
    }

    #[test]
    fn stale_load_failure_leaves_status_untouched() {
        let state = browsing_with(vec![]);
        let (state, _) = press(state, Key::Char('l'));
        let failure = Event::Worker(WorkerResponse::LoadFailed {
            view: ViewMode::Active,
            generation: 1,
            message: "load tasks: boom".into(),
        });
        let (state, _) = handle_event(state, failure);
        assert!(state.status_message.is_none());
    }

    #[test]
    fn empty_or_whitespace_submit_is_a_no_op() {
        let (state, _) = press(AppState::new(), Key::Char('n'));
        let before = type_text(state, "   ");

        let (after, effect) = press(before.clone(), Key::Enter);
        assert!(effect.is_none());
        assert_eq!(after, before);
        assert!(after.status_message.is_none());
    }

    #[test]
    fn double_submit_issues_one_effect() {
        let (state, _) = press(AppState::new(), Key::Char('n'));
        let state = type_text(state, "once");
        let (state, first) = press(state, Key::Enter);
        let (state, second) = press(state, Key::Enter);
        assert_eq!(first, Some(Effect::Create { content: "once".into(), submission: 1 }));
        assert!(second.is_none());
        assert_eq!(state.pending_submission, Some(1));
    }

    #[test]
    fn content_is_submitted_exactly_as_typed() {
        let (state, _) = press(AppState::new(), Key::Char('n'));
        let state = type_text(state, "  padded ");
        let (_, effect) = press(state, Key::Enter);
        assert_eq!(effect, Some(Effect::Create { content: "  padded ".into(), submission: 1 }));
    }

    #[test]
    fn failed_create_keeps_editor_and_buffer() {
        let (state, _) = press(AppState::new(), Key::Char('n'));
        let state = type_text(state, "buy milk");
        let (state, _) = press(state, Key::Enter);

        let failure = Event::Worker(WorkerResponse::MutationFailed {
            kind: MutationKind::Create,
            submission: Some(1),
            message: "create task: disk full".into(),
        });
        let (state, effect) = handle_event(state, failure);
        assert!(effect.is_none());
        assert_eq!(state.ui_mode, UiMode::Creating);
        assert_eq!(state.edit_buffer, "buy milk");
        assert!(state.pending_submission.is_none());
        assert_eq!(state.status_message.as_deref(), Some("create task: disk full"));

        // retry is allowed again
        let (_, effect) = press(state, Key::Enter);
        assert!(effect.is_some());
    }

    #[test]
    fn load_failure_keeps_tasks_and_next_load_clears_status() {
        let state = browsing_with(vec![task(1, "a")]);
        let failure = Event::Worker(WorkerResponse::LoadFailed {
            view: ViewMode::Active,
            generation: state.load_generation,
            message: "load tasks: locked".into(),
        });
        let (state, _) = handle_event(state, failure);
        assert_eq!(state.tasks.len(), 1);
        assert_eq!(state.status_message.as_deref(), Some("load tasks: locked"));

        let mut state = state;
        let _ = state.issue_load();
        let state = deliver(state, vec![task(1, "a")]);
        assert!(state.status_message.is_none());
    }

    #[test]
    fn control_characters_and_navigation_keys_are_ignored_while_typing() {
        let (state, _) = press(AppState::new(), Key::Char('n'));
        let state = type_text(state, "ab");
        let mut state = state;
        for key in [Key::Up, Key::Down, Key::Tab, Key::BackTab, Key::Char('\u{7}')] {
            state = press(state, key).0;
        }
        assert_eq!(state.edit_buffer, "ab");
        assert_eq!(state.ui_mode, UiMode::Creating);
    }

    #[test]
    fn switching_to_current_view_is_a_no_op() {
        let before = browsing_with(vec![task(1, "a")]);
        let (after, effect) = press(before.clone(), Key::Char('a'));
        assert!(effect.is_none());
        assert_eq!(after, before);
    }

    #[test]
    fn resize_updates_viewport_in_any_mode() {
        let (state, _) = press(AppState::new(), Key::Char('n'));
        let (state, effect) = handle_event(state, Event::Resize { width: 80, height: 24 });
        assert!(effect.is_none());
        assert_eq!(state.viewport, Viewport { width: 80, height: 24 });
        assert_eq!(state.ui_mode, UiMode::Creating);
    }

    #[test]
    fn scenario_create_buy_milk() {
        let (state, effect) = press(AppState::new(), Key::Char('n'));
        assert!(effect.is_none());
        let state = type_text(state, "buy milk");
        let (state, effect) = press(state, Key::Enter);
        assert_eq!(effect, Some(Effect::Create { content: "buy milk".into(), submission: 1 }));

        let (state, effect) = mutated(state, MutationKind::Create);
        assert_eq!(state.ui_mode, UiMode::Browsing);
        assert!(state.edit_buffer.is_empty());
        assert!(matches!(effect, Some(Effect::Load { view: ViewMode::Active, .. })));

        let state = deliver(state, vec![task(1, "buy milk")]);
        assert_eq!(state.tasks.len(), 1);
        assert_eq!(state.tasks[0].priority, Priority::P2);
    }

    #[test]
    fn scenario_cycle_priority_three_times() {
        let mut state = browsing_with(vec![task(1, "A")]);
        let mut seen = Vec::new();
        for _ in 0..3 {
            let (next, effect) = press(state, Key::Char('p'));
            let Some(Effect::UpdatePriority { id, priority }) = effect else {
                panic!("expected priority update, got {effect:?}");
            };
            assert_eq!(id, 1);
            seen.push(priority);

            let (next, reload) = mutated(next, MutationKind::UpdatePriority);
            assert!(reload.is_some());
            let mut updated = task(1, "A");
            updated.priority = priority;
            state = deliver(next, vec![updated]);
        }
        assert_eq!(seen, vec![Priority::P1, Priority::P0, Priority::P2]);
        assert_eq!(state.tasks[0].priority, Priority::P2);
    }

    #[test]
    fn scenario_toggle_last_task_reclamps() {
        let mut state = browsing_with(vec![task(1, "A"), task(2, "B")]);
        state = press(state, Key::Down).0;
        assert_eq!(state.cursor, 1);

        let (state, effect) = press(state, Key::Char(' '));
        assert_eq!(effect, Some(Effect::ToggleCompleted { id: 2 }));

        let (state, reload) = mutated(state, MutationKind::Toggle);
        assert!(matches!(reload, Some(Effect::Load { view: ViewMode::Active, .. })));
        let state = deliver(state, vec![task(1, "A")]);
        assert_eq!(state.cursor, 0);
        assert_eq!(state.tasks.len(), 1);
    }

    #[test]
    fn scenario_edit_backspace_submit() {
        let state = browsing_with(vec![task(1, "write report")]);
        let (state, _) = press(state, Key::Char('e'));
        let mut state = state;
        for _ in 0..6 {
            state = press(state, Key::Backspace).0;
        }
        assert_eq!(state.edit_buffer, "write ");
        let state = type_text(state, "memo");
        let (state, effect) = press(state, Key::Enter);
        assert_eq!(
            effect,
            Some(Effect::UpdateContent { id: 1, content: "write memo".into(), submission: 1 })
        );

        let (state, reload) = mutated(state, MutationKind::UpdateContent);
        assert_eq!(state.ui_mode, UiMode::Browsing);
        assert!(state.editing_target.is_none());
        assert!(reload.is_some());
    }

    #[test]
    fn unrelated_mutation_success_does_not_close_editor() {
        let state = browsing_with(vec![task(1, "a")]);
        let (state, _) = press(state, Key::Char(' '));
        let (state, _) = press(state, Key::Char('n'));
        let state = type_text(state, "draft");

        let (state, reload) = mutated(state, MutationKind::Toggle);
        assert!(reload.is_some());
        assert_eq!(state.ui_mode, UiMode::Creating);
        assert_eq!(state.edit_buffer, "draft");
    }

    #[test]
    fn cancelled_submission_answer_leaves_newer_draft_open() {
        let (state, _) = press(AppState::new(), Key::Char('n'));
        let state = type_text(state, "first");
        let (state, first) = press(state, Key::Enter);
        assert_eq!(first.as_ref().and_then(Effect::submission), Some(1));
        let (state, _) = press(state, Key::Esc);

        let (state, _) = press(state, Key::Char('n'));
        let state = type_text(state, "second");
        let (state, second) = press(state, Key::Enter);
        assert_eq!(second.as_ref().and_then(Effect::submission), Some(2));

        let first_ok = Event::Worker(WorkerResponse::Mutated {
            kind: MutationKind::Create,
            submission: Some(1),
        });
        let (state, reload) = handle_event(state, first_ok);
        assert!(reload.is_some());
        assert_eq!(state.ui_mode, UiMode::Creating);
        assert_eq!(state.edit_buffer, "second");
        assert_eq!(state.pending_submission, Some(2));

        let second_failed = Event::Worker(WorkerResponse::MutationFailed {
            kind: MutationKind::Create,
            submission: Some(2),
            message: "create task: disk full".into(),
        });
        let (state, _) = handle_event(state, second_failed);
        assert_eq!(state.ui_mode, UiMode::Creating);
        assert_eq!(state.edit_buffer, "second");
        assert!(state.pending_submission.is_none());
        assert_eq!(state.status_message.as_deref(), Some("create task: disk full"));
        assert!(state.invariants_hold());
    }

    #[test]
    fn cancelled_submission_failure_keeps_newer_submission_guarded() {
        let (state, _) = press(AppState::new(), Key::Char('n'));
        let state = type_text(state, "first");
        let (state, _) = press(state, Key::Enter);
        let (state, _) = press(state, Key::Esc);
        let (state, _) = press(state, Key::Char('n'));
        let state = type_text(state, "second");
        let (state, _) = press(state, Key::Enter);

        let first_failed = Event::Worker(WorkerResponse::MutationFailed {
            kind: MutationKind::Create,
            submission: Some(1),
            message: "create task: disk full".into(),
        });
        let (state, _) = handle_event(state, first_failed);
        assert_eq!(state.pending_submission, Some(2));

        let (state, resubmit) = press(state, Key::Enter);
        assert!(resubmit.is_none());
        assert_eq!(state.edit_buffer, "second");
    }
}
