//! Interactive terminal interface.
//!
//! Owns the terminal and runs the single event loop: terminal input and worker
//! responses are multiplexed with `tokio::select!`, fed through
//! [`handle_event`], and a fresh frame is drawn after every transition.
//!
//! # Modules
//!
//! - `keys`: crossterm event translation
//! - `terminal`: raw mode / alternate screen guard

pub mod keys;
pub mod terminal;

use crate::app::{handle_event, AppState, Event};
use crate::storage::TaskStore;
use crate::ui::{render, Theme};
use crate::worker::{EffectRunner, TaskWorker};
use crate::Result;
use crossterm::event::EventStream;
use futures_util::StreamExt;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::{self, UnboundedReceiver};
use tracing::Instrument;

pub use terminal::TerminalGuard;

/// Runs the interactive interface until the user quits.
///
/// After the terminal is restored, in-flight effects get up to
/// `drain_timeout` to finish so a mutation issued just before quitting is not
/// lost.
///
/// # Errors
///
/// Returns [`crate::JustdoError::Io`] if the terminal cannot be set up, or if
/// reading input or drawing fails mid-session.
pub async fn run(store: Arc<dyn TaskStore>, theme: Theme, drain_timeout: Duration) -> Result<()> {
    let mut guard = TerminalGuard::enter()?;

    let (tx, rx) = mpsc::unbounded_channel();
    let mut runner = EffectRunner::new(TaskWorker::new(store), tx);

    let outcome = event_loop(&mut guard, &mut runner, rx, &theme)
        .instrument(tracing::info_span!("event_loop"))
        .await;
    drop(guard);

    let abandoned = runner.drain(drain_timeout).await;
    if abandoned > 0 {
        tracing::warn!(abandoned, "quit with effects still running");
    }

    outcome
}

async fn event_loop(
    guard: &mut TerminalGuard,
    runner: &mut EffectRunner,
    mut responses: UnboundedReceiver<Event>,
    theme: &Theme,
) -> Result<()> {
    let (mut state, initial_load) = crate::initialize();
    let (width, height) = guard.size()?;
    state = step(state, Event::Resize { width, height }, runner);
    runner.dispatch(initial_load);
    guard.draw(&render(&state, theme))?;

    let mut input = EventStream::new();

    while !state.should_quit {
        let event = tokio::select! {
            Some(response) = responses.recv() => response,
            next = input.next() => match next {
                Some(Ok(raw)) => match keys::translate(&raw) {
                    Some(event) => event,
                    None => continue,
                },
                Some(Err(e)) => return Err(e.into()),
                None => {
                    tracing::info!("input stream closed");
                    break;
                }
            },
        };

        state = step(state, event, runner);
        guard.draw(&render(&state, theme))?;
    }

    tracing::info!("quitting");
    Ok(())
}

fn step(state: AppState, event: Event, runner: &mut EffectRunner) -> AppState {
    let (next, effect) = handle_event(state, event);
    if let Some(effect) = effect {
        runner.dispatch(effect);
    }
    next
}
