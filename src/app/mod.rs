//! Application layer coordinating state, events, and effects.
//!
//! This module defines the core application logic, sitting between the
//! terminal loop ([`crate::tui`]) and the storage/worker layers. It implements
//! the event-driven state machine that powers the interactive UI.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! Key / Resize → Event → handle_event → (next AppState, Option<Effect>)
//!                  ↑                                        ↓
//!                  └──────── WorkerResponse ◄── EffectRunner┘
//! ```
//!
//! # Modules
//!
//! - [`effects`]: Persistence operations requested by the reducer
//! - [`handler`]: Reducer and the event/key types it consumes
//! - [`modes`]: UI and view mode state machine types
//! - [`state`]: Central application state container
//!
//! # Example
//!
//! ```rust
//! use justdo::app::{handle_event, AppState, Effect, Event, Key, ViewMode};
//!
//! let (state, effect) = handle_event(AppState::new(), Event::Key(Key::Tab));
//! assert_eq!(state.view_mode, ViewMode::Completed);
//! assert!(matches!(effect, Some(Effect::Load { view: ViewMode::Completed, .. })));
//! ```

pub mod effects;
pub mod handler;
pub mod modes;
pub mod state;

pub use effects::{Effect, MutationKind};
pub use handler::{handle_event, Event, Key};
pub use modes::{UiMode, ViewMode};
pub use state::{AppState, TaskCounts, Viewport};
