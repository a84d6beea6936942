//! Top-level rendering coordinator.
//!
//! This module provides the main rendering entry point, coordinating view model
//! computation and delegation to UI components.
//!
//! # Architecture
//!
//! The renderer follows a two-step process:
//!
//! 1. **View Model Computation**: Transform `AppState` into `UIViewModel`
//! 2. **Component Rendering**: Delegate to specialized component renderers
//!
//! Rendering is pure: the result is a frame string of text and ANSI escapes
//! that the terminal adapter writes out after clearing the screen.

use crate::app::AppState;
use crate::ui::components;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{compute_viewmodel, UIViewModel};

/// Placeholder shown until the first resize event reports a usable size.
pub const LOADING: &str = "Loading...";

/// Renders the whole screen for `state`.
///
/// # Returns
///
/// [`LOADING`] when the viewport has zero width or height, otherwise the
/// complete frame.
///
/// # Example
///
/// ```rust
/// use justdo::app::{AppState, Viewport};
/// use justdo::ui::{render, Theme};
///
/// let mut state = AppState::new();
/// assert_eq!(render(&state, &Theme::default()), "Loading...");
///
/// state.viewport = Viewport { width: 80, height: 24 };
/// assert!(render(&state, &Theme::default()).contains("justdo"));
/// ```
#[must_use]
pub fn render(state: &AppState, theme: &Theme) -> String {
    if state.viewport.is_empty() {
        return LOADING.to_string();
    }

    let viewmodel = compute_viewmodel(state);
    let mut out = String::new();
    render_viewmodel(
        &mut out,
        &viewmodel,
        theme,
        usize::from(state.viewport.width),
        usize::from(state.viewport.height),
    );
    out
}

/// Renders a view model with mode-specific layout.
fn render_viewmodel(out: &mut String, vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    if let Some(editor) = &vm.editor {
        components::render_editor_mode(out, vm, editor, theme, cols, rows);
    } else {
        components::render_browse_mode(out, vm, theme, cols, rows);
    }
}
