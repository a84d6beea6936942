//! Terminal presentation for justdo.
//!
//! Everything here is a pure function of [`crate::app::AppState`] and a
//! [`Theme`]: the result is a frame string of text, ANSI colors and cursor
//! escapes. Writing it to the terminal is the job of [`crate::tui`].
//!
//! ```text
//! AppState ─► compute_viewmodel ─► UIViewModel ─► components ─► String
//! ```
//!
//! - [`viewmodel`]: display-ready snapshot (windowed rows, tab labels, hints)
//! - [`renderer`]: [`render`], the entry point
//! - [`components`]: one renderer per screen region
//! - [`helpers`]: cursor positioning and cell-width-aware text
//! - [`theme`]: TOML color schemes and ANSI escapes

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::render;
pub use theme::Theme;
pub use viewmodel::{
    compute_viewmodel, DisplayItem, EditorInfo, EmptyState, FooterInfo, HeaderInfo, TabInfo,
    UIViewModel,
};
