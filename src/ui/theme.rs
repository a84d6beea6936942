//! Theme management and ANSI escape sequence generation.
//!
//! This module defines the color scheme system, supporting built-in themes and
//! custom themes loaded from TOML files. It provides utilities for converting
//! hex colors to 24-bit ANSI escape sequences.
//!
//! # Built-in Themes
//!
//! - `magenta`: Magenta accents on a dark terminal (default)
//! - `catppuccin-mocha`: Dark theme with warm pastel tones
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#cdd6f4"
//! accent = "#f5c2e7"
//! selection_fg = "#1e1e2e"
//! selection_bg = "#f5c2e7"
//! text_normal = "#cdd6f4"
//! text_dim = "#6c7086"
//! completed_fg = "#7f849c"
//! border = "#45475a"
//! input_fg = "#cdd6f4"
//! input_bg = "#313244"
//! priority_p0 = "#f38ba8"
//! priority_p1 = "#f9e2af"
//! priority_p2 = "#a6e3a1"
//! message_fg = "#f38ba8"
//! empty_state_fg = "#89b4fa"
//! ```
//!
//! # Example
//!
//! ```rust
//! use justdo::ui::Theme;
//!
//! let theme = Theme::from_name("catppuccin-mocha").unwrap();
//! let title = format!("{}{}justdo{}", Theme::bold(), Theme::fg(&theme.colors.header_fg), Theme::reset());
//! assert!(title.ends_with("\u{1b}[0m"));
//! ```

use crate::domain::{JustdoError, Priority, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Name of the theme used when none is configured.
pub const DEFAULT_THEME: &str = "magenta";

/// Color scheme configuration for UI rendering.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    /// Color palette for all UI elements.
    pub colors: ThemeColors,
}

/// Color definitions for all UI elements.
///
/// All colors are hex strings (e.g. `"#cdd6f4"`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Title text color.
    pub header_fg: String,
    /// Optional title background color.
    #[serde(default)]
    pub header_bg: Option<String>,

    /// Accent for tabs, the row cursor and the subtitle.
    pub accent: String,

    /// Selected row foreground color.
    pub selection_fg: String,
    /// Selected row background color.
    pub selection_bg: String,

    /// Normal text color.
    pub text_normal: String,
    /// Dimmed text color (footer, secondary info).
    pub text_dim: String,
    /// Completed task text color.
    pub completed_fg: String,

    /// Border and separator line color.
    pub border: String,

    /// Text entry foreground.
    pub input_fg: String,
    /// Text entry background.
    pub input_bg: String,

    /// `P0` badge color.
    pub priority_p0: String,
    /// `P1` badge color.
    pub priority_p1: String,
    /// `P2` badge color.
    pub priority_p2: String,

    /// Status/error message color.
    pub message_fg: String,

    /// Empty state message color.
    pub empty_state_fg: String,
}

impl ThemeColors {
    /// Returns the badge color for `priority`.
    #[must_use]
    pub fn priority(&self, priority: Priority) -> &str {
        match priority {
            Priority::P0 => &self.priority_p0,
            Priority::P1 => &self.priority_p1,
            Priority::P2 => &self.priority_p2,
        }
    }
}

impl Theme {
    /// Names accepted by [`Theme::from_name`].
    pub const BUILT_IN: [&'static str; 2] = ["magenta", "catppuccin-mocha"];

    /// Loads a built-in theme by name.
    ///
    /// # Returns
    ///
    /// - `Some(Theme)` if the theme name is recognized
    /// - `None` if the theme name is unknown
    ///
    /// # Example
    ///
    /// ```rust
    /// use justdo::ui::Theme;
    ///
    /// let theme = Theme::from_name("magenta").unwrap();
    /// assert_eq!(theme.name, "magenta");
    /// assert!(Theme::from_name("solarized").is_none());
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "magenta" => include_str!("../../themes/magenta.toml"),
            "catppuccin-mocha" => include_str!("../../themes/catppuccin-mocha.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`JustdoError::Theme`] if:
    /// - The file cannot be read (file not found, permission denied, etc.)
    /// - The TOML content cannot be parsed (invalid syntax, missing fields, type mismatches)
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| {
            JustdoError::Theme(format!("failed to read theme file {}: {e}", path.display()))
        })?;

        toml::from_str(&contents)
            .map_err(|e| JustdoError::Theme(format!("failed to parse theme TOML: {e}")))
    }

    /// Converts a hex color to RGB tuple.
    ///
    /// Returns `(255, 255, 255)` (white) on parse errors.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim_start_matches('#').trim();

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);

        (r, g, b)
    }

    /// Generates an ANSI 24-bit foreground color escape sequence.
    ///
    /// # Example
    ///
    /// ```rust
    /// use justdo::ui::Theme;
    ///
    /// assert_eq!(Theme::fg("#ff0080"), "\u{1b}[38;2;255;0;128m");
    /// ```
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// Generates an ANSI 24-bit background color escape sequence.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    /// Returns the ANSI bold escape sequence (`\x1b[1m`).
    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    /// Returns the ANSI dim escape sequence (`\x1b[2m`).
    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    /// Returns the ANSI italic escape sequence (`\x1b[3m`).
    #[must_use]
    pub const fn italic() -> &'static str {
        "\u{001b}[3m"
    }

    /// Returns the ANSI strikethrough escape sequence (`\x1b[9m`).
    #[must_use]
    pub const fn strikethrough() -> &'static str {
        "\u{001b}[9m"
    }

    /// Returns the ANSI reset escape sequence (`\x1b[0m`).
    ///
    /// Clears all styling (colors, bold, dim, etc.).
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }

    /// Uncolored fallback used if a built-in theme ever fails to parse.
    fn plain() -> Self {
        let white = || "#ffffff".to_string();
        Self {
            name: "plain".to_string(),
            colors: ThemeColors {
                header_fg: white(),
                header_bg: None,
                accent: white(),
                selection_fg: "#000000".to_string(),
                selection_bg: white(),
                text_normal: white(),
                text_dim: "#808080".to_string(),
                completed_fg: "#808080".to_string(),
                border: "#808080".to_string(),
                input_fg: white(),
                input_bg: "#000000".to_string(),
                priority_p0: white(),
                priority_p1: white(),
                priority_p2: white(),
                message_fg: white(),
                empty_state_fg: white(),
            },
        }
    }
}

impl Default for Theme {
    /// Returns the default theme (magenta).
    fn default() -> Self {
        Self::from_name(DEFAULT_THEME).unwrap_or_else(|| {
            tracing::warn!(theme = DEFAULT_THEME, "built-in theme failed to parse");
            Self::plain()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn every_built_in_theme_parses() {
        for name in Theme::BUILT_IN {
            let theme = Theme::from_name(name).unwrap_or_else(|| panic!("{name} should parse"));
            assert_eq!(theme.name, name);
        }
        assert_eq!(Theme::default().name, DEFAULT_THEME);
    }

    #[test]
    fn hex_conversion_falls_back_to_white() {
        assert_eq!(Theme::hex_to_rgb("#1e1e2e"), (0x1e, 0x1e, 0x2e));
        assert_eq!(Theme::hex_to_rgb("abc"), (255, 255, 255));
        assert_eq!(Theme::hex_to_rgb("#zz0000"), (255, 0, 0));
    }

    #[test]
    fn priority_colors_map_to_badges() {
        let theme = Theme::from_name("catppuccin-mocha").unwrap();
        assert_eq!(theme.colors.priority(Priority::P0), "#f38ba8");
        assert_eq!(theme.colors.priority(Priority::P2), "#a6e3a1");
    }

    #[test]
    fn custom_theme_file_round_trips_and_bad_files_error() {
        let theme = Theme::from_name("magenta").unwrap();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", toml::to_string(&theme).unwrap()).unwrap();
        assert_eq!(Theme::from_file(file.path()).unwrap(), theme);

        let mut broken = tempfile::NamedTempFile::new().unwrap();
        write!(broken, "name = \"half\"").unwrap();
        assert!(matches!(Theme::from_file(broken.path()), Err(JustdoError::Theme(_))));
        assert!(matches!(
            Theme::from_file("/definitely/not/here.toml"),
            Err(JustdoError::Theme(_))
        ));
    }
}
