//! Styling: metrics, the color table and font selection.
//!
//! A [`Style`] is a plain value copied into each [`Context`](crate::Context).
//! It can be built in code or loaded once at startup from TOML:
//!
//! ```toml
//! padding = 6
//! spacing = 2
//! size = { x = 80, y = 12 }
//! ```
//!
//! Missing keys keep their defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{StyleError, StyleResult};
use crate::geometry::{Color, Vec2};

/// Opaque font handle, interpreted only by the [`Backend`](crate::Backend).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FontId(pub u32);

/// Index into the style color table.
///
/// The `Button`/`Base` families are laid out as normal, hover, focus so a
/// control can shift its color by interaction state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(usize)]
pub enum ColorId {
    /// Text.
    Text,
    /// Frame borders.
    Border,
    /// Window background.
    WindowBg,
    /// Title bar background.
    TitleBg,
    /// Title bar text.
    TitleText,
    /// Panel background.
    PanelBg,
    /// Button, idle.
    Button,
    /// Button, hovered.
    ButtonHover,
    /// Button, focused.
    ButtonFocus,
    /// Input base, idle.
    Base,
    /// Input base, hovered.
    BaseHover,
    /// Input base, focused.
    BaseFocus,
    /// Scrollbar track.
    ScrollBase,
    /// Scrollbar thumb.
    ScrollThumb,
}

impl ColorId {
    /// Number of entries in the color table.
    pub const COUNT: usize = 14;

    /// Every color id in table order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Text,
        Self::Border,
        Self::WindowBg,
        Self::TitleBg,
        Self::TitleText,
        Self::PanelBg,
        Self::Button,
        Self::ButtonHover,
        Self::ButtonFocus,
        Self::Base,
        Self::BaseHover,
        Self::BaseFocus,
        Self::ScrollBase,
        Self::ScrollThumb,
    ];

    /// Returns the id `by` entries further down the table, saturating at the
    /// last entry.
    #[must_use]
    pub fn shifted(self, by: usize) -> Self {
        Self::ALL[(self as usize + by).min(Self::COUNT - 1)]
    }
}

/// Engine-wide look and metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Style {
    /// Font passed to the backend for all text.
    pub font: FontId,
    /// Default control content size.
    pub size: Vec2,
    /// Inner padding of controls and container bodies.
    pub padding: i32,
    /// Gap between laid-out items.
    pub spacing: i32,
    /// Tree node indentation.
    pub indent: i32,
    /// Window title bar height.
    pub title_height: i32,
    /// Scrollbar thickness.
    pub scrollbar_size: i32,
    /// Minimum scrollbar / slider thumb length.
    pub thumb_size: i32,
    /// Color table indexed by [`ColorId`].
    pub colors: [Color; ColorId::COUNT],
}

impl Style {
    /// Looks up a color.
    #[inline]
    #[must_use]
    pub fn color(&self, id: ColorId) -> Color {
        self.colors[id as usize]
    }

    /// Replaces a color.
    #[inline]
    pub fn set_color(&mut self, id: ColorId, color: Color) {
        self.colors[id as usize] = color;
    }

    /// Parses a style from a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::Parse`] if the document is malformed.
    pub fn from_toml_str(source: &str) -> StyleResult<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Loads a style from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::Io`] if the file cannot be read and
    /// [`StyleError::Parse`] if it is malformed.
    pub fn load(path: impl AsRef<Path>) -> StyleResult<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| StyleError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let style = Self::from_toml_str(&source)?;
        tracing::info!(path = %path.display(), "loaded style");
        Ok(style)
    }
}

impl Default for Style {
    fn default() -> Self {
        Self {
            font: FontId(0),
            size: Vec2::new(68, 10),
            padding: 5,
            spacing: 4,
            indent: 24,
            title_height: 24,
            scrollbar_size: 12,
            thumb_size: 8,
            colors: [
                Color::rgba(230, 230, 230, 255), // text
                Color::rgba(25, 25, 25, 255),    // border
                Color::rgba(50, 50, 50, 255),    // window bg
                Color::rgba(25, 25, 25, 255),    // title bg
                Color::rgba(240, 240, 240, 255), // title text
                Color::rgba(0, 0, 0, 0),         // panel bg
                Color::rgba(75, 75, 75, 255),    // button
                Color::rgba(95, 95, 95, 255),    // button hover
                Color::rgba(115, 115, 115, 255), // button focus
                Color::rgba(30, 30, 30, 255),    // base
                Color::rgba(35, 35, 35, 255),    // base hover
                Color::rgba(40, 40, 40, 255),    // base focus
                Color::rgba(43, 43, 43, 255),    // scroll base
                Color::rgba(30, 30, 30, 255),    // scroll thumb
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let style = Style::from_toml_str("padding = 9\nsize = { x = 80, y = 12 }\n").unwrap();
        let defaults = Style::default();

        assert_eq!(style.padding, 9);
        assert_eq!(style.size, Vec2::new(80, 12));
        assert_eq!(style.spacing, defaults.spacing);
        assert_eq!(style.colors, defaults.colors);
    }

    #[test]
    fn test_toml_roundtrip() {
        let mut style = Style::default();
        style.set_color(ColorId::WindowBg, Color::rgb(1, 2, 3));
        let text = toml::to_string(&style).unwrap();
        assert_eq!(Style::from_toml_str(&text).unwrap(), style);
    }

    #[test]
    fn test_bad_toml_is_a_parse_error() {
        let err = Style::from_toml_str("padding = \"wide\"").unwrap_err();
        assert!(matches!(err, StyleError::Parse(_)));
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let err = Style::load("/nonexistent/tessera/style.toml").unwrap_err();
        assert!(matches!(err, StyleError::Io { .. }));
    }

    #[test]
    fn test_color_shift_follows_table() {
        assert_eq!(ColorId::Button.shifted(1), ColorId::ButtonHover);
        assert_eq!(ColorId::Base.shifted(2), ColorId::BaseFocus);
        assert_eq!(ColorId::ScrollThumb.shifted(3), ColorId::ScrollThumb);
    }
}
