//! Types for the stylesheet file (`*.theme.ron`).

use std::str::FromStr;

use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Colors as written in the theme file: names (`"cyan"`, `"dark gray"`),
/// `"#rrggbb"` or an indexed color number.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    pub background: String,
    pub foreground: String,
    /// Borders of unfocused panes and the entry placeholder.
    pub dim: String,
    /// Border of the focused entry.
    pub accent: String,
    /// Title bar colors.
    pub title_bg: String,
    pub title_fg: String,
    #[serde(default)]
    pub bold_titles: bool,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: "black".to_string(),
            foreground: "white".to_string(),
            dim: "dark gray".to_string(),
            accent: "cyan".to_string(),
            title_bg: "dark gray".to_string(),
            title_fg: "white".to_string(),
            bold_titles: true,
        }
    }
}

/// A theme with every color parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub bg: Color,
    pub fg: Color,
    pub dim: Color,
    pub accent: Color,
    pub title_bg: Color,
    pub title_fg: Color,
    pub bold_titles: bool,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            bg: Color::Black,
            fg: Color::White,
            dim: Color::DarkGray,
            accent: Color::Cyan,
            title_bg: Color::DarkGray,
            title_fg: Color::White,
            bold_titles: true,
        }
    }
}

impl Palette {
    pub fn base(&self) -> Style {
        Style::default().bg(self.bg).fg(self.fg)
    }

    pub fn border(&self, focused: bool) -> Style {
        Style::default().fg(if focused { self.accent } else { self.dim })
    }

    pub fn title_bar(&self) -> Style {
        let style = Style::default().bg(self.title_bg).fg(self.title_fg);
        if self.bold_titles {
            style.add_modifier(Modifier::BOLD)
        } else {
            style
        }
    }
}

fn parse_color(field: &'static str, value: &str) -> Result<Color> {
    Color::from_str(value.trim()).map_err(|_| Error::InvalidColor {
        field,
        value: value.to_string(),
    })
}

impl Theme {
    /// Load a theme from a RON file.
    pub fn load(path: &std::path::Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::ThemeNotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path)?;
        let theme: Theme = ron::from_str(&content)?;
        Ok(theme)
    }

    /// Parse every color field.
    pub fn palette(&self) -> Result<Palette> {
        Ok(Palette {
            bg: parse_color("background", &self.background)?,
            fg: parse_color("foreground", &self.foreground)?,
            dim: parse_color("dim", &self.dim)?,
            accent: parse_color("accent", &self.accent)?,
            title_bg: parse_color("title_bg", &self.title_bg)?,
            title_fg: parse_color("title_fg", &self.title_fg)?,
            bold_titles: self.bold_titles,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme_matches_default_palette() {
        assert_eq!(Theme::default().palette().unwrap(), Palette::default());
    }

    #[test]
    fn test_parse_hex_and_named_colors() {
        let ron_str = r##"
Theme(
    background: "#1e1e2e",
    foreground: "white",
    dim: "gray",
    accent: "light blue",
    title_bg: "blue",
    title_fg: "black",
)
"##;
        let theme: Theme = ron::from_str(ron_str).unwrap();
        let palette = theme.palette().unwrap();
        assert_eq!(palette.bg, Color::Rgb(0x1e, 0x1e, 0x2e));
        assert_eq!(palette.accent, Color::LightBlue);
        assert!(!palette.bold_titles);
    }

    #[test]
    fn test_invalid_color_names_field() {
        let theme = Theme {
            accent: "not-a-color".to_string(),
            ..Theme::default()
        };
        let err = theme.palette().unwrap_err();
        assert!(matches!(err, Error::InvalidColor { field: "accent", .. }));
    }

    #[test]
    fn test_border_style_follows_focus() {
        let palette = Palette::default();
        assert_eq!(palette.border(true).fg, Some(Color::Cyan));
        assert_eq!(palette.border(false).fg, Some(Color::DarkGray));
    }

    #[test]
    fn test_load_missing_file() {
        let err = Theme::load(std::path::Path::new("/nonexistent/x.theme.ron")).unwrap_err();
        assert!(matches!(err, Error::ThemeNotFound(_)));
    }
}
