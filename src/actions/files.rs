//! File I/O for the layout and theme files.

use std::path::{Path, PathBuf};

use crate::data::layout::{Layout, ResolvedLayout};
use crate::data::theme::{Palette, Theme};
use crate::error::Result;

/// File name of the starter layout written by `--init`.
pub const LAYOUT_FILE_NAME: &str = "starter.layout.ron";
/// File name of the starter theme written by `--init`.
pub const THEME_FILE_NAME: &str = "starter.theme.ron";

/// Load a layout and resolve its required widgets.
pub fn load_layout(path: &Path) -> Result<ResolvedLayout> {
    Layout::load(path)?.resolve()
}

/// Load a theme and parse its colors.
pub fn load_theme(path: &Path) -> Result<Palette> {
    Theme::load(path)?.palette()
}

/// Write the starter layout and theme into `dir`, creating it if needed.
pub fn create_templates(dir: &Path) -> std::io::Result<(PathBuf, PathBuf)> {
    std::fs::create_dir_all(dir)?;
    let layout_path = dir.join(LAYOUT_FILE_NAME);
    let theme_path = dir.join(THEME_FILE_NAME);
    std::fs::write(&layout_path, LAYOUT_TEMPLATE)?;
    std::fs::write(&theme_path, THEME_TEMPLATE)?;
    Ok((layout_path, theme_path))
}

const LAYOUT_TEMPLATE: &str = r#"Layout(
    window: Window(
        id: "main-window",
        title: "Overkill Chat",
    ),
    widgets: [
        Widget(
            id: "chatlogscroll",
            kind: ScrolledWindow,
            title: Some(" Chat "),
            child: Some("chatlog"),
        ),
        Widget(
            id: "chatlog",
            kind: TextView,
        ),
        Widget(
            id: "chatentry",
            kind: Entry,
            title: Some(" Message "),
            placeholder: Some("Type a message and press Enter"),
        ),
    ],
    entry_height: 3,
)
"#;

const THEME_TEMPLATE: &str = r##"Theme(
    background: "black",
    foreground: "white",
    dim: "dark gray",
    accent: "cyan",
    title_bg: "dark gray",
    title_fg: "white",
    bold_titles: true,
)
"##;
