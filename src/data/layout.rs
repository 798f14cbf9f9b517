//! Types for the UI description file (`*.layout.ron`).

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Id of the top-level window.
pub const MAIN_WINDOW: &str = "main-window";
/// Id of the scrollback text view.
pub const CHAT_LOG: &str = "chatlog";
/// Id of the message entry.
pub const CHAT_ENTRY: &str = "chatentry";
/// Id of the scroll container around the text view.
pub const CHAT_LOG_SCROLL: &str = "chatlogscroll";

/// Widget types a layout may declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WidgetKind {
    ScrolledWindow,
    TextView,
    Entry,
}

impl WidgetKind {
    pub fn name(self) -> &'static str {
        match self {
            WidgetKind::ScrolledWindow => "ScrolledWindow",
            WidgetKind::TextView => "TextView",
            WidgetKind::Entry => "Entry",
        }
    }
}

/// The top-level window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Window {
    pub id: String,
    pub title: String,
}

/// A named widget in the layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Widget {
    pub id: String,
    pub kind: WidgetKind,
    /// Border title shown on the widget.
    #[serde(default)]
    pub title: Option<String>,
    /// For containers: id of the wrapped widget.
    #[serde(default)]
    pub child: Option<String>,
    /// For entries: hint shown while empty.
    #[serde(default)]
    pub placeholder: Option<String>,
}

fn default_entry_height() -> u16 {
    3
}

/// Root type for layout files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Layout {
    pub window: Window,
    pub widgets: Vec<Widget>,
    /// Rows given to the entry, borders included.
    #[serde(default = "default_entry_height")]
    pub entry_height: u16,
}

/// A layout whose required widgets have all been found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLayout {
    pub window_title: String,
    pub log_title: Option<String>,
    pub entry_title: Option<String>,
    pub placeholder: Option<String>,
    pub entry_height: u16,
}

impl Layout {
    /// Load a layout from a RON file.
    pub fn load(path: &std::path::Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::LayoutNotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path)?;
        let layout: Layout = ron::from_str(&content)?;
        Ok(layout)
    }

    /// Find a widget by id and check its kind.
    pub fn widget(&self, id: &str, kind: WidgetKind) -> Result<&Widget> {
        let widget = self
            .widgets
            .iter()
            .find(|w| w.id == id)
            .ok_or_else(|| Error::MissingWidget(id.to_string()))?;
        if widget.kind != kind {
            return Err(Error::WidgetKind {
                name: id.to_string(),
                expected: kind.name(),
            });
        }
        Ok(widget)
    }

    /// Resolve the window, log, entry and scroll container by name.
    pub fn resolve(&self) -> Result<ResolvedLayout> {
        if self.window.id != MAIN_WINDOW {
            return Err(Error::MissingWidget(MAIN_WINDOW.to_string()));
        }
        let log = self.widget(CHAT_LOG, WidgetKind::TextView)?;
        let entry = self.widget(CHAT_ENTRY, WidgetKind::Entry)?;
        let scroll = self.widget(CHAT_LOG_SCROLL, WidgetKind::ScrolledWindow)?;
        if scroll.child.as_deref() != Some(CHAT_LOG) {
            return Err(Error::WidgetKind {
                name: CHAT_LOG_SCROLL.to_string(),
                expected: "ScrolledWindow wrapping 'chatlog'",
            });
        }

        Ok(ResolvedLayout {
            window_title: self.window.title.clone(),
            log_title: scroll.title.clone().or_else(|| log.title.clone()),
            entry_title: entry.title.clone(),
            placeholder: entry.placeholder.clone(),
            entry_height: self.entry_height.max(3),
        })
    }
}
