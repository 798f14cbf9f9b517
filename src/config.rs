//! Locating the layout and theme files.
//!
//! Precedence: command-line flags, then the `OVERKILL_LAYOUT` /
//! `OVERKILL_THEME` environment variables, then the starter files under
//! `gui/lib`. The environment is only honoured when both variables are set;
//! with one missing both fall back to the defaults.

use std::path::PathBuf;

pub const LAYOUT_ENV: &str = "OVERKILL_LAYOUT";
pub const THEME_ENV: &str = "OVERKILL_THEME";

pub const DEFAULT_LAYOUT: &str = "gui/lib/starter.layout.ron";
pub const DEFAULT_THEME: &str = "gui/lib/starter.theme.ron";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigPaths {
    pub layout: PathBuf,
    pub theme: PathBuf,
}

impl ConfigPaths {
    /// Resolve from flags and the process environment.
    pub fn resolve(layout_flag: Option<PathBuf>, theme_flag: Option<PathBuf>) -> Self {
        Self::resolve_with(
            layout_flag,
            theme_flag,
            std::env::var_os(LAYOUT_ENV).map(PathBuf::from),
            std::env::var_os(THEME_ENV).map(PathBuf::from),
        )
    }

    pub fn resolve_with(
        layout_flag: Option<PathBuf>,
        theme_flag: Option<PathBuf>,
        layout_env: Option<PathBuf>,
        theme_env: Option<PathBuf>,
    ) -> Self {
        let (layout_base, theme_base) = match (layout_env, theme_env) {
            (Some(layout), Some(theme)) => (layout, theme),
            _ => (PathBuf::from(DEFAULT_LAYOUT), PathBuf::from(DEFAULT_THEME)),
        };
        Self {
            layout: layout_flag.unwrap_or(layout_base),
            theme: theme_flag.unwrap_or(theme_base),
        }
    }
}
