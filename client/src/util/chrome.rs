//! Toolbar entries, style strings, and config loading for the editor chrome.

#[cfg(test)]
#[path = "chrome_test.rs"]
mod chrome_test;

use canvas::config::EditorConfig;
use canvas::input::{Command, Tool};
use canvas::viewport::Axis;

use crate::state::editor_view::EditorViewState;

/// One toolbar button: command identifier and label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToolbarEntry {
    pub id: &'static str,
    pub label: &'static str,
}

/// Buttons in toolbar order.
pub const TOOLBAR: [ToolbarEntry; 5] = [
    ToolbarEntry { id: "none", label: "Pointer" },
    ToolbarEntry { id: "draw", label: "Draw" },
    ToolbarEntry { id: "move", label: "Move" },
    ToolbarEntry { id: "layers", label: "Layers" },
    ToolbarEntry { id: "sprite", label: "Sprite" },
];

/// CSS class for a toolbar button. Only tool buttons can be active.
#[must_use]
pub fn button_class(id: &str, active: Tool) -> &'static str {
    match Command::parse(id) {
        Command::Tool(tool) if tool == active => "toolbar__button toolbar__button--active",
        _ => "toolbar__button",
    }
}

/// Inline style placing a scrollbar thumb `px` pixels along its track.
#[must_use]
pub fn thumb_style(axis: Axis, px: f64) -> String {
    match axis {
        Axis::Horizontal => format!("transform: translateX({px:.0}px);"),
        Axis::Vertical => format!("transform: translateY({px:.0}px);"),
    }
}

/// Short status line for the toolbar footer.
#[must_use]
pub fn status_line(view: &EditorViewState) -> String {
    format!(
        "{} | {},{} | {} placed",
        view.active_tool.id(),
        view.scroll_x,
        view.scroll_y,
        view.placed_count
    )
}

/// Editor config from the optional `data-config` attribute.
///
/// A missing attribute gives the defaults. A malformed one is logged and
/// also gives the defaults, so a bad page never blocks the editor.
#[must_use]
pub fn load_config(raw: Option<&str>) -> EditorConfig {
    let Some(raw) = raw.filter(|s| !s.trim().is_empty()) else {
        return EditorConfig::default();
    };
    match EditorConfig::from_json(raw) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("ignoring data-config: {e}");
            EditorConfig::default()
        }
    }
}
