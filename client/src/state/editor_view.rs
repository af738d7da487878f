//! Editor chrome state mirrored from engine actions.
//!
//! DESIGN
//! ======
//! The engine is authoritative. `EditorHost` feeds every batch of
//! `canvas::engine::Action`s through [`EditorViewState::apply`], which updates
//! the fields the toolbar and scrollbars render from and returns the
//! side effects the host still has to perform on the DOM.

#[cfg(test)]
#[path = "editor_view_test.rs"]
mod editor_view_test;

use canvas::engine::Action;
use canvas::input::Tool;
use canvas::transform::WheelAdjust;
use canvas::viewport::Axis;

/// Lifecycle of the sprite sheet load.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum TextureStatus {
    #[default]
    Loading,
    Ready,
    Failed(String),
}

/// UI-facing snapshot of the editing session.
#[derive(Clone, Debug, Default)]
pub struct EditorViewState {
    pub texture: TextureStatus,
    pub active_tool: Tool,
    pub preview_visible: bool,
    pub scroll_x: u32,
    pub scroll_y: u32,
    pub thumb_x: f64,
    pub thumb_y: f64,
    pub placed_count: usize,
    pub last_adjust: Option<WheelAdjust>,
    /// Bumped by the toolbar; `EditorHost` runs `pending_command` once per bump.
    pub command_seq: u64,
    pub pending_command: Option<String>,
}

/// DOM work left to the host after an action batch.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HostEffects {
    pub render: bool,
    pub prevent_default: bool,
    pub notices: Vec<String>,
}

impl EditorViewState {
    /// Queue a toolbar command for the host.
    pub fn request_command(&mut self, id: &str) {
        self.command_seq += 1;
        self.pending_command = Some(id.to_owned());
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.texture == TextureStatus::Ready
    }

    /// Fold a batch of engine actions into the view and collect host effects.
    pub fn apply(&mut self, actions: &[Action]) -> HostEffects {
        let mut effects = HostEffects::default();
        for action in actions {
            match action {
                Action::ScrollChanged { axis: Axis::Horizontal, offset } => self.scroll_x = *offset,
                Action::ScrollChanged { axis: Axis::Vertical, offset } => self.scroll_y = *offset,
                Action::ThumbMoved { axis: Axis::Horizontal, px } => self.thumb_x = *px,
                Action::ThumbMoved { axis: Axis::Vertical, px } => self.thumb_y = *px,
                Action::ToolChanged { to, .. } => self.active_tool = *to,
                Action::PreviewVisibility(visible) => self.preview_visible = *visible,
                Action::SpritePlaced(_) => self.placed_count += 1,
                Action::TransformChanged(adjust) => self.last_adjust = Some(*adjust),
                Action::PreventDefault => effects.prevent_default = true,
                Action::Notice(message) => effects.notices.push(message.clone()),
                Action::RenderNeeded => effects.render = true,
            }
        }
        effects
    }
}
