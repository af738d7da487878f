//! Input model: tools, toolbar commands, modifier keys, and the tool state machine.
//!
//! `Tool` and `Modifiers` capture the user's intent at the time of a pointer
//! or wheel event. `Command` is what the toolbar sends; most commands select
//! a tool, two open picker flows that are not implemented yet. `ToolState`
//! holds the single active tool and reports transitions so the host can swap
//! toolbar indicators and preview visibility.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

/// Which tool is currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tool {
    /// No tool; pointer and wheel input over the canvas is ignored.
    #[default]
    None,
    /// Place sprites from the current texture.
    Draw,
    /// Reserved for moving placed sprites. Handlers are inert for now.
    Move,
}

impl Tool {
    /// Toolbar identifier for this tool.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Draw => "draw",
            Self::Move => "move",
        }
    }

    /// Whether the placement preview is shown while this tool is active.
    #[must_use]
    pub fn shows_preview(self) -> bool {
        matches!(self, Self::Draw)
    }
}

/// A toolbar command, parsed from its identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Switch the active tool.
    Tool(Tool),
    /// Open the layer picker. Not implemented; the active tool is unchanged.
    LayerPicker,
    /// Open the sprite picker. Not implemented; the active tool is unchanged.
    SpritePicker,
}

impl Command {
    /// Parse a toolbar identifier. Unrecognized identifiers select [`Tool::None`].
    #[must_use]
    pub fn parse(id: &str) -> Self {
        match id {
            "draw" => Self::Tool(Tool::Draw),
            "move" => Self::Tool(Tool::Move),
            "layers" => Self::LayerPicker,
            "sprite" => Self::SpritePicker,
            _ => Self::Tool(Tool::None),
        }
    }
}

/// Modifier keys that pick which transform component the wheel adjusts.
#[derive(Debug, Clone, Copy, Default)]
pub struct Modifiers {
    /// Shift key is held.
    pub shift: bool,
    /// Ctrl key is held.
    pub ctrl: bool,
}

/// Wheel / trackpad scroll delta. Only the vertical component drives transforms.
#[derive(Debug, Clone, Copy)]
pub struct WheelDelta {
    /// Vertical scroll amount in pixels (positive = down).
    pub dy: f64,
}

/// A change of active tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolTransition {
    /// Tool whose indicator is deactivated.
    pub from: Tool,
    /// Tool whose indicator is activated.
    pub to: Tool,
}

/// The single active tool.
#[derive(Debug, Clone, Copy, Default)]
pub struct ToolState {
    current: Tool,
}

impl ToolState {
    #[must_use]
    pub fn current(&self) -> Tool {
        self.current
    }

    /// Make `tool` active. Returns `None` when it already was.
    pub fn activate(&mut self, tool: Tool) -> Option<ToolTransition> {
        if tool == self.current {
            return None;
        }
        let from = self.current;
        self.current = tool;
        Some(ToolTransition { from, to: tool })
    }

    /// Whether the placement preview should be visible.
    #[must_use]
    pub fn preview_visible(&self) -> bool {
        self.current.shows_preview()
    }
}
