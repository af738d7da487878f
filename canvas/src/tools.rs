//! Per-tool input handlers and the placement engine.
//!
//! Each [`Tool`] maps to a [`ToolHandler`] through [`handler`]. The engine
//! builds a [`ToolContext`] borrowing the session state a handler may touch
//! and dispatches the event to whichever handler is active. Only the draw
//! tool does anything today; the move tool is reserved and inert.

#[cfg(test)]
#[path = "tools_test.rs"]
mod tools_test;

use crate::atlas::TextureRef;
use crate::camera::{Camera, Point};
use crate::engine::Action;
use crate::input::{Modifiers, Tool, WheelDelta};
use crate::scene::{PlacedSprite, PreviewSprite, Scene};
use crate::transform::PendingTransform;

/// Session state lent to a tool handler for the duration of one event.
pub struct ToolContext<'a> {
    /// Current scroll projection.
    pub camera: Camera,
    /// Texture used for new placements.
    pub texture: TextureRef,
    /// Wheel adjustment per tick.
    pub wheel_step: f64,
    pub pending: &'a mut PendingTransform,
    pub preview: &'a mut PreviewSprite,
    pub scene: &'a mut Scene,
}

/// Pointer and wheel callbacks for one tool. Defaults ignore the event.
pub trait ToolHandler {
    fn on_pointer_down(&self, _ctx: &mut ToolContext<'_>, _screen: Point) -> Vec<Action> {
        Vec::new()
    }

    fn on_pointer_move(&self, _ctx: &mut ToolContext<'_>, _screen: Point) -> Vec<Action> {
        Vec::new()
    }

    fn on_pointer_up(&self, _ctx: &mut ToolContext<'_>, _screen: Point) -> Vec<Action> {
        Vec::new()
    }

    fn on_wheel(&self, _ctx: &mut ToolContext<'_>, _delta: WheelDelta, _modifiers: Modifiers) -> Vec<Action> {
        Vec::new()
    }
}

/// Handler for [`Tool::None`].
pub struct NoTool;

impl ToolHandler for NoTool {}

/// Handler for [`Tool::Move`]. Moving placed sprites is not implemented yet.
pub struct MoveTool;

impl ToolHandler for MoveTool {}

/// Handler for [`Tool::Draw`]: preview tracking, wheel transforms, placement.
pub struct DrawTool;

impl ToolHandler for DrawTool {
    /// Commit a sprite at the pointer's logical position with the staged transform.
    fn on_pointer_down(&self, ctx: &mut ToolContext<'_>, screen: Point) -> Vec<Action> {
        let world = ctx.camera.screen_to_world(screen);
        let sprite = PlacedSprite::new(ctx.texture, world, *ctx.pending);
        let id = ctx.scene.push(sprite);
        log::debug!("placed sprite {id} at ({}, {})", world.x, world.y);
        vec![Action::SpritePlaced(id), Action::RenderNeeded]
    }

    /// The preview is drawn unscrolled, so it takes the raw viewport position.
    fn on_pointer_move(&self, ctx: &mut ToolContext<'_>, screen: Point) -> Vec<Action> {
        ctx.preview.position = screen;
        vec![Action::RenderNeeded]
    }

    fn on_wheel(&self, ctx: &mut ToolContext<'_>, delta: WheelDelta, modifiers: Modifiers) -> Vec<Action> {
        let adjust = ctx.pending.apply_wheel(delta.dy, modifiers, ctx.wheel_step);
        ctx.preview.sync_transform(*ctx.pending);
        vec![Action::PreventDefault, Action::TransformChanged(adjust), Action::RenderNeeded]
    }
}

/// Handler table.
#[must_use]
pub fn handler(tool: Tool) -> &'static dyn ToolHandler {
    match tool {
        Tool::None => &NoTool,
        Tool::Draw => &DrawTool,
        Tool::Move => &MoveTool,
    }
}
