use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

use crate::atlas::AtlasSet;
use crate::camera::{Camera, Point};
use crate::config::EditorConfig;
use crate::input::{Command, Modifiers, Tool, ToolState, WheelDelta};
use crate::render;
use crate::scene::{PreviewSprite, Scene, SpriteId};
use crate::tools::{self, ToolContext, ToolHandler};
use crate::transform::{PendingTransform, WheelAdjust};
use crate::viewport::{Axis, TrackGeometry, Viewport};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Notice shown when the layer picker is requested.
pub const LAYERS_NOTICE: &str = "Layer selection is not implemented yet.";

/// Notice shown when the sprite picker is requested.
pub const SPRITE_NOTICE: &str = "Sprite selection is not implemented yet.";

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// A drag wrote a new scroll offset; the world layer moves to `-offset`.
    ScrollChanged { axis: Axis, offset: u32 },
    /// Move a scrollbar thumb to `px` along its track.
    ThumbMoved { axis: Axis, px: f64 },
    /// Swap toolbar indicators.
    ToolChanged { from: Tool, to: Tool },
    /// Show or hide the placement preview.
    PreviewVisibility(bool),
    SpritePlaced(SpriteId),
    TransformChanged(WheelAdjust),
    /// Suppress the browser's default handling of the current event.
    PreventDefault,
    /// Tell the user something is not available.
    Notice(String),
    RenderNeeded,
}

/// Editing session state with no dependency on the canvas element.
///
/// Holds the viewport, the active tool, the staged transform, the preview,
/// the scene and the atlases. Kept apart from `Engine` so it can be tested
/// without a browser.
pub struct EngineCore {
    config: EditorConfig,
    viewport: Viewport,
    tools: ToolState,
    pending: PendingTransform,
    preview: PreviewSprite,
    scene: Scene,
    atlases: AtlasSet,
}

impl Default for EngineCore {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

impl EngineCore {
    /// A session using the single default atlas frame.
    #[must_use]
    pub fn new(config: EditorConfig) -> Self {
        let atlases = AtlasSet::single(&config.texture_url, config.frame_size);
        Self::with_atlases(config, atlases)
    }

    #[must_use]
    pub fn with_atlases(config: EditorConfig, atlases: AtlasSet) -> Self {
        Self {
            viewport: Viewport::from_config(&config),
            tools: ToolState::default(),
            pending: PendingTransform::default(),
            preview: PreviewSprite::new(atlases.current_texture()),
            scene: Scene::new(),
            atlases,
            config,
        }
    }

    // --- Viewport ---

    /// Window resized: recompute bounds, clamp offsets, reposition thumbs.
    pub fn resize(&mut self, window_w: u32, window_h: u32) -> Vec<Action> {
        let before = [self.viewport.offset(Axis::Horizontal), self.viewport.offset(Axis::Vertical)];
        self.viewport.resize(window_w, window_h);
        log::debug!(
            "viewport resized to {window_w}x{window_h}, max scroll {}x{}",
            self.viewport.max_scroll(Axis::Horizontal),
            self.viewport.max_scroll(Axis::Vertical)
        );

        let mut actions = Vec::new();
        for (axis, prev) in [Axis::Horizontal, Axis::Vertical].into_iter().zip(before) {
            let offset = self.viewport.offset(axis);
            if offset != prev {
                actions.push(Action::ScrollChanged { axis, offset });
            }
            actions.push(Action::ThumbMoved { axis, px: self.viewport.thumb_offset(axis) });
        }
        actions.push(Action::RenderNeeded);
        actions
    }

    /// Record scrollbar widget lengths measured by the host.
    pub fn set_track_geometry(&mut self, axis: Axis, geometry: TrackGeometry) {
        self.viewport.set_track_geometry(axis, geometry);
    }

    /// Pointer pressed on a scrollbar thumb. Returns whether a drag started.
    pub fn begin_scroll_drag(&mut self, axis: Axis, pointer: f64) -> bool {
        self.viewport.begin_drag(axis, pointer)
    }

    /// Pointer moved anywhere while a thumb may be held.
    pub fn scroll_drag_move(&mut self, axis: Axis, pointer: f64) -> Vec<Action> {
        let Some(offset) = self.viewport.drag_move(axis, pointer) else {
            return Vec::new();
        };
        log::trace!("scroll {axis:?} -> {offset}");
        vec![
            Action::ThumbMoved { axis, px: self.viewport.thumb_offset(axis) },
            Action::ScrollChanged { axis, offset },
            Action::RenderNeeded,
        ]
    }

    /// Pointer released anywhere: ends any thumb drag.
    pub fn end_scroll_drag(&mut self) {
        self.viewport.end_drag();
    }

    // --- Toolbar ---

    /// Run a toolbar command by identifier.
    pub fn run_command(&mut self, id: &str) -> Vec<Action> {
        match Command::parse(id) {
            Command::Tool(tool) => self.set_tool(tool),
            Command::LayerPicker => vec![Action::Notice(LAYERS_NOTICE.to_owned())],
            Command::SpritePicker => vec![Action::Notice(SPRITE_NOTICE.to_owned())],
        }
    }

    /// Activate `tool`. Re-selecting the active tool returns no actions.
    pub fn set_tool(&mut self, tool: Tool) -> Vec<Action> {
        let Some(transition) = self.tools.activate(tool) else {
            return Vec::new();
        };
        let visible = self.tools.preview_visible();
        self.preview.visible = visible;
        log::debug!("tool {:?} -> {:?}", transition.from, transition.to);
        vec![
            Action::ToolChanged { from: transition.from, to: transition.to },
            Action::PreviewVisibility(visible),
            Action::RenderNeeded,
        ]
    }

    // --- Canvas input ---

    pub fn on_pointer_down(&mut self, screen: Point) -> Vec<Action> {
        self.dispatch(|h, ctx| h.on_pointer_down(ctx, screen))
    }

    pub fn on_pointer_move(&mut self, screen: Point) -> Vec<Action> {
        self.dispatch(|h, ctx| h.on_pointer_move(ctx, screen))
    }

    pub fn on_pointer_up(&mut self, screen: Point) -> Vec<Action> {
        self.dispatch(|h, ctx| h.on_pointer_up(ctx, screen))
    }

    pub fn on_wheel(&mut self, delta: WheelDelta, modifiers: Modifiers) -> Vec<Action> {
        self.dispatch(|h, ctx| h.on_wheel(ctx, delta, modifiers))
    }

    fn dispatch<F>(&mut self, f: F) -> Vec<Action>
    where
        F: FnOnce(&dyn ToolHandler, &mut ToolContext<'_>) -> Vec<Action>,
    {
        let handler = tools::handler(self.tools.current());
        let mut ctx = ToolContext {
            camera: self.viewport.camera(),
            texture: self.atlases.current_texture(),
            wheel_step: self.config.wheel_step,
            pending: &mut self.pending,
            preview: &mut self.preview,
            scene: &mut self.scene,
        };
        f(handler, &mut ctx)
    }

    // --- Queries ---

    #[must_use]
    pub fn camera(&self) -> Camera {
        self.viewport.camera()
    }

    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    #[must_use]
    pub fn preview(&self) -> &PreviewSprite {
        &self.preview
    }

    #[must_use]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    #[must_use]
    pub fn atlases(&self) -> &AtlasSet {
        &self.atlases
    }

    #[must_use]
    pub fn config(&self) -> &EditorConfig {
        &self.config
    }
}

/// The full engine. Wraps `EngineCore` and owns the browser canvas and the loaded texture.
///
/// Only constructible once the texture has loaded, so no input reaches the
/// core before the scene can be drawn.
pub struct Engine {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    texture: HtmlImageElement,
    dpr: f64,
    pub core: EngineCore,
}

impl Engine {
    /// Bind a session to a canvas element and an already-loaded texture.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the canvas cannot provide a 2D context.
    pub fn new(canvas: HtmlCanvasElement, texture: HtmlImageElement, core: EngineCore) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { canvas, ctx, texture, dpr: 1.0, core })
    }

    // --- Viewport ---

    /// Resize the session and the canvas backing store.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn resize(&mut self, window_w: u32, window_h: u32, dpr: f64) -> Vec<Action> {
        let actions = self.core.resize(window_w, window_h);
        self.dpr = dpr.max(1.0);
        let (w, h) = self.core.viewport().visible_size();
        self.canvas.set_width((w * self.dpr).round() as u32);
        self.canvas.set_height((h * self.dpr).round() as u32);
        actions
    }

    pub fn set_track_geometry(&mut self, axis: Axis, geometry: TrackGeometry) {
        self.core.set_track_geometry(axis, geometry);
    }

    pub fn begin_scroll_drag(&mut self, axis: Axis, pointer: f64) -> bool {
        self.core.begin_scroll_drag(axis, pointer)
    }

    pub fn scroll_drag_move(&mut self, axis: Axis, pointer: f64) -> Vec<Action> {
        self.core.scroll_drag_move(axis, pointer)
    }

    pub fn end_scroll_drag(&mut self) {
        self.core.end_scroll_drag();
    }

    // --- Toolbar ---

    pub fn run_command(&mut self, id: &str) -> Vec<Action> {
        self.core.run_command(id)
    }

    // --- Input events ---

    pub fn on_pointer_down(&mut self, screen: Point) -> Vec<Action> {
        self.core.on_pointer_down(screen)
    }

    pub fn on_pointer_move(&mut self, screen: Point) -> Vec<Action> {
        self.core.on_pointer_move(screen)
    }

    pub fn on_pointer_up(&mut self, screen: Point) -> Vec<Action> {
        self.core.on_pointer_up(screen)
    }

    pub fn on_wheel(&mut self, delta: WheelDelta, modifiers: Modifiers) -> Vec<Action> {
        self.core.on_wheel(delta, modifiers)
    }

    // --- Render ---

    /// Draw the current state to the canvas.
    ///
    /// # Errors
    ///
    /// Returns `Err` if any `Canvas2D` call fails.
    pub fn render(&self) -> Result<(), JsValue> {
        render::draw(&self.ctx, &self.texture, &self.core, self.dpr)
    }

    // --- Delegated queries ---

    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        self.core.viewport()
    }
}
