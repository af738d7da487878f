//! Rendering: draws the world layer and the preview layer to a 2D context.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! It reads engine state and produces pixels; it never mutates the session.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.
//! The top-level caller ([`crate::engine::Engine::render`]) handles the result.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use wasm_bindgen::JsValue;
use web_sys::{CanvasRenderingContext2d, HtmlImageElement};

use crate::atlas::{AtlasSet, Frame, TextureRef};
use crate::camera::{Camera, Point};
use crate::consts::PREVIEW_ALPHA;
use crate::engine::EngineCore;
use crate::scene::{Anchor, PlacedSprite};
use crate::transform::PendingTransform;

/// Canvas-bounds dash segment length in screen pixels.
const BOUNDS_DASH_PX: f64 = 6.0;

const BOUNDS_STROKE: &str = "#9AA0A6";

/// Axis-aligned rectangle in logical units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    /// The part of the logical canvas currently shown.
    #[must_use]
    pub fn visible_window(camera: Camera, width: f64, height: f64) -> Self {
        Self {
            min_x: camera.scroll_x,
            min_y: camera.scroll_y,
            max_x: camera.scroll_x + width,
            max_y: camera.scroll_y + height,
        }
    }

    /// Conservative bounds of a sprite: a square around its anchor that
    /// contains the frame under any rotation.
    #[must_use]
    pub fn around_sprite(sprite: &PlacedSprite, frame: &Frame) -> Self {
        let reach = (frame.width * sprite.scale_x).hypot(frame.height * sprite.scale_y);
        Self {
            min_x: sprite.x - reach,
            min_y: sprite.y - reach,
            max_x: sprite.x + reach,
            max_y: sprite.y + reach,
        }
    }

    #[must_use]
    pub fn intersects(&self, other: &Self) -> bool {
        self.min_x <= other.max_x && other.min_x <= self.max_x && self.min_y <= other.max_y && other.min_y <= self.max_y
    }
}

/// Draw the full scene: placed sprites, then the preview ghost.
///
/// `dpr` is the device pixel ratio; the visible size comes from the viewport.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails (e.g. invalid context state).
pub fn draw(ctx: &CanvasRenderingContext2d, image: &HtmlImageElement, core: &EngineCore, dpr: f64) -> Result<(), JsValue> {
    let (width, height) = core.viewport().visible_size();
    let camera = core.camera();
    let image_size = (f64::from(image.natural_width()), f64::from(image.natural_height()));

    ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0)?;
    ctx.clear_rect(0.0, 0.0, width, height);
    ctx.set_image_smoothing_enabled(false);

    // Layer 1: world, scrolled.
    ctx.save();
    let offset = camera.container_translation();
    ctx.translate(offset.x, offset.y)?;
    draw_canvas_bounds(ctx, f64::from(core.config().canvas_extent))?;

    let window = Bounds::visible_window(camera, width, height);
    for sprite in core.scene().iter() {
        let Some((frame, src)) = sprite_source(core.atlases(), sprite.texture, image_size) else {
            continue;
        };
        if !Bounds::around_sprite(sprite, &frame).intersects(&window) {
            continue;
        }
        let transform = PendingTransform { scale_x: sprite.scale_x, scale_y: sprite.scale_y, rotation: sprite.rotation };
        draw_sprite(ctx, image, &frame, &src, sprite.position(), transform, sprite.anchor)?;
    }
    ctx.restore();

    // Layer 2: preview, in screen space.
    let preview = core.preview();
    if preview.visible
        && let Some((frame, src)) = sprite_source(core.atlases(), preview.texture, image_size)
    {
        ctx.save();
        ctx.set_global_alpha(PREVIEW_ALPHA);
        draw_sprite(ctx, image, &frame, &src, preview.position, preview.transform, preview.anchor)?;
        ctx.restore();
    }

    Ok(())
}

/// The frame a texture names and its source rectangle in the loaded image.
///
/// An unresolvable texture is logged and skipped rather than failing the frame.
fn sprite_source(atlases: &AtlasSet, texture: TextureRef, image_size: (f64, f64)) -> Option<(Frame, Frame)> {
    let resolved = atlases
        .resolve(texture)
        .copied()
        .and_then(|frame| {
            atlases
                .source_rect(texture, image_size.0, image_size.1)
                .map(|src| (frame, src))
        });
    match resolved {
        Ok(pair) => Some(pair),
        Err(e) => {
            log::warn!("skipping sprite: {e}");
            None
        }
    }
}

/// Top-left of a frame of the given size, relative to its anchor point.
#[must_use]
pub fn anchor_offset(anchor: Anchor, width: f64, height: f64) -> Point {
    Point::new(-anchor.x * width, -anchor.y * height)
}

/// Draw one frame about its anchor at `at`, rotated then scaled.
fn draw_sprite(
    ctx: &CanvasRenderingContext2d,
    image: &HtmlImageElement,
    frame: &Frame,
    src: &Frame,
    at: Point,
    transform: PendingTransform,
    anchor: Anchor,
) -> Result<(), JsValue> {
    let origin = anchor_offset(anchor, frame.width, frame.height);

    ctx.save();
    ctx.translate(at.x, at.y)?;
    ctx.rotate(transform.rotation)?;
    ctx.scale(transform.scale_x, transform.scale_y)?;
    ctx.draw_image_with_html_image_element_and_sw_and_sh_and_dx_and_dy_and_dw_and_dh(
        image,
        src.x,
        src.y,
        src.width,
        src.height,
        origin.x,
        origin.y,
        frame.width,
        frame.height,
    )?;
    ctx.restore();
    Ok(())
}

/// Dashed outline of the logical canvas.
fn draw_canvas_bounds(ctx: &CanvasRenderingContext2d, extent: f64) -> Result<(), JsValue> {
    ctx.save();
    ctx.set_stroke_style_str(BOUNDS_STROKE);
    ctx.set_line_width(1.0);
    let dash_array = js_sys::Array::new();
    dash_array.push(&BOUNDS_DASH_PX.into());
    dash_array.push(&BOUNDS_DASH_PX.into());
    ctx.set_line_dash(&dash_array)?;
    ctx.stroke_rect(0.0, 0.0, extent, extent);
    ctx.set_line_dash(&js_sys::Array::new())?;
    ctx.restore();
    Ok(())
}
