//! Scene model: placed sprites, the ordered scene that owns them, and the preview ghost.
//!
//! Placed sprites live in logical canvas space and are drawn back-to-front in
//! insertion order, so a later placement always draws on top of an earlier
//! one. The preview lives in viewport space and is never part of the scene.

#[cfg(test)]
#[path = "scene_test.rs"]
mod scene_test;

use uuid::Uuid;

use crate::atlas::TextureRef;
use crate::camera::Point;
use crate::transform::PendingTransform;

/// Unique identifier for a placed sprite.
pub type SpriteId = Uuid;

/// Normalized pivot within a sprite's frame; `(0.5, 0.5)` is the center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anchor {
    pub x: f64,
    pub y: f64,
}

impl Anchor {
    pub const CENTER: Self = Self { x: 0.5, y: 0.5 };
}

impl Default for Anchor {
    fn default() -> Self {
        Self::CENTER
    }
}

/// A sprite committed to the scene. Immutable once placed.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedSprite {
    pub id: SpriteId,
    pub texture: TextureRef,
    /// Anchor position on the logical canvas.
    pub x: f64,
    /// Anchor position on the logical canvas.
    pub y: f64,
    /// Radians.
    pub rotation: f64,
    pub scale_x: f64,
    pub scale_y: f64,
    pub anchor: Anchor,
}

impl PlacedSprite {
    /// Create a sprite at `position` with a snapshot of `transform`, anchored at its center.
    #[must_use]
    pub fn new(texture: TextureRef, position: Point, transform: PendingTransform) -> Self {
        Self {
            id: Uuid::new_v4(),
            texture,
            x: position.x,
            y: position.y,
            rotation: transform.rotation,
            scale_x: transform.scale_x,
            scale_y: transform.scale_y,
            anchor: Anchor::CENTER,
        }
    }

    #[must_use]
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Append-only, ordered collection of placed sprites.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    sprites: Vec<PlacedSprite>,
}

impl Scene {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a sprite on top of everything placed so far.
    pub fn push(&mut self, sprite: PlacedSprite) -> SpriteId {
        let id = sprite.id;
        self.sprites.push(sprite);
        id
    }

    /// Sprites in draw order (bottom first).
    pub fn iter(&self) -> impl Iterator<Item = &PlacedSprite> {
        self.sprites.iter()
    }

    /// Topmost sprite.
    #[must_use]
    pub fn last(&self) -> Option<&PlacedSprite> {
        self.sprites.last()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }
}

/// The placement ghost that follows the pointer while drawing.
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewSprite {
    pub texture: TextureRef,
    /// Viewport position; not affected by scrolling.
    pub position: Point,
    pub transform: PendingTransform,
    pub anchor: Anchor,
    pub visible: bool,
}

impl PreviewSprite {
    #[must_use]
    pub fn new(texture: TextureRef) -> Self {
        Self {
            texture,
            position: Point::default(),
            transform: PendingTransform::default(),
            anchor: Anchor::CENTER,
            visible: false,
        }
    }

    /// Mirror the staged transform.
    pub fn sync_transform(&mut self, transform: PendingTransform) {
        self.transform = transform;
    }
}
