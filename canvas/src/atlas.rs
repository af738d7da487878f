//! Texture atlases: source images cut into rectangular frames.
//!
//! A [`TextureRef`] addresses one frame of one atlas. Sprite selection is not
//! implemented yet, so the current texture is always atlas 0, frame 0.

#[cfg(test)]
#[path = "atlas_test.rs"]
mod atlas_test;

use serde::Deserialize;

use crate::camera::Point;
use crate::error::EditorError;

/// A rectangular region of an atlas image, in image pixels.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Frame {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Normalized texture coordinates of a frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Uv {
    pub start: Point,
    pub end: Point,
}

impl Frame {
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Texture coordinates of this frame within an atlas of the given size.
    ///
    /// A zero-sized atlas yields all-zero coordinates rather than NaN.
    #[must_use]
    pub fn uv(&self, atlas_width: f64, atlas_height: f64) -> Uv {
        if atlas_width <= 0.0 || atlas_height <= 0.0 {
            return Uv { start: Point::default(), end: Point::default() };
        }
        Uv {
            start: Point::new(self.x / atlas_width, self.y / atlas_height),
            end: Point::new((self.x + self.width) / atlas_width, (self.y + self.height) / atlas_height),
        }
    }
}

/// One source image and the frames cut from it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Atlas {
    /// Image URL, resolved by the host.
    pub source: String,
    /// Image width in pixels.
    pub width: f64,
    /// Image height in pixels.
    pub height: f64,
    pub frames: Vec<Frame>,
}

/// Reference to a frame: atlas index, then frame index within it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TextureRef {
    pub atlas: usize,
    pub frame: usize,
}

impl TextureRef {
    #[must_use]
    pub fn new(atlas: usize, frame: usize) -> Self {
        Self { atlas, frame }
    }
}

/// Ordered list of atlases available to the session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AtlasSet {
    atlases: Vec<Atlas>,
}

impl AtlasSet {
    #[must_use]
    pub fn new(atlases: Vec<Atlas>) -> Self {
        Self { atlases }
    }

    /// A single atlas holding one `frame_size`×`frame_size` frame at the origin.
    #[must_use]
    pub fn single(source: &str, frame_size: u32) -> Self {
        let size = f64::from(frame_size);
        Self::new(vec![Atlas {
            source: source.to_owned(),
            width: size,
            height: size,
            frames: vec![Frame::new(0.0, 0.0, size, size)],
        }])
    }

    /// Parse a JSON array of atlases.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::Json`] if `json` is not an array of atlas objects.
    pub fn from_json(json: &str) -> Result<Self, EditorError> {
        let atlases: Vec<Atlas> = serde_json::from_str(json)?;
        Ok(Self::new(atlases))
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Atlas> {
        self.atlases.get(index)
    }

    /// Look up the frame a texture reference points to.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::UnknownAtlas`] or [`EditorError::UnknownFrame`]
    /// when either index is out of range.
    pub fn resolve(&self, texture: TextureRef) -> Result<&Frame, EditorError> {
        let atlas = self
            .atlases
            .get(texture.atlas)
            .ok_or(EditorError::UnknownAtlas(texture.atlas))?;
        atlas
            .frames
            .get(texture.frame)
            .ok_or(EditorError::UnknownFrame { atlas: texture.atlas, frame: texture.frame })
    }

    /// Source rectangle of `texture` within a loaded image of the given natural size.
    ///
    /// The frame is mapped through its UVs, so an image loaded at a different
    /// resolution than the manifest declares is still cropped proportionally.
    ///
    /// # Errors
    ///
    /// Same as [`AtlasSet::resolve`].
    pub fn source_rect(&self, texture: TextureRef, image_width: f64, image_height: f64) -> Result<Frame, EditorError> {
        let frame = self.resolve(texture)?;
        let atlas = self.atlases.get(texture.atlas).ok_or(EditorError::UnknownAtlas(texture.atlas))?;
        let uv = frame.uv(atlas.width, atlas.height);
        Ok(Frame::new(
            uv.start.x * image_width,
            uv.start.y * image_height,
            (uv.end.x - uv.start.x) * image_width,
            (uv.end.y - uv.start.y) * image_height,
        ))
    }

    /// The texture new placements use. Always the first frame of the first atlas.
    #[must_use]
    pub fn current_texture(&self) -> TextureRef {
        TextureRef::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.atlases.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.atlases.is_empty()
    }
}
