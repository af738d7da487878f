//! Editor configuration: canvas extent, chrome margins, sprite defaults.
//!
//! Every field has a default from [`crate::consts`]. A host may override any
//! subset by passing a JSON object to [`EditorConfig::from_json`]; missing
//! keys keep their defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts::{CANVAS_EXTENT, CHROME_MARGIN_X, CHROME_MARGIN_Y, DEFAULT_FRAME_SIZE, DEFAULT_TEXTURE_URL, WHEEL_STEP};
use crate::error::EditorError;

/// Tunables for one editing session.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Side length of the logical canvas.
    pub canvas_extent: u32,
    /// Chrome subtracted from the window width to get the visible width.
    pub chrome_margin_x: u32,
    /// Chrome subtracted from the window height to get the visible height.
    pub chrome_margin_y: u32,
    /// Edge length of the default atlas frame.
    pub frame_size: u32,
    /// Scale/rotation change per wheel tick.
    pub wheel_step: f64,
    /// URL of the sprite sheet image.
    pub texture_url: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            canvas_extent: CANVAS_EXTENT,
            chrome_margin_x: CHROME_MARGIN_X,
            chrome_margin_y: CHROME_MARGIN_Y,
            frame_size: DEFAULT_FRAME_SIZE,
            wheel_step: WHEEL_STEP,
            texture_url: DEFAULT_TEXTURE_URL.to_owned(),
        }
    }
}

impl EditorConfig {
    /// Parse a (possibly partial) JSON config.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::Json`] if `json` is not a valid config object.
    pub fn from_json(json: &str) -> Result<Self, EditorError> {
        Ok(serde_json::from_str(json)?)
    }
}
