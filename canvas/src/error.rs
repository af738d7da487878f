//! Error type for the fallible, non-geometric parts of the engine.
//!
//! Degenerate viewport geometry is never an error; those paths early-return.
//! What remains is bad input from the host: texture references that do not
//! resolve and malformed JSON for the atlas manifest or editor config.

/// Error returned by atlas lookups and JSON loaders.
#[derive(Debug, thiserror::Error)]
pub enum EditorError {
    /// The texture reference names an atlas index past the end of the set.
    #[error("unknown atlas index: {0}")]
    UnknownAtlas(usize),
    /// The atlas exists but has no frame at this index.
    #[error("unknown frame {frame} in atlas {atlas}")]
    UnknownFrame { atlas: usize, frame: usize },
    /// A manifest or config document could not be parsed.
    #[error("invalid json: {0}")]
    Json(#[from] serde_json::Error),
}
