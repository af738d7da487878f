//! Sprite placement engine for the browser level editor.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! editing session: a scrollable viewport over a 16384×16384 logical canvas,
//! the active tool, the transform staged for the next placement, the preview
//! ghost, and the ordered scene of placed sprites. The host layer wires DOM
//! events to the engine and applies the resulting [`engine::Action`]s to its
//! toolbar, scrollbars, and canvas.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] |
//! | [`viewport`] | Scroll axes, max-scroll bounds, and scrollbar thumb drags |
//! | [`camera`] | Scroll projection and coordinate conversions |
//! | [`input`] | Tools, toolbar commands, modifiers, and the tool state machine |
//! | [`tools`] | Per-tool handlers; the draw tool places sprites |
//! | [`transform`] | Scale and rotation staged by the wheel |
//! | [`scene`] | Placed sprites and the preview ghost |
//! | [`atlas`] | Texture atlases, frames, and UVs |
//! | [`render`] | Canvas2D drawing of the world and preview layers |
//! | [`config`] | Session configuration |
//! | [`error`] | Error type for atlas and JSON failures |
//! | [`consts`] | Shared numeric constants (extent, chrome margins, wheel step) |

pub mod atlas;
pub mod camera;
pub mod config;
pub mod consts;
pub mod engine;
pub mod error;
pub mod input;
pub mod render;
pub mod scene;
pub mod tools;
pub mod transform;
pub mod viewport;
