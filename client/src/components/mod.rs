//! UI components. All of them read and write `EditorViewState` from context.

pub mod editor_host;
pub mod toolbar;
