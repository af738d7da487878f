//! Reactive host state shared through Leptos context.

pub mod editor_view;
