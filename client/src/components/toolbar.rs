//! Left-hand toolbar: tool buttons, picker buttons, and a status footer.
//!
//! Buttons never touch the engine. A click queues its command identifier in
//! `EditorViewState`, and `EditorHost` runs it against the session.

use leptos::prelude::*;

use crate::state::editor_view::{EditorViewState, TextureStatus};
use crate::util::chrome::{TOOLBAR, button_class, status_line};

/// Toolbar column.
#[component]
pub fn Toolbar() -> impl IntoView {
    let editor = expect_context::<RwSignal<EditorViewState>>();

    let buttons = TOOLBAR
        .iter()
        .map(|entry| {
            let id = entry.id;
            let class = move || button_class(id, editor.get().active_tool);
            let on_click = move |_| editor.update(|v| v.request_command(id));
            view! {
                <button
                    class=class
                    data-command=id
                    disabled=move || !editor.get().is_ready()
                    on:click=on_click
                >
                    {entry.label}
                </button>
            }
        })
        .collect_view();

    let footer = move || {
        let state = editor.get();
        match &state.texture {
            TextureStatus::Loading => "loading sprites…".to_owned(),
            TextureStatus::Failed(reason) => format!("load failed: {reason}"),
            TextureStatus::Ready => status_line(&state),
        }
    };

    view! {
        <nav class="toolbar">
            {buttons}
            <span class="toolbar__status">{footer}</span>
        </nav>
    }
}
