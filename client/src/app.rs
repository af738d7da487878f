//! Root application component and shared context.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::components::{editor_host::EditorHost, toolbar::Toolbar};
use crate::state::editor_view::EditorViewState;

/// Root application component.
///
/// Provides the editor view state and lays out the toolbar beside the editor.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let view = RwSignal::new(EditorViewState::default());
    provide_context(view);

    view! {
        <Title text="Spritepad"/>
        <main class="spritepad">
            <Toolbar/>
            <EditorHost/>
        </main>
    }
}
