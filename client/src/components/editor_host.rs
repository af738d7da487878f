//! Bridge component between the page and the imperative `canvas::engine::Engine`.
//!
//! ARCHITECTURE
//! ============
//! The engine lives in `Rc<RefCell<Option<Engine>>>` and stays `None` until
//! the sprite sheet has decoded, so no pointer, wheel, or scrollbar input can
//! reach a session that cannot draw. Every handler borrows it for one
//! callback, forwards the DOM event, and hands the returned actions to
//! [`process_actions`]. Window resize and document mouse listeners are added
//! once, after the engine exists, and live for the rest of the page.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::closure::{Closure, WasmClosure};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{HtmlCanvasElement, HtmlImageElement};

use canvas::engine::{Action, Engine, EngineCore};
use canvas::viewport::{Axis, TrackGeometry};

use crate::state::editor_view::{EditorViewState, TextureStatus};
use crate::util::chrome::{load_config, thumb_style};
use crate::util::input_map::{axis_coordinate, canvas_point, css_px, map_modifiers, wheel_delta};

type EngineHandle = Rc<RefCell<Option<Engine>>>;

const AXES: [Axis; 2] = [Axis::Horizontal, Axis::Vertical];

/// Track and thumb elements of one scrollbar.
#[derive(Clone, Copy)]
struct ScrollbarRefs {
    track: NodeRef<leptos::html::Div>,
    thumb: NodeRef<leptos::html::Div>,
}

impl ScrollbarRefs {
    fn new() -> Self {
        Self { track: NodeRef::new(), thumb: NodeRef::new() }
    }

    /// Current track and thumb lengths along `axis`, if both are mounted.
    fn geometry(&self, axis: Axis) -> Option<TrackGeometry> {
        let track = self.track.get_untracked()?;
        let thumb = self.thumb.get_untracked()?;
        let (track_len, thumb_len) = match axis {
            Axis::Horizontal => (track.client_width(), thumb.offset_width()),
            Axis::Vertical => (track.client_height(), thumb.offset_height()),
        };
        Some(TrackGeometry::new(f64::from(track_len), f64::from(thumb_len)))
    }
}

#[derive(Clone, Copy)]
struct Scrollbars {
    horizontal: ScrollbarRefs,
    vertical: ScrollbarRefs,
}

impl Scrollbars {
    fn get(&self, axis: Axis) -> &ScrollbarRefs {
        match axis {
            Axis::Horizontal => &self.horizontal,
            Axis::Vertical => &self.vertical,
        }
    }
}

/// Fold actions into the view state and carry out their DOM side effects.
///
/// Returns `true` when the triggering event's default should be prevented.
fn process_actions(actions: Vec<Action>, engine: &Engine, editor: RwSignal<EditorViewState>) -> bool {
    if actions.is_empty() {
        return false;
    }
    let effects = editor.try_update(|v| v.apply(&actions)).unwrap_or_default();
    for notice in &effects.notices {
        show_notice(notice);
    }
    if effects.render {
        render_or_log(engine);
    }
    effects.prevent_default
}

fn render_or_log(engine: &Engine) {
    if let Err(e) = engine.render() {
        log::error!("render failed: {}", js_error_text(&e));
    }
}

fn show_notice(message: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(e) = window.alert_with_message(message) {
        log::warn!("could not show notice {message:?}: {}", js_error_text(&e));
    }
}

fn js_error_text(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

fn sync_track_geometry(engine: &mut Engine, bars: &Scrollbars) {
    for axis in AXES {
        if let Some(geometry) = bars.get(axis).geometry(axis) {
            engine.set_track_geometry(axis, geometry);
        }
    }
}

fn window_size(window: &web_sys::Window) -> Option<(u32, u32)> {
    let w = window.inner_width().ok()?.as_f64()?;
    let h = window.inner_height().ok()?.as_f64()?;
    Some((css_px(w), css_px(h)))
}

/// Resize the session to the window: bounds, clamp, thumbs, backing store, redraw.
fn resize_to_window(engine: &mut Engine, bars: &Scrollbars, editor: RwSignal<EditorViewState>) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some((w, h)) = window_size(&window) else {
        log::warn!("window size unavailable; skipping resize");
        return;
    };
    sync_track_geometry(engine, bars);
    let actions = engine.resize(w, h, window.device_pixel_ratio());
    process_actions(actions, engine, editor);
}

/// Raw `data-config` attribute of `<body>`, if any.
fn body_config() -> Option<String> {
    web_sys::window()?.document()?.body()?.get_attribute("data-config")
}

async fn load_texture(url: &str) -> Result<HtmlImageElement, JsValue> {
    let image = HtmlImageElement::new()?;
    image.set_src(url);
    JsFuture::from(image.decode()).await?;
    Ok(image)
}

fn listen<T>(target: &web_sys::EventTarget, event: &str, callback: Closure<T>)
where
    T: ?Sized + WasmClosure,
{
    if let Err(e) = target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref()) {
        log::error!("failed to listen for {event}: {}", js_error_text(&e));
    }
    callback.forget();
}

/// Window resize plus document-level drag tracking, so a thumb drag keeps
/// going when the pointer leaves the scrollbar and ends wherever it is released.
fn install_window_listeners(handle: &EngineHandle, bars: Scrollbars, editor: RwSignal<EditorViewState>) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };

    let on_resize = {
        let handle = Rc::clone(handle);
        Closure::<dyn FnMut()>::new(move || {
            if let Some(engine) = handle.borrow_mut().as_mut() {
                resize_to_window(engine, &bars, editor);
            }
        })
    };
    listen(&window, "resize", on_resize);

    let on_mouse_move = {
        let handle = Rc::clone(handle);
        Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
            if let Some(engine) = handle.borrow_mut().as_mut() {
                for axis in AXES {
                    if !engine.viewport().is_dragging(axis) {
                        continue;
                    }
                    let pointer = axis_coordinate(axis, ev.client_x(), ev.client_y());
                    let actions = engine.scroll_drag_move(axis, pointer);
                    process_actions(actions, engine, editor);
                }
            }
        })
    };
    listen(&document, "mousemove", on_mouse_move);

    let on_mouse_up = {
        let handle = Rc::clone(handle);
        Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
            if let Some(engine) = handle.borrow_mut().as_mut() {
                engine.end_scroll_drag();
            }
        })
    };
    listen(&document, "mouseup", on_mouse_up);
}

fn mount_engine(
    canvas: HtmlCanvasElement,
    image: HtmlImageElement,
    core: EngineCore,
    handle: &EngineHandle,
    bars: Scrollbars,
    editor: RwSignal<EditorViewState>,
) {
    let mut engine = match Engine::new(canvas, image, core) {
        Ok(engine) => engine,
        Err(e) => {
            let reason = js_error_text(&e);
            log::error!("engine init failed: {reason}");
            editor.update(|v| v.texture = TextureStatus::Failed(reason));
            return;
        }
    };
    resize_to_window(&mut engine, &bars, editor);
    *handle.borrow_mut() = Some(engine);
    editor.update(|v| v.texture = TextureStatus::Ready);
    install_window_listeners(handle, bars, editor);
    log::info!("editor ready");
}

/// Editor surface: canvas plus both scrollbars.
#[component]
pub fn EditorHost() -> impl IntoView {
    let editor = expect_context::<RwSignal<EditorViewState>>();
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
    let bars = Scrollbars { horizontal: ScrollbarRefs::new(), vertical: ScrollbarRefs::new() };
    let engine: EngineHandle = Rc::new(RefCell::new(None));
    let load_started = RwSignal::new(false);
    let last_command_seq = RwSignal::new(0_u64);

    // Texture load, then engine construction.
    {
        let engine = Rc::clone(&engine);
        Effect::new(move || {
            let Some(canvas) = canvas_ref.get() else {
                return;
            };
            if load_started.get_untracked() {
                return;
            }
            load_started.set(true);

            let engine = Rc::clone(&engine);
            leptos::task::spawn_local(async move {
                let config = load_config(body_config().as_deref());
                log::debug!("loading sprite sheet {}", config.texture_url);
                match load_texture(&config.texture_url).await {
                    Ok(image) => mount_engine(canvas, image, EngineCore::new(config), &engine, bars, editor),
                    Err(e) => {
                        let reason = js_error_text(&e);
                        log::error!("sprite sheet failed to load: {reason}");
                        editor.update(|v| v.texture = TextureStatus::Failed(reason));
                    }
                }
            });
        });
    }

    // Toolbar commands.
    {
        let engine = Rc::clone(&engine);
        Effect::new(move || {
            let (seq, command) = editor.with(|v| (v.command_seq, v.pending_command.clone()));
            if seq == last_command_seq.get_untracked() {
                return;
            }
            last_command_seq.set(seq);
            let Some(command) = command else {
                return;
            };
            if let Some(engine) = engine.borrow_mut().as_mut() {
                let actions = engine.run_command(&command);
                process_actions(actions, engine, editor);
            }
        });
    }

    let on_pointer_down = {
        let engine = Rc::clone(&engine);
        move |ev: leptos::ev::PointerEvent| {
            if let Some(engine) = engine.borrow_mut().as_mut() {
                let actions = engine.on_pointer_down(canvas_point(ev.offset_x(), ev.offset_y()));
                process_actions(actions, engine, editor);
            }
        }
    };

    let on_pointer_move = {
        let engine = Rc::clone(&engine);
        move |ev: leptos::ev::PointerEvent| {
            if let Some(engine) = engine.borrow_mut().as_mut() {
                let actions = engine.on_pointer_move(canvas_point(ev.offset_x(), ev.offset_y()));
                process_actions(actions, engine, editor);
            }
        }
    };

    let on_pointer_up = {
        let engine = Rc::clone(&engine);
        move |ev: leptos::ev::PointerEvent| {
            if let Some(engine) = engine.borrow_mut().as_mut() {
                let actions = engine.on_pointer_up(canvas_point(ev.offset_x(), ev.offset_y()));
                process_actions(actions, engine, editor);
            }
        }
    };

    let on_wheel = {
        let engine = Rc::clone(&engine);
        move |ev: leptos::ev::WheelEvent| {
            if let Some(engine) = engine.borrow_mut().as_mut() {
                let modifiers = map_modifiers(ev.shift_key(), ev.ctrl_key());
                let actions = engine.on_wheel(wheel_delta(ev.delta_y()), modifiers);
                if process_actions(actions, engine, editor) {
                    ev.prevent_default();
                }
            }
        }
    };

    let on_thumb_down = |axis: Axis| {
        let engine = Rc::clone(&engine);
        move |ev: leptos::ev::MouseEvent| {
            if let Some(engine) = engine.borrow_mut().as_mut() {
                sync_track_geometry(engine, &bars);
                if engine.begin_scroll_drag(axis, axis_coordinate(axis, ev.client_x(), ev.client_y())) {
                    ev.prevent_default();
                }
            }
        }
    };

    let canvas_class = move || {
        if editor.get().preview_visible {
            "editor__canvas editor__canvas--drawing"
        } else {
            "editor__canvas"
        }
    };

    view! {
        <section class="editor">
            <div class="editor__stage">
                <canvas
                    class=canvas_class
                    node_ref=canvas_ref
                    on:pointerdown=on_pointer_down
                    on:pointermove=on_pointer_move
                    on:pointerup=on_pointer_up
                    on:wheel=on_wheel
                >
                    "Your browser does not support canvas."
                </canvas>
                <div class="scrollbar scrollbar--vertical" node_ref=bars.vertical.track>
                    <div
                        class="scrollbar__thumb"
                        node_ref=bars.vertical.thumb
                        style=move || thumb_style(Axis::Vertical, editor.get().thumb_y)
                        on:mousedown=on_thumb_down(Axis::Vertical)
                    ></div>
                </div>
            </div>
            <div class="scrollbar scrollbar--horizontal" node_ref=bars.horizontal.track>
                <div
                    class="scrollbar__thumb"
                    node_ref=bars.horizontal.thumb
                    style=move || thumb_style(Axis::Horizontal, editor.get().thumb_x)
                    on:mousedown=on_thumb_down(Axis::Horizontal)
                ></div>
            </div>
        </section>
    }
}
