use desktop_app_contract::{window_dom_id, AppId, AppMountContext};
use leptos::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

use super::{pointer_from_pointer_event, use_desktop_runtime};
use crate::{apps::app_descriptor, reducer::DesktopAction};

#[cfg(target_arch = "wasm32")]
fn try_set_pointer_capture(ev: &web_sys::PointerEvent) {
    if let Some(target) = ev.current_target() {
        if let Ok(element) = target.dyn_into::<web_sys::Element>() {
            let _ = element.set_pointer_capture(ev.pointer_id());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn try_set_pointer_capture(_: &web_sys::PointerEvent) {}

fn stop_mouse_event(ev: &web_sys::MouseEvent) {
    ev.prevent_default();
    ev.stop_propagation();
}

#[component]
pub(super) fn DesktopWindow(app_id: AppId) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    let window = create_memo(move |_| state.with(|s| s.window(app_id).cloned()));
    let is_front = create_memo(move |_| {
        state.with(|s| s.front_window() == Some(app_id))
    });
    let is_dragging = move || {
        runtime
            .interaction
            .with(|i| i.dragging.as_ref().map(|d| d.app_id) == Some(app_id))
    };

    let class_name = move || {
        let Some(win) = window.get() else {
            return "desktop-window".to_string();
        };
        let mut class = String::from("desktop-window");
        if is_front.get() {
            class.push_str(" focused");
        }
        if win.minimized {
            class.push_str(" minimized");
        }
        if win.maximized {
            class.push_str(" maximized");
        }
        if win.is_animating() {
            class.push_str(" animating");
        }
        if is_dragging() {
            class.push_str(" dragging");
        }
        class
    };
    let style = move || {
        window
            .get()
            .map(|win| {
                format!(
                    "left:{}px;top:{}px;width:{}px;height:{}px;z-index:{};",
                    win.rect.x, win.rect.y, win.rect.w, win.rect.h, win.z_index
                )
            })
            .unwrap_or_default()
    };

    let focus = move |_: web_sys::PointerEvent| {
        if !is_front.get_untracked() {
            runtime.dispatch_action(DesktopAction::BringToFront { app_id });
        }
    };
    let begin_move = move |ev: web_sys::PointerEvent| {
        if ev.pointer_type() == "mouse" && ev.button() != 0 {
            return;
        }
        if ev.pointer_type() != "mouse" && !ev.is_primary() {
            return;
        }
        try_set_pointer_capture(&ev);
        ev.prevent_default();
        runtime.dispatch_action(DesktopAction::BeginMove {
            app_id,
            pointer: pointer_from_pointer_event(&ev),
        });
    };
    let titlebar_double_click = move |ev: web_sys::MouseEvent| {
        stop_mouse_event(&ev);
        runtime.dispatch_action(DesktopAction::ToggleMaximize { app_id });
    };

    // Mounted once per window lifetime; minimize and restore only toggle classes.
    let body = app_descriptor(app_id).module.mount(AppMountContext {
        app_id,
        services: runtime.app_services.get_value(),
    });

    view! {
        <section
            id=window_dom_id(app_id)
            class=class_name
            style=style
            role="dialog"
            aria-label=app_id.title()
            on:pointerdown=focus
        >
            <header
                class="window-header"
                on:pointerdown=begin_move
                on:dblclick=titlebar_double_click
            >
                <div class="window-controls">
                    <button
                        class="window-control close"
                        aria-label="Close window"
                        on:pointerdown=move |ev: web_sys::PointerEvent| ev.stop_propagation()
                        on:click=move |ev| {
                            stop_mouse_event(&ev);
                            runtime.dispatch_action(DesktopAction::CloseApp { app_id });
                        }
                    ></button>
                    <button
                        class="window-control minimize"
                        aria-label="Minimize window"
                        on:pointerdown=move |ev: web_sys::PointerEvent| ev.stop_propagation()
                        on:click=move |ev| {
                            stop_mouse_event(&ev);
                            runtime.dispatch_action(DesktopAction::MinimizeWindow { app_id });
                        }
                    ></button>
                    <button
                        class="window-control maximize"
                        aria-label=move || {
                            if window.get().is_some_and(|w| w.maximized) {
                                "Restore window"
                            } else {
                                "Maximize window"
                            }
                        }
                        on:pointerdown=move |ev: web_sys::PointerEvent| ev.stop_propagation()
                        on:click=move |ev| {
                            stop_mouse_event(&ev);
                            runtime.dispatch_action(DesktopAction::ToggleMaximize { app_id });
                        }
                    ></button>
                </div>
                <div class="window-title">{app_id.title()}</div>
            </header>
            <div class="window-content">{body}</div>
        </section>
    }
}
