//! Desktop shell UI composition: login screen, menu bar, windows, and dock.

mod dock;
mod login;
mod menu_bar;
mod window;

use leptos::*;

use self::{dock::Dock, login::LoginScreen, menu_bar::MenuBar, window::DesktopWindow};
use crate::{model::PointerPosition, reducer::DesktopAction, wallpaper};

pub use crate::runtime_context::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext};

fn pointer_from_pointer_event(ev: &web_sys::PointerEvent) -> PointerPosition {
    PointerPosition {
        x: ev.client_x(),
        y: ev.client_y(),
    }
}

#[component]
/// Root shell: the login screen until the session is revealed, then the desktop.
pub fn DesktopShell() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    let desktop_visible = create_memo(move |_| state.with(|s| s.session.desktop_visible));
    let background = create_memo(move |_| {
        state.with(|s| wallpaper::background_style(&s.wallpaper.current()))
    });
    let background_class = move || {
        if state.with(|s| s.wallpaper_transitioning) {
            "desktop-bg transitioning"
        } else {
            "desktop-bg"
        }
    };
    let open_windows = create_memo(move |_| {
        state.with(|s| s.windows.iter().map(|w| w.app_id).collect::<Vec<_>>())
    });

    let on_pointer_move = move |ev: web_sys::PointerEvent| {
        if runtime.interaction.with_untracked(|i| i.dragging.is_some()) {
            runtime.dispatch_action(DesktopAction::UpdateMove {
                pointer: pointer_from_pointer_event(&ev),
            });
        }
    };
    let on_pointer_end = move |_| {
        if runtime.interaction.with_untracked(|i| i.dragging.is_some()) {
            runtime.dispatch_action(DesktopAction::EndMove);
        }
    };

    view! {
        <div
            id="desktop-shell-root"
            class="desktop-shell"
            data-reduced-motion=move || state.with(|s| s.reduced_motion.to_string())
        >
            <Show when=move || desktop_visible.get() fallback=|| view! { <LoginScreen /> }>
                <div
                    id="desktop"
                    class="desktop visible"
                    on:pointermove=on_pointer_move
                    on:pointerup=on_pointer_end
                    on:pointercancel=on_pointer_end
                >
                    <div id="desktop-bg" class=background_class style=move || background.get()></div>
                    <MenuBar />
                    <div class="window-layer">
                        <For each=move || open_windows.get() key=|app_id| *app_id let:app_id>
                            <DesktopWindow app_id=app_id />
                        </For>
                    </div>
                    <Dock />
                </div>
            </Show>
        </div>
    }
}
