use std::time::Duration;

use chrono::Local;
use leptos::*;
use system_ui::{MenuItem, MenuSeparator, MenuSurface};

use super::use_desktop_runtime;
use crate::{
    chrome::{clock_text, MenuAction, CLOCK_TICK_MS},
    reducer::DesktopAction,
};

#[component]
pub(super) fn MenuBar() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    let menu_open = create_memo(move |_| state.with(|s| s.apple_menu_open));
    let status = create_memo(move |_| state.with(|s| s.status_text.clone()));
    let user_label = create_memo(move |_| state.with(|s| s.session.menu_user_label()));
    let active_title = create_memo(move |_| {
        state.with(|s| {
            s.front_window()
                .map(|app_id| app_id.title())
                .unwrap_or("Finder")
        })
    });

    let now = create_rw_signal(Local::now());
    match set_interval_with_handle(
        move || now.set(Local::now()),
        Duration::from_millis(CLOCK_TICK_MS),
    ) {
        Ok(handle) => on_cleanup(move || handle.clear()),
        Err(err) => logging::warn!("clock timer failed: {err:?}"),
    }

    let outside_click = window_event_listener(ev::click, move |_| {
        if menu_open.get_untracked() {
            runtime.dispatch_action(DesktopAction::CloseAppleMenu);
        }
    });
    on_cleanup(move || outside_click.remove());

    view! {
        <nav class="menu-bar" aria-label="Menu bar">
            <div class="menu-bar-left">
                <button
                    type="button"
                    id="apple-menu-button"
                    class="apple-menu-button"
                    class:active=move || menu_open.get()
                    aria-haspopup="menu"
                    aria-expanded=move || menu_open.get().to_string()
                    on:click=move |ev| {
                        ev.stop_propagation();
                        runtime.dispatch_action(DesktopAction::ToggleAppleMenu);
                    }
                >
                    ""
                </button>
                <span class="menu-bar-app-title">{move || active_title.get()}</span>
                <span class="menu-bar-status" aria-live="polite">{move || status.get()}</span>
            </div>
            <div class="menu-bar-right">
                <button
                    type="button"
                    class="menu-bar-switch-user"
                    title="Switch User"
                    on:click=move |_| runtime.dispatch_action(DesktopAction::SwitchUser)
                >
                    {move || user_label.get()}
                </button>
                <time class="menu-bar-clock">{move || clock_text(&now.get())}</time>
            </div>
            <Show when=move || menu_open.get() fallback=|| ()>
                <div class="apple-menu" on:click=|ev| ev.stop_propagation()>
                    <MenuSurface aria_label="Apple menu">
                        {MenuAction::ALL
                            .into_iter()
                            .map(|action| {
                                view! {
                                    {action.starts_group().then(|| view! { <MenuSeparator /> })}
                                    <MenuItem
                                        id=action.dom_id()
                                        on_click=Callback::new(move |_| {
                                            runtime.dispatch_action(DesktopAction::MenuAction(action))
                                        })
                                    >
                                        {action.label()}
                                    </MenuItem>
                                }
                            })
                            .collect_view()}
                    </MenuSurface>
                </div>
            </Show>
        </nav>
    }
}
