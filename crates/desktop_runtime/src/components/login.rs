use leptos::*;
use system_ui::{Button, ButtonVariant, InlineMessage, TextField};

use super::use_desktop_runtime;
use crate::{
    chrome::{LOGIN_OPTIONS_NOTICE, LOGIN_OPTIONS_STATUS},
    host::LOGIN_USERNAME_DOM_ID,
    model::AuthPhase,
    reducer::DesktopAction,
    wallpaper::{self, LOGIN_TRAY_LIMIT},
};

#[component]
pub(super) fn LoginScreen() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    let username = create_memo(move |_| state.with(|s| s.session.form.username.clone()));
    let password = create_memo(move |_| state.with(|s| s.session.form.password.clone()));
    let display_name = create_memo(move |_| state.with(|s| s.session.form.display_name()));
    let pending = create_memo(move |_| state.with(|s| s.session.phase == AuthPhase::Pending));
    let message = create_memo(move |_| {
        state.with(|s| {
            s.session
                .message
                .as_ref()
                .map(|message| (message.tone, message.text.clone()))
        })
    });
    let current = create_memo(move |_| state.with(|s| s.wallpaper.current()));
    let tray = create_memo(move |_| state.with(|s| s.wallpaper.tray_selection(LOGIN_TRAY_LIMIT)));

    let submit_on_enter = Callback::new(move |ev: ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
            runtime.dispatch_action(DesktopAction::SubmitLogin);
        }
    });

    view! {
        <div
            id="login-screen"
            class="login-screen"
            style=move || wallpaper::background_style(&current.get())
        >
            <div class="login-card" style=move || wallpaper::login_palette_style(&current.get())>
                <div class="login-avatar" aria-hidden="true">
                    {move || display_name.get().chars().next().unwrap_or('G').to_uppercase().to_string()}
                </div>
                <div class="login-name">{move || display_name.get()}</div>
                <div class="login-form">
                    <TextField
                        id=LOGIN_USERNAME_DOM_ID
                        placeholder="Username"
                        aria_label="Username"
                        autocomplete="username"
                        value=Signal::from(username)
                        disabled=Signal::from(pending)
                        on_value=Callback::new(move |value| {
                            runtime.dispatch_action(DesktopAction::SetLoginUsername(value))
                        })
                        on_keydown=submit_on_enter
                    />
                    <TextField
                        id="login-password"
                        placeholder="Password"
                        aria_label="Password"
                        autocomplete="current-password"
                        input_type="password"
                        value=Signal::from(password)
                        disabled=Signal::from(pending)
                        on_value=Callback::new(move |value| {
                            runtime.dispatch_action(DesktopAction::SetLoginPassword(value))
                        })
                        on_keydown=submit_on_enter
                    />
                    <div class="login-actions">
                        <Button
                            variant=ButtonVariant::Primary
                            id="login-submit"
                            disabled=Signal::from(pending)
                            on_click=Callback::new(move |_| {
                                runtime.dispatch_action(DesktopAction::SubmitLogin)
                            })
                        >
                            "Login"
                        </Button>
                        <Button
                            id="login-register"
                            disabled=Signal::from(pending)
                            on_click=Callback::new(move |_| {
                                runtime.dispatch_action(DesktopAction::SubmitRegistration)
                            })
                        >
                            "Register"
                        </Button>
                    </div>
                    <InlineMessage layout_class="login-message" message=Signal::from(message) />
                </div>
                <div class="login-wallpaper-tray" role="listbox" aria-label="Wallpapers">
                    <For each=move || tray.get() key=|w| w.id.clone() let:entry>
                        {
                            let entry_id = entry.id.clone();
                            let is_active = move || current.with(|c| c.id == entry_id);
                            let title = format!("Apply {}", entry.name);
                            let style = wallpaper::thumbnail_style(&entry);
                            view! {
                                <button
                                    type="button"
                                    class="login-wallpaper-thumb"
                                    class:active=is_active
                                    title=title.clone()
                                    aria-label=title
                                    style=style
                                    on:click=move |_| {
                                        runtime.dispatch_action(DesktopAction::ApplyWallpaper(entry.clone()))
                                    }
                                ></button>
                            }
                        }
                    </For>
                </div>
            </div>
            <div class="login-footer">
                <button
                    type="button"
                    class="user-switcher"
                    title="Next wallpaper"
                    on:click=move |_| runtime.dispatch_action(DesktopAction::CycleLoginWallpaper)
                >
                    "Switch User"
                </button>
                <button
                    type="button"
                    class="login-options"
                    title="Options"
                    on:click=move |_| {
                        runtime.dispatch_action(DesktopAction::ShowNotice {
                            status: Some(LOGIN_OPTIONS_STATUS.to_string()),
                            notice: LOGIN_OPTIONS_NOTICE.to_string(),
                        })
                    }
                >
                    "⏻"
                </button>
            </div>
        </div>
    }
}
