//! User manager panel: the registered account table with add and delete actions.

#![warn(rustdoc::broken_intra_doc_links)]

pub mod accounts;

use desktop_app_contract::{display::format_timestamp, AppMountContext, AppServices, LoadState};
use leptos::*;
use platform_host::UserRecord;
use system_ui::prelude::*;

use crate::accounts::{add_account, delete_account};

const COLUMNS: &[&str] = &["Username", "Registered", "Password Hash", "Actions"];
const LOAD_FAILED_TEXT: &str = "Failed to load users";

/// Mounts the user manager panel.
pub fn mount(context: AppMountContext) -> View {
    view! { <UserManagerApp services=context.services /> }.into_view()
}

fn reload(services: AppServices, load: RwSignal<LoadState>) {
    spawn_local(async move {
        match services.refresh_users().await {
            Ok(_) => load.set(LoadState::Ready),
            Err(err) => {
                logging::warn!("user list failed: {err}");
                load.set(LoadState::from_error(&err, LOAD_FAILED_TEXT));
            }
        }
    });
}

#[component]
fn UserManagerApp(services: AppServices) -> impl IntoView {
    let load = create_rw_signal(LoadState::Loading);
    let modal_open = create_rw_signal(false);
    let new_username = create_rw_signal(String::new());
    let new_password = create_rw_signal(String::new());
    let modal_error = create_rw_signal::<Option<String>>(None);
    let services = store_value(services);

    reload(services.get_value(), load);

    let users = services.with_value(|s| s.data.users);
    let delete = move |username: String| {
        let services = services.get_value();
        spawn_local(async move {
            let current = services.session.current_user.get_untracked();
            let outcome =
                delete_account(&services.host, current.as_deref(), &username).await;
            if outcome.changed() {
                services.session.set_status(format!("Deleted user {username}"));
                reload(services, load);
            }
        });
    };

    let close_modal = Callback::new(move |()| {
        modal_open.set(false);
        new_username.set(String::new());
        new_password.set(String::new());
        modal_error.set(None);
    });

    let submit = move || {
        let services = services.get_value();
        let username = new_username.get_untracked();
        let password = new_password.get_untracked();
        spawn_local(async move {
            let settings = services.settings.current.get_untracked();
            match add_account(&services.host, &settings, &username, &password).await {
                Ok(()) => {
                    close_modal.call(());
                    reload(services, load);
                }
                Err(message) => modal_error.set(Some(message)),
            }
        });
    };

    let rows = move || match load.get().placeholder() {
        Some(text) => view! { <PlaceholderRow colspan=4 text=text.to_string() /> }.into_view(),
        None => users
            .get()
            .into_iter()
            .map(|user| user_row(user, delete))
            .collect_view(),
    };

    view! {
        <div class="app-shell app-user-manager-shell">
            <div class="app-toolbar">
                <Button
                    variant=ButtonVariant::Primary
                    id="add-user-btn"
                    on_click=Callback::new(move |_| modal_open.set(true))
                >
                    "Add User"
                </Button>
            </div>
            <DataTable layout_class="users-table" aria_label="Registered users" columns=COLUMNS>
                {rows}
            </DataTable>
            <Modal
                title="Add New User"
                open=Signal::from(modal_open)
                on_dismiss=close_modal
            >
                <div class="modal-form">
                    <TextField
                        id="new-username"
                        placeholder="Username"
                        aria_label="New username"
                        autocomplete="off"
                        value=new_username
                        on_value=Callback::new(move |value| new_username.set(value))
                    />
                    <TextField
                        id="new-password"
                        placeholder="Password"
                        aria_label="New password"
                        input_type="password"
                        autocomplete="new-password"
                        value=new_password
                        on_value=Callback::new(move |value| new_password.set(value))
                    />
                    <InlineMessage
                        layout_class="modal-error"
                        message=Signal::derive(move || {
                            modal_error.get().map(|text| (Tone::Danger, text))
                        })
                    />
                    <div class="modal-actions">
                        <Button on_click=Callback::new(move |_| close_modal.call(()))>
                            "Cancel"
                        </Button>
                        <Button
                            variant=ButtonVariant::Primary
                            on_click=Callback::new(move |_| submit())
                        >
                            "Add User"
                        </Button>
                    </div>
                </div>
            </Modal>
        </div>
    }
}

fn user_row(user: UserRecord, delete: impl Fn(String) + Copy + 'static) -> impl IntoView {
    let username = user.username.clone();
    view! {
        <tr>
            <td>{user.username.clone()}</td>
            <td>{format_timestamp(&user.registered_at)}</td>
            <td class="hash-preview">{user.hash_preview()}</td>
            <td>
                <Button
                    variant=ButtonVariant::Danger
                    size=ButtonSize::Sm
                    aria_label=format!("Delete {username}")
                    on_click=Callback::new(move |_| delete(username.clone()))
                >
                    "Delete"
                </Button>
            </td>
        </tr>
    }
}
