//! History viewer panel: the backend activity log with a per-user filter.

#![warn(rustdoc::broken_intra_doc_links)]

use desktop_app_contract::{display::format_timestamp, AppMountContext, AppServices, LoadState};
use leptos::*;
use platform_host::{HistoryAction, HistoryEntry};
use system_ui::prelude::*;

const COLUMNS: &[&str] = &["Timestamp", "Username", "Action"];
const LOAD_FAILED_TEXT: &str = "Failed to load history";
/// Filter value that shows every entry.
pub const ALL_USERS: &str = "all";

/// Badge tone for one action token.
pub fn action_tone(action: &HistoryAction) -> Tone {
    match action {
        HistoryAction::Login => Tone::Success,
        HistoryAction::Register => Tone::Warning,
        HistoryAction::Logout | HistoryAction::Other(_) => Tone::Info,
    }
}

/// Unique usernames in order of first appearance.
pub fn filter_options(history: &[HistoryEntry]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for entry in history {
        if !seen.iter().any(|name| name == &entry.username) {
            seen.push(entry.username.clone());
        }
    }
    seen
}

/// Entries matching `filter`; [`ALL_USERS`] keeps everything.
pub fn filtered<'a>(history: &'a [HistoryEntry], filter: &str) -> Vec<&'a HistoryEntry> {
    history
        .iter()
        .filter(|entry| filter == ALL_USERS || entry.username == filter)
        .collect()
}

/// Mounts the history viewer panel.
pub fn mount(context: AppMountContext) -> View {
    view! { <HistoryViewerApp services=context.services /> }.into_view()
}

fn reload(services: AppServices, load: RwSignal<LoadState>) {
    load.set(LoadState::Loading);
    spawn_local(async move {
        match services.refresh_history().await {
            Ok(_) => load.set(LoadState::Ready),
            Err(err) => {
                logging::warn!("history list failed: {err}");
                load.set(LoadState::from_error(&err, LOAD_FAILED_TEXT));
            }
        }
    });
}

#[component]
fn HistoryViewerApp(services: AppServices) -> impl IntoView {
    let load = create_rw_signal(LoadState::Loading);
    let filter = create_rw_signal(ALL_USERS.to_string());
    let history = services.data.history;
    let services = store_value(services);

    reload(services.get_value(), load);

    create_effect(move |_| {
        let options = history.with(|entries| filter_options(entries));
        let selected = filter.get_untracked();
        if selected != ALL_USERS && !options.contains(&selected) {
            filter.set(ALL_USERS.to_string());
        }
    });

    let options = move || {
        history
            .with(|entries| filter_options(entries))
            .into_iter()
            .map(|name| view! { <option value=name.clone()>{name.clone()}</option> })
            .collect_view()
    };

    let rows = move || match load.get().placeholder() {
        Some(text) => view! { <PlaceholderRow colspan=3 text=text.to_string() /> }.into_view(),
        None => history.with(|entries| {
            filter.with(|selected| {
                filtered(entries, selected)
                    .into_iter()
                    .map(|entry| history_row(entry.clone()))
                    .collect_view()
            })
        }),
    };

    view! {
        <div class="app-shell app-history-shell">
            <div class="app-toolbar">
                <label for="history-filter">"Filter by user"</label>
                <SelectField
                    id="history-filter"
                    aria_label="Filter history by user"
                    value=filter
                    on_value=Callback::new(move |value: String| {
                        filter.set(value);
                        reload(services.get_value(), load);
                    })
                >
                    <option value=ALL_USERS>"All Users"</option>
                    {options}
                </SelectField>
            </div>
            <DataTable layout_class="history-table" aria_label="Activity history" columns=COLUMNS>
                {rows}
            </DataTable>
        </div>
    }
}

fn history_row(entry: HistoryEntry) -> impl IntoView {
    let tone = action_tone(&entry.action);
    view! {
        <tr>
            <td>{format_timestamp(&entry.timestamp)}</td>
            <td>{entry.username}</td>
            <td>
                <Badge tone=tone>{entry.action.as_str().to_string()}</Badge>
            </td>
        </tr>
    }
}
