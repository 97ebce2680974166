//! Export panel: CSV downloads rendered by the backend and a local JSON snapshot.

#![warn(rustdoc::broken_intra_doc_links)]

pub mod exports;

use std::time::Duration;

use desktop_app_contract::{display::now_iso8601, AppMountContext, AppServices};
use leptos::*;
use platform_host::CsvExport;
use system_ui::prelude::*;

use crate::exports::{database_snapshot, export_csv, export_snapshot, ExportKind};

/// How long an export status stays visible.
pub const STATUS_CLEAR_MS: u64 = 3_000;

/// Mounts the export panel.
pub fn mount(context: AppMountContext) -> View {
    view! { <ExportDataApp services=context.services /> }.into_view()
}

async fn run_export(services: &AppServices, kind: ExportKind) -> Result<(), String> {
    match kind {
        ExportKind::UsersCsv => export_csv(&services.host, CsvExport::Users).await,
        ExportKind::HistoryCsv => export_csv(&services.host, CsvExport::History).await,
        ExportKind::FullJson => {
            let settings = services.settings.current.get_untracked();
            let snapshot = services.data.users.with_untracked(|users| {
                services.data.history.with_untracked(|history| {
                    database_snapshot(users, history, &settings, &now_iso8601())
                })
            });
            let snapshot = snapshot.map_err(|err| err.to_string())?;
            export_snapshot(&services.host, snapshot).await
        }
    }
}

#[component]
fn ExportDataApp(services: AppServices) -> impl IntoView {
    let status = create_rw_signal::<Option<(Tone, String)>>(None);
    let generation = store_value(0_u64);
    let services = store_value(services);

    let warm = services.get_value();
    spawn_local(async move {
        if let Err(err) = warm.refresh_users().await {
            logging::warn!("export users refresh failed: {err}");
        }
        if let Err(err) = warm.refresh_history().await {
            logging::warn!("export history refresh failed: {err}");
        }
    });

    let show_status = move |message: (Tone, String)| {
        generation.update_value(|value| *value += 1);
        let issued = generation.get_value();
        status.set(Some(message));
        set_timeout(
            move || {
                if generation.try_get_value() == Some(issued) {
                    status.set(None);
                }
            },
            Duration::from_millis(STATUS_CLEAR_MS),
        );
    };

    let start = move |kind: ExportKind| {
        let services = services.get_value();
        spawn_local(async move {
            match run_export(&services, kind).await {
                Ok(()) => show_status((Tone::Success, kind.success_text())),
                Err(err) => {
                    logging::warn!("export failed: {err}");
                    show_status((Tone::Danger, kind.failure_text()));
                }
            }
        });
    };

    view! {
        <div class="app-shell app-export-shell">
            <Panel heading="Export Data" aria_label="Export options">
                <div class="export-actions">
                    {ExportKind::ALL
                        .into_iter()
                        .map(|kind| {
                            view! {
                                <Button
                                    id=kind.dom_id()
                                    on_click=Callback::new(move |_| start(kind))
                                >
                                    {kind.label()}
                                </Button>
                            }
                        })
                        .collect_view()}
                </div>
            </Panel>
            <InlineMessage layout_class="export-status" message=Signal::from(status) />
        </div>
    }
}
