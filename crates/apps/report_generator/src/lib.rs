//! Report generator panel: previews and downloads canned text reports.
//!
//! Reports are built locally from the shared caches, which the panel refreshes on mount so a
//! fresh window never reports stale data.

#![warn(rustdoc::broken_intra_doc_links)]

pub mod reports;

use desktop_app_contract::{display::now_display, AppMountContext, AppServices};
use leptos::*;
use platform_host::DownloadFile;
use system_ui::prelude::*;

use crate::reports::{generate, Report, ReportInputs, ReportKind};

/// Mounts the report generator panel.
pub fn mount(context: AppMountContext) -> View {
    view! { <ReportGeneratorApp services=context.services /> }.into_view()
}

#[component]
fn ReportGeneratorApp(services: AppServices) -> impl IntoView {
    let report = create_rw_signal::<Option<Report>>(None);
    let notice = create_rw_signal::<Option<(Tone, String)>>(None);
    let services = store_value(services);

    let warm = services.get_value();
    spawn_local(async move {
        if let Err(err) = warm.refresh_users().await {
            logging::warn!("report users refresh failed: {err}");
        }
        if let Err(err) = warm.refresh_history().await {
            logging::warn!("report history refresh failed: {err}");
        }
    });

    let build = move |kind: ReportKind| {
        let generated_at = now_display();
        let built = services.with_value(|s| {
            let settings = s.settings.current.get_untracked();
            s.data.users.with_untracked(|users| {
                s.data.history.with_untracked(|history| {
                    generate(
                        kind,
                        ReportInputs {
                            users,
                            history,
                            settings: &settings,
                            generated_at: &generated_at,
                        },
                    )
                })
            })
        });
        notice.set(None);
        report.set(Some(built));
    };

    let download = move || {
        let Some(current) = report.get_untracked() else {
            return;
        };
        let host = services.with_value(|s| s.host.clone());
        spawn_local(async move {
            let file_name = current.kind.file_name();
            let file = DownloadFile::text(file_name, current.content);
            match host.downloads.save(file).await {
                Ok(()) => notice.set(Some((Tone::Success, format!("Saved {file_name}")))),
                Err(err) => {
                    logging::warn!("report download failed: {err}");
                    notice.set(Some((Tone::Danger, format!("Failed to save {file_name}"))));
                }
            }
        });
    };

    view! {
        <div class="app-shell app-report-shell">
            <div class="app-toolbar report-kinds">
                {ReportKind::ALL
                    .into_iter()
                    .map(|kind| {
                        view! {
                            <Button
                                selected=Signal::derive(move || {
                                    report.with(|r| r.as_ref().map(|r| r.kind) == Some(kind))
                                })
                                on_click=Callback::new(move |_| build(kind))
                            >
                                {kind.label()}
                            </Button>
                        }
                    })
                    .collect_view()}
            </div>
            <pre class="report-content" id="report-content">
                {move || {
                    report
                        .with(|r| r.as_ref().map(|r| r.content.clone()))
                        .unwrap_or_else(|| "Select a report to generate.".to_string())
                }}
            </pre>
            <Show when=move || report.with(Option::is_some) fallback=|| ()>
                <div class="report-actions">
                    <Button
                        variant=ButtonVariant::Primary
                        id="download-report"
                        on_click=Callback::new(move |_| download())
                    >
                        "Download Report"
                    </Button>
                </div>
            </Show>
            <InlineMessage layout_class="report-notice" message=Signal::from(notice) />
        </div>
    }
}
