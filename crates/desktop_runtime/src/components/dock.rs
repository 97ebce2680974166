use desktop_app_contract::{dock_icon_dom_id, AppId};
use leptos::*;

use super::use_desktop_runtime;
use crate::{
    apps::{app_registry, AppDescriptor},
    chrome::{dock_magnification, TRASH_NOTICE},
    host::DOCK_DOM_ID,
    reducer::DesktopAction,
};

#[component]
pub(super) fn Dock() -> impl IntoView {
    let runtime = use_desktop_runtime();
    // Pointer x while hovering the dock; drives icon magnification.
    let pointer_x = create_rw_signal(None::<f64>);

    view! {
        <div
            id=DOCK_DOM_ID
            class="dock"
            on:mousemove=move |ev: ev::MouseEvent| pointer_x.set(Some(f64::from(ev.client_x())))
            on:mouseleave=move |_| pointer_x.set(None)
        >
            {app_registry()
                .iter()
                .map(|entry| view! { <DockIcon entry=entry pointer_x=pointer_x.read_only() /> })
                .collect_view()}
            <div class="dock-divider" aria-hidden="true"></div>
            <button
                type="button"
                id="dock-trash"
                class="dock-icon dock-trash"
                title="Trash"
                aria-label="Trash"
                on:click=move |_| {
                    runtime.dispatch_action(DesktopAction::ShowNotice {
                        status: Some(TRASH_NOTICE.to_string()),
                        notice: TRASH_NOTICE.to_string(),
                    })
                }
            >
                "🗑️"
            </button>
        </div>
    }
}

fn icon_center_x(node: &NodeRef<html::Button>) -> Option<f64> {
    let element = node.get_untracked()?;
    let rect = element.get_bounding_client_rect();
    Some(rect.left() + rect.width() / 2.0)
}

#[component]
fn DockIcon(entry: &'static AppDescriptor, pointer_x: ReadSignal<Option<f64>>) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let app_id: AppId = entry.app_id;
    let node = create_node_ref::<html::Button>();

    let running = create_memo(move |_| runtime.state.with(|s| s.is_open(app_id)));
    let scale_style = move || {
        let scale = pointer_x
            .get()
            .and_then(|x| icon_center_x(&node).map(|center| dock_magnification(x - center)))
            .unwrap_or(1.0);
        format!("--dock-scale:{scale:.3};")
    };

    view! {
        <button
            type="button"
            id=dock_icon_dom_id(app_id)
            class="dock-icon"
            class:running=move || running.get()
            node_ref=node
            title=entry.dock_label
            aria-label=entry.dock_label
            style=scale_style
            on:click=move |ev| {
                ev.stop_propagation();
                runtime.dispatch_action(DesktopAction::OpenApp { app_id });
            }
        >
            <span class="dock-glyph" aria-hidden="true">{entry.glyph}</span>
            <span class="dock-running-indicator" aria-hidden="true"></span>
        </button>
    }
}
