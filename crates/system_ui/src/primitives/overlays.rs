use super::*;

#[component]
/// Modal dialog rendered over the active window while `open` is true.
pub fn Modal(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(into)] title: String,
    #[prop(into)] open: Signal<bool>,
    on_dismiss: Callback<()>,
    children: ChildrenFn,
) -> impl IntoView {
    let class = merge_layout_class("ui-modal", layout_class);
    let title = store_value(title);
    view! {
        <Show when=move || open.get() fallback=|| ()>
            <div
                class="ui-modal-backdrop"
                data-ui-primitive="true"
                data-ui-kind="modal-backdrop"
                on:click=move |_| on_dismiss.call(())
            >
                <div
                    class=class.clone()
                    role="dialog"
                    aria-modal="true"
                    aria-label=title.get_value()
                    data-ui-primitive="true"
                    data-ui-kind="modal"
                    on:click=|ev| ev.stop_propagation()
                >
                    <header data-ui-slot="header">
                        <h3>{title.get_value()}</h3>
                        <button
                            type="button"
                            class="ui-modal-close"
                            aria-label="Close"
                            on:click=move |_| on_dismiss.call(())
                        >
                            "×"
                        </button>
                    </header>
                    <div data-ui-slot="body">{children()}</div>
                </div>
            </div>
        </Show>
    }
}

#[component]
/// Shared overlay surface for menus and popups.
pub fn MenuSurface(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-menu-surface", layout_class)
            id=id
            role="menu"
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="menu-surface"
            on:mousedown=|ev| ev.stop_propagation()
        >
            {children()}
        </div>
    }
}

#[component]
/// Shared overlay menu item primitive.
pub fn MenuItem(
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class="ui-menu-item"
            role="menuitem"
            id=id
            data-ui-primitive="true"
            data-ui-kind="menu-item"
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        >
            {children()}
        </button>
    }
}

#[component]
/// Shared overlay menu separator.
pub fn MenuSeparator() -> impl IntoView {
    view! {
        <div
            class="ui-menu-separator"
            role="separator"
            aria-hidden="true"
            data-ui-primitive="true"
            data-ui-kind="menu-separator"
        ></div>
    }
}
