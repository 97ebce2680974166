use super::*;

#[component]
/// Shared panel surface that frames one panel section.
pub fn Panel(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional, into)] heading: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <section
            class=merge_layout_class("ui-panel", layout_class)
            data-ui-primitive="true"
            data-ui-kind="panel"
            aria-label=aria_label
        >
            {heading.map(|heading| view! { <h3 data-ui-slot="heading">{heading}</h3> })}
            {children()}
        </section>
    }
}

#[component]
/// Shared table primitive with a static header row.
pub fn DataTable(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    columns: &'static [&'static str],
    children: Children,
) -> impl IntoView {
    view! {
        <table
            class=merge_layout_class("ui-data-table", layout_class)
            data-ui-primitive="true"
            data-ui-kind="data-table"
            aria-label=aria_label
        >
            <thead>
                <tr>
                    {columns.iter().map(|column| view! { <th scope="col">{*column}</th> }).collect_view()}
                </tr>
            </thead>
            <tbody>{children()}</tbody>
        </table>
    }
}

#[component]
/// Single full-width row used for loading and error placeholders inside [`DataTable`].
pub fn PlaceholderRow(colspan: u32, #[prop(into)] text: String) -> impl IntoView {
    view! {
        <tr data-ui-kind="placeholder-row">
            <td colspan=colspan.to_string()>{text}</td>
        </tr>
    }
}

#[component]
/// Small status pill.
pub fn Badge(
    #[prop(default = Tone::Neutral)] tone: Tone,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let class = merge_layout_class("ui-badge status", layout_class);
    view! {
        <span
            class=format!("{class} status--{}", tone.token())
            data-ui-primitive="true"
            data-ui-kind="badge"
            data-ui-tone=tone.token()
        >
            {children()}
        </span>
    }
}

#[component]
/// Inline feedback text that renders nothing while `message` is empty.
pub fn InlineMessage(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(into)] message: Signal<Option<(Tone, String)>>,
) -> impl IntoView {
    let class = merge_layout_class("ui-inline-message", layout_class);
    move || {
        message.get().map(|(tone, text)| {
            view! {
                <p
                    class=class.clone()
                    role="status"
                    data-ui-primitive="true"
                    data-ui-kind="inline-message"
                    data-ui-tone=tone.token()
                >
                    {text}
                </p>
            }
        })
    }
}

#[component]
/// Single-line status text for toolbars and footers.
pub fn StatusLine(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(into)] text: MaybeSignal<String>,
) -> impl IntoView {
    view! {
        <span
            class=merge_layout_class("ui-status-line", layout_class)
            data-ui-primitive="true"
            data-ui-kind="status-line"
            aria-live="polite"
        >
            {move || text.get()}
        </span>
    }
}
