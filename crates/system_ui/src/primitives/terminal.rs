use super::*;

#[component]
/// Scrolling terminal transcript container.
pub fn TerminalSurface(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] node_ref: NodeRef<html::Div>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-terminal", layout_class)
            node_ref=node_ref
            role="log"
            aria-live="polite"
            data-ui-primitive="true"
            data-ui-kind="terminal-surface"
        >
            {children()}
        </div>
    }
}

#[component]
/// One transcript line: an optional prompt followed by preformatted text.
pub fn TerminalLine(
    #[prop(optional_no_strip)] prompt: Option<String>,
    #[prop(into)] text: String,
) -> impl IntoView {
    view! {
        <div class="terminal-line" data-ui-kind="terminal-line">
            {prompt.map(|prompt| view! { <span class="terminal-prompt">{prompt}</span> })}
            <span class="terminal-text">{text}</span>
        </div>
    }
}
