//! Terminal panel: a line-oriented command prompt over the cached users and history.
//!
//! Commands are parsed into [`commands::TerminalCommand`] and rendered against the shared data
//! caches, which the panel refreshes when it mounts. Entered commands are recorded in the
//! runtime's terminal history for Up/Down recall.

#![warn(rustdoc::broken_intra_doc_links)]

pub mod commands;

use desktop_app_contract::{AppMountContext, AppServices};
use leptos::ev::KeyboardEvent;
use leptos::*;
use system_ui::prelude::*;

use crate::commands::{execute, TerminalCommand, TerminalOutput, CLEARED_TEXT, PROMPT};

#[derive(Debug, Clone, PartialEq, Eq)]
struct TranscriptLine {
    prompt: bool,
    text: String,
}

impl TranscriptLine {
    fn echo(text: impl Into<String>) -> Self {
        Self {
            prompt: true,
            text: text.into(),
        }
    }

    fn output(text: impl Into<String>) -> Self {
        Self {
            prompt: false,
            text: text.into(),
        }
    }
}

fn welcome_transcript() -> Vec<TranscriptLine> {
    vec![
        TranscriptLine::output("Welcome to macOS Password Manager Terminal"),
        TranscriptLine::output("Type 'help' for available commands."),
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RecallDirection {
    Older,
    Newer,
}

/// Moves the recall cursor; `None` cursor sits past the newest entry.
///
/// Returns `None` when the input should stay untouched.
fn recall(
    history: &[String],
    cursor: Option<usize>,
    direction: RecallDirection,
) -> Option<(Option<usize>, String)> {
    match direction {
        RecallDirection::Older => {
            let index = cursor.unwrap_or(history.len());
            (index > 0).then(|| (Some(index - 1), history[index - 1].clone()))
        }
        RecallDirection::Newer => match cursor {
            Some(index) if index + 1 < history.len() => {
                Some((Some(index + 1), history[index + 1].clone()))
            }
            _ => Some((None, String::new())),
        },
    }
}

/// Mounts the terminal panel.
pub fn mount(context: AppMountContext) -> View {
    view! { <TerminalApp services=context.services /> }.into_view()
}

#[component]
fn TerminalApp(services: AppServices) -> impl IntoView {
    let input = create_rw_signal(String::new());
    let transcript = create_rw_signal(welcome_transcript());
    let cursor = create_rw_signal::<Option<usize>>(None);
    let screen = create_node_ref::<html::Div>();
    let input_ref = create_node_ref::<html::Input>();

    let warm = services.clone();
    spawn_local(async move {
        if let Err(err) = warm.refresh_users().await {
            logging::warn!("terminal users refresh failed: {err}");
        }
        if let Err(err) = warm.refresh_history().await {
            logging::warn!("terminal history refresh failed: {err}");
        }
    });

    request_animation_frame(move || {
        if let Some(field) = input_ref.get_untracked() {
            let _ = field.focus();
        }
    });

    create_effect(move |_| {
        transcript.with(|_| ());
        if let Some(screen) = screen.get() {
            screen.set_scroll_top(screen.scroll_height());
        }
    });

    let users = services.data.users;
    let history = services.data.history;
    let window = services.window;
    let recall_list = services.terminal.history;
    let terminal = services.terminal;

    let submit = move || {
        let raw = input.get_untracked();
        let command_text = raw.trim().to_string();
        input.set(String::new());
        cursor.set(None);
        if command_text.is_empty() {
            return;
        }
        terminal.push(command_text.clone());

        let command = TerminalCommand::parse(&command_text);
        let output = users.with_untracked(|users| {
            history.with_untracked(|history| execute(&command, users, history))
        });
        match output {
            TerminalOutput::Cleared => transcript.set(vec![TranscriptLine::echo(CLEARED_TEXT)]),
            TerminalOutput::Text(text) => transcript.update(|lines| {
                lines.push(TranscriptLine::echo(command_text));
                lines.push(TranscriptLine::output(text));
            }),
        }
        if let Some(app_id) = command.opens() {
            window.open(app_id);
        }
    };

    let navigate = move |direction: RecallDirection| {
        let next = recall_list.with_untracked(|list| recall(list, cursor.get_untracked(), direction));
        if let Some((next_cursor, text)) = next {
            cursor.set(next_cursor);
            input.set(text);
        }
    };

    let on_keydown = Callback::new(move |ev: KeyboardEvent| match ev.key().as_str() {
        "Enter" => {
            ev.prevent_default();
            submit();
        }
        "ArrowUp" => {
            ev.prevent_default();
            navigate(RecallDirection::Older);
        }
        "ArrowDown" => {
            ev.prevent_default();
            navigate(RecallDirection::Newer);
        }
        _ => {}
    });

    view! {
        <div class="app-shell app-terminal-shell" on:click=move |_| {
            if let Some(field) = input_ref.get_untracked() {
                let _ = field.focus();
            }
        }>
            <TerminalSurface layout_class="terminal-output" node_ref=screen>
                <For
                    each=move || {
                        transcript.get().into_iter().enumerate().collect::<Vec<_>>()
                    }
                    key=|(index, line)| (*index, line.text.clone())
                    let:entry
                >
                    {
                        let (_, line) = entry;
                        let prompt = line.prompt.then(|| PROMPT.to_string());
                        view! { <TerminalLine prompt=prompt text=line.text /> }
                    }
                </For>
            </TerminalSurface>
            <div class="terminal-input-row">
                <span class="terminal-prompt">{PROMPT}</span>
                <TextField
                    layout_class="terminal-input"
                    id="terminal-input"
                    aria_label="Terminal command"
                    autocomplete="off"
                    node_ref=input_ref
                    value=input
                    on_value=Callback::new(move |value| input.set(value))
                    on_keydown=on_keydown
                />
            </div>
        </div>
    }
}
