//! Leaf application mounting.
//!
//! Hosted applications are self-contained widgets; the window manager only picks the constructor
//! for a window's [`AppKind`]. Each widget here is a placeholder surface that owns its own state.

use leptos::*;

use crate::{
    host,
    model::{AppKind, WindowId},
};

/// Launcher and desktop-icon entry for one application kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppDescriptor {
    pub kind: AppKind,
    pub label: &'static str,
    pub icon_id: &'static str,
}

/// Applications in launcher order.
pub fn launcher_apps() -> Vec<AppDescriptor> {
    AppKind::ALL
        .iter()
        .map(|&kind| AppDescriptor {
            kind,
            label: kind.title(),
            icon_id: kind.icon_id(),
        })
        .collect()
}

/// Applications shown as desktop icons; same set and order as the launcher.
pub fn desktop_icon_apps() -> Vec<AppDescriptor> {
    launcher_apps()
}

/// Builds the content view for a window of `kind`.
///
/// Apps with a text field tag it with [`host::window_primary_input_dom_id`] so focusing the window
/// lands there.
pub fn mount_app(kind: AppKind, window_id: WindowId) -> View {
    match kind {
        AppKind::Calculator => view! { <CalculatorPlaceholder /> }.into_view(),
        AppKind::Settings => view! { <SettingsPlaceholder /> }.into_view(),
        AppKind::Terminal => {
            let input_id = host::window_primary_input_dom_id(window_id);
            view! { <TerminalPlaceholder input_id=input_id /> }.into_view()
        }
        AppKind::Notes => {
            let input_id = host::window_primary_input_dom_id(window_id);
            view! { <NotesPlaceholder input_id=input_id /> }.into_view()
        }
        AppKind::FileBrowser => view! { <FileBrowserPlaceholder /> }.into_view(),
    }
}

#[component]
fn CalculatorPlaceholder() -> impl IntoView {
    let display = create_rw_signal(String::from("0"));
    let keys = ["7", "8", "9", "4", "5", "6", "1", "2", "3", "0"];

    view! {
        <div class="app app-calculator">
            <output class="app-calculator-display">{move || display.get()}</output>
            <div class="app-calculator-keys" role="group" aria-label="Digits">
                {keys
                    .into_iter()
                    .map(|key| {
                        view! {
                            <button
                                type="button"
                                on:click=move |_| {
                                    display.update(|value| {
                                        if value == "0" {
                                            value.clear();
                                        }
                                        value.push_str(key);
                                    })
                                }
                            >
                                {key}
                            </button>
                        }
                    })
                    .collect_view()}
                <button type="button" on:click=move |_| display.set(String::from("0"))>
                    "C"
                </button>
            </div>
        </div>
    }
}

#[component]
fn SettingsPlaceholder() -> impl IntoView {
    view! {
        <div class="app app-settings">
            <p><strong>"Settings"</strong></p>
            <p>"Appearance and system preferences live here."</p>
        </div>
    }
}

#[component]
fn TerminalPlaceholder(input_id: String) -> impl IntoView {
    let lines = create_rw_signal(vec![String::from("Welcome to the terminal.")]);
    let input = create_rw_signal(String::new());

    view! {
        <div class="app app-terminal">
            <pre class="app-terminal-output">{move || lines.get().join("\n")}</pre>
            <input
                id=input_id
                class="app-terminal-input"
                aria-label="Command"
                prop:value=move || input.get()
                on:input=move |ev| input.set(event_target_value(&ev))
                on:keydown=move |ev: web_sys::KeyboardEvent| {
                    if ev.key() != "Enter" {
                        return;
                    }
                    let command = input.get_untracked();
                    input.set(String::new());
                    lines.update(|lines| lines.push(format!("$ {command}")));
                }
            />
        </div>
    }
}

#[component]
fn NotesPlaceholder(input_id: String) -> impl IntoView {
    let text = create_rw_signal(String::new());

    view! {
        <div class="app app-notes">
            <textarea
                id=input_id
                aria-label="Note"
                prop:value=move || text.get()
                on:input=move |ev| text.set(event_target_value(&ev))
            />
        </div>
    }
}

#[component]
fn FileBrowserPlaceholder() -> impl IntoView {
    view! {
        <div class="app app-file-browser">
            <ul role="tree" aria-label="Files">
                <li role="treeitem">"Documents"</li>
                <li role="treeitem">"Pictures"</li>
                <li role="treeitem">"Downloads"</li>
            </ul>
        </div>
    }
}
