use super::*;

const CLOCK_TICK: std::time::Duration = std::time::Duration::from_secs(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum TaskbarStatus {
    Active,
    Visible,
    Minimized,
}

/// One taskbar button; entries follow registry order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct TaskbarEntry {
    pub window_id: WindowId,
    pub kind: AppKind,
    pub title: String,
    pub status: TaskbarStatus,
}

pub(super) fn taskbar_entries(state: &DesktopState) -> Vec<TaskbarEntry> {
    state
        .windows()
        .iter()
        .map(|win| TaskbarEntry {
            window_id: win.id,
            kind: win.kind,
            title: win.title.clone(),
            status: if win.minimized {
                TaskbarStatus::Minimized
            } else if win.active {
                TaskbarStatus::Active
            } else {
                TaskbarStatus::Visible
            },
        })
        .collect()
}

fn entry_class(status: TaskbarStatus) -> &'static str {
    match status {
        TaskbarStatus::Active => "taskbar-app active",
        TaskbarStatus::Visible => "taskbar-app",
        TaskbarStatus::Minimized => "taskbar-app minimized",
    }
}

fn launcher_toggle_class(open: bool) -> &'static str {
    if open {
        "taskbar-launcher-toggle open"
    } else {
        "taskbar-launcher-toggle"
    }
}

pub(super) fn format_clock(hours: u32, minutes: u32) -> String {
    format!("{hours:02}:{minutes:02}")
}

#[cfg(target_arch = "wasm32")]
fn current_clock_label() -> String {
    let now = js_sys::Date::new_0();
    format_clock(now.get_hours(), now.get_minutes())
}

#[cfg(not(target_arch = "wasm32"))]
fn current_clock_label() -> String {
    String::from("--:--")
}

#[component]
pub(super) fn Taskbar(runtime: DesktopRuntimeContext) -> impl IntoView {
    let state = runtime.state;
    let launcher_open = create_memo(move |_| state.with(|desktop| desktop.launcher_open));
    let entries = create_memo(move |_| state.with(taskbar_entries));

    let clock = create_rw_signal(current_clock_label());
    match set_interval_with_handle(move || clock.set(current_clock_label()), CLOCK_TICK) {
        Ok(handle) => on_cleanup(move || handle.clear()),
        Err(err) => logging::warn!("taskbar clock disabled: {err:?}"),
    }

    view! {
        <footer class="taskbar" role="toolbar" aria-label="Desktop taskbar">
            <button
                type="button"
                class=move || launcher_toggle_class(launcher_open.get())
                aria-haspopup="menu"
                aria-expanded=move || launcher_open.get().to_string()
                on:click=move |ev: web_sys::MouseEvent| {
                    stop_mouse_event(&ev);
                    runtime.dispatch_action(DesktopAction::ToggleLauncher);
                }
            >
                "Start"
            </button>

            <div class="taskbar-windows" role="group" aria-label="Open windows">
                <For
                    each=move || entries.get()
                    key=|entry| (entry.window_id.0, entry.status as u8, entry.title.clone())
                    let:entry
                >
                    {
                        let window_id = entry.window_id;
                        view! {
                            <button
                                type="button"
                                class=entry_class(entry.status)
                                data-app=entry.kind.slug()
                                aria-pressed=(entry.status == TaskbarStatus::Active).to_string()
                                on:click=move |ev: web_sys::MouseEvent| {
                                    stop_mouse_event(&ev);
                                    runtime.dispatch_action(DesktopAction::RestoreWindow { window_id });
                                }
                            >
                                {entry.title}
                            </button>
                        }
                    }
                </For>
            </div>

            <time class="taskbar-clock" aria-live="off">{move || clock.get()}</time>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::reducer::reduce_desktop;

    #[test]
    fn entries_follow_registry_order_with_status() {
        let mut state = DesktopState::default();
        for kind in [AppKind::Calculator, AppKind::Notes, AppKind::Settings] {
            reduce_desktop(&mut state, DesktopAction::OpenWindow { kind });
        }
        let ids: Vec<_> = state.windows().iter().map(|w| w.id).collect();
        reduce_desktop(&mut state, DesktopAction::MinimizeWindow { window_id: ids[0] });

        let entries = taskbar_entries(&state);

        let summary: Vec<_> = entries
            .iter()
            .map(|entry| (entry.title.as_str(), entry.status))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("Calculator", TaskbarStatus::Minimized),
                ("Notes", TaskbarStatus::Visible),
                ("Settings", TaskbarStatus::Active),
            ]
        );
    }

    #[test]
    fn entry_classes_distinguish_status() {
        assert_eq!(entry_class(TaskbarStatus::Active), "taskbar-app active");
        assert_eq!(entry_class(TaskbarStatus::Minimized), "taskbar-app minimized");
        assert_eq!(launcher_toggle_class(true), "taskbar-launcher-toggle open");
    }

    #[test]
    fn clock_is_zero_padded() {
        assert_eq!(format_clock(9, 5), "09:05");
        assert_eq!(format_clock(23, 59), "23:59");
    }
}
