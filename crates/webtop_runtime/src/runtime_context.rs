//! Runtime provider and context wiring for the desktop shell.
//!
//! This module owns the long-lived desktop state container, the runtime effect queue and the
//! dispatch callback every surface funnels its mutations through. UI composition stays in
//! [`crate::components`].

use leptos::*;

use crate::{
    config::DesktopConfig,
    effect_executor,
    error::RuntimeError,
    model::{DesktopState, WindowId},
    reducer::{reduce_desktop, DesktopAction, RuntimeEffect},
};

#[derive(Clone, Copy)]
/// Handle for reading desktop state and dispatching [`DesktopAction`] values.
///
/// The handle is `Copy`; surfaces receive it as an explicit prop.
pub struct DesktopRuntimeContext {
    /// Configuration the registry was created with.
    pub config: StoredValue<DesktopConfig>,
    /// Reactive desktop state signal.
    pub state: RwSignal<DesktopState>,
    /// Window currently holding pointer capture for a drag or resize, if any.
    pub drag_owner: RwSignal<Option<WindowId>>,
    /// Queue of runtime effects emitted by the reducer and processed by the executor.
    pub effects: RwSignal<Vec<RuntimeEffect>>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<DesktopAction>,
}

impl DesktopRuntimeContext {
    /// Creates the state container and dispatch callback under the current reactive owner.
    pub fn new(config: DesktopConfig) -> Self {
        let state = create_rw_signal(DesktopState::new(config.clone()));
        let drag_owner = create_rw_signal(None::<WindowId>);
        let effects = create_rw_signal(Vec::<RuntimeEffect>::new());

        let dispatch = Callback::new(move |action: DesktopAction| {
            let mut desktop = state.get_untracked();
            let previous = desktop.clone();
            let new_effects = reduce_desktop(&mut desktop, action.clone());

            if desktop == previous {
                if let Some(window_id) = target_window(&action) {
                    if previous.registry.get(window_id).is_none() {
                        logging::debug_warn!("desktop action for unknown window: {action:?}");
                    }
                }
            } else {
                log_lifecycle(&previous, &desktop);
                state.set(desktop);
            }

            // Effects run even when state is unchanged, e.g. reopening the active window's kind.
            if !new_effects.is_empty() {
                let mut queue = effects.get_untracked();
                queue.extend(new_effects);
                effects.set(queue);
            }
        });

        Self {
            config: store_value(config),
            state,
            drag_owner,
            effects,
            dispatch,
        }
    }

    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: DesktopAction) {
        self.dispatch.call(action);
    }
}

fn target_window(action: &DesktopAction) -> Option<WindowId> {
    match action {
        DesktopAction::CloseWindow { window_id }
        | DesktopAction::FocusWindow { window_id }
        | DesktopAction::MinimizeWindow { window_id }
        | DesktopAction::RestoreWindow { window_id }
        | DesktopAction::UpdatePosition { window_id, .. }
        | DesktopAction::UpdateSize { window_id, .. } => Some(*window_id),
        DesktopAction::OpenWindow { .. }
        | DesktopAction::ToggleLauncher
        | DesktopAction::CloseLauncher => None,
    }
}

fn log_lifecycle(previous: &DesktopState, next: &DesktopState) {
    for window in next.windows() {
        if previous.registry.get(window.id).is_none() {
            logging::log!("window {} opened: {}", window.id.0, window.title);
        }
    }
    for window in previous.windows() {
        if next.registry.get(window.id).is_none() {
            logging::log!("window {} closed: {}", window.id.0, window.title);
        }
    }
}

#[component]
/// Provides [`DesktopRuntimeContext`] to descendant components.
pub fn DesktopProvider(
    /// Registry configuration; defaults apply when omitted.
    #[prop(optional)]
    config: DesktopConfig,
    children: Children,
) -> impl IntoView {
    let runtime = DesktopRuntimeContext::new(config);
    provide_context(runtime);
    effect_executor::install(runtime);

    children().into_view()
}

/// Returns the current [`DesktopRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`DesktopProvider`]; that is a composition bug, not bad input.
pub fn use_desktop_runtime() -> DesktopRuntimeContext {
    match try_use_desktop_runtime() {
        Ok(runtime) => runtime,
        Err(err) => panic!("{err}"),
    }
}

/// Returns the current [`DesktopRuntimeContext`] or [`RuntimeError::ContextMissing`].
pub fn try_use_desktop_runtime() -> Result<DesktopRuntimeContext, RuntimeError> {
    use_context::<DesktopRuntimeContext>().ok_or(RuntimeError::ContextMissing)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::AppKind;

    fn with_runtime_owner(test: impl FnOnce()) {
        let runtime = create_runtime();
        test();
        runtime.dispose();
    }

    #[test]
    fn lookup_outside_provider_reports_missing_context() {
        with_runtime_owner(|| {
            assert_eq!(
                try_use_desktop_runtime().err(),
                Some(RuntimeError::ContextMissing)
            );
        });
    }

    #[test]
    #[should_panic(expected = "DesktopRuntimeContext not provided")]
    fn use_outside_provider_fails_fast() {
        let _runtime = create_runtime();
        let _ = use_desktop_runtime();
    }

    #[test]
    fn dispatch_updates_state_and_queues_effects() {
        with_runtime_owner(|| {
            let runtime = DesktopRuntimeContext::new(DesktopConfig::default());

            runtime.dispatch_action(DesktopAction::OpenWindow {
                kind: AppKind::Terminal,
            });

            let desktop = runtime.state.get_untracked();
            let terminal = desktop.windows()[0].id;
            assert_eq!(desktop.focused_window_id(), Some(terminal));
            assert_eq!(
                runtime.effects.get_untracked(),
                vec![RuntimeEffect::FocusWindowInput(terminal)]
            );
        });
    }

    #[test]
    fn reopening_active_kind_still_queues_input_focus() {
        with_runtime_owner(|| {
            let runtime = DesktopRuntimeContext::new(DesktopConfig::default());
            runtime.dispatch_action(DesktopAction::OpenWindow {
                kind: AppKind::Notes,
            });
            let notes = runtime.state.get_untracked().windows()[0].id;
            runtime.effects.set(Vec::new());
            let before = runtime.state.get_untracked();

            runtime.dispatch_action(DesktopAction::OpenWindow {
                kind: AppKind::Notes,
            });

            assert_eq!(runtime.state.get_untracked(), before);
            assert_eq!(
                runtime.effects.get_untracked(),
                vec![RuntimeEffect::FocusWindowInput(notes)]
            );
        });
    }

    #[test]
    fn no_op_dispatch_leaves_queue_untouched() {
        with_runtime_owner(|| {
            let runtime = DesktopRuntimeContext::new(DesktopConfig::default());

            runtime.dispatch_action(DesktopAction::CloseWindow {
                window_id: WindowId(7),
            });

            assert!(runtime.state.get_untracked().windows().is_empty());
            assert!(runtime.effects.get_untracked().is_empty());
        });
    }
}
