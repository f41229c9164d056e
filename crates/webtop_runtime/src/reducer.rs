//! Reducer actions, side-effect intents, and transition logic for the desktop runtime.

use crate::model::{AppKind, DesktopState, WindowId, WindowPosition, WindowSize};

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_desktop`] to mutate [`DesktopState`].
pub enum DesktopAction {
    /// Open a window of the given kind, or focus the visible one.
    OpenWindow {
        /// Application kind to host.
        kind: AppKind,
    },
    /// Close a window by id.
    CloseWindow {
        /// Window to close.
        window_id: WindowId,
    },
    /// Make a window the active one.
    FocusWindow {
        /// Window to focus.
        window_id: WindowId,
    },
    /// Minimize a window.
    MinimizeWindow {
        /// Window to minimize.
        window_id: WindowId,
    },
    /// Un-minimize and focus a window.
    RestoreWindow {
        /// Window to restore.
        window_id: WindowId,
    },
    /// Move a window's top-left corner.
    UpdatePosition {
        /// Window being moved.
        window_id: WindowId,
        /// New top-left corner.
        position: WindowPosition,
    },
    /// Resize a window.
    UpdateSize {
        /// Window being resized.
        window_id: WindowId,
        /// New size, clamped to the configured minimum.
        size: WindowSize,
    },
    /// Toggle the launcher open/closed.
    ToggleLauncher,
    /// Close the launcher if open.
    CloseLauncher,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Side-effect intents emitted by [`reduce_desktop`] for the shell runtime to execute.
pub enum RuntimeEffect {
    /// Move DOM focus into the newly active window.
    FocusWindowInput(WindowId),
    /// Tear down any live pointer interaction owned by a window that no longer exists.
    ReleaseInteraction(WindowId),
}

/// Applies a [`DesktopAction`] to the desktop state and collects resulting side effects.
///
/// This function is the authoritative state transition engine for desktop window management.
/// Actions naming a window that does not exist leave the state untouched.
pub fn reduce_desktop(state: &mut DesktopState, action: DesktopAction) -> Vec<RuntimeEffect> {
    let mut effects = Vec::new();
    match action {
        DesktopAction::OpenWindow { kind } => {
            let window_id = state.registry.open(kind);
            state.launcher_open = false;
            effects.push(RuntimeEffect::FocusWindowInput(window_id));
        }
        DesktopAction::CloseWindow { window_id } => {
            if state.registry.get(window_id).is_some() {
                let had_focus = state.focused_window_id() == Some(window_id);
                state.registry.close(window_id);
                effects.push(RuntimeEffect::ReleaseInteraction(window_id));
                if had_focus {
                    if let Some(next) = state.registry.active_window_id() {
                        effects.push(RuntimeEffect::FocusWindowInput(next));
                    }
                }
            }
        }
        DesktopAction::FocusWindow { window_id } => {
            let was_active = state.focused_window_id() == Some(window_id);
            state.registry.focus(window_id);
            if !was_active && state.focused_window_id() == Some(window_id) {
                effects.push(RuntimeEffect::FocusWindowInput(window_id));
            }
        }
        DesktopAction::MinimizeWindow { window_id } => {
            let had_focus = state.focused_window_id() == Some(window_id);
            state.registry.minimize(window_id);
            if had_focus {
                if let Some(next) = state.registry.active_window_id() {
                    effects.push(RuntimeEffect::FocusWindowInput(next));
                }
            }
        }
        DesktopAction::RestoreWindow { window_id } => {
            let was_active = state.focused_window_id() == Some(window_id);
            state.registry.restore(window_id);
            if !was_active && state.focused_window_id() == Some(window_id) {
                effects.push(RuntimeEffect::FocusWindowInput(window_id));
            }
        }
        DesktopAction::UpdatePosition {
            window_id,
            position,
        } => state.registry.update_position(window_id, position),
        DesktopAction::UpdateSize { window_id, size } => {
            state.registry.update_size(window_id, size)
        }
        DesktopAction::ToggleLauncher => {
            state.launcher_open = !state.launcher_open;
        }
        DesktopAction::CloseLauncher => {
            state.launcher_open = false;
        }
    }

    effects
}
