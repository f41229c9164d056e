//! Explicit runtime effect-queue executor for reducer-emitted side effects.

use leptos::*;

use crate::{host, reducer::RuntimeEffect, runtime_context::DesktopRuntimeContext};

/// Installs the effect executor that drains reducer-emitted runtime effects in order.
pub fn install(runtime: DesktopRuntimeContext) {
    // Clear the current queue before processing so nested dispatches enqueue a fresh batch instead
    // of being overwritten by the in-flight drain.
    create_effect(move |_| {
        let queued = runtime.effects.get();
        if queued.is_empty() {
            return;
        }

        runtime.effects.set(Vec::new());

        for effect in queued {
            run_runtime_effect(runtime, effect);
        }
    });
}

fn run_runtime_effect(runtime: DesktopRuntimeContext, effect: RuntimeEffect) {
    match effect {
        RuntimeEffect::FocusWindowInput(window_id) => host::focus_window_input(window_id),
        RuntimeEffect::ReleaseInteraction(window_id) => {
            if runtime.drag_owner.get_untracked() == Some(window_id) {
                runtime.drag_owner.set(None);
            }
        }
    }
}
