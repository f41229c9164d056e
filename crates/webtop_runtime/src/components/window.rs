use super::*;
use crate::{
    drag::{DragController, DragUpdate, ListenerGuard},
    host,
    model::{ResizeEdge, WindowRect},
};

#[component]
pub(super) fn DesktopWindow(runtime: DesktopRuntimeContext, window_id: WindowId) -> impl IntoView {
    let frame = create_memo(move |_| runtime.state.with(|desktop| window_frame(desktop, window_id)));
    let drag = store_value(DragController::new(
        runtime.config.with_value(|config| config.min_window_size()),
    ));

    // Another window took the pointer, or the owner was cleared after this window closed.
    create_effect(move |_| {
        if runtime.drag_owner.get() != Some(window_id) {
            let _ = drag.try_update_value(|controller| {
                if !controller.is_idle() {
                    controller.end();
                }
            });
        }
    });
    on_cleanup(move || {
        let _ = drag.try_update_value(DragController::end);
    });

    let Some(initial) = frame.get_untracked() else {
        return ().into_view();
    };
    let title = initial.title.clone();

    let focus = move |_: web_sys::PointerEvent| focus_window(runtime, window_id);
    let begin_move = move |ev: web_sys::PointerEvent| {
        if ev.button() != 0 {
            return;
        }
        ev.prevent_default();
        ev.stop_propagation();
        focus_window(runtime, window_id);
        let Some(current) = frame.get_untracked() else {
            return;
        };
        let listeners = subscribe_pointer_listeners(runtime, window_id, drag);
        drag.update_value(|controller| {
            controller.begin_move(pointer_from_pointer_event(&ev), current.position, listeners)
        });
        runtime.drag_owner.set(Some(window_id));
    };
    let press_control = move |ev: web_sys::PointerEvent| {
        ev.stop_propagation();
        focus_window(runtime, window_id);
    };

    view! {
        <section
            id=host::window_dom_id(window_id)
            class=move || frame_class(frame.get().as_ref())
            style=move || frame_style(frame.get().as_ref())
            hidden=move || frame.with(|frame| frame.as_ref().map(|f| f.emphasis == FrameEmphasis::Hidden).unwrap_or(true))
            tabindex="-1"
            role="dialog"
            aria-label=title.clone()
            on:pointerdown=focus
        >
            <header class="window-titlebar" on:pointerdown=begin_move>
                <span class="window-title">{title}</span>
                <div class="window-controls">
                    <button
                        type="button"
                        aria-label="Minimize window"
                        on:pointerdown=press_control
                        on:click=move |ev: web_sys::MouseEvent| {
                            ev.prevent_default();
                            runtime.dispatch_action(DesktopAction::MinimizeWindow { window_id });
                        }
                    >
                        "\u{2013}"
                    </button>
                    <button
                        type="button"
                        class="window-close"
                        aria-label="Close window"
                        on:pointerdown=press_control
                        on:click=move |ev: web_sys::MouseEvent| {
                            ev.prevent_default();
                            runtime.dispatch_action(DesktopAction::CloseWindow { window_id });
                        }
                    >
                        "\u{00d7}"
                    </button>
                </div>
            </header>
            <div class="window-body">{apps::mount_app(initial.kind, window_id)}</div>
            {ResizeEdge::ALL
                .into_iter()
                .map(|edge| {
                    view! { <WindowResizeHandle runtime=runtime window_id=window_id edge=edge frame=frame drag=drag /> }
                })
                .collect_view()}
        </section>
    }
    .into_view()
}

#[component]
fn WindowResizeHandle(
    runtime: DesktopRuntimeContext,
    window_id: WindowId,
    edge: ResizeEdge,
    frame: Memo<Option<WindowFrame>>,
    drag: StoredValue<DragController>,
) -> impl IntoView {
    let class_name = format!("window-resize-handle {}", resize_edge_class(edge));

    let on_pointerdown = move |ev: web_sys::PointerEvent| {
        if ev.button() != 0 {
            return;
        }
        ev.prevent_default();
        ev.stop_propagation();
        focus_window(runtime, window_id);
        let Some(current) = frame.get_untracked() else {
            return;
        };
        let rect = WindowRect {
            position: current.position,
            size: current.size,
        };
        let listeners = subscribe_pointer_listeners(runtime, window_id, drag);
        drag.update_value(|controller| {
            controller.begin_resize(edge, pointer_from_pointer_event(&ev), rect, listeners)
        });
        runtime.drag_owner.set(Some(window_id));
    };

    view! { <div class=class_name aria-hidden="true" on:pointerdown=on_pointerdown /> }
}

/// Installs document-level move/up/cancel listeners for one interaction and returns the guard
/// that removes them.
fn subscribe_pointer_listeners(
    runtime: DesktopRuntimeContext,
    window_id: WindowId,
    drag: StoredValue<DragController>,
) -> ListenerGuard {
    let on_move = window_event_listener(ev::pointermove, move |ev| {
        let pointer = pointer_from_pointer_event(&ev);
        let Some(update) = drag
            .try_with_value(|controller| controller.pointer_moved(pointer))
            .flatten()
        else {
            return;
        };
        commit_drag_update(runtime, window_id, update);
    });
    let on_up = window_event_listener(ev::pointerup, move |_| {
        end_pointer_interaction(runtime, window_id, drag)
    });
    let on_cancel = window_event_listener(ev::pointercancel, move |_| {
        end_pointer_interaction(runtime, window_id, drag)
    });

    ListenerGuard::new(move || {
        on_move.remove();
        on_up.remove();
        on_cancel.remove();
    })
}

fn commit_drag_update(runtime: DesktopRuntimeContext, window_id: WindowId, update: DragUpdate) {
    match update {
        DragUpdate::Move(position) => {
            runtime.dispatch_action(DesktopAction::UpdatePosition {
                window_id,
                position,
            });
        }
        DragUpdate::Resize(rect) => {
            let moved = runtime.state.with_untracked(|desktop| {
                desktop
                    .registry
                    .get(window_id)
                    .map(|w| w.position != rect.position)
                    .unwrap_or(false)
            });
            if moved {
                runtime.dispatch_action(DesktopAction::UpdatePosition {
                    window_id,
                    position: rect.position,
                });
            }
            runtime.dispatch_action(DesktopAction::UpdateSize {
                window_id,
                size: rect.size,
            });
        }
    }
}

fn end_pointer_interaction(
    runtime: DesktopRuntimeContext,
    window_id: WindowId,
    drag: StoredValue<DragController>,
) {
    let _ = drag.try_update_value(DragController::end);
    if runtime.drag_owner.get_untracked() == Some(window_id) {
        runtime.drag_owner.set(None);
    }
}

fn resize_edge_class(edge: ResizeEdge) -> &'static str {
    match edge {
        ResizeEdge::North => "edge-n",
        ResizeEdge::South => "edge-s",
        ResizeEdge::East => "edge-e",
        ResizeEdge::West => "edge-w",
        ResizeEdge::NorthEast => "edge-ne",
        ResizeEdge::NorthWest => "edge-nw",
        ResizeEdge::SouthEast => "edge-se",
        ResizeEdge::SouthWest => "edge-sw",
    }
}
