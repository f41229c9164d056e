//! Browser-facing helpers used by the effect executor and window chrome.

use crate::model::WindowId;

/// DOM id of the focusable root element of a window.
pub fn window_dom_id(window_id: WindowId) -> String {
    format!("desktop-window-{}", window_id.0)
}

/// DOM id an app puts on its primary text field to receive focus when its window is focused.
pub fn window_primary_input_dom_id(window_id: WindowId) -> String {
    format!("desktop-window-{}-primary-input", window_id.0)
}

/// Where keyboard focus goes once a window becomes active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusMove {
    /// Focus already sits inside the window (the press landed on a field); leave it there.
    Keep,
    PrimaryInput,
    Frame,
}

pub fn plan_focus_move(focus_inside_window: bool, has_primary_input: bool) -> FocusMove {
    if focus_inside_window {
        FocusMove::Keep
    } else if has_primary_input {
        FocusMove::PrimaryInput
    } else {
        FocusMove::Frame
    }
}

/// Moves DOM focus into a window once the current event settles.
///
/// The decision runs inside the deferred callback so it sees the element the browser focused for
/// the triggering press.
pub fn focus_window_input(window_id: WindowId) {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::{closure::Closure, JsCast};

        let Some(window) = web_sys::window() else {
            return;
        };
        let callback = Closure::once_into_js(move || {
            let Some(document) = web_sys::window().and_then(|window| window.document()) else {
                return;
            };
            let Some(frame) = document.get_element_by_id(&window_dom_id(window_id)) else {
                return;
            };
            let focus_inside_window = document
                .active_element()
                .map(|active| frame.contains(Some(active.as_ref())))
                .unwrap_or(false);
            let primary_input =
                document.get_element_by_id(&window_primary_input_dom_id(window_id));

            let target = match plan_focus_move(focus_inside_window, primary_input.is_some()) {
                FocusMove::Keep => return,
                FocusMove::PrimaryInput => primary_input,
                FocusMove::Frame => Some(frame),
            };
            if let Some(element) =
                target.and_then(|element| element.dyn_into::<web_sys::HtmlElement>().ok())
            {
                let _ = element.focus();
            }
        });
        let _ = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), 0);
    }

    #[cfg(not(target_arch = "wasm32"))]
    let _ = window_id;
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn window_dom_ids_are_stable() {
        assert_eq!(window_dom_id(WindowId(12)), "desktop-window-12");
        assert_eq!(
            window_primary_input_dom_id(WindowId(12)),
            "desktop-window-12-primary-input"
        );
    }

    #[test]
    fn focus_already_inside_window_is_left_alone() {
        assert_eq!(plan_focus_move(true, true), FocusMove::Keep);
        assert_eq!(plan_focus_move(true, false), FocusMove::Keep);
    }

    #[test]
    fn focus_from_outside_prefers_primary_input_over_frame() {
        assert_eq!(plan_focus_move(false, true), FocusMove::PrimaryInput);
        assert_eq!(plan_focus_move(false, false), FocusMove::Frame);
    }
}
