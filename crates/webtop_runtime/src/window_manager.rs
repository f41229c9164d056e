//! Window registry operations.
//!
//! Every operation is total: an id that is not present leaves the registry untouched. The
//! reducer and the drag controller are the only callers.

use crate::{
    config::{FocusHandoff, StackPolicy},
    model::{AppKind, WindowId, WindowPosition, WindowRecord, WindowRegistry, WindowSize},
};

impl WindowRegistry {
    /// Opens a window of `kind`, or focuses the visible window of that kind if one exists.
    pub fn open(&mut self, kind: AppKind) -> WindowId {
        if let Some(existing) = self
            .windows
            .iter()
            .find(|w| w.kind == kind && !w.minimized)
            .map(|w| w.id)
        {
            self.focus(existing);
            return existing;
        }

        let window_id = self.allocate_id();
        let slot = i32::try_from(self.windows.len()).unwrap_or(i32::MAX);
        let cascade = self
            .config
            .cascade_origin
            .saturating_add(self.config.cascade_step.saturating_mul(slot));
        for window in &mut self.windows {
            window.active = false;
        }
        self.windows.push(WindowRecord {
            id: window_id,
            kind,
            title: kind.title().to_string(),
            minimized: false,
            active: true,
            position: WindowPosition {
                x: cascade,
                y: cascade,
            },
            size: kind.default_size().clamped_min(self.config.min_window_size()),
        });
        window_id
    }

    pub fn close(&mut self, window_id: WindowId) {
        let Some(index) = self.index_of(window_id) else {
            return;
        };
        let removed = self.windows.remove(index);
        if removed.active {
            self.hand_off_focus();
        }
    }

    pub fn minimize(&mut self, window_id: WindowId) {
        let Some(window) = self.find_mut(window_id) else {
            return;
        };
        let was_active = window.active;
        window.minimized = true;
        window.active = false;
        if was_active {
            self.hand_off_focus();
        }
    }

    /// Un-minimizes `window_id` and makes it the only active window.
    pub fn restore(&mut self, window_id: WindowId) {
        let Some(window) = self.find_mut(window_id) else {
            return;
        };
        window.minimized = false;
        self.activate(window_id);
    }

    /// Makes `window_id` the only active window. Minimized windows cannot take focus.
    pub fn focus(&mut self, window_id: WindowId) {
        let focusable = self
            .get(window_id)
            .map(WindowRecord::is_visible)
            .unwrap_or(false);
        if focusable {
            self.activate(window_id);
        }
    }

    pub fn update_position(&mut self, window_id: WindowId, position: WindowPosition) {
        if let Some(window) = self.find_mut(window_id) {
            window.position = position;
        }
    }

    pub fn update_size(&mut self, window_id: WindowId, size: WindowSize) {
        let min = self.config.min_window_size();
        if let Some(window) = self.find_mut(window_id) {
            window.size = size.clamped_min(min);
        }
    }

    fn allocate_id(&mut self) -> WindowId {
        let id = WindowId(self.next_window_id);
        self.next_window_id = self.next_window_id.saturating_add(1);
        id
    }

    fn index_of(&self, window_id: WindowId) -> Option<usize> {
        self.windows.iter().position(|w| w.id == window_id)
    }

    fn find_mut(&mut self, window_id: WindowId) -> Option<&mut WindowRecord> {
        self.windows.iter_mut().find(|w| w.id == window_id)
    }

    fn activate(&mut self, window_id: WindowId) {
        for window in &mut self.windows {
            window.active = window.id == window_id;
        }
        if self.config.stack_policy == StackPolicy::RaiseOnFocus {
            self.raise(window_id);
        }
    }

    fn raise(&mut self, window_id: WindowId) {
        let Some(index) = self.index_of(window_id) else {
            return;
        };
        if index + 1 == self.windows.len() {
            return;
        }
        let window = self.windows.remove(index);
        self.windows.push(window);
    }

    fn hand_off_focus(&mut self) {
        if self.config.focus_handoff != FocusHandoff::TopmostVisible {
            return;
        }
        if let Some(next) = self.windows.iter_mut().rev().find(|w| !w.minimized) {
            next.active = true;
        }
    }
}
