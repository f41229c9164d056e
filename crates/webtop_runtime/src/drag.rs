//! Per-window drag and resize interaction state.
//!
//! A [`DragController`] lives inside one window component. Entering a drag or resize takes
//! ownership of a [`ListenerGuard`] for the document-level move/up listeners; the guard is stored
//! in the active phase, so every way out of that phase (pointer release, a new press, the
//! controller being dropped when the window unmounts) releases the listeners exactly once.

use std::fmt;

use crate::model::{PointerPosition, ResizeEdge, WindowPosition, WindowRect, WindowSize};

/// Scoped ownership of an event-listener registration.
pub struct ListenerGuard {
    release: Option<Box<dyn FnOnce()>>,
}

impl ListenerGuard {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// A guard with nothing to release.
    pub fn detached() -> Self {
        Self { release: None }
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl fmt::Debug for ListenerGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerGuard")
            .field("armed", &self.release.is_some())
            .finish()
    }
}

#[derive(Debug)]
enum DragPhase {
    Idle,
    Dragging {
        grab_offset: PointerPosition,
        _listeners: ListenerGuard,
    },
    Resizing {
        edge: ResizeEdge,
        pointer_start: PointerPosition,
        rect_start: WindowRect,
        _listeners: ListenerGuard,
    },
}

/// Geometry to commit to the registry after a pointer move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragUpdate {
    Move(WindowPosition),
    Resize(WindowRect),
}

#[derive(Debug)]
pub struct DragController {
    phase: DragPhase,
    min_size: WindowSize,
}

impl DragController {
    pub fn new(min_size: WindowSize) -> Self {
        Self {
            phase: DragPhase::Idle,
            min_size,
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.phase, DragPhase::Idle)
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, DragPhase::Dragging { .. })
    }

    pub fn is_resizing(&self) -> bool {
        matches!(self.phase, DragPhase::Resizing { .. })
    }

    /// Enters the dragging phase from a title-bar press.
    pub fn begin_move(
        &mut self,
        pointer: PointerPosition,
        window_position: WindowPosition,
        listeners: ListenerGuard,
    ) {
        self.phase = DragPhase::Dragging {
            grab_offset: PointerPosition {
                x: pointer.x.saturating_sub(window_position.x),
                y: pointer.y.saturating_sub(window_position.y),
            },
            _listeners: listeners,
        };
    }

    /// Enters the resizing phase from an edge or corner handle press.
    pub fn begin_resize(
        &mut self,
        edge: ResizeEdge,
        pointer: PointerPosition,
        rect: WindowRect,
        listeners: ListenerGuard,
    ) {
        self.phase = DragPhase::Resizing {
            edge,
            pointer_start: pointer,
            rect_start: rect,
            _listeners: listeners,
        };
    }

    /// Computes the geometry implied by the pointer's current position.
    pub fn pointer_moved(&self, pointer: PointerPosition) -> Option<DragUpdate> {
        match &self.phase {
            DragPhase::Idle => None,
            DragPhase::Dragging { grab_offset, .. } => Some(DragUpdate::Move(WindowPosition {
                x: pointer.x.saturating_sub(grab_offset.x),
                y: pointer.y.saturating_sub(grab_offset.y),
            })),
            DragPhase::Resizing {
                edge,
                pointer_start,
                rect_start,
                ..
            } => {
                let dx = pointer.x.saturating_sub(pointer_start.x);
                let dy = pointer.y.saturating_sub(pointer_start.y);
                Some(DragUpdate::Resize(resize_rect(
                    *rect_start,
                    *edge,
                    dx,
                    dy,
                    self.min_size,
                )))
            }
        }
    }

    /// Returns to idle, releasing any held listeners.
    pub fn end(&mut self) {
        self.phase = DragPhase::Idle;
    }
}

/// Applies resize deltas for a given edge/corner drag.
///
/// The result never drops below `min`; when a west or north edge hits the minimum the opposite
/// edge stays where it was.
pub fn resize_rect(
    start: WindowRect,
    edge: ResizeEdge,
    dx: i32,
    dy: i32,
    min: WindowSize,
) -> WindowRect {
    let WindowRect { position, size } = start;
    let (dw, dh) = match edge {
        ResizeEdge::East => (dx, 0),
        ResizeEdge::West => (dx.saturating_neg(), 0),
        ResizeEdge::South => (0, dy),
        ResizeEdge::North => (0, dy.saturating_neg()),
        ResizeEdge::NorthEast => (dx, dy.saturating_neg()),
        ResizeEdge::NorthWest => (dx.saturating_neg(), dy.saturating_neg()),
        ResizeEdge::SouthEast => (dx, dy),
        ResizeEdge::SouthWest => (dx.saturating_neg(), dy),
    };
    let resized = WindowSize {
        width: size.width.saturating_add(dw),
        height: size.height.saturating_add(dh),
    }
    .clamped_min(min);

    let mut moved = position;
    if edge.moves_left_edge() {
        moved.x = position
            .x
            .saturating_add(size.width)
            .saturating_sub(resized.width);
    }
    if edge.moves_top_edge() {
        moved.y = position
            .y
            .saturating_add(size.height)
            .saturating_sub(resized.height);
    }

    WindowRect {
        position: moved,
        size: resized,
    }
}
