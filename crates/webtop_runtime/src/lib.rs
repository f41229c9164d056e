//! Window-manager core for the browser desktop: the window registry, drag/resize interaction,
//! the compositor shell, the taskbar and the application launcher.

pub mod apps;
pub mod components;
pub mod config;
pub mod drag;
mod effect_executor;
pub mod error;
pub mod host;
pub mod model;
pub mod reducer;
mod runtime_context;
mod window_manager;

pub use components::{
    compositor_frames, window_frame, DesktopProvider, DesktopRuntimeContext, DesktopShell,
    FrameEmphasis, WindowFrame,
};
pub use config::{DesktopConfig, FocusHandoff, StackPolicy};
pub use drag::{resize_rect, DragController, DragUpdate, ListenerGuard};
pub use error::RuntimeError;
pub use model::*;
pub use reducer::{reduce_desktop, DesktopAction, RuntimeEffect};
pub use runtime_context::{try_use_desktop_runtime, use_desktop_runtime};
