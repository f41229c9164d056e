//! Desktop shell UI composition and interaction surfaces.

mod desktop_icons;
mod launcher;
mod taskbar;
mod window;

use leptos::*;
use wasm_bindgen::JsCast;

use self::{desktop_icons::DesktopIcons, launcher::Launcher, taskbar::Taskbar, window::DesktopWindow};

use crate::{
    apps,
    model::{AppKind, DesktopState, PointerPosition, WindowId, WindowPosition, WindowSize},
    reducer::DesktopAction,
};

pub use crate::runtime_context::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext};

const LAUNCHER_SELECTOR: &str = ".desktop-launcher";
const TASKBAR_SELECTOR: &str = ".taskbar";

/// How the compositor emphasises a window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameEmphasis {
    Active,
    Inactive,
    /// Minimized; kept mounted so the hosted widget keeps its state, but never drawn.
    Hidden,
}

/// Everything the compositor needs to place one window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowFrame {
    pub window_id: WindowId,
    pub kind: AppKind,
    pub title: String,
    pub position: WindowPosition,
    pub size: WindowSize,
    pub emphasis: FrameEmphasis,
    /// One-based position in registry order; used as the CSS stacking index.
    pub stack_index: usize,
}

/// Frames for every registered window, in registry (stacking) order.
pub fn compositor_frames(state: &DesktopState) -> Vec<WindowFrame> {
    state
        .windows()
        .iter()
        .enumerate()
        .map(|(idx, win)| WindowFrame {
            window_id: win.id,
            kind: win.kind,
            title: win.title.clone(),
            position: win.position,
            size: win.size,
            emphasis: if win.minimized {
                FrameEmphasis::Hidden
            } else if win.active {
                FrameEmphasis::Active
            } else {
                FrameEmphasis::Inactive
            },
            stack_index: idx + 1,
        })
        .collect()
}

pub fn window_frame(state: &DesktopState, window_id: WindowId) -> Option<WindowFrame> {
    compositor_frames(state)
        .into_iter()
        .find(|frame| frame.window_id == window_id)
}

fn frame_class(frame: Option<&WindowFrame>) -> &'static str {
    match frame.map(|frame| frame.emphasis) {
        Some(FrameEmphasis::Active) => "desktop-window active",
        Some(FrameEmphasis::Inactive) => "desktop-window inactive",
        Some(FrameEmphasis::Hidden) | None => "desktop-window minimized",
    }
}

fn frame_style(frame: Option<&WindowFrame>) -> String {
    let Some(frame) = frame else {
        return String::from("display:none;");
    };
    format!(
        "left:{}px;top:{}px;width:{}px;height:{}px;z-index:{};",
        frame.position.x, frame.position.y, frame.size.width, frame.size.height, frame.stack_index
    )
}

/// Where a click on the desktop shell landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickRegion {
    Launcher,
    Taskbar,
    Surface,
}

pub fn dismisses_launcher(region: ClickRegion) -> bool {
    matches!(region, ClickRegion::Surface)
}

/// Classifies a click from whether its target sits inside the launcher or the taskbar.
///
/// The launcher wins when both match, since it renders above the taskbar.
pub fn classify_click(in_launcher: bool, in_taskbar: bool) -> ClickRegion {
    if in_launcher {
        ClickRegion::Launcher
    } else if in_taskbar {
        ClickRegion::Taskbar
    } else {
        ClickRegion::Surface
    }
}

fn click_region(ev: &web_sys::MouseEvent) -> ClickRegion {
    let Some(element) = ev
        .target()
        .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
    else {
        return ClickRegion::Surface;
    };
    let inside = |selector: &str| matches!(element.closest(selector), Ok(Some(_)));
    classify_click(inside(LAUNCHER_SELECTOR), inside(TASKBAR_SELECTOR))
}

fn pointer_from_pointer_event(ev: &web_sys::PointerEvent) -> PointerPosition {
    PointerPosition {
        x: ev.client_x(),
        y: ev.client_y(),
    }
}

fn stop_mouse_event(ev: &web_sys::MouseEvent) {
    ev.prevent_default();
    ev.stop_propagation();
}

/// Focuses `window_id` unless it already is the active window.
fn focus_window(runtime: DesktopRuntimeContext, window_id: WindowId) {
    let already_active = runtime
        .state
        .with_untracked(|desktop| desktop.focused_window_id() == Some(window_id));
    if !already_active {
        runtime.dispatch_action(DesktopAction::FocusWindow { window_id });
    }
}

#[component]
/// Renders the desktop surface, every window in registry order, the launcher and the taskbar.
pub fn DesktopShell() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    let on_click = move |ev: web_sys::MouseEvent| {
        if state.with_untracked(|desktop| desktop.launcher_open)
            && dismisses_launcher(click_region(&ev))
        {
            runtime.dispatch_action(DesktopAction::CloseLauncher);
        }
    };

    view! {
        <div
            id="desktop-shell-root"
            class="desktop-shell"
            tabindex="-1"
            on:click=on_click
            on:contextmenu=move |ev: web_sys::MouseEvent| ev.prevent_default()
        >
            <div class="desktop-surface">
                <DesktopIcons runtime=runtime />
                <div class="desktop-window-layer">
                    <For
                        each=move || state.with(|desktop| desktop.windows().iter().map(|w| w.id).collect::<Vec<_>>())
                        key=|window_id| window_id.0
                        let:window_id
                    >
                        <DesktopWindow runtime=runtime window_id=window_id />
                    </For>
                </div>
            </div>

            <Show when=move || state.with(|desktop| desktop.launcher_open) fallback=|| ()>
                <Launcher runtime=runtime />
            </Show>

            <Taskbar runtime=runtime />
        </div>
    }
}
