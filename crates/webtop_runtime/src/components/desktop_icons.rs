use super::*;

#[component]
pub(super) fn DesktopIcons(runtime: DesktopRuntimeContext) -> impl IntoView {
    view! {
        <div class="desktop-icons" role="list" aria-label="Desktop">
            {apps::desktop_icon_apps()
                .into_iter()
                .map(|app| {
                    let kind = app.kind;
                    view! {
                        <button
                            type="button"
                            role="listitem"
                            class="desktop-icon"
                            data-app=kind.slug()
                            on:dblclick=move |ev: web_sys::MouseEvent| {
                                stop_mouse_event(&ev);
                                runtime.dispatch_action(DesktopAction::OpenWindow { kind });
                            }
                        >
                            <span class="desktop-icon-glyph" data-icon=app.icon_id aria-hidden="true"></span>
                            <span class="desktop-icon-label">{app.label}</span>
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
