use super::*;

#[component]
pub(super) fn Launcher(runtime: DesktopRuntimeContext) -> impl IntoView {
    view! {
        <nav class="desktop-launcher" role="menu" aria-label="Applications">
            {apps::launcher_apps()
                .into_iter()
                .map(|app| {
                    let kind = app.kind;
                    view! {
                        <button
                            type="button"
                            role="menuitem"
                            class="desktop-launcher-item"
                            data-app=kind.slug()
                            on:click=move |ev: web_sys::MouseEvent| {
                                stop_mouse_event(&ev);
                                runtime.dispatch_action(DesktopAction::OpenWindow { kind });
                            }
                        >
                            <span class="desktop-launcher-icon" data-icon=app.icon_id aria-hidden="true"></span>
                            <span>{app.label}</span>
                        </button>
                    }
                })
                .collect_view()}
        </nav>
    }
}
