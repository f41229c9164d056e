use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use webtop_runtime::{DesktopConfig, DesktopProvider, DesktopShell};

const DESKTOP_CONFIG_TOML: &str = include_str!("../webtop.toml");

/// Parses the bundled desktop configuration, falling back to defaults when it is invalid.
pub fn load_desktop_config() -> DesktopConfig {
    parse_desktop_config(DESKTOP_CONFIG_TOML)
}

fn parse_desktop_config(raw: &str) -> DesktopConfig {
    match DesktopConfig::from_toml_str(raw) {
        Ok(config) => config,
        Err(err) => {
            logging::error!("{err}; using default desktop config");
            DesktopConfig::default()
        }
    }
}

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Webtop" />
        <Meta name="description" content="A desktop environment in the browser." />

        <Router>
            <main class="site-root">
                <Routes>
                    <Route path="" view=DesktopEntry />
                    <Route path="/*any" view=|| view! { <Redirect path="/" /> } />
                </Routes>
            </main>
        </Router>
    }
}

#[component]
pub fn DesktopEntry() -> impl IntoView {
    view! {
        <DesktopProvider config=load_desktop_config()>
            <DesktopShell />
        </DesktopProvider>
    }
}
