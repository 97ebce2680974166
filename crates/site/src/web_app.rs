use desktop_runtime::{DesktopProvider, DesktopShell};
use leptos::*;
use leptos_meta::*;
use platform_host_web::{backend_strategy_name, build_host_services};

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();
    logging::log!("desktop backend: {}", backend_strategy_name());

    view! {
        <Title text="macOS Password Manager" />
        <Meta name="description" content="A macOS-style desktop for managing accounts and activity history." />

        <main class="site-root">
            <DesktopEntry />
        </main>
    }
}

#[component]
pub fn DesktopEntry() -> impl IntoView {
    view! {
        <DesktopProvider host_services=build_host_services()>
            <DesktopShell />
        </DesktopProvider>
    }
}
