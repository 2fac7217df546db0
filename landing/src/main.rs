// Reachout Landing Page - Leptos 0.8 Edition
// Developed with 💀 by The Reachout Team (c)2025

mod config;
mod layout;
mod logging;
mod pages;
mod sections;

use config::{SiteConfig, Theme};
use layout::RootLayout;
use leptos::prelude::*;
use leptos_router::components::{ParentRoute, Route, Router, Routes};
use leptos_router::path;
use pages::{ContactPage, ErrorPage, HomePage};

fn main() {
    console_error_panic_hook::set_once();
    logging::init(tracing::Level::INFO);

    let site = SiteConfig::from_build();
    let theme = Theme::default();
    leptos::mount::mount_to_body(move || view! { <App theme=theme site=site /> });
}

/// Render root. Theme and site configuration arrive explicitly from `main`.
#[component]
fn App(theme: Theme, site: SiteConfig) -> impl IntoView {
    provide_context(site);

    view! {
        <div class="theme-root" style=theme.css_vars()>
            <ErrorBoundary fallback=|errors| {
                errors.with(|errors| {
                    for (_, err) in errors.iter() {
                        tracing::error!(error = ?err, "render error");
                    }
                });
                view! { <ErrorPage /> }
            }>
                <Router>
                    <Routes fallback=|| view! { <ErrorPage /> }>
                        <ParentRoute path=path!("") view=RootLayout>
                            <Route path=path!("") view=HomePage />
                            <Route path=path!("contact") view=ContactPage />
                        </ParentRoute>
                    </Routes>
                </Router>
            </ErrorBoundary>
        </div>
    }
}
