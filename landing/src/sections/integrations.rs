use super::DemoCta;
use leptos::prelude::*;

const INTEGRATIONS: [&str; 8] = [
    "Shopify",
    "WooCommerce",
    "HubSpot",
    "Salesforce",
    "Zapier",
    "Google Sheets",
    "Stripe",
    "Slack",
];

#[component]
pub fn Integrations(on_book_demo: Option<Callback<()>>) -> impl IntoView {
    view! {
        <section id="integrations" class="integrations">
            <div class="container">
                <div class="section-header">
                    <p class="section-eyebrow">"Integrations"</p>
                    <h2 class="section-title">"Plugs into the tools you already use"</h2>
                </div>
                <div class="integration-grid">
                    {INTEGRATIONS
                        .into_iter()
                        .map(|name| view! { <span class="integration-chip">{name}</span> })
                        .collect_view()}
                </div>
                <div class="section-actions">
                    <DemoCta on_book_demo=on_book_demo label="Ask about your stack" />
                </div>
            </div>
        </section>
    }
}
