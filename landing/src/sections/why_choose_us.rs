use super::DemoCta;
use leptos::prelude::*;

#[component]
pub fn WhyChooseUs(on_book_demo: Option<Callback<()>>) -> impl IntoView {
    view! {
        <section id="why-us" class="why-us">
            <div class="container">
                <div class="section-header">
                    <p class="section-eyebrow">"Why choose us"</p>
                    <h2 class="section-title">"Built for teams that sell in chat"</h2>
                    <p class="section-description">
                        "Your customers already live in WhatsApp. "
                        "We give your team the tools to meet them there without losing track."
                    </p>
                </div>
                <div class="reason-grid">
                    <ReasonCard
                        icon="⚡"
                        title="Live in a day"
                        description="Verified business number, templates and inbox set up by our onboarding team."
                    />
                    <ReasonCard
                        icon="🔒"
                        title="Compliant by default"
                        description="Opt-in tracking and template approval built into every campaign."
                    />
                    <ReasonCard
                        icon="🤝"
                        title="Human support"
                        description="A dedicated success manager, reachable on WhatsApp of course."
                    />
                </div>
                <div class="section-actions">
                    <DemoCta on_book_demo=on_book_demo label="See it in action" />
                </div>
            </div>
        </section>
    }
}

#[component]
fn ReasonCard(icon: &'static str, title: &'static str, description: &'static str) -> impl IntoView {
    view! {
        <article class="reason-card">
            <div class="reason-icon">{icon}</div>
            <h3 class="reason-title">{title}</h3>
            <p class="reason-description">{description}</p>
        </article>
    }
}
