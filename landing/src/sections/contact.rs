use super::DemoForm;
use leptos::prelude::*;

#[component]
pub fn Contact() -> impl IntoView {
    view! {
        <section id="contact" class="contact preserve-bg">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"Book a Demo"</h2>
                    <p class="section-description">
                        "Experience the power of our solutions firsthand"
                    </p>
                </div>
                <div class="contact-card">
                    <DemoForm id="contact" />
                </div>
            </div>
        </section>
    }
}
