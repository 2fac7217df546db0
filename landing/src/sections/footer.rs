use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer preserve-bg">
            <div class="container">
                <div class="footer-brand">
                    <span class="footer-logo">"R"</span>
                    <span class="footer-title">"Reachout"</span>
                </div>
                <div class="footer-links">
                    <a href="/#solutions" class="footer-link">"Solutions"</a>
                    <a href="/#integrations" class="footer-link">"Integrations"</a>
                    <a href="/contact" class="footer-link">"Contact"</a>
                </div>
                <p class="footer-copyright">
                    "Developed with 💀 by The Reachout Team (c)2025 "
                </p>
            </div>
        </footer>
    }
}
