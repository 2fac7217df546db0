use super::DemoCta;
use leptos::prelude::*;

#[component]
pub fn Hero(on_book_demo: Option<Callback<()>>) -> impl IntoView {
    view! {
        <section class="hero">
            <div class="container">
                <div class="hero-grid">
                    <div class="hero-content">
                        <div class="hero-badge">
                            <span class="hero-badge-dot"></span>
                            "Official WhatsApp Business API partner"
                        </div>
                        <h1 class="hero-title">
                            <span class="hero-title-accent">"Turn conversations"</span>
                            <br />
                            "into customers."
                        </h1>
                        <p class="hero-description">
                            "Broadcast campaigns, capture leads and close deals from one inbox. "
                            "Reachout connects WhatsApp, your CRM and your sales team."
                        </p>
                        <div class="hero-actions">
                            <DemoCta on_book_demo=on_book_demo />
                            <a href="#solutions" class="btn btn-secondary">
                                "Explore solutions →"
                            </a>
                        </div>
                    </div>
                    <ChatPreview />
                </div>
            </div>
        </section>
    }
}

#[component]
fn ChatPreview() -> impl IntoView {
    view! {
        <div class="hero-chat">
            <div class="chat-header">
                <span class="chat-avatar">"R"</span>
                <span class="chat-title">"Reachout Bot"</span>
                <span class="chat-status">"online"</span>
            </div>
            <div class="chat-body">
                <div class="chat-bubble incoming">"Hi! Do you ship to Berlin?"</div>
                <div class="chat-bubble outgoing">"We do! Delivery takes 2-3 days. Want a quote?"</div>
                <div class="chat-bubble incoming">"Yes please 🙌"</div>
                <div class="chat-bubble system">"Lead created in CRM · assigned to Sales"</div>
            </div>
        </div>
    }
}
