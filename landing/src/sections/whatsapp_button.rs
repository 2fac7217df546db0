use crate::config::SiteConfig;
use leptos::prelude::*;

/// Floating click-to-chat button. Hidden when no number is configured.
#[component]
pub fn WhatsAppButton() -> impl IntoView {
    let number = use_context::<SiteConfig>().and_then(|site| site.whatsapp_number);

    number.map(|number| {
        let href = chat_link(number);
        view! {
            <a
                href=href
                target="_blank"
                rel="noopener noreferrer"
                class="whatsapp-fab"
                aria-label="Chat with us on WhatsApp"
            >
                "💬"
            </a>
        }
    })
}

/// wa.me expects the number without '+', spaces or dashes.
fn chat_link(number: &str) -> String {
    let digits: String = number.chars().filter(char::is_ascii_digit).collect();
    format!("https://wa.me/{digits}")
}
