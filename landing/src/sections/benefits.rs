use leptos::prelude::*;

const BENEFITS: [(&str, &str); 6] = [
    ("98% open rates", "WhatsApp messages get read, unlike the newsletter nobody opens."),
    ("Faster replies", "Shared inbox with assignment rules so no chat waits for hours."),
    ("Automated follow-ups", "Sequences that nudge leads until they book or say no."),
    ("One customer view", "Every chat, order and note attached to the same contact."),
    ("Campaign analytics", "Delivery, read and reply rates per broadcast and per agent."),
    ("Scales with you", "From one number to dozens of regional teams."),
];

#[component]
pub fn Benefits() -> impl IntoView {
    view! {
        <section id="benefits" class="benefits">
            <div class="container">
                <div class="section-header">
                    <p class="section-eyebrow">"Benefits"</p>
                    <h2 class="section-title">"What changes after week one"</h2>
                </div>
                <ul class="benefit-list">
                    {BENEFITS
                        .into_iter()
                        .map(|(title, description)| {
                            view! {
                                <li class="benefit-item">
                                    <span class="benefit-check">"✓"</span>
                                    <div>
                                        <h3 class="benefit-title">{title}</h3>
                                        <p class="benefit-description">{description}</p>
                                    </div>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>
        </section>
    }
}
