use super::DemoCta;
use leptos::prelude::*;
use reachout_form::Product;

#[component]
pub fn Solutions(on_book_demo: Option<Callback<()>>) -> impl IntoView {
    view! {
        <section id="solutions" class="solutions">
            <div class="container">
                <div class="section-header">
                    <p class="section-eyebrow">"Solutions"</p>
                    <h2 class="section-title">"Pick a starting point"</h2>
                    <p class="section-description">
                        "Each product works alone and gets better together."
                    </p>
                </div>
                <div class="solution-grid">
                    {Product::ALL
                        .into_iter()
                        .map(|product| {
                            view! {
                                <article class="solution-card">
                                    <h3 class="solution-title">{product.label()}</h3>
                                    <p class="solution-description">{pitch(product)}</p>
                                    <DemoCta
                                        on_book_demo=on_book_demo
                                        label="Book a demo"
                                        class="btn btn-secondary"
                                    />
                                </article>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

fn pitch(product: Product) -> &'static str {
    match product {
        Product::WhatsAppMarketing => {
            "Broadcasts, drip campaigns and click-to-chat ads on the official Business API."
        }
        Product::LeadGeneration => {
            "Qualify inbound chats with a bot and hand warm leads to the right rep."
        }
        Product::CrmSystem => {
            "Pipelines, tasks and contact history built around conversations, not emails."
        }
    }
}
