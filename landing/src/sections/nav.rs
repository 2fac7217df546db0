use super::DemoCta;
use leptos::prelude::*;

const LINKS: [(&str, &str); 4] = [
    ("Why Us", "/#why-us"),
    ("Solutions", "/#solutions"),
    ("Integrations", "/#integrations"),
    ("Contact", "/contact"),
];

#[component]
pub fn Nav(on_book_demo: Option<Callback<()>>) -> impl IntoView {
    let (drawer_open, set_drawer_open) = signal(false);

    let links = move || {
        LINKS
            .into_iter()
            .map(|(label, href)| {
                view! {
                    <a href=href class="nav-link" on:click=move |_| set_drawer_open.set(false)>
                        {label}
                    </a>
                }
            })
            .collect_view()
    };

    view! {
        <nav class="nav">
            <div class="nav-inner">
                <a href="/" class="nav-brand">
                    <span class="nav-logo">"R"</span>
                    <span class="nav-title">"Reachout"</span>
                </a>
                <div class="nav-links">
                    {links()}
                    <DemoCta on_book_demo=on_book_demo class="nav-cta" />
                </div>
                <button
                    class=move || if drawer_open.get() { "nav-toggle active" } else { "nav-toggle" }
                    aria-label="Toggle navigation"
                    on:click=move |_| set_drawer_open.update(|o| *o = !*o)
                >
                    {move || if drawer_open.get() { "Close" } else { "Menu" }}
                </button>
            </div>

            // Mobile drawer
            <Show when=move || drawer_open.get()>
                <div class="nav-drawer">
                    <div class="nav-drawer-inner">
                        {links()}
                        <DemoCta on_book_demo=on_book_demo class="btn btn-primary" />
                    </div>
                </div>
            </Show>
        </nav>
    }
}
