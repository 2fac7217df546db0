// Contact page - the booking form on its own
use crate::sections::{Contact, Footer};
use leptos::prelude::*;

#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
        <main>
            <Contact />
        </main>
        <Footer />
    }
}
