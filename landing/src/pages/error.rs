use leptos::prelude::*;

/// Unknown routes and render errors land here.
#[component]
pub fn ErrorPage() -> impl IntoView {
    view! {
        <section class="error-page">
            <div class="container">
                <h1 class="error-title">"Oops!"</h1>
                <p class="error-description">
                    "Sorry, this page doesn't exist or something went wrong while loading it."
                </p>
                <a href="/" class="btn btn-primary">"Back to home"</a>
            </div>
        </section>
    }
}
