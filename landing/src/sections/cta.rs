use leptos::prelude::*;

/// "Book a Demo" call to action. Opens the layout's modal when a callback is
/// available, otherwise scrolls to the contact section.
#[component]
pub fn DemoCta(
    on_book_demo: Option<Callback<()>>,
    #[prop(default = "Book a Demo")] label: &'static str,
    #[prop(default = "btn btn-primary")] class: &'static str,
) -> impl IntoView {
    match on_book_demo {
        Some(book_demo) => view! {
            <button type="button" class=class on:click=move |_| book_demo.run(())>
                {label}
            </button>
        }
        .into_any(),
        None => view! { <a href="#contact" class=class>{label}</a> }.into_any(),
    }
}
