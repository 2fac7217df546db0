// Home page - hero, selling points, contact form
use crate::layout::use_book_demo;
use crate::sections::{
    Benefits, Contact, Footer, Hero, Integrations, Solutions, Statistics, WhyChooseUs,
};
use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    let book_demo = use_book_demo();
    view! {
        <main>
            <Hero on_book_demo=book_demo />
            <WhyChooseUs on_book_demo=book_demo />
            <Benefits />
            <Solutions on_book_demo=book_demo />
            <Statistics />
            <Integrations on_book_demo=book_demo />
            <Contact />
        </main>
        <Footer />
    }
}
