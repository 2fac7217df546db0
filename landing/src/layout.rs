// Root layout: nav, routed content, floating WhatsApp button, demo modal
use crate::sections::{BookDemoModal, Nav, WhatsAppButton};
use leptos::prelude::*;
use leptos_router::components::Outlet;

/// "Open the demo modal" callback handed to routed pages.
#[derive(Clone, Copy)]
pub struct BookDemo(pub Callback<()>);

/// Callback from the surrounding layout, if the page is mounted inside one.
pub fn use_book_demo() -> Option<Callback<()>> {
    use_context::<BookDemo>().map(|book_demo| book_demo.0)
}

#[component]
pub fn RootLayout() -> impl IntoView {
    let demo_open = RwSignal::new(false);
    let open_demo = Callback::new(move |_: ()| demo_open.set(true));
    let close_demo = Callback::new(move |_: ()| demo_open.set(false));
    provide_context(BookDemo(open_demo));

    view! {
        <div class="layout">
            <Nav on_book_demo=Some(open_demo) />
            <div class="layout-backdrop">
                <div class="layout-content">
                    <Outlet />
                </div>
            </div>
            <WhatsAppButton />
            <BookDemoModal open=demo_open on_close=close_demo />
        </div>
    }
}
