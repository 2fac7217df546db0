use super::DemoForm;
use leptos::prelude::*;

/// Modal shell around a second, independent demo form.
#[component]
pub fn BookDemoModal(open: RwSignal<bool>, on_close: Callback<()>) -> impl IntoView {
    view! {
        <Show when=move || open.get()>
            <div class="modal-backdrop" on:click=move |_| on_close.run(())>
                <div
                    class="modal"
                    role="dialog"
                    aria-modal="true"
                    aria-labelledby="book-demo-title"
                    on:click=|ev| ev.stop_propagation()
                >
                    <div class="modal-header">
                        <h2 id="book-demo-title" class="modal-title">"Book a Demo"</h2>
                        <button
                            type="button"
                            class="modal-close"
                            aria-label="Close"
                            on:click=move |_| on_close.run(())
                        >
                            "×"
                        </button>
                    </div>
                    <DemoForm id="modal" />
                </div>
            </div>
        </Show>
    }
}
