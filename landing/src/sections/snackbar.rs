use leptos::prelude::*;
use reachout_form::NotificationSlot;

/// Bottom-centred banner showing the slot's current notification.
///
/// The prop is not called `slot`: `view!` reserves that attribute for child
/// slots and would drop the element.
#[component]
pub fn Snackbar(
    notifications: RwSignal<NotificationSlot>,
    on_close: Callback<()>,
) -> impl IntoView {
    let state = move || notifications.with(NotificationSlot::state);

    view! {
        <div
            class=move || {
                let state = state();
                let open = if state.open { " open" } else { "" };
                format!("snackbar snackbar-{}{}", state.severity.as_str(), open)
            }
            role="status"
            aria-live="polite"
            aria-hidden=move || (!state().open).to_string()
        >
            <span class="snackbar-message">{move || state().message}</span>
            <button
                type="button"
                class="snackbar-close"
                aria-label="Close"
                on:click=move |_| on_close.run(())
            >
                "×"
            </button>
        </div>
    }
}
