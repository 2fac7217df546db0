use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use reachout_form::{
    AUTO_HIDE, Attempt, ContactForm, EmailSender, Field, Mailer, Notification, NotificationSlot,
    Product,
};

use super::Snackbar;
use crate::config::SiteConfig;

/// Demo-booking form with its own state and notification banner.
///
/// Each mounted instance owns an independent [`ContactForm`]; `id` keeps the
/// input ids unique when the page and the modal both render one.
#[component]
pub fn DemoForm(#[prop(default = "contact")] id: &'static str) -> impl IntoView {
    let site = use_context::<SiteConfig>().unwrap_or_default();
    let mailer = StoredValue::new_local(Rc::new(Mailer::from_config(site.email)));

    let form = RwSignal::new(ContactForm::new());
    let notifications = RwSignal::new(NotificationSlot::default());

    // try_update: the form may have been unmounted while a send was in flight
    let notify = move |notification: Notification| {
        let Some(ticket) = notifications.try_update(|s| s.show(notification)) else {
            return;
        };
        set_timeout(
            move || {
                if notifications.try_update(|s| s.expire(ticket)).unwrap_or(false) {
                    form.try_update(|f| f.acknowledge());
                }
            },
            AUTO_HIDE,
        );
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match form.try_update(|f| f.begin_submit()) {
            Some(Attempt::Dispatch(payload)) => {
                let mailer = mailer.get_value();
                spawn_local(async move {
                    let outcome = mailer.send(&payload).await;
                    if let Some(notification) = form.try_update(|f| f.finish_submit(outcome)) {
                        notify(notification);
                    }
                });
            }
            Some(Attempt::Invalid(notification)) => notify(notification),
            Some(Attempt::InFlight) | None => {}
        }
    };

    let on_close = Callback::new(move |_: ()| {
        notifications.update(|s| s.dismiss());
        form.update(|f| f.acknowledge());
    });

    view! {
        <form class="demo-form" novalidate=true on:submit=on_submit>
            <TextField form=form field=Field::Name id=id kind="text" placeholder="Jane Doe" />
            <TextField form=form field=Field::Email id=id kind="email" placeholder="jane@company.com" />
            <TextField form=form field=Field::Whatsapp id=id kind="tel" placeholder="+14155551234" />
            <ProductSelect form=form id=id />
            <SubmitButton form=form />
        </form>
        <Snackbar notifications=notifications on_close=on_close />
    }
}

#[component]
fn SubmitButton(form: RwSignal<ContactForm>) -> impl IntoView {
    let submitting = move || form.with(|f| f.is_submitting());
    view! {
        <button type="submit" class="btn btn-primary submit-btn" disabled=submitting>
            {move || if submitting() { "Sending..." } else { "Book Demo" }}
        </button>
    }
}

fn input_id(id: &str, field: Field) -> String {
    format!("{id}-{field}")
}

#[component]
fn FieldShell(
    form: RwSignal<ContactForm>,
    field: Field,
    id: &'static str,
    children: Children,
) -> impl IntoView {
    let error = move || form.with(|f| f.error(field));
    view! {
        <div class=move || if error().is_some() { "form-field has-error" } else { "form-field" }>
            <label for=input_id(id, field) class="form-label">
                {field.label()}
                <span class="required">"*"</span>
            </label>
            {children()}
            <p class="form-helper">{move || error().unwrap_or_default()}</p>
        </div>
    }
}

#[component]
fn TextField(
    form: RwSignal<ContactForm>,
    field: Field,
    id: &'static str,
    kind: &'static str,
    placeholder: &'static str,
) -> impl IntoView {
    view! {
        <FieldShell form=form field=field id=id>
            <input
                id=input_id(id, field)
                name=field.as_str()
                type=kind
                class="form-input"
                placeholder=placeholder
                prop:value=move || form.with(|f| f.data().get(field).to_string())
                on:input=move |ev| {
                    form.update(|f| {
                        f.edit(field, event_target_value(&ev));
                    });
                }
            />
        </FieldShell>
    }
}

#[component]
fn ProductSelect(form: RwSignal<ContactForm>, id: &'static str) -> impl IntoView {
    let field = Field::Product;
    let selected = move || form.with(|f| f.data().get(field).to_string());
    view! {
        <FieldShell form=form field=field id=id>
            <select
                id=input_id(id, field)
                name=field.as_str()
                class="form-input"
                on:change=move |ev| {
                    form.update(|f| {
                        f.edit(field, event_target_value(&ev));
                    });
                }
            >
                <option value="" disabled=true prop:selected=move || selected().is_empty()>
                    "Choose a service"
                </option>
                {Product::ALL
                    .into_iter()
                    .map(|product| {
                        let label = product.label();
                        view! {
                            <option value=label prop:selected=move || selected() == label>
                                {label}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </FieldShell>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    fn filled_form() -> ContactForm {
        let mut form = ContactForm::new();
        form.edit(Field::Name, "Jane Doe");
        form.edit(Field::Email, "jane@company.com");
        form.edit(Field::Whatsapp, "+14155551234");
        form.edit(Field::Product, Product::CrmSystem.label());
        form
    }

    #[test]
    fn form_renders_with_its_notification_banner() {
        let html = view! { <DemoForm id="t" /> }.to_html();

        assert!(html.contains("class=\"demo-form\""), "{html}");
        assert!(html.contains("snackbar"), "banner missing: {html}");
        assert!(html.contains("snackbar-close"), "{html}");
        assert!(html.contains("id=\"t-name\""), "{html}");
        assert!(html.contains("id=\"t-product\""), "{html}");
    }

    #[test]
    fn fresh_form_has_enabled_button_and_empty_helpers() {
        let html = view! { <DemoForm id="t" /> }.to_html();

        assert_eq!(html.matches("class=\"form-helper\"").count(), Field::ALL.len());
        assert!(!html.contains("has-error"), "{html}");
        assert!(!html.contains("is required"), "{html}");
        assert!(html.contains("Book Demo"), "{html}");
        assert!(!html.contains("Sending..."), "{html}");
    }

    #[test]
    fn button_is_disabled_while_sending() {
        let mut state = filled_form();
        assert!(matches!(state.begin_submit(), Attempt::Dispatch(_)));
        let form = RwSignal::new(state);

        let html = view! { <SubmitButton form=form /> }.to_html();

        assert!(html.contains("disabled"), "{html}");
        assert!(html.contains("Sending..."), "{html}");
    }

    #[test]
    fn idle_button_is_enabled() {
        let form = RwSignal::new(filled_form());

        let html = view! { <SubmitButton form=form /> }.to_html();

        assert!(!html.contains("disabled"), "{html}");
        assert!(html.contains("Book Demo"), "{html}");
    }

    #[test]
    fn rejected_submit_shows_helper_texts() {
        let mut state = ContactForm::new();
        assert!(matches!(state.begin_submit(), Attempt::Invalid(_)));
        let form = RwSignal::new(state);

        let html = view! {
            <TextField form=form field=Field::Name id="t" kind="text" placeholder="" />
            <TextField form=form field=Field::Email id="t" kind="email" placeholder="" />
            <ProductSelect form=form id="t" />
        }
        .to_html();

        assert!(html.contains("has-error"), "{html}");
        assert!(html.contains("Name is required"), "{html}");
        assert!(html.contains("Email is required"), "{html}");
        assert!(html.contains("Please select a service"), "{html}");
    }

    #[test]
    fn banner_shows_current_notification() {
        let mut slot = NotificationSlot::default();
        slot.show(Notification::error("Failed to send message"));
        let notifications = RwSignal::new(slot);
        let on_close = Callback::new(|_: ()| {});

        let html = view! {
            <Snackbar notifications=notifications on_close=on_close />
        }
        .to_html();

        assert!(html.contains("snackbar-error open"), "{html}");
        assert!(html.contains("Failed to send message"), "{html}");
        assert!(html.contains("aria-hidden=\"false\""), "{html}");
    }
}
