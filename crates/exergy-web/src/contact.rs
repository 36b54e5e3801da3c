//! Contact Section
//!
//! "Ready to transform your processes?" call to action with the contact
//! form. Required-ness and email format are enforced by the browser first;
//! `ContactForm::begin_submit` repeats the checks and guards against a
//! second send while one is in flight.

use exergy_core::site::{BRAND_BLUE, CONTACT_ANCHOR};
use exergy_core::{ContactError, ContactForm, Field, Notice};
use leptos::ev::{Event, SubmitEvent};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::ToastContext;

#[component]
pub fn ContactSection() -> impl IntoView {
    let form = RwSignal::new(ContactForm::new());
    let toasts = expect_context::<ToastContext>();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let submission = match form.try_update(ContactForm::begin_submit) {
            Some(Ok(submission)) => submission,
            Some(Err(ContactError::InFlight)) | None => return,
            Some(Err(e)) => {
                toasts.show(Notice::error(e.user_message()));
                return;
            }
        };

        spawn_local(async move {
            let outcome = api::send_contact(&submission).await;
            if let Some(notice) = form.try_update(|f| f.complete(outcome)) {
                toasts.show(notice);
            }
        });
    };

    view! {
        <section id=CONTACT_ANCHOR class="contact-section">
            <div class="contact-glow"></div>
            <div class="contact-inner">
                <div class="contact-heading">
                    <h2>"Ready to transform" <br /> "your processes?"</h2>
                    <p>
                        "Discover how Exergy's AI solutions can optimize your operations and drive sustainable impact"
                    </p>
                </div>

                <form class="contact-form" on:submit=on_submit>
                    <div class="form-row">
                        <FormField field=Field::Name form=form />
                        <FormField field=Field::Company form=form />
                    </div>
                    <div class="form-row">
                        <FormField field=Field::Phone form=form />
                        <FormField field=Field::Email form=form />
                    </div>
                    <FormField field=Field::Message form=form />
                    <button
                        type="submit"
                        class="btn btn-primary btn-submit"
                        style=format!("background-color: {BRAND_BLUE}")
                        disabled=move || form.with(ContactForm::is_submitting)
                    >
                        {move || form.with(ContactForm::button_label)}
                    </button>
                </form>
            </div>
        </section>
    }
}

/// Labelled input bound to one field of the form
#[component]
fn FormField(field: Field, form: RwSignal<ContactForm>) -> impl IntoView {
    let value = move || form.with(|f| f.get(field).to_string());
    let on_input = move |ev: Event| form.update(|f| f.set(field, event_target_value(&ev)));

    let control = if field == Field::Message {
        view! {
            <textarea
                id=field.as_str()
                name=field.as_str()
                rows="5"
                required=field.is_required()
                placeholder=field.placeholder()
                prop:value=value
                on:input=on_input
            />
        }
        .into_any()
    } else {
        view! {
            <input
                type=field.input_type()
                id=field.as_str()
                name=field.as_str()
                required=field.is_required()
                placeholder=field.placeholder()
                prop:value=value
                on:input=on_input
            />
        }
        .into_any()
    };

    view! {
        <div class="form-field">
            <label for=field.as_str()>
                {field.label()}
                {field.is_required().then(|| view! { <span class="required">" *"</span> })}
            </label>
            {control}
        </div>
    }
}
