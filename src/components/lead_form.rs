use leptos::ev::{Event, SubmitEvent};
use leptos::prelude::*;

use crate::models::{package, LeadField};
use crate::services::{LeadFormController, LocalAcknowledgement, SubmitOutcome};

/// Form state shared by the contact form and the package cards
pub type LeadFormSignal = RwSignal<LeadFormController<LocalAcknowledgement>>;

pub fn lead_form_signal() -> LeadFormSignal {
    RwSignal::new(LeadFormController::new(LocalAcknowledgement::default()))
}

#[component]
pub fn LeadFormPanel(controller: LeadFormSignal) -> impl IntoView {
    // Ok = acknowledgement, Err = delivery failure
    let (notice, set_notice) = signal(Option::<Result<String, String>>::None);

    let value = move |field: LeadField| move || controller.with(|c| c.value(field).to_string());
    let on_input = move |field: LeadField| {
        move |ev: Event| {
            controller.update(|c| c.update_field(field.as_str(), event_target_value(&ev)))
        }
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        match controller.try_update(|c| c.submit()) {
            Some(SubmitOutcome::Submitted { ack, .. }) => set_notice.set(Some(Ok(ack.message))),
            Some(SubmitOutcome::Failed(e)) => set_notice.set(Some(Err(e.to_string()))),
            // Native `required` validation already told the visitor
            Some(SubmitOutcome::Invalid { .. }) | None => {}
        }
    };

    view! {
        <div class="lead-form-card">
            {move || {
                notice
                    .get()
                    .map(|n| {
                        let (class, text) = match n {
                            Ok(msg) => ("success-message", msg),
                            Err(msg) => ("error", msg),
                        };
                        view! {
                            <div class=class role="status">
                                <p>{text}</p>
                                <button class="btn btn-small" on:click=move |_| set_notice.set(None)>
                                    "Dismiss"
                                </button>
                            </div>
                        }
                    })
            }}

            <form class="lead-form" on:submit=on_submit>
                <div class="form-row">
                    <div class="form-group">
                        <label for="firstName">"First name*"</label>
                        <input
                            type="text"
                            id="firstName"
                            name="firstName"
                            required
                            placeholder="Jane"
                            prop:value=value(LeadField::FirstName)
                            on:input=on_input(LeadField::FirstName)
                        />
                    </div>
                    <div class="form-group">
                        <label for="lastName">"Last name"</label>
                        <input
                            type="text"
                            id="lastName"
                            name="lastName"
                            placeholder="Doe"
                            prop:value=value(LeadField::LastName)
                            on:input=on_input(LeadField::LastName)
                        />
                    </div>
                </div>

                <div class="form-group">
                    <label for="email">"Email*"</label>
                    <input
                        type="email"
                        id="email"
                        name="email"
                        required
                        placeholder="jane@example.com"
                        prop:value=value(LeadField::Email)
                        on:input=on_input(LeadField::Email)
                    />
                </div>

                <div class="form-group">
                    <label for="phone">"Phone"</label>
                    <input
                        type="tel"
                        id="phone"
                        name="phone"
                        placeholder="Your number"
                        prop:value=value(LeadField::Phone)
                        on:input=on_input(LeadField::Phone)
                    />
                </div>

                <div class="form-group">
                    <label for="package">"Select Package (Optional)"</label>
                    <select
                        class="select-input"
                        id="package"
                        name="package"
                        prop:value=value(LeadField::Package)
                        on:change=on_input(LeadField::Package)
                    >
                        <option value="">"Choose a package..."</option>
                        {package::catalog()
                            .iter()
                            .map(|offer| {
                                let name = offer.name;
                                view! {
                                    <option
                                        value=name
                                        selected=move || {
                                            controller.with(|c| c.value(LeadField::Package) == name)
                                        }
                                    >
                                        {name}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </div>

                <div class="form-group">
                    <label for="message">"Write a message"</label>
                    <textarea
                        id="message"
                        name="message"
                        rows="4"
                        placeholder="Tell me about your book project..."
                        prop:value=value(LeadField::Message)
                        on:input=on_input(LeadField::Message)
                    ></textarea>
                </div>

                <button type="submit" class="btn btn-primary btn-block">"Submit Request"</button>
                <p class="privacy-note">"I respect your privacy and will never share your details."</p>
            </form>
        </div>
    }
}
