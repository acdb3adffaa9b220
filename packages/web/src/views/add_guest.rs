//! Create-guest form view.

use dioxus::prelude::*;

use store::{GuestDraft, RecordStore};

use super::make_store;
use crate::Route;

#[component]
pub fn AddGuest() -> Element {
    let nav = use_navigator();
    let mut first_name = use_signal(String::new);
    let mut last_name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut phone = use_signal(String::new);
    let mut address = use_signal(String::new);
    let mut date_of_birth = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut submitting = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if submitting() {
            return;
        }
        spawn(async move {
            error.set(None);

            let draft = GuestDraft {
                first_name: first_name(),
                last_name: last_name(),
                email: email(),
                phone: phone(),
                address: address(),
                date_of_birth: date_of_birth(),
            };
            let fields = match draft.to_fields() {
                Ok(fields) => fields,
                Err(err) => {
                    error.set(Some(err.to_string()));
                    return;
                }
            };

            submitting.set(true);
            match make_store().create(fields).await {
                Ok(_) => {
                    nav.push(Route::Guests {});
                }
                Err(err) => {
                    tracing::error!("create guest failed: {err}");
                    submitting.set(false);
                    error.set(Some("Failed to create guest".to_string()));
                }
            }
        });
    };

    rsx! {
        div { class: "page",
            header { class: "page-header",
                h1 { "Add Guest" }
                Link { class: "link", to: Route::Guests {}, "Back" }
            }

            div { class: "card",
                form { onsubmit: handle_submit,
                    if let Some(message) = error() {
                        div { class: "error-banner", "{message}" }
                    }

                    div { class: "form-grid",
                        div { class: "form-field",
                            label { "First name" }
                            input {
                                value: "{first_name}",
                                oninput: move |evt| first_name.set(evt.value()),
                            }
                        }
                        div { class: "form-field",
                            label { "Last name" }
                            input {
                                value: "{last_name}",
                                oninput: move |evt| last_name.set(evt.value()),
                            }
                        }
                        div { class: "form-field wide",
                            label { "Email" }
                            input {
                                r#type: "email",
                                value: "{email}",
                                oninput: move |evt| email.set(evt.value()),
                            }
                        }
                        div { class: "form-field",
                            label { "Phone" }
                            input {
                                value: "{phone}",
                                oninput: move |evt| phone.set(evt.value()),
                            }
                        }
                        div { class: "form-field",
                            label { "Date of birth" }
                            input {
                                r#type: "date",
                                value: "{date_of_birth}",
                                oninput: move |evt| date_of_birth.set(evt.value()),
                            }
                        }
                        div { class: "form-field wide",
                            label { "Address" }
                            textarea {
                                value: "{address}",
                                oninput: move |evt| address.set(evt.value()),
                            }
                        }
                    }

                    div { class: "form-actions",
                        button {
                            class: "button primary",
                            r#type: "submit",
                            disabled: submitting(),
                            if submitting() { "Creating..." } else { "Create Guest" }
                        }
                    }
                }
            }
        }
    }
}
