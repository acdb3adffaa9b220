//! Guest detail view: load by route id, edit in place, save or delete.

use dioxus::prelude::*;

use store::GuestField;
use ui::use_guest_detail;

use super::make_store;
use crate::Route;

#[component]
pub fn GuestDetail(id: String) -> Element {
    let nav = use_navigator();
    let on_done = use_callback(move |_: ()| {
        nav.push(Route::Guests {});
    });
    let detail = use_guest_detail(make_store(), id, on_done);

    let state = detail.controller.read();
    let draft = state.draft().cloned();
    let created = state.created().to_string();
    let loading = state.is_loading();
    let saving = state.is_saving();
    let error = state.error().map(|err| err.to_string());
    drop(state);

    if loading {
        return rsx! {
            div { class: "page",
                div { class: "muted", "Loading guest..." }
            }
        };
    }

    let Some(draft) = draft else {
        // No record loaded: not found, or the load failed.
        let message = error.unwrap_or_else(|| "Guest not found.".to_string());
        return rsx! {
            div { class: "page",
                p { class: "muted", "{message}" }
                Link { class: "link", to: Route::Guests {}, "Back to guests" }
            }
        };
    };

    rsx! {
        div { class: "page",
            header { class: "page-header",
                div {
                    h1 { "{draft.first_name} {draft.last_name}" }
                    if !created.is_empty() {
                        div { class: "muted small", "Guest since {created}" }
                    }
                }
                Link { class: "link", to: Route::Guests {}, "Back" }
            }

            div { class: "card",
                div { class: "form-grid",
                    div { class: "form-field",
                        label { "First name" }
                        input {
                            value: "{draft.first_name}",
                            oninput: move |evt| {
                                detail.on_edit.call((GuestField::FirstName, evt.value()))
                            },
                        }
                    }
                    div { class: "form-field",
                        label { "Last name" }
                        input {
                            value: "{draft.last_name}",
                            oninput: move |evt| {
                                detail.on_edit.call((GuestField::LastName, evt.value()))
                            },
                        }
                    }
                    div { class: "form-field wide",
                        label { "Email" }
                        input {
                            r#type: "email",
                            value: "{draft.email}",
                            oninput: move |evt| {
                                detail.on_edit.call((GuestField::Email, evt.value()))
                            },
                        }
                    }
                    div { class: "form-field",
                        label { "Phone" }
                        input {
                            value: "{draft.phone}",
                            oninput: move |evt| {
                                detail.on_edit.call((GuestField::Phone, evt.value()))
                            },
                        }
                    }
                    div { class: "form-field",
                        label { "Date of birth" }
                        input {
                            r#type: "date",
                            value: "{draft.date_of_birth}",
                            oninput: move |evt| {
                                detail.on_edit.call((GuestField::DateOfBirth, evt.value()))
                            },
                        }
                    }
                    div { class: "form-field wide",
                        label { "Address" }
                        textarea {
                            value: "{draft.address}",
                            oninput: move |evt| {
                                detail.on_edit.call((GuestField::Address, evt.value()))
                            },
                        }
                    }
                }

                if let Some(message) = error {
                    div { class: "error-banner", "{message}" }
                }

                div { class: "form-actions",
                    button {
                        class: "button danger",
                        disabled: saving,
                        onclick: move |_| detail.on_delete.call(()),
                        "Delete"
                    }
                    button {
                        class: "button primary",
                        disabled: saving,
                        onclick: move |_| detail.on_save.call(()),
                        if saving { "Saving..." } else { "Save Changes" }
                    }
                }
            }
        }
    }
}
