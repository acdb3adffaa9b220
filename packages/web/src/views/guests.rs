//! Guest list view with live, debounced search.

use dioxus::prelude::*;

use ui::{use_guest_list, Phase};

use super::make_store;
use crate::Route;

#[component]
pub fn Guests() -> Element {
    let list = use_guest_list(make_store());

    let state = list.controller.read();
    let query = state.query().to_string();
    let guests = state.guests().to_vec();
    let error = state.error().map(|err| err.to_string());
    let loading = state.is_loading();
    let no_matches = state.phase() == Phase::Ready && guests.is_empty();
    drop(state);

    rsx! {
        div { class: "page",
            header { class: "page-header",
                h1 { "Guests" }
                Link { class: "button primary", to: Route::AddGuest {}, "Add Guest" }
            }

            input {
                class: "search",
                placeholder: "Search by name or email",
                value: "{query}",
                oninput: move |evt| list.on_query.call(evt.value()),
            }

            if let Some(message) = error {
                div { class: "error-banner", "{message}" }
            }

            if loading {
                div { class: "muted", "Loading guests..." }
            }

            if no_matches {
                div { class: "muted", "No guests match this search." }
            } else {
                table { class: "guest-table",
                    thead {
                        tr {
                            th { "Name" }
                            th { "Email" }
                            th { "Phone" }
                            th { "" }
                        }
                    }
                    tbody {
                        for guest in guests {
                            tr { key: "{guest.id}",
                                td { "{guest.first_name} {guest.last_name}" }
                                td { "{guest.email}" }
                                td { {guest.phone.clone().unwrap_or_default()} }
                                td {
                                    Link {
                                        class: "link",
                                        to: Route::GuestDetail { id: guest.id.clone() },
                                        "View / Edit"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
