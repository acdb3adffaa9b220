//! Dioxus wiring for the guest controllers.
//!
//! The hooks own a `Signal` holding the controller, run the mount fetch,
//! arm the debounce timer, and translate store outcomes into `apply_*`
//! transitions. Superseded outcomes are logged at debug and dropped;
//! operational failures are logged and surfaced through the controller's
//! error state. Teardown is wired through `use_drop`, so a request resolving
//! after the view is gone can never mutate visible state.

use std::time::Duration;

use dioxus::prelude::*;

use store::{GuestField, RecordStore, StoreError};

use crate::controllers::{
    AfterWrite, FetchTicket, GuestDetailController, GuestListController,
};

/// Handle returned by [`use_guest_list`].
#[derive(Clone, Copy)]
pub struct GuestListHandle {
    pub controller: Signal<GuestListController>,
    /// Feed every keystroke here; fetches follow after the debounce window.
    pub on_query: Callback<String>,
}

/// Drive a [`GuestListController`] against `store`: initial fetch on mount,
/// debounced refresh per query change, teardown on drop.
pub fn use_guest_list<S: RecordStore + Clone + 'static>(store: S) -> GuestListHandle {
    let mut controller = use_signal(GuestListController::new);
    let store = use_hook(move || store);

    let initial_store = store.clone();
    let _initial = use_resource(move || {
        let store = initial_store.clone();
        async move {
            let ticket = controller.write().begin_refresh();
            if let Some(ticket) = ticket {
                run_list_fetch(controller, store, ticket).await;
            }
        }
    });

    let on_query = use_callback(move |query: String| {
        let token = controller.write().set_query(query);
        let store = store.clone();
        spawn(async move {
            sleep(GuestListController::DEBOUNCE).await;
            let ticket = controller.write().debounce_elapsed(token);
            if let Some(ticket) = ticket {
                run_list_fetch(controller, store, ticket).await;
            }
        });
    });

    use_drop(move || controller.write().teardown());

    GuestListHandle {
        controller,
        on_query,
    }
}

async fn run_list_fetch<S: RecordStore>(
    mut controller: Signal<GuestListController>,
    store: S,
    ticket: FetchTicket,
) {
    let outcome = store
        .list(ticket.filter.clone(), ticket.page, ticket.per_page)
        .await;
    log_outcome("list guests", &outcome);
    controller.write().apply(&ticket, outcome);
}

/// Handle returned by [`use_guest_detail`].
#[derive(Clone, Copy)]
pub struct GuestDetailHandle {
    pub controller: Signal<GuestDetailController>,
    pub on_edit: Callback<(GuestField, String)>,
    pub on_save: Callback<()>,
    /// Asks for confirmation, then deletes. No-op if the user declines.
    pub on_delete: Callback<()>,
}

/// Drive a [`GuestDetailController`] for the record `id`. `on_done` fires
/// when a save or confirmed delete completes and the view should navigate
/// back to the list.
pub fn use_guest_detail<S: RecordStore + Clone + 'static>(
    store: S,
    id: String,
    on_done: Callback<()>,
) -> GuestDetailHandle {
    let mut controller = use_signal(move || GuestDetailController::new(id));
    let store = use_hook(move || store);

    let load_store = store.clone();
    let _loader = use_resource(move || {
        let store = load_store.clone();
        async move {
            let ticket = controller.write().begin_load();
            if let Some(ticket) = ticket {
                let outcome = store.get_one(&ticket.id).await;
                log_outcome("load guest", &outcome);
                controller.write().apply_load(&ticket, outcome);
            }
        }
    });

    let on_edit = use_callback(move |(field, value): (GuestField, String)| {
        controller.write().edit_field(field, value);
    });

    let save_store = store.clone();
    let on_save = use_callback(move |_: ()| {
        let Some(ticket) = controller.write().begin_save() else {
            return;
        };
        let store = save_store.clone();
        spawn(async move {
            let outcome = store.update(&ticket.id, ticket.fields.clone()).await;
            log_outcome("save guest", &outcome);
            if controller.write().apply_save(&ticket, outcome) == AfterWrite::NavigateBack {
                on_done.call(());
            }
        });
    });

    let on_delete = use_callback(move |_: ()| {
        if !confirm("Are you sure you want to delete this guest? This action cannot be undone.")
        {
            return;
        }
        let Some(ticket) = controller.write().begin_remove() else {
            return;
        };
        let store = store.clone();
        spawn(async move {
            let outcome = store.delete(&ticket.id).await;
            log_outcome("delete guest", &outcome);
            if controller.write().apply_remove(&ticket, outcome) == AfterWrite::NavigateBack {
                on_done.call(());
            }
        });
    });

    use_drop(move || controller.write().teardown());

    GuestDetailHandle {
        controller,
        on_edit,
        on_save,
        on_delete,
    }
}

fn log_outcome<T>(operation: &str, outcome: &Result<T, StoreError>) {
    match outcome {
        Ok(_) => {}
        Err(err) if err.is_superseded() => {
            tracing::debug!("{operation}: superseded, dropping result");
        }
        Err(err) => tracing::error!("{operation}: {err}"),
    }
}

async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}

/// Browser-native yes/no prompt. Non-wasm builds exist for native tooling
/// and tests only and treat the prompt as accepted.
pub fn confirm(message: &str) -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .map(|window| window.confirm_with_message(message).unwrap_or(false))
            .unwrap_or(false)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = message;
        true
    }
}
