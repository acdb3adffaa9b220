use dioxus::prelude::*;

use views::{AddGuest, GuestDetail, Guests};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[route("/guests")]
    Guests {},
    #[route("/guests/new")]
    AddGuest {},
    #[route("/guests/:id")]
    GuestDetail { id: String },
    #[route("/:..segments")]
    PageNotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Router::<Route> {}
    }
}

/// Redirect `/` to `/guests`
#[component]
fn Root() -> Element {
    let nav = use_navigator();
    nav.replace(Route::Guests {});
    rsx! {}
}

#[component]
fn PageNotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    rsx! {
        div { class: "page",
            h1 { "Page not found" }
            p { class: "muted", "There is nothing at /{path}." }
            Link { class: "link", to: Route::Guests {}, "Back to guests" }
        }
    }
}
