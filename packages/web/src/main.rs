use dioxus::prelude::*;

use views::{Board, NotFound};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Board {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Title { "Mergington High School Activities" }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        ui::BoardProvider {
            Router::<Route> {}
        }
    }
}
