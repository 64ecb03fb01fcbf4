use dioxus::prelude::*;

use crate::Route;

pub use ui::views::BoardView as Board;

/// Anything other than `/` sends the visitor back to the board.
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        div {
            class: "not-found",
            h2 { "Page not found" }
            p { "There is nothing at /{path}." }
            Link { to: Route::Board {}, "Back to activities" }
        }
    }
}
