use dioxus::prelude::*;

use crate::flash::MessageBanner;
use crate::{ActivityList, SignupForm};

const BOARD_CSS: Asset = asset!("/assets/styling/board.css");

/// Full activities page: listing on one side, sign-up form on the other.
#[component]
pub fn BoardView(
    #[props(default = "Mergington High School".to_string())] school: String,
) -> Element {
    rsx! {
        document::Stylesheet { href: BOARD_CSS }

        header {
            class: "board-header",
            h1 { "{school}" }
            h2 { "Extracurricular Activities" }
        }

        main {
            class: "board-main",

            section {
                id: "activities-container",
                h3 { "Available Activities" }
                ActivityList {}
            }

            section {
                id: "signup-container",
                h3 { "Sign Up for an Activity" }
                SignupForm {}
                MessageBanner {}
            }
        }

        footer {
            class: "board-footer",
            p { "© {school}" }
        }
    }
}
