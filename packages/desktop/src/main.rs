use dioxus::prelude::*;

fn main() {
    dioxus::launch(App);
}

/// The desktop app reads its API location from `activities.toml` in the
/// user's config directory (see [`ui::config_path`]).
#[component]
fn App() -> Element {
    rsx! {
        document::Title { "Activities" }
        ui::BoardProvider {
            ui::views::BoardView {}
        }
    }
}
