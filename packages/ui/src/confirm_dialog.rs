use dioxus::prelude::*;

use crate::views::ModalOverlay;

/// Yes/no question in a modal. Clicking outside counts as cancel.
#[component]
pub fn ConfirmDialog(
    prompt: String,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    rsx! {
        ModalOverlay {
            on_close: move |_| on_cancel.call(()),
            div {
                class: "confirm-dialog",
                p { class: "confirm-prompt", "{prompt}" }
                div {
                    class: "confirm-actions",
                    button {
                        r#type: "button",
                        class: "confirm-accept",
                        onclick: move |_| on_confirm.call(()),
                        "Unregister"
                    }
                    button {
                        r#type: "button",
                        class: "confirm-cancel",
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                }
            }
        }
    }
}
