use dioxus::prelude::*;

use crate::actions;
use crate::board::{use_activities, use_board_services};
use crate::flash::{show_flash, use_flash};

pub const SELECT_PLACEHOLDER: &str = "-- Select an activity --";

/// Email + activity form that signs a student up.
#[component]
pub fn SignupForm() -> Element {
    let services = use_board_services();
    let mut activities = use_activities();
    let mut flash = use_flash();

    let mut email = use_signal(String::new);
    let mut activity = use_signal(String::new);
    let mut submitting = use_signal(|| false);

    let names = (activities.state)().names();

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let services = services.clone();
        spawn(async move {
            submitting.set(true);
            let notice = actions::sign_up(&services.client, &activity(), &email()).await;
            if notice.is_success() {
                email.set(String::new());
                activity.set(String::new());
                activities.refresh();
            }
            submitting.set(false);
            show_flash(&mut flash, notice, services.signup_hide_after());
        });
    };

    rsx! {
        form {
            id: "signup-form",
            onsubmit: handle_submit,

            div {
                class: "form-group",
                label { r#for: "email", "Student Email:" }
                input {
                    id: "email",
                    r#type: "email",
                    required: true,
                    placeholder: "your-email@mergington.edu",
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }
            }

            div {
                class: "form-group",
                label { r#for: "activity", "Select Activity:" }
                select {
                    id: "activity",
                    required: true,
                    value: activity(),
                    onchange: move |evt: FormEvent| activity.set(evt.value()),
                    option { value: "", "{SELECT_PLACEHOLDER}" }
                    for name in names {
                        option {
                            key: "{name}",
                            value: "{name}",
                            selected: name == activity(),
                            "{name}"
                        }
                    }
                }
            }

            button {
                r#type: "submit",
                disabled: submitting(),
                if submitting() { "Signing up..." } else { "Sign Up" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use api::{ActivityDirectory, ClientConfig, MemoryApi};

    use super::*;
    use crate::board::{use_board_fixture, DirectoryState};
    use crate::test_support::{count, render_app, rerender};

    thread_local! {
        static DIRECTORY: Cell<Option<Signal<DirectoryState>>> = const { Cell::new(None) };
    }

    #[component]
    fn FormHarness() -> Element {
        let (state, _) = use_board_fixture(
            DirectoryState::Loaded(MemoryApi::sample().snapshot()),
            ClientConfig::default(),
        );
        use_hook(|| DIRECTORY.with(|d| d.set(Some(state))));
        rsx! { SignupForm {} }
    }

    #[test]
    fn test_select_lists_placeholder_and_activities() {
        let (_dom, html) = render_app(FormHarness);

        assert!(html.contains(SELECT_PLACEHOLDER));
        assert_eq!(count(&html, "<option"), 4);
        assert!(html.contains("Chess Club"));
        assert!(html.contains("Gym Class"));
        assert!(html.contains("Sign Up"));
    }

    #[test]
    fn test_options_are_rebuilt_on_refresh() {
        let (mut dom, _) = render_app(FormHarness);

        let mut directory = ActivityDirectory::new();
        if let Some(gym) = MemoryApi::sample().snapshot().get("Gym Class") {
            directory.insert("Gym Class", gym.clone());
        }

        let mut state = DIRECTORY.with(|d| d.get()).unwrap();
        dom.in_runtime(|| state.set(DirectoryState::Loaded(directory)));
        let html = rerender(&mut dom);

        assert_eq!(count(&html, "<option"), 2);
        assert!(html.contains(SELECT_PLACEHOLDER));
        assert!(!html.contains("Chess Club"));

        dom.in_runtime(|| state.set(DirectoryState::Loading));
        let html = rerender(&mut dom);
        assert_eq!(count(&html, "<option"), 1);
    }
}
