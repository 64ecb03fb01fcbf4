use dioxus::prelude::*;

use crate::actions::Removal;
use crate::activity_card::ActivityCard;
use crate::board::{use_activities, use_board_services, use_unregister, DirectoryState};
use crate::confirm_dialog::ConfirmDialog;

/// All activity cards, plus the unregister confirmation when one is pending.
#[component]
pub fn ActivityList() -> Element {
    let services = use_board_services();
    let activities = use_activities();
    let unregister = use_unregister();
    let mut pending = use_signal(|| Option::<Removal>::None);

    let confirm = services.config.ui.confirm_unregister;
    let on_remove = use_callback(move |removal: Removal| {
        if confirm {
            pending.set(Some(removal));
        } else {
            unregister.call(removal);
        }
    });

    let state = (activities.state)();

    rsx! {
        div {
            id: "activities-list",
            match state {
                DirectoryState::Loading => rsx! {
                    p { "Loading activities..." }
                },
                DirectoryState::Failed(message) => rsx! {
                    p { "{message}" }
                },
                DirectoryState::Loaded(directory) if directory.is_empty() => rsx! {
                    p { "No activities are scheduled yet." }
                },
                DirectoryState::Loaded(directory) => rsx! {
                    for entry in directory.iter() {
                        ActivityCard {
                            key: "{entry.name}",
                            name: entry.name.clone(),
                            activity: entry.activity.clone(),
                            on_remove,
                        }
                    }
                },
            }
        }

        if let Some(removal) = pending() {
            ConfirmDialog {
                prompt: removal.prompt(),
                on_confirm: move |_| {
                    let removal = pending();
                    pending.set(None);
                    if let Some(removal) = removal {
                        unregister.call(removal);
                    }
                },
                on_cancel: move |_| pending.set(None),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use api::{ActivityDirectory, ClientConfig, MemoryApi};

    use super::*;
    use crate::actions::LOAD_FAILED;
    use crate::board::use_board_fixture;
    use crate::test_support::{count, render_app, rerender};

    thread_local! {
        static DIRECTORY: Cell<Option<Signal<DirectoryState>>> = const { Cell::new(None) };
    }

    #[component]
    fn ListHarness() -> Element {
        let (state, _) = use_board_fixture(DirectoryState::Loading, ClientConfig::default());
        use_hook(|| DIRECTORY.with(|d| d.set(Some(state))));
        rsx! { ActivityList {} }
    }

    fn set_state(dom: &mut dioxus_core::VirtualDom, next: DirectoryState) -> String {
        let mut state = DIRECTORY.with(|d| d.get()).unwrap();
        dom.in_runtime(|| state.set(next));
        rerender(dom)
    }

    #[test]
    fn test_loading_then_failure() {
        let (mut dom, html) = render_app(ListHarness);
        assert!(html.contains("Loading activities..."));

        let html = set_state(&mut dom, DirectoryState::Failed(LOAD_FAILED.to_string()));
        assert!(html.contains(LOAD_FAILED));
        assert!(!html.contains("Loading activities..."));
    }

    #[test]
    fn test_loaded_cards_in_order() {
        let (mut dom, _) = render_app(ListHarness);

        let directory = MemoryApi::sample().snapshot();
        let html = set_state(&mut dom, DirectoryState::Loaded(directory));

        assert_eq!(count(&html, "class=\"activity-card\""), 3);
        let chess = html.find("Chess Club").unwrap();
        let programming = html.find("Programming Class").unwrap();
        let gym = html.find("Gym Class").unwrap();
        assert!(chess < programming && programming < gym);
        assert!(!html.contains("Loading activities..."));
        assert!(!html.contains("confirm-dialog"));
    }

    #[test]
    fn test_empty_directory() {
        let (mut dom, _) = render_app(ListHarness);
        let html = set_state(&mut dom, DirectoryState::Loaded(ActivityDirectory::new()));
        assert!(html.contains("No activities are scheduled yet."));
        assert_eq!(count(&html, "class=\"activity-card\""), 0);
    }
}
