use api::Activity;
use dioxus::prelude::*;

use crate::actions::Removal;

pub const NO_PARTICIPANTS: &str = "No participants yet. Be the first to sign up!";

pub fn availability_label(activity: &Activity) -> String {
    format!("{} spots left", activity.spots_left())
}

pub fn remove_label(removal: &Removal) -> String {
    format!("Remove {} from {}", removal.email, removal.activity)
}

/// One activity with its roster.
#[component]
pub fn ActivityCard(name: String, activity: Activity, on_remove: EventHandler<Removal>) -> Element {
    let availability = availability_label(&activity);

    rsx! {
        div {
            class: "activity-card",
            h4 { "{name}" }
            p { "{activity.description}" }
            p {
                strong { "Schedule:" }
                " {activity.schedule}"
            }
            p {
                strong { "Availability:" }
                " {availability}"
            }
            div {
                class: "participants-section",
                h5 { class: "participants-title", "Participants" }
                div {
                    class: "participants-container",
                    if activity.participants.is_empty() {
                        p { class: "participants-empty", "{NO_PARTICIPANTS}" }
                    } else {
                        for (index, email) in activity.participants.iter().enumerate() {
                            ParticipantChip {
                                key: "{index}-{email}",
                                removal: Removal::new(name.clone(), email.clone()),
                                on_remove,
                            }
                        }
                    }
                }
            }
        }
    }
}

/// A participant's email with a remove button.
#[component]
pub fn ParticipantChip(removal: Removal, on_remove: EventHandler<Removal>) -> Element {
    let label = remove_label(&removal);
    let email = removal.email.clone();

    rsx! {
        div {
            class: "participant-chip",
            span { class: "participant-name", "{email}" }
            button {
                r#type: "button",
                class: "participant-delete",
                aria_label: "{label}",
                title: "{label}",
                onclick: move |_| on_remove.call(removal.clone()),
                "×"
            }
        }
    }
}
