//! This crate contains all shared UI for the workspace.

use std::time::Duration;

pub mod actions;
pub use actions::{Notice, NoticeKind, Removal};

mod client;
pub use client::{load_client_config, make_client, resolve_base_url, BoardClient, DEFAULT_BASE_URL};
#[cfg(not(target_arch = "wasm32"))]
pub use client::{config_path, load_client_config_from};

mod board;
pub use board::{
    use_activities, use_board_services, use_unregister, ActivitiesHandle, BoardProvider,
    BoardServices, DirectoryState,
};

pub mod flash;
pub use flash::{show_flash, use_flash, Flash, FlashState, MessageBanner};

mod activity_card;
pub use activity_card::{ActivityCard, ParticipantChip};

mod activity_list;
pub use activity_list::ActivityList;

mod confirm_dialog;
pub use confirm_dialog::ConfirmDialog;

mod signup_form;
pub use signup_form::SignupForm;

pub mod views;

#[cfg(test)]
pub(crate) mod test_support;

pub(crate) async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}
