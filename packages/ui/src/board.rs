//! Board context: the API client, the loaded directory and the flash slot.

use std::time::Duration;

use api::{ActivitiesApi, ActivityDirectory, ClientConfig};
use dioxus::prelude::*;

use crate::actions::{self, Removal, LOAD_FAILED};
use crate::client::{load_client_config, make_client, BoardClient};
use crate::flash::{show_flash, use_flash, FlashState};

/// Client and settings shared by every board component.
#[derive(Debug, Clone)]
pub struct BoardServices {
    pub client: BoardClient,
    pub config: ClientConfig,
}

impl BoardServices {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            client: make_client(&config),
            config,
        }
    }

    pub fn signup_hide_after(&self) -> Duration {
        Duration::from_secs(self.config.messages.signup_hide_secs.into())
    }

    pub fn unregister_hide_after(&self) -> Duration {
        Duration::from_secs(self.config.messages.unregister_hide_secs.into())
    }
}

/// What the activity list currently shows.
#[derive(Debug, Clone, PartialEq)]
pub enum DirectoryState {
    Loading,
    Loaded(ActivityDirectory),
    Failed(String),
}

impl DirectoryState {
    /// Activity names for the sign-up select; empty unless loaded.
    pub fn names(&self) -> Vec<String> {
        match self {
            DirectoryState::Loaded(directory) => directory.names(),
            _ => Vec::new(),
        }
    }
}

/// Handle to the loaded directory. Copy it freely into event handlers.
#[derive(Clone, Copy)]
pub struct ActivitiesHandle {
    pub state: Signal<DirectoryState>,
    loader: Resource<()>,
}

impl ActivitiesHandle {
    /// Fetch the directory again. The current listing stays up until the
    /// new one arrives.
    pub fn refresh(&mut self) {
        self.loader.restart();
    }
}

pub fn use_board_services() -> BoardServices {
    use_context::<BoardServices>()
}

pub fn use_activities() -> ActivitiesHandle {
    use_context::<ActivitiesHandle>()
}

/// Provider component for the board. Loads the platform config, builds the
/// client and fetches the directory on mount.
#[component]
pub fn BoardProvider(children: Element) -> Element {
    let services = use_context_provider(|| BoardServices::new(load_client_config()));
    use_context_provider(|| Signal::new(FlashState::default()));

    let mut state = use_signal(|| DirectoryState::Loading);
    let client = services.client.clone();
    let loader = use_resource(move || {
        let client = client.clone();
        async move {
            match client.list_activities().await {
                Ok(directory) => state.set(DirectoryState::Loaded(directory)),
                Err(e) => {
                    tracing::error!("Error fetching activities: {}", e);
                    state.set(DirectoryState::Failed(LOAD_FAILED.to_string()));
                }
            }
        }
    });

    use_context_provider(|| ActivitiesHandle { state, loader });

    rsx! {
        {children}
    }
}

/// Callback that unregisters a participant, flashes the outcome and
/// refreshes the listing on success.
pub fn use_unregister() -> Callback<Removal> {
    let services = use_board_services();
    let mut activities = use_activities();
    let mut flash = use_flash();

    use_callback(move |removal: Removal| {
        let services = services.clone();
        spawn(async move {
            let notice = actions::unregister(&services.client, &removal).await;
            if notice.is_success() {
                activities.refresh();
            }
            show_flash(&mut flash, notice, services.unregister_hide_after());
        });
    })
}

/// Board contexts with a fixed directory state and no fetch, for component
/// tests. Returns the directory and flash signals so a test can drive them.
#[cfg(test)]
pub(crate) fn use_board_fixture(
    initial: DirectoryState,
    config: ClientConfig,
) -> (Signal<DirectoryState>, Signal<FlashState>) {
    use_context_provider(move || BoardServices::new(config));
    let flash = use_context_provider(|| Signal::new(FlashState::default()));
    let state = use_signal(move || initial);
    let loader = use_resource(|| async {});
    use_context_provider(|| ActivitiesHandle { state, loader });
    (state, flash)
}
