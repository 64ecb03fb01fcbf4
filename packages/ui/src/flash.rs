//! The single success/error message slot under the sign-up form.

use std::time::Duration;

use dioxus::prelude::*;

use crate::actions::{Notice, NoticeKind};

/// A notice currently on screen, tagged with the sequence number it was shown under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flash {
    pub id: u64,
    pub notice: Notice,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlashState {
    current: Option<Flash>,
    shown: u64,
}

impl FlashState {
    /// Replace whatever is showing. Returns the id to hide it by.
    pub fn show(&mut self, notice: Notice) -> u64 {
        self.shown += 1;
        self.current = Some(Flash {
            id: self.shown,
            notice,
        });
        self.shown
    }

    /// Hide the flash shown under `id`. A newer flash stays up.
    pub fn hide(&mut self, id: u64) -> bool {
        if self.current.as_ref().is_some_and(|f| f.id == id) {
            self.current = None;
            return true;
        }
        false
    }

    pub fn current(&self) -> Option<&Flash> {
        self.current.as_ref()
    }

    /// CSS classes of the message element.
    pub fn class(&self) -> &'static str {
        match self.current.as_ref().map(|f| f.notice.kind) {
            None => "message hidden",
            Some(NoticeKind::Success) => "message success",
            Some(NoticeKind::Error) => "message error",
        }
    }
}

pub fn use_flash() -> Signal<FlashState> {
    use_context::<Signal<FlashState>>()
}

/// Show `notice` and hide it again after `hide_after`.
pub fn show_flash(flash: &mut Signal<FlashState>, notice: Notice, hide_after: Duration) {
    let id = flash.write().show(notice);
    let mut flash = *flash;
    spawn(async move {
        crate::sleep(hide_after).await;
        flash.write().hide(id);
    });
}

#[component]
pub fn MessageBanner() -> Element {
    let flash = use_flash();
    let state = flash();
    let text = state
        .current()
        .map(|f| f.notice.text.clone())
        .unwrap_or_default();

    rsx! {
        div {
            id: "message",
            class: state.class(),
            role: "status",
            "{text}"
        }
    }
}
