//! # Client configuration — `activities.toml`
//!
//! Settings for the activities board. On the web the file is not read and
//! the defaults apply (the API is assumed to live on the page's origin); the
//! desktop app reads it from the user's config directory.
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:8000"   # omit to use the page origin (web)
//!
//! [messages]
//! signup_hide_secs = 5
//! unregister_hide_secs = 4
//!
//! [ui]
//! confirm_unregister = true
//! ```
//!
//! Every section and key is optional; a missing or empty file is the
//! default configuration.

use serde::{Deserialize, Serialize};

/// Top-level configuration stored in `activities.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiSection,
    #[serde(default)]
    pub messages: MessagesSection,
    #[serde(default)]
    pub ui: UiSection,
}

/// Where the activities API lives.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiSection {
    /// Absolute base URL. `None` means "same origin as the page".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

/// How long flash messages stay visible.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MessagesSection {
    #[serde(default = "default_signup_hide_secs")]
    pub signup_hide_secs: u32,
    #[serde(default = "default_unregister_hide_secs")]
    pub unregister_hide_secs: u32,
}

fn default_signup_hide_secs() -> u32 {
    5
}

fn default_unregister_hide_secs() -> u32 {
    4
}

impl Default for MessagesSection {
    fn default() -> Self {
        Self {
            signup_hide_secs: default_signup_hide_secs(),
            unregister_hide_secs: default_unregister_hide_secs(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UiSection {
    /// Ask before removing a participant.
    #[serde(default = "default_confirm_unregister")]
    pub confirm_unregister: bool,
}

fn default_confirm_unregister() -> bool {
    true
}

impl Default for UiSection {
    fn default() -> Self {
        Self {
            confirm_unregister: default_confirm_unregister(),
        }
    }
}

impl ClientConfig {
    /// Builder method to set the API base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.api.base_url = Some(url.into());
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "activities.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
