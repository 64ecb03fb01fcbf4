//! Shared client constructor for all platforms.
//!
//! - **Web** (WASM): no config file; the API is reached on the page origin
//!   unless a base URL was compiled into the config.
//! - **Desktop** (native): `<config_dir>/activities/activities.toml`, falling
//!   back to [`DEFAULT_BASE_URL`].

use api::{ActivitiesApi, ActivityDirectory, ApiError, ClientConfig, HttpClient};

/// Where a native build looks for the API when nothing is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// The board's API handle. Holds the construction error, if any, so that the
/// first call reports it through the normal error path.
#[derive(Debug, Clone)]
pub struct BoardClient {
    inner: Result<HttpClient, ApiError>,
}

impl BoardClient {
    pub fn new(base_url: &str) -> Self {
        let inner = HttpClient::new(base_url);
        if let Err(e) = &inner {
            tracing::error!("Unusable activities API url {}: {}", base_url, e);
        }
        Self { inner }
    }

    fn http(&self) -> Result<&HttpClient, ApiError> {
        self.inner.as_ref().map_err(|e| e.clone())
    }
}

impl ActivitiesApi for BoardClient {
    async fn list_activities(&self) -> Result<ActivityDirectory, ApiError> {
        self.http()?.list_activities().await
    }

    async fn signup(&self, activity: &str, email: &str) -> Result<String, ApiError> {
        self.http()?.signup(activity, email).await
    }

    async fn unregister(&self, activity: &str, email: &str) -> Result<String, ApiError> {
        self.http()?.unregister(activity, email).await
    }
}

/// Create a client for the configured (or platform default) API location.
pub fn make_client(config: &ClientConfig) -> BoardClient {
    BoardClient::new(&resolve_base_url(config))
}

/// Pick the API base URL: explicit config first, then the platform default.
pub fn resolve_base_url(config: &ClientConfig) -> String {
    if let Some(url) = config.api.base_url.as_deref() {
        let url = url.trim();
        if !url.is_empty() {
            return url.to_string();
        }
    }

    #[cfg(target_arch = "wasm32")]
    {
        if let Some(origin) = web_sys::window().and_then(|w| w.location().origin().ok()) {
            return origin;
        }
    }

    DEFAULT_BASE_URL.to_string()
}

/// Load the platform's client configuration.
pub fn load_client_config() -> ClientConfig {
    #[cfg(target_arch = "wasm32")]
    {
        ClientConfig::default()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        load_client_config_from(&config_path())
    }
}

/// `<config_dir>/activities/activities.toml`.
#[cfg(not(target_arch = "wasm32"))]
pub fn config_path() -> std::path::PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| std::path::PathBuf::from("."))
        .join("activities")
        .join(ClientConfig::filename())
}

/// Read a config file, using defaults when it is missing or malformed.
#[cfg(not(target_arch = "wasm32"))]
pub fn load_client_config_from(path: &std::path::Path) -> ClientConfig {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::info!("No config at {}, using defaults", path.display());
            return ClientConfig::default();
        }
        Err(e) => {
            tracing::warn!("Failed to read {}: {}", path.display(), e);
            return ClientConfig::default();
        }
    };

    match ClientConfig::from_toml(&text) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("Ignoring malformed {}: {}", path.display(), e);
            ClientConfig::default()
        }
    }
}
