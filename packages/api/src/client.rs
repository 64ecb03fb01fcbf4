//! HTTP client for the activities API.

use reqwest::{Response, Url};

use crate::error::ApiError;
use crate::models::{ActivityDirectory, ErrorBody, MessageResponse};

/// Operations the activities API offers.
///
/// Implemented by [`HttpClient`] for the real server and by
/// [`crate::MemoryApi`] for tests.
pub trait ActivitiesApi {
    /// Fetch every activity in display order.
    async fn list_activities(&self) -> Result<ActivityDirectory, ApiError>;

    /// Sign `email` up for `activity`. Returns the server's confirmation message.
    async fn signup(&self, activity: &str, email: &str) -> Result<String, ApiError>;

    /// Remove `email` from `activity`. Returns the server's confirmation message.
    async fn unregister(&self, activity: &str, email: &str) -> Result<String, ApiError>;
}

/// The two participant-changing endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Membership {
    Signup,
    Unregister,
}

impl Membership {
    fn path(self) -> &'static str {
        match self {
            Membership::Signup => "signup",
            Membership::Unregister => "unregister",
        }
    }
}

/// [`ActivitiesApi`] over HTTP. Works in the browser (fetch) and natively.
#[derive(Debug, Clone)]
pub struct HttpClient {
    base: Url,
    http: reqwest::Client,
}

impl HttpClient {
    /// Create a client for the API rooted at `base_url` (absolute URL, may
    /// carry a path prefix such as `http://host/school`).
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let base = Url::parse(base_url)
            .map_err(|e| ApiError::InvalidUrl(format!("{base_url}: {e}")))?;
        if base.cannot_be_a_base() {
            return Err(ApiError::InvalidUrl(format!("{base_url}: not a base url")));
        }
        Ok(Self {
            base,
            http: reqwest::Client::new(),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// `GET` target for the listing.
    pub fn activities_url(&self) -> Url {
        self.endpoint(&["activities"])
    }

    /// `POST` target for a sign-up or unregister call. The activity name is
    /// encoded as a single path segment and the email as a query value.
    pub fn membership_url(&self, activity: &str, email: &str, action: Membership) -> Url {
        let mut url = self.endpoint(&["activities", activity, action.path()]);
        url.query_pairs_mut().append_pair("email", email);
        url
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        url.set_query(None);
        url.set_fragment(None);
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn change_membership(
        &self,
        activity: &str,
        email: &str,
        action: Membership,
    ) -> Result<String, ApiError> {
        let url = self.membership_url(activity, email, action);
        tracing::debug!(%url, "POST {}", action.path());

        let response = self.http.post(url).send().await.map_err(|e| {
            tracing::error!("{} request for {} failed: {}", action.path(), activity, e);
            ApiError::from(e)
        })?;

        if !response.status().is_success() {
            return Err(rejection(response).await);
        }

        let body: MessageResponse = response.json().await?;
        Ok(body.message)
    }
}

impl ActivitiesApi for HttpClient {
    async fn list_activities(&self) -> Result<ActivityDirectory, ApiError> {
        let url = self.activities_url();
        tracing::debug!(%url, "GET activities");

        let response = self.http.get(url).send().await.map_err(|e| {
            tracing::error!("Failed to fetch activities: {}", e);
            ApiError::from(e)
        })?;

        if !response.status().is_success() {
            return Err(rejection(response).await);
        }

        let directory: ActivityDirectory = response.json().await?;
        tracing::info!("Loaded {} activities", directory.len());
        Ok(directory)
    }

    async fn signup(&self, activity: &str, email: &str) -> Result<String, ApiError> {
        self.change_membership(activity, email, Membership::Signup)
            .await
    }

    async fn unregister(&self, activity: &str, email: &str) -> Result<String, ApiError> {
        self.change_membership(activity, email, Membership::Unregister)
            .await
    }
}

/// Turn a non-success response into [`ApiError::Rejected`], keeping the
/// server's `detail` when the body carries one.
async fn rejection(response: Response) -> ApiError {
    let status = response.status().as_u16();
    let detail = match response.bytes().await {
        Ok(bytes) => serde_json::from_slice::<ErrorBody>(&bytes)
            .ok()
            .and_then(|body| body.detail_text()),
        Err(_) => None,
    };
    tracing::warn!(status, detail = detail.as_deref(), "API rejected request");
    ApiError::Rejected { status, detail }
}
