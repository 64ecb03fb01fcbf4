//! Sign-up and unregister calls, reduced to the notice the board shows.

use api::{ActivitiesApi, ApiError};

pub const LOAD_FAILED: &str = "Failed to load activities. Please try again later.";

const SIGNUP_REJECTED: &str = "An error occurred";
const SIGNUP_FAILED: &str = "Failed to sign up. Please try again.";
const UNREGISTER_REJECTED: &str = "Failed to unregister";
const UNREGISTER_FAILED: &str = "Failed to unregister. Try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A message for the flash banner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            text: text.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.kind == NoticeKind::Success
    }
}

/// A participant the user asked to remove.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Removal {
    pub activity: String,
    pub email: String,
}

impl Removal {
    pub fn new(activity: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            activity: activity.into(),
            email: email.into(),
        }
    }

    /// Question asked before the removal goes through.
    pub fn prompt(&self) -> String {
        format!("Unregister {} from {}?", self.email, self.activity)
    }
}

/// Submit the sign-up form. Blank input is refused without a request.
pub async fn sign_up<A: ActivitiesApi>(api: &A, activity: &str, email: &str) -> Notice {
    let email = email.trim();
    if email.is_empty() {
        return Notice::error("Please enter your email");
    }
    if activity.is_empty() {
        return Notice::error("Please select an activity");
    }

    match api.signup(activity, email).await {
        Ok(message) => Notice::success(message),
        Err(e) => failure_notice(&e, SIGNUP_REJECTED, SIGNUP_FAILED, "signing up"),
    }
}

/// Remove a participant from an activity.
pub async fn unregister<A: ActivitiesApi>(api: &A, removal: &Removal) -> Notice {
    match api.unregister(&removal.activity, &removal.email).await {
        Ok(message) => Notice::success(message),
        Err(e) => failure_notice(&e, UNREGISTER_REJECTED, UNREGISTER_FAILED, "unregistering"),
    }
}

/// Rejections show the server's detail (or `rejected`); anything else is a
/// connectivity problem and shows `failed`.
fn failure_notice(e: &ApiError, rejected: &str, failed: &str, doing: &str) -> Notice {
    match e {
        ApiError::Rejected { detail, .. } => {
            Notice::error(detail.clone().unwrap_or_else(|| rejected.to_string()))
        }
        ApiError::Transport(_) | ApiError::InvalidUrl(_) => {
            tracing::error!("Error {}: {}", doing, e);
            Notice::error(failed)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::{ActivityDirectory, MemoryApi};

    /// Rejects everything with a bare status and no detail.
    struct Grumpy;

    impl ActivitiesApi for Grumpy {
        async fn list_activities(&self) -> Result<ActivityDirectory, ApiError> {
            Err(ApiError::Rejected { status: 500, detail: None })
        }

        async fn signup(&self, _: &str, _: &str) -> Result<String, ApiError> {
            Err(ApiError::Rejected { status: 500, detail: None })
        }

        async fn unregister(&self, _: &str, _: &str) -> Result<String, ApiError> {
            Err(ApiError::Rejected { status: 500, detail: None })
        }
    }

    #[tokio::test]
    async fn test_sign_up_success_uses_server_message() {
        let api = MemoryApi::sample();
        let notice = sign_up(&api, "Gym Class", " new@mergington.edu ").await;

        assert_eq!(notice, Notice::success("Signed up new@mergington.edu for Gym Class"));
        assert!(api
            .snapshot()
            .get("Gym Class")
            .unwrap()
            .has_participant("new@mergington.edu"));
    }

    #[tokio::test]
    async fn test_sign_up_rejection_shows_detail() {
        let api = MemoryApi::sample();
        let notice = sign_up(&api, "Chess Club", "michael@mergington.edu").await;
        assert_eq!(notice, Notice::error("Student is already signed up"));
    }

    #[tokio::test]
    async fn test_sign_up_rejection_without_detail() {
        let notice = sign_up(&Grumpy, "Chess Club", "a@b.edu").await;
        assert_eq!(notice, Notice::error("An error occurred"));
    }

    #[tokio::test]
    async fn test_sign_up_offline() {
        let api = MemoryApi::sample();
        api.set_offline(true);
        let notice = sign_up(&api, "Chess Club", "a@b.edu").await;
        assert_eq!(notice, Notice::error("Failed to sign up. Please try again."));
    }

    #[tokio::test]
    async fn test_sign_up_blank_input_sends_nothing() {
        let api = MemoryApi::sample();
        api.set_offline(true);

        let notice = sign_up(&api, "Chess Club", "   ").await;
        assert_eq!(notice, Notice::error("Please enter your email"));

        let notice = sign_up(&api, "", "a@b.edu").await;
        assert_eq!(notice, Notice::error("Please select an activity"));
    }

    #[tokio::test]
    async fn test_unregister_outcomes() {
        let api = MemoryApi::sample();
        let removal = Removal::new("Chess Club", "daniel@mergington.edu");

        let notice = unregister(&api, &removal).await;
        assert_eq!(
            notice,
            Notice::success("Unregistered daniel@mergington.edu from Chess Club")
        );

        let notice = unregister(&api, &removal).await;
        assert_eq!(
            notice,
            Notice::error("Student is not signed up for this activity")
        );

        let notice = unregister(&Grumpy, &removal).await;
        assert_eq!(notice, Notice::error("Failed to unregister"));

        api.set_offline(true);
        let notice = unregister(&api, &removal).await;
        assert_eq!(notice, Notice::error("Failed to unregister. Try again."));
    }

    #[test]
    fn test_removal_prompt() {
        let removal = Removal::new("Chess Club", "emma@mergington.edu");
        assert_eq!(removal.prompt(), "Unregister emma@mergington.edu from Chess Club?");
    }
}
