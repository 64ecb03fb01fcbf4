use std::sync::{Arc, Mutex, MutexGuard};

use crate::client::ActivitiesApi;
use crate::error::ApiError;
use crate::models::{Activity, ActivityDirectory};

/// In-memory [`ActivitiesApi`] that answers the way the school's server does.
///
/// Clones share the same directory, so a test can keep one handle to inspect
/// state while the code under test mutates it through another.
#[derive(Clone, Debug, Default)]
pub struct MemoryApi {
    directory: Arc<Mutex<ActivityDirectory>>,
    offline: Arc<Mutex<bool>>,
}

impl MemoryApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_directory(directory: ActivityDirectory) -> Self {
        Self {
            directory: Arc::new(Mutex::new(directory)),
            offline: Arc::default(),
        }
    }

    /// A small seeded directory.
    pub fn sample() -> Self {
        let mut directory = ActivityDirectory::new();
        directory.insert(
            "Chess Club",
            Activity {
                description: "Learn strategies and compete in chess tournaments".to_string(),
                schedule: "Fridays, 3:30 PM - 5:00 PM".to_string(),
                max_participants: 12,
                participants: vec![
                    "michael@mergington.edu".to_string(),
                    "daniel@mergington.edu".to_string(),
                ],
            },
        );
        directory.insert(
            "Programming Class",
            Activity {
                description: "Learn programming fundamentals and build software projects"
                    .to_string(),
                schedule: "Tuesdays and Thursdays, 3:30 PM - 4:30 PM".to_string(),
                max_participants: 20,
                participants: vec![
                    "emma@mergington.edu".to_string(),
                    "sophia@mergington.edu".to_string(),
                ],
            },
        );
        directory.insert(
            "Gym Class",
            Activity {
                description: "Physical education and sports activities".to_string(),
                schedule: "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM".to_string(),
                max_participants: 30,
                participants: Vec::new(),
            },
        );
        Self::with_directory(directory)
    }

    /// Make every call fail as if the network were down.
    pub fn set_offline(&self, offline: bool) {
        *lock(&self.offline) = offline;
    }

    /// Snapshot of the current directory.
    pub fn snapshot(&self) -> ActivityDirectory {
        lock(&self.directory).clone()
    }

    fn check_online(&self) -> Result<(), ApiError> {
        if *lock(&self.offline) {
            return Err(ApiError::Transport("offline".to_string()));
        }
        Ok(())
    }
}

fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn rejected(status: u16, detail: &str) -> ApiError {
    ApiError::Rejected {
        status,
        detail: Some(detail.to_string()),
    }
}

impl ActivitiesApi for MemoryApi {
    async fn list_activities(&self) -> Result<ActivityDirectory, ApiError> {
        self.check_online()?;
        Ok(self.snapshot())
    }

    async fn signup(&self, activity: &str, email: &str) -> Result<String, ApiError> {
        self.check_online()?;
        let mut directory = lock(&self.directory);
        let entry = directory
            .get_mut(activity)
            .ok_or_else(|| rejected(404, "Activity not found"))?;

        if entry.has_participant(email) {
            return Err(rejected(400, "Student is already signed up"));
        }
        if entry.spots_left() == 0 {
            return Err(rejected(400, "Activity is full"));
        }

        entry.participants.push(email.to_string());
        Ok(format!("Signed up {email} for {activity}"))
    }

    async fn unregister(&self, activity: &str, email: &str) -> Result<String, ApiError> {
        self.check_online()?;
        let mut directory = lock(&self.directory);
        let entry = directory
            .get_mut(activity)
            .ok_or_else(|| rejected(404, "Activity not found"))?;

        let Some(index) = entry.participants.iter().position(|p| p == email) else {
            return Err(rejected(400, "Student is not signed up for this activity"));
        };

        entry.participants.remove(index);
        Ok(format!("Unregistered {email} from {activity}"))
    }
}
