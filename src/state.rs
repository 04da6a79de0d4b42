use crate::models::{Job, User};
use crate::services::{FileStore, RecordId, RecordStore};

/// Everything the menus operate on for the lifetime of the process.
#[derive(Debug, Default)]
pub struct AppState {
    pub users: RecordStore<User>,
    pub jobs: RecordStore<Job>,
    // Handle into `users`, not a copy, so password resets show through it
    pub session: Option<RecordId>,
}

impl AppState {
    pub fn new(users: Vec<User>, jobs: Vec<Job>) -> Self {
        Self {
            users: users.into(),
            jobs: jobs.into(),
            session: None,
        }
    }

    pub fn load(store: &FileStore) -> Self {
        let state = Self::new(store.load_users_or_empty(), store.load_jobs_or_empty());
        tracing::info!(
            "Loaded {} users and {} jobs",
            state.users.len(),
            state.jobs.len()
        );
        if state.jobs.is_empty() {
            tracing::warn!("Job list is empty, searches will find nothing");
        }
        state
    }

    pub fn is_logged_in(&self) -> bool {
        self.session.is_some()
    }
}
