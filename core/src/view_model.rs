//! Presentation-side consumer of a [`UserRepository`]
//!
//! The view model loads the user list once, lets callers change a user's
//! status and exposes the events the repository recorded.

use tracing::{debug, instrument};

use crate::{
    models::{User, UserEvent},
    repository::UserRepository,
};

pub struct UserViewModel<R: UserRepository> {
    repository: R,
    users: Vec<User>,
}

impl<R: UserRepository> UserViewModel<R> {
    /// Create a view model, loading the current users from `repository`
    pub fn new(repository: R) -> Self {
        let users = repository.users();
        debug!(count = users.len(), "Loaded users");
        Self { repository, users }
    }

    /// Users as loaded at construction
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Write a copy of the loaded user `id` with a new status
    ///
    /// # Returns
    /// * `Some(User)` - The user as written to the repository
    /// * `None` - No loaded user has that id; nothing is written
    #[instrument(skip(self, status))]
    pub fn update_status(&self, id: i32, status: impl Into<String>) -> Option<User> {
        let Some(user) = self.users.iter().find(|u| u.id == id) else {
            debug!("Unknown user, status left unchanged");
            return None;
        };

        let updated = user.with_status(status);
        self.repository.update_user(updated.clone());
        Some(updated)
    }

    /// Events recorded by the underlying repository
    pub fn events(&self) -> Vec<UserEvent> {
        self.repository.user_events()
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }
}
