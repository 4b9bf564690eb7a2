use std::sync::Arc;

use crate::models::{User, UserEvent};

/// Data-access capability set for users.
///
/// Code that reads or changes users depends on this trait rather than on a
/// concrete data source. All operations are synchronous and infallible.
pub trait UserRepository: Send + Sync {
    /// List all users
    ///
    /// # Returns
    /// A snapshot of the current users in no particular order. Changing the
    /// returned vector does not touch the repository.
    fn users(&self) -> Vec<User>;

    /// Store a user keyed by its `id`
    ///
    /// Inserts the user when the id is unknown and overwrites the stored
    /// value otherwise. Records exactly one [`UserEvent::UserUpdated`].
    fn update_user(&self, user: User);

    /// List recorded events
    ///
    /// # Returns
    /// A snapshot of the events in the order they were recorded.
    fn user_events(&self) -> Vec<UserEvent>;
}

impl<T: UserRepository + ?Sized> UserRepository for Box<T> {
    fn users(&self) -> Vec<User> {
        (**self).users()
    }

    fn update_user(&self, user: User) {
        (**self).update_user(user)
    }

    fn user_events(&self) -> Vec<UserEvent> {
        (**self).user_events()
    }
}

impl<T: UserRepository + ?Sized> UserRepository for Arc<T> {
    fn users(&self) -> Vec<User> {
        (**self).users()
    }

    fn update_user(&self, user: User) {
        (**self).update_user(user)
    }

    fn user_events(&self) -> Vec<UserEvent> {
        (**self).user_events()
    }
}
