//! Repository view over fixture state
//!
//! [`FixtureRepository`] is what code under test receives. Every view
//! handed out by a [`UserFixtureStore`](crate::UserFixtureStore) shares the
//! same users and event log through `Arc` handles, so a write through one
//! view is visible to the store and to every other view at once.

use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, trace};
use user_core::{User, UserEvent, UserRepository};

/// Shared state behind a store and all of its views
#[derive(Clone, Default)]
pub(crate) struct FixtureState {
    users: Arc<Mutex<HashMap<i32, User>>>,
    events: Arc<Mutex<Vec<UserEvent>>>,
}

impl FixtureState {
    /// State seeded with `users`; a later duplicate id overwrites an earlier one
    pub(crate) fn seeded(users: impl IntoIterator<Item = User>) -> Self {
        let map = users.into_iter().map(|user| (user.id, user)).collect();
        Self {
            users: Arc::new(Mutex::new(map)),
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub(crate) fn users(&self) -> Vec<User> {
        self.users.lock().values().cloned().collect()
    }

    pub(crate) fn user(&self, id: i32) -> Option<User> {
        trace!(id, "Fixture lookup");
        self.users.lock().get(&id).cloned()
    }

    pub(crate) fn user_count(&self) -> usize {
        self.users.lock().len()
    }

    pub(crate) fn upsert(&self, user: User) {
        let id = user.id;
        let replaced = self.users.lock().insert(id, user).is_some();
        self.events.lock().push(UserEvent::UserUpdated);
        debug!(id, replaced, "Fixture user updated");
    }

    pub(crate) fn events(&self) -> Vec<UserEvent> {
        self.events.lock().clone()
    }
}

/// Repository-shaped view of a fixture store
#[derive(Clone)]
pub struct FixtureRepository {
    state: FixtureState,
}

impl FixtureRepository {
    pub(crate) fn new(state: FixtureState) -> Self {
        Self { state }
    }
}

impl UserRepository for FixtureRepository {
    fn users(&self) -> Vec<User> {
        self.state.users()
    }

    fn update_user(&self, user: User) {
        self.state.upsert(user);
    }

    fn user_events(&self) -> Vec<UserEvent> {
        self.state.events()
    }
}
