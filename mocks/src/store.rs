//! In-memory user fixture
//!
//! [`UserFixtureStore`] stands in for a persistence-backed user data source.
//! Tests hand [`UserFixtureStore::repository`] to the code under test and
//! then check the outcome through the store's accessors and assertions.
//!
//! ```rust
//! use user_core::UserViewModel;
//! use user_mocks::UserFixtureStore;
//!
//! let fixture = UserFixtureStore::new();
//! let model = UserViewModel::new(fixture.repository());
//!
//! let user = model.users()[0].with_status("sick");
//! model.update_status(user.id, user.status.clone());
//!
//! fixture.in_data_set(&user);
//! fixture.assert_event_is_update_user(model.events()[0]);
//! ```

use tracing::debug;
use user_core::{User, UserEvent};

use crate::config::FixtureConfig;
use crate::error::Result;
use crate::fixtures::default_seed_users;
use crate::repository::{FixtureRepository, FixtureState};

pub struct UserFixtureStore {
    state: FixtureState,
}

impl Default for UserFixtureStore {
    fn default() -> Self {
        Self::new()
    }
}

impl UserFixtureStore {
    /// Store seeded with Bob Wilson (1, active) and John Johnson (2, vacation)
    pub fn new() -> Self {
        Self::with_users(default_seed_users())
    }

    /// Store seeded with `users` instead of the defaults
    pub fn with_users(users: Vec<User>) -> Self {
        debug!(count = users.len(), "Seeding user fixture");
        Self {
            state: FixtureState::seeded(users),
        }
    }

    /// Store seeded from configuration
    pub fn from_config(config: &FixtureConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::with_users(config.seed.users.clone()))
    }

    /// A repository view sharing this store's users and events
    pub fn repository(&self) -> FixtureRepository {
        FixtureRepository::new(self.state.clone())
    }

    /// Snapshot of the stored users, in no particular order
    pub fn users(&self) -> Vec<User> {
        self.state.users()
    }

    /// Stored user for `id`
    pub fn user(&self, id: i32) -> Option<User> {
        self.state.user(id)
    }

    /// Snapshot of the recorded events, oldest first
    pub fn events(&self) -> Vec<UserEvent> {
        self.state.events()
    }

    /// Assert the store holds exactly `user` under its id
    pub fn in_data_set(&self, user: &User) {
        assert_eq!(
            self.state.user(user.id).as_ref(),
            Some(user),
            "Stored user for id {} does not match",
            user.id
        );
    }

    /// Assert `event` is the user-updated marker
    pub fn assert_event_is_update_user(&self, event: UserEvent) {
        assert_eq!(
            event,
            UserEvent::UserUpdated,
            "Expected a user-updated event"
        );
    }

    /// Assert exactly `expected` updates were recorded
    pub fn assert_update_count(&self, expected: usize) {
        let events = self.state.events();
        assert_eq!(
            events.len(),
            expected,
            "Expected {expected} recorded events, got {events:?}"
        );
        for event in events {
            self.assert_event_is_update_user(event);
        }
    }

    /// Number of stored users
    pub fn len(&self) -> usize {
        self.state.user_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{bob_wilson, create_test_user, john_johnson};
    use user_core::UserRepository;

    fn sorted(mut users: Vec<User>) -> Vec<User> {
        users.sort_by_key(|u| u.id);
        users
    }

    #[test]
    fn test_fresh_store_has_seed_users() {
        let store = UserFixtureStore::new();

        assert_eq!(sorted(store.users()), vec![bob_wilson(), john_johnson()]);
        assert!(store.events().is_empty());
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_update_existing_user_keeps_count() {
        let store = UserFixtureStore::new();
        let repo = store.repository();

        repo.update_user(john_johnson().with_status("active"));

        assert_eq!(store.len(), 2);
        assert_eq!(store.user(2).unwrap().status, "active");
        store.assert_update_count(1);
    }

    #[test]
    fn test_update_new_user_grows_store() {
        let store = UserFixtureStore::new();
        let new_user = create_test_user();

        store.repository().update_user(new_user.clone());

        assert_eq!(store.len(), 3);
        store.in_data_set(&new_user);
    }

    #[test]
    fn test_views_share_state() {
        let store = UserFixtureStore::new();
        let first = store.repository();
        let second = store.repository();

        first.update_user(bob_wilson().with_status("sick"));

        assert_eq!(second.users().len(), 2);
        assert!(second.users().contains(&bob_wilson().with_status("sick")));
        assert_eq!(second.user_events(), vec![UserEvent::UserUpdated]);
        assert_eq!(store.events(), first.user_events());
    }

    #[test]
    fn test_in_data_set_passes_for_seed() {
        let store = UserFixtureStore::new();
        store.in_data_set(&bob_wilson());
        store.in_data_set(&john_johnson());
    }

    #[test]
    #[should_panic(expected = "does not match")]
    fn test_in_data_set_fails_on_field_mismatch() {
        let store = UserFixtureStore::new();
        store.in_data_set(&bob_wilson().with_status("vacation"));
    }

    #[test]
    #[should_panic(expected = "does not match")]
    fn test_in_data_set_fails_on_missing_id() {
        let store = UserFixtureStore::new();
        store.in_data_set(&create_test_user());
    }

    #[test]
    fn test_assert_event_is_update_user() {
        let store = UserFixtureStore::new();
        store.repository().update_user(bob_wilson());
        store.assert_event_is_update_user(store.events()[0]);
    }

    #[test]
    #[should_panic(expected = "Expected 2 recorded events")]
    fn test_assert_update_count_mismatch() {
        let store = UserFixtureStore::new();
        store.repository().update_user(bob_wilson());
        store.assert_update_count(2);
    }

    #[test]
    fn test_with_users_and_from_config() {
        let store = UserFixtureStore::with_users(vec![]);
        assert!(store.is_empty());

        let store = UserFixtureStore::from_config(&FixtureConfig::default()).unwrap();
        assert_eq!(sorted(store.users()), vec![bob_wilson(), john_johnson()]);

        let mut config = FixtureConfig::default();
        config.seed.users.push(bob_wilson());
        assert!(UserFixtureStore::from_config(&config).is_err());
    }

    #[test]
    fn test_stores_are_independent() {
        let a = UserFixtureStore::new();
        let b = UserFixtureStore::new();

        a.repository().update_user(create_test_user());

        assert_eq!(a.len(), 3);
        assert_eq!(b.len(), 2);
        assert!(b.events().is_empty());
    }
}
