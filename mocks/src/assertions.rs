//! Custom assertion helpers for testing
//!
//! Provides specialized assertions for:
//! - User equality with per-field messages
//! - Event log checks
//! - Collection-based assertions

use user_core::{User, UserEvent};

/// Assert users are equal, reporting the first differing field
pub fn assert_user_equals(actual: &User, expected: &User) {
    assert_eq!(actual.id, expected.id, "User IDs don't match");
    assert_eq!(
        actual.first_name, expected.first_name,
        "User first names don't match"
    );
    assert_eq!(
        actual.last_name, expected.last_name,
        "User last names don't match"
    );
    assert_eq!(actual.status, expected.status, "User statuses don't match");
}

/// Assert user matches partial criteria
pub fn assert_user_matches(user: &User, matcher: &UserMatcher) {
    if let Some(expected_id) = matcher.id {
        assert_eq!(user.id, expected_id, "User ID doesn't match expected");
    }
    if let Some(ref expected) = matcher.first_name {
        assert_eq!(user.first_name, *expected, "User first name doesn't match expected");
    }
    if let Some(ref expected) = matcher.last_name {
        assert_eq!(user.last_name, *expected, "User last name doesn't match expected");
    }
    if let Some(ref expected) = matcher.status {
        assert_eq!(user.status, *expected, "User status doesn't match expected");
    }
}

/// Assert user list contains a user with the given id
pub fn assert_contains_user_with_id(users: &[User], id: i32) {
    assert!(
        users.iter().any(|u| u.id == id),
        "Expected to find user with id {} in user list, but it wasn't found. Available ids: {:?}",
        id,
        users.iter().map(|u| u.id).collect::<Vec<_>>()
    );
}

/// Assert every recorded event is a user update
pub fn assert_all_events_are_update_user(events: &[UserEvent]) {
    for (index, event) in events.iter().enumerate() {
        assert_eq!(
            *event,
            UserEvent::UserUpdated,
            "Event at position {index} is not a user update"
        );
    }
}

/// Flexible user matcher for partial assertions
#[derive(Debug, Default)]
pub struct UserMatcher {
    pub id: Option<i32>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub status: Option<String>,
}

impl UserMatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(mut self, id: i32) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = Some(first_name.into());
        self
    }

    pub fn with_last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = Some(last_name.into());
        self
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }
}
