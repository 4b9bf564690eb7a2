use serde::{Deserialize, Serialize};
use std::fmt;

/// A user record as exposed by a [`UserRepository`](crate::UserRepository).
///
/// Users are plain values: two users are equal only when every field
/// matches. The `id` is the repository key.
///
/// # Examples
///
/// ```rust
/// use user_core::models::User;
///
/// let user = User::new(1, "Bob", "Wilson", "active");
/// let away = user.with_status("vacation");
///
/// assert_eq!(away.id, user.id);
/// assert_eq!(away.status, "vacation");
/// assert_ne!(away, user);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct User {
    /// Unique identifier, used as the repository key
    pub id: i32,
    /// Given name
    pub first_name: String,
    /// Family name
    pub last_name: String,
    /// Free-form status label (e.g. "active", "vacation")
    pub status: String,
}

impl User {
    pub fn new(
        id: i32,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        status: impl Into<String>,
    ) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            status: status.into(),
        }
    }

    /// Copy of this user with a different status
    pub fn with_status(&self, status: impl Into<String>) -> Self {
        Self {
            status: status.into(),
            ..self.clone()
        }
    }

    /// "First Last"
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {} ({})", self.id, self.full_name(), self.status)
    }
}

/// Marker recorded by a repository each time a mutating call is made.
///
/// Only user updates are tracked, so there is a single kind.
#[derive(Debug, Clone, Copy, Hash, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum UserEvent {
    /// A user was inserted or overwritten through `update_user`
    UserUpdated,
}

impl UserEvent {
    /// Tag string for this event
    pub fn as_str(&self) -> &'static str {
        match self {
            UserEvent::UserUpdated => "user updated",
        }
    }
}

impl fmt::Display for UserEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_equality_is_by_value() {
        let a = User::new(1, "Bob", "Wilson", "active");
        let b = User::new(1, "Bob", "Wilson", "active");
        assert_eq!(a, b);

        assert_ne!(a, User::new(1, "Bob", "Wilson", "vacation"));
        assert_ne!(a, User::new(2, "Bob", "Wilson", "active"));
        assert_ne!(a, User::new(1, "Rob", "Wilson", "active"));
    }

    #[test]
    fn test_with_status_keeps_other_fields() {
        let user = User::new(2, "John", "Johnson", "vacation");
        let sick = user.with_status("sick");

        assert_eq!(sick.id, 2);
        assert_eq!(sick.first_name, "John");
        assert_eq!(sick.last_name, "Johnson");
        assert_eq!(sick.status, "sick");
        // original untouched
        assert_eq!(user.status, "vacation");
    }

    #[test]
    fn test_user_display() {
        let user = User::new(1, "Bob", "Wilson", "active");
        assert_eq!(user.full_name(), "Bob Wilson");
        assert_eq!(format!("{user}"), "#1 Bob Wilson (active)");
    }

    #[test]
    fn test_event_tag() {
        assert_eq!(UserEvent::UserUpdated.as_str(), "user updated");
        assert_eq!(format!("{}", UserEvent::UserUpdated), "user updated");
    }
}
