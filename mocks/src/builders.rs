//! Builder for constructing users in tests

use user_core::User;

/// Builder for constructing User instances in tests
pub struct UserBuilder {
    user: User,
}

impl Default for UserBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl UserBuilder {
    /// Create new builder with default values
    pub fn new() -> Self {
        Self {
            user: User::new(1, "Test", "User", "active"),
        }
    }

    /// Start from an existing user
    pub fn from_user(user: &User) -> Self {
        Self { user: user.clone() }
    }

    pub fn with_id(mut self, id: i32) -> Self {
        self.user.id = id;
        self
    }

    pub fn with_first_name(mut self, first_name: impl Into<String>) -> Self {
        self.user.first_name = first_name.into();
        self
    }

    pub fn with_last_name(mut self, last_name: impl Into<String>) -> Self {
        self.user.last_name = last_name.into();
        self
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.user.status = status.into();
        self
    }

    /// Build the final User
    pub fn build(self) -> User {
        self.user
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::john_johnson;

    #[test]
    fn test_builder_defaults() {
        assert_eq!(UserBuilder::new().build(), User::new(1, "Test", "User", "active"));
    }

    #[test]
    fn test_builder_from_user() {
        let user = UserBuilder::from_user(&john_johnson())
            .with_first_name("Johnny")
            .with_status("remote")
            .build();

        assert_eq!(user, User::new(2, "Johnny", "Johnson", "remote"));
    }
}
