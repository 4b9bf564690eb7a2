//! Standard test users
//!
//! The two default seed users plus small generators for bulk data.

use user_core::User;

/// Seed user 1
pub fn bob_wilson() -> User {
    User::new(1, "Bob", "Wilson", "active")
}

/// Seed user 2
pub fn john_johnson() -> User {
    User::new(2, "John", "Johnson", "vacation")
}

/// The users every fresh [`UserFixtureStore`](crate::UserFixtureStore) starts with
pub fn default_seed_users() -> Vec<User> {
    vec![bob_wilson(), john_johnson()]
}

/// A user that is not part of the default seed
pub fn create_test_user() -> User {
    User::new(100, "Test", "User", "active")
}

/// Create up to `count` unique users with ids starting at `first_id`
///
/// Ids stop at `i32::MAX`, so fewer users come back near the top of the range.
pub fn create_test_users(first_id: i32, count: usize) -> Vec<User> {
    let statuses = ["active", "vacation", "sick", "remote"];
    (first_id..=i32::MAX)
        .take(count)
        .enumerate()
        .map(|(i, id)| {
            User::new(
                id,
                format!("First{i}"),
                format!("Last{i}"),
                statuses[i % statuses.len()],
            )
        })
        .collect()
}
