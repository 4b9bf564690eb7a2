//! Random test data generators using the fake crate
//!
//! Provides realistic random users and property-based testing strategies.

use fake::faker::name::en::{FirstName, LastName};
use fake::Fake;
use proptest::prelude::*;
use rand::Rng;
use user_core::User;

/// Status labels seen in practice
pub const STATUSES: [&str; 5] = ["active", "vacation", "sick", "remote", "offline"];

/// Generate a random status label
pub fn generate_status() -> String {
    STATUSES[rand::thread_rng().gen_range(0..STATUSES.len())].to_string()
}

/// Generate a random user with realistic names
///
/// Ids are drawn from 1000 upwards so they never collide with the seed users.
pub fn generate_random_user() -> User {
    let id: i32 = (1000..99999).fake();
    User::new(
        id,
        FirstName().fake::<String>(),
        LastName().fake::<String>(),
        generate_status(),
    )
}

/// Generate up to `count` random users with distinct ids starting at `first_id`
///
/// Ids stop at `i32::MAX`.
pub fn generate_users(first_id: i32, count: usize) -> Vec<User> {
    (first_id..=i32::MAX)
        .take(count)
        .map(|id| User {
            id,
            ..generate_random_user()
        })
        .collect()
}

/// Proptest strategy for status labels
pub fn status_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(STATUSES.to_vec()).prop_map(|s| s.to_string())
}

/// Proptest strategy for complete users
pub fn user_strategy() -> impl Strategy<Value = User> {
    (
        1i32..99999,
        "[A-Z][a-z]{1,12}",
        "[A-Z][a-z]{1,16}",
        status_strategy(),
    )
        .prop_map(|(id, first_name, last_name, status)| {
            User::new(id, first_name, last_name, status)
        })
}
