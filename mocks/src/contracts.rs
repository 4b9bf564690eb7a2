//! Contract test helpers for validating `UserRepository` implementations
//!
//! Any data source behind the view model should pass these checks. Each
//! check only relies on ids it creates itself, so they can run one after
//! another against the same repository.

use user_core::{User, UserEvent, UserRepository};

use crate::UserBuilder;

const CONTRACT_ID_BASE: i32 = 900_000;

/// Run every contract check against `repo`
pub fn test_repository_contract<R: UserRepository>(repo: &R) {
    test_insert_contract(repo);
    test_overwrite_contract(repo);
    test_event_contract(repo);
    test_snapshot_contract(repo);
}

/// Updating an unknown id inserts it
pub fn test_insert_contract<R: UserRepository>(repo: &R) {
    let before = repo.users().len();
    let user = UserBuilder::new()
        .with_id(CONTRACT_ID_BASE + 1)
        .with_first_name("Insert")
        .build();

    repo.update_user(user.clone());

    let users = repo.users();
    assert_eq!(users.len(), before + 1, "Insert should add exactly one user");
    assert!(users.contains(&user), "Inserted user should be listed");
}

/// Updating a known id overwrites it in place
pub fn test_overwrite_contract<R: UserRepository>(repo: &R) {
    let id = CONTRACT_ID_BASE + 2;
    repo.update_user(UserBuilder::new().with_id(id).with_status("active").build());
    let before = repo.users().len();

    let changed = UserBuilder::new()
        .with_id(id)
        .with_last_name("Overwritten")
        .with_status("vacation")
        .build();
    repo.update_user(changed.clone());

    let users = repo.users();
    assert_eq!(users.len(), before, "Overwrite should not change the count");
    let stored: Vec<&User> = users.iter().filter(|u| u.id == id).collect();
    assert_eq!(stored, vec![&changed], "Overwrite should replace every field");
}

/// Each update appends one user-updated event
pub fn test_event_contract<R: UserRepository>(repo: &R) {
    let before = repo.user_events().len();

    for offset in 0..3 {
        repo.update_user(UserBuilder::new().with_id(CONTRACT_ID_BASE + 10 + offset).build());
    }

    let events = repo.user_events();
    assert_eq!(events.len(), before + 3, "Each update should record one event");
    assert!(
        events[before..].iter().all(|e| *e == UserEvent::UserUpdated),
        "Updates should record user-updated events"
    );
}

/// Returned vectors are copies of the repository state
pub fn test_snapshot_contract<R: UserRepository>(repo: &R) {
    let mut users = repo.users();
    let expected_users = users.len();
    users.clear();

    let mut events = repo.user_events();
    let expected_events = events.len();
    events.clear();

    assert_eq!(repo.users().len(), expected_users, "User list should be a copy");
    assert_eq!(
        repo.user_events().len(),
        expected_events,
        "Event list should be a copy"
    );
}
