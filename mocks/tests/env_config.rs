//! Environment-driven configuration
//!
//! Kept in its own test binary with a single test so the process
//! environment it changes is never seen by other tests.

use std::env;
use std::io::Write;
use user_core::User;
use user_mocks::{default_seed_users, FixtureConfig, LogFormat};

const LEVEL_VAR: &str = "USER_FIXTURE_LOGGING__LEVEL";
const FILE_VAR: &str = "USER_FIXTURE_CONFIG_FILE";

#[test]
fn test_from_env_sources() {
    env::remove_var(LEVEL_VAR);
    env::remove_var(FILE_VAR);

    // Nested key override keeps the embedded seeds
    env::set_var(LEVEL_VAR, "debug");
    let config = FixtureConfig::from_env().unwrap();
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.logging.format, LogFormat::Compact);
    assert_eq!(config.seed.users, default_seed_users());
    env::remove_var(LEVEL_VAR);

    // Named file replaces the embedded defaults
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(
        file,
        r#"
[logging]
format = "pretty"

[[seed.users]]
id = 42
first_name = "Linus"
last_name = "Pauling"
status = "remote"
"#
    )
    .unwrap();
    env::set_var(FILE_VAR, file.path());
    let config = FixtureConfig::from_env().unwrap();
    assert_eq!(config.seed.users, vec![User::new(42, "Linus", "Pauling", "remote")]);
    assert_eq!(config.logging.format, LogFormat::Pretty);
    assert_eq!(config.logging.level, "info");

    // A named file that does not exist is a loader error
    env::set_var(FILE_VAR, "/nonexistent/user-fixture.toml");
    let error = FixtureConfig::from_env().unwrap_err();
    assert!(error.is_config());

    env::remove_var(FILE_VAR);
    let config = FixtureConfig::from_env().unwrap();
    assert_eq!(config, FixtureConfig::default());
}
