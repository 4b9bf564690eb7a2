//! In-memory user repository fixture and test utilities
//!
//! This crate provides the testing infrastructure for code that depends on
//! a `UserRepository`:
//! - `UserFixtureStore`, a seeded in-memory data source with assertions
//! - `FixtureRepository`, the repository view handed to code under test
//! - Builders, fixtures and random data generators
//! - Contract checks for any repository implementation
//! - Layered configuration and test telemetry

pub mod assertions;
pub mod builders;
pub mod config;
pub mod contracts;
pub mod error;
pub mod fixtures;
pub mod generators;
pub mod repository;
pub mod store;
pub mod telemetry;

pub use assertions::*;
pub use builders::*;
pub use crate::config::{FixtureConfig, LogFormat, LoggingConfig, SeedConfig};
pub use contracts::*;
pub use error::{FixtureError, Result};
pub use fixtures::*;
pub use generators::*;
pub use repository::FixtureRepository;
pub use store::UserFixtureStore;
pub use telemetry::{init_telemetry, init_test_tracing};
