//! User Core Library
//!
//! Domain types and the repository interface shared by the user view model
//! and every data source behind it, real or simulated.
//!
//! # Architecture
//!
//! - [`models`] - `User` records and the `UserEvent` marker
//! - [`repository`] - The `UserRepository` capability set
//! - [`view_model`] - `UserViewModel`, the consumer of a repository
//!
//! # Example
//!
//! ```rust
//! use user_core::{User, UserRepository, UserViewModel};
//!
//! fn first_user_goes_on_vacation<R: UserRepository>(model: &UserViewModel<R>) -> Option<User> {
//!     let id = model.users().first()?.id;
//!     model.update_status(id, "vacation")
//! }
//! ```

pub mod models;
pub mod repository;
pub mod view_model;

pub use models::{User, UserEvent};
pub use repository::UserRepository;
pub use view_model::UserViewModel;

/// Current version of the core crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Current crate name
pub const CRATE_NAME: &str = env!("CARGO_PKG_NAME");
