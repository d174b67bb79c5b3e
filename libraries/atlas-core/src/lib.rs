//! Atlas Core
//!
//! Domain types, storage and geocoding seams, and error handling shared by the
//! Atlas user records service.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `User`, `UserFields`, `Coordinates`, mutation results
//! - **Core Traits**: `UserRepository`, `Geocoder`
//! - **Error Handling**: Unified `CoreError` and `Result` types
//!
//! Identifiers and timestamps are owned by the repository implementation. The
//! service layer only requests operations and reads back what the store returns.
//!
//! # Example
//!
//! ```rust
//! use atlas_core::types::{UserFields, UserId};
//!
//! let fields = UserFields {
//!     name: Some("Ada".to_string()),
//!     ..UserFields::default()
//! };
//! assert_ne!(fields, UserFields::default());
//!
//! assert!("not-a-key".parse::<UserId>().is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod geocoding;
pub mod repository;
pub mod types;

// Re-export commonly used types
pub use error::{CoreError, Result};
pub use geocoding::Geocoder;
pub use repository::UserRepository;

pub use types::{Coordinates, DeleteResult, UpdateResult, User, UserFields, UserId};
