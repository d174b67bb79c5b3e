//! Domain types for Atlas

mod ids;
mod location;
mod user;

pub use ids::UserId;
pub use location::Coordinates;
pub use user::{DeleteResult, UpdateResult, User, UserFields};
