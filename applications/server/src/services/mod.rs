/// Business logic services
pub mod locations;
pub mod users;

pub use locations::LocationService;
pub use users::UserService;
