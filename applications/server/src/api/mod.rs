/// API route modules
pub mod health;
pub mod locations;
pub mod users;
