/// Shared application state
use crate::services::{LocationService, UserService};
use atlas_core::{Geocoder, UserRepository};
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<UserService>,
    pub locations: Arc<LocationService>,
}

impl AppState {
    pub fn new(repository: Arc<dyn UserRepository>, geocoder: Arc<dyn Geocoder>) -> Self {
        let users = Arc::new(UserService::new(repository));
        let locations = Arc::new(LocationService::new(Arc::clone(&users), geocoder));
        Self { users, locations }
    }
}
