/// Location lookup service - resolves a user's stored address to coordinates
use crate::error::{Result, ServerError};
use crate::services::UserService;
use anyhow::anyhow;
use atlas_core::{Coordinates, Geocoder};
use std::sync::Arc;

pub struct LocationService {
    users: Arc<UserService>,
    geocoder: Arc<dyn Geocoder>,
}

impl LocationService {
    pub fn new(users: Arc<UserService>, geocoder: Arc<dyn Geocoder>) -> Self {
        Self { users, geocoder }
    }

    /// Fetch the user, then geocode their address.
    ///
    /// Every failure becomes `LocationLookupFailed`; the provider is only
    /// called once a user with a non-blank address has been found.
    pub async fn locate(&self, id: &str) -> Result<Coordinates> {
        self.try_locate(id)
            .await
            .map_err(ServerError::LocationLookupFailed)
    }

    async fn try_locate(&self, id: &str) -> anyhow::Result<Coordinates> {
        let user = self.users.fetch_one(id).await?;

        let address = user
            .fields
            .address
            .as_deref()
            .map(str::trim)
            .filter(|address| !address.is_empty())
            .ok_or_else(|| anyhow!("user {} has no address", user.id))?;

        Ok(self.geocoder.resolve(address).await?)
    }
}
