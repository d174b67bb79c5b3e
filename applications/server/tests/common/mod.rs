//! Common test utilities and fixtures
#![allow(dead_code)]

use async_trait::async_trait;
use atlas_core::types::{DeleteResult, UpdateResult, User, UserFields, UserId};
use atlas_core::{Coordinates, CoreError, Geocoder, UserRepository};
use atlas_server::{create_router, AppState};
use atlas_storage::MemoryUserRepository;
use axum::{
    body::Body,
    http::{header, Request, Response},
    Router,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Geocoder double that records every address it is asked to resolve
pub struct CountingGeocoder {
    calls: AtomicUsize,
    addresses: Mutex<Vec<String>>,
    answer: Option<Coordinates>,
}

impl CountingGeocoder {
    /// Always answers with `coordinates`
    pub fn answering(coordinates: Coordinates) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            addresses: Mutex::new(Vec::new()),
            answer: Some(coordinates),
        }
    }

    /// Always fails, as a provider rejecting the token would
    pub fn failing() -> Self {
        Self {
            calls: AtomicUsize::new(0),
            addresses: Mutex::new(Vec::new()),
            answer: None,
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn addresses(&self) -> Vec<String> {
        self.addresses.lock().unwrap().clone()
    }
}

#[async_trait]
impl Geocoder for CountingGeocoder {
    async fn resolve(&self, address: &str) -> atlas_core::Result<Coordinates> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.addresses.lock().unwrap().push(address.to_string());
        self.answer
            .ok_or_else(|| CoreError::geocoding("Provider returned status 401"))
    }
}

/// Repository whose every call fails, as an unreachable store would
pub struct UnreachableRepository;

#[async_trait]
impl UserRepository for UnreachableRepository {
    async fn list(&self) -> atlas_core::Result<Vec<User>> {
        Err(CoreError::storage("unable to open database file"))
    }

    async fn find_by_id(&self, _id: &UserId) -> atlas_core::Result<Option<User>> {
        Err(CoreError::storage("unable to open database file"))
    }

    async fn create(&self, _fields: UserFields) -> atlas_core::Result<User> {
        Err(CoreError::storage("unable to open database file"))
    }

    async fn update(&self, _id: &UserId, _fields: UserFields) -> atlas_core::Result<UpdateResult> {
        Err(CoreError::storage("unable to open database file"))
    }

    async fn delete(&self, _id: &UserId) -> atlas_core::Result<DeleteResult> {
        Err(CoreError::storage("unable to open database file"))
    }
}

/// Test app wired to an in-memory repository
pub struct TestApp {
    pub router: Router,
    pub repository: Arc<MemoryUserRepository>,
    pub geocoder: Arc<CountingGeocoder>,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_geocoder(CountingGeocoder::answering(Coordinates::new(34.0544, -118.2439)))
    }

    pub fn with_geocoder(geocoder: CountingGeocoder) -> Self {
        let repository = Arc::new(MemoryUserRepository::new());
        let geocoder = Arc::new(geocoder);
        let state = AppState::new(
            Arc::clone(&repository) as Arc<dyn UserRepository>,
            Arc::clone(&geocoder) as Arc<dyn Geocoder>,
        );

        Self {
            router: create_router(state),
            repository,
            geocoder,
        }
    }
}

/// Build a request with an optional JSON body
pub fn json_request(method: &str, uri: &str, body: Option<serde_json::Value>) -> Request<Body> {
    let builder = Request::builder().method(method).uri(uri);
    match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_string(&body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

/// Read a response body as JSON
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body_bytes).unwrap()
}

/// Test user fixtures
pub mod fixtures {
    use serde_json::{json, Value};

    pub fn full_user() -> Value {
        json!({
            "name": "Test User",
            "dob": "08/27/2018",
            "address": "Los Angeles",
            "description": "This is a test"
        })
    }
}
