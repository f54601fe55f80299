use crate::domain::model::{FindRequest, FindResponse, Planet, Vehicle};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// The four collaborator-owned endpoints.
#[async_trait]
pub trait FalconeApi: Send + Sync {
    async fn fetch_planets(&self) -> Result<Vec<Planet>>;
    async fn fetch_vehicles(&self) -> Result<Vec<Vehicle>>;
    async fn request_token(&self) -> Result<String>;
    async fn find(&self, request: &FindRequest) -> Result<FindResponse>;
}

pub trait ConfigProvider: Send + Sync {
    fn planets_url(&self) -> String;
    fn vehicles_url(&self) -> String;
    fn token_url(&self) -> String;
    fn find_url(&self) -> String;
    fn request_timeout(&self) -> Duration;
}
