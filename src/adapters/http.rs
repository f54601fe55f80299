use crate::domain::model::{FindRequest, FindResponse, Planet, TokenResponse, Vehicle};
use crate::domain::ports::{ConfigProvider, FalconeApi};
use crate::utils::error::{FalconeError, Result};
use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

const JSON: &str = "application/json";

/// `FalconeApi` over HTTP+JSON.
#[derive(Debug, Clone)]
pub struct HttpFalconeApi {
    client: Client,
    planets_url: String,
    vehicles_url: String,
    token_url: String,
    find_url: String,
}

impl HttpFalconeApi {
    pub fn new<C: ConfigProvider + ?Sized>(config: &C) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .build()?;

        Ok(Self {
            client,
            planets_url: config.planets_url(),
            vehicles_url: config.vehicles_url(),
            token_url: config.token_url(),
            find_url: config.find_url(),
        })
    }

    async fn decode<T: DeserializeOwned>(endpoint: &str, response: Response) -> Result<T> {
        tracing::debug!("{} response status: {}", endpoint, response.status());

        if !response.status().is_success() {
            return Err(FalconeError::HttpStatus {
                endpoint: endpoint.to_string(),
                status: response.status().as_u16(),
            });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl FalconeApi for HttpFalconeApi {
    async fn fetch_planets(&self) -> Result<Vec<Planet>> {
        tracing::debug!("Making API request to: {}", self.planets_url);
        let response = self.client.get(&self.planets_url).send().await?;
        Self::decode("planets", response).await
    }

    async fn fetch_vehicles(&self) -> Result<Vec<Vehicle>> {
        tracing::debug!("Making API request to: {}", self.vehicles_url);
        let response = self.client.get(&self.vehicles_url).send().await?;
        Self::decode("vehicles", response).await
    }

    async fn request_token(&self) -> Result<String> {
        tracing::debug!("Requesting token from: {}", self.token_url);
        let response = self
            .client
            .post(&self.token_url)
            .header(ACCEPT, JSON)
            .send()
            .await?;
        let token: TokenResponse = Self::decode("token", response).await?;
        if token.token.is_empty() {
            return Err(FalconeError::TokenMissing);
        }
        Ok(token.token)
    }

    async fn find(&self, request: &FindRequest) -> Result<FindResponse> {
        tracing::debug!(
            "Posting {} planets / {} vehicles to: {}",
            request.planet_names.len(),
            request.vehicle_names.len(),
            self.find_url
        );
        let response = self
            .client
            .post(&self.find_url)
            .header(ACCEPT, JSON)
            .header(CONTENT_TYPE, JSON)
            .body(serde_json::to_vec(request)?)
            .send()
            .await?;
        Self::decode("find", response).await
    }
}
