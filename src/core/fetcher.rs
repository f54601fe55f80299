use crate::domain::model::{Planet, Vehicle};
use crate::domain::ports::FalconeApi;

/// Loads the planet and vehicle lists. Failures are logged and leave the list empty.
pub struct DataFetcher<'a, A: FalconeApi> {
    api: &'a A,
}

impl<'a, A: FalconeApi> DataFetcher<'a, A> {
    pub fn new(api: &'a A) -> Self {
        Self { api }
    }

    pub async fn load_planets(&self) -> Vec<Planet> {
        match self.api.fetch_planets().await {
            Ok(planets) => {
                tracing::info!("Loaded {} planets", planets.len());
                planets
            }
            Err(e) => {
                tracing::error!("Error fetching planets: {}", e);
                Vec::new()
            }
        }
    }

    pub async fn load_vehicles(&self) -> Vec<Vehicle> {
        match self.api.fetch_vehicles().await {
            Ok(vehicles) => {
                tracing::info!("Loaded {} vehicles", vehicles.len());
                vehicles
            }
            Err(e) => {
                tracing::error!("Error fetching vehicles: {}", e);
                Vec::new()
            }
        }
    }

    pub async fn load_all(&self) -> (Vec<Planet>, Vec<Vehicle>) {
        tokio::join!(self.load_planets(), self.load_vehicles())
    }
}
