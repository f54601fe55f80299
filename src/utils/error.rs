use crate::domain::model::Slot;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FalconeError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("{endpoint} responded with HTTP {status}")]
    HttpStatus { endpoint: String, status: u16 },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Unknown planet: {name}")]
    UnknownPlanet { name: String },

    #[error("Unknown vehicle: {name}")]
    UnknownVehicle { name: String },

    #[error("Planet {planet} is already chosen for {slot}")]
    PlanetTaken { planet: String, slot: Slot },

    #[error("No planet chosen for {slot}")]
    NoPlanetSelected { slot: Slot },

    #[error("{vehicle} cannot reach {planet} (max distance {max_distance}, needs {distance})")]
    VehicleOutOfRange {
        vehicle: String,
        planet: String,
        max_distance: f64,
        distance: f64,
    },

    #[error("No {vehicle} left in inventory")]
    VehicleUnavailable { vehicle: String },

    #[error("Token endpoint returned an empty token")]
    TokenMissing,

    #[error("At most {max} destinations can be assigned, got {given}")]
    TooManyAssignments { max: usize, given: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Configuration,
    Selection,
    Data,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl FalconeError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            FalconeError::ApiError(_)
            | FalconeError::HttpStatus { .. }
            | FalconeError::TokenMissing => ErrorCategory::Network,
            FalconeError::IoError(_)
            | FalconeError::ConfigError { .. }
            | FalconeError::ConfigValidationError { .. }
            | FalconeError::InvalidConfigValueError { .. }
            | FalconeError::MissingConfigError { .. }
            | FalconeError::TooManyAssignments { .. } => ErrorCategory::Configuration,
            FalconeError::UnknownPlanet { .. }
            | FalconeError::UnknownVehicle { .. }
            | FalconeError::PlanetTaken { .. }
            | FalconeError::NoPlanetSelected { .. }
            | FalconeError::VehicleOutOfRange { .. }
            | FalconeError::VehicleUnavailable { .. } => ErrorCategory::Selection,
            FalconeError::SerializationError(_) => ErrorCategory::Data,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Selection => ErrorSeverity::Low,
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Data => ErrorSeverity::High,
            ErrorCategory::Configuration => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            FalconeError::ApiError(_) | FalconeError::HttpStatus { .. } => {
                "Check the network connection and that --base-url points at a running service"
            }
            FalconeError::TokenMissing => "Request a new token by submitting again",
            FalconeError::UnknownPlanet { .. } | FalconeError::UnknownVehicle { .. } => {
                "Run with --list to see the names the service offers"
            }
            FalconeError::PlanetTaken { .. } => "Pick a planet no other destination is using",
            FalconeError::NoPlanetSelected { .. } => "Choose a planet before choosing a vehicle",
            FalconeError::VehicleOutOfRange { .. } => {
                "Pick a vehicle whose max distance covers the planet"
            }
            FalconeError::VehicleUnavailable { .. } => {
                "Free the vehicle from another destination or pick a different one"
            }
            FalconeError::TooManyAssignments { .. } => "Assign at most four destinations",
            FalconeError::SerializationError(_) => {
                "The service returned data in an unexpected shape"
            }
            FalconeError::IoError(_)
            | FalconeError::ConfigError { .. }
            | FalconeError::ConfigValidationError { .. }
            | FalconeError::InvalidConfigValueError { .. }
            | FalconeError::MissingConfigError { .. } => {
                "Fix the configuration file or flags and retry"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Network => format!("Could not talk to the Falcone service: {}", self),
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            ErrorCategory::Selection => format!("Invalid selection: {}", self),
            ErrorCategory::Data => format!("Unexpected response: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, FalconeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_errors_are_low_severity() {
        let err = FalconeError::VehicleUnavailable {
            vehicle: "Space rocket".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Selection);
        assert_eq!(err.severity(), ErrorSeverity::Low);
        assert!(err.user_friendly_message().contains("Space rocket"));
    }

    #[test]
    fn test_config_errors_are_critical() {
        let err = FalconeError::MissingConfigError {
            field: "api.base_url".to_string(),
        };
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert_eq!(
            err.to_string(),
            "Missing required configuration: api.base_url"
        );
    }

    #[test]
    fn test_planet_taken_names_slot() {
        let err = FalconeError::PlanetTaken {
            planet: "Donlon".to_string(),
            slot: Slot::Two,
        };
        assert_eq!(
            err.to_string(),
            "Planet Donlon is already chosen for destination 2"
        );
    }
}
