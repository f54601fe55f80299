use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const SLOT_COUNT: usize = 4;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Planet {
    pub name: String,
    pub distance: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    pub name: String,
    /// Remaining inventory; only the tracker mutates it.
    pub total_no: u32,
    pub max_distance: f64,
    pub speed: f64,
}

impl Vehicle {
    pub fn can_reach(&self, planet: &Planet) -> bool {
        self.max_distance >= planet.distance
    }
}

/// One of the four fixed destinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Slot {
    One,
    Two,
    Three,
    Four,
}

impl Slot {
    pub const ALL: [Slot; SLOT_COUNT] = [Slot::One, Slot::Two, Slot::Three, Slot::Four];

    pub fn index(self) -> usize {
        match self {
            Slot::One => 0,
            Slot::Two => 1,
            Slot::Three => 2,
            Slot::Four => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<Slot> {
        Slot::ALL.get(index).copied()
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "destination {}", self.index() + 1)
    }
}

impl FromStr for Slot {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        s.trim()
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(Slot::from_index)
            .ok_or_else(|| format!("slot must be a number between 1 and {}", SLOT_COUNT))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlotSelection {
    pub planet: Option<String>,
    pub vehicle: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FindRequest {
    pub token: String,
    pub planet_names: Vec<String>,
    pub vehicle_names: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FindResponse {
    pub status: String,
    #[serde(default)]
    pub planet_name: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

pub const STATUS_SUCCESS: &str = "success";

/// What the find call told us, once it decoded cleanly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FindOutcome {
    Found { planet_name: String },
    NotFound { status: String },
}

impl FindResponse {
    /// `None` when the service claims success but names no planet.
    pub fn outcome(&self) -> Option<FindOutcome> {
        if self.status == STATUS_SUCCESS {
            self.planet_name.clone().map(|planet_name| FindOutcome::Found { planet_name })
        } else {
            Some(FindOutcome::NotFound {
                status: self.status.clone(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vehicle_deserializes_from_service_shape() {
        let json = r#"{"name":"Space pod","total_no":2,"max_distance":200,"speed":2}"#;
        let vehicle: Vehicle = serde_json::from_str(json).unwrap();
        assert_eq!(vehicle.name, "Space pod");
        assert_eq!(vehicle.total_no, 2);
        assert_eq!(vehicle.max_distance, 200.0);
    }

    #[test]
    fn test_can_reach_is_inclusive() {
        let planet = Planet {
            name: "Enchai".to_string(),
            distance: 200.0,
        };
        let pod = Vehicle {
            name: "Space pod".to_string(),
            total_no: 2,
            max_distance: 200.0,
            speed: 2.0,
        };
        assert!(pod.can_reach(&planet));
    }

    #[test]
    fn test_slot_parsing_and_display() {
        assert_eq!("1".parse::<Slot>(), Ok(Slot::One));
        assert_eq!(" 4 ".parse::<Slot>(), Ok(Slot::Four));
        assert!("0".parse::<Slot>().is_err());
        assert!("5".parse::<Slot>().is_err());
        assert_eq!(Slot::Three.to_string(), "destination 3");
    }

    #[test]
    fn test_find_request_field_names() {
        let request = FindRequest {
            token: "abc".to_string(),
            planet_names: vec!["Donlon".to_string()],
            vehicle_names: vec!["Space pod".to_string()],
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "token": "abc",
                "planet_names": ["Donlon"],
                "vehicle_names": ["Space pod"]
            })
        );
    }

    #[test]
    fn test_find_response_outcome() {
        let found: FindResponse =
            serde_json::from_str(r#"{"status":"success","planet_name":"Jupiter"}"#).unwrap();
        assert_eq!(
            found.outcome(),
            Some(FindOutcome::Found {
                planet_name: "Jupiter".to_string()
            })
        );

        let pending: FindResponse = serde_json::from_str(r#"{"status":"pending"}"#).unwrap();
        assert_eq!(
            pending.outcome(),
            Some(FindOutcome::NotFound {
                status: "pending".to_string()
            })
        );

        let nameless: FindResponse = serde_json::from_str(r#"{"status":"success"}"#).unwrap();
        assert_eq!(nameless.outcome(), None);
    }
}
