use crate::domain::model::SLOT_COUNT;
use crate::utils::error::Result;
use crate::utils::validation::{validate_max_len, validate_non_empty_string};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A planet for one destination, optionally with the vehicle to send there.
///
/// On the command line this is written `planet:vehicle` or just `planet`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    pub planet: String,
    #[serde(default)]
    pub vehicle: Option<String>,
}

impl FromStr for Assignment {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let (planet, vehicle) = match s.split_once(':') {
            Some((planet, vehicle)) => (planet.trim(), Some(vehicle.trim())),
            None => (s.trim(), None),
        };

        if planet.is_empty() {
            return Err(format!("missing planet name in '{}'", s));
        }

        Ok(Assignment {
            planet: planet.to_string(),
            vehicle: vehicle.filter(|v| !v.is_empty()).map(str::to_string),
        })
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.vehicle {
            Some(vehicle) => write!(f, "{}:{}", self.planet, vehicle),
            None => f.write_str(&self.planet),
        }
    }
}

pub fn validate_assignments(field_name: &str, assignments: &[Assignment]) -> Result<()> {
    validate_max_len(field_name, assignments.len(), SLOT_COUNT)?;
    for assignment in assignments {
        validate_non_empty_string(&format!("{}.planet", field_name), &assignment.planet)?;
        if let Some(vehicle) = &assignment.vehicle {
            validate_non_empty_string(&format!("{}.vehicle", field_name), vehicle)?;
        }
    }
    Ok(())
}
