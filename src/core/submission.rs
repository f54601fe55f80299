use crate::core::tracker::SelectionTracker;
use crate::domain::model::{FindOutcome, FindRequest, Planet, Vehicle};
use crate::domain::ports::FalconeApi;
use std::fmt;

pub const TOKEN_FAILURE_MESSAGE: &str = "Error: Failed to get token.";
pub const FIND_FAILURE_MESSAGE: &str = "Error: Failed to find Falcone.";

/// Sum of `distance / speed` over index-matched pairs. Names that do not
/// resolve are skipped, as is any surplus on the longer side.
pub fn calculate_total_time(
    planets: &[Planet],
    vehicles: &[Vehicle],
    planet_names: &[String],
    vehicle_names: &[String],
) -> f64 {
    planet_names
        .iter()
        .zip(vehicle_names)
        .filter_map(|(planet_name, vehicle_name)| {
            let planet = planets.iter().find(|p| &p.name == planet_name)?;
            let vehicle = vehicles.iter().find(|v| &v.name == vehicle_name)?;
            Some(planet.distance / vehicle.speed)
        })
        .sum()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    TokenRequested,
    TokenFailed,
    Submitted,
    Success,
    Failed,
}

impl SubmissionState {
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            SubmissionState::TokenFailed | SubmissionState::Success | SubmissionState::Failed
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Found { planet_name: String },
    NotFound { status: String },
    TokenFailed,
    FindFailed,
}

impl SubmissionOutcome {
    pub fn message(&self) -> String {
        match self {
            SubmissionOutcome::Found { planet_name } => {
                format!("Success! Falcone found on planet {}.", planet_name)
            }
            SubmissionOutcome::NotFound { status } => format!("Failed. Status: {}.", status),
            SubmissionOutcome::TokenFailed => TOKEN_FAILURE_MESSAGE.to_string(),
            SubmissionOutcome::FindFailed => FIND_FAILURE_MESSAGE.to_string(),
        }
    }
}

impl fmt::Display for SubmissionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionReport {
    pub planet_names: Vec<String>,
    pub vehicle_names: Vec<String>,
    pub estimated_time: f64,
    pub outcome: SubmissionOutcome,
    pub state: SubmissionState,
}

/// One linear token -> find attempt. Failures come back as outcomes, never as `Err`.
pub struct SubmissionFlow<'a, A: FalconeApi> {
    api: &'a A,
    state: SubmissionState,
}

impl<'a, A: FalconeApi> SubmissionFlow<'a, A> {
    pub fn new(api: &'a A) -> Self {
        Self {
            api,
            state: SubmissionState::Idle,
        }
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    fn transition(&mut self, next: SubmissionState) {
        tracing::debug!("Submission {:?} -> {:?}", self.state, next);
        self.state = next;
    }

    pub async fn submit(mut self, tracker: &SelectionTracker) -> SubmissionReport {
        let (planet_names, vehicle_names): (Vec<String>, Vec<String>) = tracker
            .assignments()
            .into_iter()
            .map(|(_, planet, vehicle)| (planet.name.clone(), vehicle.name.clone()))
            .unzip();

        let estimated_time = calculate_total_time(
            tracker.planets(),
            tracker.vehicles(),
            &planet_names,
            &vehicle_names,
        );
        tracing::info!(
            "Submitting {} destinations, estimated time {}",
            planet_names.len(),
            estimated_time
        );

        self.transition(SubmissionState::TokenRequested);
        let token = match self.api.request_token().await {
            Ok(token) => token,
            Err(e) => {
                tracing::error!("Error fetching token: {}", e);
                return self.finish(
                    planet_names,
                    vehicle_names,
                    estimated_time,
                    SubmissionOutcome::TokenFailed,
                );
            }
        };

        let request = FindRequest {
            token,
            planet_names,
            vehicle_names,
        };
        self.transition(SubmissionState::Submitted);

        let outcome = match self.api.find(&request).await {
            Ok(response) => match response.outcome() {
                Some(FindOutcome::Found { planet_name }) => {
                    SubmissionOutcome::Found { planet_name }
                }
                Some(FindOutcome::NotFound { status }) => {
                    if let Some(error) = &response.error {
                        tracing::warn!("Find service reported: {}", error);
                    }
                    SubmissionOutcome::NotFound { status }
                }
                None => {
                    tracing::error!("Error finding Falcone: success without a planet name");
                    SubmissionOutcome::FindFailed
                }
            },
            Err(e) => {
                tracing::error!("Error finding Falcone: {}", e);
                SubmissionOutcome::FindFailed
            }
        };

        let FindRequest {
            planet_names,
            vehicle_names,
            ..
        } = request;
        self.finish(planet_names, vehicle_names, estimated_time, outcome)
    }

    fn finish(
        mut self,
        planet_names: Vec<String>,
        vehicle_names: Vec<String>,
        estimated_time: f64,
        outcome: SubmissionOutcome,
    ) -> SubmissionReport {
        let terminal = match outcome {
            SubmissionOutcome::TokenFailed => SubmissionState::TokenFailed,
            SubmissionOutcome::Found { .. } => SubmissionState::Success,
            SubmissionOutcome::NotFound { .. } | SubmissionOutcome::FindFailed => {
                SubmissionState::Failed
            }
        };
        self.transition(terminal);
        tracing::info!("{}", outcome);

        SubmissionReport {
            planet_names,
            vehicle_names,
            estimated_time,
            outcome,
            state: self.state,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{FindResponse, Slot};
    use crate::utils::error::{FalconeError, Result};
    use async_trait::async_trait;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    #[derive(Clone)]
    struct MockApi {
        token: Option<String>,
        response: Option<FindResponse>,
        requests: Arc<Mutex<Vec<FindRequest>>>,
    }

    impl MockApi {
        fn new(token: Option<&str>, response: Option<FindResponse>) -> Self {
            Self {
                token: token.map(str::to_string),
                response,
                requests: Arc::new(Mutex::new(Vec::new())),
            }
        }
    }

    #[async_trait]
    impl FalconeApi for MockApi {
        async fn fetch_planets(&self) -> Result<Vec<Planet>> {
            Ok(Vec::new())
        }

        async fn fetch_vehicles(&self) -> Result<Vec<Vehicle>> {
            Ok(Vec::new())
        }

        async fn request_token(&self) -> Result<String> {
            match self.token.as_deref() {
                Some("") => Err(FalconeError::TokenMissing),
                Some(token) => Ok(token.to_string()),
                None => Err(FalconeError::HttpStatus {
                    endpoint: "token".to_string(),
                    status: 500,
                }),
            }
        }

        async fn find(&self, request: &FindRequest) -> Result<FindResponse> {
            self.requests.lock().await.push(request.clone());
            self.response.clone().ok_or_else(|| FalconeError::HttpStatus {
                endpoint: "find".to_string(),
                status: 500,
            })
        }
    }

    fn tracker() -> SelectionTracker {
        let mut tracker = SelectionTracker::new(
            vec![
                Planet {
                    name: "Donlon".to_string(),
                    distance: 100.0,
                },
                Planet {
                    name: "Jebing".to_string(),
                    distance: 300.0,
                },
            ],
            vec![
                Vehicle {
                    name: "Space ship".to_string(),
                    total_no: 2,
                    max_distance: 600.0,
                    speed: 10.0,
                },
                Vehicle {
                    name: "Space pod".to_string(),
                    total_no: 2,
                    max_distance: 200.0,
                    speed: 2.0,
                },
            ],
        );
        tracker.select_planet(Slot::One, "Donlon").unwrap();
        tracker.select_vehicle(Slot::One, "Space ship").unwrap();
        tracker
    }

    fn response(status: &str, planet_name: Option<&str>) -> FindResponse {
        FindResponse {
            status: status.to_string(),
            planet_name: planet_name.map(str::to_string),
            error: None,
        }
    }

    #[test]
    fn test_total_time_of_nothing_is_zero() {
        assert_eq!(calculate_total_time(&[], &[], &[], &[]), 0.0);
    }

    #[test]
    fn test_total_time_single_leg() {
        let t = tracker();
        let time = calculate_total_time(
            t.planets(),
            t.vehicles(),
            &["Donlon".to_string()],
            &["Space ship".to_string()],
        );
        assert_eq!(time, 10.0);
    }

    #[test]
    fn test_total_time_skips_unknown_names() {
        let t = tracker();
        let time = calculate_total_time(
            t.planets(),
            t.vehicles(),
            &["Donlon".to_string(), "Tatooine".to_string(), "Jebing".to_string()],
            &["Space pod".to_string(), "Space ship".to_string(), "Space ship".to_string()],
        );
        assert_eq!(time, 50.0 + 30.0);
    }

    #[test]
    fn test_outcome_messages() {
        assert_eq!(
            SubmissionOutcome::Found {
                planet_name: "Jupiter".to_string()
            }
            .message(),
            "Success! Falcone found on planet Jupiter."
        );
        assert_eq!(
            SubmissionOutcome::NotFound {
                status: "pending".to_string()
            }
            .message(),
            "Failed. Status: pending."
        );
        assert_eq!(SubmissionOutcome::TokenFailed.message(), TOKEN_FAILURE_MESSAGE);
        assert_eq!(SubmissionOutcome::FindFailed.to_string(), FIND_FAILURE_MESSAGE);
    }

    #[tokio::test]
    async fn test_submit_success() {
        let api = MockApi::new(Some("tok"), Some(response("success", Some("Donlon"))));
        let report = SubmissionFlow::new(&api).submit(&tracker()).await;

        assert_eq!(report.estimated_time, 10.0);
        assert_eq!(report.state, SubmissionState::Success);
        assert_eq!(report.outcome.message(), "Success! Falcone found on planet Donlon.");

        let requests = api.requests.lock().await;
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].token, "tok");
        assert_eq!(requests[0].planet_names, vec!["Donlon"]);
        assert_eq!(requests[0].vehicle_names, vec!["Space ship"]);
    }

    #[tokio::test]
    async fn test_token_failure_short_circuits() {
        let api = MockApi::new(None, Some(response("success", Some("Donlon"))));
        let report = SubmissionFlow::new(&api).submit(&tracker()).await;

        assert_eq!(report.outcome, SubmissionOutcome::TokenFailed);
        assert_eq!(report.state, SubmissionState::TokenFailed);
        assert_eq!(report.estimated_time, 10.0);
        assert!(api.requests.lock().await.is_empty());
    }

    #[tokio::test]
    async fn test_missing_token_counts_as_failure() {
        let api = MockApi::new(Some(""), Some(response("success", Some("Donlon"))));
        let report = SubmissionFlow::new(&api).submit(&tracker()).await;
        assert_eq!(report.outcome, SubmissionOutcome::TokenFailed);
        assert!(api.requests.lock().await.is_empty());
    }

    #[tokio::test]
    async fn test_non_success_status_is_reported_verbatim() {
        let api = MockApi::new(Some("tok"), Some(response("false", None)));
        let report = SubmissionFlow::new(&api).submit(&tracker()).await;
        assert_eq!(report.state, SubmissionState::Failed);
        assert_eq!(report.outcome.message(), "Failed. Status: false.");
    }

    #[tokio::test]
    async fn test_find_transport_failure_is_generic() {
        let api = MockApi::new(Some("tok"), None);
        let report = SubmissionFlow::new(&api).submit(&tracker()).await;
        assert_eq!(report.outcome, SubmissionOutcome::FindFailed);
        assert_eq!(report.state, SubmissionState::Failed);
    }

    #[tokio::test]
    async fn test_success_without_planet_is_generic_failure() {
        let api = MockApi::new(Some("tok"), Some(response("success", None)));
        let report = SubmissionFlow::new(&api).submit(&tracker()).await;
        assert_eq!(report.outcome, SubmissionOutcome::FindFailed);
    }

    #[test]
    fn test_new_flow_is_idle() {
        let api = MockApi::new(None, None);
        let flow = SubmissionFlow::new(&api);
        assert_eq!(flow.state(), SubmissionState::Idle);
        assert!(!flow.state().is_terminal());
        assert!(SubmissionState::TokenFailed.is_terminal());
    }
}
