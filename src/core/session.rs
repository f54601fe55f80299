use crate::core::fetcher::DataFetcher;
use crate::core::submission::{SubmissionFlow, SubmissionReport};
use crate::core::tracker::SelectionTracker;
use crate::domain::model::{Planet, Slot, Vehicle};
use crate::domain::ports::FalconeApi;
use crate::utils::error::Result;

/// A user action, as the page's change/click handlers would deliver it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// `None` is the empty "Select a planet" choice.
    PlanetChanged { slot: Slot, planet: Option<String> },
    VehicleChanged { slot: Slot, vehicle: Option<String> },
    Submit,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SessionUpdate {
    SelectionChanged { slot: Slot },
    Submitted(SubmissionReport),
}

/// Owns everything the page used to keep in module globals.
pub struct Session<A: FalconeApi> {
    api: A,
    tracker: SelectionTracker,
    last_report: Option<SubmissionReport>,
}

impl<A: FalconeApi> Session<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            tracker: SelectionTracker::default(),
            last_report: None,
        }
    }

    /// Fetch both lists and reset every slot.
    pub async fn load(&mut self) {
        let (planets, vehicles) = DataFetcher::new(&self.api).load_all().await;
        if planets.is_empty() || vehicles.is_empty() {
            tracing::warn!(
                "Catalog incomplete: {} planets, {} vehicles",
                planets.len(),
                vehicles.len()
            );
        }
        self.tracker.reset_catalog(planets, vehicles);
    }

    pub async fn dispatch(&mut self, event: UiEvent) -> Result<SessionUpdate> {
        tracing::debug!("Dispatching {:?}", event);
        match event {
            UiEvent::PlanetChanged { slot, planet } => {
                self.on_planet_changed(slot, planet.as_deref())?;
                Ok(SessionUpdate::SelectionChanged { slot })
            }
            UiEvent::VehicleChanged { slot, vehicle } => {
                self.on_vehicle_changed(slot, vehicle.as_deref())?;
                Ok(SessionUpdate::SelectionChanged { slot })
            }
            UiEvent::Submit => Ok(SessionUpdate::Submitted(self.on_submit().await)),
        }
    }

    pub fn on_planet_changed(&mut self, slot: Slot, planet: Option<&str>) -> Result<()> {
        match planet {
            Some(name) => self.tracker.select_planet(slot, name),
            None => {
                self.tracker.clear_planet(slot);
                Ok(())
            }
        }
    }

    pub fn on_vehicle_changed(&mut self, slot: Slot, vehicle: Option<&str>) -> Result<()> {
        match vehicle {
            Some(name) => self.tracker.select_vehicle(slot, name),
            None => {
                self.tracker.clear_vehicle(slot);
                Ok(())
            }
        }
    }

    /// Exclusive borrow: one submission at a time per session.
    pub async fn on_submit(&mut self) -> SubmissionReport {
        let report = SubmissionFlow::new(&self.api).submit(&self.tracker).await;
        self.last_report = Some(report.clone());
        report
    }

    pub fn tracker(&self) -> &SelectionTracker {
        &self.tracker
    }

    pub fn planets(&self) -> &[Planet] {
        self.tracker.planets()
    }

    pub fn vehicles(&self) -> &[Vehicle] {
        self.tracker.vehicles()
    }

    pub fn last_report(&self) -> Option<&SubmissionReport> {
        self.last_report.as_ref()
    }
}
