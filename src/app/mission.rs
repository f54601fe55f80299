use crate::app::render;
use crate::config::cli::Assignment;
use crate::core::session::{Session, UiEvent};
use crate::core::submission::SubmissionReport;
use crate::domain::model::{Slot, SLOT_COUNT};
use crate::domain::ports::FalconeApi;
use crate::utils::error::{FalconeError, Result};

/// Drives a `Session` the way a user would: load, pick, submit.
pub struct Mission<A: FalconeApi> {
    session: Session<A>,
}

impl<A: FalconeApi> Mission<A> {
    pub fn new(api: A) -> Self {
        Self {
            session: Session::new(api),
        }
    }

    pub fn session(&self) -> &Session<A> {
        &self.session
    }

    pub async fn load(&mut self) {
        tracing::info!("Loading planets and vehicles...");
        self.session.load().await;
    }

    /// Assignments land in slots 1..=4 in the order given.
    pub async fn apply(&mut self, assignments: &[Assignment]) -> Result<()> {
        if assignments.len() > SLOT_COUNT {
            return Err(FalconeError::TooManyAssignments {
                max: SLOT_COUNT,
                given: assignments.len(),
            });
        }

        for (slot, assignment) in Slot::ALL.into_iter().zip(assignments) {
            self.session
                .dispatch(UiEvent::PlanetChanged {
                    slot,
                    planet: Some(assignment.planet.clone()),
                })
                .await?;
            tracing::debug!(
                "\n{}{}",
                render::render_planet_options(self.session.tracker(), slot),
                render::render_vehicle_options(self.session.tracker(), slot)
            );

            if let Some(vehicle) = &assignment.vehicle {
                self.session
                    .dispatch(UiEvent::VehicleChanged {
                        slot,
                        vehicle: Some(vehicle.clone()),
                    })
                    .await?;
            }
            tracing::info!("{} -> {}", slot, assignment);
        }
        Ok(())
    }

    pub async fn submit(&mut self) -> SubmissionReport {
        tracing::info!("Submitting search...");
        self.session.on_submit().await
    }

    pub async fn run(&mut self, assignments: &[Assignment]) -> Result<SubmissionReport> {
        self.load().await;
        self.apply(assignments).await?;
        Ok(self.submit().await)
    }
}
