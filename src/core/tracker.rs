use crate::domain::model::{Planet, Slot, SlotSelection, Vehicle, SLOT_COUNT};
use crate::utils::error::{FalconeError, Result};

#[derive(Debug, Clone, PartialEq)]
pub struct PlanetOption {
    pub name: String,
    pub distance: f64,
    pub selected: bool,
    /// Held by some other slot.
    pub disabled: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VehicleOption {
    pub name: String,
    pub remaining: u32,
    pub speed: f64,
    pub max_distance: f64,
    pub selected: bool,
    /// None left, and this slot is not the one holding it.
    pub disabled: bool,
}

impl VehicleOption {
    pub fn label(&self) -> String {
        format!("{} ({} available)", self.name, self.remaining)
    }
}

/// Cross-slot planet exclusivity plus per-vehicle inventory bookkeeping.
///
/// For every vehicle, `total_no` plus the number of slots holding it always
/// equals the count the service reported when the catalog was installed.
#[derive(Debug, Clone, Default)]
pub struct SelectionTracker {
    planets: Vec<Planet>,
    vehicles: Vec<Vehicle>,
    slots: [SlotSelection; SLOT_COUNT],
}

impl SelectionTracker {
    pub fn new(planets: Vec<Planet>, vehicles: Vec<Vehicle>) -> Self {
        Self {
            planets,
            vehicles,
            slots: Default::default(),
        }
    }

    /// Swap in freshly fetched lists. Every slot is cleared.
    pub fn reset_catalog(&mut self, planets: Vec<Planet>, vehicles: Vec<Vehicle>) {
        tracing::debug!(
            "Installing catalog: {} planets, {} vehicles",
            planets.len(),
            vehicles.len()
        );
        self.planets = planets;
        self.vehicles = vehicles;
        self.slots = Default::default();
    }

    pub fn planets(&self) -> &[Planet] {
        &self.planets
    }

    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    pub fn selection(&self, slot: Slot) -> &SlotSelection {
        &self.slots[slot.index()]
    }

    pub fn planet(&self, name: &str) -> Option<&Planet> {
        self.planets.iter().find(|p| p.name == name)
    }

    pub fn vehicle(&self, name: &str) -> Option<&Vehicle> {
        self.vehicles.iter().find(|v| v.name == name)
    }

    fn slot_planet(&self, slot: Slot) -> Option<&Planet> {
        self.slots[slot.index()]
            .planet
            .as_deref()
            .and_then(|name| self.planet(name))
    }

    fn holder_of_planet(&self, name: &str) -> Option<Slot> {
        Slot::ALL
            .into_iter()
            .find(|slot| self.slots[slot.index()].planet.as_deref() == Some(name))
    }

    pub fn select_planet(&mut self, slot: Slot, name: &str) -> Result<()> {
        if self.planet(name).is_none() {
            return Err(FalconeError::UnknownPlanet {
                name: name.to_string(),
            });
        }

        match self.holder_of_planet(name) {
            Some(holder) if holder == slot => return Ok(()),
            Some(holder) => {
                return Err(FalconeError::PlanetTaken {
                    planet: name.to_string(),
                    slot: holder,
                })
            }
            None => {}
        }

        // The vehicle choices for this slot are rebuilt against the new planet.
        self.release_vehicle(slot);
        self.slots[slot.index()].planet = Some(name.to_string());
        tracing::debug!("{} -> planet {}", slot, name);
        Ok(())
    }

    pub fn clear_planet(&mut self, slot: Slot) {
        self.release_vehicle(slot);
        if let Some(previous) = self.slots[slot.index()].planet.take() {
            tracing::debug!("{} released planet {}", slot, previous);
        }
    }

    pub fn select_vehicle(&mut self, slot: Slot, name: &str) -> Result<()> {
        let planet = self
            .slot_planet(slot)
            .cloned()
            .ok_or(FalconeError::NoPlanetSelected { slot })?;

        let index = self
            .vehicles
            .iter()
            .position(|v| v.name == name)
            .ok_or_else(|| FalconeError::UnknownVehicle {
                name: name.to_string(),
            })?;

        let vehicle = &self.vehicles[index];
        if !vehicle.can_reach(&planet) {
            return Err(FalconeError::VehicleOutOfRange {
                vehicle: vehicle.name.clone(),
                planet: planet.name,
                max_distance: vehicle.max_distance,
                distance: planet.distance,
            });
        }

        if self.slots[slot.index()].vehicle.as_deref() == Some(name) {
            return Ok(());
        }

        if vehicle.total_no == 0 {
            return Err(FalconeError::VehicleUnavailable {
                vehicle: name.to_string(),
            });
        }

        self.release_vehicle(slot);
        let vehicle = &mut self.vehicles[index];
        vehicle.total_no -= 1;
        self.slots[slot.index()].vehicle = Some(name.to_string());
        tracing::debug!(
            "{} -> vehicle {} ({} left)",
            slot,
            name,
            self.vehicles[index].total_no
        );
        Ok(())
    }

    pub fn clear_vehicle(&mut self, slot: Slot) {
        self.release_vehicle(slot);
    }

    /// Give the slot's vehicle back to the inventory.
    fn release_vehicle(&mut self, slot: Slot) {
        let Some(previous) = self.slots[slot.index()].vehicle.take() else {
            return;
        };
        match self.vehicles.iter_mut().find(|v| v.name == previous) {
            Some(vehicle) => {
                vehicle.total_no = vehicle.total_no.saturating_add(1);
                tracing::debug!(
                    "{} released vehicle {} ({} left)",
                    slot,
                    previous,
                    vehicle.total_no
                );
            }
            None => tracing::warn!("{} held unknown vehicle {}", slot, previous),
        }
    }

    /// Planet choices for `slot`, rebuilt from all slots on every call.
    pub fn planet_options(&self, slot: Slot) -> Vec<PlanetOption> {
        self.planets
            .iter()
            .map(|planet| {
                let holder = self.holder_of_planet(&planet.name);
                PlanetOption {
                    name: planet.name.clone(),
                    distance: planet.distance,
                    selected: holder == Some(slot),
                    disabled: holder.is_some_and(|h| h != slot),
                }
            })
            .collect()
    }

    /// Vehicles able to reach the slot's planet, empty while no planet is chosen.
    pub fn vehicle_options(&self, slot: Slot) -> Vec<VehicleOption> {
        let Some(planet) = self.slot_planet(slot) else {
            return Vec::new();
        };
        let held = self.slots[slot.index()].vehicle.as_deref();

        self.vehicles
            .iter()
            .filter(|vehicle| vehicle.can_reach(planet))
            .map(|vehicle| {
                let selected = held == Some(vehicle.name.as_str());
                VehicleOption {
                    name: vehicle.name.clone(),
                    remaining: vehicle.total_no,
                    speed: vehicle.speed,
                    max_distance: vehicle.max_distance,
                    selected,
                    disabled: vehicle.total_no == 0 && !selected,
                }
            })
            .collect()
    }

    /// The options a user can actually click: exhausted vehicles are hidden.
    pub fn offered_vehicles(&self, slot: Slot) -> Vec<VehicleOption> {
        self.vehicle_options(slot)
            .into_iter()
            .filter(|option| !option.disabled)
            .collect()
    }

    /// Slots holding both a planet and a vehicle, in slot order.
    pub fn assignments(&self) -> Vec<(Slot, &Planet, &Vehicle)> {
        Slot::ALL
            .into_iter()
            .filter_map(|slot| {
                let selection = &self.slots[slot.index()];
                let planet = self.planet(selection.planet.as_deref()?)?;
                let vehicle = self.vehicle(selection.vehicle.as_deref()?)?;
                Some((slot, planet, vehicle))
            })
            .collect()
    }

    pub fn holders_of(&self, vehicle: &str) -> u32 {
        self.slots
            .iter()
            .filter(|s| s.vehicle.as_deref() == Some(vehicle))
            .count() as u32
    }

    pub fn inventory_total(&self) -> u32 {
        self.vehicles.iter().map(|v| v.total_no).sum()
    }

    pub fn selected_planets(&self) -> Vec<&str> {
        self.slots
            .iter()
            .filter_map(|s| s.planet.as_deref())
            .collect()
    }
}
