use crate::core::submission::SubmissionReport;
use crate::core::tracker::SelectionTracker;
use crate::domain::model::Slot;
use std::fmt::Write;

pub fn render_planet_options(tracker: &SelectionTracker, slot: Slot) -> String {
    let mut out = format!("{}: planets\n", slot);
    for option in tracker.planet_options(slot) {
        let marker = if option.selected {
            "*"
        } else if option.disabled {
            "x"
        } else {
            " "
        };
        let _ = writeln!(out, "  [{}] {} ({})", marker, option.name, option.distance);
    }
    out
}

pub fn render_vehicle_options(tracker: &SelectionTracker, slot: Slot) -> String {
    let mut out = format!("{}: vehicles\n", slot);
    let options = tracker.offered_vehicles(slot);
    if options.is_empty() {
        out.push_str("  (choose a planet first)\n");
        return out;
    }
    for option in options {
        let marker = if option.selected { "(o)" } else { "( )" };
        let _ = writeln!(out, "  {} {}", marker, option.label());
    }
    out
}

/// What `--list` prints.
pub fn render_catalog(tracker: &SelectionTracker) -> String {
    let mut out = String::from("Planets:\n");
    for planet in tracker.planets() {
        let _ = writeln!(out, "  {:<12} distance {}", planet.name, planet.distance);
    }
    out.push_str("Vehicles:\n");
    for vehicle in tracker.vehicles() {
        let _ = writeln!(
            out,
            "  {:<14} {} available, max distance {}, speed {}",
            vehicle.name, vehicle.total_no, vehicle.max_distance, vehicle.speed
        );
    }
    out
}

/// The two output regions: estimated time, then the result text.
pub fn render_report(report: &SubmissionReport) -> String {
    format!(
        "Time taken: {}\n{}",
        report.estimated_time,
        report.outcome.message()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::submission::{SubmissionOutcome, SubmissionState};
    use crate::domain::model::{Planet, Vehicle};

    fn tracker() -> SelectionTracker {
        SelectionTracker::new(
            vec![
                Planet {
                    name: "Donlon".to_string(),
                    distance: 100.0,
                },
                Planet {
                    name: "Enchai".to_string(),
                    distance: 200.0,
                },
            ],
            vec![
                Vehicle {
                    name: "Space rocket".to_string(),
                    total_no: 1,
                    max_distance: 300.0,
                    speed: 4.0,
                },
                Vehicle {
                    name: "Space ship".to_string(),
                    total_no: 2,
                    max_distance: 600.0,
                    speed: 10.0,
                },
            ],
        )
    }

    #[test]
    fn test_planet_markers() {
        let mut t = tracker();
        t.select_planet(Slot::One, "Donlon").unwrap();

        let own = render_planet_options(&t, Slot::One);
        assert!(own.contains("[*] Donlon (100)"));

        let other = render_planet_options(&t, Slot::Two);
        assert!(other.contains("[x] Donlon"));
        assert!(other.contains("[ ] Enchai"));
    }

    #[test]
    fn test_exhausted_vehicle_hidden() {
        let mut t = tracker();
        assert!(render_vehicle_options(&t, Slot::One).contains("choose a planet first"));

        t.select_planet(Slot::One, "Donlon").unwrap();
        t.select_planet(Slot::Two, "Enchai").unwrap();
        t.select_vehicle(Slot::One, "Space rocket").unwrap();

        let own = render_vehicle_options(&t, Slot::One);
        assert!(own.contains("(o) Space rocket (0 available)"));

        let other = render_vehicle_options(&t, Slot::Two);
        assert!(!other.contains("Space rocket"));
        assert!(other.contains("( ) Space ship (2 available)"));
    }

    #[test]
    fn test_report_regions() {
        let report = SubmissionReport {
            planet_names: vec!["Donlon".to_string()],
            vehicle_names: vec!["Space ship".to_string()],
            estimated_time: 10.0,
            outcome: SubmissionOutcome::Found {
                planet_name: "Donlon".to_string(),
            },
            state: SubmissionState::Success,
        };
        assert_eq!(
            render_report(&report),
            "Time taken: 10\nSuccess! Falcone found on planet Donlon."
        );
    }

    #[test]
    fn test_catalog_lists_everything() {
        let listing = render_catalog(&tracker());
        assert!(listing.contains("Donlon"));
        assert!(listing.contains("Space ship"));
        assert!(listing.contains("2 available"));
    }
}
