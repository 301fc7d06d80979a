//! Interactive text prompt.
//!
//! Asks for the traveller's position and a destination, prints the route
//! with a step-by-step breakdown and saves the result. Every failure is
//! reported on the output and ends the session without saving.

use std::io::{self, BufRead, Write};

use tracing::warn;

use crate::domain::{Coordinates, RouteError};
use crate::planner::{RoutePlan, RoutePlanner};
use crate::store::RouteStore;

/// Run one interactive planning session.
///
/// Only I/O errors on `input`/`output` are returned; planning failures are
/// written to `output`.
pub fn run_interactive<R: BufRead, W: Write>(
    planner: &RoutePlanner,
    store: Option<&RouteStore>,
    mut input: R,
    mut output: W,
) -> io::Result<()> {
    writeln!(output, "Enter your current location as 'lat,lon' (example: 19.1509,72.8236)")?;
    let location = prompt(&mut input, &mut output, "Your location (lat,lon): ")?;

    if !location.contains(',') {
        writeln!(output, "Please enter lat,lon format. Exiting.")?;
        return Ok(());
    }
    // Parsing rejects non-finite and out-of-range values
    let Ok(point) = location.parse::<Coordinates>() else {
        writeln!(output, "Invalid coords. Exiting.")?;
        return Ok(());
    };

    let nearest = match planner.nearest_station(point) {
        Ok(nearest) => nearest,
        Err(err) => return report(&mut output, &err),
    };
    writeln!(
        output,
        "Nearest origin station: {} ({:.0} m)",
        nearest.name,
        nearest.distance_km * 1000.0
    )?;

    let destination = prompt(
        &mut input,
        &mut output,
        "Enter destination station name (exact name): ",
    )?;

    let plan = match planner.plan(point, &destination) {
        Ok(plan) => plan,
        Err(err) => return report(&mut output, &err),
    };

    print_plan(&mut output, &plan)?;

    if let Some(store) = store {
        match store.save(&plan.summary()) {
            Ok(()) => writeln!(output, "Saved last route to {}", store.path().display())?,
            Err(err) => {
                warn!(error = %err, "Failed to save route");
                writeln!(output, "Could not save route: {err}")?;
            }
        }
    }

    Ok(())
}

/// Print `message`, then read one trimmed line.
fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W, message: &str) -> io::Result<String> {
    write!(output, "{message}")?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn report<W: Write>(output: &mut W, err: &RouteError) -> io::Result<()> {
    let message = match err {
        RouteError::EmptyCatalog => "No stations loaded. Check the station data. Exiting.".to_string(),
        RouteError::UnknownStation(name) => {
            format!("Destination '{name}' not found in station data. Exiting.")
        }
        RouteError::NotOnNetwork(name) => format!(
            "{name} is not connected to the network (check line definitions and station data). Exiting."
        ),
        RouteError::NoPath { from, to } => {
            format!("No path found from {from} to {to} (network incomplete).")
        }
    };
    writeln!(output, "{message}")
}

/// Write the route, totals and step-by-step segments.
pub fn print_plan<W: Write>(output: &mut W, plan: &RoutePlan) -> io::Result<()> {
    writeln!(output)?;
    writeln!(output, "=== ROUTE ===")?;
    writeln!(output, "{}", plan.path.stations.join(" -> "))?;
    writeln!(
        output,
        "Distance: {:.2} km   Time approx: {:.0} min   Fare: \u{20b9}{}",
        plan.distance_km(),
        plan.time_min,
        plan.fare_inr
    )?;
    writeln!(output)?;

    writeln!(output, "Step-by-step:")?;
    for segment in &plan.segments {
        if segment.stops() == 0 {
            writeln!(output, " - You are already at {}", segment.to())?;
            continue;
        }
        writeln!(
            output,
            " - Take {} from {} to {} ({} stops, ~{:.2} km)",
            segment.line,
            segment.from(),
            segment.to(),
            segment.stops(),
            segment.distance_km
        )?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Station;
    use crate::lines::LineDefinitionsBuilder;
    use crate::planner::PlannerConfig;
    use crate::stations::StationCatalog;
    use std::io::Cursor;

    fn planner() -> RoutePlanner {
        let mut catalog = StationCatalog::new();
        catalog.insert("Versova", Station::new(Coordinates::new(19.1309, 72.8185), ["L1"]));
        catalog.insert(
            "Andheri",
            Station::new(Coordinates::new(19.1197, 72.8468), ["L1", "L2A"]),
        );
        catalog.insert("Borivali", Station::new(Coordinates::new(19.2307, 72.8567), ["L2A"]));
        catalog.insert("Gorai", Station::new(Coordinates::new(19.2450, 72.7950), ["X"]));
        catalog.insert("Manori", Station::new(Coordinates::new(19.2200, 72.7850), ["X"]));

        let lines = LineDefinitionsBuilder::new()
            .line("L1", &["Versova", "Andheri"])
            .line("L2A", &["Borivali", "Andheri"])
            .line("X", &["Gorai", "Manori"])
            .build();

        RoutePlanner::new(catalog, &lines, PlannerConfig::default())
    }

    fn run(input: &str, store: Option<&RouteStore>) -> String {
        let mut out = Vec::new();
        run_interactive(&planner(), store, Cursor::new(input), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn full_session_saves_route() {
        let dir = tempfile::tempdir().unwrap();
        let store = RouteStore::in_dir(dir.path());

        let out = run("19.1309,72.8185\nBorivali\n", Some(&store));

        assert!(out.contains("Nearest origin station: Versova (0 m)"), "{out}");
        assert!(out.contains("Versova -> Andheri -> Borivali"), "{out}");
        assert!(out.contains(" - Take L1 from Versova to Andheri (1 stops,"), "{out}");
        assert!(out.contains(" - Take L2A from Andheri to Borivali (1 stops,"), "{out}");
        assert!(out.contains("Saved last route to"), "{out}");

        let saved = store.load().unwrap();
        assert_eq!(saved.origin, "Versova");
        assert_eq!(saved.destination, "Borivali");
        assert_eq!(saved.path, vec!["Versova", "Andheri", "Borivali"]);
    }

    #[test]
    fn missing_comma() {
        let out = run("19.1309 72.8185\n", None);
        assert!(out.contains("Please enter lat,lon format. Exiting."));
        assert!(!out.contains("Nearest origin station"));
    }

    #[test]
    fn invalid_coordinates() {
        let out = run("north,east\n", None);
        assert!(out.contains("Invalid coords. Exiting."));
    }

    #[test]
    fn non_finite_and_out_of_range_coordinates() {
        for input in ["nan,nan\nVersova\n", "inf,72.8\nVersova\n", "95.0,72.8\nVersova\n"] {
            let out = run(input, None);
            assert!(out.contains("Invalid coords. Exiting."), "{out}");
            assert!(!out.contains("Nearest origin station"), "{out}");
        }
    }

    #[test]
    fn unknown_destination_saves_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let store = RouteStore::in_dir(dir.path());

        let out = run("19.1309,72.8185\nAtlantis\n", Some(&store));

        assert!(out.contains("Destination 'Atlantis' not found in station data. Exiting."));
        assert!(!out.contains("=== ROUTE ==="));
        assert!(store.load().is_none());
    }

    #[test]
    fn no_path() {
        let out = run("19.1309,72.8185\nGorai\n", None);
        assert!(out.contains("No path found from Versova to Gorai"), "{out}");
    }

    #[test]
    fn already_at_destination() {
        let out = run("19.1309,72.8185\nVersova\n", None);
        assert!(out.contains("Distance: 0.00 km   Time approx: 0 min"), "{out}");
        assert!(out.contains("You are already at Versova"), "{out}");
        assert!(!out.contains("Take "), "{out}");
    }

    #[test]
    fn empty_catalog() {
        let empty = RoutePlanner::new(
            StationCatalog::new(),
            &LineDefinitionsBuilder::new().build(),
            PlannerConfig::default(),
        );
        let mut out = Vec::new();
        run_interactive(&empty, None, Cursor::new("19.1,72.8\n"), &mut out).unwrap();

        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("No stations loaded"));
    }
}
