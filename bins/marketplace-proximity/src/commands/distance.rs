//! Distance command - great-circle distance between two points

use anyhow::Result;
use marketplace_core::Error;
use marketplace_geo::{distance_between, distance_label, Coordinate};
use owo_colors::OwoColorize;
use serde_json::json;

/// Run the distance command
pub fn run(lat1: f64, lon1: f64, lat2: f64, lon2: f64, format: &str) -> Result<()> {
    let from = Coordinate::checked(lat1, lon1).ok_or_else(|| Error::invalid_coordinate(lat1, lon1))?;
    let to = Coordinate::checked(lat2, lon2).ok_or_else(|| Error::invalid_coordinate(lat2, lon2))?;

    let distance_km = distance_between(&from, &to);
    let label = distance_label(distance_km);

    if format == "json" {
        let output = json!({
            "from": from,
            "to": to,
            "distanceKm": distance_km,
            "distanceLabel": label,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    match distance_km {
        Some(km) => println!("{} km ({})", km, label.green()),
        None => println!("{}", label.dimmed()),
    }
    Ok(())
}
