//! Extract command - show the location data found in an entity

use super::read_input;
use anyhow::Result;
use marketplace_core::{Error, ResultExt};
use marketplace_geo::{address_label, extract_address, extract_coordinates};
use owo_colors::OwoColorize;
use serde_json::{json, Value};
use std::path::Path;

/// Run the extract command
pub fn run(path: &Path, format: &str) -> Result<()> {
    let content = read_input(path)?;
    let entity: Value = serde_json::from_str(&content)
        .map_err(Error::from)
        .context(path.display().to_string())?;

    let coordinates = extract_coordinates(&entity);
    let address = extract_address(&entity);

    if format == "json" {
        let output = json!({
            "coordinates": coordinates,
            "address": address,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    match coordinates {
        Some(c) => println!("Coordinates: {}, {}", c.latitude, c.longitude),
        None => println!("Coordinates: {}", "none".dimmed()),
    }
    println!("Address:     {}", address_label(address.as_deref()));
    Ok(())
}
