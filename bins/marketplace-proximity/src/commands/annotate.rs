//! Annotate command - distance badges and proximity filtering for listings

use super::read_input;
use anyhow::Result;
use marketplace_api_client::endpoints::UsersApi;
use marketplace_api_client::{ClientConfig, MarketplaceClient, ProximityResolver, SellerCache};
use marketplace_core::config::Config;
use marketplace_core::{Error, ResultExt};
use marketplace_geo::{
    address_label, annotate_listings, filter_by_max_distance, get_seller_address, parse_listings,
    sort_by_distance, AnnotatedListing, Coordinate,
};
use owo_colors::OwoColorize;
use std::path::Path;
use tracing::{debug, info};

/// Flags for the annotate command
pub struct Options {
    /// Buyer latitude/longitude, if known
    pub buyer: Option<(f64, f64)>,
    pub max_km: Option<f64>,
    pub sort: bool,
    pub fetch_sellers: bool,
}

/// Run the annotate command
pub async fn run(path: &Path, options: Options, config_path: Option<&Path>, format: &str) -> Result<()> {
    let config = Config::load(config_path)?;
    if let Some(ref p) = config.path {
        debug!(path = %p.display(), "Loaded config");
    }

    let buyer = options
        .buyer
        .map(|(lat, lon)| Coordinate::checked(lat, lon).ok_or_else(|| Error::invalid_coordinate(lat, lon)))
        .transpose()?;

    let max_km = options.max_km.or(config.schema.proximity.max_distance_km);
    let sort = options.sort || config.schema.proximity.sort_by_distance;

    let content = read_input(path)?;
    let listings = parse_listings(&content)
        .map_err(|e| Error::validation(e.to_string()))
        .context(path.display().to_string())
        .with_suggestion("Pass a JSON array of listing objects")?;
    let total = listings.len();

    let resolver = if options.fetch_sellers {
        Some(seller_resolver(&config)?)
    } else {
        None
    };

    let mut annotated = match resolver {
        Some(ref resolver) => {
            let annotated = resolver.annotate_within(buyer.as_ref(), listings, max_km).await;
            info!(sellers = resolver.cache().len(), "Resolved sellers");
            annotated
        }
        None => filter_by_max_distance(annotate_listings(buyer.as_ref(), listings), max_km),
    };

    if sort {
        sort_by_distance(&mut annotated);
    }

    let hidden = total - annotated.len();
    debug!(total, hidden, "Annotated listings");

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&annotated)?);
        return Ok(());
    }

    let mut rows = Vec::with_capacity(annotated.len());
    for item in &annotated {
        let address = match resolver {
            Some(ref resolver) => resolver.seller_address(&item.listing).await,
            None => get_seller_address(&item.listing, None),
        };
        rows.push((item, address_label(address.as_deref())));
    }

    print_table(&rows);
    println!();
    match max_km.filter(|_| hidden > 0) {
        Some(max) => println!("{} listings ({} beyond {} km hidden)", annotated.len(), hidden, max),
        None => println!("{} listings", annotated.len()),
    }
    Ok(())
}

/// Resolver backed by the live users endpoint and the configured cache size
fn seller_resolver(config: &Config) -> Result<ProximityResolver<UsersApi>> {
    let client_config = ClientConfig::from_env_with(&config.schema.api).map_err(Error::from)?;
    let client = MarketplaceClient::with_config(client_config).map_err(Error::from)?;
    let cache = SellerCache::with_capacity(config.schema.seller_cache.max_entries);
    Ok(ProximityResolver::new(client.users(), cache))
}

fn print_table(rows: &[(&AnnotatedListing, String)]) {
    println!("{:<12} {:>14}  {}", "ID".bold(), "DISTANCE".bold(), "ADDRESS".bold());
    for (item, address) in rows {
        let id = item
            .listing
            .id
            .as_ref()
            .map_or_else(|| "-".to_string(), |id| id.as_str().map_or_else(|| id.to_string(), str::to_string));

        if item.distance_km.is_some() {
            println!("{:<12} {:>14}  {}", id, item.distance_label.green(), address);
        } else {
            println!("{:<12} {:>14}  {}", id, item.distance_label.dimmed(), address);
        }
    }
}
