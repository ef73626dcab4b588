use crate::filter::{CriteriaUpdate, FilterCriteria, PendingCriteria, PriceRange};
use crate::models::PropertyType;
use anyhow::{anyhow, Result};
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

/// Search rental listings from the terminal
#[derive(Debug, Parser)]
#[command(name = "stay-scout", version, about)]
pub struct Cli {
    /// JSON file holding an array of listings (defaults to the built-in samples)
    #[arg(long, env = "STAY_SCOUT_LISTINGS")]
    pub listings: Option<PathBuf>,

    /// Text matched against title and location
    #[arg(short, long)]
    pub query: Option<String>,

    /// Text matched against location only
    #[arg(short, long)]
    pub location: Option<String>,

    #[arg(long)]
    pub min_price: Option<f64>,

    #[arg(long)]
    pub max_price: Option<f64>,

    /// entire, private, shared or hotel
    #[arg(long = "type", value_name = "TYPE", value_parser = parse_property_type)]
    pub property_type: Option<PropertyType>,

    #[arg(long)]
    pub min_rating: Option<f64>,

    /// Required amenity; repeat for several
    #[arg(short, long = "amenity", value_name = "AMENITY")]
    pub amenities: Vec<String>,

    /// Print matching listings as JSON instead of a summary
    #[arg(long)]
    pub json: bool,

    /// Read field=value edits from stdin and print results as they settle
    #[arg(short, long)]
    pub interactive: bool,

    /// Quiet period before recomputing in interactive mode
    #[arg(long, env = "STAY_SCOUT_DEBOUNCE_MS", default_value_t = 300)]
    pub debounce_ms: u64,
}

impl Cli {
    pub fn quiescence(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    /// Stage every criteria flag that was given on the command line.
    pub fn pending_criteria(&self) -> PendingCriteria {
        let mut pending = PendingCriteria::new();
        let defaults = FilterCriteria::default();

        if let Some(query) = &self.query {
            pending.stage(CriteriaUpdate::Query(query.clone()));
        }
        if let Some(location) = &self.location {
            pending.stage(CriteriaUpdate::Location(location.clone()));
        }
        if self.min_price.is_some() || self.max_price.is_some() {
            let PriceRange { lower, upper } = defaults.price_range;
            pending.stage(CriteriaUpdate::PriceRange {
                lower: self.min_price.unwrap_or(lower),
                upper: self.max_price.unwrap_or(upper),
            });
        }
        if let Some(ty) = self.property_type {
            pending.stage(CriteriaUpdate::PropertyType(Some(ty)));
        }
        if let Some(rating) = self.min_rating {
            pending.stage(CriteriaUpdate::MinRating(rating));
        }
        if !self.amenities.is_empty() {
            pending.stage(CriteriaUpdate::RequiredAmenities(
                self.amenities.iter().cloned().collect(),
            ));
        }

        pending
    }
}

fn parse_property_type(raw: &str) -> Result<PropertyType> {
    PropertyType::from_name(raw).ok_or_else(|| anyhow!("unknown property type {:?}", raw))
}
