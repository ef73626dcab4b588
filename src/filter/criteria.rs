use crate::models::{Listing, PropertyType};
use std::collections::BTreeSet;

/// Inclusive nightly price bounds.
///
/// Bounds are real numbers so a slider can produce fractional values; listing
/// prices are widened to `f64` before comparison. A range with `lower > upper`
/// is accepted and simply matches nothing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceRange {
    pub lower: f64,
    pub upper: f64,
}

impl PriceRange {
    pub fn new(lower: f64, upper: f64) -> Self {
        Self { lower, upper }
    }

    pub fn contains(&self, price: i64) -> bool {
        let price = price as f64;
        price >= self.lower && price <= self.upper
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self {
            lower: 0.0,
            upper: f64::INFINITY,
        }
    }
}

/// The constraints a guest has chosen on the search screen.
///
/// The default value constrains nothing. Values are taken as given: a rating
/// outside 0..=5 or an inverted price range is not rejected here.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterCriteria {
    /// Free text matched against title and location
    pub query: String,
    /// Substring matched against location only
    pub location: String,
    pub price_range: PriceRange,
    pub property_type: Option<PropertyType>,
    pub min_rating: f64,
    /// Every amenity here must be offered by a listing
    pub required_amenities: BTreeSet<String>,
}

impl FilterCriteria {
    /// Whether `listing` passes all six constraints.
    pub fn matches(&self, listing: &Listing) -> bool {
        self.matches_query(listing)
            && self.matches_location(listing)
            && self.price_range.contains(listing.price)
            && self.matches_type(listing)
            && listing.rating >= self.min_rating
            && self.matches_amenities(listing)
    }

    fn matches_query(&self, listing: &Listing) -> bool {
        self.query.is_empty()
            || contains_ignore_case(&listing.title, &self.query)
            || contains_ignore_case(&listing.location, &self.query)
    }

    fn matches_location(&self, listing: &Listing) -> bool {
        self.location.is_empty() || contains_ignore_case(&listing.location, &self.location)
    }

    fn matches_type(&self, listing: &Listing) -> bool {
        self.property_type.map_or(true, |wanted| listing.property_type == wanted)
    }

    fn matches_amenities(&self, listing: &Listing) -> bool {
        self.required_amenities
            .iter()
            .all(|amenity| listing.has_amenity(amenity))
    }

    /// True when no field narrows the listing set.
    pub fn is_unconstrained(&self) -> bool {
        *self == Self::default()
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
