use super::criteria::{FilterCriteria, PriceRange};
use super::pending::PendingCriteria;
use super::update::CriteriaUpdate;
use crate::models::{Listing, PropertyType};
use std::collections::BTreeSet;
use tracing::debug;

/// Owns the canonical listing set and the guest's current criteria, and keeps
/// the visible subset in step with them.
///
/// Every change re-scans the whole set; listing counts are in the tens. The
/// visible subset keeps the canonical order.
#[derive(Debug, Clone)]
pub struct ListingFilter {
    listings: Vec<Listing>,
    criteria: FilterCriteria,
    /// Indices into `listings` of the current result
    visible: Vec<usize>,
}

impl ListingFilter {
    pub fn new(listings: Vec<Listing>) -> Self {
        let mut filter = Self {
            listings,
            criteria: FilterCriteria::default(),
            visible: Vec::new(),
        };
        filter.recompute();
        filter
    }

    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Latest filtered result; does not recompute.
    pub fn current_results(&self) -> Vec<&Listing> {
        self.visible.iter().map(|&i| &self.listings[i]).collect()
    }

    pub fn result_count(&self) -> usize {
        self.visible.len()
    }

    pub fn set_field(&mut self, update: CriteriaUpdate) -> Vec<&Listing> {
        update.apply_to(&mut self.criteria);
        self.recompute();
        self.current_results()
    }

    pub fn reset(&mut self) -> Vec<&Listing> {
        self.criteria = FilterCriteria::default();
        self.recompute();
        self.current_results()
    }

    /// Apply a batch of staged edits with a single re-scan.
    pub fn apply_pending(&mut self, pending: &mut PendingCriteria) -> Vec<&Listing> {
        pending.drain_into(&mut self.criteria);
        self.recompute();
        self.current_results()
    }

    pub fn set_query(&mut self, query: impl Into<String>) -> Vec<&Listing> {
        self.set_field(CriteriaUpdate::Query(query.into()))
    }

    pub fn set_location(&mut self, location: impl Into<String>) -> Vec<&Listing> {
        self.set_field(CriteriaUpdate::Location(location.into()))
    }

    pub fn set_price_range(&mut self, range: PriceRange) -> Vec<&Listing> {
        self.set_field(CriteriaUpdate::PriceRange {
            lower: range.lower,
            upper: range.upper,
        })
    }

    pub fn set_property_type(&mut self, ty: Option<PropertyType>) -> Vec<&Listing> {
        self.set_field(CriteriaUpdate::PropertyType(ty))
    }

    pub fn set_min_rating(&mut self, rating: f64) -> Vec<&Listing> {
        self.set_field(CriteriaUpdate::MinRating(rating))
    }

    pub fn set_required_amenities(&mut self, amenities: BTreeSet<String>) -> Vec<&Listing> {
        self.set_field(CriteriaUpdate::RequiredAmenities(amenities))
    }

    /// Select `ty`, or clear the selection if `ty` is already selected.
    pub fn toggle_property_type(&mut self, ty: PropertyType) -> Vec<&Listing> {
        let next = if self.criteria.property_type == Some(ty) {
            None
        } else {
            Some(ty)
        };
        self.set_property_type(next)
    }

    /// Require `amenity`, or stop requiring it if it already is. Names are
    /// compared ignoring case, as when matching listings.
    pub fn toggle_amenity(&mut self, amenity: &str) -> Vec<&Listing> {
        let mut amenities = self.criteria.required_amenities.clone();
        let wanted = amenity.to_lowercase();
        let existing = amenities
            .iter()
            .find(|a| a.to_lowercase() == wanted)
            .cloned();
        match existing {
            Some(existing) => {
                amenities.remove(&existing);
            }
            None => {
                amenities.insert(amenity.to_string());
            }
        }
        self.set_required_amenities(amenities)
    }

    fn recompute(&mut self) {
        let criteria = &self.criteria;
        self.visible = self
            .listings
            .iter()
            .enumerate()
            .filter(|(_, listing)| criteria.matches(listing))
            .map(|(i, _)| i)
            .collect();

        debug!(
            "Filtered {} of {} listings",
            self.visible.len(),
            self.listings.len()
        );
    }
}
