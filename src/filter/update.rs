use super::criteria::{FilterCriteria, PriceRange};
use crate::models::PropertyType;
use anyhow::{anyhow, bail, Context, Result};
use std::collections::BTreeSet;
use std::str::FromStr;

/// A new value for exactly one criteria field.
#[derive(Debug, Clone, PartialEq)]
pub enum CriteriaUpdate {
    Query(String),
    Location(String),
    PriceRange { lower: f64, upper: f64 },
    PropertyType(Option<PropertyType>),
    MinRating(f64),
    RequiredAmenities(BTreeSet<String>),
}

/// Field identity, used to keep one staged value per field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CriteriaField {
    Query,
    Location,
    PriceRange,
    PropertyType,
    MinRating,
    RequiredAmenities,
}

impl CriteriaUpdate {
    pub fn field(&self) -> CriteriaField {
        match self {
            CriteriaUpdate::Query(_) => CriteriaField::Query,
            CriteriaUpdate::Location(_) => CriteriaField::Location,
            CriteriaUpdate::PriceRange { .. } => CriteriaField::PriceRange,
            CriteriaUpdate::PropertyType(_) => CriteriaField::PropertyType,
            CriteriaUpdate::MinRating(_) => CriteriaField::MinRating,
            CriteriaUpdate::RequiredAmenities(_) => CriteriaField::RequiredAmenities,
        }
    }

    pub fn apply_to(self, criteria: &mut FilterCriteria) {
        match self {
            CriteriaUpdate::Query(query) => criteria.query = query,
            CriteriaUpdate::Location(location) => criteria.location = location,
            CriteriaUpdate::PriceRange { lower, upper } => {
                criteria.price_range = PriceRange::new(lower, upper)
            }
            CriteriaUpdate::PropertyType(ty) => criteria.property_type = ty,
            CriteriaUpdate::MinRating(rating) => criteria.min_rating = rating,
            CriteriaUpdate::RequiredAmenities(amenities) => {
                criteria.required_amenities = amenities
            }
        }
    }
}

/// Parses `field=value` lines as typed in interactive mode:
///
/// ```text
/// query=loft
/// location=beach
/// price=200..400
/// type=entire        (or `type=` to clear)
/// rating=4.5
/// amenities=Pool,Hot Tub
/// ```
impl FromStr for CriteriaUpdate {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> Result<Self> {
        let (field, value) = line
            .split_once('=')
            .ok_or_else(|| anyhow!("expected field=value, got {:?}", line))?;
        let value = value.trim();

        match field.trim().to_lowercase().as_str() {
            "query" | "q" => Ok(CriteriaUpdate::Query(value.to_string())),
            "location" | "loc" => Ok(CriteriaUpdate::Location(value.to_string())),
            "price" => {
                let (lower, upper) = value
                    .split_once("..")
                    .ok_or_else(|| anyhow!("price must look like LOWER..UPPER, got {:?}", value))?;
                let lower = parse_bound(lower, 0.0).context("invalid lower price bound")?;
                let upper =
                    parse_bound(upper, f64::INFINITY).context("invalid upper price bound")?;
                Ok(CriteriaUpdate::PriceRange { lower, upper })
            }
            "type" | "property_type" => {
                if value.is_empty() || value.eq_ignore_ascii_case("any") {
                    return Ok(CriteriaUpdate::PropertyType(None));
                }
                let ty = PropertyType::from_name(value)
                    .ok_or_else(|| anyhow!("unknown property type {:?}", value))?;
                Ok(CriteriaUpdate::PropertyType(Some(ty)))
            }
            "rating" | "min_rating" => {
                let rating = value
                    .parse::<f64>()
                    .with_context(|| format!("invalid rating {:?}", value))?;
                Ok(CriteriaUpdate::MinRating(rating))
            }
            "amenities" => Ok(CriteriaUpdate::RequiredAmenities(
                value
                    .split(',')
                    .map(str::trim)
                    .filter(|a| !a.is_empty())
                    .map(str::to_string)
                    .collect(),
            )),
            other => bail!("unknown criteria field {:?}", other),
        }
    }
}

fn parse_bound(raw: &str, open: f64) -> Result<f64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(open);
    }
    Ok(raw.parse::<f64>()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_each_field() {
        assert_eq!(
            "query=Loft".parse::<CriteriaUpdate>().unwrap(),
            CriteriaUpdate::Query("Loft".to_string())
        );
        assert_eq!(
            "location = Miami".parse::<CriteriaUpdate>().unwrap(),
            CriteriaUpdate::Location("Miami".to_string())
        );
        assert_eq!(
            "price=200..400".parse::<CriteriaUpdate>().unwrap(),
            CriteriaUpdate::PriceRange {
                lower: 200.0,
                upper: 400.0
            }
        );
        assert_eq!(
            "type=hotel".parse::<CriteriaUpdate>().unwrap(),
            CriteriaUpdate::PropertyType(Some(PropertyType::HotelRoom))
        );
        assert_eq!(
            "type=".parse::<CriteriaUpdate>().unwrap(),
            CriteriaUpdate::PropertyType(None)
        );
        assert_eq!(
            "rating=4.5".parse::<CriteriaUpdate>().unwrap(),
            CriteriaUpdate::MinRating(4.5)
        );

        let expected: BTreeSet<String> =
            ["Pool", "Hot Tub"].iter().map(|s| s.to_string()).collect();
        assert_eq!(
            "amenities=Pool, Hot Tub,".parse::<CriteriaUpdate>().unwrap(),
            CriteriaUpdate::RequiredAmenities(expected)
        );
    }

    #[test]
    fn open_price_bounds_default_to_full_range() {
        assert_eq!(
            "price=..300".parse::<CriteriaUpdate>().unwrap(),
            CriteriaUpdate::PriceRange {
                lower: 0.0,
                upper: 300.0
            }
        );
        assert_eq!(
            "price=150..".parse::<CriteriaUpdate>().unwrap(),
            CriteriaUpdate::PriceRange {
                lower: 150.0,
                upper: f64::INFINITY
            }
        );
    }

    #[test]
    fn rejects_malformed_lines() {
        assert!("loft".parse::<CriteriaUpdate>().is_err());
        assert!("colour=red".parse::<CriteriaUpdate>().is_err());
        assert!("price=300".parse::<CriteriaUpdate>().is_err());
        assert!("rating=high".parse::<CriteriaUpdate>().is_err());
        assert!("type=igloo".parse::<CriteriaUpdate>().is_err());
    }

    #[test]
    fn apply_replaces_only_its_field() {
        let mut criteria = FilterCriteria::default();
        CriteriaUpdate::MinRating(4.0).apply_to(&mut criteria);
        CriteriaUpdate::Query("cabin".to_string()).apply_to(&mut criteria);

        assert_eq!(criteria.min_rating, 4.0);
        assert_eq!(criteria.query, "cabin");
        assert_eq!(criteria.price_range, PriceRange::default());
        assert!(criteria.location.is_empty());
    }
}
