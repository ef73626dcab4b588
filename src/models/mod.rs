use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of stay offered by a listing
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum PropertyType {
    #[serde(rename = "Entire place")]
    EntirePlace,
    #[serde(rename = "Private room")]
    PrivateRoom,
    #[serde(rename = "Shared room")]
    SharedRoom,
    #[serde(rename = "Hotel room")]
    HotelRoom,
}

impl PropertyType {
    pub const ALL: [PropertyType; 4] = [
        PropertyType::EntirePlace,
        PropertyType::PrivateRoom,
        PropertyType::SharedRoom,
        PropertyType::HotelRoom,
    ];

    /// Label shown to guests, also used as the serialized form
    pub fn label(self) -> &'static str {
        match self {
            PropertyType::EntirePlace => "Entire place",
            PropertyType::PrivateRoom => "Private room",
            PropertyType::SharedRoom => "Shared room",
            PropertyType::HotelRoom => "Hotel room",
        }
    }

    /// Parse the short names accepted on the command line ("entire", "private", ...)
    /// as well as the full labels, ignoring case.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim().to_lowercase();
        Self::ALL.into_iter().find(|ty| {
            let label = ty.label().to_lowercase();
            label == name || label.split(' ').next() == Some(name.as_str())
        })
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Person renting out a listing
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Host {
    pub name: String,
    pub profile_image: String,
    pub is_superhost: bool,
    pub join_date: NaiveDate,
    /// Percentage of enquiries answered
    pub response_rate: u8,
    pub response_time: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// A rentable property shown in search results.
///
/// Listings are built once when the data source loads and are never mutated
/// afterwards; the filter engine only ever reads them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Listing {
    pub id: String,
    pub title: String,
    pub location: String,
    /// Nightly price in whole currency units
    pub price: i64,
    /// Average guest rating, 0.0 to 5.0
    pub rating: f64,
    pub review_count: u32,
    pub property_type: PropertyType,
    pub amenities: Vec<String>,
    pub max_guests: u32,
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub available_dates: Vec<NaiveDate>,
    pub description: String,
    pub images: Vec<String>,
    pub host: Host,
    pub coordinates: Coordinates,
}

impl Listing {
    pub fn is_available_on(&self, date: NaiveDate) -> bool {
        self.available_dates.contains(&date)
    }

    /// Case-insensitive amenity lookup
    pub fn has_amenity(&self, amenity: &str) -> bool {
        let wanted = amenity.to_lowercase();
        self.amenities.iter().any(|a| a.to_lowercase() == wanted)
    }
}
