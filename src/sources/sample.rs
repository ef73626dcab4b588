use crate::models::{Coordinates, Host, Listing, PropertyType};
use crate::sources::traits::ListingSource;
use anyhow::Result;
use async_trait::async_trait;
use chrono::{Days, Local, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

/// Amenities offered as checkboxes on the filter sheet
pub const COMMON_AMENITIES: [&str; 12] = [
    "WiFi",
    "Kitchen",
    "Parking",
    "Air Conditioning",
    "Pool",
    "Hot Tub",
    "Gym",
    "Beach Access",
    "Fireplace",
    "Balcony",
    "Workspace",
    "Spa",
];

const CALENDAR_DAYS: u64 = 365;
const DEFAULT_SEED: u64 = 0x5ca1ab1e;

/// The built-in sample listings.
///
/// Availability calendars start at `start` and run for a year, with roughly
/// seven days in ten open. The same seed always yields the same calendars.
#[derive(Debug, Clone)]
pub struct SampleListings {
    start: NaiveDate,
    seed: u64,
}

impl SampleListings {
    pub fn new(start: NaiveDate, seed: u64) -> Self {
        Self { start, seed }
    }

    pub fn build(&self) -> Vec<Listing> {
        let start = self.start;
        let years_ago = |years: u64| {
            start
                .checked_sub_days(Days::new(365 * years))
                .unwrap_or(start)
        };
        let dates = |n: u64| self.available_dates(n);

        vec![
            Listing {
                id: "malibu-oceanfront-villa".to_string(),
                title: "Stunning Oceanfront Villa".to_string(),
                location: "Malibu, California".to_string(),
                price: 450,
                rating: 4.9,
                review_count: 127,
                property_type: PropertyType::EntirePlace,
                amenities: strings(&[
                    "WiFi",
                    "Pool",
                    "Beach Access",
                    "Kitchen",
                    "Parking",
                    "Air Conditioning",
                    "Hot Tub",
                ]),
                max_guests: 8,
                bedrooms: 4,
                bathrooms: 3,
                available_dates: dates(1),
                description: "Wake up to breathtaking ocean views in this luxury villa. Features include a private pool, chef's kitchen, and direct beach access.".to_string(),
                images: strings(&["villa1", "villa2", "villa3", "villa4"]),
                host: Host {
                    name: "Sarah Johnson".to_string(),
                    profile_image: "host1".to_string(),
                    is_superhost: true,
                    join_date: years_ago(3),
                    response_rate: 98,
                    response_time: "within an hour".to_string(),
                },
                coordinates: Coordinates {
                    latitude: 34.0259,
                    longitude: -118.7798,
                },
            },
            Listing {
                id: "nyc-downtown-loft".to_string(),
                title: "Cozy Downtown Loft".to_string(),
                location: "New York, New York".to_string(),
                price: 185,
                rating: 4.7,
                review_count: 89,
                property_type: PropertyType::EntirePlace,
                amenities: strings(&["WiFi", "Kitchen", "Gym", "Workspace", "Air Conditioning"]),
                max_guests: 4,
                bedrooms: 2,
                bathrooms: 1,
                available_dates: dates(2),
                description: "Modern loft in the heart of Manhattan. Walking distance to subway, restaurants, and attractions.".to_string(),
                images: strings(&["loft1", "loft2", "loft3"]),
                host: Host {
                    name: "Mike Chen".to_string(),
                    profile_image: "host2".to_string(),
                    is_superhost: false,
                    join_date: years_ago(2),
                    response_rate: 87,
                    response_time: "within a few hours".to_string(),
                },
                coordinates: Coordinates {
                    latitude: 40.7128,
                    longitude: -74.0060,
                },
            },
            Listing {
                id: "aspen-mountain-cabin".to_string(),
                title: "Mountain Cabin Retreat".to_string(),
                location: "Aspen, Colorado".to_string(),
                price: 320,
                rating: 4.8,
                review_count: 156,
                property_type: PropertyType::EntirePlace,
                amenities: strings(&[
                    "WiFi",
                    "Fireplace",
                    "Hot Tub",
                    "Kitchen",
                    "Parking",
                    "Ski Storage",
                    "Mountain Views",
                ]),
                max_guests: 6,
                bedrooms: 3,
                bathrooms: 2,
                available_dates: dates(3),
                description: "Charming mountain cabin surrounded by nature, with a fireplace, hot tub, and mountain views.".to_string(),
                images: strings(&["cabin1", "cabin2", "cabin3", "cabin4"]),
                host: Host {
                    name: "Jessica Williams".to_string(),
                    profile_image: "host3".to_string(),
                    is_superhost: true,
                    join_date: years_ago(5),
                    response_rate: 99,
                    response_time: "within an hour".to_string(),
                },
                coordinates: Coordinates {
                    latitude: 39.1911,
                    longitude: -106.8175,
                },
            },
            Listing {
                id: "miami-beachfront-apartment".to_string(),
                title: "Beachfront Apartment".to_string(),
                location: "Miami Beach, Florida".to_string(),
                price: 275,
                rating: 4.6,
                review_count: 203,
                property_type: PropertyType::EntirePlace,
                amenities: strings(&[
                    "WiFi",
                    "Beach Access",
                    "Pool",
                    "Gym",
                    "Balcony",
                    "Air Conditioning",
                    "Kitchen",
                ]),
                max_guests: 5,
                bedrooms: 2,
                bathrooms: 2,
                available_dates: dates(4),
                description: "Stylish beachfront apartment with panoramic ocean views, steps from South Beach.".to_string(),
                images: strings(&["beach1", "beach2", "beach3"]),
                host: Host {
                    name: "Carlos Rodriguez".to_string(),
                    profile_image: "host4".to_string(),
                    is_superhost: true,
                    join_date: years_ago(4),
                    response_rate: 95,
                    response_time: "within an hour".to_string(),
                },
                coordinates: Coordinates {
                    latitude: 25.7617,
                    longitude: -80.1918,
                },
            },
            Listing {
                id: "boston-historic-brownstone".to_string(),
                title: "Historic Brownstone".to_string(),
                location: "Boston, Massachusetts".to_string(),
                price: 195,
                rating: 4.5,
                review_count: 67,
                property_type: PropertyType::EntirePlace,
                amenities: strings(&[
                    "WiFi",
                    "Kitchen",
                    "Parking",
                    "Workspace",
                    "Historic Character",
                ]),
                max_guests: 4,
                bedrooms: 2,
                bathrooms: 1,
                available_dates: dates(5),
                description: "Historic brownstone in Back Bay with original hardwood floors and exposed brick.".to_string(),
                images: strings(&["brownstone1", "brownstone2", "brownstone3"]),
                host: Host {
                    name: "Emily Davis".to_string(),
                    profile_image: "host5".to_string(),
                    is_superhost: false,
                    join_date: years_ago(1),
                    response_rate: 82,
                    response_time: "within a day".to_string(),
                },
                coordinates: Coordinates {
                    latitude: 42.3601,
                    longitude: -71.0589,
                },
            },
            Listing {
                id: "scottsdale-desert-oasis".to_string(),
                title: "Desert Oasis".to_string(),
                location: "Scottsdale, Arizona".to_string(),
                price: 380,
                rating: 4.9,
                review_count: 94,
                property_type: PropertyType::EntirePlace,
                amenities: strings(&[
                    "WiFi",
                    "Pool",
                    "Spa",
                    "Kitchen",
                    "Parking",
                    "Air Conditioning",
                    "Desert Views",
                    "Outdoor Shower",
                ]),
                max_guests: 6,
                bedrooms: 3,
                bathrooms: 3,
                available_dates: dates(6),
                description: "Desert retreat with infinity pool and spa, and sunset views over the Sonoran Desert.".to_string(),
                images: strings(&["desert1", "desert2", "desert3", "desert4"]),
                host: Host {
                    name: "David Thompson".to_string(),
                    profile_image: "host6".to_string(),
                    is_superhost: true,
                    join_date: years_ago(6),
                    response_rate: 99,
                    response_time: "within an hour".to_string(),
                },
                coordinates: Coordinates {
                    latitude: 33.4734,
                    longitude: -111.9010,
                },
            },
        ]
    }

    fn available_dates(&self, listing_no: u64) -> Vec<NaiveDate> {
        let mut rng = StdRng::seed_from_u64(self.seed.wrapping_add(listing_no));
        (0..CALENDAR_DAYS)
            .filter_map(|offset| self.start.checked_add_days(Days::new(offset)))
            .filter(|_| rng.gen_range(1..=10) <= 7)
            .collect()
    }
}

impl Default for SampleListings {
    fn default() -> Self {
        Self::new(Local::now().date_naive(), DEFAULT_SEED)
    }
}

#[async_trait]
impl ListingSource for SampleListings {
    async fn load(&self) -> Result<Vec<Listing>> {
        info!("📋 Generating sample listings from {}", self.start);
        Ok(self.build())
    }

    fn source_name(&self) -> &'static str {
        "Sample listings"
    }
}

/// Sample listings with calendars starting today
pub fn sample_listings() -> Vec<Listing> {
    SampleListings::default().build()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
