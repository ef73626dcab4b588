pub mod json_file;
pub mod sample;
pub mod traits;

pub use json_file::JsonFileListings;
pub use sample::{sample_listings, SampleListings, COMMON_AMENITIES};
pub use traits::ListingSource;
