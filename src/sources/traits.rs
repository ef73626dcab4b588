use crate::models::Listing;
use anyhow::Result;
use async_trait::async_trait;

/// Anything that can hand the filter engine its canonical listing set.
///
/// Sources are read once at startup; the engine never asks again.
#[async_trait]
pub trait ListingSource: Send + Sync {
    /// Load every listing, in the order results should be shown
    async fn load(&self) -> Result<Vec<Listing>>;

    /// Get the name of the listing source
    fn source_name(&self) -> &'static str;
}
