pub mod criteria;
pub mod engine;
pub mod pending;
pub mod update;

pub use criteria::{FilterCriteria, PriceRange};
pub use engine::ListingFilter;
pub use pending::PendingCriteria;
pub use update::{CriteriaField, CriteriaUpdate};
