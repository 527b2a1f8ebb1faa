//! `destinations` - static travel destination catalog
//!
//! Destination records (descriptive copy, SEO metadata, best time to visit,
//! tour categories) compiled into the binary, plus the lookup and filter
//! queries used by pages that render them.
//!
//! ```
//! let aruba = destinations::get_destination_by_id("aruba").unwrap();
//! assert_eq!(aruba.category, "Caribbean");
//!
//! let related = destinations::get_related_destinations("aruba");
//! assert!(related.iter().all(|d| d.category == "Caribbean" && d.id != "aruba"));
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;

// Re-export core types for public API
pub use catalog::{CatalogLoader, DestinationCatalog};
pub use config::CatalogConfig;
pub use error::CatalogError;
pub use models::{BestTimeToVisit, Destination, SeoMetadata, TourCategory};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, CatalogError>;

// Ergonomic functions over the embedded catalog.

/// Destination with the given id, if any
#[must_use]
pub fn get_destination_by_id(id: &str) -> Option<&'static Destination> {
    DestinationCatalog::embedded().get_by_id(id)
}

/// Every destination in declared order
#[must_use]
pub fn get_all_destinations() -> &'static [Destination] {
    DestinationCatalog::embedded().all()
}

/// Other destinations in the same category, sorted by name
#[must_use]
pub fn get_related_destinations(id: &str) -> Vec<&'static Destination> {
    DestinationCatalog::embedded().related(id)
}

/// Destinations for the given ids, in input order, unknown ids dropped
#[must_use]
pub fn get_destinations_by_ids<I>(ids: I) -> Vec<&'static Destination>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    DestinationCatalog::embedded().by_ids(ids)
}

/// Destinations in a country, in catalog order
#[must_use]
pub fn get_destinations_by_country(
    country: Option<&str>,
    exclude_id: Option<&str>,
) -> Vec<&'static Destination> {
    DestinationCatalog::embedded().by_country(country, exclude_id)
}

/// Destinations in a category, sorted by name
#[must_use]
pub fn get_destinations_by_category(category: Option<&str>) -> Vec<&'static Destination> {
    DestinationCatalog::embedded().by_category(category)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_free_functions_use_embedded_catalog() {
        assert_eq!(get_all_destinations().len(), DestinationCatalog::embedded().len());
        assert!(get_destination_by_id("aruba").is_some());
        assert!(get_destinations_by_ids(None::<&str>).is_empty());
    }
}
