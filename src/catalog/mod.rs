//! Destination catalog
//!
//! An immutable, in-memory collection of [`Destination`] records and the
//! lookup and filter queries run against it. Queries never fail: a miss is
//! `None` or an empty list.

pub mod collation;
pub mod loader;

use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::LazyLock;

use tracing::debug;

use crate::Result;
use crate::models::Destination;

pub use collation::compare_names;
pub use loader::CatalogLoader;

/// Destination payload compiled into the binary
pub const EMBEDDED_DATA: &str = include_str!("../../data/destinations.json");

static EMBEDDED: LazyLock<DestinationCatalog> = LazyLock::new(|| {
    DestinationCatalog::from_json(EMBEDDED_DATA).expect("embedded destination data is valid")
});

/// Read-only collection of destinations in declared order
#[derive(Debug, Clone, Default)]
pub struct DestinationCatalog {
    destinations: Vec<Destination>,
}

impl DestinationCatalog {
    /// Wrap records as-is, keeping their order
    #[must_use]
    pub fn new(destinations: Vec<Destination>) -> Self {
        Self { destinations }
    }

    /// Parse a JSON array of destination records
    pub fn from_json(json: &str) -> Result<Self> {
        let destinations: Vec<Destination> = serde_json::from_str(json)?;
        debug!("Parsed {} destinations", destinations.len());
        Ok(Self::new(destinations))
    }

    /// Read and parse a JSON payload file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading destinations from {}", path.display());
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// The catalog compiled into the binary, parsed on first use.
    ///
    /// # Panics
    /// Panics if the embedded payload does not parse. The payload ships with the
    /// crate and is covered by tests.
    #[must_use]
    pub fn embedded() -> &'static DestinationCatalog {
        &EMBEDDED
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.destinations.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.destinations.is_empty()
    }

    /// First destination whose id matches exactly
    #[must_use]
    pub fn get_by_id(&self, id: &str) -> Option<&Destination> {
        self.destinations.iter().find(|d| d.id == id)
    }

    /// Every destination in declared order
    #[must_use]
    pub fn all(&self) -> &[Destination] {
        &self.destinations
    }

    /// Other destinations in the same category as `id`, sorted by name.
    ///
    /// Unknown ids give an empty list.
    #[must_use]
    pub fn related(&self, id: &str) -> Vec<&Destination> {
        let Some(current) = self.get_by_id(id) else {
            return Vec::new();
        };

        let mut related: Vec<&Destination> = self
            .destinations
            .iter()
            .filter(|d| d.category == current.category && d.id != id)
            .collect();
        sort_by_name(&mut related);
        related
    }

    /// Resolve ids in the order given, silently dropping unknown ones
    #[must_use]
    pub fn by_ids<I>(&self, ids: I) -> Vec<&Destination>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        ids.into_iter()
            .filter_map(|id| self.get_by_id(id.as_ref()))
            .collect()
    }

    /// Destinations in `country`, in catalog order, optionally leaving one out.
    ///
    /// A missing or empty country gives an empty list.
    #[must_use]
    pub fn by_country(&self, country: Option<&str>, exclude_id: Option<&str>) -> Vec<&Destination> {
        let Some(country) = country.filter(|c| !c.is_empty()) else {
            return Vec::new();
        };
        let exclude_id = exclude_id.filter(|id| !id.is_empty());

        self.destinations
            .iter()
            .filter(|d| d.country.as_deref() == Some(country))
            .filter(|d| exclude_id != Some(d.id.as_str()))
            .collect()
    }

    /// Destinations in `category`, sorted by name.
    ///
    /// A missing or empty category gives an empty list.
    #[must_use]
    pub fn by_category(&self, category: Option<&str>) -> Vec<&Destination> {
        let Some(category) = category.filter(|c| !c.is_empty()) else {
            return Vec::new();
        };

        let mut matching: Vec<&Destination> = self
            .destinations
            .iter()
            .filter(|d| d.category == category)
            .collect();
        sort_by_name(&mut matching);
        matching
    }

    /// Distinct categories in order of first appearance
    #[must_use]
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.destinations
            .iter()
            .map(|d| d.category.as_str())
            .filter(|c| seen.insert(*c))
            .collect()
    }

    /// Distinct non-empty countries in order of first appearance
    #[must_use]
    pub fn countries(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.destinations
            .iter()
            .filter_map(Destination::country)
            .filter(|c| seen.insert(*c))
            .collect()
    }

    /// Ids that occur more than once, each reported once
    #[must_use]
    pub fn duplicate_ids(&self) -> Vec<&str> {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for destination in &self.destinations {
            *counts.entry(destination.id.as_str()).or_default() += 1;
        }

        let mut reported = HashSet::new();
        self.destinations
            .iter()
            .map(|d| d.id.as_str())
            .filter(|id| counts[id] > 1 && reported.insert(*id))
            .collect()
    }
}

fn sort_by_name(destinations: &mut [&Destination]) {
    destinations.sort_by(|a, b| compare_names(&a.name, &b.name));
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn catalog() -> DestinationCatalog {
        DestinationCatalog::new(vec![
            Destination::new("st-lucia", "St. Lucia", "Caribbean").with_country("St. Lucia"),
            Destination::new("aruba", "Aruba", "Caribbean").with_country("Aruba"),
            Destination::new("nassau", "Nassau", "Caribbean").with_country("Bahamas"),
            Destination::new("curacao", "Curaçao", "Caribbean"),
            Destination::new("rome", "Rome", "Europe").with_country("Italy"),
            Destination::new("exuma", "Exuma", "Caribbean").with_country("Bahamas"),
            Destination::new("amsterdam", "Amsterdam", "Europe").with_country("Netherlands"),
            Destination::new("florence", "Florence", "Europe").with_country("Italy"),
        ])
    }

    fn ids<'a>(destinations: &[&'a Destination]) -> Vec<&'a str> {
        destinations.iter().map(|d| d.id.as_str()).collect()
    }

    #[rstest]
    fn test_get_by_id(catalog: DestinationCatalog) {
        let aruba = catalog.get_by_id("aruba").unwrap();
        assert_eq!(aruba.name, "Aruba");
        assert!(catalog.get_by_id("nonexistent-place").is_none());
        assert!(catalog.get_by_id("").is_none());
        assert!(catalog.get_by_id("Aruba").is_none());
    }

    #[rstest]
    fn test_all_keeps_declared_order(catalog: DestinationCatalog) {
        let all = catalog.all();
        assert_eq!(all.len(), 8);
        assert_eq!(all[0].id, "st-lucia");
        assert_eq!(all[7].id, "florence");
    }

    #[rstest]
    fn test_related_same_category_sorted(catalog: DestinationCatalog) {
        let related = catalog.related("aruba");
        assert_eq!(ids(&related), vec!["curacao", "exuma", "nassau", "st-lucia"]);
    }

    #[rstest]
    fn test_related_unknown_id_is_empty(catalog: DestinationCatalog) {
        assert!(catalog.related("atlantis").is_empty());
    }

    #[test]
    fn test_related_without_peers_is_empty() {
        let catalog = DestinationCatalog::new(vec![
            Destination::new("reykjavik", "Reykjavik", "Nordic"),
            Destination::new("rome", "Rome", "Europe"),
        ]);
        assert!(catalog.related("reykjavik").is_empty());
    }

    #[rstest]
    fn test_by_ids_preserves_input_order(catalog: DestinationCatalog) {
        let found = catalog.by_ids(["rome", "does-not-exist", "aruba"]);
        assert_eq!(ids(&found), vec!["rome", "aruba"]);
    }

    #[rstest]
    fn test_by_ids_accepts_owned_strings(catalog: DestinationCatalog) {
        let wanted = vec!["exuma".to_string(), "nassau".to_string()];
        assert_eq!(ids(&catalog.by_ids(&wanted)), vec!["exuma", "nassau"]);
    }

    #[rstest]
    fn test_by_ids_absent_input(catalog: DestinationCatalog) {
        assert!(catalog.by_ids(None::<&str>).is_empty());
        assert!(catalog.by_ids(Vec::<String>::new()).is_empty());
    }

    #[rstest]
    fn test_by_country_in_catalog_order(catalog: DestinationCatalog) {
        let bahamas = catalog.by_country(Some("Bahamas"), None);
        assert_eq!(ids(&bahamas), vec!["nassau", "exuma"]);

        let italy = catalog.by_country(Some("Italy"), Some("rome"));
        assert_eq!(ids(&italy), vec!["florence"]);
    }

    #[rstest]
    #[case(None)]
    #[case(Some(""))]
    fn test_by_country_missing_country(catalog: DestinationCatalog, #[case] country: Option<&str>) {
        assert!(catalog.by_country(country, None).is_empty());
    }

    #[rstest]
    fn test_by_country_empty_exclude_is_ignored(catalog: DestinationCatalog) {
        assert_eq!(catalog.by_country(Some("Italy"), Some("")).len(), 2);
    }

    #[rstest]
    fn test_by_category_sorted(catalog: DestinationCatalog) {
        let europe = catalog.by_category(Some("Europe"));
        assert_eq!(ids(&europe), vec!["amsterdam", "florence", "rome"]);
    }

    #[rstest]
    #[case(None)]
    #[case(Some(""))]
    #[case(Some("europe"))]
    fn test_by_category_no_match(catalog: DestinationCatalog, #[case] category: Option<&str>) {
        assert!(catalog.by_category(category).is_empty());
    }

    #[rstest]
    fn test_categories_and_countries(catalog: DestinationCatalog) {
        assert_eq!(catalog.categories(), vec!["Caribbean", "Europe"]);
        assert_eq!(
            catalog.countries(),
            vec!["St. Lucia", "Aruba", "Bahamas", "Italy", "Netherlands"]
        );
    }

    #[test]
    fn test_duplicate_ids_first_match_wins() {
        let catalog = DestinationCatalog::new(vec![
            Destination::new("aruba", "Aruba", "Caribbean"),
            Destination::new("rome", "Rome", "Europe"),
            Destination::new("aruba", "Aruba (old)", "Caribbean"),
            Destination::new("aruba", "Aruba (older)", "Caribbean"),
        ]);

        assert_eq!(catalog.duplicate_ids(), vec!["aruba"]);
        assert_eq!(catalog.get_by_id("aruba").unwrap().name, "Aruba");
    }

    #[rstest]
    fn test_no_duplicates(catalog: DestinationCatalog) {
        assert!(catalog.duplicate_ids().is_empty());
    }

    #[test]
    fn test_from_json_rejects_non_array() {
        assert!(DestinationCatalog::from_json(r#"{ "id": "aruba" }"#).is_err());
    }

    #[test]
    fn test_embedded_catalog_parses() {
        let catalog = DestinationCatalog::embedded();
        assert!(!catalog.is_empty());
        assert!(catalog.duplicate_ids().is_empty());
    }
}
