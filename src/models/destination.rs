//! Destination record as stored in the catalog payload

use serde::{Deserialize, Serialize};

/// A single travel destination.
///
/// Only `id` and `name` are required in the payload; every other field falls
/// back to an empty value when a record leaves it out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Destination {
    /// Stable slug, unique across the catalog
    pub id: String,
    /// Short display name
    pub name: String,
    #[serde(default)]
    pub full_name: String,
    /// Coarse grouping label such as a region name. Free-form.
    #[serde(default)]
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default)]
    pub brief_description: String,
    #[serde(default)]
    pub hero_description: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub tour_categories: Vec<TourCategory>,
    #[serde(default)]
    pub seo: SeoMetadata,
    #[serde(default)]
    pub why_visit: Vec<String>,
    #[serde(default)]
    pub best_time_to_visit: BestTimeToVisit,
    #[serde(default)]
    pub getting_around: String,
    #[serde(default)]
    pub highlights: Vec<String>,
    /// Identifiers of guide content kept elsewhere; never resolved here
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_guides: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TourCategory {
    pub name: String,
    #[serde(default)]
    pub has_guide: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SeoMetadata {
    pub title: String,
    pub description: String,
    pub keywords: String,
    pub primary_keyword: String,
    pub secondary_keywords: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BestTimeToVisit {
    pub weather: String,
    pub best_months: String,
    pub peak_season: String,
    pub off_season: String,
}

impl Destination {
    /// Create a destination with only the identifying fields set
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            full_name: String::new(),
            category: category.into(),
            country: None,
            brief_description: String::new(),
            hero_description: String::new(),
            image_url: String::new(),
            tour_categories: Vec::new(),
            seo: SeoMetadata::default(),
            why_visit: Vec::new(),
            best_time_to_visit: BestTimeToVisit::default(),
            getting_around: String::new(),
            highlights: Vec::new(),
            related_guides: None,
        }
    }

    /// Same destination with a country attached
    #[must_use]
    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    /// Country if present and non-empty
    #[must_use]
    pub fn country(&self) -> Option<&str> {
        self.country.as_deref().filter(|c| !c.is_empty())
    }

    /// Tour categories that come with a guide
    pub fn guided_tours(&self) -> impl Iterator<Item = &TourCategory> {
        self.tour_categories.iter().filter(|t| t.has_guide)
    }
}
