//! Data models for the destination catalog
//!
//! - Destination: a travel destination record and its nested sections

pub mod destination;

// Re-export all public types for convenient access
pub use destination::{BestTimeToVisit, Destination, SeoMetadata, TourCategory};
