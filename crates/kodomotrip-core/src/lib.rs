//! Catalog records and the filter engine for outing spots and events

mod catalog;
mod filter;
mod sample;
mod types;

pub use catalog::{Catalog, CatalogError};
pub use filter::{filter_places, FilterState, Scope, TagFilter};
pub use types::{AgeGroup, Amenity, Category, CrowdLevel, EventPeriod, Place, UnknownTag};
