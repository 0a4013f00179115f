//! Filter engine shared by the outing and event views

use crate::types::{AgeGroup, Category, Place};
use std::fmt;
use std::str::FromStr;

const ALL: &str = "all";

/// A filter selection parsed from a user-facing tag string
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagFilter<T> {
    /// No restriction
    All,
    /// Keep only records carrying this tag
    Only(T),
    /// Tag outside the known set; matches nothing
    Unknown(String),
}

impl<T: FromStr> TagFilter<T> {
    /// Parse `"all"`, a known tag, or anything else (kept as `Unknown`)
    pub fn parse(raw: &str) -> Self {
        if raw == ALL {
            return TagFilter::All;
        }
        match raw.parse() {
            Ok(tag) => TagFilter::Only(tag),
            Err(_) => TagFilter::Unknown(raw.to_string()),
        }
    }
}

impl<T> TagFilter<T> {
    fn admits(&self, check: impl FnOnce(&T) -> bool) -> bool {
        match self {
            TagFilter::All => true,
            TagFilter::Only(tag) => check(tag),
            TagFilter::Unknown(_) => false,
        }
    }
}

impl<T> Default for TagFilter<T> {
    fn default() -> Self {
        TagFilter::All
    }
}

impl<T: fmt::Display> fmt::Display for TagFilter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TagFilter::All => f.write_str(ALL),
            TagFilter::Only(tag) => tag.fmt(f),
            TagFilter::Unknown(raw) => f.write_str(raw),
        }
    }
}

/// Which list a screen shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// Every place in the catalog
    Outing,
    /// Only places with an event period
    Event,
}

/// User-selected filter criteria for one screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    pub age_group: TagFilter<AgeGroup>,
    pub category: TagFilter<Category>,
    /// Reserved; carried for compatibility but never consulted by `filter_places`
    pub date_range: String,
}

impl FilterState {
    pub fn new(age_group: &str, category: &str) -> Self {
        Self {
            age_group: TagFilter::parse(age_group),
            category: TagFilter::parse(category),
            ..Self::default()
        }
    }
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            age_group: TagFilter::All,
            category: TagFilter::All,
            date_range: ALL.to_string(),
        }
    }
}

/// Stable filter over a sequence of places
///
/// Output keeps input order. Accepts any iterator of place references so a
/// previous result can be filtered again.
pub fn filter_places<'a, I>(places: I, state: &FilterState, scope: Scope) -> Vec<&'a Place>
where
    I: IntoIterator<Item = &'a Place>,
{
    places
        .into_iter()
        .filter(|place| scope == Scope::Outing || place.is_event())
        .filter(|place| state.age_group.admits(|&age| place.suits(age)))
        .filter(|place| state.category.admits(|&category| place.category == category))
        .collect()
}
