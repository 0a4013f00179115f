//! Catalog record types and tag enums

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A tag string outside the known set
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} tag {value:?}")]
pub struct UnknownTag {
    pub kind: &'static str,
    pub value: String,
}

/// Place category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Park,
    Indoor,
    Event,
    Museum,
    Shopping,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Park,
        Category::Indoor,
        Category::Event,
        Category::Museum,
        Category::Shopping,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Park => "park",
            Category::Indoor => "indoor",
            Category::Event => "event",
            Category::Museum => "museum",
            Category::Shopping => "shopping",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Park => "公園",
            Category::Indoor => "屋内",
            Category::Event => "イベント",
            Category::Museum => "ミュージアム",
            Category::Shopping => "ショッピング",
        }
    }
}

impl FromStr for Category {
    type Err = UnknownTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownTag {
                kind: "category",
                value: s.to_string(),
            })
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Age group a place is suitable for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgeGroup {
    /// 0-1 years
    #[serde(rename = "0-1")]
    Infant,
    /// 2-3 years
    #[serde(rename = "2-3")]
    Toddler,
    /// 4-6 years
    #[serde(rename = "4-6")]
    Preschool,
}

impl AgeGroup {
    pub const ALL: [AgeGroup; 3] = [AgeGroup::Infant, AgeGroup::Toddler, AgeGroup::Preschool];

    pub fn as_str(&self) -> &'static str {
        match self {
            AgeGroup::Infant => "0-1",
            AgeGroup::Toddler => "2-3",
            AgeGroup::Preschool => "4-6",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AgeGroup::Infant => "0-1歳",
            AgeGroup::Toddler => "2-3歳",
            AgeGroup::Preschool => "4-6歳",
        }
    }
}

impl FromStr for AgeGroup {
    type Err = UnknownTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AgeGroup::ALL
            .into_iter()
            .find(|a| a.as_str() == s)
            .ok_or_else(|| UnknownTag {
                kind: "age group",
                value: s.to_string(),
            })
    }
}

impl fmt::Display for AgeGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CrowdLevel {
    Low,
    Medium,
    High,
}

impl CrowdLevel {
    pub fn label(&self) -> &'static str {
        match self {
            CrowdLevel::Low => "空いている",
            CrowdLevel::Medium => "普通",
            CrowdLevel::High => "混雑",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Amenity {
    Parking,
    DiaperRoom,
    NursingRoom,
    Toilet,
}

impl Amenity {
    pub fn label(&self) -> &'static str {
        match self {
            Amenity::Parking => "駐車場",
            Amenity::DiaperRoom => "おむつ交換台",
            Amenity::NursingRoom => "授乳室",
            Amenity::Toilet => "トイレ",
        }
    }
}

/// Date span of a time-limited event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventPeriod {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl fmt::Display for EventPeriod {
    /// Japanese long form: `2025年4月1日 - 2025年4月7日`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {}",
            self.start.format("%Y年%-m月%-d日"),
            self.end.format("%Y年%-m月%-d日")
        )
    }
}

/// Outing spot or event in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Place {
    pub id: String,
    pub name: String,
    pub category: Category,
    pub suitable_ages: Vec<AgeGroup>,
    pub crowd_level: CrowdLevel,
    pub has_parking: bool,
    pub has_diaper_room: bool,
    pub has_nursing_room: bool,
    pub has_toilet: bool,
    pub location: String,
    pub image_url: String,
    #[serde(default)]
    pub event_period: Option<EventPeriod>,
    pub description: String,
    pub open_hours: String,
    pub rating: f64,
}

impl Place {
    pub fn is_event(&self) -> bool {
        self.event_period.is_some()
    }

    pub fn suits(&self, age: AgeGroup) -> bool {
        self.suitable_ages.contains(&age)
    }

    /// Amenities the place offers, in display order
    pub fn amenities(&self) -> Vec<Amenity> {
        [
            (self.has_parking, Amenity::Parking),
            (self.has_diaper_room, Amenity::DiaperRoom),
            (self.has_nursing_room, Amenity::NursingRoom),
            (self.has_toilet, Amenity::Toilet),
        ]
        .into_iter()
        .filter_map(|(present, amenity)| present.then_some(amenity))
        .collect()
    }

    pub fn ages_label(&self) -> String {
        self.suitable_ages
            .iter()
            .map(AgeGroup::label)
            .collect::<Vec<_>>()
            .join(", ")
    }
}
