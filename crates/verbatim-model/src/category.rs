//! Disease categories assignable to a testimonial.
//!
//! The set is closed: every classified testimonial carries exactly one of
//! these labels, and the catch-all [`Category::Other`] is used whenever no
//! specific category can be established.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ParseCategoryError;

/// Disease category of a patient testimonial.
///
/// Variant order is priority order: when several categories could apply,
/// the earlier one wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum Category {
    AnkylosingSpondylitis,
    HidradenitisSuppurativa,
    /// Skin variant of the psoriasis group.
    PlaquePsoriasis,
    /// Joint variant of the psoriasis group.
    PsoriaticArthritis,
    BreastCancer,
    HeartDisease,
    SjogrensSyndrome,
    /// Catch-all when no specific category is identified.
    Other,
}

impl Category {
    /// All categories in priority order, catch-all last.
    pub const ALL: [Category; 8] = [
        Category::AnkylosingSpondylitis,
        Category::HidradenitisSuppurativa,
        Category::PlaquePsoriasis,
        Category::PsoriaticArthritis,
        Category::BreastCancer,
        Category::HeartDisease,
        Category::SjogrensSyndrome,
        Category::Other,
    ];

    /// Returns the label written into the `classification` field.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::AnkylosingSpondylitis => "Ankylosing Spondylitis",
            Category::HidradenitisSuppurativa => "Hidradenitis Suppurativa",
            Category::PlaquePsoriasis => "Plaque Psoriasis",
            Category::PsoriaticArthritis => "Psoriatic Arthritis",
            Category::BreastCancer => "Breast Cancer",
            Category::HeartDisease => "Heart Disease",
            Category::SjogrensSyndrome => "Sjögren's Syndrome",
            Category::Other => "Other",
        }
    }

    /// Returns true for the two psoriasis variants that a generic
    /// "psoriasis" mention has to be refined into.
    pub fn is_refinable(&self) -> bool {
        matches!(
            self,
            Category::PlaquePsoriasis | Category::PsoriaticArthritis
        )
    }

    pub fn is_catch_all(&self) -> bool {
        matches!(self, Category::Other)
    }

    /// Specific categories in priority order (everything except the catch-all).
    pub fn specific() -> impl Iterator<Item = Category> {
        Category::ALL.into_iter().filter(|c| !c.is_catch_all())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ParseCategoryError;

    /// Parse a category label (trimmed, case-insensitive).
    ///
    /// The ASCII spelling "Sjogren's Syndrome" is accepted as well.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        if normalized == "sjogren's syndrome" {
            return Ok(Category::SjogrensSyndrome);
        }
        Category::ALL
            .into_iter()
            .find(|category| category.as_str().to_lowercase() == normalized)
            .ok_or_else(|| ParseCategoryError {
                value: s.to_string(),
            })
    }
}

impl TryFrom<String> for Category {
    type Error = ParseCategoryError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Category> for &'static str {
    fn from(category: Category) -> Self {
        category.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_round_trip_through_from_str() {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>().unwrap(), category);
        }
    }

    #[test]
    fn from_str_is_case_insensitive_and_trimmed() {
        assert_eq!(
            "  heart disease ".parse::<Category>().unwrap(),
            Category::HeartDisease
        );
        assert_eq!(
            "SJOGREN'S SYNDROME".parse::<Category>().unwrap(),
            Category::SjogrensSyndrome
        );
    }

    #[test]
    fn from_str_rejects_unknown_labels() {
        let err = "Migraine".parse::<Category>().unwrap_err();
        assert_eq!(err.value, "Migraine");
    }

    #[test]
    fn catch_all_is_last_and_excluded_from_specific() {
        assert_eq!(Category::ALL.last(), Some(&Category::Other));
        assert!(Category::specific().all(|c| !c.is_catch_all()));
        assert_eq!(Category::specific().count(), 7);
    }
}
