//! Keyword table used by the classifier.
//!
//! Every category owns an ordered list of case-insensitive patterns that are
//! searched anywhere in the disease field or the free text. The table also
//! names the generic "psoriasis" mention, which is not a category of its own
//! but triggers refinement, and holds the corroboration cues that refinement
//! needs.
//!
//! The table is compiled once with [`PatternTable::builtin`] and shared by
//! every classification call.

use regex::{Regex, RegexBuilder};
use verbatim_model::Category;

use crate::error::{PatternError, Result};

/// Keywords per category, in category priority order.
const CATEGORY_KEYWORDS: &[(Category, &[&str])] = &[
    (
        Category::AnkylosingSpondylitis,
        &["ankylosing", "spondylitis", "bamboo spine"],
    ),
    (
        Category::HidradenitisSuppurativa,
        &["hidradenitis", "suppurativa", r"\bhs\b", "acne inversa"],
    ),
    (
        Category::PlaquePsoriasis,
        &["plaque psoriasis", "psoriasis vulgaris"],
    ),
    (
        Category::PsoriaticArthritis,
        &["psoriatic arthritis", r"\bpsa\b"],
    ),
    (
        Category::BreastCancer,
        &[
            "breast cancer",
            "mastectomy",
            "lumpectomy",
            r"\bbrca\b",
            r"\bbc\b",
            "triple negative",
        ],
    ),
    (
        Category::HeartDisease,
        &[
            "heart disease",
            "cardiac",
            "cardiovascular",
            "heart attack",
            "heart failure",
            "myocardial infarction",
            "angina",
            "atrial fibrillation",
            "afib",
            "bypass",
            "stent",
            "congestive heart failure",
            "chf",
            "arrhythmia",
            "coronary artery",
        ],
    ),
    (
        Category::SjogrensSyndrome,
        &["sjögren's", "sjogren's", "sicca syndrome"],
    ),
];

/// Disease-field value that names psoriasis without its subtype.
pub const GENERIC_MENTION_TERM: &str = "psoriasis";

/// Secondary text signals required to accept a tentative classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cue {
    /// Joint involvement, selects the arthritis variant of psoriasis.
    Arthritis,
    /// Skin involvement, selects the plaque variant of psoriasis.
    Skin,
    /// Dry eye or dry mouth, required for Sjögren's syndrome from text.
    DrySymptoms,
}

impl Cue {
    pub const ALL: [Cue; 3] = [Cue::Arthritis, Cue::Skin, Cue::DrySymptoms];

    pub fn name(&self) -> &'static str {
        match self {
            Cue::Arthritis => "arthritis cue",
            Cue::Skin => "skin cue",
            Cue::DrySymptoms => "dry symptom cue",
        }
    }

    fn source(&self) -> &'static str {
        match self {
            Cue::Arthritis => "joint|arthritis",
            Cue::Skin => "skin|plaque|scale|lesion",
            Cue::DrySymptoms => "dry eye|dry mouth",
        }
    }
}

/// Compiled keyword list owned by one category.
#[derive(Debug, Clone)]
pub struct CategoryPatterns {
    pub category: Category,
    sources: &'static [&'static str],
    matchers: Vec<Regex>,
}

impl CategoryPatterns {
    /// Keyword sources as written in the table.
    pub fn sources(&self) -> &'static [&'static str] {
        self.sources
    }

    /// True if any keyword occurs anywhere in `haystack`.
    pub fn is_match(&self, haystack: &str) -> bool {
        self.matchers.iter().any(|m| m.is_match(haystack))
    }
}

/// The compiled keyword table.
#[derive(Debug, Clone)]
pub struct PatternTable {
    categories: Vec<CategoryPatterns>,
    cues: Vec<(Cue, Regex)>,
}

impl PatternTable {
    /// Compile the builtin keyword table.
    pub fn builtin() -> Result<Self> {
        let mut categories = Vec::with_capacity(CATEGORY_KEYWORDS.len());
        for (category, sources) in CATEGORY_KEYWORDS {
            let matchers = sources
                .iter()
                .map(|source| compile(category.as_str(), source))
                .collect::<Result<Vec<_>>>()?;
            categories.push(CategoryPatterns {
                category: *category,
                sources: *sources,
                matchers,
            });
        }

        let cues = Cue::ALL
            .into_iter()
            .map(|cue| compile(cue.name(), cue.source()).map(|regex| (cue, regex)))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            categories,
            cues,
        })
    }

    /// Category keyword lists in priority order.
    pub fn entries(&self) -> &[CategoryPatterns] {
        &self.categories
    }

    pub fn patterns(&self, category: Category) -> Option<&CategoryPatterns> {
        self.categories.iter().find(|p| p.category == category)
    }

    /// True if a keyword of `category` occurs in `haystack`.
    ///
    /// The catch-all category has no keywords and never matches.
    pub fn matches(&self, category: Category, haystack: &str) -> bool {
        self.patterns(category)
            .is_some_and(|patterns| patterns.is_match(haystack))
    }

    /// True if a normalized disease value is exactly the generic mention.
    pub fn is_generic_mention(&self, disease: &str) -> bool {
        disease.to_lowercase() == GENERIC_MENTION_TERM
    }

    pub fn has_cue(&self, cue: Cue, text: &str) -> bool {
        self.cues
            .iter()
            .find(|(kind, _)| *kind == cue)
            .is_some_and(|(_, regex)| regex.is_match(text))
    }
}

fn compile(owner: &str, source: &str) -> Result<Regex> {
    RegexBuilder::new(source)
        .case_insensitive(true)
        .build()
        .map_err(|source_error| PatternError::Invalid {
            owner: owner.to_string(),
            pattern: source.to_string(),
            source: source_error,
        })
}
