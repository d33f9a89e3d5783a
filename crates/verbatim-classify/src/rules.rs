//! Ordered decision rules.
//!
//! Classification walks [`standard_rules`] top to bottom and stops at the
//! first rule that accepts. Rules are grouped in three stages:
//!
//! 1. **Disease field**: category keywords in the disease field are conclusive,
//!    except that a bare "psoriasis" defers the psoriasis pair to stage 2.
//! 2. **Free text**: the psoriasis pair is refined first (arthritis before
//!    plaque), then the remaining categories are searched in priority order.
//!    Sjögren's syndrome additionally needs a dry eye/mouth cue.
//! 3. **Fallback**: an unresolved generic mention and the default both yield
//!    the catch-all category.

use std::fmt;

use verbatim_model::Category;

use crate::patterns::{Cue, PatternTable};

/// Stage a rule belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    DiseaseField,
    FreeText,
    Fallback,
}

/// Stable identifier of a rule, reported with every decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleId {
    /// Category keywords found in the disease field.
    DiseaseKeywords(Category),
    /// Psoriasis subtype selected from the free text.
    TextRefinement(Category),
    /// Category keywords found in the free text.
    TextKeywords(Category),
    /// Disease field said only "psoriasis" and the text did not say which kind.
    UnresolvedGenericMention,
    /// Nothing matched.
    Default,
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleId::DiseaseKeywords(category) => write!(f, "disease-keywords[{category}]"),
            RuleId::TextRefinement(category) => write!(f, "text-refinement[{category}]"),
            RuleId::TextKeywords(category) => write!(f, "text-keywords[{category}]"),
            RuleId::UnresolvedGenericMention => f.write_str("unresolved-generic-mention"),
            RuleId::Default => f.write_str("default"),
        }
    }
}

/// Primary signal a rule looks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// Keywords of the rule's category in the disease field.
    DiseaseKeywords,
    /// Keywords of the rule's category in the free text, or a disease field
    /// that is exactly the generic mention.
    TextKeywordsOrGenericMention,
    /// Keywords of the rule's category in the free text.
    TextKeywords,
    /// Disease field is exactly the generic mention.
    GenericMention,
    Always,
}

/// Secondary signal required before a triggered rule may accept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Corroboration {
    None,
    /// Cue required only when the disease field is the generic mention.
    WhenGeneric(Cue),
    /// Cue always required.
    Always(Cue),
}

/// Normalized inputs of one classification call.
#[derive(Debug, Clone, Copy)]
pub struct Evidence<'a> {
    pub disease: &'a str,
    pub text: &'a str,
    pub generic_mention: bool,
}

impl<'a> Evidence<'a> {
    /// Trim both inputs; absent values become empty strings.
    pub fn new(table: &PatternTable, disease: Option<&'a str>, text: Option<&'a str>) -> Self {
        let disease = disease.map(str::trim).unwrap_or_default();
        let text = text.map(str::trim).unwrap_or_default();
        Self {
            disease,
            text,
            generic_mention: table.is_generic_mention(disease),
        }
    }
}

/// Outcome of evaluating one rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Accept,
    Pass,
    /// Skip the remaining rules of this stage.
    SkipStage,
}

#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub id: RuleId,
    pub stage: Stage,
    pub category: Category,
    pub trigger: Trigger,
    pub corroboration: Corroboration,
    /// A generic mention in the disease field hands over to the next stage
    /// instead of accepting.
    pub defers_on_generic: bool,
}

impl Rule {
    pub fn evaluate(&self, table: &PatternTable, evidence: &Evidence<'_>) -> Verdict {
        let triggered = match self.trigger {
            Trigger::DiseaseKeywords => table.matches(self.category, evidence.disease),
            Trigger::TextKeywordsOrGenericMention => {
                evidence.generic_mention || table.matches(self.category, evidence.text)
            }
            Trigger::TextKeywords => table.matches(self.category, evidence.text),
            Trigger::GenericMention => evidence.generic_mention,
            Trigger::Always => true,
        };
        if !triggered {
            return Verdict::Pass;
        }
        if self.defers_on_generic && evidence.generic_mention {
            return Verdict::SkipStage;
        }
        let corroborated = match self.corroboration {
            Corroboration::None => true,
            Corroboration::WhenGeneric(cue) => {
                !evidence.generic_mention || table.has_cue(cue, evidence.text)
            }
            Corroboration::Always(cue) => table.has_cue(cue, evidence.text),
        };
        if corroborated {
            Verdict::Accept
        } else {
            Verdict::Pass
        }
    }
}

/// The rule list in evaluation order.
pub fn standard_rules() -> Vec<Rule> {
    let mut rules = Vec::new();

    for category in Category::specific() {
        rules.push(Rule {
            id: RuleId::DiseaseKeywords(category),
            stage: Stage::DiseaseField,
            category,
            trigger: Trigger::DiseaseKeywords,
            corroboration: Corroboration::None,
            defers_on_generic: category.is_refinable(),
        });
    }

    for (category, cue) in [
        (Category::PsoriaticArthritis, Cue::Arthritis),
        (Category::PlaquePsoriasis, Cue::Skin),
    ] {
        rules.push(Rule {
            id: RuleId::TextRefinement(category),
            stage: Stage::FreeText,
            category,
            trigger: Trigger::TextKeywordsOrGenericMention,
            corroboration: Corroboration::WhenGeneric(cue),
            defers_on_generic: false,
        });
    }

    for category in Category::specific().filter(|c| !c.is_refinable()) {
        let corroboration = match category {
            Category::SjogrensSyndrome => Corroboration::Always(Cue::DrySymptoms),
            _ => Corroboration::None,
        };
        rules.push(Rule {
            id: RuleId::TextKeywords(category),
            stage: Stage::FreeText,
            category,
            trigger: Trigger::TextKeywords,
            corroboration,
            defers_on_generic: false,
        });
    }

    rules.push(Rule {
        id: RuleId::UnresolvedGenericMention,
        stage: Stage::Fallback,
        category: Category::Other,
        trigger: Trigger::GenericMention,
        corroboration: Corroboration::None,
        defers_on_generic: false,
    });
    rules.push(Rule {
        id: RuleId::Default,
        stage: Stage::Fallback,
        category: Category::Other,
        trigger: Trigger::Always,
        corroboration: Corroboration::None,
        defers_on_generic: false,
    });

    rules
}
