use tracing::trace;
use verbatim_model::Category;

use crate::error::Result;
use crate::patterns::PatternTable;
use crate::rules::{Evidence, Rule, RuleId, Stage, Verdict, standard_rules};

/// Category chosen for a testimonial and the rule that chose it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    pub category: Category,
    pub rule: RuleId,
}

/// Deterministic testimonial classifier.
///
/// Holds the compiled keyword table and the ordered rule list; build it
/// once and reuse it for every testimonial.
#[derive(Debug, Clone)]
pub struct Classifier {
    table: PatternTable,
    rules: Vec<Rule>,
}

impl Classifier {
    /// Classifier over the builtin keyword table.
    pub fn builtin() -> Result<Self> {
        Ok(Self::new(PatternTable::builtin()?))
    }

    pub fn new(table: PatternTable) -> Self {
        Self {
            table,
            rules: standard_rules(),
        }
    }

    pub fn table(&self) -> &PatternTable {
        &self.table
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Classify a testimonial from its disease field and free text.
    ///
    /// Absent values are treated as empty strings; the result is always a
    /// member of the category set.
    pub fn classify(&self, disease: Option<&str>, text: Option<&str>) -> Category {
        self.decide(disease, text).category
    }

    /// Like [`Classifier::classify`], also reporting the rule that fired.
    pub fn decide(&self, disease: Option<&str>, text: Option<&str>) -> Decision {
        let evidence = Evidence::new(&self.table, disease, text);
        let mut skipped: Option<Stage> = None;
        for rule in &self.rules {
            if skipped == Some(rule.stage) {
                continue;
            }
            match rule.evaluate(&self.table, &evidence) {
                Verdict::Accept => {
                    trace!(rule = %rule.id, category = %rule.category, "rule accepted");
                    return Decision {
                        category: rule.category,
                        rule: rule.id,
                    };
                }
                Verdict::SkipStage => skipped = Some(rule.stage),
                Verdict::Pass => {}
            }
        }
        Decision {
            category: Category::Other,
            rule: RuleId::Default,
        }
    }
}
