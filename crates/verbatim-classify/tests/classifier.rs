//! Behavioral tests for the testimonial classifier.

use proptest::prelude::*;

use verbatim_classify::{Classifier, RuleId};
use verbatim_model::Category;

fn classifier() -> Classifier {
    Classifier::builtin().expect("builtin classifier")
}

#[test]
fn disease_field_keywords_are_conclusive() {
    let classifier = classifier();
    let cases = [
        ("Heart Disease", Category::HeartDisease),
        ("Ankylosing Spondylitis", Category::AnkylosingSpondylitis),
        ("Hidradenitis Suppurativa (HS)", Category::HidradenitisSuppurativa),
        ("Plaque Psoriasis", Category::PlaquePsoriasis),
        ("Psoriatic Arthritis", Category::PsoriaticArthritis),
        ("Breast Cancer", Category::BreastCancer),
        ("Sjögren's Syndrome", Category::SjogrensSyndrome),
        ("sjogren's", Category::SjogrensSyndrome),
    ];
    for (disease, expected) in cases {
        assert_eq!(
            classifier.classify(Some(disease), Some("nothing relevant here")),
            expected,
            "disease field {disease:?}"
        );
    }
}

#[test]
fn disease_field_follows_category_priority() {
    // Both spondylitis and heart keywords: the earlier category wins.
    let classifier = classifier();
    let category = classifier.classify(Some("spondylitis with cardiac issues"), None);
    assert_eq!(category, Category::AnkylosingSpondylitis);
}

#[test]
fn generic_psoriasis_with_joint_cue_is_arthritis() {
    let classifier = classifier();
    assert_eq!(
        classifier.classify(Some("Psoriasis"), Some("my joints hurt badly")),
        Category::PsoriaticArthritis
    );
}

#[test]
fn generic_psoriasis_with_skin_cue_is_plaque() {
    let classifier = classifier();
    assert_eq!(
        classifier.classify(Some("Psoriasis"), Some("red scaly patches on skin")),
        Category::PlaquePsoriasis
    );
}

#[test]
fn generic_psoriasis_without_cue_is_other() {
    let classifier = classifier();
    let decision = classifier.decide(Some("Psoriasis"), Some("the new treatment is fine"));
    assert_eq!(decision.category, Category::Other);
    assert_eq!(decision.rule, RuleId::UnresolvedGenericMention);
}

#[test]
fn generic_mention_is_case_insensitive_and_trimmed() {
    let classifier = classifier();
    assert_eq!(
        classifier.classify(Some("  pSoRiAsIs "), Some("arthritis in my knees")),
        Category::PsoriaticArthritis
    );
}

#[test]
fn generic_psoriasis_prefers_arthritis_when_both_cues_present() {
    let classifier = classifier();
    assert_eq!(
        classifier.classify(Some("Psoriasis"), Some("skin lesions and joint pain")),
        Category::PsoriaticArthritis
    );
}

#[test]
fn generic_psoriasis_can_still_resolve_to_other_text_categories() {
    let classifier = classifier();
    assert_eq!(
        classifier.classify(Some("Psoriasis"), Some("after my heart attack")),
        Category::HeartDisease
    );
}

#[test]
fn text_keywords_classify_when_disease_field_is_unhelpful() {
    let classifier = classifier();
    assert_eq!(
        classifier.classify(Some("Unknown"), Some("recovering from a lumpectomy")),
        Category::BreastCancer
    );
    assert_eq!(
        classifier.classify(None, Some("living with acne inversa")),
        Category::HidradenitisSuppurativa
    );
    assert_eq!(
        classifier.classify(Some(""), Some("my psoriatic arthritis flares")),
        Category::PsoriaticArthritis
    );
    assert_eq!(
        classifier.classify(None, Some("psoriasis vulgaris on elbows")),
        Category::PlaquePsoriasis
    );
}

#[test]
fn sjogren_from_text_needs_dry_symptoms() {
    let classifier = classifier();
    assert_eq!(
        classifier.classify(None, Some("sicca syndrome diagnosis")),
        Category::Other
    );
    assert_eq!(
        classifier.classify(None, Some("sicca syndrome, dry mouth every night")),
        Category::SjogrensSyndrome
    );
}

#[test]
fn absent_inputs_classify_as_other() {
    let classifier = classifier();
    assert_eq!(classifier.classify(None, None), Category::Other);
    assert_eq!(classifier.classify(Some("   "), Some("")), Category::Other);
}

proptest! {
    #[test]
    fn unambiguous_disease_field_ignores_text(text in "\\PC{0,80}") {
        let classifier = classifier();
        prop_assert_eq!(
            classifier.classify(Some("Heart Disease"), Some(&text)),
            Category::HeartDisease
        );
        prop_assert_eq!(
            classifier.classify(Some("Ankylosing Spondylitis"), Some(&text)),
            Category::AnkylosingSpondylitis
        );
    }

    #[test]
    fn classification_is_deterministic(
        disease in proptest::option::of("\\PC{0,30}"),
        text in proptest::option::of("\\PC{0,80}"),
    ) {
        let classifier = classifier();
        let first = classifier.decide(disease.as_deref(), text.as_deref());
        let second = classifier.decide(disease.as_deref(), text.as_deref());
        prop_assert_eq!(first, second);
        prop_assert!(Category::ALL.contains(&first.category));
    }

    #[test]
    fn generic_mention_without_cues_or_keywords_is_other(text in "[0-9 .,!?]{0,60}") {
        let classifier = classifier();
        prop_assert_eq!(
            classifier.classify(Some("Psoriasis"), Some(&text)),
            Category::Other
        );
    }
}
