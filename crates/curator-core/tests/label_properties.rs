//! Label ordering properties: the first question answered decides the class,
//! and serialization keeps submission order.

use curator_core::models::Label;
use proptest::prelude::*;

fn entries() -> impl Strategy<Value = Vec<(String, String)>> {
    prop::collection::vec(("[a-e]", "[A-Z][a-z]{0,6}"), 1..8)
}

proptest! {
    #[test]
    fn class_tag_is_first_question_answer(pairs in entries()) {
        let label: Label = pairs.iter().cloned().collect();
        let first_question = &pairs[0].0;
        // A later duplicate question overwrites the answer but keeps the slot.
        let expected = pairs
            .iter()
            .rev()
            .find(|(q, _)| q == first_question)
            .map(|(_, a)| a.as_str());
        prop_assert_eq!(label.class_tag(), expected);
    }

    #[test]
    fn json_keeps_submission_order(pairs in entries()) {
        let label: Label = pairs.iter().cloned().collect();
        let json = serde_json::to_string(&label).unwrap();
        let back: Label = serde_json::from_str(&json).unwrap();
        let before: Vec<_> = label.iter().collect();
        let after: Vec<_> = back.iter().collect();
        prop_assert_eq!(before, after);
    }

    #[test]
    fn duplicate_questions_collapse(pairs in entries()) {
        let label: Label = pairs.iter().cloned().collect();
        let mut distinct: Vec<&str> = pairs.iter().map(|(q, _)| q.as_str()).collect();
        distinct.sort_unstable();
        distinct.dedup();
        prop_assert_eq!(label.len(), distinct.len());
    }
}
