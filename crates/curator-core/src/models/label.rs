use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A human-supplied label: question → chosen answer, in submission order.
///
/// Only the first entry decides class membership, so insertion order is part
/// of the value and survives serialization in both directions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Label {
    entries: Vec<(String, String)>,
}

impl Label {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the answer for a question. An existing question keeps its position.
    pub fn insert(&mut self, question: impl Into<String>, answer: impl Into<String>) {
        let question = question.into();
        let answer = answer.into();
        match self.entries.iter_mut().find(|(q, _)| *q == question) {
            Some(entry) => entry.1 = answer,
            None => self.entries.push((question, answer)),
        }
    }

    /// Builder-style [`Label::insert`].
    pub fn with(mut self, question: impl Into<String>, answer: impl Into<String>) -> Self {
        self.insert(question, answer);
        self
    }

    pub fn first(&self) -> Option<(&str, &str)> {
        self.entries
            .first()
            .map(|(q, a)| (q.as_str(), a.as_str()))
    }

    /// The class tag: the answer of the first entry.
    pub fn class_tag(&self) -> Option<&str> {
        self.first().map(|(_, answer)| answer)
    }

    pub fn get(&self, question: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(q, _)| q == question)
            .map(|(_, a)| a.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(q, a)| (q.as_str(), a.as_str()))
    }
}

impl<Q: Into<String>, A: Into<String>> FromIterator<(Q, A)> for Label {
    fn from_iter<I: IntoIterator<Item = (Q, A)>>(iter: I) -> Self {
        let mut label = Label::new();
        for (q, a) in iter {
            label.insert(q, a);
        }
        label
    }
}

impl Serialize for Label {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (q, a) in &self.entries {
            map.serialize_entry(q, a)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Label {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct LabelVisitor;

        impl<'de> Visitor<'de> for LabelVisitor {
            type Value = Label;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of question to answer")
            }

            fn visit_map<M: MapAccess<'de>>(self, mut access: M) -> Result<Label, M::Error> {
                let mut label = Label::new();
                while let Some((q, a)) = access.next_entry::<String, String>()? {
                    label.insert(q, a);
                }
                Ok(label)
            }
        }

        deserializer.deserialize_map(LabelVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_entry_is_class_tag() {
        let label = Label::new().with("style", "Baroque").with("subject", "Portrait");
        assert_eq!(label.class_tag(), Some("Baroque"));
    }

    #[test]
    fn reinsert_keeps_position() {
        let mut label = Label::new().with("a", "1").with("b", "2");
        label.insert("a", "3");
        let entries: Vec<_> = label.iter().collect();
        assert_eq!(entries, vec![("a", "3"), ("b", "2")]);
    }

    #[test]
    fn json_preserves_submission_order() {
        let json = r#"{"zeta":"Z","alpha":"A","mid":"M"}"#;
        let label: Label = serde_json::from_str(json).unwrap();
        assert_eq!(label.class_tag(), Some("Z"));
        assert_eq!(serde_json::to_string(&label).unwrap(), json);
    }

    #[test]
    fn empty_label_has_no_tag() {
        assert_eq!(Label::new().class_tag(), None);
    }
}
