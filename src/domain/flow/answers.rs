//! Answer set accumulated during a flow session.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::domain::foundation::QuestionId;

/// Question id → answer, kept in commit order.
///
/// Serialized as a JSON object keyed by the id's decimal string, which is the
/// shape the recommendation service expects under `respostas`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerSet {
    entries: Vec<(QuestionId, String)>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an answer. Re-answering keeps the original position.
    pub fn insert(&mut self, question_id: QuestionId, answer: impl Into<String>) {
        let answer = answer.into();
        match self.entries.iter_mut().find(|(id, _)| *id == question_id) {
            Some(entry) => entry.1 = answer,
            None => self.entries.push((question_id, answer)),
        }
    }

    pub fn get(&self, question_id: QuestionId) -> Option<&str> {
        self.entries
            .iter()
            .find(|(id, _)| *id == question_id)
            .map(|(_, answer)| answer.as_str())
    }

    pub fn contains(&self, question_id: QuestionId) -> bool {
        self.get(question_id).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (QuestionId, &str)> {
        self.entries.iter().map(|(id, answer)| (*id, answer.as_str()))
    }

    pub fn question_ids(&self) -> Vec<QuestionId> {
        self.entries.iter().map(|(id, _)| *id).collect()
    }
}

impl Serialize for AnswerSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (id, answer) in &self.entries {
            map.serialize_entry(&id.to_string(), answer)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for AnswerSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct AnswerSetVisitor;

        impl<'de> Visitor<'de> for AnswerSetVisitor {
            type Value = AnswerSet;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an object mapping question ids to answers")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<AnswerSet, A::Error> {
                let mut set = AnswerSet::new();
                while let Some((key, answer)) = access.next_entry::<String, String>()? {
                    let id = key.parse::<QuestionId>().map_err(serde::de::Error::custom)?;
                    set.insert(id, answer);
                }
                Ok(set)
            }
        }

        deserializer.deserialize_map(AnswerSetVisitor)
    }
}
