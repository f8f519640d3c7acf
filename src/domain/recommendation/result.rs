//! Recommendation results and lenient parsing of the service payload.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Message shown when the service reports a failure without saying why.
pub const DEFAULT_FAILURE_MESSAGE: &str = "Não foi possível obter a recomendação.";

/// How much a rule weighed in the decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Importance {
    #[default]
    Normal,
    High,
}

impl Importance {
    /// `"alta"` is high; anything else, including absence, is normal.
    pub fn from_wire(value: Option<&str>) -> Self {
        match value {
            Some("alta") => Importance::High,
            _ => Importance::Normal,
        }
    }
}

/// One question/answer pair that drove the recommendation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    pub question_text: String,
    pub answer_text: String,
    pub importance: Importance,
}

impl Rule {
    /// Reads a rule from a wire object; missing string fields become empty.
    ///
    /// Returns `None` for anything that is not an object.
    pub fn from_value(value: &Value) -> Option<Self> {
        let object = value.as_object()?;
        let text = |key: &str| {
            object
                .get(key)
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string()
        };
        Some(Self {
            question_text: text("pergunta"),
            answer_text: text("resposta"),
            importance: Importance::from_wire(object.get("importancia").and_then(Value::as_str)),
        })
    }
}

/// Product name plus the rules that justify it.
///
/// `rules` is `None` when the service sent nothing list-shaped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationResult {
    pub product: String,
    pub rules: Option<Vec<Rule>>,
}

/// What the recommendation call produced, as far as rendering is concerned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecommendationOutcome {
    Recommended(RecommendationResult),
    Failed { message: String },
}

impl RecommendationOutcome {
    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed {
            message: message.into(),
        }
    }

    /// Interprets a `{ success, produto?, regras?, message? }` payload.
    ///
    /// Never fails: a payload that is not usable becomes `Failed`.
    pub fn from_json(payload: &Value) -> Self {
        let message = payload
            .get("message")
            .and_then(Value::as_str)
            .filter(|m| !m.trim().is_empty());

        if payload.get("success").and_then(Value::as_bool) != Some(true) {
            return Self::failed(message.unwrap_or(DEFAULT_FAILURE_MESSAGE));
        }

        let product = match payload.get("produto").and_then(Value::as_str) {
            Some(name) if !name.trim().is_empty() => name.trim().to_string(),
            _ => return Self::failed(DEFAULT_FAILURE_MESSAGE),
        };

        let rules = payload
            .get("regras")
            .and_then(Value::as_array)
            .map(|entries| entries.iter().filter_map(Rule::from_value).collect());

        Self::Recommended(RecommendationResult { product, rules })
    }
}
