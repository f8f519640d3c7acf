//! Presentation-neutral view of a finished consultation.

use serde::{Deserialize, Serialize};

use super::{Importance, RecommendationOutcome, RecommendationResult, Rule};
use crate::domain::catalog::{find_by_fuzzy_name, Product};

/// Closing notice appended to every fallback.
pub const FALLBACK_NOTICE: &str = "Com base nas suas respostas, podemos recomendar os produtos \
     mais adequados para você. Entre em contato conosco para obter uma recomendação personalizada.";

/// Shown when the service could not be reached at all.
pub const SERVICE_UNREACHABLE_MESSAGE: &str =
    "Não foi possível obter a recomendação da IA. Verifique se o serviço está rodando.";

/// Matched catalog entry, or a placeholder when none matched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ProductSection {
    Details {
        name: String,
        /// Normalised for display; empty when the product has none.
        description: String,
        image_ref: Option<String>,
    },
    ComingSoon,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberedRule {
    /// 1-based.
    pub number: usize,
    pub question_text: String,
    pub answer_text: String,
    pub emphasized: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "items", rename_all = "snake_case")]
pub enum RuleSection {
    Listed(Vec<NumberedRule>),
    Unavailable,
}

/// The only thing a finished consultation offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinalAction {
    Restart,
}

/// Outcome of a consultation, ready to be rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Explanation {
    Recommended {
        product_name: String,
        product: ProductSection,
        rules: RuleSection,
    },
    Fallback {
        message: String,
    },
}

impl Explanation {
    /// Builds the explanation for `outcome`, looking the product up in
    /// `products` by fuzzy name.
    pub fn build(outcome: RecommendationOutcome, products: &[Product]) -> Self {
        match outcome {
            RecommendationOutcome::Recommended(result) => Self::recommended(result, products),
            RecommendationOutcome::Failed { message } => Self::fallback(message),
        }
    }

    pub fn fallback(message: impl Into<String>) -> Self {
        Self::Fallback {
            message: message.into(),
        }
    }

    /// Text input is always closed once a consultation ends.
    pub fn input_enabled(&self) -> bool {
        false
    }

    pub fn actions(&self) -> &'static [FinalAction] {
        &[FinalAction::Restart]
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback { .. })
    }

    fn recommended(result: RecommendationResult, products: &[Product]) -> Self {
        let product = match find_by_fuzzy_name(products, &result.product) {
            Some(found) => ProductSection::Details {
                name: found.name().to_string(),
                description: found.display_description(),
                image_ref: found.image_ref().map(str::to_string),
            },
            None => ProductSection::ComingSoon,
        };

        let rules = match result.rules {
            Some(rules) if !rules.is_empty() => RuleSection::Listed(number_rules(rules)),
            _ => RuleSection::Unavailable,
        };

        Self::Recommended {
            product_name: result.product,
            product,
            rules,
        }
    }
}

fn number_rules(rules: Vec<Rule>) -> Vec<NumberedRule> {
    rules
        .into_iter()
        .enumerate()
        .map(|(i, rule)| NumberedRule {
            number: i + 1,
            question_text: rule.question_text,
            answer_text: rule.answer_text,
            emphasized: rule.importance == Importance::High,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{ProductId, Timestamp};

    fn product(id: u64, name: &str, description: &str, image: Option<&str>) -> Product {
        Product::new(
            ProductId::new(id),
            name,
            description,
            image.map(str::to_string),
            Timestamp::now(),
        )
        .unwrap()
    }

    fn result(product: &str, rules: Option<Vec<Rule>>) -> RecommendationOutcome {
        RecommendationOutcome::Recommended(RecommendationResult {
            product: product.to_string(),
            rules,
        })
    }

    fn rule(question: &str, importance: Importance) -> Rule {
        Rule {
            question_text: question.to_string(),
            answer_text: "sim".to_string(),
            importance,
        }
    }

    #[test]
    fn matched_product_shows_details_with_normalised_description() {
        let catalog = vec![
            product(1, "Outra", "", None),
            product(2, "Máquina X Pro", "Linha 1\\n\\n\\nLinha 2\n", Some("/uploads/x.png")),
        ];
        let explanation = Explanation::build(result("maquina x", None), &catalog);

        let Explanation::Recommended { product_name, product, .. } = explanation else {
            panic!("expected a recommendation");
        };
        assert_eq!(product_name, "maquina x");
        assert_eq!(
            product,
            ProductSection::Details {
                name: "Máquina X Pro".to_string(),
                description: "Linha 1\nLinha 2".to_string(),
                image_ref: Some("/uploads/x.png".to_string()),
            }
        );
    }

    #[test]
    fn unmatched_product_is_coming_soon() {
        let explanation = Explanation::build(result("Inexistente", None), &[product(1, "A", "", None)]);
        assert!(matches!(
            explanation,
            Explanation::Recommended { product: ProductSection::ComingSoon, .. }
        ));
    }

    #[test]
    fn empty_rule_list_is_unavailable() {
        let explanation = Explanation::build(result("X", Some(vec![])), &[]);
        assert!(matches!(
            explanation,
            Explanation::Recommended { rules: RuleSection::Unavailable, .. }
        ));
    }

    #[test]
    fn high_importance_rule_is_emphasized_and_numbered_from_one() {
        let rules = vec![rule("Uso?", Importance::Normal), rule("Volume?", Importance::High)];
        let explanation = Explanation::build(result("X", Some(rules)), &[]);

        let Explanation::Recommended { rules: RuleSection::Listed(items), .. } = explanation else {
            panic!("expected listed rules");
        };
        assert_eq!(items[0].number, 1);
        assert!(!items[0].emphasized);
        assert_eq!(items[1].number, 2);
        assert!(items[1].emphasized);
    }

    #[test]
    fn failure_becomes_fallback_with_restart_only() {
        let explanation = Explanation::build(RecommendationOutcome::failed("offline"), &[]);
        assert_eq!(explanation, Explanation::fallback("offline"));
        assert!(!explanation.input_enabled());
        assert_eq!(explanation.actions(), &[FinalAction::Restart]);
    }
}
