//! Ordering rules for the question sequence.

use super::Question;
use crate::domain::foundation::QuestionId;

/// Sorts questions by ascending `order`, ties broken by id.
///
/// Ties cannot occur in a consistent store but are tolerated so that the
/// presentation sequence is deterministic for any input.
pub fn sort_by_order(questions: &mut [Question]) {
    questions.sort_by_key(|q| (q.order(), q.id()));
}

/// Finds a stored question already using `order`, ignoring `excluding`.
pub fn find_order_conflict(
    questions: &[Question],
    order: u32,
    excluding: Option<QuestionId>,
) -> Option<&Question> {
    questions
        .iter()
        .filter(|q| Some(q.id()) != excluding)
        .find(|q| q.order() == order)
}

/// First free order counting from 1.
pub fn next_free_order(questions: &[Question]) -> u32 {
    let mut orders: Vec<u32> = questions.iter().map(Question::order).collect();
    orders.sort_unstable();
    orders.dedup();

    let mut candidate = 1;
    for order in orders {
        if order == candidate {
            candidate += 1;
        } else if order > candidate {
            break;
        }
    }
    candidate
}

/// Next id to assign: one past the highest stored id.
pub fn next_question_id(questions: &[Question]) -> QuestionId {
    questions
        .iter()
        .map(Question::id)
        .max()
        .map(|id| id.next())
        .unwrap_or_else(|| QuestionId::new(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::{QuestionDraft, QuestionKind};
    use crate::domain::foundation::Timestamp;

    fn question(id: u64, order: i64) -> Question {
        let draft = QuestionDraft {
            text: format!("Q{}", id),
            kind: QuestionKind::FreeText,
            order,
            options: vec![],
        }
        .validate()
        .unwrap();
        Question::new(QuestionId::new(id), draft, Timestamp::now())
    }

    #[test]
    fn sort_by_order_is_ascending() {
        let mut qs = vec![question(1, 3), question(2, 1), question(3, 2)];
        sort_by_order(&mut qs);
        let orders: Vec<u32> = qs.iter().map(Question::order).collect();
        assert_eq!(orders, vec![1, 2, 3]);
    }

    #[test]
    fn sort_by_order_breaks_ties_by_id() {
        let mut qs = vec![question(5, 1), question(2, 1)];
        sort_by_order(&mut qs);
        assert_eq!(qs[0].id(), QuestionId::new(2));
    }

    #[test]
    fn conflict_is_found_unless_excluded() {
        let qs = vec![question(1, 1), question(2, 2)];
        assert_eq!(find_order_conflict(&qs, 2, None).map(Question::id), Some(QuestionId::new(2)));
        assert!(find_order_conflict(&qs, 2, Some(QuestionId::new(2))).is_none());
        assert!(find_order_conflict(&qs, 3, None).is_none());
    }

    #[test]
    fn next_free_order_fills_first_gap() {
        assert_eq!(next_free_order(&[]), 1);
        assert_eq!(next_free_order(&[question(1, 1), question(2, 2)]), 3);
        assert_eq!(next_free_order(&[question(1, 1), question(2, 3)]), 2);
        assert_eq!(next_free_order(&[question(1, 4)]), 1);
    }

    #[test]
    fn next_id_is_one_past_max() {
        assert_eq!(next_question_id(&[]), QuestionId::new(1));
        assert_eq!(next_question_id(&[question(4, 1), question(9, 2)]), QuestionId::new(10));
    }
}
