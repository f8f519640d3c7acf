//! Flow session state machine.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::StateMachine;

/// Lifecycle state of a chat flow session.
///
/// `NotStarted → Presenting{0} → … → Presenting{n-1} → Finalizing → Done`,
/// with `Clarifying{i}` entered when free text arrives for a multiple-choice
/// question. Every state may go back to `NotStarted` (restart).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FlowState {
    #[default]
    NotStarted,

    /// Question `index` of the snapshot is awaiting an answer.
    Presenting { index: usize },

    /// Question `index` is multiple-choice and the user typed instead of
    /// choosing; the same options were offered again.
    Clarifying { index: usize },

    /// Every question answered; the recommendation is being retrieved.
    Finalizing,

    /// Recommendation rendered; only restart remains.
    Done,
}

impl FlowState {
    /// Index of the question currently awaiting an answer, if any.
    pub fn active_index(&self) -> Option<usize> {
        match self {
            Self::Presenting { index } | Self::Clarifying { index } => Some(*index),
            _ => None,
        }
    }

    /// True while the user can type or choose.
    pub fn accepts_input(&self) -> bool {
        self.active_index().is_some()
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::NotStarted => "not_started",
            Self::Presenting { .. } => "presenting",
            Self::Clarifying { .. } => "clarifying",
            Self::Finalizing => "finalizing",
            Self::Done => "done",
        }
    }
}

impl StateMachine for FlowState {
    fn can_transition_to(&self, target: &Self) -> bool {
        use FlowState::*;
        match (self, target) {
            (_, NotStarted) => true,
            (NotStarted, Presenting { index }) => *index == 0,
            (Presenting { index: i }, Presenting { index: j })
            | (Clarifying { index: i }, Presenting { index: j }) => *j == *i + 1,
            (Presenting { index: i }, Clarifying { index: j })
            | (Clarifying { index: i }, Clarifying { index: j }) => i == j,
            (Presenting { .. }, Finalizing) | (Clarifying { .. }, Finalizing) => true,
            (Finalizing, Done) => true,
            _ => false,
        }
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use FlowState::*;
        match self {
            NotStarted => vec![Presenting { index: 0 }],
            Presenting { index } => vec![
                Presenting { index: index + 1 },
                Clarifying { index: *index },
                Finalizing,
                NotStarted,
            ],
            Clarifying { index } => vec![
                Clarifying { index: *index },
                Presenting { index: index + 1 },
                Finalizing,
                NotStarted,
            ],
            Finalizing => vec![Done, NotStarted],
            Done => vec![NotStarted],
        }
    }
}
