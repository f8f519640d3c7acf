//! State machine trait for lifecycle enums.
//!
//! Gives lifecycle enums (the chat flow state, for instance) one shared way
//! to check and perform transitions.

use super::ValidationError;

/// Trait for enums whose values form a state machine.
///
/// Implementors list their legal edges; `transition_to` then refuses
/// anything else.
///
/// ```ignore
/// let next = FlowState::NotStarted.transition_to(FlowState::Presenting { index: 0 })?;
/// ```
pub trait StateMachine: Sized + Copy + PartialEq + std::fmt::Debug {
    /// Returns true if transition from self to target is valid.
    fn can_transition_to(&self, target: &Self) -> bool;

    /// Returns all valid target states from current state.
    fn valid_transitions(&self) -> Vec<Self>;

    /// Performs transition with validation, returning error if invalid.
    fn transition_to(&self, target: Self) -> Result<Self, ValidationError> {
        if self.can_transition_to(&target) {
            Ok(target)
        } else {
            Err(ValidationError::invalid_format(
                "state_transition",
                format!("Cannot transition from {:?} to {:?}", self, target),
            ))
        }
    }

    /// Checks if current state is terminal (no valid outgoing transitions).
    fn is_terminal(&self) -> bool {
        self.valid_transitions().is_empty()
    }
}
