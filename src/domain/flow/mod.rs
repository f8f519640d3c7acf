//! Question-flow controller.
//!
//! Drives one chat run: questions are asked in ascending order, answers are
//! collected, and once the last one is committed the session waits for a
//! recommendation. See [`FlowSession`] for the aggregate and [`FlowState`]
//! for the lifecycle.

mod answers;
mod errors;
mod session;
mod state;
mod transcript;

pub use answers::AnswerSet;
pub use errors::FlowError;
pub use session::{Completion, FinalizationTicket, FlowSession, FlowStep, QuestionPrompt};
pub use state::FlowState;
pub use transcript::{TranscriptEntry, CLARIFICATION_TEXT};
