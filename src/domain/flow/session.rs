//! Flow session aggregate.
//!
//! One run of the question sequence for one user. The session is a plain
//! value: the application layer loads it, calls one operation, and saves it
//! back. It never performs I/O and knows nothing about how it is displayed.

use serde::{Deserialize, Serialize};

use super::{AnswerSet, FlowError, FlowState, TranscriptEntry, CLARIFICATION_TEXT};
use crate::domain::catalog::{sort_by_order, Question, QuestionKind};
use crate::domain::foundation::{FlowSessionId, QuestionId, StateMachine, Timestamp};
use crate::domain::recommendation::Explanation;

/// What the user should be shown for the active question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionPrompt {
    pub question_id: QuestionId,
    pub text: String,
    pub kind: QuestionKind,
    /// Mutually exclusive choices; empty for free-text questions.
    pub options: Vec<String>,
    /// 1-based position within the snapshot.
    pub position: usize,
    pub total: usize,
    /// True when re-offered after free text on a multiple-choice question.
    pub clarifying: bool,
}

/// Outcome of a flow operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowStep {
    /// A question is being asked.
    Ask(QuestionPrompt),
    /// The same multiple-choice question is being asked again.
    Clarify(QuestionPrompt),
    /// Every question is answered; the recommendation should be requested.
    ReadyToFinalize,
}

/// Handed out when recommendation retrieval begins.
///
/// The generation ties the eventual result to the run that asked for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinalizationTicket {
    pub session_id: FlowSessionId,
    pub generation: u64,
    pub answers: AnswerSet,
}

/// What happened to a recommendation handed back to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// The explanation was stored and the run is `Done`.
    Applied,
    /// The session was restarted after the ticket was issued; nothing changed.
    Stale { ticket: u64, current: u64 },
}

/// A chat flow session.
///
/// # Invariants
///
/// - `questions` is sorted by ascending order and never changes mid-run
/// - `pointer` equals the number of committed answers while running
/// - `answers` keys are a subset of the snapshot ids, equal to it in `Done`
/// - at most one recommendation request is pending
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowSession {
    id: FlowSessionId,
    state: FlowState,
    questions: Vec<Question>,
    pointer: usize,
    answers: AnswerSet,
    transcript: Vec<TranscriptEntry>,
    /// Bumped whenever a run starts or is discarded.
    generation: u64,
    recommendation_pending: bool,
    explanation: Option<Explanation>,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl FlowSession {
    /// Creates a session that has not started yet.
    pub fn new(id: FlowSessionId) -> Self {
        let now = Timestamp::now();
        Self {
            id,
            state: FlowState::NotStarted,
            questions: Vec::new(),
            pointer: 0,
            answers: AnswerSet::new(),
            transcript: Vec::new(),
            generation: 0,
            recommendation_pending: false,
            explanation: None,
            created_at: now,
            updated_at: now,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &FlowSessionId {
        &self.id
    }

    pub fn state(&self) -> FlowState {
        self.state
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn pointer(&self) -> usize {
        self.pointer
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    pub fn transcript(&self) -> &[TranscriptEntry] {
        &self.transcript
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_recommendation_pending(&self) -> bool {
        self.recommendation_pending
    }

    pub fn explanation(&self) -> Option<&Explanation> {
        self.explanation.as_ref()
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    /// Question awaiting an answer, if any.
    pub fn current_question(&self) -> Option<&Question> {
        self.state
            .active_index()
            .and_then(|index| self.questions.get(index))
    }

    /// Prompt for the question awaiting an answer, if any.
    pub fn current_prompt(&self) -> Option<QuestionPrompt> {
        let clarifying = matches!(self.state, FlowState::Clarifying { .. });
        self.current_question().map(|q| self.prompt_for(q, clarifying))
    }

    /// Free text is only accepted while a question is active.
    pub fn accepts_text_input(&self) -> bool {
        self.state.accepts_input()
    }

    pub fn is_complete(&self) -> bool {
        self.state == FlowState::Done
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Operations
    // ─────────────────────────────────────────────────────────────────────────

    /// Starts a new run over `questions`.
    ///
    /// Any previous run is discarded first. The list is sorted by order and
    /// kept as the run's snapshot.
    ///
    /// # Errors
    ///
    /// - `NoQuestions` if the list is empty; the session stays `NotStarted`
    pub fn start(&mut self, mut questions: Vec<Question>) -> Result<FlowStep, FlowError> {
        if questions.is_empty() {
            return Err(FlowError::NoQuestions);
        }

        self.restart();
        sort_by_order(&mut questions);
        self.questions = questions;
        self.generation += 1;
        self.present_current()
    }

    /// Presents the question at the pointer, or moves to `Finalizing` once
    /// every question has an answer.
    pub fn present_current(&mut self) -> Result<FlowStep, FlowError> {
        let step = match self.questions.get(self.pointer) {
            None => {
                self.state = self.state.transition_to(FlowState::Finalizing)?;
                FlowStep::ReadyToFinalize
            }
            Some(question) => {
                let target = FlowState::Presenting { index: self.pointer };
                let prompt = self.prompt_for(question, false);
                let entry = TranscriptEntry::Question {
                    question_id: question.id(),
                    text: question.text().to_string(),
                    options: question.options().to_vec(),
                };
                self.state = self.state.transition_to(target)?;
                self.transcript.push(entry);
                FlowStep::Ask(prompt)
            }
        };
        self.touch();
        Ok(step)
    }

    /// Handles typed input for the active question.
    ///
    /// Free-text questions commit the trimmed text. Multiple-choice questions
    /// only record it in the transcript and re-offer the same options.
    ///
    /// # Errors
    ///
    /// - `InputClosed` if no question is active
    /// - `EmptyAnswer` if the text is blank
    pub fn submit_text(&mut self, raw: &str) -> Result<FlowStep, FlowError> {
        let question = self
            .current_question()
            .cloned()
            .ok_or_else(|| FlowError::input_closed(self.state))?;

        let answer = raw.trim();
        if answer.is_empty() {
            return Err(FlowError::EmptyAnswer);
        }

        match question.kind() {
            QuestionKind::FreeText => self.commit(&question, answer.to_string()),
            QuestionKind::MultipleChoice => {
                self.state = self
                    .state
                    .transition_to(FlowState::Clarifying { index: self.pointer })?;
                self.transcript.push(TranscriptEntry::Reply {
                    question_id: question.id(),
                    text: answer.to_string(),
                    committed: false,
                });
                self.transcript.push(TranscriptEntry::Clarification {
                    question_id: question.id(),
                    text: CLARIFICATION_TEXT.to_string(),
                    options: question.options().to_vec(),
                });
                self.touch();
                Ok(FlowStep::Clarify(self.prompt_for(&question, true)))
            }
        }
    }

    /// Handles a choice made on a multiple-choice question.
    ///
    /// # Errors
    ///
    /// - `InputClosed` if no question is active
    /// - `QuestionNotActive` if `question_id` is not the active question
    /// - `KindMismatch` if the active question is free-text
    /// - `InvalidOption` if `option` is not one of the question's options
    pub fn select_option(
        &mut self,
        question_id: QuestionId,
        option: &str,
    ) -> Result<FlowStep, FlowError> {
        let question = self
            .current_question()
            .cloned()
            .ok_or_else(|| FlowError::input_closed(self.state))?;

        if question.id() != question_id {
            return Err(FlowError::QuestionNotActive(question_id));
        }
        if !question.kind().is_multiple_choice() {
            return Err(FlowError::KindMismatch(question_id));
        }
        if !question.has_option(option) {
            return Err(FlowError::InvalidOption {
                question_id,
                option: option.to_string(),
            });
        }

        self.commit(&question, option.to_string())
    }

    /// Marks the recommendation request as in flight.
    ///
    /// # Errors
    ///
    /// - `NotFinalizing` unless every question has been answered
    /// - `RecommendationInFlight` if a request is already pending
    pub fn begin_finalization(&mut self) -> Result<FinalizationTicket, FlowError> {
        if self.state != FlowState::Finalizing {
            return Err(FlowError::NotFinalizing(self.state.label()));
        }
        if self.recommendation_pending {
            return Err(FlowError::RecommendationInFlight);
        }

        self.recommendation_pending = true;
        self.touch();
        Ok(FinalizationTicket {
            session_id: self.id,
            generation: self.generation,
            answers: self.answers.clone(),
        })
    }

    /// Stores the rendered recommendation and closes the run.
    ///
    /// A result for an older generation leaves the session untouched and
    /// reports [`Completion::Stale`].
    pub fn complete_finalization(
        &mut self,
        generation: u64,
        explanation: Explanation,
    ) -> Result<Completion, FlowError> {
        if generation != self.generation {
            return Ok(Completion::Stale {
                ticket: generation,
                current: self.generation,
            });
        }

        self.state = self.state.transition_to(FlowState::Done)?;
        self.recommendation_pending = false;
        self.explanation = Some(explanation);
        self.touch();
        Ok(Completion::Applied)
    }

    /// Discards the run and returns to `NotStarted`.
    ///
    /// Calling it on a session that is already reset changes nothing.
    pub fn restart(&mut self) {
        if self.state == FlowState::NotStarted && self.questions.is_empty() {
            return;
        }

        self.state = FlowState::NotStarted;
        self.questions.clear();
        self.pointer = 0;
        self.answers.clear();
        self.transcript.clear();
        self.recommendation_pending = false;
        self.explanation = None;
        self.generation += 1;
        self.touch();
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Internals
    // ─────────────────────────────────────────────────────────────────────────

    fn commit(&mut self, question: &Question, answer: String) -> Result<FlowStep, FlowError> {
        self.transcript.push(TranscriptEntry::Reply {
            question_id: question.id(),
            text: answer.clone(),
            committed: true,
        });
        self.answers.insert(question.id(), answer);
        self.pointer += 1;
        self.present_current()
    }

    fn prompt_for(&self, question: &Question, clarifying: bool) -> QuestionPrompt {
        let position = self
            .questions
            .iter()
            .position(|q| q.id() == question.id())
            .map(|i| i + 1)
            .unwrap_or(0);
        QuestionPrompt {
            question_id: question.id(),
            text: question.text().to_string(),
            kind: question.kind(),
            options: question.options().to_vec(),
            position,
            total: self.questions.len(),
            clarifying,
        }
    }

    fn touch(&mut self) {
        self.updated_at = Timestamp::now();
    }
}
