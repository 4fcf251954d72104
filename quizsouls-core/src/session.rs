//! Session controller: the bounded guess/feedback loop.
//!
//! A [`Session`] owns the only mutable state in the engine — the
//! restriction state, the attempt counter, and the pending guess — and
//! drives it through an explicit state machine. Callers (a UI, a browser
//! automation script, a test harness) alternate [`Session::next_guess`]
//! and [`Session::submit_feedback`] until the session reaches a terminal
//! state. Nothing here blocks or polls: waiting for feedback is the
//! caller's concern.

use crate::catalog::Boss;
use crate::feedback::Feedback;
use crate::ranking::{rank, RankedBoss};
use crate::restrictions::Restrictions;
use crate::scoring::ScoreConfig;
use std::collections::HashSet;
use thiserror::Error;

/// Errors from session operations.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("no candidates to guess (catalog empty or whitelist exhausted)")]
    NoCandidates,

    #[error("attempt limit of {0} reached")]
    Exhausted(u32),

    #[error("cannot guess in state {0:?}")]
    NotReadyToGuess(SessionState),

    #[error("no pending guess awaiting feedback (state {0:?})")]
    NoPendingGuess(SessionState),
}

/// States of the attempt loop. `Solved`, `Exhausted`, and `Aborted` are
/// terminal; only `reset` leaves them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Ready to produce the next guess.
    Ready,
    /// A guess is out; waiting for its feedback.
    AwaitingFeedback,
    /// Every attribute came back equal — the hidden boss is found.
    Solved,
    /// The attempt bound was hit without solving.
    Exhausted,
    /// Externally cancelled.
    Aborted,
}

impl SessionState {
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            SessionState::Solved | SessionState::Exhausted | SessionState::Aborted
        )
    }
}

/// Configuration for a session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Maximum guess/feedback rounds per session.
    pub max_attempts: u32,
    /// Scoring parameters used for every ranking.
    pub score: ScoreConfig,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionConfig {
    pub fn new() -> Self {
        Self {
            max_attempts: 7,
            score: ScoreConfig::default(),
        }
    }

    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    pub fn with_score_config(mut self, score: ScoreConfig) -> Self {
        self.score = score;
        self
    }
}

/// One game of the hidden-boss quiz.
pub struct Session {
    catalog: Vec<Boss>,
    config: SessionConfig,
    restrictions: Restrictions,
    ranking: Vec<RankedBoss>,
    whitelist: Option<HashSet<String>>,
    pending: Option<Boss>,
    last_guess: Option<Boss>,
    answer: Option<Boss>,
    attempt: u32,
    state: SessionState,
}

impl Session {
    /// Start a session over the given catalog with default configuration.
    pub fn new(catalog: Vec<Boss>) -> Self {
        Self::with_config(catalog, SessionConfig::new())
    }

    pub fn with_config(catalog: Vec<Boss>, config: SessionConfig) -> Self {
        let mut session = Self {
            catalog,
            config,
            restrictions: Restrictions::new(),
            ranking: Vec::new(),
            whitelist: None,
            pending: None,
            last_guess: None,
            answer: None,
            attempt: 0,
            state: SessionState::Ready,
        };
        session.rerank();
        session
    }

    fn rerank(&mut self) {
        self.ranking = rank(
            &self.catalog,
            &self.restrictions,
            &self.config.score,
            self.whitelist.as_ref(),
        );
    }

    /// Install or clear the live candidate whitelist (the suggestion list
    /// scraped by the automation collaborator). Takes effect immediately
    /// and stays until replaced.
    pub fn set_whitelist(&mut self, whitelist: Option<HashSet<String>>) {
        self.whitelist = whitelist;
        self.rerank();
    }

    /// Produce the next guess: the top-ranked candidate under the current
    /// restrictions. Increments the attempt counter and moves to
    /// `AwaitingFeedback`. Moves to `Exhausted` instead when the attempt
    /// bound is already spent; an empty ranking reports `NoCandidates`
    /// and leaves the state untouched with no pending guess.
    pub fn next_guess(&mut self) -> Result<&Boss, SessionError> {
        if self.state != SessionState::Ready {
            return Err(SessionError::NotReadyToGuess(self.state));
        }
        if self.attempt >= self.config.max_attempts {
            self.state = SessionState::Exhausted;
            return Err(SessionError::Exhausted(self.config.max_attempts));
        }

        self.rerank();
        let top = match self.ranking.first() {
            Some(entry) => entry.boss.clone(),
            None => return Err(SessionError::NoCandidates),
        };

        self.attempt += 1;
        self.state = SessionState::AwaitingFeedback;
        Ok(self.pending.insert(top))
    }

    /// Apply the feedback for the pending guess. All-equal feedback
    /// solves the session with that guess as the answer; anything else
    /// folds into the restriction state, reranks the catalog, and
    /// returns to `Ready`.
    pub fn submit_feedback(&mut self, feedback: &Feedback) -> Result<SessionState, SessionError> {
        if self.state != SessionState::AwaitingFeedback {
            return Err(SessionError::NoPendingGuess(self.state));
        }
        let guess = match self.pending.take() {
            Some(guess) => guess,
            None => return Err(SessionError::NoPendingGuess(self.state)),
        };

        self.restrictions = self.restrictions.apply(feedback, &guess);
        self.rerank();

        if feedback.is_all_equal() {
            self.answer = Some(guess.clone());
            self.state = SessionState::Solved;
        } else {
            self.state = SessionState::Ready;
        }
        self.last_guess = Some(guess);
        Ok(self.state)
    }

    /// Cancel the session. Safe from any state; terminal states stay put.
    pub fn abort(&mut self) {
        if !self.state.is_terminal() {
            self.state = SessionState::Aborted;
        }
    }

    /// Return to `Ready` with an empty restriction state and a fresh
    /// attempt counter. Also drops the whitelist — the live suggestion
    /// list belongs to the game that just ended.
    pub fn reset(&mut self) {
        self.restrictions = Restrictions::new();
        self.whitelist = None;
        self.pending = None;
        self.last_guess = None;
        self.answer = None;
        self.attempt = 0;
        self.state = SessionState::Ready;
        self.rerank();
    }

    // ------------------------------------------------------------------
    // Inspection
    // ------------------------------------------------------------------

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Attempts used so far.
    pub fn attempt(&self) -> u32 {
        self.attempt
    }

    pub fn max_attempts(&self) -> u32 {
        self.config.max_attempts
    }

    /// The current ranking snapshot (valid in terminal states too).
    pub fn ranking(&self) -> &[RankedBoss] {
        &self.ranking
    }

    /// The top `n` entries of the current ranking.
    pub fn top(&self, n: usize) -> &[RankedBoss] {
        &self.ranking[..self.ranking.len().min(n)]
    }

    pub fn restrictions(&self) -> &Restrictions {
        &self.restrictions
    }

    /// The guess currently awaiting feedback, if any.
    pub fn pending_guess(&self) -> Option<&Boss> {
        self.pending.as_ref()
    }

    /// The most recent guess whose feedback has been applied.
    pub fn last_guess(&self) -> Option<&Boss> {
        self.last_guess.as_ref()
    }

    /// The solving guess, once the session is `Solved`.
    pub fn answer(&self) -> Option<&Boss> {
        self.answer.as_ref()
    }

    pub fn catalog(&self) -> &[Boss] {
        &self.catalog
    }
}
