//! Constraint-accumulation and candidate-ranking engine for the Daily
//! Souls boss quiz.
//!
//! The quiz hides one boss from a fixed catalog; each guess earns
//! per-attribute feedback (greater/less/equal/close/different) and the
//! goal is to pin down the hidden boss within a bounded number of
//! attempts. This crate is the brain of a bot playing that game:
//!
//! - [`catalog`] — the boss entity model and JSON catalog loading
//! - [`feedback`] — the closed signal set and per-attempt signal map
//! - [`restrictions`] — feedback folded into monotonically-tightening
//!   constraints
//! - [`scoring`] — per-attribute and composite candidate scores
//! - [`ranking`] — deterministic full-catalog ranking snapshots
//! - [`session`] — the bounded guess/feedback state machine
//! - [`testing`] — a feedback oracle standing in for the live game
//!
//! Feeding guesses to the real game (browser automation, a GUI) is the
//! caller's job; the engine itself is synchronous and pure.
//!
//! # Quick Start
//!
//! ```
//! use quizsouls_core::{Session, SessionState};
//! use quizsouls_core::testing::{sample_catalog, FeedbackOracle};
//!
//! let catalog = sample_catalog();
//! let oracle = FeedbackOracle::new(catalog[6].clone()); // hide Gravelord Nito
//! let mut session = Session::new(catalog);
//!
//! while session.state() == SessionState::Ready {
//!     let guess = match session.next_guess() {
//!         Ok(boss) => boss.clone(),
//!         Err(_) => break, // attempts exhausted
//!     };
//!     let feedback = oracle.feedback_for(&guess);
//!     session.submit_feedback(&feedback).unwrap();
//! }
//!
//! assert_eq!(session.state(), SessionState::Solved);
//! assert_eq!(session.answer().unwrap().name, "Gravelord Nito");
//! ```

pub mod catalog;
pub mod feedback;
pub mod ranking;
pub mod restrictions;
pub mod scoring;
pub mod session;
pub mod testing;

// Primary public API
pub use catalog::{bosses_from_json, load_bosses, Boss, CatalogError, Optionality};
pub use feedback::{Attribute, Feedback, Signal};
pub use ranking::{rank, RankedBoss};
pub use restrictions::Restrictions;
pub use scoring::{score_boss, AttributeWeights, BossScore, ScoreBreakdown, ScoreConfig};
pub use session::{Session, SessionConfig, SessionError, SessionState};
