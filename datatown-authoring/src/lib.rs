//! Survey authoring flow.
//!
//! A buyer builds a [`SurveyDraft`] incrementally - title, reward, and an
//! ordered question list - then submits it. Submission validates the
//! draft rule by rule, requires an authenticated identity, and persists
//! the survey as a header insert followed by one batch of question rows
//! tagged with their position.

mod draft;
pub use draft::{DraftKind, DraftQuestion, SurveyDraft};

mod error;
pub use error::SubmitError;
