//! # datatown
//!
//! Survey economy core for the datatown browser game.
//!
//! Buyers author surveys and fund them with coin rewards; sellers take
//! surveys to earn coins and spend them on cosmetics. This crate ties the
//! flows together and re-exports the full public surface:
//!
//! - [`SurveyDraft`] - incremental authoring with ordered validation and
//!   two-phase persistence (header insert, then one ordered question batch)
//! - [`SurveyRun`] - step-by-step survey taking that yields the declared
//!   reward exactly once on completion
//! - [`purchase`] / [`is_owned`] / [`filter_by_category`] - the cosmetic
//!   shop over a player's [`Inventory`]
//! - [`SessionContext`] - identity tracking plus the derived
//!   questionnaire-completion gate
//! - [`catalog`] - the built-in shop items and sponsor surveys
//!
//! Persistence and auth stay behind the [`Store`] and [`AuthProvider`]
//! traits; [`MemoryStore`] and [`MemoryAuth`] serve tests and demos.

pub use datatown_types::*;

pub use datatown_store::*;

pub use datatown_authoring::{DraftKind, DraftQuestion, SubmitError, SurveyDraft};

pub use datatown_wizard::{SurveyRun, WizardError};

pub use datatown_shop::{filter_by_category, is_owned, purchase};

pub use datatown_session::{QuestionnaireStatus, SessionContext};

pub use datatown_catalog as catalog;
pub use datatown_catalog::Sponsor;
