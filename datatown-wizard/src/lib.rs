//! Survey-taking flow.
//!
//! A [`SurveyRun`] walks a respondent through a fixed, ordered question
//! list one step at a time. Each step must be answered before the wizard
//! advances; navigating backwards never discards answers. Submitting at
//! the final step yields the survey's declared coin reward exactly once.

mod run;
pub use run::SurveyRun;

mod error;
pub use error::WizardError;
