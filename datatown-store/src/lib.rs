//! Collaborator contracts for datatown.
//!
//! The flows never talk to a concrete backend. They are written against
//! two traits:
//! - [`Store`] - relational persistence (survey header + question inserts,
//!   questionnaire-response lookup)
//! - [`AuthProvider`] - current identity plus identity-change notifications
//!
//! [`MemoryStore`] and [`MemoryAuth`] are single-threaded in-memory
//! implementations, used by tests and by the demo game loop.

mod error;
pub use error::{QueryError, WriteError};

mod records;
pub use records::{NewSurvey, QuestionRecord, QuestionnaireRecord, StoredSurvey};

mod store;
pub use store::Store;

mod auth;
pub use auth::{AuthProvider, IdentityCallback, Subscription};

mod memory;
pub use memory::{MemoryAuth, MemoryStore};
