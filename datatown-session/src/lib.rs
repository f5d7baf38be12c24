//! Session and gating context.
//!
//! A [`SessionContext`] tracks the current identity and the derived
//! questionnaire-completion status that onboarding-dependent views branch
//! on. It is constructed explicitly at startup and passed by reference to
//! consumers - there is no process-wide global. The context subscribes to
//! identity-change notifications before seeding itself from the current
//! identity, so a sign-in racing startup is never missed.

use std::cell::RefCell;
use std::rc::Rc;

use datatown_store::{AuthProvider, Store, Subscription};
use datatown_types::UserId;
use tracing::warn;

/// The derived onboarding-questionnaire status for the current identity.
///
/// `Unknown` is reported when the lookup itself failed, so callers can
/// tell a real absence from an outage. The boolean gate treats it as
/// not completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionnaireStatus {
    /// A response record exists for this identity.
    Completed,
    /// No response record exists (or nobody is signed in).
    NotCompleted,
    /// The lookup failed; completion could not be determined.
    Unknown,
}

impl QuestionnaireStatus {
    /// The gating view of this status: only `Completed` passes.
    pub fn is_completed(self) -> bool {
        matches!(self, Self::Completed)
    }
}

#[derive(Debug)]
struct SessionState {
    identity: Option<UserId>,
    questionnaire: QuestionnaireStatus,
    loading: bool,
}

/// Process lifecycle: constructed once at startup, dropped on shutdown.
///
/// The loading flag is true only until the initial derivation finishes;
/// later identity changes update state in place without re-entering the
/// loading phase.
pub struct SessionContext {
    state: Rc<RefCell<SessionState>>,
    store: Rc<dyn Store>,
    _subscription: Subscription,
}

impl SessionContext {
    /// Build the context: subscribe to identity changes, then seed from
    /// the current identity and derive the questionnaire status for it.
    pub fn start(auth: &dyn AuthProvider, store: Rc<dyn Store>) -> Self {
        let state = Rc::new(RefCell::new(SessionState {
            identity: None,
            questionnaire: QuestionnaireStatus::NotCompleted,
            loading: true,
        }));

        // Listener first, then the one-shot read, so no change is missed.
        let callback_state = Rc::clone(&state);
        let callback_store = Rc::clone(&store);
        let subscription = auth.subscribe(Box::new(move |identity| {
            let questionnaire = match identity {
                Some(user) => derive_status(callback_store.as_ref(), &user),
                None => QuestionnaireStatus::NotCompleted,
            };
            let mut state = callback_state.borrow_mut();
            state.identity = identity;
            state.questionnaire = questionnaire;
        }));

        let identity = auth.current_identity();
        let questionnaire = match identity {
            Some(user) => derive_status(store.as_ref(), &user),
            None => QuestionnaireStatus::NotCompleted,
        };
        {
            let mut seeded = state.borrow_mut();
            seeded.identity = identity;
            seeded.questionnaire = questionnaire;
            seeded.loading = false;
        }

        Self {
            state,
            store,
            _subscription: subscription,
        }
    }

    /// Get the current identity.
    pub fn identity(&self) -> Option<UserId> {
        self.state.borrow().identity
    }

    /// Get the derived questionnaire status.
    pub fn questionnaire_status(&self) -> QuestionnaireStatus {
        self.state.borrow().questionnaire
    }

    /// The boolean gate used by onboarding-dependent views.
    pub fn has_completed_questionnaire(&self) -> bool {
        self.questionnaire_status().is_completed()
    }

    /// Check if the initial derivation is still in flight.
    pub fn is_loading(&self) -> bool {
        self.state.borrow().loading
    }

    /// Re-derive the questionnaire status for the current identity.
    /// No-op when signed out.
    pub fn refresh(&self) {
        let Some(user) = self.identity() else {
            return;
        };
        let questionnaire = derive_status(self.store.as_ref(), &user);
        self.state.borrow_mut().questionnaire = questionnaire;
    }
}

fn derive_status(store: &dyn Store, user: &UserId) -> QuestionnaireStatus {
    match store.find_questionnaire_response(user) {
        Ok(Some(_)) => QuestionnaireStatus::Completed,
        Ok(None) => QuestionnaireStatus::NotCompleted,
        Err(error) => {
            // Not surfaced to the user; the tri-state keeps outages
            // distinguishable from absence for callers that care.
            warn!(%user, %error, "questionnaire status lookup failed");
            QuestionnaireStatus::Unknown
        }
    }
}

#[cfg(test)]
mod tests {
    use datatown_store::{MemoryAuth, MemoryStore};

    use super::*;

    #[test]
    fn signed_out_start_finishes_loading_immediately() {
        let auth = MemoryAuth::new();
        let session = SessionContext::start(&auth, Rc::new(MemoryStore::new()));

        assert!(!session.is_loading());
        assert_eq!(session.identity(), None);
        assert_eq!(
            session.questionnaire_status(),
            QuestionnaireStatus::NotCompleted
        );
    }

    #[test]
    fn seeded_response_derives_completed_at_start() {
        let user = UserId::new();
        let auth = MemoryAuth::signed_in(user);
        let store = MemoryStore::new().with_questionnaire_response(user);
        let session = SessionContext::start(&auth, Rc::new(store));

        assert_eq!(session.identity(), Some(user));
        assert!(session.has_completed_questionnaire());
        assert!(!session.is_loading());
    }

    #[test]
    fn query_failure_reports_unknown_and_gates_closed() {
        let user = UserId::new();
        let auth = MemoryAuth::signed_in(user);
        let store = MemoryStore::new()
            .with_questionnaire_response(user)
            .fail_queries();
        let session = SessionContext::start(&auth, Rc::new(store));

        assert_eq!(session.questionnaire_status(), QuestionnaireStatus::Unknown);
        assert!(!session.has_completed_questionnaire());
        assert!(!session.is_loading());
    }

    #[test]
    fn sign_in_after_start_re_derives() {
        let auth = MemoryAuth::new();
        let user = UserId::new();
        let store = MemoryStore::new().with_questionnaire_response(user);
        let session = SessionContext::start(&auth, Rc::new(store));
        assert!(!session.has_completed_questionnaire());

        auth.sign_in(user);
        assert_eq!(session.identity(), Some(user));
        assert!(session.has_completed_questionnaire());
        // loading never re-enters after the first derivation
        assert!(!session.is_loading());
    }

    #[test]
    fn sign_out_clears_identity_and_completion() {
        let user = UserId::new();
        let auth = MemoryAuth::signed_in(user);
        let store = MemoryStore::new().with_questionnaire_response(user);
        let session = SessionContext::start(&auth, Rc::new(store));

        auth.sign_out();
        assert_eq!(session.identity(), None);
        assert_eq!(
            session.questionnaire_status(),
            QuestionnaireStatus::NotCompleted
        );
    }

    #[test]
    fn refresh_picks_up_a_new_response() {
        let user = UserId::new();
        let auth = MemoryAuth::signed_in(user);
        let store = MemoryStore::new();
        let session = SessionContext::start(&auth, Rc::new(store.clone()));
        assert!(!session.has_completed_questionnaire());

        store.complete_questionnaire(user);
        session.refresh();
        assert!(session.has_completed_questionnaire());
    }

    #[test]
    fn refresh_is_a_no_op_when_signed_out() {
        let auth = MemoryAuth::new();
        let store = MemoryStore::new().fail_queries();
        let session = SessionContext::start(&auth, Rc::new(store));

        session.refresh();
        assert_eq!(
            session.questionnaire_status(),
            QuestionnaireStatus::NotCompleted
        );
    }

    #[test]
    fn refresh_recovers_from_an_outage() {
        let user = UserId::new();
        let auth = MemoryAuth::signed_in(user);
        let store = MemoryStore::new().with_questionnaire_response(user);
        store.set_fail_queries(true);
        let session = SessionContext::start(&auth, Rc::new(store.clone()));
        assert_eq!(session.questionnaire_status(), QuestionnaireStatus::Unknown);

        store.set_fail_queries(false);
        session.refresh();
        assert_eq!(
            session.questionnaire_status(),
            QuestionnaireStatus::Completed
        );
    }
}
