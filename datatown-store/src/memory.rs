//! In-memory collaborators for tests and the demo loop.
//!
//! `MemoryStore` and `MemoryAuth` record every operation and can be
//! pre-configured to fail, so flows can be exercised without a real
//! backend.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use datatown_types::{SurveyId, UserId};

use crate::{
    AuthProvider, IdentityCallback, NewSurvey, QueryError, QuestionRecord, QuestionnaireRecord,
    Store, StoredSurvey, Subscription, WriteError,
};

#[derive(Debug, Default)]
struct StoreInner {
    surveys: Vec<StoredSurvey>,
    questions: Vec<QuestionRecord>,
    questionnaire_responses: Vec<QuestionnaireRecord>,
    fail_survey_inserts: bool,
    fail_question_inserts: bool,
    fail_queries: bool,
}

/// An in-memory [`Store`] that records all writes.
///
/// Clones share state, so a test can keep a handle for assertions while
/// handing another to the flow under test.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Rc<RefCell<StoreInner>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seed a questionnaire response for a user.
    pub fn with_questionnaire_response(self, user: UserId) -> Self {
        self.inner
            .borrow_mut()
            .questionnaire_responses
            .push(QuestionnaireRecord { user });
        self
    }

    /// Make every survey header insert fail.
    pub fn fail_survey_inserts(self) -> Self {
        self.inner.borrow_mut().fail_survey_inserts = true;
        self
    }

    /// Make every question batch insert fail.
    pub fn fail_question_inserts(self) -> Self {
        self.inner.borrow_mut().fail_question_inserts = true;
        self
    }

    /// Make every read fail.
    pub fn fail_queries(self) -> Self {
        self.inner.borrow_mut().fail_queries = true;
        self
    }

    /// Toggle read failures at runtime.
    pub fn set_fail_queries(&self, fail: bool) {
        self.inner.borrow_mut().fail_queries = fail;
    }

    /// Toggle survey header insert failures at runtime.
    pub fn set_fail_survey_inserts(&self, fail: bool) {
        self.inner.borrow_mut().fail_survey_inserts = fail;
    }

    /// Toggle question batch insert failures at runtime.
    pub fn set_fail_question_inserts(&self, fail: bool) {
        self.inner.borrow_mut().fail_question_inserts = fail;
    }

    /// Record a questionnaire completion at runtime.
    pub fn complete_questionnaire(&self, user: UserId) {
        self.inner
            .borrow_mut()
            .questionnaire_responses
            .push(QuestionnaireRecord { user });
    }

    /// Get all stored survey headers.
    pub fn surveys(&self) -> Vec<StoredSurvey> {
        self.inner.borrow().surveys.clone()
    }

    /// Get all question rows for a survey, in insertion order.
    pub fn questions_for(&self, survey_id: SurveyId) -> Vec<QuestionRecord> {
        self.inner
            .borrow()
            .questions
            .iter()
            .filter(|q| q.survey_id == survey_id)
            .cloned()
            .collect()
    }

    /// Get the total number of stored question rows.
    pub fn question_count(&self) -> usize {
        self.inner.borrow().questions.len()
    }
}

impl Store for MemoryStore {
    fn insert_survey(&self, survey: NewSurvey) -> Result<SurveyId, WriteError> {
        let mut inner = self.inner.borrow_mut();
        if inner.fail_survey_inserts {
            return Err(WriteError::message("survey header insert failed"));
        }
        let id = SurveyId::new();
        inner.surveys.push(StoredSurvey {
            id,
            owner: survey.owner,
            title: survey.title,
            reward: survey.reward,
        });
        Ok(id)
    }

    fn insert_questions(&self, questions: Vec<QuestionRecord>) -> Result<(), WriteError> {
        let mut inner = self.inner.borrow_mut();
        if inner.fail_question_inserts {
            return Err(WriteError::message("question batch insert failed"));
        }
        inner.questions.extend(questions);
        Ok(())
    }

    fn find_questionnaire_response(
        &self,
        user: &UserId,
    ) -> Result<Option<QuestionnaireRecord>, QueryError> {
        let inner = self.inner.borrow();
        if inner.fail_queries {
            return Err(QueryError::message("questionnaire lookup failed"));
        }
        Ok(inner
            .questionnaire_responses
            .iter()
            .find(|r| r.user == *user)
            .cloned())
    }
}

#[derive(Default)]
struct AuthInner {
    current: Option<UserId>,
    next_token: u64,
    subscribers: Vec<(u64, IdentityCallback)>,
}

/// An in-memory [`AuthProvider`] driven by explicit `sign_in` / `sign_out`
/// calls.
#[derive(Clone, Default)]
pub struct MemoryAuth {
    inner: Rc<RefCell<AuthInner>>,
}

impl MemoryAuth {
    /// Create a signed-out auth provider.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an auth provider already signed in as `user`.
    pub fn signed_in(user: UserId) -> Self {
        let auth = Self::default();
        auth.inner.borrow_mut().current = Some(user);
        auth
    }

    /// Sign a user in and notify subscribers.
    pub fn sign_in(&self, user: UserId) {
        self.inner.borrow_mut().current = Some(user);
        self.notify(Some(user));
    }

    /// Sign out and notify subscribers.
    pub fn sign_out(&self) {
        self.inner.borrow_mut().current = None;
        self.notify(None);
    }

    fn notify(&self, identity: Option<UserId>) {
        // Callbacks may re-enter (e.g. read the current identity), so the
        // borrow is released while they run.
        let subscribers = std::mem::take(&mut self.inner.borrow_mut().subscribers);
        for (_, callback) in &subscribers {
            callback(identity);
        }
        let mut inner = self.inner.borrow_mut();
        let added_during_notify = std::mem::replace(&mut inner.subscribers, subscribers);
        inner.subscribers.extend(added_during_notify);
    }
}

impl AuthProvider for MemoryAuth {
    fn current_identity(&self) -> Option<UserId> {
        self.inner.borrow().current
    }

    fn subscribe(&self, callback: IdentityCallback) -> Subscription {
        let token = {
            let mut inner = self.inner.borrow_mut();
            let token = inner.next_token;
            inner.next_token += 1;
            inner.subscribers.push((token, callback));
            token
        };
        let weak: Weak<RefCell<AuthInner>> = Rc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner.borrow_mut().subscribers.retain(|(t, _)| *t != token);
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use datatown_types::QuestionKind;

    use super::*;

    #[test]
    fn insert_survey_assigns_an_id() {
        let store = MemoryStore::new();
        let owner = UserId::new();
        let id = store
            .insert_survey(NewSurvey {
                owner,
                title: "Shopping Habits".to_string(),
                reward: 50,
            })
            .unwrap();

        let surveys = store.surveys();
        assert_eq!(surveys.len(), 1);
        assert_eq!(surveys[0].id, id);
        assert_eq!(surveys[0].reward, 50);
    }

    #[test]
    fn failing_store_rejects_writes() {
        let store = MemoryStore::new().fail_survey_inserts();
        let result = store.insert_survey(NewSurvey {
            owner: UserId::new(),
            title: "t".to_string(),
            reward: 1,
        });
        assert!(result.is_err());
        assert!(store.surveys().is_empty());
    }

    #[test]
    fn questions_for_filters_by_survey() {
        let store = MemoryStore::new();
        let a = store
            .insert_survey(NewSurvey {
                owner: UserId::new(),
                title: "a".to_string(),
                reward: 10,
            })
            .unwrap();
        let b = store
            .insert_survey(NewSurvey {
                owner: UserId::new(),
                title: "b".to_string(),
                reward: 10,
            })
            .unwrap();
        store
            .insert_questions(vec![
                QuestionRecord {
                    survey_id: a,
                    text: "first".to_string(),
                    kind: QuestionKind::ShortAnswer,
                    order_index: 0,
                },
                QuestionRecord {
                    survey_id: b,
                    text: "other".to_string(),
                    kind: QuestionKind::ShortAnswer,
                    order_index: 0,
                },
            ])
            .unwrap();

        let for_a = store.questions_for(a);
        assert_eq!(for_a.len(), 1);
        assert_eq!(for_a[0].text, "first");
    }

    #[test]
    fn questionnaire_lookup_distinguishes_absence_from_failure() {
        let user = UserId::new();
        let store = MemoryStore::new();
        assert!(store.find_questionnaire_response(&user).unwrap().is_none());

        let seeded = MemoryStore::new().with_questionnaire_response(user);
        assert!(seeded.find_questionnaire_response(&user).unwrap().is_some());

        let failing = MemoryStore::new().fail_queries();
        assert!(failing.find_questionnaire_response(&user).is_err());
    }

    #[test]
    fn subscribers_hear_sign_in_and_sign_out() {
        let auth = MemoryAuth::new();
        let heard = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&heard);
        let _subscription = auth.subscribe(Box::new(move |identity| {
            sink.borrow_mut().push(identity);
        }));

        let user = UserId::new();
        auth.sign_in(user);
        auth.sign_out();

        assert_eq!(*heard.borrow(), vec![Some(user), None]);
        assert_eq!(auth.current_identity(), None);
    }

    #[test]
    fn unsubscribed_callbacks_stop_firing() {
        let auth = MemoryAuth::new();
        let count = Rc::new(Cell::new(0));
        let counter = Rc::clone(&count);
        let subscription = auth.subscribe(Box::new(move |_| {
            counter.set(counter.get() + 1);
        }));

        auth.sign_in(UserId::new());
        subscription.unsubscribe();
        auth.sign_out();

        assert_eq!(count.get(), 1);
    }

    #[test]
    fn dropping_the_handle_cancels_too() {
        let auth = MemoryAuth::new();
        let count = Rc::new(Cell::new(0));
        let counter = Rc::clone(&count);
        {
            let _subscription = auth.subscribe(Box::new(move |_| {
                counter.set(counter.get() + 1);
            }));
            auth.sign_in(UserId::new());
        }
        auth.sign_out();

        assert_eq!(count.get(), 1);
    }
}
