use std::fmt;

use datatown_types::UserId;

/// Callback invoked with the new identity (or `None`) on every sign-in
/// and sign-out.
pub type IdentityCallback = Box<dyn Fn(Option<UserId>)>;

/// Trait for authentication collaborators.
pub trait AuthProvider {
    /// One-shot read of the current identity.
    fn current_identity(&self) -> Option<UserId>;

    /// Register for identity-change notifications.
    ///
    /// The callback fires on every sign-in and sign-out until the
    /// returned [`Subscription`] is dropped or unsubscribed.
    fn subscribe(&self, callback: IdentityCallback) -> Subscription;
}

/// Handle for an identity-change subscription.
///
/// Dropping the handle cancels the subscription.
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Create a subscription handle from a cancel action.
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// Cancel the subscription explicitly.
    pub fn unsubscribe(mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.cancel.is_some())
            .finish()
    }
}
