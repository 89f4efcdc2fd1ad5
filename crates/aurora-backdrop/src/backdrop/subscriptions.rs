//! Host callback handles held by a backdrop

use aurora_host::{FrameRequestId, Host, SubscriptionId};

/// Revocable handles for every callback registered with the host
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct Subscriptions {
    pub resize: Option<SubscriptionId>,
    pub visibility: Option<SubscriptionId>,
    pub frame: Option<FrameRequestId>,
}

impl Subscriptions {
    /// Cancel the pending frame request, if any
    pub fn cancel_frame<H: Host>(&mut self, host: &H) {
        if let Some(id) = self.frame.take() {
            host.cancel_frame(id);
        }
    }

    /// Revoke everything. Safe to call repeatedly.
    pub fn revoke_all<H: Host>(&mut self, host: &H) {
        self.cancel_frame(host);
        if let Some(id) = self.resize.take() {
            host.unsubscribe(id);
        }
        if let Some(id) = self.visibility.take() {
            host.unsubscribe(id);
        }
    }
}
