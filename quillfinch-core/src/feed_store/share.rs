/*
    share.rs - Platform share capability seam

    The share action hands a structured payload to whatever the host
    platform provides. It is fire-and-forget: a failing target is
    logged at warn level and swallowed, never surfaced to the caller.
*/

use tracing::warn;

/// Structured payload handed to the platform share capability
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharePayload {
    pub title: String,
    pub text: String,
    pub url: String,
}

/// Host-provided share capability
pub trait ShareTarget {
    fn share(&self, payload: &SharePayload) -> anyhow::Result<()>;
}

/// A share target that accepts everything and does nothing; the
/// default when the host offers no share capability.
#[derive(Debug, Default)]
pub struct NoopShare;

impl ShareTarget for NoopShare {
    fn share(&self, _payload: &SharePayload) -> anyhow::Result<()> {
        Ok(())
    }
}

/// Invoke the target, swallowing and logging any failure
pub fn dispatch_share(target: &dyn ShareTarget, payload: &SharePayload) {
    if let Err(error) = target.share(payload) {
        warn!(%error, title = %payload.title, "share failed");
    }
}
