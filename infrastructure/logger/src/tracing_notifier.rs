use business::domain::notifier::Notifier;
use tracing::{error, info};

/// [`Notifier`] adapter for headless front-ends: each notification becomes a
/// `tracing` event under `storefront::notify`, tagged with its `kind`.
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn success(&self, message: &str) {
        info!(target: "storefront::notify", kind = "success", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "storefront::notify", kind = "error", "{}", message);
    }
}
