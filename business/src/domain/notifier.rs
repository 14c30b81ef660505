/// Short-lived, user-visible confirmation and error messages.
///
/// Calls are fire-and-forget: callers never wait for, or learn about, how the
/// message is displayed.
pub trait Notifier: Send + Sync {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}
