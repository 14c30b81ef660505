/// Diagnostic logging port.
///
/// Domain and application code never call a logging framework directly; the
/// composition root injects an adapter.
pub trait Logger: Send + Sync {
    fn debug(&self, message: &str);
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
}
