/// Logging port used by sessions, factories and adapters.
///
/// Messages must not contain account emails or tokens.
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
    fn debug(&self, message: &str);
}
