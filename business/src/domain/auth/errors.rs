/// Errors an auth adapter surfaces instead of an outcome.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("auth.not_configured")]
    NotConfigured,
    #[error("auth.intent_unavailable: {0}")]
    IntentUnavailable(String),
}
