use async_trait::async_trait;

use super::errors::AuthError;
use super::model::AuthOutcome;
use super::value_objects::{PlatformContext, SignInIntent, SignInResultData};

/// Completion callback for [`AuthProvider::sign_out`]. Invoked exactly once.
pub type SignOutCallback = Box<dyn FnOnce() + Send + 'static>;

/// Identity sign-in capability. The rest of the application only talks to this.
#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// Builds the vendor client for `context` with the email and profile scopes.
    /// Must precede every other call.
    fn configure(&mut self, context: &PlatformContext);

    fn sign_in_intent(&self) -> Result<SignInIntent, AuthError>;

    /// Best-effort session invalidation. `on_complete` fires once whether or not
    /// a client exists and whether or not the vendor call fails.
    fn sign_out(&mut self, on_complete: SignOutCallback);

    /// Turns the host's activity-result payload into exactly one outcome.
    /// Only errors when called before `configure`.
    async fn handle_sign_in_result(
        &self,
        result: SignInResultData,
    ) -> Result<AuthOutcome, AuthError>;

    fn provider_name(&self) -> &'static str;
}
