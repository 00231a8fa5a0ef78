use std::sync::Arc;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::model::AuthOutcome;
use crate::domain::auth::services::{AuthProvider, SignOutCallback};
use crate::domain::auth::value_objects::{PlatformContext, SignInIntent, SignInResultData};
use crate::domain::capability::errors::FactoryError;
use crate::domain::capability::factory::AuthProviderFactory;
use crate::domain::logger::Logger;
use crate::domain::shared::value_objects::StoreIdentifier;

/// Sign-in flow owned by one screen controller.
pub struct AuthSession {
    provider: Box<dyn AuthProvider>,
    logger: Arc<dyn Logger>,
}

impl AuthSession {
    /// Creates the store's auth adapter and binds it to `context`.
    pub fn open(
        factory: &dyn AuthProviderFactory,
        store: &StoreIdentifier,
        context: &PlatformContext,
        logger: Arc<dyn Logger>,
    ) -> Result<Self, FactoryError> {
        let mut provider = factory.create(store)?;
        provider.configure(context);

        logger.info(&format!(
            "Auth session opened with provider {} for store {}",
            provider.provider_name(),
            store
        ));

        Ok(Self { provider, logger })
    }

    pub fn provider_name(&self) -> &'static str {
        self.provider.provider_name()
    }

    pub fn sign_in_intent(&self) -> Result<SignInIntent, AuthError> {
        self.provider.sign_in_intent()
    }

    pub async fn complete(&self, result: SignInResultData) -> Result<AuthOutcome, AuthError> {
        let outcome = self.provider.handle_sign_in_result(result).await?;

        if outcome.is_succeeded() {
            self.logger.info(&format!(
                "{} sign-in succeeded for account {}",
                self.provider.provider_name(),
                outcome.account_id()
            ));
        } else {
            self.logger.warn(&format!(
                "{} sign-in failed: {}",
                self.provider.provider_name(),
                outcome.error_message().unwrap_or_default()
            ));
        }

        Ok(outcome)
    }

    pub fn sign_out(&mut self, on_complete: SignOutCallback) {
        self.logger
            .info(&format!("Signing out of {}", self.provider.provider_name()));
        self.provider.sign_out(on_complete);
    }
}
