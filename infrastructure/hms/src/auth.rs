use std::sync::Arc;

use async_trait::async_trait;

use business::domain::auth::continuation::{
    catch_vendor_panic, finish_sign_out, settle_detached,
};
use business::domain::auth::errors::AuthError;
use business::domain::auth::model::{
    AccountProfile, AuthOutcome, SignInCompletion, SignInFailure,
};
use business::domain::auth::services::{AuthProvider, SignOutCallback};
use business::domain::auth::value_objects::{
    PlatformContext, REQUIRED_SCOPES, SignInIntent, SignInResultData, SignInScope,
};
use business::domain::logger::Logger;
use business::domain::shared::capability::ClientSlot;
use business::domain::shared::value_objects::Vendor;

use crate::sdk::account::{
    AccountAuthManager, AccountAuthParams, AccountAuthService, AuthAccount, AuthScope, HmsError,
    status_codes,
};

/// Huawei ID (Account Kit) adapter.
pub struct HuaweiAuthProvider {
    manager: Arc<dyn AccountAuthManager>,
    service: ClientSlot<Arc<dyn AccountAuthService>>,
    logger: Arc<dyn Logger>,
}

impl HuaweiAuthProvider {
    pub fn new(manager: Arc<dyn AccountAuthManager>, logger: Arc<dyn Logger>) -> Self {
        Self {
            manager,
            service: ClientSlot::new(),
            logger,
        }
    }

    fn auth_params() -> AccountAuthParams {
        REQUIRED_SCOPES
            .iter()
            .fold(AccountAuthParams::default_auth_request(), |params, scope| {
                params.with_scope(match scope {
                    SignInScope::Email => AuthScope::Email,
                    SignInScope::Profile => AuthScope::Profile,
                })
            })
    }

    fn classify(error: HmsError) -> SignInFailure {
        match error {
            HmsError::Api(exception) => match exception.status_code {
                status_codes::NETWORK_ERROR => SignInFailure::Network,
                status_codes::INTERNAL_ERROR => SignInFailure::Internal,
                status_codes::INVALID_ACCOUNT => SignInFailure::InvalidAccount,
                status_codes::SIGN_IN_CANCELLED => SignInFailure::Cancelled,
                _ => SignInFailure::VendorOperationFailed(exception.to_string()),
            },
            HmsError::Runtime(detail) => SignInFailure::Unexpected(detail),
        }
    }

    fn completion(result: Result<Option<AuthAccount>, HmsError>) -> SignInCompletion {
        match result {
            Err(error) => SignInCompletion::Rejected(Self::classify(error)),
            Ok(account) => SignInCompletion::Completed(account.map(|account| AccountProfile {
                email: account.email,
                account_id: account.union_id,
                display_name: account.display_name,
                photo_url: account.avatar_uri,
            })),
        }
    }
}

#[async_trait]
impl AuthProvider for HuaweiAuthProvider {
    fn configure(&mut self, context: &PlatformContext) {
        let service = match catch_vendor_panic(|| self.manager.service(context, Self::auth_params())) {
            Ok(service) => service,
            Err(detail) => {
                self.service.release();
                self.logger
                    .warn(&format!("Failed to build Huawei account auth service: {}", detail));
                return;
            }
        };
        if self.service.install(service).is_some() {
            self.logger
                .debug("Replaced existing Huawei account auth service on reconfigure");
        }
    }

    fn sign_in_intent(&self) -> Result<SignInIntent, AuthError> {
        let service = self.service.active().ok_or(AuthError::NotConfigured)?;
        catch_vendor_panic(|| service.sign_in_intent()).map_err(|detail| {
            self.logger
                .warn(&format!("Huawei sign-in intent unavailable: {}", detail));
            AuthError::IntentUnavailable(detail)
        })
    }

    fn sign_out(&mut self, on_complete: SignOutCallback) {
        let Some(service) = self.service.release() else {
            on_complete();
            return;
        };

        finish_sign_out(
            async move { service.sign_out().await },
            on_complete,
            self.logger.clone(),
            Vendor::Huawei.display_name(),
        );
    }

    async fn handle_sign_in_result(
        &self,
        result: SignInResultData,
    ) -> Result<AuthOutcome, AuthError> {
        let service = self
            .service
            .active()
            .cloned()
            .ok_or(AuthError::NotConfigured)?;

        Ok(settle_detached(async move {
            AuthOutcome::resolve(Self::completion(service.parse_auth_result(result).await))
        })
        .await)
    }

    fn provider_name(&self) -> &'static str {
        Vendor::Huawei.display_name()
    }
}
