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
use business::domain::auth::value_objects::{PlatformContext, SignInIntent, SignInResultData};
use business::domain::logger::Logger;
use business::domain::shared::capability::ClientSlot;
use business::domain::shared::value_objects::Vendor;

use crate::sdk::sign_in::{
    GmsError, GoogleSignIn, GoogleSignInAccount, GoogleSignInClient, GoogleSignInOptions,
    status_codes,
};

/// Google Sign-In adapter.
pub struct GoogleAuthProvider {
    sdk: Arc<dyn GoogleSignIn>,
    client: ClientSlot<Arc<dyn GoogleSignInClient>>,
    logger: Arc<dyn Logger>,
}

impl GoogleAuthProvider {
    pub fn new(sdk: Arc<dyn GoogleSignIn>, logger: Arc<dyn Logger>) -> Self {
        Self {
            sdk,
            client: ClientSlot::new(),
            logger,
        }
    }

    fn sign_in_options() -> GoogleSignInOptions {
        GoogleSignInOptions::default_sign_in()
            .request_email()
            .request_profile()
    }

    fn classify(error: GmsError) -> SignInFailure {
        match error {
            GmsError::Api(exception) => match exception.status_code {
                status_codes::NETWORK_ERROR => SignInFailure::Network,
                status_codes::INTERNAL_ERROR => SignInFailure::Internal,
                status_codes::INVALID_ACCOUNT => SignInFailure::InvalidAccount,
                status_codes::SIGN_IN_CANCELLED => SignInFailure::Cancelled,
                _ => SignInFailure::VendorOperationFailed(exception.to_string()),
            },
            GmsError::Runtime(detail) => SignInFailure::Unexpected(detail),
        }
    }

    fn completion(
        result: Result<Option<GoogleSignInAccount>, GmsError>,
    ) -> SignInCompletion {
        match result {
            Err(error) => SignInCompletion::Rejected(Self::classify(error)),
            Ok(account) => SignInCompletion::Completed(account.map(|account| AccountProfile {
                email: account.email,
                account_id: account.id,
                display_name: account.display_name,
                photo_url: account.photo_url,
            })),
        }
    }
}

#[async_trait]
impl AuthProvider for GoogleAuthProvider {
    fn configure(&mut self, context: &PlatformContext) {
        let client = match catch_vendor_panic(|| self.sdk.client(context, Self::sign_in_options())) {
            Ok(client) => client,
            Err(detail) => {
                self.client.release();
                self.logger
                    .warn(&format!("Failed to build Google sign-in client: {}", detail));
                return;
            }
        };
        if self.client.install(client).is_some() {
            self.logger
                .debug("Replaced existing Google sign-in client on reconfigure");
        }
    }

    fn sign_in_intent(&self) -> Result<SignInIntent, AuthError> {
        let client = self.client.active().ok_or(AuthError::NotConfigured)?;
        catch_vendor_panic(|| client.sign_in_intent()).map_err(|detail| {
            self.logger
                .warn(&format!("Google sign-in intent unavailable: {}", detail));
            AuthError::IntentUnavailable(detail)
        })
    }

    fn sign_out(&mut self, on_complete: SignOutCallback) {
        match self.client.release() {
            Some(client) => finish_sign_out(
                async move { client.sign_out().await },
                on_complete,
                self.logger.clone(),
                Vendor::Google.display_name(),
            ),
            None => on_complete(),
        }
    }

    async fn handle_sign_in_result(
        &self,
        result: SignInResultData,
    ) -> Result<AuthOutcome, AuthError> {
        let client = self
            .client
            .active()
            .cloned()
            .ok_or(AuthError::NotConfigured)?;

        let outcome = settle_detached(async move {
            let account = client.signed_in_account_from_intent(result).await;
            AuthOutcome::resolve(Self::completion(account))
        })
        .await;

        Ok(outcome)
    }

    fn provider_name(&self) -> &'static str {
        Vendor::Google.display_name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sdk::sign_in::ApiException;
    use mockall::mock;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::sync::oneshot;

    mock! {
        pub Client {}

        #[async_trait]
        impl GoogleSignInClient for Client {
            fn sign_in_intent(&self) -> SignInIntent;
            async fn sign_out(&self) -> Result<(), GmsError>;
            async fn signed_in_account_from_intent(
                &self,
                data: SignInResultData,
            ) -> Result<Option<GoogleSignInAccount>, GmsError>;
        }
    }

    mock! {
        pub Sdk {}

        impl GoogleSignIn for Sdk {
            fn client(
                &self,
                context: &PlatformContext,
                options: GoogleSignInOptions,
            ) -> Arc<dyn GoogleSignInClient>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn context() -> PlatformContext {
        PlatformContext::new("org.recycle.app", "LoginActivity")
    }

    fn result_data() -> SignInResultData {
        SignInResultData::new(-1, Some(serde_json::json!({ "googleSignInAccount": {} })))
    }

    fn provider_with(client: MockClient) -> GoogleAuthProvider {
        let client: Arc<dyn GoogleSignInClient> = Arc::new(client);
        let mut sdk = MockSdk::new();
        sdk.expect_client().returning(move |_, _| client.clone());

        let mut provider = GoogleAuthProvider::new(Arc::new(sdk), mock_logger());
        provider.configure(&context());
        provider
    }

    fn provider_resolving(
        result: Result<Option<GoogleSignInAccount>, GmsError>,
    ) -> GoogleAuthProvider {
        let mut client = MockClient::new();
        client
            .expect_signed_in_account_from_intent()
            .times(1)
            .returning(move |_| result.clone());
        provider_with(client)
    }

    fn api_error(status_code: i32) -> GmsError {
        GmsError::Api(ApiException {
            status_code,
            message: None,
        })
    }

    #[test]
    fn should_request_email_and_profile_when_configuring() {
        let mut sdk = MockSdk::new();
        sdk.expect_client()
            .withf(|ctx, options| {
                ctx.activity == "LoginActivity" && options.request_email && options.request_profile
            })
            .times(1)
            .returning(|_, _| Arc::new(MockClient::new()) as Arc<dyn GoogleSignInClient>);

        let mut provider = GoogleAuthProvider::new(Arc::new(sdk), mock_logger());
        provider.configure(&context());
    }

    #[test]
    fn should_stay_unconfigured_when_client_build_panics() {
        let mut sdk = MockSdk::new();
        sdk.expect_client()
            .returning(|_, _| panic!("SecurityException: unknown calling package"));

        let mut provider = GoogleAuthProvider::new(Arc::new(sdk), mock_logger());
        provider.configure(&context());

        assert_eq!(provider.sign_in_intent(), Err(AuthError::NotConfigured));
    }

    #[test]
    fn should_report_unavailable_intent_when_vendor_panics() {
        let mut client = MockClient::new();
        client
            .expect_sign_in_intent()
            .returning(|| panic!("DeadObjectException"));
        let mut provider = provider_with(client);

        let mut logger = MockLog::new();
        logger
            .expect_warn()
            .withf(|message| message.contains("DeadObjectException"))
            .times(1)
            .returning(|_| ());
        provider.logger = Arc::new(logger);

        assert_eq!(
            provider.sign_in_intent(),
            Err(AuthError::IntentUnavailable("DeadObjectException".to_string()))
        );
    }

    #[test]
    fn should_fail_intent_when_not_configured() {
        let provider = GoogleAuthProvider::new(Arc::new(MockSdk::new()), mock_logger());

        assert_eq!(provider.sign_in_intent(), Err(AuthError::NotConfigured));
    }

    #[test]
    fn should_return_vendor_intent_when_configured() {
        let mut client = MockClient::new();
        client.expect_sign_in_intent().returning(|| {
            SignInIntent::new(
                "com.google.android.gms.auth.GOOGLE_SIGN_IN",
                "com.google.android.gms",
            )
        });

        let provider = provider_with(client);

        let intent = provider.sign_in_intent().unwrap();
        assert_eq!(intent.target_package, "com.google.android.gms");
    }

    #[tokio::test]
    async fn should_fail_result_handling_when_not_configured() {
        let provider = GoogleAuthProvider::new(Arc::new(MockSdk::new()), mock_logger());

        let result = provider.handle_sign_in_result(result_data()).await;

        assert_eq!(result, Err(AuthError::NotConfigured));
    }

    #[tokio::test]
    async fn should_succeed_with_defaults_when_profile_fields_are_missing() {
        let provider = provider_resolving(Ok(Some(GoogleSignInAccount {
            id: Some("123".to_string()),
            email: Some("a@x.com".to_string()),
            display_name: None,
            photo_url: None,
        })));

        let outcome = provider.handle_sign_in_result(result_data()).await.unwrap();

        assert!(outcome.is_succeeded());
        assert_eq!(outcome.email(), "a@x.com");
        assert_eq!(outcome.account_id(), "123");
        assert_eq!(outcome.display_name(), "");
        assert_eq!(outcome.photo_url(), "");
        assert_eq!(outcome.error_message(), None);
    }

    #[tokio::test]
    async fn should_report_cancellation() {
        let provider = provider_resolving(Err(api_error(status_codes::SIGN_IN_CANCELLED)));

        let outcome = provider.handle_sign_in_result(result_data()).await.unwrap();

        assert!(!outcome.is_succeeded());
        assert_eq!(outcome.error_message(), Some("Sign-in cancelled"));
    }

    #[tokio::test]
    async fn should_map_known_status_codes() {
        let cases = [
            (status_codes::NETWORK_ERROR, SignInFailure::Network),
            (status_codes::INTERNAL_ERROR, SignInFailure::Internal),
            (status_codes::INVALID_ACCOUNT, SignInFailure::InvalidAccount),
        ];

        for (code, expected) in cases {
            let provider = provider_resolving(Err(api_error(code)));
            let outcome = provider.handle_sign_in_result(result_data()).await.unwrap();
            assert_eq!(outcome.failure(), Some(&expected));
        }
    }

    #[tokio::test]
    async fn should_fall_back_to_generic_message_for_unmapped_status() {
        let provider = provider_resolving(Err(api_error(status_codes::SIGN_IN_FAILED)));

        let outcome = provider.handle_sign_in_result(result_data()).await.unwrap();

        let message = outcome.error_message().unwrap();
        assert!(message.starts_with("sign-in failed: "));
        assert!(message.contains("12500"));
    }

    #[tokio::test]
    async fn should_fail_when_account_is_null() {
        let provider = provider_resolving(Ok(None));

        let outcome = provider.handle_sign_in_result(result_data()).await.unwrap();

        assert_eq!(outcome.error_message(), Some("account is null"));
    }

    #[tokio::test]
    async fn should_reject_account_without_id() {
        let provider = provider_resolving(Ok(Some(GoogleSignInAccount {
            id: None,
            email: Some("a@x.com".to_string()),
            display_name: Some("A".to_string()),
            photo_url: None,
        })));

        let outcome = provider.handle_sign_in_result(result_data()).await.unwrap();

        assert!(!outcome.is_succeeded());
        assert!(
            outcome
                .error_message()
                .unwrap()
                .contains("missing required information")
        );
    }

    #[tokio::test]
    async fn should_convert_runtime_fault_into_unexpected_error() {
        let provider = provider_resolving(Err(GmsError::Runtime("binder died".to_string())));

        let outcome = provider.handle_sign_in_result(result_data()).await.unwrap();

        assert_eq!(outcome.error_message(), Some("unexpected error: binder died"));
    }

    #[test]
    fn should_complete_sign_out_once_without_client() {
        let mut provider = GoogleAuthProvider::new(Arc::new(MockSdk::new()), mock_logger());
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();

        provider.sign_out(Box::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        }));

        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn should_complete_sign_out_once_when_vendor_fails() {
        let mut client = MockClient::new();
        client
            .expect_sign_out()
            .times(1)
            .returning(|| Err(api_error(status_codes::INTERNAL_ERROR)));
        let mut provider = provider_with(client);

        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let (tx, rx) = oneshot::channel();
        provider.sign_out(Box::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            let _ = tx.send(());
        }));

        rx.await.unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(provider.sign_in_intent(), Err(AuthError::NotConfigured));
    }

    #[test]
    fn should_report_google_as_provider_name() {
        let provider = GoogleAuthProvider::new(Arc::new(MockSdk::new()), mock_logger());
        assert_eq!(provider.provider_name(), "Google");
    }
}
