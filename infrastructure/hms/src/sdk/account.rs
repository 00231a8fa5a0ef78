use std::sync::Arc;

use async_trait::async_trait;

use business::domain::auth::value_objects::{PlatformContext, SignInIntent, SignInResultData};

/// Account Kit result codes the auth adapter maps.
pub mod status_codes {
    pub const INTERNAL_ERROR: i32 = 2003;
    pub const INVALID_ACCOUNT: i32 = 2004;
    pub const NETWORK_ERROR: i32 = 2005;
    pub const SIGN_IN_CANCELLED: i32 = 2012;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthScope {
    Email,
    Profile,
    IdToken,
}

/// `AccountAuthParams`, built the way `AccountAuthParamsHelper` does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountAuthParams {
    pub scopes: Vec<AuthScope>,
}

impl AccountAuthParams {
    /// `DEFAULT_AUTH_REQUEST_PARAM`: openId/unionId only.
    pub fn default_auth_request() -> Self {
        Self { scopes: Vec::new() }
    }

    pub fn with_scope(mut self, scope: AuthScope) -> Self {
        if !self.scopes.contains(&scope) {
            self.scopes.push(scope);
        }
        self
    }

    pub fn requests(&self, scope: AuthScope) -> bool {
        self.scopes.contains(&scope)
    }
}

/// `AuthAccount`. `union_id` is stable across all apps of one developer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthAccount {
    pub union_id: Option<String>,
    pub open_id: Option<String>,
    pub email: Option<String>,
    pub display_name: Option<String>,
    pub avatar_uri: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("ApiException {status_code}: {message}")]
pub struct HmsApiException {
    pub status_code: i32,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HmsError {
    #[error(transparent)]
    Api(#[from] HmsApiException),
    #[error("{0}")]
    Runtime(String),
}

/// `AccountAuthService`.
#[async_trait]
pub trait AccountAuthService: Send + Sync {
    fn sign_in_intent(&self) -> SignInIntent;

    async fn sign_out(&self) -> Result<(), HmsError>;

    /// `AccountAuthManager.parseAuthResultFromIntent`, awaited.
    async fn parse_auth_result(
        &self,
        data: SignInResultData,
    ) -> Result<Option<AuthAccount>, HmsError>;
}

/// `AccountAuthManager` entry point.
pub trait AccountAuthManager: Send + Sync {
    fn service(
        &self,
        context: &PlatformContext,
        params: AccountAuthParams,
    ) -> Arc<dyn AccountAuthService>;
}
