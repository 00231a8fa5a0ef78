use std::sync::Arc;

use async_trait::async_trait;

use business::domain::auth::value_objects::{PlatformContext, SignInIntent, SignInResultData};

/// `CommonStatusCodes` / `GoogleSignInStatusCodes` values the auth adapter maps.
pub mod status_codes {
    pub const INVALID_ACCOUNT: i32 = 5;
    pub const NETWORK_ERROR: i32 = 7;
    pub const INTERNAL_ERROR: i32 = 8;
    pub const SIGN_IN_FAILED: i32 = 12500;
    pub const SIGN_IN_CANCELLED: i32 = 12501;
    pub const SIGN_IN_CURRENTLY_IN_PROGRESS: i32 = 12502;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoogleSignInOptions {
    pub request_id: bool,
    pub request_email: bool,
    pub request_profile: bool,
}

impl GoogleSignInOptions {
    /// `DEFAULT_SIGN_IN`: requests the user id only.
    pub fn default_sign_in() -> Self {
        Self {
            request_id: true,
            request_email: false,
            request_profile: false,
        }
    }

    pub fn request_email(mut self) -> Self {
        self.request_email = true;
        self
    }

    pub fn request_profile(mut self) -> Self {
        self.request_profile = true;
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GoogleSignInAccount {
    pub id: Option<String>,
    pub email: Option<String>,
    pub display_name: Option<String>,
    pub photo_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("ApiException {status_code}: {}", .message.as_deref().unwrap_or("no message"))]
pub struct ApiException {
    pub status_code: i32,
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GmsError {
    #[error(transparent)]
    Api(#[from] ApiException),
    /// Anything the SDK threw that is not an `ApiException`.
    #[error("{0}")]
    Runtime(String),
}

/// `GoogleSignInClient`.
#[async_trait]
pub trait GoogleSignInClient: Send + Sync {
    fn sign_in_intent(&self) -> SignInIntent;

    async fn sign_out(&self) -> Result<(), GmsError>;

    /// `GoogleSignIn.getSignedInAccountFromIntent`, awaited.
    async fn signed_in_account_from_intent(
        &self,
        data: SignInResultData,
    ) -> Result<Option<GoogleSignInAccount>, GmsError>;
}

/// `GoogleSignIn` entry point.
pub trait GoogleSignIn: Send + Sync {
    fn client(
        &self,
        context: &PlatformContext,
        options: GoogleSignInOptions,
    ) -> Arc<dyn GoogleSignInClient>;
}
