use serde::Serialize;

/// Why a sign-in attempt produced a failed outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum SignInFailure {
    Network,
    Internal,
    InvalidAccount,
    Cancelled,
    VendorOperationFailed(String),
    AccountMissing,
    IncompleteAccountData,
    Unexpected(String),
}

impl std::fmt::Display for SignInFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SignInFailure::Network => write!(f, "Network error, please check your connection"),
            SignInFailure::Internal => write!(f, "Internal error, please try again"),
            SignInFailure::InvalidAccount => write!(f, "Invalid account"),
            SignInFailure::Cancelled => write!(f, "Sign-in cancelled"),
            SignInFailure::VendorOperationFailed(detail) => write!(f, "sign-in failed: {}", detail),
            SignInFailure::AccountMissing => write!(f, "account is null"),
            SignInFailure::IncompleteAccountData => {
                write!(f, "missing required information (email or ID)")
            }
            SignInFailure::Unexpected(detail) => write!(f, "unexpected error: {}", detail),
        }
    }
}

/// Account fields as read from a vendor account object. Any of them may be absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AccountProfile {
    pub email: Option<String>,
    pub account_id: Option<String>,
    pub display_name: Option<String>,
    pub photo_url: Option<String>,
}

/// Vendor-neutral view of a finished sign-in task.
#[derive(Debug, Clone, PartialEq)]
pub enum SignInCompletion {
    /// The vendor reported the task unsuccessful.
    Rejected(SignInFailure),
    /// The vendor reported success; the account object may still be missing.
    Completed(Option<AccountProfile>),
}

/// Normalized result of one sign-in attempt.
///
/// Only constructible through [`AuthOutcome::succeeded`], [`AuthOutcome::failed`]
/// and [`AuthOutcome::resolve`], which keep these invariants:
/// a succeeded outcome has non-empty `email` and `account_id`; a failed one has
/// empty display fields and an error message.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuthOutcome {
    email: String,
    display_name: String,
    photo_url: String,
    account_id: String,
    succeeded: bool,
    error_message: Option<String>,
    #[serde(skip)]
    failure: Option<SignInFailure>,
}

impl AuthOutcome {
    /// Returns `None` when `email` or `account_id` is empty.
    pub fn succeeded(
        email: String,
        account_id: String,
        display_name: String,
        photo_url: String,
    ) -> Option<Self> {
        if email.is_empty() || account_id.is_empty() {
            return None;
        }
        Some(Self {
            email,
            display_name,
            photo_url,
            account_id,
            succeeded: true,
            error_message: None,
            failure: None,
        })
    }

    pub fn failed(failure: SignInFailure) -> Self {
        Self {
            email: String::new(),
            display_name: String::new(),
            photo_url: String::new(),
            account_id: String::new(),
            succeeded: false,
            error_message: Some(failure.to_string()),
            failure: Some(failure),
        }
    }

    /// Applies the outcome policy shared by every auth adapter.
    pub fn resolve(completion: SignInCompletion) -> Self {
        let profile = match completion {
            SignInCompletion::Rejected(failure) => return Self::failed(failure),
            SignInCompletion::Completed(None) => {
                return Self::failed(SignInFailure::AccountMissing);
            }
            SignInCompletion::Completed(Some(profile)) => profile,
        };

        let email = profile.email.unwrap_or_default();
        let account_id = profile.account_id.unwrap_or_default();

        Self::succeeded(
            email,
            account_id,
            profile.display_name.unwrap_or_default(),
            profile.photo_url.unwrap_or_default(),
        )
        .unwrap_or_else(|| Self::failed(SignInFailure::IncompleteAccountData))
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn photo_url(&self) -> &str {
        &self.photo_url
    }

    pub fn account_id(&self) -> &str {
        &self.account_id
    }

    pub fn is_succeeded(&self) -> bool {
        self.succeeded
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn failure(&self) -> Option<&SignInFailure> {
        self.failure.as_ref()
    }
}
