use std::any::Any;
use std::fmt::Display;
use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures::FutureExt;
use tokio::runtime::Handle;
use tokio::sync::oneshot;

use super::model::{AuthOutcome, SignInFailure};
use super::services::SignOutCallback;
use crate::domain::logger::Logger;

/// Runs a sign-in attempt detached from the caller and resumes it exactly once.
///
/// The attempt is driven to completion on the runtime even if the returned
/// future is dropped, so the vendor task is always settled. The oneshot sender
/// is consumed by its single send. Outside a tokio runtime the attempt runs
/// inline.
pub async fn settle_detached<F>(attempt: F) -> AuthOutcome
where
    F: Future<Output = AuthOutcome> + Send + 'static,
{
    let Ok(runtime) = Handle::try_current() else {
        return guarded(attempt).await;
    };

    let (sender, receiver) = oneshot::channel();

    runtime.spawn(async move {
        // Err means the caller went away; the outcome is discarded.
        let _ = sender.send(guarded(attempt).await);
    });

    receiver.await.unwrap_or_else(|_| {
        AuthOutcome::failed(SignInFailure::Unexpected(
            "sign-in task ended without a result".to_string(),
        ))
    })
}

async fn guarded<F>(attempt: F) -> AuthOutcome
where
    F: Future<Output = AuthOutcome>,
{
    match AssertUnwindSafe(attempt).catch_unwind().await {
        Ok(outcome) => outcome,
        Err(panic) => AuthOutcome::failed(SignInFailure::Unexpected(panic_detail(&panic))),
    }
}

/// Drives a vendor sign-out call in the background and then fires `on_complete`.
///
/// Vendor errors and panics are logged, never returned. Without a tokio runtime
/// the vendor call is skipped and `on_complete` fires immediately.
pub fn finish_sign_out<F, E>(
    vendor_call: F,
    on_complete: SignOutCallback,
    logger: Arc<dyn Logger>,
    provider: &'static str,
) where
    F: Future<Output = Result<(), E>> + Send + 'static,
    E: Display,
{
    let Ok(runtime) = Handle::try_current() else {
        logger.warn(&format!(
            "No async runtime available, skipping {} sign-out call",
            provider
        ));
        on_complete();
        return;
    };

    runtime.spawn(async move {
        match AssertUnwindSafe(vendor_call).catch_unwind().await {
            Ok(Ok(())) => logger.debug(&format!("{} sign-out completed", provider)),
            Ok(Err(error)) => logger.warn(&format!("{} sign-out failed: {}", provider, error)),
            Err(panic) => logger.warn(&format!(
                "{} sign-out failed: {}",
                provider,
                panic_detail(&panic)
            )),
        }
        on_complete();
    });
}

/// Runs a synchronous vendor call, turning a panic into its detail text.
pub fn catch_vendor_panic<T>(call: impl FnOnce() -> T) -> Result<T, String> {
    std::panic::catch_unwind(AssertUnwindSafe(call)).map_err(|panic| panic_detail(&panic))
}

/// Best-effort text of a panic payload.
pub fn panic_detail(panic: &Box<dyn Any + Send>) -> String {
    if let Some(message) = panic.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}
