//! Deadline racing for the handler's external stages.

use std::future::Future;
use std::time::Duration;
use tracing::Instrument;

use crate::errors::FeedbackError;

/// Races `operation` against `deadline`.
///
/// The operation runs as a detached task. When the deadline wins, the task
/// is not cancelled: it keeps running to completion and its result is
/// dropped with the join handle, so it never reaches the caller. A panic
/// inside the operation is re-raised here.
pub async fn with_deadline<F, T>(deadline: Duration, operation: F) -> Result<T, FeedbackError>
where
    F: Future<Output = T> + Send + 'static,
    T: Send + 'static,
{
    let handle = tokio::spawn(operation.in_current_span());

    match tokio::time::timeout(deadline, handle).await {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(join_error)) if join_error.is_panic() => {
            std::panic::resume_unwind(join_error.into_panic())
        }
        Ok(Err(join_error)) => Err(FeedbackError::TaskAborted(join_error.to_string())),
        Err(_) => Err(FeedbackError::Timeout(deadline.as_millis() as u64)),
    }
}
