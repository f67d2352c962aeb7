use std::future::Future;
use std::time::Duration;
use tracing::debug;

/// Client errors (4xx) are final; everything else is worth another attempt.
fn is_transient(err: &reqwest::Error) -> bool {
    err.status().is_none_or(|status| !status.is_client_error())
}

/// Retries an async request with linear backoff
///
/// # Parameters
/// - `operation`: Closure returning a future
/// - `retries`: Number of retry attempts (total runs = 1 initial + retries)
/// - `delay_ms`: Base delay; attempt `n` waits `n * delay_ms` before retrying
///
/// # Returns
/// Either the successful result or the last error. Client errors are
/// returned immediately.
pub async fn with_retry<F, Fut, T>(
    mut operation: F,
    retries: usize,
    delay_ms: u64,
) -> Result<T, reqwest::Error>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, reqwest::Error>>,
{
    let mut attempt = 1;
    loop {
        match operation().await {
            Ok(val) => return Ok(val),
            Err(err) => {
                if attempt > retries || !is_transient(&err) {
                    return Err(err);
                }
                debug!(
                    "Attempt {}/{} failed: {}. Retrying...",
                    attempt, retries, err
                );
                tokio::time::sleep(Duration::from_millis(delay_ms * attempt as u64)).await;
                attempt += 1;
            }
        }
    }
}
