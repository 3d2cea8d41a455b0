use crate::error::{ApiError, ApiResult};
use reqwest::Response;
use tracing::{debug, warn};

/// Status reported for a request that never received a response.
pub const NO_RESPONSE_STATUS: u16 = 0;

/// Status codes whose failures are replaced by [`ApiError::Runtime`].
pub const NORMALIZED_STATUSES: [u16; 2] = [NO_RESPONSE_STATUS, 500];

/// Transforms the outcome of every request issued by an [`ApiClient`](crate::ApiClient).
///
/// Runs exactly once per request, after non-2xx responses have been turned into errors.
pub trait ResponseInterceptor: Send + Sync {
    fn intercept(&self, outcome: Result<Response, reqwest::Error>) -> ApiResult<Response>;

    /// Maps a failure raised while reading a response body that already passed `intercept`.
    fn intercept_body_error(&self, err: reqwest::Error) -> ApiError {
        ApiError::Http(err)
    }
}

impl<F> ResponseInterceptor for F
where
    F: Fn(Result<Response, reqwest::Error>) -> ApiResult<Response> + Send + Sync,
{
    fn intercept(&self, outcome: Result<Response, reqwest::Error>) -> ApiResult<Response> {
        self(outcome)
    }
}

/// Replaces network-level failures and HTTP 500 with a runtime error carrying the
/// original message. Every other outcome is passed on untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct NormalizeServerErrors;

impl ResponseInterceptor for NormalizeServerErrors {
    fn intercept(&self, outcome: Result<Response, reqwest::Error>) -> ApiResult<Response> {
        outcome.map_err(normalize_error)
    }

    fn intercept_body_error(&self, err: reqwest::Error) -> ApiError {
        normalize_error(err)
    }
}

/// Hands back the transport outcome as is.
#[derive(Debug, Clone, Copy, Default)]
pub struct Passthrough;

impl ResponseInterceptor for Passthrough {
    fn intercept(&self, outcome: Result<Response, reqwest::Error>) -> ApiResult<Response> {
        outcome.map_err(ApiError::Http)
    }
}

/// Status of the failed request, `0` when no response arrived.
///
/// Returns `None` for errors raised while building the request, since no request was sent.
pub fn failure_status(err: &reqwest::Error) -> Option<u16> {
    if err.is_builder() {
        return None;
    }

    Some(err.status().map_or(NO_RESPONSE_STATUS, |s| s.as_u16()))
}

pub fn is_normalized_status(status: u16) -> bool {
    NORMALIZED_STATUSES.contains(&status)
}

pub fn normalize_error(err: reqwest::Error) -> ApiError {
    match failure_status(&err) {
        Some(status) if is_normalized_status(status) => {
            warn!("Request failed with status {}: {}", status, err);
            ApiError::Runtime {
                message: err.to_string(),
            }
        }
        status => {
            debug!("Propagating request failure (status {:?}): {}", status, err);
            ApiError::Http(err)
        }
    }
}
