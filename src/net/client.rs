//! Shared HTTP plumbing for the TradingAgents API.
//!
//! Every backend call goes through this module: requests get the `/api`
//! base path, a JSON content type, and a fixed 60-second deadline. Failed
//! calls are normalized to one human-readable message, surfaced as a toast
//! through `state::notify`, and still returned as `Err` so callers can
//! apply their own handling.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since the API is only
//! reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Message priority for a failed call: server-provided `detail` field,
//! then the transport error text, then the literal `请求失败`.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Base path prepended to every endpoint.
pub const API_BASE: &str = "/api";

/// Client-wide request deadline in milliseconds.
pub const TIMEOUT_MS: u32 = 60_000;

/// Fallback message when neither the server nor the transport provides one.
pub const FALLBACK_MESSAGE: &str = "请求失败";

/// Transport message reported when the deadline elapses first.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) const TIMEOUT_MESSAGE: &str = "请求超时";

#[cfg(not(feature = "hydrate"))]
const SERVER_STUB: &str = "not available on server";

/// Join the base path and an endpoint path.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn endpoint(path: &str) -> String {
    format!("{API_BASE}{path}")
}

/// Pick the one message shown for a failed call.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn normalize_error_message(detail: Option<&str>, transport: Option<&str>) -> String {
    detail
        .filter(|m| !m.is_empty())
        .or_else(|| transport.filter(|m| !m.is_empty()))
        .unwrap_or(FALLBACK_MESSAGE)
        .to_owned()
}

/// Surface the normalized message as an error toast, then hand it back so
/// the rejection still reaches the caller.
#[cfg(feature = "hydrate")]
fn fail(message: String) -> String {
    leptos::logging::warn!("api request failed: {message}");
    crate::state::notify::error(&message);
    message
}

/// Drive a built request to completion under the client-wide deadline and
/// decode the JSON response.
#[cfg(feature = "hydrate")]
async fn run<T: DeserializeOwned>(request: gloo_net::http::Request) -> Result<T, String> {
    use futures::FutureExt;
    use futures::future::Either;

    let send = request.send().fuse();
    let deadline = gloo_timers::future::TimeoutFuture::new(TIMEOUT_MS).fuse();
    futures::pin_mut!(send, deadline);

    let response = match futures::future::select(send, deadline).await {
        Either::Left((Ok(response), _)) => response,
        Either::Left((Err(err), _)) => {
            return Err(fail(normalize_error_message(None, Some(&err.to_string()))));
        }
        Either::Right(((), _)) => {
            return Err(fail(normalize_error_message(None, Some(TIMEOUT_MESSAGE))));
        }
    };

    if !response.ok() {
        let detail = response
            .json::<super::types::ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.detail);
        return Err(fail(normalize_error_message(detail.as_deref(), None)));
    }

    response
        .json::<T>()
        .await
        .map_err(|err| fail(normalize_error_message(None, Some(&err.to_string()))))
}

/// Issue a GET against the API and decode the JSON response.
///
/// # Errors
///
/// Returns the normalized failure message after surfacing it as a toast.
pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, String> {
    #[cfg(feature = "hydrate")]
    {
        match gloo_net::http::Request::get(&endpoint(path))
            .header("Content-Type", "application/json")
            .build()
        {
            Ok(request) => run(request).await,
            Err(err) => Err(fail(normalize_error_message(None, Some(&err.to_string())))),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
        Err(SERVER_STUB.to_owned())
    }
}

/// Issue a POST with a JSON body and decode the JSON response.
///
/// # Errors
///
/// Returns the normalized failure message after surfacing it as a toast.
pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, String> {
    #[cfg(feature = "hydrate")]
    {
        // `.json()` serializes the body and sets the JSON content type.
        match gloo_net::http::Request::post(&endpoint(path)).json(body) {
            Ok(request) => run(request).await,
            Err(err) => Err(fail(normalize_error_message(None, Some(&err.to_string())))),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, body);
        Err(SERVER_STUB.to_owned())
    }
}

/// Issue a DELETE against the API and decode the JSON response.
///
/// # Errors
///
/// Returns the normalized failure message after surfacing it as a toast.
pub async fn delete_json<T: DeserializeOwned>(path: &str) -> Result<T, String> {
    #[cfg(feature = "hydrate")]
    {
        match gloo_net::http::Request::delete(&endpoint(path))
            .header("Content-Type", "application/json")
            .build()
        {
            Ok(request) => run(request).await,
            Err(err) => Err(fail(normalize_error_message(None, Some(&err.to_string())))),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
        Err(SERVER_STUB.to_owned())
    }
}
