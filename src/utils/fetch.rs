//! Catalog fetching over the browser Fetch API.
//!
//! The item snapshot comes from a single REST endpoint; this module
//! wraps the fetch in a timeout race and layers the sessionStorage
//! cache on top so a browsing session hits the network once.

use js_sys::{Array, Promise};
use serde::{Serialize, de::DeserializeOwned};
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use crate::config::FETCH_TIMEOUT_MS;
use crate::core::error::FetchError;
use crate::utils::cache;

// =============================================================================
// Promise Racing
// =============================================================================

/// Outcome of racing a promise against the timeout.
#[derive(Debug)]
pub enum RaceResult {
    /// The promise settled first; holds its resolved value.
    Completed(JsValue),
    /// The timeout fired before the promise settled.
    TimedOut,
    /// The promise rejected.
    Error(String),
}

/// Race any JavaScript promise against a timer.
///
/// The browser Fetch API has no native timeout, so the request promise
/// is raced via `Promise.race` against a `setTimeout` promise that
/// resolves to `undefined`. An `undefined` winner therefore means the
/// timer fired first (the catalog endpoint never returns `undefined`).
pub async fn race_with_timeout(promise: Promise, timeout_ms: i32) -> RaceResult {
    let Some(window) = web_sys::window() else {
        return RaceResult::Error("Window not available".to_string());
    };

    let timeout_promise = Promise::new(&mut |resolve, _| {
        let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, timeout_ms);
    });

    let contenders = Array::new();
    contenders.push(&promise);
    contenders.push(&timeout_promise);

    match JsFuture::from(Promise::race(&contenders)).await {
        Ok(value) if value.is_undefined() => RaceResult::TimedOut,
        Ok(value) => RaceResult::Completed(value),
        Err(err) => {
            RaceResult::Error(err.as_string().unwrap_or_else(|| "Unknown error".to_string()))
        }
    }
}

// =============================================================================
// JSON Fetching
// =============================================================================

/// GET a URL and deserialize the JSON body.
pub async fn fetch_json<T: DeserializeOwned>(url: &str) -> Result<T, FetchError> {
    let body = fetch_text(url).await?;
    serde_json::from_str(&body).map_err(|e| FetchError::JsonParseError(e.to_string()))
}

/// GET a URL with a sessionStorage read-through cache.
///
/// A cache hit skips the network entirely, which is what keeps filter
/// changes on the explore grid instant after the first load. Writes are
/// best-effort; a full or disabled storage never fails the fetch. The
/// browser drops the cache when the tab closes.
pub async fn fetch_json_cached<T>(url: &str, cache_key: &str) -> Result<T, FetchError>
where
    T: DeserializeOwned + Serialize,
{
    if let Some(cached) = cache::get::<T>(cache_key) {
        return Ok(cached);
    }

    let data = fetch_json::<T>(url).await?;
    let _ = cache::set(cache_key, &data);
    Ok(data)
}

/// GET a URL as text, honoring [`FETCH_TIMEOUT_MS`].
///
/// Non-2xx statuses surface as [`FetchError::HttpError`] with the code;
/// the REST backend uses those for bad query parameters.
async fn fetch_text(url: &str) -> Result<String, FetchError> {
    let window = web_sys::window().ok_or(FetchError::NoWindow)?;

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);
    let request =
        Request::new_with_str_and_init(url, &opts).map_err(|_| FetchError::RequestCreationFailed)?;

    let raced = race_with_timeout(window.fetch_with_request(&request), FETCH_TIMEOUT_MS).await;
    let response: Response = match raced {
        RaceResult::TimedOut => return Err(FetchError::Timeout),
        RaceResult::Error(msg) => return Err(FetchError::NetworkError(msg)),
        RaceResult::Completed(value) => value.dyn_into().map_err(|_| FetchError::InvalidContent)?,
    };

    if !response.ok() {
        return Err(FetchError::HttpError(response.status()));
    }

    let text_promise = response.text().map_err(|_| FetchError::ResponseReadFailed)?;
    let text = JsFuture::from(text_promise)
        .await
        .map_err(|_| FetchError::ResponseReadFailed)?;
    text.as_string().ok_or(FetchError::InvalidContent)
}
