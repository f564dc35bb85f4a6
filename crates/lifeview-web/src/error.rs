//! The client's error type.

use thiserror::Error;

/// Anything that can go wrong while fetching or painting a snapshot.
///
/// Every variant is caught at the top of a poll tick, logged, and swallowed;
/// the view simply keeps showing the previous frame.
#[derive(Debug, Error)]
pub enum ViewError {
    /// A DOM element named by the configuration is missing.
    #[error("element '{0}' not found in document")]
    ElementMissing(String),

    /// The server answered with a non-success HTTP status.
    #[error("API request error: HTTP status {0}")]
    Status(u16),

    /// The response body was not a valid game state payload.
    #[error("malformed game state payload: {0}")]
    Decode(#[from] serde_json::Error),

    /// The request was cancelled in favour of a newer one.
    #[error("request aborted")]
    Aborted,

    /// Any other JavaScript-side failure.
    #[error("JavaScript error: {0}")]
    Js(String),
}

/// Map a rejected JS promise into a [`ViewError`].
///
/// Fetches cancelled through their `AbortSignal` reject with an `AbortError`
/// `DOMException`; those become [`ViewError::Aborted`] so the poll loop can
/// tell a superseded request from a real failure.
#[cfg(target_arch = "wasm32")]
pub(crate) fn js_error(err: wasm_bindgen::JsValue) -> ViewError {
    use wasm_bindgen::JsCast;

    if let Some(ex) = err.dyn_ref::<web_sys::DomException>() {
        if ex.name() == "AbortError" {
            return ViewError::Aborted;
        }
        return ViewError::Js(format!("{}: {}", ex.name(), ex.message()));
    }
    ViewError::Js(format!("{err:?}"))
}
