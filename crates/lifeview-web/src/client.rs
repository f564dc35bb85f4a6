//! The fetch client: one POST round-trip per snapshot.

use lifeview_core::GameState;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{AbortSignal, Headers, RequestInit, Response};

use crate::error::{ViewError, js_error};

/// Fetches [`GameState`] snapshots from the simulation server.
///
/// Each call is one independent round-trip: no retry, no timeout, no
/// caching. Repeated calls simply re-fetch and re-render.
#[derive(Clone, Debug)]
pub struct StateClient {
    api_url: String,
}

impl StateClient {
    /// Create a client for the given endpoint.
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
        }
    }

    /// POST to the endpoint and decode the JSON body into a [`GameState`].
    ///
    /// The request carries a `Content-Type: application/json` header and no
    /// body. A non-success HTTP status maps to [`ViewError::Status`]; when
    /// `signal` is provided, aborting it rejects the request with
    /// [`ViewError::Aborted`].
    pub async fn fetch_state(
        &self,
        signal: Option<&AbortSignal>,
    ) -> Result<GameState, ViewError> {
        let window =
            web_sys::window().ok_or_else(|| ViewError::Js("no global `window`".into()))?;

        let headers = Headers::new().map_err(js_error)?;
        headers
            .append("Content-Type", "application/json")
            .map_err(js_error)?;

        let init = RequestInit::new();
        init.set_method("POST");
        init.set_headers(&headers);
        init.set_signal(signal);

        log::debug!("requesting game state from {}", self.api_url);
        let response: Response =
            JsFuture::from(window.fetch_with_str_and_init(&self.api_url, &init))
                .await
                .map_err(js_error)?
                .dyn_into()
                .map_err(|_| ViewError::Js("fetch did not yield a Response".into()))?;

        if !response.ok() {
            return Err(ViewError::Status(response.status()));
        }

        let body = JsFuture::from(response.text().map_err(js_error)?)
            .await
            .map_err(js_error)?
            .as_string()
            .ok_or_else(|| ViewError::Js("response body is not a string".into()))?;

        Ok(serde_json::from_str(&body)?)
    }
}
