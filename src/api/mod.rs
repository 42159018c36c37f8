//! Typed REST client for the kraken backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning [`ApiError::ServerSide`] since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every request funnels through the helpers below. Non-2xx responses are
//! decoded into the backend's error body and surfaced as [`ApiError::Api`];
//! transport and decode failures get their own variants. Callers receive
//! `Result` values and decide how to degrade, nothing in here panics.

#![allow(clippy::unused_async)]

pub mod attacks;
pub mod leeches;
pub mod models;
pub mod workspaces;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::api::models::ApiErrorResponse;

/// Result alias used by all client functions.
pub type ApiResult<T> = Result<T, ApiError>;

/// Failure modes of a backend request.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (DNS, connection, CORS, ...).
    #[error("network error: {0}")]
    Network(String),
    /// The backend answered with an error body.
    #[error("{}", .0.message)]
    Api(ApiErrorResponse),
    /// The response body did not match the expected shape.
    #[error("malformed response: {0}")]
    Decode(String),
    /// Called during server-side rendering where no browser fetch exists.
    #[error("not available during server rendering")]
    ServerSide,
}

/// `GET` a JSON resource.
pub(crate) async fn get_json<T: DeserializeOwned>(
    path: String,
    query: Vec<(&'static str, String)>,
) -> ApiResult<T> {
    #[cfg(feature = "hydrate")]
    {
        let response = gloo_net::http::Request::get(&path)
            .query(query)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        decode_response(response).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, query);
        Err(ApiError::ServerSide)
    }
}

/// `POST` a JSON body and decode a JSON response.
pub(crate) async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: String,
    body: &B,
) -> ApiResult<T> {
    #[cfg(feature = "hydrate")]
    {
        let response = gloo_net::http::Request::post(&path)
            .json(body)
            .map_err(|e| ApiError::Decode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        decode_response(response).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, body);
        Err(ApiError::ServerSide)
    }
}

/// `PUT` a JSON body, expecting an empty success response.
pub(crate) async fn put_json<B: Serialize>(path: String, body: &B) -> ApiResult<()> {
    #[cfg(feature = "hydrate")]
    {
        let response = gloo_net::http::Request::put(&path)
            .json(body)
            .map_err(|e| ApiError::Decode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        check_status(response).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, body);
        Err(ApiError::ServerSide)
    }
}

/// `DELETE` a resource, expecting an empty success response.
pub(crate) async fn delete(path: String) -> ApiResult<()> {
    #[cfg(feature = "hydrate")]
    {
        let response = gloo_net::http::Request::delete(&path)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        check_status(response).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
        Err(ApiError::ServerSide)
    }
}

#[cfg(feature = "hydrate")]
async fn decode_response<T: DeserializeOwned>(response: gloo_net::http::Response) -> ApiResult<T> {
    if !response.ok() {
        return Err(error_from_response(response).await);
    }
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(feature = "hydrate")]
async fn check_status(response: gloo_net::http::Response) -> ApiResult<()> {
    if response.ok() {
        Ok(())
    } else {
        Err(error_from_response(response).await)
    }
}

/// Turn a non-2xx response into an [`ApiError`], preferring the backend's
/// structured error body over the bare HTTP status.
#[cfg(feature = "hydrate")]
async fn error_from_response(response: gloo_net::http::Response) -> ApiError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();

    match serde_json::from_str::<ApiErrorResponse>(&body) {
        Ok(error) => ApiError::Api(error),
        Err(_) => ApiError::Network(format!("request failed with status {status}")),
    }
}
