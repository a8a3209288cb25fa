//! Thin JSON-over-fetch transport used by `api` and `identity`.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every call resolves to [`ApiError::Unavailable`] since
//! these requests are only meaningful in the browser.

#![allow(clippy::unused_async)]

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::ApiError;

/// HTTP verbs that carry a JSON body.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum BodyMethod {
    Post,
    Put,
}

#[cfg(feature = "hydrate")]
fn network(e: gloo_net::Error) -> ApiError {
    ApiError::Network(e.to_string())
}

#[cfg(feature = "hydrate")]
async fn check(resp: gloo_net::http::Response) -> Result<gloo_net::http::Response, ApiError> {
    if resp.ok() {
        return Ok(resp);
    }
    let status = resp.status();
    let body = resp.text().await.ok();
    Err(ApiError::from_status(status, body.as_deref()))
}

/// `GET url` and decode the JSON body.
pub(crate) async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(url).send().await.map_err(network)?;
        let resp = check(resp).await?;
        resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
        Err(ApiError::Unavailable)
    }
}

/// Send `body` as JSON and decode the JSON reply.
pub(crate) async fn send_json<B, T>(method: BodyMethod, url: &str, body: &B) -> Result<T, ApiError>
where
    B: Serialize + ?Sized,
    T: DeserializeOwned,
{
    #[cfg(feature = "hydrate")]
    {
        let resp = send_raw(method, url, body).await?;
        resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (method, url, serde_json::to_value(body));
        Err(ApiError::Unavailable)
    }
}

/// Send `body` as JSON and ignore whatever the server replies with.
pub(crate) async fn send_json_discard<B>(method: BodyMethod, url: &str, body: &B) -> Result<(), ApiError>
where
    B: Serialize + ?Sized,
{
    #[cfg(feature = "hydrate")]
    {
        send_raw(method, url, body).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (method, url, serde_json::to_value(body));
        Err(ApiError::Unavailable)
    }
}

#[cfg(feature = "hydrate")]
async fn send_raw<B>(method: BodyMethod, url: &str, body: &B) -> Result<gloo_net::http::Response, ApiError>
where
    B: Serialize + ?Sized,
{
    let builder = match method {
        BodyMethod::Post => gloo_net::http::Request::post(url),
        BodyMethod::Put => gloo_net::http::Request::put(url),
    };
    let resp = builder.json(body).map_err(network)?.send().await.map_err(network)?;
    check(resp).await
}

/// Bodyless `POST` (logout and similar commands).
pub(crate) async fn post_empty(url: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(url).send().await.map_err(network)?;
        check(resp).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
        Err(ApiError::Unavailable)
    }
}

/// `DELETE url`, discarding the reply body.
pub(crate) async fn delete(url: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::delete(url).send().await.map_err(network)?;
        check(resp).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
        Err(ApiError::Unavailable)
    }
}
