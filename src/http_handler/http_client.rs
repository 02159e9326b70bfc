use super::environment::ApiEnvironment;
use super::http_handler_common::HTTPError;
use super::http_request::request_common::{HTTPRequestMethod, RequestError};
use super::http_response::response_common::unwrap_return_code;
use crate::event;
use futures::stream::{self, BoxStream};
use futures::{StreamExt, TryStreamExt};
use serde::{Serialize, de::DeserializeOwned};
use strum_macros::Display;

/// Stream returned by service methods; one item per response or body chunk.
pub type ResponseStream<T> = BoxStream<'static, Result<T, HTTPError>>;

/// A simple wrapper around `reqwest::Client` shared by every injected service.
///
/// The client is created once per [`ServiceContext`](super::http_injection::ServiceContext)
/// with the timeout taken from the [`ApiEnvironment`]. URLs are always absolute,
/// they come from a [`UrlModel`](super::url_model::UrlModel).
#[derive(Debug, Clone)]
pub struct HTTPClient {
    /// The underlying `reqwest::Client` used to perform HTTP requests.
    client: reqwest::Client,
}

impl HTTPClient {
    /// Constructs a new `HTTPClient` using the configured request timeout.
    ///
    /// # Errors
    /// Returns [`ClientError::Build`] if the TLS backend or resolver cannot be initialised.
    pub fn new(env: &ApiEnvironment) -> Result<HTTPClient, ClientError> {
        let client = reqwest::Client::builder()
            .timeout(env.request_timeout())
            .build()
            .map_err(|e| ClientError::Build(e.to_string()))?;
        Ok(HTTPClient { client })
    }

    /// Returns a reference to the internal `reqwest::Client`.
    pub fn client(&self) -> &reqwest::Client { &self.client }

    /// Sends a request with an optional JSON body and decodes the JSON answer.
    pub async fn send_json<B, T>(
        &self,
        method: HTTPRequestMethod,
        url: &str,
        body: Option<&B>,
    ) -> Result<T, HTTPError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let json_body = body.map(serde_json::to_value).transpose().map_err(RequestError::from)?;
        Self::execute(self.client.clone(), method, url.to_string(), json_body).await
    }

    /// Sends a GET request to `url` and decodes the JSON answer.
    ///
    /// # Errors
    /// Returns [`HTTPError`] if the request fails, the status is not a success
    /// or the body is not valid JSON for `T`.
    pub async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T, HTTPError> {
        self.send_json::<(), T>(HTTPRequestMethod::Get, url, None).await
    }

    /// Sends a DELETE request to `url` and decodes the JSON answer.
    ///
    /// # Errors
    /// Same as [`HTTPClient::get`].
    pub async fn delete<T: DeserializeOwned>(&self, url: &str) -> Result<T, HTTPError> {
        self.send_json::<(), T>(HTTPRequestMethod::Delete, url, None).await
    }

    /// Sends `body` as JSON with a POST request.
    ///
    /// # Arguments
    /// - `url`: absolute target, usually from a [`UrlModel`](super::url_model::UrlModel).
    /// - `body`: request payload.
    ///
    /// # Errors
    /// Returns [`RequestError::Body`] if `body` cannot be serialized, otherwise as [`HTTPClient::get`].
    pub async fn post<B, T>(&self, url: &str, body: &B) -> Result<T, HTTPError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send_json(HTTPRequestMethod::Post, url, Some(body)).await
    }

    /// Sends `body` as JSON with a PUT request.
    ///
    /// # Errors
    /// Same as [`HTTPClient::post`].
    pub async fn put<B, T>(&self, url: &str, body: &B) -> Result<T, HTTPError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send_json(HTTPRequestMethod::Put, url, Some(body)).await
    }

    /// Turns a single request into a lazy one-element stream.
    ///
    /// Nothing is sent until the stream is polled. The body is serialized
    /// eagerly, so a body that cannot be encoded fails here and not inside the stream.
    ///
    /// # Errors
    /// Returns [`RequestError::Body`] wrapped in [`HTTPError`] if `body` cannot be serialized.
    pub fn request_stream<B, T>(
        &self,
        method: HTTPRequestMethod,
        url: String,
        body: Option<&B>,
    ) -> Result<ResponseStream<T>, HTTPError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned + Send + 'static,
    {
        let json_body = body.map(serde_json::to_value).transpose().map_err(RequestError::from)?;
        let client = self.client.clone();
        Ok(stream::once(Self::execute(client, method, url, json_body)).boxed())
    }

    /// Streams the raw body of a download endpoint chunk by chunk.
    pub fn get_bytes_stream(&self, url: String) -> ResponseStream<Vec<u8>> {
        let client = self.client.clone();
        stream::once(async move {
            event!("GET {url} (streamed)");
            let raw = client.get(url.as_str()).send().await?;
            let response = unwrap_return_code(raw).await?;
            Ok::<_, HTTPError>(
                response.bytes_stream().map_ok(|chunk| chunk.to_vec()).map_err(HTTPError::from),
            )
        })
        .try_flatten()
        .boxed()
    }

    async fn execute<T: DeserializeOwned>(
        client: reqwest::Client,
        method: HTTPRequestMethod,
        url: String,
        body: Option<serde_json::Value>,
    ) -> Result<T, HTTPError> {
        event!("{method} {url}");
        let mut request = client.request(method.into(), url.as_str());
        if let Some(json) = body.as_ref() {
            request = request.json(json);
        }
        let response = unwrap_return_code(request.send().await?).await?;
        Ok(response.json::<T>().await?)
    }
}

#[derive(Debug, Display, PartialEq, Eq)]
pub enum ClientError {
    Build(String),
}

impl std::error::Error for ClientError {}
