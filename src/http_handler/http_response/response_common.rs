use crate::warn;
use strum_macros::Display;

/// Maps a raw `reqwest::Response` to either the successful response or a [`ResponseError`].
pub(crate) async fn unwrap_return_code(
    response: reqwest::Response,
) -> Result<reqwest::Response, ResponseError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else if status.is_server_error() {
        warn!("{} answered {status}.", response.url());
        Err(ResponseError::InternalServer)
    } else if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
        Err(ResponseError::Unauthorized)
    } else if status == reqwest::StatusCode::NOT_FOUND {
        Err(ResponseError::NotFound)
    } else if status.is_client_error() {
        let body = response.text().await?;
        Err(ResponseError::BadRequest(BadRequestReturn::from_body(&body)))
    } else {
        Err(ResponseError::Unknown)
    }
}

/// Body of a 4xx answer. Structured if the server sent a JSON problem document.
#[derive(Debug, Clone, PartialEq)]
pub struct BadRequestReturn {
    detail: Option<serde_json::Value>,
    raw: String,
}

impl BadRequestReturn {
    pub(crate) fn from_body(body: &str) -> Self {
        Self { detail: serde_json::from_str(body).ok(), raw: body.to_string() }
    }

    pub(crate) fn empty() -> Self { Self { detail: None, raw: String::new() } }

    pub fn detail(&self) -> Option<&serde_json::Value> { self.detail.as_ref() }
    pub fn raw(&self) -> &str { self.raw.as_str() }
}

#[derive(Debug, Display)]
pub enum ResponseError {
    InternalServer,
    BadRequest(BadRequestReturn),
    Unauthorized,
    NotFound,
    NoConnection,
    Timeout,
    Decode(String),
    Unknown,
}

impl std::error::Error for ResponseError {}

impl From<reqwest::Error> for ResponseError {
    fn from(value: reqwest::Error) -> Self {
        if value.is_timeout() {
            ResponseError::Timeout
        } else if value.is_decode() || value.is_body() {
            ResponseError::Decode(value.to_string())
        } else if value.is_connect() {
            ResponseError::NoConnection
        } else if value.is_request() {
            ResponseError::BadRequest(BadRequestReturn::empty())
        } else if value.is_redirect() {
            ResponseError::InternalServer
        } else {
            ResponseError::Unknown
        }
    }
}
