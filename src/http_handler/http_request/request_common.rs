use strum_macros::Display;

/// The HTTP verbs the shared client issues.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Display)]
pub enum HTTPRequestMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl From<HTTPRequestMethod> for reqwest::Method {
    fn from(value: HTTPRequestMethod) -> Self {
        match value {
            HTTPRequestMethod::Get => reqwest::Method::GET,
            HTTPRequestMethod::Post => reqwest::Method::POST,
            HTTPRequestMethod::Put => reqwest::Method::PUT,
            HTTPRequestMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

#[derive(Debug, Display)]
pub enum RequestError {
    InvalidUrl(String),
    Body(String),
    Send(String),
}

impl std::error::Error for RequestError {}

impl From<serde_json::Error> for RequestError {
    fn from(value: serde_json::Error) -> Self { RequestError::Body(value.to_string()) }
}

impl From<reqwest::Error> for RequestError {
    fn from(value: reqwest::Error) -> Self {
        if value.is_builder() {
            RequestError::InvalidUrl(value.to_string())
        } else {
            RequestError::Send(value.to_string())
        }
    }
}
