pub use reqwest;
pub use serde;

pub mod api_constants;
pub mod app_constants;
pub mod environment;
pub mod http_client;
pub mod http_handler_common;
pub mod http_injection;
pub mod http_request;
pub mod http_response;
pub mod url_model;
pub mod url_registry;
#[cfg(test)]
mod tests;
