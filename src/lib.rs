#![allow(clippy::similar_names, clippy::module_name_repetitions)]
#![warn(clippy::shadow_reuse, clippy::shadow_same, clippy::builtin_type_shadow)]
//! URL building, HTTP client injection and stoppable response streams for the
//! service layer of a REST frontend.
//!
//! Services are built from a [`ServiceContext`], which owns the process-wide
//! [`ApiEnvironment`], the [`UrlRegistry`] and the shared [`HTTPClient`].
//! Services that return streams hold a [`StopController`] and end all of them
//! with [`Stoppable::stop`].
pub mod http_handler;
pub mod logger;
pub mod services;
pub mod stoppable;

pub use http_handler::api_constants::ApiPrefix;
pub use http_handler::environment::ApiEnvironment;
pub use http_handler::http_client::HTTPClient;
pub use http_handler::http_injection::{
    HttpInjection, HttpRequestInjectable, HttpRequestInjector, ServiceContext,
};
pub use http_handler::url_model::UrlModel;
pub use http_handler::url_registry::UrlRegistry;
pub use stoppable::{HttpStoppable, StopController, Stoppable, StoppableMethod, StoppableService};
