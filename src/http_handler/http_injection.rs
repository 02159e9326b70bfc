use super::api_constants::ApiPrefix;
use super::environment::{ApiEnvironment, ConfigError};
use super::http_client::{ClientError, HTTPClient};
use super::url_model::UrlModel;
use super::url_registry::UrlRegistry;
use crate::info;
use crate::stoppable::{HttpStoppable, StopController, StoppableService};
use std::sync::Arc;
use strum_macros::Display;

/// Access to the URL builder and HTTP client injected into a service.
pub trait HttpRequestInjector {
    fn url_object(&self) -> &Arc<UrlModel>;
    fn http(&self) -> &Arc<HTTPClient>;
}

/// The dependency-bearing base state of an HTTP service.
#[derive(Debug, Clone)]
pub struct HttpInjection {
    url_object: Arc<UrlModel>,
    http: Arc<HTTPClient>,
}

impl HttpInjection {
    pub fn new(url_object: Arc<UrlModel>, http: Arc<HTTPClient>) -> Self { Self { url_object, http } }
}

impl HttpRequestInjector for HttpInjection {
    fn url_object(&self) -> &Arc<UrlModel> { &self.url_object }
    fn http(&self) -> &Arc<HTTPClient> { &self.http }
}

/// A service that only needs HTTP injection. The prefix is fixed per type.
pub trait HttpRequestInjectable: Sized {
    const PREFIX: ApiPrefix;

    fn from_injection(base: HttpInjection) -> Self;
}

/// Struct holding the process-wide state every service is built from: the
/// environment, the URL registry and the shared HTTP client.
#[derive(Debug, Clone)]
pub struct ServiceContext {
    env: Arc<ApiEnvironment>,
    registry: Arc<UrlRegistry>,
    http: Arc<HTTPClient>,
}

impl ServiceContext {
    /// Builds the registry and the shared client.
    ///
    /// # Errors
    /// Returns [`ClientError`] if the HTTP client cannot be created.
    pub fn new(env: ApiEnvironment) -> Result<Self, ClientError> {
        let http = Arc::new(HTTPClient::new(&env)?);
        let registry = Arc::new(UrlRegistry::new(&env));
        info!("Service context ready for {} with {} URL builders.", env.auth_server(), registry.len());
        Ok(Self { env: Arc::new(env), registry, http })
    }

    /// Reads the environment and builds the context in one step.
    ///
    /// # Errors
    /// Returns a [`ContextError`] if configuration or client setup fails.
    pub fn from_env() -> Result<Self, ContextError> {
        let env = ApiEnvironment::from_env().map_err(ContextError::Config)?;
        Self::new(env).map_err(ContextError::Client)
    }

    pub fn env(&self) -> Arc<ApiEnvironment> { Arc::clone(&self.env) }

    pub fn registry(&self) -> Arc<UrlRegistry> { Arc::clone(&self.registry) }

    pub fn http(&self) -> Arc<HTTPClient> { Arc::clone(&self.http) }

    /// Resolves the base state for `prefix`: one registry lookup, one client handle.
    pub fn inject(&self, prefix: ApiPrefix) -> HttpInjection {
        HttpInjection::new(self.registry.get(prefix), self.http())
    }

    /// Constructs `S` with its injected state in place.
    pub fn build<S: HttpRequestInjectable>(&self) -> S { S::from_injection(self.inject(S::PREFIX)) }

    /// Constructs `S` with injected state and a fresh, instance-scoped stop controller.
    pub fn build_stoppable<S: StoppableService>(&self) -> S {
        let stopper = StopController::new(S::EXCLUDES, S::VERBOSE_LOGGING);
        S::from_base(HttpStoppable::new(self.inject(S::PREFIX), stopper))
    }
}

#[derive(Debug, Display)]
pub enum ContextError {
    Config(ConfigError),
    Client(ClientError),
}

impl std::error::Error for ContextError {}
