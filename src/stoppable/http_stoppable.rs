use super::stop_controller::{StopController, Stoppable, StoppableMethod};
use crate::http_handler::api_constants::ApiPrefix;
use crate::http_handler::http_client::HTTPClient;
use crate::http_handler::http_injection::{HttpInjection, HttpRequestInjector};
use crate::http_handler::url_model::UrlModel;
use futures::stream::{BoxStream, Stream};
use std::sync::Arc;

/// Base state for services that both issue HTTP requests and own stoppable streams.
#[derive(Debug, Clone)]
pub struct HttpStoppable<M: StoppableMethod> {
    injection: HttpInjection,
    stopper: StopController<M>,
}

impl<M: StoppableMethod> HttpStoppable<M> {
    /// Combines the injected HTTP state with the instance's own controller.
    pub fn new(injection: HttpInjection, stopper: StopController<M>) -> Self {
        Self { injection, stopper }
    }

    /// The controller tracking this instance's streams.
    pub fn stopper(&self) -> &StopController<M> { &self.stopper }

    /// See [`StopController::guard`].
    pub fn guard<S>(&self, method: M, stream: S) -> BoxStream<'static, S::Item>
    where
        S: Stream + Send + 'static,
        S::Item: Send + 'static,
    {
        self.stopper.guard(method, stream)
    }

    /// See [`StopController::guard_result`].
    ///
    /// # Errors
    /// Returns `result`'s error unchanged.
    pub fn guard_result<S, E>(
        &self,
        method: M,
        result: Result<S, E>,
    ) -> Result<BoxStream<'static, S::Item>, E>
    where
        S: Stream + Send + 'static,
        S::Item: Send + 'static,
    {
        self.stopper.guard_result(method, result)
    }
}

impl<M: StoppableMethod> HttpRequestInjector for HttpStoppable<M> {
    fn url_object(&self) -> &Arc<UrlModel> { self.injection.url_object() }
    fn http(&self) -> &Arc<HTTPClient> { self.injection.http() }
}

impl<M: StoppableMethod> Stoppable for HttpStoppable<M> {
    fn stop(&self) { self.stopper.stop(); }
}

/// A service built on [`HttpStoppable`]. The prefix, the method identifiers and
/// the exclusion list are fixed per type.
pub trait StoppableService: Sized {
    type Method: StoppableMethod;
    const PREFIX: ApiPrefix;
    /// Methods whose streams survive `stop`.
    const EXCLUDES: &'static [Self::Method] = &[];
    /// Tag for trace output, `None` to stay quiet.
    const VERBOSE_LOGGING: Option<&'static str> = None;

    fn from_base(base: HttpStoppable<Self::Method>) -> Self;
}
