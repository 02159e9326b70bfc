use crate::http_handler::api_constants::{ApiPrefix, dynamic_form};
use crate::http_handler::app_constants::PaginatorParams;
use crate::http_handler::http_client::{HTTPClient, ResponseStream};
use crate::http_handler::http_handler_common::HTTPError;
use crate::http_handler::http_injection::HttpRequestInjector;
use crate::http_handler::http_request::request_common::HTTPRequestMethod;
use crate::http_handler::url_model::UrlModel;
use crate::stoppable::{HttpStoppable, Stoppable, StoppableService};
use serde::{Serialize, de::DeserializeOwned};
use std::fmt::Display;
use std::sync::Arc;

#[derive(Debug, PartialEq, Eq, Clone, Copy, strum_macros::Display)]
pub enum DynamicFormMethod {
    GetAll,
    GetById,
    GetByCondition,
    Create,
    Update,
    Delete,
    ExportSurveyWord,
    ExportSurveyPdf,
}

/// Client for `/dynamic-form`.
///
/// Every method returns a lazy stream; nothing is sent before it is polled.
/// [`Stoppable::stop`] ends all pending streams except deletions, which always
/// run to completion once started.
#[derive(Debug, Clone)]
pub struct DynamicFormService {
    base: HttpStoppable<DynamicFormMethod>,
}

impl StoppableService for DynamicFormService {
    type Method = DynamicFormMethod;
    const PREFIX: ApiPrefix = ApiPrefix::DynamicForm;
    const EXCLUDES: &'static [DynamicFormMethod] = &[DynamicFormMethod::Delete];
    const VERBOSE_LOGGING: Option<&'static str> = None;

    fn from_base(base: HttpStoppable<DynamicFormMethod>) -> Self { Self { base } }
}

impl HttpRequestInjector for DynamicFormService {
    fn url_object(&self) -> &Arc<UrlModel> { self.base.url_object() }
    fn http(&self) -> &Arc<HTTPClient> { self.base.http() }
}

impl Stoppable for DynamicFormService {
    fn stop(&self) { self.base.stop(); }
}

impl DynamicFormService {
    /// Number of this instance's requests that `stop` would still cut short.
    pub fn outstanding(&self) -> usize { self.base.stopper().outstanding() }

    /// Lists forms page by page.
    ///
    /// # Arguments
    /// - `paginator`: sent as `page`, `pageSize` and `pageNumber` query parameters.
    ///
    /// # Returns
    /// A stream yielding the decoded page once.
    ///
    /// # Errors
    /// Never fails synchronously; transport and status errors are yielded by the stream.
    pub fn get_all<T>(&self, paginator: &PaginatorParams) -> Result<ResponseStream<T>, HTTPError>
    where T: DeserializeOwned + Send + 'static {
        let url = self.url_object().base_with_query(Some(paginator));
        self.request::<(), T>(DynamicFormMethod::GetAll, HTTPRequestMethod::Get, url, None)
    }

    /// Fetches the form with the given `id`.
    ///
    /// # Errors
    /// Never fails synchronously; transport and status errors are yielded by the stream.
    pub fn get_by_id<T>(&self, id: impl Display) -> Result<ResponseStream<T>, HTTPError>
    where T: DeserializeOwned + Send + 'static {
        let url = self.url_object().endpoint(&id.to_string());
        self.request::<(), T>(DynamicFormMethod::GetById, HTTPRequestMethod::Get, url, None)
    }

    /// Fetches the forms matching the condition `code`.
    ///
    /// # Errors
    /// Never fails synchronously; transport and status errors are yielded by the stream.
    pub fn get_by_condition<T>(&self, code: impl Display) -> Result<ResponseStream<T>, HTTPError>
    where T: DeserializeOwned + Send + 'static {
        let url = self.url_object().endpoint(&format!("{}{code}", Self::route(dynamic_form::GET_BY_CONDITION)));
        self.request::<(), T>(DynamicFormMethod::GetByCondition, HTTPRequestMethod::Get, url, None)
    }

    /// Creates a form from `body`.
    ///
    /// # Errors
    /// Returns [`RequestError::Body`](crate::http_handler::http_request::request_common::RequestError::Body)
    /// if `body` cannot be serialized; nothing is tracked in that case.
    pub fn create<B, T>(&self, body: &B) -> Result<ResponseStream<T>, HTTPError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned + Send + 'static,
    {
        let url = self.url_object().base_url().to_string();
        self.request(DynamicFormMethod::Create, HTTPRequestMethod::Post, url, Some(body))
    }

    /// Replaces form `id` with `body`.
    ///
    /// # Errors
    /// Same as [`DynamicFormService::create`].
    pub fn update<B, T>(&self, id: impl Display, body: &B) -> Result<ResponseStream<T>, HTTPError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned + Send + 'static,
    {
        let url = self.url_object().endpoint(&id.to_string());
        self.request(DynamicFormMethod::Update, HTTPRequestMethod::Put, url, Some(body))
    }

    /// Deletes form `id`. The returned stream is not affected by `stop`.
    ///
    /// # Errors
    /// Never fails synchronously; transport and status errors are yielded by the stream.
    pub fn delete<T>(&self, id: impl Display) -> Result<ResponseStream<T>, HTTPError>
    where T: DeserializeOwned + Send + 'static {
        let url = self.url_object().endpoint(&id.to_string());
        self.request::<(), T>(DynamicFormMethod::Delete, HTTPRequestMethod::Delete, url, None)
    }

    /// Downloads the survey sheet of form `id` as a Word document.
    pub fn export_survey_word(&self, id: impl Display) -> ResponseStream<Vec<u8>> {
        let url = self.url_object().endpoint(&format!("{}{id}", Self::route(dynamic_form::EXPORT_SURVEY_WORD)));
        self.base.guard(DynamicFormMethod::ExportSurveyWord, self.http().get_bytes_stream(url))
    }

    /// Downloads the survey sheet of form `id` as a PDF.
    pub fn export_survey_pdf(&self, id: impl Display) -> ResponseStream<Vec<u8>> {
        let url = self.url_object().endpoint(&format!("{}{id}", Self::route(dynamic_form::EXPORT_SURVEY_PDF)));
        self.base.guard(DynamicFormMethod::ExportSurveyPdf, self.http().get_bytes_stream(url))
    }

    pub(super) fn route(route: &'static str) -> &'static str { Self::PREFIX.relative(route).unwrap_or(route) }

    fn request<B, T>(
        &self,
        method: DynamicFormMethod,
        verb: HTTPRequestMethod,
        url: String,
        body: Option<&B>,
    ) -> Result<ResponseStream<T>, HTTPError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned + Send + 'static,
    {
        self.base.guard_result(method, self.http().request_stream(verb, url, body))
    }
}
