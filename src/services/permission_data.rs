use crate::http_handler::api_constants::{ApiPrefix, permission_data};
use crate::http_handler::http_client::HTTPClient;
use crate::http_handler::http_handler_common::HTTPError;
use crate::http_handler::http_injection::{HttpInjection, HttpRequestInjectable, HttpRequestInjector};
use crate::http_handler::url_model::UrlModel;
use serde::{Serialize, de::DeserializeOwned};
use std::sync::Arc;

/// Client for `/permissiondatas`.
#[derive(Debug, Clone)]
pub struct PermissionDataService {
    base: HttpInjection,
}

impl HttpRequestInjectable for PermissionDataService {
    const PREFIX: ApiPrefix = ApiPrefix::PermissionDatas;

    fn from_injection(base: HttpInjection) -> Self { Self { base } }
}

impl HttpRequestInjector for PermissionDataService {
    fn url_object(&self) -> &Arc<UrlModel> { self.base.url_object() }
    fn http(&self) -> &Arc<HTTPClient> { self.base.http() }
}

impl PermissionDataService {
    /// Grants several permissions in one call.
    pub async fn create_multi<B, T>(&self, model: &B) -> Result<T, HTTPError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.http().post(&self.url_object().endpoint(Self::route(permission_data::CREATE_MULTIPLE)), model).await
    }

    /// Grants a single permission.
    pub async fn create<B, T>(&self, model: &B) -> Result<T, HTTPError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.http().post(self.url_object().base_url(), model).await
    }

    /// Fetches the permission tree filtered by `query`.
    pub async fn get_data_tree<Q, T>(&self, query: &Q) -> Result<T, HTTPError>
    where
        Q: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url_object().build_url(Self::route(permission_data::GET_DATA_TREE), Some(query));
        self.http().get(&url).await
    }

    pub(super) fn route(route: &'static str) -> &'static str { Self::PREFIX.relative(route).unwrap_or(route) }
}
