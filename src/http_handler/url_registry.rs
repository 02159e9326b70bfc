use super::api_constants::ApiPrefix;
use super::environment::ApiEnvironment;
use super::url_model::UrlModel;
use std::collections::HashMap;
use std::sync::Arc;
use strum::IntoEnumIterator;

/// One shared [`UrlModel`] per [`ApiPrefix`], built once and read-only afterwards.
#[derive(Debug)]
pub struct UrlRegistry {
    builders: HashMap<ApiPrefix, Arc<UrlModel>>,
}

impl UrlRegistry {
    /// Builds one model for every [`ApiPrefix`] under the configured server root.
    pub fn new(env: &ApiEnvironment) -> Self {
        let builders =
            ApiPrefix::iter().map(|prefix| (prefix, Arc::new(UrlModel::new(prefix, env)))).collect();
        Self { builders }
    }

    /// Returns the shared model for `prefix`. Every call hands out the same `Arc`.
    pub fn get(&self, prefix: ApiPrefix) -> Arc<UrlModel> {
        // every prefix is inserted in `new`
        Arc::clone(&self.builders[&prefix])
    }

    /// Number of registered prefixes, always `ApiPrefix::COUNT`.
    pub fn len(&self) -> usize { self.builders.len() }

    pub fn is_empty(&self) -> bool { self.builders.is_empty() }

    /// Iterates the registry in declaration order of [`ApiPrefix`].
    pub fn iter(&self) -> impl Iterator<Item = (ApiPrefix, &Arc<UrlModel>)> {
        ApiPrefix::iter().map(|prefix| (prefix, &self.builders[&prefix]))
    }
}
