use super::api_constants::ApiPrefix;
use super::environment::ApiEnvironment;
use serde::Serialize;
use serde_json::Value;

/// Builds request URLs for one REST resource family.
///
/// The base URL is the configured server root followed by the prefix path.
/// It is computed once in [`UrlModel::new`] and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlModel {
    prefix: ApiPrefix,
    base_url: String,
}

impl UrlModel {
    /// Creates the model for `prefix` under the configured server root.
    ///
    /// # Arguments
    /// - `prefix`: the resource family, e.g. [`ApiPrefix::Users`].
    /// - `env`: supplies the server root.
    pub fn new(prefix: ApiPrefix, env: &ApiEnvironment) -> Self {
        Self { prefix, base_url: format!("{}{}", env.auth_server(), prefix.path()) }
    }

    /// The prefix this model was built for.
    pub fn prefix(&self) -> ApiPrefix { self.prefix }

    /// Server root followed by the prefix path, without a trailing `/`.
    pub fn base_url(&self) -> &str { self.base_url.as_str() }

    /// Appends `endpoint` and an optional query object to the base URL.
    ///
    /// A query that yields no pairs produces no `?`.
    ///
    /// ```
    /// # use rest_injector::http_handler::{api_constants::ApiPrefix, environment::ApiEnvironment, url_model::UrlModel};
    /// # use std::time::Duration;
    /// let env = ApiEnvironment::new("http://example.com", Duration::from_secs(5)).unwrap();
    /// let model = UrlModel::new(ApiPrefix::Users, &env);
    /// let url = model.build_url("get-list-don-vi", Some(&serde_json::json!({ "id": 1 })));
    /// assert_eq!(url, "http://example.com/users/get-list-don-vi?id=1");
    /// ```
    pub fn build_url<Q: Serialize + ?Sized>(&self, endpoint: &str, query: Option<&Q>) -> String {
        append_query(format!("{}/{endpoint}", self.base_url), query)
    }

    /// The base URL itself, for collection endpoints, with an optional query.
    pub fn base_with_query<Q: Serialize + ?Sized>(&self, query: Option<&Q>) -> String {
        append_query(self.base_url.clone(), query)
    }

    /// Shorthand for [`UrlModel::build_url`] without a query.
    pub fn endpoint(&self, endpoint: &str) -> String { self.build_url::<()>(endpoint, None) }
}

fn append_query<Q: Serialize + ?Sized>(mut url: String, query: Option<&Q>) -> String {
    let query_string = query.map(build_query_string).unwrap_or_default();
    if !query_string.is_empty() {
        url.push('?');
        url.push_str(&query_string);
    }
    url
}

/// Serializes a flat query object into `k1=v1&k2=v2`, form-urlencoded.
pub fn build_query_string<Q: Serialize + ?Sized>(query: &Q) -> String {
    let pairs = query_pairs(query);
    if pairs.is_empty() {
        return String::new();
    }
    url::form_urlencoded::Serializer::new(String::new()).extend_pairs(pairs).finish()
}

/// Flattens a query object into key/value pairs in field order.
///
/// Non-object values yield nothing and `null` fields are skipped. Arrays are
/// joined with `,`, nested objects are kept as compact JSON. Whole-number
/// floats are written without exponent up to `1e21`.
pub fn query_pairs<Q: Serialize + ?Sized>(query: &Q) -> Vec<(String, String)> {
    let Ok(Value::Object(map)) = serde_json::to_value(query) else {
        return Vec::new();
    };
    map.into_iter()
        .filter(|(_, v)| !v.is_null())
        .map(|(k, v)| (k, value_to_param(&v)))
        .collect()
}

fn value_to_param(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Number(n) => number_to_param(n),
        Value::Bool(_) | Value::Object(_) => value.to_string(),
        Value::Array(items) => items.iter().map(value_to_param).collect::<Vec<_>>().join(","),
    }
}

/// Whole-number floats below 1e21 are written in plain decimal with their
/// shortest digits (`2.0` becomes `2`, `1e20` becomes `100000000000000000000`).
/// Everything else keeps `serde_json`'s form.
fn number_to_param(n: &serde_json::Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e21 => {
            expand_exponent(&n.to_string()).unwrap_or_else(|| format!("{:.0}", f + 0.0))
        }
        _ => n.to_string(),
    }
}

/// `1.25e20` -> `125000000000000000000`. `None` if `repr` has no positive exponent
/// or its mantissa has more fraction digits than the exponent covers.
fn expand_exponent(repr: &str) -> Option<String> {
    let (mantissa, exp) = repr.split_once(['e', 'E'])?;
    let exp: usize = exp.trim_start_matches('+').parse().ok()?;
    let (int_part, frac_part) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    let zeros = exp.checked_sub(frac_part.len())?;
    Some(format!("{int_part}{frac_part}{}", "0".repeat(zeros)))
}
