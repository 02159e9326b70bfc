use super::api_constants::{ApiPrefix, business_selection, dynamic_form, permission_data};
use super::app_constants::{DEFAULT_PAGINATION_OPTION, MessageType, ModalType, PaginatorParams, UsageStatus};
use super::environment::{ApiEnvironment, ConfigError};
use super::http_client::HTTPClient;
use super::http_handler_common::HTTPError;
use super::http_request::request_common::RequestError;
use super::http_response::response_common::{BadRequestReturn, ResponseError};
use super::url_model::{UrlModel, build_query_string, query_pairs};
use super::url_registry::UrlRegistry;
use serde_json::{Value, json};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use strum::{EnumCount, IntoEnumIterator};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

const SERVER: &str = "http://localhost:5000";

fn test_env() -> ApiEnvironment { ApiEnvironment::new(SERVER, Duration::from_secs(5)).unwrap() }

/// Accepts one connection, waits for the request head and answers with `response` verbatim.
async fn serve_once(response: String) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut head = Vec::new();
        let mut buf = [0u8; 1024];
        while !head.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            head.extend_from_slice(&buf[..n]);
        }
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.unwrap();
    });
    format!("http://{addr}/permissiondatas")
}

fn parse_query(url: &str) -> Vec<(String, String)> {
    let (_, query) = url.split_once('?').unwrap();
    url::form_urlencoded::parse(query.as_bytes()).into_owned().collect()
}

#[test]
fn test_environment_trims_trailing_slash() {
    let env = ApiEnvironment::new("http://api.example.com/", Duration::from_secs(3)).unwrap();
    assert_eq!(env.auth_server(), "http://api.example.com");
    assert_eq!(env.request_timeout(), Duration::from_secs(3));
}

#[test]
fn test_environment_rejects_relative_server() {
    let res = ApiEnvironment::new("not a url", Duration::from_secs(5));
    assert_eq!(res, Err(ConfigError::InvalidServerUrl("not a url".to_string())));
}

#[test]
fn test_base_url_is_server_plus_prefix() {
    let env = test_env();
    let model = UrlModel::new(ApiPrefix::PermissionDatas, &env);
    assert_eq!(model.prefix(), ApiPrefix::PermissionDatas);
    assert_eq!(model.base_url(), "http://localhost:5000/permissiondatas");
}

#[test]
fn test_build_url_without_query_has_no_question_mark() {
    let env = test_env();
    for prefix in ApiPrefix::iter() {
        let model = UrlModel::new(prefix, &env);
        let expected = format!("{SERVER}{}/createmulti", prefix.path());
        assert_eq!(model.build_url::<()>("createmulti", None), expected);
        assert_eq!(model.build_url("createmulti", Some(&json!({}))), expected);
        assert_eq!(model.endpoint("createmulti"), expected);
    }
}

#[test]
fn test_null_only_query_is_treated_as_empty() {
    #[derive(serde::Serialize)]
    struct Filter {
        code: Option<String>,
    }
    let model = UrlModel::new(ApiPrefix::Users, &test_env());
    let url = model.build_url("get-user-don-vi", Some(&Filter { code: None }));
    assert_eq!(url, "http://localhost:5000/users/get-user-don-vi");
}

#[test]
fn test_query_string_keeps_field_order() {
    let model = UrlModel::new(ApiPrefix::Users, &test_env());
    let url = model.build_url("get-list-don-vi", Some(&json!({ "unitId": 4, "active": true, "name": "abc" })));
    assert_eq!(url, "http://localhost:5000/users/get-list-don-vi?unitId=4&active=true&name=abc");
}

#[test]
fn test_query_string_round_trips_special_characters() {
    let model = UrlModel::new(ApiPrefix::CategoryDatas, &test_env());
    let mut query = HashMap::new();
    query.insert("keyword", "điểm khảo sát & more");
    query.insert("path", "/a/b?c=d");
    query.insert("plus", "1+1=2");
    let url = model.build_url("get-data-tree", Some(&query));

    let mut parsed = parse_query(&url);
    parsed.sort();
    let mut expected: Vec<(String, String)> =
        query.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect();
    expected.sort();
    assert_eq!(parsed, expected);
    assert!(!url.contains(' '));
}

#[test]
fn test_array_and_nested_values_are_stringified() {
    let pairs = query_pairs(&json!({
        "ids": [1, 2, 3],
        "codes": ["a", "b"],
        "range": { "from": 1 },
        "skip": null,
        "ratio": 0.5,
    }));
    assert_eq!(
        pairs,
        vec![
            ("ids".to_string(), "1,2,3".to_string()),
            ("codes".to_string(), "a,b".to_string()),
            ("range".to_string(), r#"{"from":1}"#.to_string()),
            ("ratio".to_string(), "0.5".to_string()),
        ]
    );
}

#[test]
fn test_whole_floats_are_written_without_exponent() {
    let pairs = query_pairs(&json!({ "c": 1e20, "d": 2.0, "e": -3e17, "f": 0.5, "g": 1e21, "h": 7 }));
    assert_eq!(
        pairs,
        vec![
            ("c".to_string(), "100000000000000000000".to_string()),
            ("d".to_string(), "2".to_string()),
            ("e".to_string(), "-300000000000000000".to_string()),
            ("f".to_string(), "0.5".to_string()),
            ("g".to_string(), "1e21".to_string()),
            ("h".to_string(), "7".to_string()),
        ]
    );
    assert_eq!(build_query_string(&json!({ "c": 1e20 })), "c=100000000000000000000");
}

#[test]
fn test_non_object_query_yields_nothing() {
    assert!(query_pairs(&42).is_empty());
    assert!(query_pairs(&vec![1, 2]).is_empty());
    assert_eq!(build_query_string("plain"), "");
}

#[test]
fn test_paginator_serializes_camel_case() {
    let model = UrlModel::new(ApiPrefix::DynamicForm, &test_env());
    let url = model.base_with_query(Some(&PaginatorParams::default()));
    assert_eq!(url, "http://localhost:5000/dynamic-form?page=1&pageSize=100000&pageNumber=1");
    assert_eq!(model.base_with_query::<()>(None), "http://localhost:5000/dynamic-form");
}

#[test]
fn test_registry_holds_one_model_per_prefix() {
    let registry = UrlRegistry::new(&test_env());
    assert_eq!(registry.len(), ApiPrefix::COUNT);
    assert!(!registry.is_empty());
    for (prefix, model) in registry.iter() {
        assert_eq!(model.prefix(), prefix);
        assert_eq!(model.base_url(), format!("{SERVER}{}", prefix.path()));
    }
}

#[test]
fn test_registry_hands_out_shared_models() {
    let registry = UrlRegistry::new(&test_env());
    let first = registry.get(ApiPrefix::Roles);
    let second = registry.get(ApiPrefix::Roles);
    assert!(Arc::ptr_eq(&first, &second));
    assert!(!Arc::ptr_eq(&first, &registry.get(ApiPrefix::Menus)));
}

#[test]
fn test_prefix_allow_list() {
    assert_eq!(ApiPrefix::from_path("/users"), Some(ApiPrefix::Users));
    assert_eq!(ApiPrefix::from_path("/Categories"), Some(ApiPrefix::Categories));
    assert_eq!(ApiPrefix::from_path("/categories"), Some(ApiPrefix::CategoriesLower));
    assert_eq!(ApiPrefix::from_path("/unknown"), None);
    for prefix in ApiPrefix::iter() {
        assert_eq!(ApiPrefix::from_path(prefix.path()), Some(prefix));
        assert_eq!(prefix.to_string(), prefix.path());
    }
}

#[test]
fn test_route_tables() {
    assert_eq!(permission_data::CREATE_MULTIPLE, "/permissiondatas/createmulti");
    assert_eq!(dynamic_form::GET_BY_CONDITION, "/dynamic-form/get-by-condition/");
    assert_eq!(business_selection::get_parent(12, "A"), "/permissiontask/12/get-method-tree/A");
    assert_eq!(
        business_selection::get_children(12, "F01", "B"),
        "/permissiontask/12/get-dynamic-field-by-loai/F01/B"
    );
}

#[test]
fn test_routes_relative_to_their_prefix() {
    assert_eq!(ApiPrefix::PermissionDatas.relative(permission_data::CREATE_MULTIPLE), Some("createmulti"));
    assert_eq!(ApiPrefix::PermissionDatas.relative(permission_data::GET_DATA_TREE), Some("get-data-tree"));
    assert_eq!(ApiPrefix::DynamicForm.relative(dynamic_form::GET_BY_CONDITION), Some("get-by-condition/"));
    assert_eq!(ApiPrefix::DynamicForm.relative(dynamic_form::GET), Some(""));
    assert_eq!(ApiPrefix::Users.relative(permission_data::CREATE_MULTIPLE), None);
    // `/categories` is not a path prefix of `/categorydatas`
    assert_eq!(ApiPrefix::CategoriesLower.relative("/categoriesx/a"), None);
}

#[test]
fn test_app_constants() {
    assert_eq!(MessageType::Warning.to_string(), "warning");
    assert_eq!(ModalType::Edit.to_string(), "edit");
    assert_eq!(UsageStatus::InUse.to_string(), "Sử dụng");
    assert_eq!(UsageStatus::NotInUse.to_string(), "Không sử dụng");
    assert_eq!(DEFAULT_PAGINATION_OPTION.page_size, 100_000);
}

#[test]
fn test_bad_request_body_parsing() {
    let structured = BadRequestReturn::from_body(r#"{"detail":[{"msg":"field required"}]}"#);
    assert_eq!(structured.detail().unwrap()["detail"][0]["msg"], "field required");
    let plain = BadRequestReturn::from_body("Bad Request");
    assert!(plain.detail().is_none());
    assert_eq!(plain.raw(), "Bad Request");
}

#[test]
fn test_request_error_wraps_into_http_error() {
    let err: HTTPError = RequestError::Body("bad".to_string()).into();
    assert!(matches!(err, HTTPError::HTTPRequestError(RequestError::Body(_))));
    assert!(std::error::Error::source(&err).is_some());
    let resp: HTTPError = ResponseError::NotFound.into();
    assert_eq!(resp.to_string(), "HTTPResponseError");
}

#[tokio::test]
async fn test_bad_request_body_is_kept() {
    let body = r#"{"detail":"required"}"#;
    let url = serve_once(format!(
        "HTTP/1.1 400 Bad Request\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    ))
    .await;
    let client = HTTPClient::new(&test_env()).unwrap();
    let res = client.get::<Value>(&url).await;
    let ret = match res {
        Err(HTTPError::HTTPResponseError(ResponseError::BadRequest(ret))) => ret,
        other => panic!("expected a bad request, got {other:?}"),
    };
    assert_eq!(ret.raw(), body);
    assert_eq!(ret.detail().unwrap()["detail"], "required");
}

#[tokio::test]
async fn test_truncated_bad_request_body_is_an_error() {
    let url = serve_once(
        "HTTP/1.1 400 Bad Request\r\nContent-Length: 100\r\nConnection: close\r\n\r\npartial".to_string(),
    )
    .await;
    let client = HTTPClient::new(&test_env()).unwrap();
    let res = client.get::<Value>(&url).await;
    assert!(
        matches!(res, Err(HTTPError::HTTPResponseError(ResponseError::Decode(_)))),
        "expected a body read failure, got {res:?}"
    );
}
