pub mod request_common;
