#[doc(hidden)]
pub use chrono as __chrono;

/// Environment variable enabling the `event!` output.
pub const EVENT_LOG_VAR: &str = "LOG_API_EVENTS";

#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        println!("\x1b[32m[INFO] [{}]\x1b[0m {}", $crate::logger::__chrono::Utc::now().format("%H:%M:%S"), format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        println!("\x1b[33m[LOG]  [{}]\x1b[0m {}", $crate::logger::__chrono::Utc::now().format("%H:%M:%S"), format!($($arg)*))
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        println!("\x1b[35m[WARN] [{}]\x1b[0m {}", $crate::logger::__chrono::Utc::now().format("%H:%M:%S"), format!($($arg)*))
    };
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        println!("\x1b[31m[ERROR][{}]\x1b[0m {}", $crate::logger::__chrono::Utc::now().format("%H:%M:%S"), format!($($arg)*))
    };
}

#[macro_export]
macro_rules! event {
    ($($arg:tt)*) => {
        if std::env::var($crate::logger::EVENT_LOG_VAR).is_ok() {
            println!("\x1b[36m[EVENT][{}]\x1b[0m {}", $crate::logger::__chrono::Utc::now().format("%H:%M:%S"), format!($($arg)*))
        }
    };
}

/// Tagged tracing output, used for per-service verbose logging.
#[macro_export]
macro_rules! trace {
    ($tag:expr, $($arg:tt)*) => {
        println!("\x1b[34m[TRACE][{}]\x1b[0m [{}]: {}", $crate::logger::__chrono::Utc::now().format("%H:%M:%S"), $tag, format!($($arg)*))
    };
}
