//! # Utility Modules
//!
//! Supporting utilities shared by the codecs and their callers.
//!
//! ## Components
//! - **Logging**: `tracing-subscriber` setup driven by [`LoggingConfig`](crate::config::LoggingConfig)

pub mod logging;
