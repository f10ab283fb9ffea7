//! Error types for the admin API client.
//!
//! # Design
//! `ApiError` covers failures the client itself can detect: encoding a
//! payload, a non-success status and an undecodable body. `NotFound` gets a
//! dedicated variant because a 404 from the admin backend almost always means
//! the configured base URL is wrong.

/// Errors produced by `AdminClient` build and parse methods.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The server returned 404; no endpoint lives at the requested URL.
    #[error("resource not found")]
    NotFound,

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),
}

/// Errors returned by `UreqTransport`.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// The request never produced a response (connect, TLS, timeout, ...).
    #[error("transport failed: {0}")]
    Io(String),

    /// The blocking worker running the request panicked or was cancelled.
    #[error("transport worker failed: {0}")]
    Join(String),

    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Errors raised while reading `ClientConfig` from the environment.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
}
