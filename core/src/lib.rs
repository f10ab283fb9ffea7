//! Async API client for the product admin backend.
//!
//! # Overview
//! Five operations (`page`, `saveOrEdit`, `remove`, `uploadFile`,
//! `uploadVideo`), each a single POST to a fixed suffix under a configurable
//! base URL.
//!
//! # Design
//! - `endpoint` holds the static operation → URL/verb table.
//! - `AdminClient` is stateless and does no I/O: `build_*` produces an
//!   `HttpRequest`, `parse_*` consumes an `HttpResponse`.
//! - `RequestDispatcher` pairs a client with a `Transport` and exposes the
//!   operations as `async fn`s. Transport errors reach the caller untouched.
//! - `UreqTransport` is the default transport.

pub mod client;
pub mod config;
pub mod dispatcher;
pub mod endpoint;
pub mod error;
pub mod http;
pub mod multipart;
pub mod transport;
pub mod types;

pub use async_trait::async_trait;

pub use client::AdminClient;
pub use config::ClientConfig;
pub use dispatcher::RequestDispatcher;
pub use endpoint::{BodyKind, Endpoint, Operation, ENDPOINTS};
pub use error::{ApiError, ConfigError, TransportError};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use multipart::{FormData, FormPart};
pub use transport::{Transport, UreqTransport};
pub use types::{
    Ack, Page, Product, ProductForm, ProductId, ProductPageQuery, ProductRemoval, UploadedFile,
};
