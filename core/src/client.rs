//! Stateless HTTP request builder and response parser for the admin API.
//!
//! # Design
//! `AdminClient` holds only a `base_url` and carries no mutable state between
//! calls. Each operation is split into a `build_*` method that produces an
//! `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`.
//! The caller, or a `RequestDispatcher`, executes the actual round-trip.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::endpoint::{BodyKind, Operation};
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::multipart::FormData;
use crate::types::{Ack, Page, Product, ProductForm, ProductPageQuery, ProductRemoval, UploadedFile};

/// Synchronous, stateless client for the admin API.
#[derive(Debug, Clone)]
pub struct AdminClient {
    base_url: String,
}

impl AdminClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_page(&self, query: &ProductPageQuery) -> Result<HttpRequest, ApiError> {
        self.build_json(Operation::Page, query)
    }

    pub fn build_save_or_edit(&self, form: &ProductForm) -> Result<HttpRequest, ApiError> {
        self.build_json(Operation::SaveOrEdit, form)
    }

    pub fn build_remove(&self, removal: &ProductRemoval) -> Result<HttpRequest, ApiError> {
        self.build_json(Operation::Remove, removal)
    }

    pub fn build_upload_file(&self, form: &FormData) -> HttpRequest {
        self.build_multipart(Operation::UploadFile, form)
    }

    pub fn build_upload_video(&self, form: &FormData) -> HttpRequest {
        self.build_multipart(Operation::UploadVideo, form)
    }

    pub fn parse_page(&self, response: HttpResponse) -> Result<Page<Product>, ApiError> {
        parse_json(response)
    }

    pub fn parse_save_or_edit(&self, response: HttpResponse) -> Result<Ack, ApiError> {
        parse_ack(response)
    }

    pub fn parse_remove(&self, response: HttpResponse) -> Result<Ack, ApiError> {
        parse_ack(response)
    }

    pub fn parse_upload_file(&self, response: HttpResponse) -> Result<UploadedFile, ApiError> {
        parse_json(response)
    }

    pub fn parse_upload_video(&self, response: HttpResponse) -> Result<UploadedFile, ApiError> {
        parse_json(response)
    }

    fn build_json<T: Serialize>(&self, operation: Operation, payload: &T) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_vec(payload).map_err(|e| ApiError::SerializationError(e.to_string()))?;
        let endpoint = operation.endpoint();
        debug_assert_eq!(endpoint.body, BodyKind::Json, "{operation} is not a JSON endpoint");
        Ok(HttpRequest {
            method: endpoint.method,
            path: endpoint.url(&self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body,
        })
    }

    fn build_multipart(&self, operation: Operation, form: &FormData) -> HttpRequest {
        let endpoint = operation.endpoint();
        debug_assert_eq!(endpoint.body, BodyKind::Multipart, "{operation} is not a multipart endpoint");
        HttpRequest {
            method: endpoint.method,
            path: endpoint.url(&self.base_url),
            headers: vec![("content-type".to_string(), form.content_type())],
            body: form.encode(),
        }
    }
}

fn parse_json<T: DeserializeOwned>(response: HttpResponse) -> Result<T, ApiError> {
    check_status(&response)?;
    serde_json::from_str(&response.body).map_err(|e| ApiError::DeserializationError(e.to_string()))
}

/// Like `parse_json`, but an empty 2xx body acknowledges with `null`.
fn parse_ack(response: HttpResponse) -> Result<Ack, ApiError> {
    if response.is_success() && response.body.trim().is_empty() {
        return Ok(Ack::Null);
    }
    parse_json(response)
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    tracing::warn!(status = response.status, "admin API returned a non-success status");
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::HttpError {
        status: response.status,
        body: response.body.clone(),
    })
}
