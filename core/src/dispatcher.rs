//! Async operations over a `Transport`.
//!
//! Each method builds one request with `AdminClient`, sends it exactly once
//! and parses the reply. Errors the transport raises are returned as-is; the
//! client's own failures are converted into the transport's error type
//! through `From<ApiError>`.

use crate::client::AdminClient;
use crate::config::ClientConfig;
use crate::endpoint::Operation;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::multipart::FormData;
use crate::transport::Transport;
use crate::types::{Ack, Page, Product, ProductForm, ProductPageQuery, ProductRemoval, UploadedFile};

#[derive(Debug, Clone)]
pub struct RequestDispatcher<T> {
    client: AdminClient,
    transport: T,
}

impl<T> RequestDispatcher<T>
where
    T: Transport,
    T::Error: From<ApiError>,
{
    pub fn new(config: &ClientConfig, transport: T) -> Self {
        Self {
            client: AdminClient::new(&config.base_url),
            transport,
        }
    }

    pub fn client(&self) -> &AdminClient {
        &self.client
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Paged product listing.
    pub async fn page(&self, query: &ProductPageQuery) -> Result<Page<Product>, T::Error> {
        let request = self.client.build_page(query)?;
        let response = self.send(Operation::Page, request).await?;
        Ok(self.client.parse_page(response)?)
    }

    /// Create or update a product; the backend decides which.
    pub async fn save_or_edit(&self, form: &ProductForm) -> Result<Ack, T::Error> {
        let request = self.client.build_save_or_edit(form)?;
        let response = self.send(Operation::SaveOrEdit, request).await?;
        Ok(self.client.parse_save_or_edit(response)?)
    }

    pub async fn remove(&self, removal: &ProductRemoval) -> Result<Ack, T::Error> {
        let request = self.client.build_remove(removal)?;
        let response = self.send(Operation::Remove, request).await?;
        Ok(self.client.parse_remove(response)?)
    }

    pub async fn upload_file(&self, form: &FormData) -> Result<UploadedFile, T::Error> {
        let request = self.client.build_upload_file(form);
        let response = self.send(Operation::UploadFile, request).await?;
        Ok(self.client.parse_upload_file(response)?)
    }

    pub async fn upload_video(&self, form: &FormData) -> Result<UploadedFile, T::Error> {
        let request = self.client.build_upload_video(form);
        let response = self.send(Operation::UploadVideo, request).await?;
        Ok(self.client.parse_upload_video(response)?)
    }

    async fn send(&self, operation: Operation, request: HttpRequest) -> Result<HttpResponse, T::Error> {
        tracing::debug!(
            %operation,
            method = request.method.as_str(),
            url = %request.path,
            body_len = request.body.len(),
            "dispatching admin API request"
        );
        let response = self.transport.execute(request).await?;
        tracing::debug!(%operation, status = response.status, "admin API responded");
        Ok(response)
    }
}
