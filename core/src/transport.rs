//! The transport seam and the ureq-backed default implementation.
//!
//! A `Transport` executes one `HttpRequest` and hands back the raw
//! `HttpResponse`. Retry, auth and timeout policy live here, never in the
//! dispatcher.

use async_trait::async_trait;

use crate::config::ClientConfig;
use crate::error::TransportError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

#[async_trait]
pub trait Transport: Send + Sync {
    type Error: Send;

    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, Self::Error>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for std::sync::Arc<T> {
    type Error = T::Error;

    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, Self::Error> {
        (**self).execute(request).await
    }
}

/// Blocking ureq agent driven on tokio's blocking pool.
///
/// Non-2xx statuses come back as data so `AdminClient` can classify them.
/// Must be used from within a tokio runtime.
#[derive(Debug, Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new(config: &ClientConfig) -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(config.timeout())
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new(&ClientConfig::default())
    }
}

#[async_trait]
impl Transport for UreqTransport {
    type Error = TransportError;

    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let agent = self.agent.clone();
        tokio::task::spawn_blocking(move || send_blocking(&agent, request))
            .await
            .map_err(|e| TransportError::Join(e.to_string()))?
    }
}

fn send_blocking(agent: &ureq::Agent, request: HttpRequest) -> Result<HttpResponse, TransportError> {
    let mut builder = match request.method {
        HttpMethod::Post => agent.post(request.path.as_str()),
    };
    for (name, value) in &request.headers {
        builder = builder.header(name.as_str(), value.as_str());
    }
    let mut response = builder
        .send(request.body.as_slice())
        .map_err(|e| TransportError::Io(e.to_string()))?;

    let status = response.status().as_u16();
    let headers = response
        .headers()
        .iter()
        .filter_map(|(name, value)| {
            value
                .to_str()
                .ok()
                .map(|value| (name.as_str().to_string(), value.to_string()))
        })
        .collect();
    let body = response
        .body_mut()
        .read_to_string()
        .map_err(|e| TransportError::Io(e.to_string()))?;

    Ok(HttpResponse { status, headers, body })
}
