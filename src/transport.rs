//! Default reqwest-backed transport

use async_trait::async_trait;
use reqwest::Client;

use crate::request::RequestTemplate;
use crate::response::TransportResponse;
use crate::traits::{Transport, TransportError};

/// HTTP transport backed by a shared `reqwest::Client`
///
/// Cheap to clone; the underlying client pools connections across all
/// clones and all concurrent attempts.
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Create a transport with a fresh client
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    /// Create a transport over an existing client
    ///
    /// Use this to carry custom client settings (timeouts, proxies,
    /// connection limits) into the transport.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    fn to_reqwest(
        &self,
        template: &RequestTemplate,
    ) -> Result<reqwest::RequestBuilder, TransportError> {
        let method = reqwest::Method::from_bytes(template.method.as_bytes()).map_err(|_| {
            TransportError::InvalidTemplate(format!("unsupported method {:?}", template.method))
        })?;
        let url = reqwest::Url::parse(&template.url).map_err(|e| {
            TransportError::InvalidTemplate(format!("bad url {:?}: {e}", template.url))
        })?;

        let mut builder = self.client.request(method, url);
        for (name, value) in &template.headers {
            builder = builder.header(name, value);
        }
        if let Some(body) = &template.body {
            builder = builder.body(body.clone());
        }

        Ok(builder)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    fn name(&self) -> &str {
        "http"
    }

    async fn perform(
        &self,
        request: &RequestTemplate,
    ) -> Result<TransportResponse, TransportError> {
        let response = self.to_reqwest(request)?.send().await?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.as_str().to_string(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
            .collect();
        let body = response.bytes().await?;

        Ok(TransportResponse {
            status,
            headers,
            body,
        })
    }
}
