use crate::domain::model::{ApiRequest, ApiResponse, Verb};
use crate::domain::ports::{ConfigProvider, Transport};
use crate::utils::error::{ClientError, Result};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::{Client, Method};
use url::Url;

pub const APP_ID_HEADER: &str = "appid";

/// Transport backed by a single `reqwest::Client` carrying the fixed headers.
pub struct ReqwestTransport {
    base_url: Url,
    client: Client,
}

impl ReqwestTransport {
    pub fn new<C: ConfigProvider>(config: &C) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let app_id = HeaderValue::from_str(config.app_id()).map_err(|source| {
            ClientError::InvalidHeaderError {
                name: "appId".to_string(),
                source,
            }
        })?;
        headers.insert(HeaderName::from_static(APP_ID_HEADER), app_id);

        let client = Client::builder().default_headers(headers).build()?;

        Ok(Self {
            base_url: normalize_base_url(config.base_url())?,
            client,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// The path is appended to the base URL as text, so `?sorted=True`
    /// becomes a query on the base path and `42` its last segment.
    pub fn request_url(&self, path: &str) -> Result<Url> {
        Ok(Url::parse(&format!("{}{}", self.base_url, path))?)
    }
}

fn normalize_base_url(base_url: &str) -> Result<Url> {
    if base_url.ends_with('/') {
        Ok(Url::parse(base_url)?)
    } else {
        Ok(Url::parse(&format!("{}/", base_url))?)
    }
}

fn method_for(verb: Verb) -> Method {
    match verb {
        Verb::Get => Method::GET,
        Verb::Post => Method::POST,
        Verb::Put => Method::PUT,
        Verb::Delete => Method::DELETE,
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: &ApiRequest) -> Result<ApiResponse> {
        let url = self.request_url(&request.path)?;
        tracing::debug!("Sending {} {}", request.verb, url);

        let mut builder = self.client.request(method_for(request.verb), url);
        if let Some(body) = &request.body {
            builder = builder.body(body.clone());
        }

        let response = builder.send().await?;
        let status = response.status();
        tracing::debug!("Response status: {}", status);

        let body = response.text().await?;
        Ok(ApiResponse { status, body })
    }
}
