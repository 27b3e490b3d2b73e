use crate::domain::model::{ApiRequest, ApiResponse};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
    fn app_id(&self) -> &str;
}

/// Sends one request and waits for its response. Any status code is an
/// `Ok`; only failures to complete the exchange are errors.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: &ApiRequest) -> Result<ApiResponse>;
}
