use crate::core::{ApiCommand, Outcome, Transport};
use crate::utils::error::Result;

/// Turns each command into exactly one request on the transport.
pub struct Dispatcher<T: Transport> {
    transport: T,
}

impl<T: Transport> Dispatcher<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub async fn dispatch(&self, command: &ApiCommand) -> Result<Outcome> {
        let request = command.to_request();

        if let Some(body) = &request.body {
            if let Err(e) = serde_json::from_str::<serde_json::Value>(body) {
                tracing::warn!("Request body is not valid JSON ({}), sending it as typed", e);
            }
        }

        let response = self.transport.send(&request).await?;
        tracing::debug!("{} /{} -> {}", request.verb, request.path, response.status);

        Ok(Outcome::from_response(response, request.output_mode))
    }
}
