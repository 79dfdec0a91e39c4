use crate::types::ProbeResponse;
use reqwest::Response;

/// Converts reqwest responses into classifier input
#[derive(Clone)]
pub struct ResponseConverterImpl;

impl ResponseConverterImpl {
    /// Create a new response converter
    pub fn new() -> Self {
        Self
    }

    /// Read status and, for non-2xx responses, the body.
    ///
    /// Success bodies are never read: any 2xx is classified as accessible.
    pub async fn convert_response(&self, response: Response) -> reqwest::Result<ProbeResponse> {
        let status = response.status();

        if status.is_success() {
            return Ok(ProbeResponse::new(status.as_u16(), String::new()));
        }

        let body = response.text().await?;
        Ok(ProbeResponse::new(status.as_u16(), body))
    }
}

impl Default for ResponseConverterImpl {
    fn default() -> Self {
        Self::new()
    }
}
