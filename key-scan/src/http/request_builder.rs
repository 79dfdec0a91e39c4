use crate::config::ScanConfig;
use crate::error::{Result, ScanError};
use crate::types::Credential;
use log::warn;
use reqwest::Client;
use url::Url;

/// Name of the query parameter carrying the credential
pub const KEY_PARAM: &str = "key";

/// Build the shared reqwest client from configuration
pub fn build_client(config: &ScanConfig) -> Result<Client> {
    let mut builder = Client::builder()
        .timeout(config.timeout())
        .user_agent(config.user_agent());

    if config.insecure_tls() {
        warn!("TLS certificate and hostname verification is disabled");
        builder = builder
            .danger_accept_invalid_certs(true)
            .danger_accept_invalid_hostnames(true);
    }

    builder.build().map_err(Into::into)
}

/// Append the credential as the `key` query parameter, keeping any existing query
pub fn build_probe_url(endpoint: &str, credential: &Credential) -> Result<Url> {
    let mut url = Url::parse(endpoint)
        .map_err(|e| ScanError::invalid_endpoint(endpoint.to_string(), e.to_string()))?;

    if url.cannot_be_a_base() {
        return Err(ScanError::invalid_endpoint(
            endpoint.to_string(),
            "not a hierarchical URL".to_string(),
        ));
    }

    url.query_pairs_mut()
        .append_pair(KEY_PARAM, credential.expose());
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probe_url_appends_key() {
        let key = Credential::new("AIzaTestKey");

        let url = build_probe_url("https://www.googleapis.com/drive/v3/", &key).unwrap();
        assert_eq!(url.as_str(), "https://www.googleapis.com/drive/v3/?key=AIzaTestKey");

        let url = build_probe_url("https://maps.googleapis.com", &key).unwrap();
        assert_eq!(url.as_str(), "https://maps.googleapis.com/?key=AIzaTestKey");
    }

    #[test]
    fn test_probe_url_keeps_existing_query() {
        let key = Credential::new("k1");
        let url = build_probe_url("https://example.com/api?alt=json", &key).unwrap();
        assert_eq!(url.as_str(), "https://example.com/api?alt=json&key=k1");
    }

    #[test]
    fn test_probe_url_encodes_key() {
        let key = Credential::new("a b&c");
        let url = build_probe_url("https://example.com/", &key).unwrap();
        assert_eq!(url.query(), Some("key=a+b%26c"));
    }

    #[test]
    fn test_invalid_endpoints() {
        let key = Credential::new("k1");
        assert!(matches!(
            build_probe_url("/relative/path", &key),
            Err(ScanError::InvalidEndpoint { .. })
        ));
        assert!(build_probe_url("mailto:someone@example.com", &key).is_err());
    }

    #[test]
    fn test_client_builds_in_both_tls_modes() {
        let config = ScanConfig::default();
        assert!(build_client(&config).is_ok());

        let config = ScanConfig::builder().insecure_tls(true).build().unwrap();
        assert!(build_client(&config).is_ok());
    }

    #[tokio::test]
    async fn test_insecure_client_sends_key_and_user_agent() {
        use wiremock::matchers::{header, method, query_param};
        use wiremock::{Mock, MockServer, ResponseTemplate};

        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(query_param(KEY_PARAM, "k1"))
            .and(header("user-agent", "keyscan-test"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let config = ScanConfig::builder()
            .insecure_tls(true)
            .user_agent("keyscan-test")
            .build()
            .unwrap();
        let client = build_client(&config).unwrap();
        let url = build_probe_url(&server.uri(), &Credential::new("k1")).unwrap();

        let response = client.get(url).send().await.unwrap();
        assert_eq!(response.status().as_u16(), 204);
    }
}
