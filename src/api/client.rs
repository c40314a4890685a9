//! Blocking HTTP client for the Discogs API

use std::time::Duration;

use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::header::AUTHORIZATION;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, info};

use super::{CollectionApi, Identity, READ_FOLDER_ID, WRITE_FOLDER_ID};
use crate::config::Settings;
use crate::error::{DiscogsError, DiscogsResult};
use crate::models::{CollectionPage, ReleaseId};

/// Error body the API sends with non-success responses
#[derive(Debug, Deserialize)]
struct ApiMessage {
    message: String,
}

/// Client for the Discogs REST API
///
/// Requests are sent one at a time and never retried.
pub struct DiscogsClient {
    http: Client,
    base_url: String,
    token: Option<String>,
}

impl DiscogsClient {
    /// Create a client from settings, optionally authenticated with a personal token
    pub fn new(settings: &Settings, token: Option<String>) -> DiscogsResult<Self> {
        let base_url = settings.api_base_url.trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(DiscogsError::Config("API URL cannot be empty".into()));
        }
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(DiscogsError::Config(format!(
                "API URL must start with http:// or https://: {}",
                base_url
            )));
        }

        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(settings.user_agent.clone())
            .build()
            .map_err(|e| DiscogsError::Transport(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url,
            token,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => request.header(AUTHORIZATION, format!("Discogs token={}", token)),
            None => request,
        }
    }

    fn send(&self, request: RequestBuilder) -> DiscogsResult<Response> {
        let response = self.authorize(request).send()?;
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().unwrap_or_default();
        let message = match serde_json::from_str::<ApiMessage>(&body) {
            Ok(parsed) => parsed.message,
            Err(_) if body.trim().is_empty() => status.to_string(),
            Err(_) => body,
        };
        debug!(status = status.as_u16(), message = %message, "API request failed");
        Err(DiscogsError::api(status.as_u16(), message))
    }

    fn decode<T: DeserializeOwned>(response: Response) -> DiscogsResult<T> {
        let body = response.text()?;
        serde_json::from_str(&body)
            .map_err(|e| DiscogsError::Decode(format!("Failed to parse API response: {}", e)))
    }
}

impl CollectionApi for DiscogsClient {
    fn identity(&self) -> DiscogsResult<Identity> {
        if self.token.is_none() {
            return Err(DiscogsError::Config(
                "A user token is required to identify the account".into(),
            ));
        }

        let url = format!("{}/oauth/identity", self.base_url);
        debug!(url = %url, "Resolving token identity");

        let identity: Identity = Self::decode(self.send(self.http.get(&url))?)?;
        info!(username = %identity.username, "Authenticated");
        Ok(identity)
    }

    fn collection_page(
        &self,
        username: &str,
        page: u32,
        per_page: u32,
    ) -> DiscogsResult<CollectionPage> {
        let url = format!(
            "{}/users/{}/collection/folders/{}/releases",
            self.base_url, username, READ_FOLDER_ID
        );
        debug!(url = %url, page, per_page, "Requesting collection page");

        let request = self
            .http
            .get(&url)
            .query(&[("page", page), ("per_page", per_page)]);
        Self::decode(self.send(request)?)
    }

    fn add_release(&self, username: &str, release_id: ReleaseId) -> DiscogsResult<()> {
        let url = format!(
            "{}/users/{}/collection/folders/{}/releases/{}",
            self.base_url, username, WRITE_FOLDER_ID, release_id
        );
        debug!(url = %url, release_id = %release_id, "Adding release");

        self.send(self.http.post(&url))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings_with_url(url: &str) -> Settings {
        Settings::default().with_overrides(Some(url.to_string()), None)
    }

    #[test]
    fn test_trailing_slashes_trimmed() {
        let client = DiscogsClient::new(&settings_with_url("https://api.discogs.com//"), None).unwrap();
        assert_eq!(client.base_url(), "https://api.discogs.com");
        assert!(!client.is_authenticated());
    }

    #[test]
    fn test_rejects_bad_urls() {
        assert!(matches!(
            DiscogsClient::new(&settings_with_url(""), None),
            Err(DiscogsError::Config(_))
        ));
        assert!(matches!(
            DiscogsClient::new(&settings_with_url("ftp://example.com"), None),
            Err(DiscogsError::Config(_))
        ));
    }

    #[test]
    fn test_identity_needs_token() {
        let client = DiscogsClient::new(&Settings::default(), None).unwrap();
        assert!(matches!(client.identity(), Err(DiscogsError::Config(_))));
    }
}
