mod error;

pub use error::{ApiError, ApiErrorKind};

use deckforge_core::{
    BuildDeckRequest, BuiltDeck, CheckPartnerRequest, CommanderInfo, PartnerCompatibility,
    ValidateCommanderRequest,
};
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

/// HTTP client with the default request and connect timeouts.
pub fn default_http_client() -> reqwest::Result<Client> {
    http_client(deckforge_config::DEFAULT_REQUEST_TIMEOUT)
}

pub fn http_client(timeout: Duration) -> reqwest::Result<Client> {
    Client::builder()
        .timeout(timeout)
        .connect_timeout(deckforge_config::CONNECT_TIMEOUT)
        .user_agent(concat!("deckforge/", env!("CARGO_PKG_VERSION")))
        .build()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    ValidateCommander,
    CheckPartner,
    BuildDeck,
}

impl Endpoint {
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::ValidateCommander => "validate-commander",
            Endpoint::CheckPartner => "check-partner",
            Endpoint::BuildDeck => "build-deck",
        }
    }

    /// Message used when a failed response carries no `error` field.
    pub fn default_error(self) -> &'static str {
        match self {
            Endpoint::ValidateCommander => "Failed to validate commander",
            Endpoint::CheckPartner => "Failed to check partner compatibility",
            Endpoint::BuildDeck => "Failed to build deck",
        }
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
}

/// Normalize a service URL so endpoint paths resolve beneath it.
/// `http://host/api` and `http://host/api/` are equivalent.
pub fn normalize_base_url(base_url: &str) -> Result<Url, ApiError> {
    let mut url = Url::parse(base_url.trim()).map_err(|e| ApiError::InvalidUrl {
        url: base_url.to_string(),
        reason: e.to_string(),
    })?;

    if url.cannot_be_a_base() {
        return Err(ApiError::InvalidUrl {
            url: base_url.to_string(),
            reason: "not a base url".into(),
        });
    }

    // Without the trailing slash `Url::join` would replace the last segment
    // (`/api` + `build-deck` -> `/build-deck`).
    if !url.path().ends_with('/') {
        url.set_path(&format!("{}/", url.path()));
    }

    Ok(url)
}

/// Client for the remote deck-building service.
#[derive(Debug, Clone)]
pub struct DeckApiClient {
    client: Client,
    base: Url,
}

impl DeckApiClient {
    pub fn new(client: Client, base_url: &str) -> Result<Self, ApiError> {
        Ok(Self {
            client,
            base: normalize_base_url(base_url)?,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    pub fn endpoint_url(&self, endpoint: Endpoint) -> Result<Url, ApiError> {
        self.base
            .join(endpoint.path())
            .map_err(|e| ApiError::InvalidUrl {
                url: format!("{}{}", self.base, endpoint.path()),
                reason: e.to_string(),
            })
    }

    pub async fn validate_commander(
        &self,
        name: &str,
        is_partner: bool,
    ) -> Result<CommanderInfo, ApiError> {
        let body = ValidateCommanderRequest {
            name: name.to_string(),
            is_partner,
        };
        self.post_json(Endpoint::ValidateCommander, &body).await
    }

    pub async fn check_partner(
        &self,
        commander1: &str,
        commander2: &str,
    ) -> Result<PartnerCompatibility, ApiError> {
        let body = CheckPartnerRequest {
            commander1: commander1.to_string(),
            commander2: commander2.to_string(),
        };
        self.post_json(Endpoint::CheckPartner, &body).await
    }

    pub async fn build_deck(&self, request: &BuildDeckRequest) -> Result<BuiltDeck, ApiError> {
        self.post_json(Endpoint::BuildDeck, request).await
    }

    async fn post_json<B, R>(&self, endpoint: Endpoint, body: &B) -> Result<R, ApiError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = self.endpoint_url(endpoint)?;
        debug!(%url, "POST {}", endpoint.path());

        let resp = self.client.post(url).json(body).send().await?;
        let status = resp.status();

        if !status.is_success() {
            let message = resp
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|b| b.error)
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| endpoint.default_error().to_string());
            warn!(
                "{} rejected with {}: {}",
                endpoint.path(),
                status.as_u16(),
                message
            );
            return Err(ApiError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        resp.json::<R>().await.map_err(|source| ApiError::Decode {
            endpoint: endpoint.path(),
            source,
        })
    }
}
