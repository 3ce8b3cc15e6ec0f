use anyhow::Context;
use deckforge_infra::DeckApiClient;

use crate::app_core::AppStore;
use crate::kernel::AppKernel;

/// The workflow wired to the HTTP deck service.
pub type DeckBuilderApp = AppKernel<DeckApiClient>;

/// Builds a kernel talking to the service at `base_url`, with a fresh state.
pub fn connect(base_url: &str) -> anyhow::Result<DeckBuilderApp> {
    let http = deckforge_infra::default_http_client().context("Failed to build HTTP client")?;
    let client = DeckApiClient::new(http, base_url)
        .with_context(|| format!("Invalid deck service URL {base_url}"))?;
    tracing::info!("using deck service at {}", client.base_url());
    Ok(AppKernel::new(AppStore::default(), client))
}
