use async_trait::async_trait;
use deckforge_core::{BuildDeckRequest, BuiltDeck, CommanderInfo, PartnerCompatibility};
use deckforge_infra::DeckApiClient;

use crate::ports::DeckServicePort;

#[async_trait]
impl DeckServicePort for DeckApiClient {
    async fn validate_commander(
        &self,
        name: &str,
        is_partner: bool,
    ) -> anyhow::Result<CommanderInfo> {
        Ok(DeckApiClient::validate_commander(self, name, is_partner).await?)
    }

    async fn check_partner(
        &self,
        commander1: &str,
        commander2: &str,
    ) -> anyhow::Result<PartnerCompatibility> {
        Ok(DeckApiClient::check_partner(self, commander1, commander2).await?)
    }

    async fn build_deck(&self, request: &BuildDeckRequest) -> anyhow::Result<BuiltDeck> {
        Ok(DeckApiClient::build_deck(self, request).await?)
    }
}
