use async_trait::async_trait;
use deckforge_core::{BuildDeckRequest, BuiltDeck, CommanderInfo, PartnerCompatibility};

/// The remote deck-building service as seen by the workflow.
#[async_trait]
pub trait DeckServicePort: Send + Sync + 'static {
    async fn validate_commander(&self, name: &str, is_partner: bool)
        -> anyhow::Result<CommanderInfo>;

    async fn check_partner(
        &self,
        commander1: &str,
        commander2: &str,
    ) -> anyhow::Result<PartnerCompatibility>;

    async fn build_deck(&self, request: &BuildDeckRequest) -> anyhow::Result<BuiltDeck>;
}
