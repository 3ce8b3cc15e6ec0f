pub mod files;
pub mod net;

// Re-exports for convenience
pub use files::{read_card_file, CardFileError};
pub use net::{default_http_client, ApiError, DeckApiClient, Endpoint};
