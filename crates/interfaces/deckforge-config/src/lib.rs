//! Central configuration constants for runtime limits and defaults.

use std::time::Duration;

/// Default base URL of the deck-building service.
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:5000/api";

/// Environment variable overriding [`DEFAULT_API_BASE_URL`].
pub const API_URL_ENV: &str = "DECKFORGE_API_URL";

/// Default per-request timeout. Deck builds can take a while server-side.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Connect timeout for the HTTP client.
pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// File extensions accepted for card list uploads.
pub const CARD_LIST_EXTENSIONS: &[&str] = &["txt"];

/// Capacity of the kernel's completion channel.
pub const EVENT_CHANNEL_CAPACITY: usize = 100;

/// Picks the service base URL: an explicit value wins, then the environment, then the default.
pub fn resolve_api_base_url(explicit: Option<&str>) -> String {
    pick_base_url(explicit, std::env::var(API_URL_ENV).ok().as_deref())
}

fn pick_base_url(explicit: Option<&str>, env: Option<&str>) -> String {
    [explicit, env]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|v| !v.is_empty())
        .unwrap_or(DEFAULT_API_BASE_URL)
        .to_string()
}

/// Whether a file name carries one of [`CARD_LIST_EXTENSIONS`].
pub fn is_card_list_file(file_name: &str) -> bool {
    file_name
        .rsplit_once('.')
        .is_some_and(|(_, ext)| {
            CARD_LIST_EXTENSIONS
                .iter()
                .any(|allowed| ext.eq_ignore_ascii_case(allowed))
        })
}
