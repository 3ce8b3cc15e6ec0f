//! User-facing error texts.

pub const FILE_READ_FAILED: &str = "Error reading file. Please try again.";
pub const UNSUPPORTED_CARD_FILE: &str = "Please choose a .txt card list";
pub const MISSING_CARD_LIST: &str = "Please provide a card list";
pub const MISSING_FORMAT: &str = "Please select a format";
pub const MISSING_COMMANDER: &str = "Please select a commander";
pub const PARTNERS_INCOMPATIBLE: &str = "Commanders are not compatible partners";

pub const COMMANDER_ERROR_PREFIX: &str = "Error validating commander: ";
pub const BUILD_ERROR_PREFIX: &str = "Error building deck: ";

pub fn commander_error(detail: &str) -> String {
    format!("{COMMANDER_ERROR_PREFIX}{detail}")
}

pub fn build_error(detail: &str) -> String {
    format!("{BUILD_ERROR_PREFIX}{detail}")
}
