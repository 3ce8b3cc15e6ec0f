use camino::Utf8PathBuf;
use deckforge_core::DeckFormat;

#[derive(Debug, Clone)]
pub enum AppCommand {
    // Format
    SelectFormat(DeckFormat),

    // Card pool
    EditCardList(String),
    LoadCardFile(Utf8PathBuf),
    EditDeckGoal(String),

    // Commanders
    EnterCommander(String),
    EnterPartner(String),

    // Build
    SubmitBuild,

    // Navigation
    EditAgain,
    StartOver,
    DismissError,
}
