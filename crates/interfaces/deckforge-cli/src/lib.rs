pub mod commands;

use clap::ValueEnum;
use deckforge_core::DeckFormat;

#[derive(ValueEnum, Clone, Debug, Copy)]
pub enum CliFormat {
    Standard,
    Commander,
}

impl From<CliFormat> for DeckFormat {
    fn from(f: CliFormat) -> Self {
        match f {
            CliFormat::Standard => DeckFormat::Standard,
            CliFormat::Commander => DeckFormat::Commander,
        }
    }
}
