#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

fn main() {
    if let Err(err) = deckforge_ui::run() {
        eprintln!("DeckForge failed: {err}");
        std::process::exit(1);
    }
}
