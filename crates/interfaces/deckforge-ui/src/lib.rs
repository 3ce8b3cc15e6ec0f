mod app;
mod components;
mod screens;
mod theme;
mod utils;

use tracing_subscriber::{EnvFilter, FmtSubscriber};

fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

pub fn run() -> eframe::Result<()> {
    setup_logging();

    let api_url = deckforge_config::resolve_api_base_url(None);

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([860.0, 680.0])
            .with_min_inner_size([640.0, 480.0])
            .with_title("DECKFORGE // BUILDER"),
        ..Default::default()
    };

    eframe::run_native(
        "DeckForge",
        options,
        Box::new(move |cc| {
            theme::setup(&cc.egui_ctx);

            let core = deckforge_app_core::connect(&api_url)?;
            Ok(Box::new(app::DeckForgeUiApp::new(core, api_url)))
        }),
    )
}
