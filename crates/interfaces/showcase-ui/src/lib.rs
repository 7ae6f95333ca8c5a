mod app;
mod components;
mod screens;
mod theme;
mod utils;

use showcase_app_core::ShowcaseApplication;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

pub fn run() -> eframe::Result<()> {
    setup_logging();

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([900.0, 640.0])
            .with_min_inner_size([760.0, 520.0])
            .with_title("MARKETPLACE // SHOWCASE"),
        ..Default::default()
    };

    eframe::run_native(
        "Marketplace Showcase",
        options,
        Box::new(|cc| {
            theme::setup(&cc.egui_ctx);

            let core = ShowcaseApplication::new();
            Ok(Box::new(app::ShowcaseUiApp::new(core)))
        }),
    )
}
