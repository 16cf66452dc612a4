//! poly-ticker: reserve a Polymath token symbol from the desktop.

use eframe::egui;

mod app;
mod bridge;
mod state;
mod ui;

fn main() -> eyre::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!(git = env!("GIT_HASH"), "Starting poly-ticker");

    let config = poly_ticker_adapters::TickerAdapterConfig::from_env();
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()?;

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Token Symbol Reservation – Polymath")
            .with_inner_size([760.0, 620.0])
            .with_min_inner_size([520.0, 420.0]),
        ..Default::default()
    };

    eframe::run_native(
        "poly-ticker",
        native_options,
        Box::new(move |cc| Ok(Box::new(app::App::new(cc, config, runtime)))),
    )
    .map_err(|e| eyre::eyre!("ui terminated: {e}"))
}
