use clap::Parser;
use crossbeam_channel::bounded;
use eframe::egui;

mod backend_bridge;
mod controller;
mod ui;

use backend_bridge::commands::BackendCommand;
use backend_bridge::runtime;
use controller::events::UiEvent;
use controller::state::ProductListController;
use ui::ProductDeskApp;

#[derive(Parser, Debug)]
struct Args {
    /// Base URL of the product server.
    #[arg(long, default_value = "http://127.0.0.1:8000")]
    server_url: String,
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let args = Args::parse();

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(256);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(2048);
    runtime::launch(args.server_url, cmd_rx, ui_tx);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Product Desk")
            .with_inner_size([900.0, 620.0])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Product Desk",
        options,
        Box::new(|_cc| {
            Ok(Box::new(ProductDeskApp::new(
                ProductListController::new(cmd_tx),
                ui_rx,
            )))
        }),
    )
}
