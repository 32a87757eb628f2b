//! Runtime bridge between UI command queue and backend event intake.

use std::thread;

use client_core::{HttpProductsClient, ProductApi};
use crossbeam_channel::{Receiver, Sender};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;

/// Spawns the backend worker thread. The worker owns a tokio runtime and an
/// HTTP client; it drains queued commands until every UI-side sender is gone.
pub fn launch(server_url: String, cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>) {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                let _ = ui_tx.try_send(UiEvent::WorkerStartupFailed {
                    detail: format!(
                        "backend worker startup failure: failed to build runtime: {err}"
                    ),
                });
                tracing::error!("failed to build backend runtime: {err}");
                return;
            }
        };

        runtime.block_on(async move {
            let api = HttpProductsClient::new(server_url);
            while let Ok(cmd) = cmd_rx.recv() {
                handle_command(&api, cmd, &ui_tx).await;
            }
        });
    });
}

async fn handle_command(api: &impl ProductApi, cmd: BackendCommand, ui_tx: &Sender<UiEvent>) {
    match cmd {
        BackendCommand::LoadProducts => {
            tracing::info!("backend: load_products");
            match api.list_products().await {
                Ok(products) => {
                    let _ = ui_tx.try_send(UiEvent::ProductsLoaded(products));
                }
                Err(err) => {
                    tracing::error!("backend: load_products failed: {err}");
                    let _ = ui_tx.try_send(UiEvent::LoadFailed);
                }
            }
        }
        BackendCommand::CreateProduct { draft } => {
            tracing::info!("backend: create_product");
            match api.create_product(&draft).await {
                Ok(_) => {
                    let _ = ui_tx.try_send(UiEvent::SaveCompleted);
                }
                Err(err) => {
                    tracing::error!("backend: create_product failed: {err}");
                    let _ = ui_tx.try_send(UiEvent::SaveFailed);
                }
            }
        }
        BackendCommand::UpdateProduct { id, draft } => {
            tracing::info!(product_id = id.0, "backend: update_product");
            match api.update_product(id, &draft).await {
                Ok(_) => {
                    let _ = ui_tx.try_send(UiEvent::SaveCompleted);
                }
                Err(err) => {
                    tracing::error!(product_id = id.0, "backend: update_product failed: {err}");
                    let _ = ui_tx.try_send(UiEvent::SaveFailed);
                }
            }
        }
        BackendCommand::DeleteProduct { id } => {
            tracing::info!(product_id = id.0, "backend: delete_product");
            match api.delete_product(id).await {
                Ok(()) => {
                    let _ = ui_tx.try_send(UiEvent::DeleteCompleted { id });
                }
                Err(err) => {
                    tracing::error!(product_id = id.0, "backend: delete_product failed: {err}");
                    let _ = ui_tx.try_send(UiEvent::DeleteFailed);
                }
            }
        }
    }
}
