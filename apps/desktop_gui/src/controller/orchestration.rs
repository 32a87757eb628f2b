//! Command orchestration helpers from UI actions to backend command queue.

use crossbeam_channel::{Sender, TrySendError};

use crate::backend_bridge::commands::BackendCommand;

pub fn dispatch_backend_command(
    cmd_tx: &Sender<BackendCommand>,
    cmd: BackendCommand,
) -> Result<(), String> {
    let cmd_name = match &cmd {
        BackendCommand::LoadProducts => "load_products",
        BackendCommand::CreateProduct { .. } => "create_product",
        BackendCommand::UpdateProduct { .. } => "update_product",
        BackendCommand::DeleteProduct { .. } => "delete_product",
    };

    match cmd_tx.try_send(cmd) {
        Ok(()) => {
            tracing::debug!(command = cmd_name, "queued ui->backend command");
            Ok(())
        }
        Err(TrySendError::Full(_)) => Err("Command queue is full; please retry".to_string()),
        Err(TrySendError::Disconnected(_)) => {
            Err("Backend worker disconnected; restart the app".to_string())
        }
    }
}
