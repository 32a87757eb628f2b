//! Backend completion events consumed by the desktop GUI controller.

use shared::domain::{Product, ProductId};

#[derive(Debug)]
pub enum UiEvent {
    ProductsLoaded(Vec<Product>),
    LoadFailed,
    SaveCompleted,
    SaveFailed,
    DeleteCompleted { id: ProductId },
    DeleteFailed,
    WorkerStartupFailed { detail: String },
}
