//! Backend commands queued from UI to backend worker.

use shared::domain::{ProductDraft, ProductId};

pub enum BackendCommand {
    LoadProducts,
    CreateProduct { draft: ProductDraft },
    UpdateProduct { id: ProductId, draft: ProductDraft },
    DeleteProduct { id: ProductId },
}
