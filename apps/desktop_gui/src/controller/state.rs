//! Product list state: table data, add/edit form window, delete confirmation.

use crossbeam_channel::Sender;
use shared::domain::Product;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::controller::form::ProductForm;
use crate::controller::orchestration::dispatch_backend_command;

/// Owns everything the product list screen renders. UI code mutates it
/// through the `on_*` handlers and feeds backend completions through
/// [`ProductListController::apply_event`].
pub struct ProductListController {
    cmd_tx: Sender<BackendCommand>,
    pub products: Vec<Product>,
    pub loading: bool,
    pub error: Option<String>,
    pub show_modal: bool,
    pub is_edit: bool,
    pub selected_product: Option<Product>,
    pub product_form: ProductForm,
    pub form_loading: bool,
    pub form_error: Option<String>,
    pub show_delete_modal: bool,
    pub product_to_delete: Option<Product>,
    pub delete_loading: bool,
}

impl ProductListController {
    pub fn new(cmd_tx: Sender<BackendCommand>) -> Self {
        Self {
            cmd_tx,
            products: Vec::new(),
            loading: false,
            error: None,
            show_modal: false,
            is_edit: false,
            selected_product: None,
            product_form: ProductForm::default(),
            form_loading: false,
            form_error: None,
            show_delete_modal: false,
            product_to_delete: None,
            delete_loading: false,
        }
    }

    pub fn load_products(&mut self) {
        self.loading = true;
        self.error = None;
        if let Err(message) = dispatch_backend_command(&self.cmd_tx, BackendCommand::LoadProducts) {
            self.error = Some(message);
            self.loading = false;
        }
    }

    pub fn on_add_new(&mut self) {
        self.is_edit = false;
        self.selected_product = None;
        self.product_form.reset();
        self.form_error = None;
        self.show_modal = true;
    }

    pub fn on_edit(&mut self, product: Product) {
        self.is_edit = true;
        self.product_form.prefill(&product);
        self.selected_product = Some(product);
        self.form_error = None;
        self.show_modal = true;
    }

    /// Keeps form contents and selection so a reopened edit shows the
    /// same values the user left behind.
    pub fn close_modal(&mut self) {
        self.show_modal = false;
    }

    pub fn on_submit(&mut self) {
        let Some(draft) = self.product_form.draft() else {
            return;
        };
        let cmd = if self.is_edit {
            let Some(selected) = self.selected_product.as_ref() else {
                return;
            };
            BackendCommand::UpdateProduct {
                id: selected.id,
                draft,
            }
        } else {
            BackendCommand::CreateProduct { draft }
        };

        self.form_loading = true;
        self.form_error = None;
        if let Err(message) = dispatch_backend_command(&self.cmd_tx, cmd) {
            self.form_error = Some(message);
            self.form_loading = false;
        }
    }

    pub fn on_delete(&mut self, product: Product) {
        self.product_to_delete = Some(product);
        self.show_delete_modal = true;
    }

    pub fn confirm_delete(&mut self) {
        let Some(target) = self.product_to_delete.as_ref() else {
            return;
        };
        self.delete_loading = true;
        let cmd = BackendCommand::DeleteProduct { id: target.id };
        if let Err(message) = dispatch_backend_command(&self.cmd_tx, cmd) {
            self.error = Some(message);
            self.delete_loading = false;
        }
    }

    pub fn cancel_delete(&mut self) {
        self.show_delete_modal = false;
        self.product_to_delete = None;
    }

    pub fn apply_event(&mut self, event: UiEvent) {
        match event {
            UiEvent::ProductsLoaded(products) => {
                self.products = products;
                self.loading = false;
            }
            UiEvent::LoadFailed => {
                self.error = Some("Failed to load products".to_string());
                self.loading = false;
            }
            UiEvent::SaveCompleted => {
                self.show_modal = false;
                self.form_loading = false;
                self.load_products();
            }
            UiEvent::SaveFailed => {
                self.form_error = Some("Failed to save product".to_string());
                self.form_loading = false;
            }
            UiEvent::DeleteCompleted { id } => {
                self.products.retain(|product| product.id != id);
                self.show_delete_modal = false;
                self.product_to_delete = None;
                self.delete_loading = false;
            }
            UiEvent::DeleteFailed => {
                self.error = Some("Failed to delete product".to_string());
                self.show_delete_modal = false;
                self.product_to_delete = None;
                self.delete_loading = false;
            }
            UiEvent::WorkerStartupFailed { detail } => {
                self.error = Some(detail);
                self.loading = false;
                self.form_loading = false;
                self.delete_loading = false;
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/state_tests.rs"]
mod tests;
