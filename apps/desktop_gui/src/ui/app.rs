//! Application shell: product table plus the add/edit and delete windows.

use crossbeam_channel::Receiver;
use eframe::egui;
use egui::Color32;
use shared::domain::Product;

use crate::controller::events::UiEvent;
use crate::controller::state::ProductListController;

enum RowAction {
    Edit(Product),
    Delete(Product),
}

pub struct ProductDeskApp {
    controller: ProductListController,
    ui_rx: Receiver<UiEvent>,
}

impl ProductDeskApp {
    pub fn new(mut controller: ProductListController, ui_rx: Receiver<UiEvent>) -> Self {
        controller.load_products();
        Self { controller, ui_rx }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            self.controller.apply_event(event);
        }
    }

    fn show_top_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("product_top_bar").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                ui.heading("Products");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui
                        .add_enabled(!self.controller.loading, egui::Button::new("Add product"))
                        .clicked()
                    {
                        self.controller.on_add_new();
                    }
                    if ui
                        .add_enabled(!self.controller.loading, egui::Button::new("Refresh"))
                        .clicked()
                    {
                        self.controller.load_products();
                    }
                });
            });
            ui.add_space(4.0);
        });
    }

    fn show_product_table(&mut self, ui: &mut egui::Ui) {
        let mut action = None;

        egui::ScrollArea::vertical().show(ui, |ui| {
            egui::Grid::new("product_table")
                .striped(true)
                .num_columns(6)
                .spacing([16.0, 6.0])
                .show(ui, |ui| {
                    ui.strong("ID");
                    ui.strong("Name");
                    ui.strong("Description");
                    ui.strong("Price");
                    ui.strong("Quantity");
                    ui.strong("");
                    ui.end_row();

                    for product in &self.controller.products {
                        ui.label(product.id.to_string());
                        ui.label(&product.name);
                        ui.label(&product.description);
                        ui.label(format!("{:.2}", product.price));
                        ui.label(product.quantity.to_string());
                        ui.horizontal(|ui| {
                            if ui.button("Edit").clicked() {
                                action = Some(RowAction::Edit(product.clone()));
                            }
                            if ui.button("Delete").clicked() {
                                action = Some(RowAction::Delete(product.clone()));
                            }
                        });
                        ui.end_row();
                    }
                });
        });

        match action {
            Some(RowAction::Edit(product)) => self.controller.on_edit(product),
            Some(RowAction::Delete(product)) => self.controller.on_delete(product),
            None => {}
        }
    }

    fn show_form_window(&mut self, ctx: &egui::Context) {
        if !self.controller.show_modal {
            return;
        }

        let title = if self.controller.is_edit {
            "Edit product"
        } else {
            "Add product"
        };
        let mut submit = false;
        let mut cancel = false;

        egui::Window::new(title)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                let form = &mut self.controller.product_form;

                ui.label(egui::RichText::new("Name").strong());
                ui.add(egui::TextEdit::singleline(&mut form.name).desired_width(280.0));
                if let Some(issue) = form.name_issue() {
                    ui.colored_label(Color32::LIGHT_RED, issue.message());
                }
                ui.add_space(6.0);

                ui.label(egui::RichText::new("Description").strong());
                ui.add(egui::TextEdit::singleline(&mut form.description).desired_width(280.0));
                if let Some(issue) = form.description_issue() {
                    ui.colored_label(Color32::LIGHT_RED, issue.message());
                }
                ui.add_space(6.0);

                ui.label(egui::RichText::new("Price").strong());
                ui.add(egui::TextEdit::singleline(&mut form.price).desired_width(120.0));
                if let Some(issue) = form.price_issue() {
                    ui.colored_label(Color32::LIGHT_RED, issue.message());
                }
                ui.add_space(6.0);

                ui.label(egui::RichText::new("Quantity").strong());
                ui.add(egui::TextEdit::singleline(&mut form.quantity).desired_width(120.0));
                if let Some(issue) = form.quantity_issue() {
                    ui.colored_label(Color32::LIGHT_RED, issue.message());
                }

                if let Some(message) = &self.controller.form_error {
                    ui.add_space(6.0);
                    ui.colored_label(Color32::LIGHT_RED, message);
                }

                ui.add_space(10.0);
                ui.horizontal(|ui| {
                    if ui
                        .add_enabled(!self.controller.form_loading, egui::Button::new("Save"))
                        .clicked()
                    {
                        submit = true;
                    }
                    if ui.button("Cancel").clicked() {
                        cancel = true;
                    }
                    if self.controller.form_loading {
                        ui.add(egui::Spinner::new());
                    }
                });
            });

        if submit {
            self.controller.on_submit();
        }
        if cancel {
            self.controller.close_modal();
        }
    }

    fn show_delete_window(&mut self, ctx: &egui::Context) {
        if !self.controller.show_delete_modal {
            return;
        }

        let name = self
            .controller
            .product_to_delete
            .as_ref()
            .map(|product| product.name.clone())
            .unwrap_or_default();
        let mut confirm = false;
        let mut cancel = false;

        egui::Window::new("Delete product")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(format!("Delete \"{name}\"? This cannot be undone."));
                ui.add_space(10.0);
                ui.horizontal(|ui| {
                    if ui
                        .add_enabled(!self.controller.delete_loading, egui::Button::new("Delete"))
                        .clicked()
                    {
                        confirm = true;
                    }
                    if ui.button("Cancel").clicked() {
                        cancel = true;
                    }
                    if self.controller.delete_loading {
                        ui.add(egui::Spinner::new());
                    }
                });
            });

        if confirm {
            self.controller.confirm_delete();
        }
        if cancel {
            self.controller.cancel_delete();
        }
    }
}

impl eframe::App for ProductDeskApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();

        self.show_top_bar(ctx);
        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(message) = &self.controller.error {
                ui.colored_label(Color32::LIGHT_RED, message);
                ui.add_space(4.0);
            }

            if self.controller.loading {
                ui.horizontal(|ui| {
                    ui.add(egui::Spinner::new());
                    ui.label("Loading products...");
                });
            } else if self.controller.products.is_empty() {
                ui.label(egui::RichText::new("No products yet. Add one to get started.").weak());
            } else {
                self.show_product_table(ui);
            }
        });

        self.show_form_window(ctx);
        self.show_delete_window(ctx);

        ctx.request_repaint_after(std::time::Duration::from_millis(100));
    }
}
