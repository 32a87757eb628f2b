//! Product form buffers and per-field validation.

use shared::domain::{Product, ProductDraft};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldIssue {
    Required,
    NotANumber,
    Negative,
    NotAnInteger,
}

impl FieldIssue {
    pub fn message(self) -> &'static str {
        match self {
            FieldIssue::Required => "This field is required",
            FieldIssue::NotANumber => "Enter a valid number",
            FieldIssue::Negative => "Must be zero or greater",
            FieldIssue::NotAnInteger => "Enter a whole number",
        }
    }
}

/// Text buffers backing the add/edit window. Values stay raw strings while
/// editing; a `ProductDraft` is produced only once every field validates.
#[derive(Debug, Clone, Default)]
pub struct ProductForm {
    pub name: String,
    pub description: String,
    pub price: String,
    pub quantity: String,
}

impl ProductForm {
    pub fn name_issue(&self) -> Option<FieldIssue> {
        if self.name.trim().is_empty() {
            Some(FieldIssue::Required)
        } else {
            None
        }
    }

    pub fn description_issue(&self) -> Option<FieldIssue> {
        if self.description.trim().is_empty() {
            Some(FieldIssue::Required)
        } else {
            None
        }
    }

    pub fn price_issue(&self) -> Option<FieldIssue> {
        let raw = self.price.trim();
        if raw.is_empty() {
            return Some(FieldIssue::Required);
        }
        match raw.parse::<f64>() {
            Ok(value) if !value.is_finite() => Some(FieldIssue::NotANumber),
            Ok(value) if value < 0.0 => Some(FieldIssue::Negative),
            Ok(_) => None,
            Err(_) => Some(FieldIssue::NotANumber),
        }
    }

    pub fn quantity_issue(&self) -> Option<FieldIssue> {
        let raw = self.quantity.trim();
        if raw.is_empty() {
            return Some(FieldIssue::Required);
        }
        if !raw.chars().all(|ch| ch.is_ascii_digit()) {
            return Some(FieldIssue::NotAnInteger);
        }
        match raw.parse::<i64>() {
            Ok(_) => None,
            Err(_) => Some(FieldIssue::NotANumber),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.name_issue().is_none()
            && self.description_issue().is_none()
            && self.price_issue().is_none()
            && self.quantity_issue().is_none()
    }

    pub fn draft(&self) -> Option<ProductDraft> {
        if !self.is_valid() {
            return None;
        }
        let price = self.price.trim().parse::<f64>().ok()?;
        let quantity = self.quantity.trim().parse::<i64>().ok()?;
        Some(ProductDraft {
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            price,
            quantity,
        })
    }

    pub fn reset(&mut self) {
        self.name.clear();
        self.description.clear();
        self.price.clear();
        self.quantity.clear();
    }

    pub fn prefill(&mut self, product: &Product) {
        self.name = product.name.clone();
        self.description = product.description.clone();
        self.price = product.price.to_string();
        self.quantity = product.quantity.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::domain::ProductId;

    #[test]
    fn blank_form_reports_required_everywhere() {
        let form = ProductForm::default();
        assert_eq!(form.name_issue(), Some(FieldIssue::Required));
        assert_eq!(form.description_issue(), Some(FieldIssue::Required));
        assert_eq!(form.price_issue(), Some(FieldIssue::Required));
        assert_eq!(form.quantity_issue(), Some(FieldIssue::Required));
        assert!(!form.is_valid());
        assert!(form.draft().is_none());
    }

    #[test]
    fn price_rejects_non_numeric_and_negative_input() {
        let mut form = ProductForm {
            price: "abc".to_string(),
            ..ProductForm::default()
        };
        assert_eq!(form.price_issue(), Some(FieldIssue::NotANumber));

        form.price = "NaN".to_string();
        assert_eq!(form.price_issue(), Some(FieldIssue::NotANumber));

        form.price = "-3".to_string();
        assert_eq!(form.price_issue(), Some(FieldIssue::Negative));

        form.price = "19.99".to_string();
        assert_eq!(form.price_issue(), None);
    }

    #[test]
    fn quantity_requires_a_whole_number() {
        let mut form = ProductForm {
            quantity: "2.5".to_string(),
            ..ProductForm::default()
        };
        assert_eq!(form.quantity_issue(), Some(FieldIssue::NotAnInteger));

        form.quantity = "-2".to_string();
        assert_eq!(form.quantity_issue(), Some(FieldIssue::NotAnInteger));

        form.quantity = "3".to_string();
        assert_eq!(form.quantity_issue(), None);
    }

    #[test]
    fn draft_trims_text_fields() {
        let form = ProductForm {
            name: "  Lamp  ".to_string(),
            description: " Adjustable arm ".to_string(),
            price: "24.5".to_string(),
            quantity: "3".to_string(),
        };

        let draft = form.draft().expect("valid draft");
        assert_eq!(draft.name, "Lamp");
        assert_eq!(draft.description, "Adjustable arm");
        assert_eq!(draft.price, 24.5);
        assert_eq!(draft.quantity, 3);
    }

    #[test]
    fn prefill_round_trips_product_fields() {
        let product = Product {
            id: ProductId(5),
            name: "Lamp".to_string(),
            description: "Adjustable arm".to_string(),
            price: 24.5,
            quantity: 3,
        };

        let mut form = ProductForm::default();
        form.prefill(&product);
        assert_eq!(form.price, "24.5");
        assert_eq!(form.quantity, "3");
        assert_eq!(form.draft(), Some(product.draft()));
    }

    #[test]
    fn reset_clears_every_field() {
        let mut form = ProductForm {
            name: "Lamp".to_string(),
            description: "Adjustable arm".to_string(),
            price: "24.5".to_string(),
            quantity: "3".to_string(),
        };

        form.reset();
        assert!(form.name.is_empty());
        assert!(form.description.is_empty());
        assert!(form.price.is_empty());
        assert!(form.quantity.is_empty());
    }
}
