//! Required-field validation.

use bridge_traits::Document;
use core_runtime::config::FieldColors;
use tracing::debug;

const REQUIRED_SELECTOR: &str = "[required]";

/// Check every `[required]` field of the form with id `form_id`.
///
/// Empty or whitespace-only fields get the invalid border colour, the rest get
/// the valid one. All fields are visited so every problem is highlighted in a
/// single pass. A form that does not exist counts as valid.
pub fn validate_form(document: &dyn Document, form_id: &str, colors: &FieldColors) -> bool {
    let Some(form) = document.element_by_id(form_id) else {
        debug!(form_id, "Form not found, skipping validation");
        return true;
    };

    let mut valid = true;
    for field in form.query_selector_all(REQUIRED_SELECTOR) {
        let filled = field
            .value()
            .map(|value| !value.trim().is_empty())
            .unwrap_or(false);

        if filled {
            field.set_border_color(&colors.valid);
        } else {
            field.set_border_color(&colors.invalid);
            valid = false;
        }
    }

    debug!(form_id, valid, "Validated form");
    valid
}

#[cfg(test)]
mod tests {
    use super::*;
    use bridge_traits::testing::{FakeDocument, FakeElement};

    fn form_with(fields: &[FakeElement]) -> FakeDocument {
        let form = FakeElement::new("form");
        for field in fields {
            form.add_child(REQUIRED_SELECTOR, field.clone());
        }
        let document = FakeDocument::new();
        document.insert("register", form);
        document
    }

    #[test]
    fn test_blank_field_fails_and_is_highlighted() {
        let name = FakeElement::new("input").with_value("Lan");
        let email = FakeElement::new("input").with_value("   ");
        let document = form_with(&[name.clone(), email.clone()]);

        assert!(!validate_form(&document, "register", &FieldColors::default()));
        assert_eq!(name.style("border-color").as_deref(), Some("#e0e0e0"));
        assert_eq!(email.style("border-color").as_deref(), Some("#dc3545"));
    }

    #[test]
    fn test_all_filled_passes() {
        let name = FakeElement::new("input").with_value("Lan");
        let note = FakeElement::new("textarea").with_value("hello");
        let document = form_with(&[name.clone(), note.clone()]);

        assert!(validate_form(&document, "register", &FieldColors::default()));
        assert_eq!(note.style("border-color").as_deref(), Some("#e0e0e0"));
    }

    #[test]
    fn test_every_field_is_visited() {
        let first = FakeElement::new("input");
        let second = FakeElement::new("input").with_value("");
        let third = FakeElement::new("input").with_value("ok");
        let document = form_with(&[first.clone(), second.clone(), third.clone()]);

        assert!(!validate_form(&document, "register", &FieldColors::default()));
        assert_eq!(first.style("border-color").as_deref(), Some("#dc3545"));
        assert_eq!(second.style("border-color").as_deref(), Some("#dc3545"));
        assert_eq!(third.style("border-color").as_deref(), Some("#e0e0e0"));
    }

    #[test]
    fn test_missing_form_is_valid() {
        let document = FakeDocument::new();
        assert!(validate_form(&document, "nope", &FieldColors::default()));
    }

    #[test]
    fn test_custom_colours() {
        let field = FakeElement::new("input");
        let document = form_with(&[field.clone()]);
        let colors = FieldColors {
            invalid: "red".to_string(),
            valid: "green".to_string(),
        };

        validate_form(&document, "register", &colors);
        assert_eq!(field.style("border-color").as_deref(), Some("red"));
    }
}
