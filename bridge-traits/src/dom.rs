//! Document and Element Abstractions
//!
//! A deliberately small slice of the DOM: only the calls the utility bundle
//! makes. Everything takes `&self` because host elements are reference types
//! whose state lives on the page, not in Rust.

use std::any::Any;
use std::rc::Rc;

use crate::error::Result;

/// CSS `display` values the bundle toggles between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Display {
    None,
    Block,
    Inline,
    InlineFlex,
}

impl Display {
    /// The CSS keyword for this value.
    pub fn as_css(self) -> &'static str {
        match self {
            Display::None => "none",
            Display::Block => "block",
            Display::Inline => "inline",
            Display::InlineFlex => "inline-flex",
        }
    }
}

/// A node in the host document.
///
/// # Example
///
/// ```ignore
/// use bridge_traits::dom::{Display, Element};
///
/// fn flash(element: &dyn Element) {
///     element.set_text("Saved");
///     element.set_display(Display::Block);
/// }
/// ```
pub trait Element {
    /// Replace the text content.
    fn set_text(&self, text: &str);

    /// Replace the `class` attribute.
    fn set_class_name(&self, class_name: &str);

    /// Set a single inline style property (e.g. `border-color`).
    fn set_style(&self, property: &str, value: &str);

    /// Replace the whole inline style declaration.
    fn set_css_text(&self, css: &str);

    /// Replace the inner HTML.
    fn set_inner_html(&self, html: &str);

    /// Toggle the `disabled` flag of form controls and buttons.
    fn set_disabled(&self, disabled: bool);

    /// Current value of a form control, `None` for elements without one.
    fn value(&self) -> Option<String>;

    /// First descendant matching `selectors`.
    fn query_selector(&self, selectors: &str) -> Option<Rc<dyn Element>>;

    /// All descendants matching `selectors`, in document order.
    fn query_selector_all(&self, selectors: &str) -> Vec<Rc<dyn Element>>;

    /// Detach from the parent node. No-op when already detached.
    fn remove(&self);

    /// Downcast hook so a host can recover its own element type.
    fn as_any(&self) -> &dyn Any;

    /// Set the inline `display` property.
    fn set_display(&self, display: Display) {
        self.set_style("display", display.as_css());
    }

    /// Set the inline `border-color` property.
    fn set_border_color(&self, color: &str) {
        self.set_style("border-color", color);
    }
}

/// The host document.
pub trait Document {
    /// Look up an element by its `id` attribute.
    fn element_by_id(&self, id: &str) -> Option<Rc<dyn Element>>;

    /// All elements in the document matching `selectors`.
    fn query_selector_all(&self, selectors: &str) -> Vec<Rc<dyn Element>>;

    /// Create a detached element.
    fn create_element(&self, tag: &str) -> Result<Rc<dyn Element>>;

    /// Append an element created by this document to `<body>`.
    fn append_to_body(&self, element: &dyn Element) -> Result<()>;

    /// Append an element created by this document to `<head>`.
    fn append_to_head(&self, element: &dyn Element) -> Result<()>;
}
