//! Blocking dialog primitive.

/// Host modal dialogs (`window.alert`).
pub trait Dialogs {
    /// Show a blocking alert with `message`.
    fn alert(&self, message: &str);
}
