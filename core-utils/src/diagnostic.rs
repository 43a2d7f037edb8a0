//! Degraded results for swallow-and-log operations.
//!
//! Storage and device helpers never fail from the caller's point of view:
//! they substitute a safe value (`None`, `false`, `()`) and log. [`Reported`]
//! carries that value together with the [`Diagnostic`] that was logged, so
//! callers and tests can inspect the failure without capturing logs.

use std::fmt;

/// What went wrong in a degraded operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Short operation name, e.g. `storage.set`.
    pub operation: &'static str,
    /// Rendered error.
    pub message: String,
}

impl Diagnostic {
    /// Build a diagnostic and emit it as an error event.
    pub fn report(operation: &'static str, error: &dyn fmt::Display) -> Self {
        let message = error.to_string();
        tracing::error!(operation, error = %message, "{operation} failed");
        Self { operation, message }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.operation, self.message)
    }
}

/// A value that may have been substituted after a logged failure.
#[must_use]
#[derive(Debug, Clone, PartialEq)]
pub struct Reported<T> {
    value: T,
    diagnostic: Option<Diagnostic>,
}

impl<T> Reported<T> {
    pub fn ok(value: T) -> Self {
        Self {
            value,
            diagnostic: None,
        }
    }

    pub fn degraded(value: T, diagnostic: Diagnostic) -> Self {
        Self {
            value,
            diagnostic: Some(diagnostic),
        }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn into_value(self) -> T {
        self.value
    }

    pub fn diagnostic(&self) -> Option<&Diagnostic> {
        self.diagnostic.as_ref()
    }

    pub fn is_degraded(&self) -> bool {
        self.diagnostic.is_some()
    }

    pub fn into_parts(self) -> (T, Option<Diagnostic>) {
        (self.value, self.diagnostic)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degraded_keeps_value_and_diagnostic() {
        let reported = Reported::degraded(false, Diagnostic::report("camera.enumerate", &"denied"));

        assert!(reported.is_degraded());
        assert!(!reported.value());
        assert_eq!(
            reported.diagnostic().map(ToString::to_string).as_deref(),
            Some("camera.enumerate: denied")
        );
    }

    #[test]
    fn test_ok_has_no_diagnostic() {
        let (value, diagnostic) = Reported::ok(3).into_parts();
        assert_eq!(value, 3);
        assert!(diagnostic.is_none());
    }
}
