//! Common error infrastructure for decon-core.
//!
//! Domain-specific errors (e.g., [`crate::RegistryError`]) live next to the
//! component that raises them. This module only provides the shared severity
//! classification and the trait every error type implements.
//!
//! Most malformed input is *not* an error here: unresolved material names,
//! non-numeric weights and missing items degrade to zero-effect outcomes. Only
//! conditions that would leave shared state ambiguous are surfaced as errors.

/// Severity level of an error, used for categorization and recovery strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - the caller may retry or continue with other input.
    Recoverable,

    /// Validation error - invalid input, should not retry without changes.
    Validation,

    /// Fatal error - data is inconsistent and initialization must stop.
    ///
    /// Examples: two catalog entries declaring the same material name.
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if processing must stop.
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::Fatal)
    }
}

/// Common trait for all decon-core errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait DeconError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
