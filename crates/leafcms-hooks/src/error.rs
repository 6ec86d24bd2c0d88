//! Error types for the hook-event core
//!
//! This module defines the error types for hook-event construction. All errors
//! use the `thiserror` crate for ergonomic error handling.
//!
//! # Error Handling Patterns
//!
//! The hook-event core has exactly one hard failure: a hook name without the
//! required `:state` separator cannot be matched or fired correctly, so it is
//! rejected synchronously at construction time and must not be swallowed.
//!
//! Everything else is total: argument binding never errors (missing positions
//! bind to null), and argument lookups on unknown keys return `None` rather
//! than failing.
//!
//! # Examples
//!
//! ```ignore
//! match HookEvent::from_arguments("page.create", HookArguments::new()) {
//!     Ok(event) => println!("Fired: {}", event),
//!     Err(HookError::MalformedName(name)) => eprintln!("Bad hook name: {}", name),
//! }
//! ```

use thiserror::Error;

/// Errors that can occur in the hook-event core
#[derive(Debug, Error)]
pub enum HookError {
    /// Malformed hook name
    ///
    /// This error occurs when a hook name does not follow the
    /// `type[.action]:state` grammar. The string contains the offending name.
    /// Common causes:
    /// - Missing `:state` separator (e.g. `"page.create"`)
    /// - Empty type (e.g. `":after"` or `".create:after"`)
    ///
    /// A malformed hook name is a programming error at the firing site; it is
    /// surfaced immediately rather than deferred or silently ignored.
    #[error("Malformed hook name: {0}")]
    MalformedName(String),
}

/// Result type for hook operations
///
/// This is the standard result type used throughout the hook-event core.
pub type Result<T> = std::result::Result<T, HookError>;
