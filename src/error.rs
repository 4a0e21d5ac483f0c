//! Error types for border consolidation
//!
//! The merge pass is pure and in-memory, so the only failures it can
//! surface are contract violations in its input: geometry the upstream
//! layout pass should never have produced. These fail fast before any run
//! state is built.
//!
//! All errors use the `thiserror` crate for minimal boilerplate and
//! proper error trait implementations.

use thiserror::Error;

/// Result type alias for border-consolidation operations
///
/// This is a convenience type that uses our Error type as the error variant.
///
/// # Examples
///
/// ```
/// use overpaint::Result;
///
/// fn check_input() -> Result<()> {
///     Ok(())
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for border consolidation
///
/// Each variant indicates a caller bug, not a data condition: correctly
/// constructed layout input never produces these. Missing borders and
/// paddings are not errors; they read as absent/zero.
///
/// # Examples
///
/// ```
/// use overpaint::Error;
///
/// fn reject_width() -> Result<(), Error> {
///     Err(Error::InvalidExtent {
///         message: "inline extent cannot be negative: -100".to_string(),
///     })
/// }
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
  /// An input area carries a negative inline or block extent
  #[error("Invalid area extent: {message}")]
  InvalidExtent { message: String },

  /// An input area carries a border or padding trait with a negative
  /// width, radius, or amount
  #[error("Invalid border trait: {message}")]
  InvalidTrait { message: String },
}
