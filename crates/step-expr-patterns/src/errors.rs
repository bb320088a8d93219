//! Error types shared by the expression compilation modules.

use thiserror::Error;

/// Errors surfaced while turning step expressions into regular expressions.
///
/// # Examples
/// ```
/// use step_expr_patterns::{PatternError, validate_parameter_name};
/// let Err(err) = validate_parameter_name("two words") else {
///     panic!("names with spaces are rejected");
/// };
/// assert!(matches!(err, PatternError::InvalidName(ref name) if name == "two words"));
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PatternError {
    /// A parameter name cannot be embedded in a capture-group name.
    #[error("invalid parameter name `{0}`: expected an ASCII identifier")]
    InvalidName(String),
    /// The composite or user-supplied pattern failed to compile.
    #[error(transparent)]
    Regex(#[from] regex::Error),
}
