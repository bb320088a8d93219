//! User-facing errors raised by the matcher and the type registry.
//!
//! Messages render through [`crate::localization`]; `Display` output has the
//! Fluent directional isolates stripped so it can be compared verbatim.

use std::fmt;

use step_expr_patterns::PatternError;

use crate::localization;

fn render(id: &str, configure: impl FnOnce(&mut fluent::FluentArgs<'static>)) -> String {
    localization::strip_directional_isolates(&localization::message_with_args(id, configure))
}

/// Reason a captured fragment could not be converted by a built-in transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum TransformError {
    /// The digits do not fit the integer type.
    IntegerOutOfRange,
    /// The text is not a decimal number.
    InvalidFloat,
    /// The date or time fields describe no calendar instant.
    InvalidDate,
    /// The local wall-clock time is skipped by a time-zone transition.
    NonexistentLocalTime,
}

impl fmt::Display for TransformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let id = match self {
            Self::IntegerOutOfRange => "transform-integer-out-of-range",
            Self::InvalidFloat => "transform-invalid-float",
            Self::InvalidDate => "transform-invalid-date",
            Self::NonexistentLocalTime => "transform-nonexistent-local-time",
        };
        f.write_str(&localization::message(id))
    }
}

impl std::error::Error for TransformError {}

/// Failure to extract values from a step.
///
/// # Examples
///
/// ```
/// use step_expr::{StepExpressionError, StepKeyword, StepText, TypeRegistry};
///
/// let registry = TypeRegistry::new();
/// let step = StepText::new(StepKeyword::Given, "I love \"Vue\" 3");
/// let err = registry.match_step(step, "I love {number} 3").unwrap_err();
/// assert!(matches!(err, StepExpressionError::Mismatch { .. }));
/// assert_eq!(
///     err.to_string(),
///     "Step \"Given I love \"Vue\" 3\" does not match the expression \"I love {number} 3\""
/// );
/// ```
#[derive(Debug)]
#[non_exhaustive]
pub enum StepExpressionError {
    /// The template declares placeholders but the text yielded no values.
    Mismatch {
        /// Diagnostic identifier of the offending step.
        step: String,
        /// Template text.
        expression: String,
    },
    /// The composite pattern for the template failed to compile.
    InvalidExpression {
        /// Template text.
        expression: String,
        /// Underlying compilation failure.
        source: PatternError,
    },
    /// A captured fragment could not be converted to its type's value.
    Transform {
        /// Diagnostic identifier of the offending step.
        step: String,
        /// Capture-group name of the placeholder occurrence.
        placeholder: String,
        /// Captured text.
        text: String,
        /// Why the conversion failed.
        reason: TransformError,
    },
}

impl fmt::Display for StepExpressionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            Self::Mismatch { step, expression } => render("step-expression-mismatch", |args| {
                args.set("step", step.clone());
                args.set("expression", expression.clone());
            }),
            Self::InvalidExpression { expression, source } => {
                render("step-expression-invalid", |args| {
                    args.set("expression", expression.clone());
                    args.set("reason", source.to_string());
                })
            }
            Self::Transform {
                step,
                placeholder,
                text,
                reason,
            } => render("step-expression-transform", |args| {
                args.set("step", step.clone());
                args.set("placeholder", placeholder.clone());
                args.set("text", text.clone());
                args.set("reason", reason.to_string());
            }),
        };
        f.write_str(&message)
    }
}

impl std::error::Error for StepExpressionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Mismatch { .. } => None,
            Self::InvalidExpression { source, .. } => Some(source),
            Self::Transform { reason, .. } => Some(reason),
        }
    }
}

/// Failure to register a custom parameter type.
#[derive(Debug)]
#[non_exhaustive]
pub enum RegistrationError {
    /// The name belongs to a built-in type.
    BuiltinNameCollision(String),
    /// The name is already registered as a custom type.
    CustomNameCollision(String),
    /// The name cannot be used as a keyword and group prefix.
    InvalidName(String),
    /// The custom pattern does not compile on its own.
    InvalidPattern {
        /// Rejected type name.
        name: String,
        /// Compilation failure of the pattern.
        source: regex::Error,
    },
}

impl RegistrationError {
    /// Name of the type whose registration failed.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::BuiltinNameCollision(name)
            | Self::CustomNameCollision(name)
            | Self::InvalidName(name)
            | Self::InvalidPattern { name, .. } => name,
        }
    }
}

impl fmt::Display for RegistrationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            Self::BuiltinNameCollision(name) => render("parameter-type-builtin-exists", |args| {
                args.set("name", name.clone());
            }),
            Self::CustomNameCollision(name) => render("parameter-type-custom-exists", |args| {
                args.set("name", name.clone());
            }),
            Self::InvalidName(name) => render("parameter-type-invalid-name", |args| {
                args.set("name", name.clone());
            }),
            Self::InvalidPattern { name, source } => {
                render("parameter-type-invalid-pattern", |args| {
                    args.set("name", name.clone());
                    args.set("reason", source.to_string());
                })
            }
        };
        f.write_str(&message)
    }
}

impl std::error::Error for RegistrationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidPattern { source, .. } => Some(source),
            _ => None,
        }
    }
}
