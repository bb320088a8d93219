//! Shared step-expression compilation utilities for step-expr.
//!
//! The crate owns the syntax side of typed step expressions: the built-in
//! placeholder catalog, the template lexer and compiler that turn a template
//! into one composite regular expression, and the named-capture extraction
//! used by the runtime to recover placeholder text in template order.

mod capture;
mod catalog;
mod errors;
mod expression;

pub use capture::{NamedCapture, extract_named_captures};
pub use catalog::BuiltinType;
pub use errors::PatternError;
pub use expression::{
    CompiledExpression, ExpressionOptions, ExpressionSource, ParameterSyntax, PlaceholderSlot,
    build_expression_source, compile_expression, contains_placeholder, fragment, group_name,
    split_group_name, validate_parameter_name,
};
