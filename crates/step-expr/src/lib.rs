//! Typed step expressions for behaviour-driven test suites.
//!
//! A step template such as `I love {string} {number} and {number}` is
//! compiled into a regular expression whose placeholders become named
//! capture groups. Matching a step against it yields the captured values,
//! converted by each placeholder type, in template order:
//!
//! ```
//! use step_expr::{StepKeyword, StepText, TypeRegistry, Value};
//!
//! let registry = TypeRegistry::new();
//! let step = StepText::new(StepKeyword::Given, "I love \"Vue\" 3 and 12");
//! let values = registry
//!     .match_step(step, "I love {string} {number} and {number}")
//!     .expect("step matches");
//! assert_eq!(values, [Value::from("Vue"), Value::from(3_i64), Value::from(12_i64)]);
//! ```
//!
//! Nine built-in types are always available (see [`BuiltinType`]). Further
//! types are registered per [`TypeRegistry`] or on the process-wide registry
//! through [`define_parameter_type`].

pub mod config;
mod error;
pub mod localization;
mod matcher;
mod registry;
mod step;
mod transform;
mod value;

pub use error::{RegistrationError, StepExpressionError, TransformError};
pub use localization::Localizations;
pub use registry::global::{
    define_parameter_type, match_step, reset_parameter_types, step_contains_regex, with_registry,
};
pub use registry::{CustomType, ParameterType, Transform, TypeRegistry};
pub use step::{StepKeyword, StepKeywordParseError, StepText, UnsupportedStepType};
pub use step_expr_patterns::BuiltinType;
pub use value::{CustomValue, Value};
