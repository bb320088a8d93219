//! Placeholder type registry.
//!
//! A [`TypeRegistry`] combines the fixed built-in catalog with caller-defined
//! types. It is an ordinary value: tests may own one each, while step-binding
//! layers that need a shared vocabulary use the process-wide instance in
//! [`global`].

use std::fmt;
use std::sync::Arc;

use regex::Regex;
use step_expr_patterns::{
    BuiltinType, CompiledExpression, ExpressionOptions, ParameterSyntax, PatternError,
    compile_expression, validate_parameter_name,
};

use crate::config;
use crate::error::{RegistrationError, TransformError};
use crate::transform;
use crate::value::Value;

pub mod global;

/// Shared transform of a custom type.
pub type Transform = Arc<dyn Fn(&str) -> Value + Send + Sync>;

/// Caller-defined placeholder type.
#[derive(Clone)]
pub struct CustomType {
    name: String,
    pattern: String,
    transform: Transform,
}

impl CustomType {
    /// Type name; the keyword is `{name}`.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Template tag denoting this type.
    #[must_use]
    pub fn keyword(&self) -> String {
        format!("{{{}}}", self.name)
    }

    /// Pattern matched by the placeholder.
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Convert captured text into this type's value.
    #[must_use]
    pub fn transform(&self, text: &str) -> Value {
        (self.transform)(text)
    }
}

impl fmt::Debug for CustomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomType")
            .field("name", &self.name)
            .field("pattern", &self.pattern)
            .finish_non_exhaustive()
    }
}

/// A placeholder type resolved by name.
#[derive(Debug, Clone, Copy)]
pub enum ParameterType<'r> {
    /// Entry of the fixed catalog.
    Builtin(BuiltinType),
    /// Entry registered by the caller.
    Custom(&'r CustomType),
}

impl ParameterType<'_> {
    /// Type name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Builtin(ty) => ty.name(),
            Self::Custom(ty) => ty.name(),
        }
    }

    /// Pattern matched by the placeholder.
    #[must_use]
    pub fn pattern(&self) -> &str {
        match self {
            Self::Builtin(ty) => ty.pattern(),
            Self::Custom(ty) => ty.pattern(),
        }
    }

    /// Convert captured text into a value.
    ///
    /// # Errors
    /// Returns [`TransformError`] when a built-in transform cannot represent
    /// the text. Custom transforms are infallible.
    pub fn transform(&self, text: &str) -> Result<Value, TransformError> {
        match self {
            Self::Builtin(ty) => transform::apply(*ty, text),
            Self::Custom(ty) => Ok(ty.transform(text)),
        }
    }
}

/// Built-in catalog plus caller-defined placeholder types.
///
/// # Examples
///
/// ```
/// use step_expr::{StepKeyword, StepText, TypeRegistry, Value};
///
/// let mut registry = TypeRegistry::new();
/// registry
///     .register("color", "red|blue|yellow", |s: &str| s.to_uppercase())
///     .expect("color is a fresh name");
/// let step = StepText::new(StepKeyword::Given, "My favorite color is red");
/// let values = registry
///     .match_step(step, "My favorite color is {color}")
///     .expect("step matches");
/// assert_eq!(values, vec![Value::from("RED")]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TypeRegistry {
    custom: Vec<CustomType>,
    literal_escaping: Option<bool>,
}

impl TypeRegistry {
    /// An empty registry exposing only the built-in catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pin whether literal template text is regex-escaped, instead of
    /// consulting [`config::expression_options`].
    #[must_use]
    pub fn with_literal_escaping(mut self, escape: bool) -> Self {
        self.literal_escaping = Some(escape);
        self
    }

    /// The immutable built-in catalog.
    #[must_use]
    pub const fn list_builtin() -> &'static [BuiltinType] {
        &BuiltinType::ALL
    }

    /// Custom types in registration order.
    #[must_use]
    pub fn custom_types(&self) -> &[CustomType] {
        &self.custom
    }

    /// Register a custom placeholder type, usable as `{name}` immediately.
    ///
    /// # Errors
    /// - [`RegistrationError::BuiltinNameCollision`] if `name` is a built-in.
    /// - [`RegistrationError::CustomNameCollision`] if `name` is registered.
    /// - [`RegistrationError::InvalidName`] if `name` is not an identifier.
    /// - [`RegistrationError::InvalidPattern`] if `pattern` does not compile.
    pub fn register<F, T>(
        &mut self,
        name: impl Into<String>,
        pattern: impl Into<String>,
        transform: F,
    ) -> Result<(), RegistrationError>
    where
        F: Fn(&str) -> T + Send + Sync + 'static,
        T: Into<Value>,
    {
        let name = name.into();
        let pattern = pattern.into();
        if BuiltinType::from_name(&name).is_some() {
            return Err(RegistrationError::BuiltinNameCollision(name));
        }
        if self.custom.iter().any(|ty| ty.name == name) {
            return Err(RegistrationError::CustomNameCollision(name));
        }
        if validate_parameter_name(&name).is_err() {
            return Err(RegistrationError::InvalidName(name));
        }
        if let Err(source) = Regex::new(&pattern) {
            return Err(RegistrationError::InvalidPattern { name, source });
        }
        log::debug!("registered parameter type `{name}` matching `{pattern}`");
        self.custom.push(CustomType {
            name,
            pattern,
            transform: Arc::new(move |text: &str| -> Value { transform(text).into() }),
        });
        Ok(())
    }

    /// Remove every custom type.
    pub fn reset(&mut self) {
        if !self.custom.is_empty() {
            log::debug!("cleared {} custom parameter type(s)", self.custom.len());
        }
        self.custom.clear();
    }

    /// Look up a built-in or custom type by name.
    #[must_use]
    pub fn resolve(&self, name: &str) -> Option<ParameterType<'_>> {
        BuiltinType::from_name(name)
            .map(ParameterType::Builtin)
            .or_else(|| {
                self.custom
                    .iter()
                    .find(|ty| ty.name == name)
                    .map(ParameterType::Custom)
            })
    }

    /// Compile `template` against the combined catalog.
    ///
    /// # Errors
    /// Returns [`PatternError`] when the composite pattern does not compile.
    pub fn compile(&self, template: &str) -> Result<CompiledExpression, PatternError> {
        let compiled = compile_expression(template, &self.syntaxes(), self.options())?;
        log::debug!(
            "compiled step expression `{template}` to `{}`",
            compiled.regex().as_str()
        );
        Ok(compiled)
    }

    /// Built-ins first, then custom types in registration order.
    pub(crate) fn syntaxes(&self) -> Vec<ParameterSyntax<'_>> {
        BuiltinType::ALL
            .into_iter()
            .map(|ty| ParameterSyntax::new(ty.name(), ty.pattern()))
            .chain(
                self.custom
                    .iter()
                    .map(|ty| ParameterSyntax::new(&ty.name, &ty.pattern)),
            )
            .collect()
    }

    fn options(&self) -> ExpressionOptions {
        self.literal_escaping
            .map_or_else(config::expression_options, |escape_literals| {
                ExpressionOptions { escape_literals }
            })
    }
}

#[cfg(test)]
mod tests;
