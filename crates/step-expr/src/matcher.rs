//! Typed extraction of placeholder values from step text.

use step_expr_patterns::{
    BuiltinType, NamedCapture, contains_placeholder, extract_named_captures, split_group_name,
};

use crate::error::StepExpressionError;
use crate::registry::{ParameterType, TypeRegistry};
use crate::step::StepText;
use crate::value::Value;

impl TypeRegistry {
    /// Whether `template` contains at least one known keyword.
    ///
    /// Binding layers use this to choose between literal comparison and
    /// typed extraction.
    ///
    /// # Examples
    ///
    /// ```
    /// use step_expr::TypeRegistry;
    ///
    /// let registry = TypeRegistry::new();
    /// assert!(registry.step_contains_regex("I love {string}"));
    /// assert!(!registry.step_contains_regex("I love {color}"));
    /// ```
    #[must_use]
    pub fn step_contains_regex(&self, template: &str) -> bool {
        contains_placeholder(template, &self.syntaxes())
    }

    /// Extract the placeholder values of `template` from `step`, in
    /// left-to-right template order.
    ///
    /// A template without known keywords yields an empty sequence whatever
    /// the step says. Otherwise at least one value must be extracted.
    ///
    /// # Errors
    /// - [`StepExpressionError::Mismatch`] when the template declares
    ///   placeholders but no value could be extracted.
    /// - [`StepExpressionError::InvalidExpression`] when the composite
    ///   pattern does not compile.
    /// - [`StepExpressionError::Transform`] when a built-in transform rejects
    ///   its captured text.
    ///
    /// # Examples
    ///
    /// ```
    /// use step_expr::{StepKeyword, StepText, TypeRegistry, Value};
    ///
    /// let registry = TypeRegistry::new();
    /// let step = StepText::new(StepKeyword::Given, "I love \"Vue\" 3 and 12");
    /// let values = registry
    ///     .match_step(step, "I love {string} {number} and {number}")
    ///     .expect("step matches");
    /// assert_eq!(values, vec![Value::from("Vue"), Value::from(3_i64), Value::from(12_i64)]);
    /// ```
    pub fn match_step(
        &self,
        step: StepText<'_>,
        template: &str,
    ) -> Result<Vec<Value>, StepExpressionError> {
        if !self.step_contains_regex(template) {
            log::trace!("expression `{template}` has no placeholders; nothing to extract");
            return Ok(Vec::new());
        }

        let compiled = self
            .compile(template)
            .map_err(|source| StepExpressionError::InvalidExpression {
                expression: template.to_string(),
                source,
            })?;

        let captures = extract_named_captures(compiled.regex(), step.text());
        let mut values = Vec::with_capacity(captures.len());
        for capture in &captures {
            values.push(self.convert(step, capture)?);
        }

        if values.is_empty() {
            return Err(StepExpressionError::Mismatch {
                step: step.diagnostic(),
                expression: template.to_string(),
            });
        }
        Ok(values)
    }

    /// Resolve the owning type from the group-name prefix and apply its
    /// transform. Groups with no owning type fall back to `string`.
    fn convert(
        &self,
        step: StepText<'_>,
        capture: &NamedCapture,
    ) -> Result<Value, StepExpressionError> {
        log::trace!("captured `{}` = {:?}", capture.group, capture.value);
        let owner = split_group_name(&capture.group).and_then(|(name, _)| self.resolve(name));
        let result = match owner {
            Some(ty) => ty.transform(&capture.value),
            None => {
                log::warn!(
                    "capture group `{}` has no owning parameter type; treating it as a string",
                    capture.group
                );
                ParameterType::Builtin(BuiltinType::String).transform(&capture.value)
            }
        };
        result.map_err(|reason| StepExpressionError::Transform {
            step: step.diagnostic(),
            placeholder: capture.group.clone(),
            text: capture.value.clone(),
            reason,
        })
    }
}
