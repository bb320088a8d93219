//! Process-wide default registry.
//!
//! Step-binding layers that cannot thread a [`TypeRegistry`] through their
//! call sites share this one. Custom types never expire: call
//! [`reset_parameter_types`] between independent test files.

use std::sync::{LazyLock, PoisonError, RwLock};

use crate::error::{RegistrationError, StepExpressionError};
use crate::step::StepText;
use crate::value::Value;

use super::TypeRegistry;

static REGISTRY: LazyLock<RwLock<TypeRegistry>> =
    LazyLock::new(|| RwLock::new(TypeRegistry::new()));

/// Run `callback` with shared access to the process-wide registry.
///
/// The read lock is held for the duration of `callback`, which therefore
/// must not call [`define_parameter_type`] or [`reset_parameter_types`].
pub fn with_registry<R>(callback: impl FnOnce(&TypeRegistry) -> R) -> R {
    let guard = REGISTRY.read().unwrap_or_else(PoisonError::into_inner);
    callback(&guard)
}

fn with_registry_mut<R>(callback: impl FnOnce(&mut TypeRegistry) -> R) -> R {
    let mut guard = REGISTRY.write().unwrap_or_else(PoisonError::into_inner);
    callback(&mut guard)
}

/// Register a custom type in the process-wide registry.
///
/// # Errors
/// See [`TypeRegistry::register`].
///
/// # Examples
///
/// ```
/// use step_expr::{RegistrationError, define_parameter_type, reset_parameter_types};
///
/// reset_parameter_types();
/// define_parameter_type("planet", "mercury|venus|earth", str::to_string)
///     .expect("planet is a fresh name");
/// let again = define_parameter_type("planet", "mars", str::to_string);
/// assert!(matches!(again, Err(RegistrationError::CustomNameCollision(_))));
/// reset_parameter_types();
/// ```
pub fn define_parameter_type<F, T>(
    name: impl Into<String>,
    pattern: impl Into<String>,
    transform: F,
) -> Result<(), RegistrationError>
where
    F: Fn(&str) -> T + Send + Sync + 'static,
    T: Into<Value>,
{
    with_registry_mut(|registry| registry.register(name, pattern, transform))
}

/// Remove every custom type from the process-wide registry.
pub fn reset_parameter_types() {
    with_registry_mut(TypeRegistry::reset);
}

/// [`TypeRegistry::match_step`] against the process-wide registry.
///
/// Matching runs on a snapshot taken under the read lock, so custom
/// transforms may themselves register or reset types; such changes apply
/// from the next call.
///
/// # Errors
/// See [`TypeRegistry::match_step`].
pub fn match_step(step: StepText<'_>, template: &str) -> Result<Vec<Value>, StepExpressionError> {
    let snapshot = with_registry(TypeRegistry::clone);
    snapshot.match_step(step, template)
}

/// [`TypeRegistry::step_contains_regex`] against the process-wide registry.
#[must_use]
pub fn step_contains_regex(template: &str) -> bool {
    with_registry(|registry| registry.step_contains_regex(template))
}
