//! Capture-group naming for placeholder occurrences.
//!
//! A type may appear several times in one template while group names must be
//! unique within one regex, so every occurrence is tagged `{name}_{n}`. The
//! suffix is all digits, which keeps the mapping reversible even when the
//! type name itself contains underscores.

use crate::errors::PatternError;

/// Check that `name` can be embedded in a capture-group name.
///
/// # Errors
/// Returns [`PatternError::InvalidName`] unless `name` is a non-empty ASCII
/// identifier.
///
/// # Examples
/// ```
/// use step_expr_patterns::validate_parameter_name;
/// assert!(validate_parameter_name("color").is_ok());
/// assert!(validate_parameter_name("snake_case2").is_ok());
/// assert!(validate_parameter_name("2fast").is_err());
/// ```
pub fn validate_parameter_name(name: &str) -> Result<(), PatternError> {
    let mut chars = name.chars();
    let valid_start = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_');
    if valid_start && chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        Ok(())
    } else {
        Err(PatternError::InvalidName(name.to_string()))
    }
}

/// Capture-group name for the `occurrence`-th use of `name` (1-based).
///
/// # Examples
/// ```
/// use step_expr_patterns::group_name;
/// assert_eq!(group_name("number", 2), "number_2");
/// ```
#[must_use]
pub fn group_name(name: &str, occurrence: usize) -> String {
    format!("{name}_{occurrence}")
}

/// Recover the type name and occurrence from a capture-group name.
///
/// Returns `None` for groups the compiler did not generate.
///
/// # Examples
/// ```
/// use step_expr_patterns::split_group_name;
/// assert_eq!(split_group_name("my_type_3"), Some(("my_type", 3)));
/// assert_eq!(split_group_name("shade"), None);
/// ```
#[must_use]
pub fn split_group_name(group: &str) -> Option<(&str, usize)> {
    let (name, suffix) = group.rsplit_once('_')?;
    if name.is_empty() || suffix.is_empty() || !suffix.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let occurrence = suffix.parse().ok()?;
    Some((name, occurrence))
}

/// Wrap `pattern` in the named group for one placeholder occurrence.
///
/// The inner pattern sits in its own non-capturing group so alternations
/// stay scoped to the placeholder.
///
/// # Examples
/// ```
/// use step_expr_patterns::fragment;
/// assert_eq!(fragment("color", 1, "red|blue"), "(?P<color_1>(?:red|blue))");
/// ```
#[must_use]
pub fn fragment(name: &str, occurrence: usize, pattern: &str) -> String {
    format!("(?P<{}>(?:{pattern}))", group_name(name, occurrence))
}
