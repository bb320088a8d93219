//! How literal template text reaches the compiled expression.
//!
//! Text between placeholders is embedded into the composite regex verbatim
//! unless escaping is enabled, so `I pay $5 (cash) {number}` only matches
//! itself once `$`, `(` and `)` are escaped. Registries that do not pin the
//! behaviour with [`TypeRegistry::with_literal_escaping`] read it here on
//! every compilation, in order:
//!
//! 1. an in-process override from [`set_escape_literals`];
//! 2. the [`ESCAPE_LITERALS_ENV`] environment variable;
//! 3. off.
//!
//! [`TypeRegistry::with_literal_escaping`]: crate::TypeRegistry::with_literal_escaping

use std::sync::atomic::{AtomicU8, Ordering};

use step_expr_patterns::ExpressionOptions;

const OVERRIDE_UNSET: u8 = 0;
const OVERRIDE_FALSE: u8 = 1;
const OVERRIDE_TRUE: u8 = 2;

/// Environment variable enabling literal escaping, e.g. `STEP_EXPR_ESCAPE_LITERALS=1`.
pub const ESCAPE_LITERALS_ENV: &str = "STEP_EXPR_ESCAPE_LITERALS";

static ESCAPE_LITERALS_OVERRIDE: AtomicU8 = AtomicU8::new(OVERRIDE_UNSET);

fn parse_env_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn override_state() -> Option<bool> {
    match ESCAPE_LITERALS_OVERRIDE.load(Ordering::Relaxed) {
        OVERRIDE_FALSE => Some(false),
        OVERRIDE_TRUE => Some(true),
        _ => None,
    }
}

/// Unrecognised environment values are ignored rather than treated as off.
fn resolve_escaping(override_state: Option<bool>, env_value: Option<&str>) -> bool {
    override_state
        .or_else(|| {
            let parsed = env_value.and_then(parse_env_bool);
            if let (None, Some(raw)) = (parsed, env_value) {
                log::warn!("ignoring {ESCAPE_LITERALS_ENV}={raw:?}; expected a boolean word");
            }
            parsed
        })
        .unwrap_or(false)
}

/// Whether literal template text is currently regex-escaped.
#[must_use]
pub fn escape_literals() -> bool {
    let env_value = std::env::var(ESCAPE_LITERALS_ENV).ok();
    resolve_escaping(override_state(), env_value.as_deref())
}

/// Compiler options reflecting the current configuration.
#[must_use]
pub fn expression_options() -> ExpressionOptions {
    ExpressionOptions {
        escape_literals: escape_literals(),
    }
}

/// Force literal escaping on or off for the whole process, ahead of the
/// environment. Call [`clear_escape_literals_override`] to undo.
pub fn set_escape_literals(enabled: bool) {
    let value = if enabled {
        OVERRIDE_TRUE
    } else {
        OVERRIDE_FALSE
    };
    ESCAPE_LITERALS_OVERRIDE.store(value, Ordering::Relaxed);
}

/// Drop the in-process override so the environment decides again.
pub fn clear_escape_literals_override() {
    ESCAPE_LITERALS_OVERRIDE.store(OVERRIDE_UNSET, Ordering::Relaxed);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serial_test::serial;
    use step_expr_patterns::{BuiltinType, ParameterSyntax, compile_expression};

    const TEMPLATE: &str = "I pay $5 (cash) {number}";
    const STEP: &str = "I pay $5 (cash) 7";

    fn matches_with(options: ExpressionOptions) -> Option<bool> {
        let syntaxes: Vec<_> = BuiltinType::ALL
            .into_iter()
            .map(ParameterSyntax::from)
            .collect();
        compile_expression(TEMPLATE, &syntaxes, options)
            .ok()
            .map(|compiled| compiled.regex().is_match(STEP))
    }

    #[rstest]
    #[case(None, None, false)]
    #[case(None, Some("1"), true)]
    #[case(None, Some(" Yes "), true)]
    #[case(None, Some("off"), false)]
    #[case(None, Some("sometimes"), false)]
    #[case(Some(false), Some("true"), false)]
    #[case(Some(true), Some("0"), true)]
    #[case(Some(true), None, true)]
    fn override_wins_over_environment(
        #[case] override_state: Option<bool>,
        #[case] env_value: Option<&str>,
        #[case] expected: bool,
    ) {
        assert_eq!(resolve_escaping(override_state, env_value), expected);
    }

    #[rstest]
    #[case(Some("1"), Some(true))]
    #[case(Some("no"), Some(false))]
    #[case(None, Some(false))]
    fn environment_value_decides_whether_metacharacters_match_literally(
        #[case] env_value: Option<&str>,
        #[case] expected: Option<bool>,
    ) {
        let options = ExpressionOptions {
            escape_literals: resolve_escaping(None, env_value),
        };
        assert_eq!(matches_with(options), expected);
    }

    #[test]
    #[serial]
    fn override_feeds_expression_options() {
        set_escape_literals(true);
        assert!(expression_options().escape_literals);
        assert_eq!(matches_with(expression_options()), Some(true));

        set_escape_literals(false);
        assert!(!expression_options().escape_literals);
        assert_eq!(matches_with(expression_options()), Some(false));

        clear_escape_literals_override();
        let env_value = std::env::var(ESCAPE_LITERALS_ENV).ok();
        assert_eq!(
            escape_literals(),
            resolve_escaping(None, env_value.as_deref())
        );
    }
}
