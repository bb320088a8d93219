//! Unit tests for registration, resolution and typed extraction.

use super::*;
use crate::error::StepExpressionError;
use crate::step::{StepKeyword, StepText};
use rstest::{fixture, rstest};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Color {
    Red,
    Blue,
    Yellow,
}

impl Color {
    fn parse(text: &str) -> Option<Self> {
        match text {
            "red" => Some(Self::Red),
            "blue" => Some(Self::Blue),
            "yellow" => Some(Self::Yellow),
            _ => None,
        }
    }
}

#[fixture]
fn registry() -> TypeRegistry {
    TypeRegistry::new().with_literal_escaping(false)
}

#[fixture]
fn colors(registry: TypeRegistry) -> TypeRegistry {
    let mut registry = registry;
    registry
        .register("color", "red|blue|yellow", |text: &str| {
            Value::custom(Color::parse(text))
        })
        .unwrap_or_else(|err| panic!("color should register: {err}"));
    registry
}

fn given(text: &str) -> StepText<'_> {
    StepText::new(StepKeyword::Given, text)
}

fn extract(registry: &TypeRegistry, text: &str, template: &str) -> Vec<Value> {
    registry
        .match_step(given(text), template)
        .unwrap_or_else(|err| panic!("{template:?} should match {text:?}: {err}"))
}

#[rstest]
fn lists_the_fixed_catalog() {
    let names: Vec<_> = TypeRegistry::list_builtin()
        .iter()
        .map(|ty| ty.name())
        .collect();
    assert_eq!(
        names,
        ["string", "number", "float", "boolean", "word", "char", "email", "list", "date"]
    );
}

#[rstest]
fn rejects_every_builtin_name(mut registry: TypeRegistry) {
    for ty in TypeRegistry::list_builtin() {
        let result = registry.register(ty.name(), "red|blue", str::to_string);
        assert!(
            matches!(result, Err(RegistrationError::BuiltinNameCollision(ref name)) if name == ty.name()),
            "{ty} should collide with the catalog"
        );
    }
    assert!(registry.custom_types().is_empty());
}

#[rstest]
fn rejects_duplicate_custom_names(mut colors: TypeRegistry) {
    let result = colors.register("color", "green", str::to_string);
    assert!(matches!(
        result,
        Err(RegistrationError::CustomNameCollision(ref name)) if name == "color"
    ));
    assert_eq!(colors.custom_types().len(), 1);
}

#[rstest]
fn rejects_names_unfit_for_keywords(mut registry: TypeRegistry) {
    let result = registry.register("light color", "red", str::to_string);
    assert!(matches!(result, Err(RegistrationError::InvalidName(_))));
}

#[rstest]
fn rejects_patterns_that_do_not_compile(mut registry: TypeRegistry) {
    let result = registry.register("shade", "(dark", str::to_string);
    let Err(RegistrationError::InvalidPattern { name, .. }) = result else {
        panic!("unbalanced pattern should be rejected");
    };
    assert_eq!(name, "shade");
}

#[rstest]
fn reset_forgets_custom_types(mut colors: TypeRegistry) {
    assert!(colors.step_contains_regex("{color}"));
    colors.reset();
    assert!(colors.custom_types().is_empty());
    assert!(!colors.step_contains_regex("{color}"));
    assert!(colors.register("color", "red", str::to_string).is_ok());
}

#[rstest]
fn resolves_builtin_and_custom_types(colors: TypeRegistry) {
    assert!(matches!(
        colors.resolve("number"),
        Some(ParameterType::Builtin(BuiltinType::Number))
    ));
    let Some(ParameterType::Custom(color)) = colors.resolve("color") else {
        panic!("color should resolve to the custom type");
    };
    assert_eq!(color.keyword(), "{color}");
    assert!(colors.resolve("shade").is_none());
}

#[rstest]
#[case("I love 'Vue'", "I love {string}", vec![Value::from("Vue")])]
#[case("I love 'Vue' for \"web\"", "I love {string} for {string}", vec![Value::from("Vue"), Value::from("web")])]
#[case("I love Vue 3", "I love Vue {number}", vec![Value::from(3_i64)])]
#[case("I love Vue 3.1", "I love Vue {float}", vec![Value::from(3.1)])]
#[case("I love Vue 3.1 or 3.2", "I love Vue {float} or {float}", vec![Value::from(3.1), Value::from(3.2)])]
#[case("I love \"Vue\" 3 and 12", "I love {string} {number} and {number}", vec![Value::from("Vue"), Value::from(3_i64), Value::from(12_i64)])]
#[case("ATCG", "{char}{char}{char}{char}", vec![Value::from("A"), Value::from("T"), Value::from("C"), Value::from("G")])]
#[case("This information is false", "This information is {boolean}", vec![Value::from(false)])]
#[case("Mail jane.doe@example.com now", "Mail {email} now", vec![Value::from("jane.doe@example.com")])]
#[case("Run cargo-test --all", "Run {word} --all", vec![Value::from("cargo-test")])]
fn extracts_values_in_template_order(
    registry: TypeRegistry,
    #[case] text: &str,
    #[case] template: &str,
    #[case] expected: Vec<Value>,
) {
    assert_eq!(extract(&registry, text, template), expected);
}

#[rstest]
fn extracts_trailing_and_embedded_lists(registry: TypeRegistry) {
    assert_eq!(
        extract(&registry, "I buy apples, pears ,plums", "I buy {list}"),
        vec![Value::List(vec![
            "apples".into(),
            "pears".into(),
            "plums".into()
        ])]
    );
    assert_eq!(
        extract(&registry, "I buy a, b and leave", "I buy {list} and leave"),
        vec![Value::List(vec!["a".into(), "b".into()])]
    );
}

#[rstest]
fn mixes_custom_and_builtin_types(colors: TypeRegistry) {
    let values = extract(
        &colors,
        "The english flag has 2 colors: red and blue",
        "The english flag has {number} colors: {color} and {color}",
    );
    assert_eq!(values.len(), 3);
    assert_eq!(values.first().and_then(Value::as_i64), Some(2));
    let colors: Vec<_> = values
        .iter()
        .skip(1)
        .map(|value| value.downcast_ref::<Option<Color>>().copied().flatten())
        .collect();
    assert_eq!(colors, [Some(Color::Red), Some(Color::Blue)]);
}

#[rstest]
fn collects_values_from_every_match(registry: TypeRegistry) {
    assert_eq!(
        extract(&registry, "1 apple, 2 pears and 3 plums", "{number}"),
        vec![Value::from(1_i64), Value::from(2_i64), Value::from(3_i64)]
    );
}

#[rstest]
fn literal_templates_never_fail(registry: TypeRegistry) {
    assert!(extract(&registry, "I love \"Vue\" 3", "I love \"Vue\" 3").is_empty());
    assert!(extract(&registry, "something else", "I love \"Vue\" 3").is_empty());
    assert!(extract(&registry, "anything", "unbalanced ( {unknown}").is_empty());
}

#[rstest]
#[case("I love \"Vue\" 3", "I love {number} 3")]
#[case("This information is truely", "This information is {boolean}")]
#[case("I have 3.5 apples", "I have {number} apples")]
#[case("My favorite color is green", "My favorite color is {color}")]
#[case("I have \u{663} apples", "I have {number} apples")]
#[case("I weigh \u{663}.\u{665} kg", "I weigh {float} kg")]
#[case("due \u{662}\u{660}\u{662}\u{664}-\u{660}\u{663}-\u{661}\u{664}", "due {date}")]
fn reports_mismatch_when_nothing_is_extracted(
    colors: TypeRegistry,
    #[case] text: &str,
    #[case] template: &str,
) {
    let Err(err) = colors.match_step(given(text), template) else {
        panic!("{template:?} should not match {text:?}");
    };
    let StepExpressionError::Mismatch { step, expression } = err else {
        panic!("expected a mismatch, got {err}");
    };
    assert_eq!(step, format!("Given {text}"));
    assert_eq!(expression, template);
}

#[rstest]
fn reports_uncompilable_expressions(registry: TypeRegistry) {
    let err = registry
        .match_step(given("a ( 1"), "a ( {number}")
        .err()
        .unwrap_or_else(|| panic!("unescaped parenthesis should not compile"));
    assert!(matches!(err, StepExpressionError::InvalidExpression { .. }));
}

#[rstest]
fn pinned_escaping_accepts_metacharacters() {
    let registry = TypeRegistry::new().with_literal_escaping(true);
    assert_eq!(
        extract(&registry, "a ( 1", "a ( {number}"),
        vec![Value::from(1_i64)]
    );
}

#[rstest]
fn reports_values_a_transform_cannot_represent(registry: TypeRegistry) {
    let err = registry
        .match_step(given("I have 99999999999999999999 cukes"), "I have {number} cukes")
        .err()
        .unwrap_or_else(|| panic!("overflowing integer should fail"));
    let StepExpressionError::Transform {
        placeholder, text, ..
    } = err
    else {
        panic!("expected a transform error, got {err}");
    };
    assert_eq!(placeholder, "number_1");
    assert_eq!(text, "99999999999999999999");
}

#[rstest]
fn unowned_named_groups_fall_back_to_string(mut registry: TypeRegistry) {
    registry
        .register("shade", r"(?P<tone>light|dark) grey", str::to_string)
        .unwrap_or_else(|err| panic!("shade should register: {err}"));
    assert_eq!(
        extract(&registry, "a dark grey coat", "a {shade} coat"),
        vec![Value::from("dark grey"), Value::from("dark")]
    );
}
