//! Convert lexed tokens into composite regular-expression sources.

use std::collections::HashMap;

use super::group::{fragment, group_name};
use super::lexer::{Token, lex_expression};
use super::{ExpressionOptions, ExpressionSource, ParameterSyntax, PlaceholderSlot};

/// Build the composite regular-expression source for `template`.
///
/// Every keyword occurrence is replaced by its type's fragment wrapped in a
/// named group tagged with that type's running occurrence count. The result
/// is not anchored; callers run it in global-match mode.
///
/// # Examples
/// ```
/// use step_expr_patterns::{BuiltinType, ExpressionOptions, ParameterSyntax, build_expression_source};
///
/// let syntaxes: Vec<_> = BuiltinType::ALL.into_iter().map(ParameterSyntax::from).collect();
/// let source = build_expression_source(
///     "{number} and {number}",
///     &syntaxes,
///     ExpressionOptions::default(),
/// );
/// assert_eq!(source.source, "(?P<number_1>(?:[0-9]+)) and (?P<number_2>(?:[0-9]+))");
/// assert_eq!(source.placeholders.len(), 2);
/// ```
#[must_use]
pub fn build_expression_source(
    template: &str,
    syntaxes: &[ParameterSyntax<'_>],
    options: ExpressionOptions,
) -> ExpressionSource {
    let tokens = lex_expression(template, syntaxes);
    let mut source = String::with_capacity(template.len().saturating_mul(2));
    let mut placeholders = Vec::new();
    let mut counters: HashMap<&str, usize> = syntaxes.iter().map(|s| (s.name, 0)).collect();

    for token in tokens {
        match token {
            Token::Literal(text) if options.escape_literals => {
                source.push_str(&regex::escape(text));
            }
            Token::Literal(text) => source.push_str(text),
            Token::Placeholder { start, syntax } => {
                let Some(syntax) = syntaxes.get(syntax) else {
                    continue;
                };
                let counter = counters.entry(syntax.name).or_insert(0);
                *counter += 1;
                let occurrence = *counter;
                source.push_str(&fragment(syntax.name, occurrence, syntax.pattern));
                placeholders.push(PlaceholderSlot {
                    name: syntax.name.to_string(),
                    occurrence,
                    group: group_name(syntax.name, occurrence),
                    start,
                });
            }
        }
    }

    ExpressionSource {
        source,
        placeholders,
    }
}
