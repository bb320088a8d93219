//! Expression lexer splitting templates into literal text and placeholders.

use super::ParameterSyntax;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Token<'t> {
    Literal(&'t str),
    Placeholder {
        /// Byte offset of the opening brace.
        start: usize,
        /// Index into the syntax table the template was lexed against.
        syntax: usize,
    },
}

/// Scan `template` once, left to right, for known keywords.
///
/// Only an exact `{name}` for a known type becomes a placeholder; every other
/// brace, including `{unknown}`, stays literal text.
pub(crate) fn lex_expression<'t>(
    template: &'t str,
    syntaxes: &[ParameterSyntax<'_>],
) -> Vec<Token<'t>> {
    let mut tokens = Vec::new();
    let mut literal_start = 0;
    let mut pos = 0;

    let flush_literal = |tokens: &mut Vec<Token<'t>>, from: usize, to: usize| {
        if let Some(text) = template.get(from..to).filter(|text| !text.is_empty()) {
            tokens.push(Token::Literal(text));
        }
    };

    while let Some(rest) = template.get(pos..) {
        let Some(ch) = rest.chars().next() else {
            break;
        };
        if ch == '{' {
            let found = syntaxes
                .iter()
                .enumerate()
                .find(|(_, syntax)| syntax.keyword_at(rest));
            if let Some((index, syntax)) = found {
                flush_literal(&mut tokens, literal_start, pos);
                tokens.push(Token::Placeholder {
                    start: pos,
                    syntax: index,
                });
                pos += syntax.keyword_len();
                literal_start = pos;
                continue;
            }
        }
        pos += ch.len_utf8();
    }

    flush_literal(&mut tokens, literal_start, template.len());
    tokens
}
