//! Step-expression lexing and compilation helpers.

mod compiler;
mod group;
mod lexer;

use regex::Regex;

use crate::catalog::BuiltinType;
use crate::errors::PatternError;

pub use compiler::build_expression_source;
pub use group::{fragment, group_name, split_group_name, validate_parameter_name};

/// A placeholder type as seen by the compiler: its name and bare pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParameterSyntax<'a> {
    /// Type name; the keyword is `{name}`.
    pub name: &'a str,
    /// Regular-expression fragment matched by the placeholder.
    pub pattern: &'a str,
}

impl<'a> ParameterSyntax<'a> {
    /// Describe a placeholder type.
    #[must_use]
    pub const fn new(name: &'a str, pattern: &'a str) -> Self {
        Self { name, pattern }
    }

    /// Whether `text` starts with this type's `{name}` keyword.
    #[must_use]
    pub fn keyword_at(&self, text: &str) -> bool {
        text.strip_prefix('{')
            .and_then(|rest| rest.strip_prefix(self.name))
            .is_some_and(|rest| rest.starts_with('}'))
    }

    pub(crate) const fn keyword_len(&self) -> usize {
        self.name.len() + 2
    }
}

impl From<BuiltinType> for ParameterSyntax<'static> {
    fn from(ty: BuiltinType) -> Self {
        Self::new(ty.name(), ty.pattern())
    }
}

/// Options controlling how templates are turned into regex sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExpressionOptions {
    /// Escape literal template text instead of embedding it verbatim.
    pub escape_literals: bool,
}

/// One placeholder occurrence inside a compiled template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderSlot {
    /// Owning type name.
    pub name: String,
    /// 1-based occurrence count of this type within the template.
    pub occurrence: usize,
    /// Capture-group name in the composite expression.
    pub group: String,
    /// Byte offset of the keyword in the template.
    pub start: usize,
}

/// Uncompiled composite regex source plus its placeholder slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpressionSource {
    /// Regular-expression source text.
    pub source: String,
    /// Placeholder occurrences in template order.
    pub placeholders: Vec<PlaceholderSlot>,
}

/// A template compiled into one composite regular expression.
#[derive(Debug, Clone)]
pub struct CompiledExpression {
    regex: Regex,
    placeholders: Vec<PlaceholderSlot>,
}

impl CompiledExpression {
    /// The composite regular expression.
    #[must_use]
    pub const fn regex(&self) -> &Regex {
        &self.regex
    }

    /// Placeholder occurrences in template order.
    #[must_use]
    pub fn placeholders(&self) -> &[PlaceholderSlot] {
        &self.placeholders
    }

    /// Whether the template declared at least one placeholder.
    #[must_use]
    pub fn has_placeholders(&self) -> bool {
        !self.placeholders.is_empty()
    }
}

/// Build and compile the composite regular expression for `template`.
///
/// # Errors
/// Returns [`PatternError::Regex`] when the generated source cannot be
/// compiled, typically because unescaped literal text contains regex syntax.
///
/// # Examples
/// ```
/// use step_expr_patterns::{BuiltinType, ExpressionOptions, ParameterSyntax, compile_expression};
///
/// let syntaxes: Vec<_> = BuiltinType::ALL.into_iter().map(ParameterSyntax::from).collect();
/// let compiled = compile_expression("I love Vue {float}", &syntaxes, ExpressionOptions::default())
///     .expect("expression compiles");
/// assert!(compiled.regex().is_match("I love Vue 3.1"));
/// assert_eq!(compiled.placeholders()[0].group, "float_1");
/// ```
pub fn compile_expression(
    template: &str,
    syntaxes: &[ParameterSyntax<'_>],
    options: ExpressionOptions,
) -> Result<CompiledExpression, PatternError> {
    let ExpressionSource {
        source,
        placeholders,
    } = build_expression_source(template, syntaxes, options);
    let regex = Regex::new(&source)?;
    Ok(CompiledExpression {
        regex,
        placeholders,
    })
}

/// Whether `template` contains at least one known keyword.
///
/// # Examples
/// ```
/// use step_expr_patterns::{BuiltinType, ParameterSyntax, contains_placeholder};
///
/// let syntaxes: Vec<_> = BuiltinType::ALL.into_iter().map(ParameterSyntax::from).collect();
/// assert!(contains_placeholder("I love {string}", &syntaxes));
/// assert!(!contains_placeholder("I love \"Vue\" 3", &syntaxes));
/// ```
#[must_use]
pub fn contains_placeholder(template: &str, syntaxes: &[ParameterSyntax<'_>]) -> bool {
    lexer::lex_expression(template, syntaxes)
        .iter()
        .any(|token| matches!(token, lexer::Token::Placeholder { .. }))
}
