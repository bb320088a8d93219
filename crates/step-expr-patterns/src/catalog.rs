//! Built-in placeholder catalog.
//!
//! Each entry pairs a keyword such as `{number}` with the regular-expression
//! fragment it expands to. Fragments only use non-capturing groups so the
//! compiler's per-occurrence named groups are the sole captures in a
//! composite expression.

use std::fmt;

/// Placeholder types that every expression understands.
///
/// The set is closed: custom types may extend the vocabulary at runtime but
/// can never shadow or rename one of these.
///
/// # Examples
/// ```
/// use step_expr_patterns::BuiltinType;
///
/// assert_eq!(BuiltinType::Number.keyword(), "{number}");
/// assert_eq!(BuiltinType::from_name("boolean"), Some(BuiltinType::Boolean));
/// assert_eq!(BuiltinType::from_name("color"), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuiltinType {
    /// Text wrapped in single or double quotes.
    String,
    /// One or more digits without a decimal point.
    Number,
    /// Digits with a decimal point and an optional sign.
    Float,
    /// The whole words `true` or `false`.
    Boolean,
    /// A run of non-whitespace characters.
    Word,
    /// Exactly one character.
    Char,
    /// A `local@domain.tld` shaped token.
    Email,
    /// Comma-separated items.
    List,
    /// Slash- or dash-separated calendar dates with an optional time.
    Date,
}

impl BuiltinType {
    /// Every built-in type in catalog order.
    pub const ALL: [Self; 9] = [
        Self::String,
        Self::Number,
        Self::Float,
        Self::Boolean,
        Self::Word,
        Self::Char,
        Self::Email,
        Self::List,
        Self::Date,
    ];

    /// Name used in keywords and capture-group prefixes.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Float => "float",
            Self::Boolean => "boolean",
            Self::Word => "word",
            Self::Char => "char",
            Self::Email => "email",
            Self::List => "list",
            Self::Date => "date",
        }
    }

    /// Literal tag denoting this type inside a template.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::String => "{string}",
            Self::Number => "{number}",
            Self::Float => "{float}",
            Self::Boolean => "{boolean}",
            Self::Word => "{word}",
            Self::Char => "{char}",
            Self::Email => "{email}",
            Self::List => "{list}",
            Self::Date => "{date}",
        }
    }

    /// Bare regular-expression fragment, without the capture group.
    ///
    /// Digit classes are ASCII-only: the transforms cannot parse other
    /// scripts' digits, so such text must fail to match.
    ///
    /// `list` is greedy so a trailing list runs to the end of the text while a
    /// list followed by literal template text backtracks to that text.
    #[must_use]
    pub const fn pattern(self) -> &'static str {
        match self {
            Self::String => r#""[^"]*"|'[^']*'"#,
            Self::Number => r"[0-9]+",
            Self::Float => r"[+-]?[0-9]*\.[0-9]+",
            Self::Boolean => r"\b(?:true|false)\b",
            Self::Word => r"\S+",
            Self::Char => r".",
            Self::Email => r"[A-Za-z0-9.]+@[A-Za-z0-9-]+(?:\.[A-Za-z0-9-]+)+",
            Self::List => r"[^,]+(?:,[^,]+)*",
            Self::Date => {
                r"[0-9]{4}-[0-9]{2}-[0-9]{2}(?:T[0-9]{2}:[0-9]{2}:[0-9]{2}Z?)?|[0-9]{2}/[0-9]{2}/[0-9]{4}(?: [0-9]{2}:[0-9]{2}:[0-9]{2})?"
            }
        }
    }

    /// Look up a built-in type by its name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|ty| ty.name() == name)
    }
}

impl fmt::Display for BuiltinType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
