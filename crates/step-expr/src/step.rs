//! Step text consumed by the matcher.
//!
//! The document model lives elsewhere; the matcher only needs the literal
//! text of an executed step and a keyword for diagnostics.

use std::fmt;
use std::str::FromStr;

use gherkin::StepType;

use crate::localization;

/// Keyword introducing a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepKeyword {
    /// Setup preconditions.
    Given,
    /// Action under test.
    When,
    /// Expected outcome.
    Then,
    /// Continues the previous keyword.
    And,
    /// Contrasting continuation of the previous keyword.
    But,
}

impl StepKeyword {
    /// Canonical spelling of the keyword.
    ///
    /// # Examples
    ///
    /// ```
    /// use step_expr::StepKeyword;
    ///
    /// assert_eq!(StepKeyword::But.as_str(), "But");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Given => "Given",
            Self::When => "When",
            Self::Then => "Then",
            Self::And => "And",
            Self::But => "But",
        }
    }
}

impl fmt::Display for StepKeyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a keyword cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepKeywordParseError(pub String);

impl fmt::Display for StepKeywordParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = localization::message_with_args("step-keyword-invalid", |args| {
            args.set("keyword", self.0.clone());
        });
        f.write_str(&localization::strip_directional_isolates(&message))
    }
}

impl std::error::Error for StepKeywordParseError {}

impl FromStr for StepKeyword {
    type Err = StepKeywordParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        [Self::Given, Self::When, Self::Then, Self::And, Self::But]
            .into_iter()
            .find(|kw| trimmed.eq_ignore_ascii_case(kw.as_str()))
            .ok_or_else(|| StepKeywordParseError(trimmed.to_string()))
    }
}

/// Error raised when a Gherkin [`StepType`] has no keyword counterpart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnsupportedStepType(pub StepType);

impl fmt::Display for UnsupportedStepType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = localization::message_with_args("unsupported-step-type", |args| {
            args.set("step_type", format!("{:?}", self.0));
        });
        f.write_str(&localization::strip_directional_isolates(&message))
    }
}

impl std::error::Error for UnsupportedStepType {}

impl TryFrom<StepType> for StepKeyword {
    type Error = UnsupportedStepType;

    fn try_from(ty: StepType) -> Result<Self, Self::Error> {
        match ty {
            StepType::Given => Ok(Self::Given),
            StepType::When => Ok(Self::When),
            StepType::Then => Ok(Self::Then),
            #[expect(unreachable_patterns, reason = "guard future StepType variants")]
            other => Err(UnsupportedStepType(other)),
        }
    }
}

/// Literal text of one executed step.
///
/// # Examples
///
/// ```
/// use step_expr::{StepKeyword, StepText};
///
/// let step = StepText::new(StepKeyword::Given, "I love 'Vue'");
/// assert_eq!(step.text(), "I love 'Vue'");
/// assert_eq!(step.diagnostic(), "Given I love 'Vue'");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepText<'a> {
    keyword: StepKeyword,
    text: &'a str,
}

impl<'a> StepText<'a> {
    /// Pair a keyword with the step's literal text.
    #[must_use]
    pub const fn new(keyword: StepKeyword, text: &'a str) -> Self {
        Self { keyword, text }
    }

    /// Keyword introducing the step.
    #[must_use]
    pub const fn keyword(self) -> StepKeyword {
        self.keyword
    }

    /// Literal step text matched against templates.
    #[must_use]
    pub const fn text(self) -> &'a str {
        self.text
    }

    /// Identifier used in error messages, e.g. `Given I love 'Vue'`.
    #[must_use]
    pub fn diagnostic(self) -> String {
        format!("{} {}", self.keyword, self.text)
    }
}

impl<'a> TryFrom<&'a gherkin::Step> for StepText<'a> {
    type Error = UnsupportedStepType;

    /// Prefer the literal keyword so `And`/`But` survive; fall back to the
    /// resolved step type for localized keywords.
    fn try_from(step: &'a gherkin::Step) -> Result<Self, Self::Error> {
        let keyword = match step.keyword.parse() {
            Ok(keyword) => keyword,
            Err(_) => StepKeyword::try_from(step.ty)?,
        };
        Ok(Self::new(keyword, step.value.as_str()))
    }
}
