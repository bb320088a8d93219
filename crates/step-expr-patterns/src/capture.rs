//! Named-capture extraction for compiled step expressions.

use regex::Regex;

/// Text captured by one named group during one match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedCapture {
    /// Capture-group name as declared in the regex.
    pub group: String,
    /// Matched text.
    pub value: String,
}

/// Collect the named captures of every non-overlapping match of `re` in `text`.
///
/// Within a match, groups are visited in definition order, which for a
/// compiled template is left-to-right placeholder order. Groups that did not
/// participate in a match contribute nothing; unnamed groups are ignored.
///
/// # Examples
/// ```
/// # use regex::Regex;
/// # use step_expr_patterns::extract_named_captures;
/// let regex = Regex::new(r"(?P<number_1>\d+)-(?P<word_1>\w+)")
///     .expect("example ensures fallible call succeeds");
/// let captures = extract_named_captures(&regex, "42-answer");
/// let values: Vec<_> = captures.iter().map(|c| c.value.as_str()).collect();
/// assert_eq!(values, ["42", "answer"]);
/// ```
///
/// ```
/// # use regex::Regex;
/// # use step_expr_patterns::extract_named_captures;
/// let regex = Regex::new(r"(?P<number_1>\d+)")
///     .expect("example ensures fallible call succeeds");
/// assert!(extract_named_captures(&regex, "nope").is_empty());
/// ```
#[must_use]
pub fn extract_named_captures(re: &Regex, text: &str) -> Vec<NamedCapture> {
    let names: Vec<(usize, &str)> = re
        .capture_names()
        .enumerate()
        .filter_map(|(index, name)| name.map(|name| (index, name)))
        .collect();
    let mut captures = Vec::new();
    for caps in re.captures_iter(text) {
        for &(index, name) in &names {
            if let Some(m) = caps.get(index) {
                captures.push(NamedCapture {
                    group: name.to_string(),
                    value: m.as_str().to_string(),
                });
            }
        }
    }
    captures
}
