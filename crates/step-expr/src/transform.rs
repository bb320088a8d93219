//! Value transforms for the built-in placeholder types.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};
use step_expr_patterns::BuiltinType;

use crate::error::TransformError;
use crate::value::Value;

const DATE_TIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S", "%m/%d/%Y %H:%M:%S"];
const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%m/%d/%Y"];

/// Convert text captured for a built-in type into its value.
pub(crate) fn apply(ty: BuiltinType, text: &str) -> Result<Value, TransformError> {
    let value = match ty {
        BuiltinType::String => Value::from(unquote(text)),
        BuiltinType::Number => text
            .parse::<i64>()
            .map(Value::Integer)
            .map_err(|_| TransformError::IntegerOutOfRange)?,
        BuiltinType::Float => text
            .parse::<f64>()
            .map(Value::Float)
            .map_err(|_| TransformError::InvalidFloat)?,
        BuiltinType::Boolean => Value::Boolean(text == "true"),
        BuiltinType::Word | BuiltinType::Char | BuiltinType::Email => Value::from(text),
        BuiltinType::List => Value::List(split_list(text)),
        BuiltinType::Date => Value::Date(parse_date(text)?),
    };
    Ok(value)
}

/// Strip exactly one layer of matching quotes.
pub(crate) fn unquote(text: &str) -> &str {
    ['"', '\'']
        .into_iter()
        .find_map(|quote| text.strip_prefix(quote)?.strip_suffix(quote))
        .unwrap_or(text)
}

fn split_list(text: &str) -> Vec<String> {
    text.split(',').map(|item| item.trim().to_string()).collect()
}

/// Dash-separated and `Z`-suffixed dates are UTC; slash-separated dates are
/// local wall-clock time.
fn parse_date(text: &str) -> Result<DateTime<Utc>, TransformError> {
    if let Some(stripped) = text.strip_suffix('Z') {
        return Ok(Utc.from_utc_datetime(&parse_naive(stripped)?));
    }
    let naive = parse_naive(text)?;
    if text.contains('-') {
        Ok(Utc.from_utc_datetime(&naive))
    } else {
        Local
            .from_local_datetime(&naive)
            .earliest()
            .map(|local| local.with_timezone(&Utc))
            .ok_or(TransformError::NonexistentLocalTime)
    }
}

fn parse_naive(text: &str) -> Result<NaiveDateTime, TransformError> {
    DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|format| NaiveDate::parse_from_str(text, format).ok())
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
        .ok_or(TransformError::InvalidDate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn transform(ty: BuiltinType, text: &str) -> Value {
        apply(ty, text).unwrap_or_else(|err| panic!("{ty} should accept {text:?}: {err}"))
    }

    #[expect(clippy::expect_used, reason = "fixture timestamps are valid")]
    fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, s)
            .single()
            .expect("valid UTC timestamp")
    }

    #[expect(clippy::expect_used, reason = "fixture timestamps are valid")]
    fn local(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
        Local
            .with_ymd_and_hms(y, mo, d, h, mi, s)
            .earliest()
            .expect("valid local timestamp")
            .with_timezone(&Utc)
    }

    #[rstest]
    #[case("'Vue'", "Vue")]
    #[case("\"web\"", "web")]
    #[case("\"'nested'\"", "'nested'")]
    #[case("''", "")]
    #[case("bare", "bare")]
    #[case("\"", "\"")]
    fn strips_one_layer_of_quotes(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(unquote(input), expected);
    }

    #[test]
    fn parses_numbers() {
        assert_eq!(transform(BuiltinType::Number, "12"), Value::Integer(12));
        assert_eq!(
            apply(BuiltinType::Number, "99999999999999999999"),
            Err(TransformError::IntegerOutOfRange)
        );
    }

    #[test]
    fn parses_floats() {
        assert_eq!(transform(BuiltinType::Float, "3.1"), Value::Float(3.1));
        assert_eq!(transform(BuiltinType::Float, "-.5"), Value::Float(-0.5));
    }

    #[test]
    fn maps_booleans() {
        assert_eq!(transform(BuiltinType::Boolean, "true"), Value::Boolean(true));
        assert_eq!(transform(BuiltinType::Boolean, "false"), Value::Boolean(false));
    }

    #[test]
    fn splits_lists_and_trims_items() {
        assert_eq!(
            transform(BuiltinType::List, " apples,pears ,  plums"),
            Value::List(vec!["apples".into(), "pears".into(), "plums".into()])
        );
    }

    #[rstest]
    #[case(BuiltinType::Word, "kebab-case")]
    #[case(BuiltinType::Char, "A")]
    #[case(BuiltinType::Email, "jane.doe@example.com")]
    fn returns_text_verbatim(#[case] ty: BuiltinType, #[case] text: &str) {
        assert_eq!(transform(ty, text), Value::from(text));
    }

    #[test]
    fn dash_dates_are_utc() {
        assert_eq!(
            transform(BuiltinType::Date, "2024-03-14"),
            Value::Date(utc(2024, 3, 14, 0, 0, 0))
        );
        assert_eq!(
            transform(BuiltinType::Date, "2024-03-14T08:30:15"),
            Value::Date(utc(2024, 3, 14, 8, 30, 15))
        );
        assert_eq!(
            transform(BuiltinType::Date, "2024-03-14T08:30:15Z"),
            Value::Date(utc(2024, 3, 14, 8, 30, 15))
        );
    }

    #[test]
    fn slash_dates_are_local() {
        assert_eq!(
            transform(BuiltinType::Date, "03/14/2024"),
            Value::Date(local(2024, 3, 14, 0, 0, 0))
        );
        assert_eq!(
            transform(BuiltinType::Date, "03/14/2024 08:30:15"),
            Value::Date(local(2024, 3, 14, 8, 30, 15))
        );
    }

    #[test]
    fn rejects_impossible_dates() {
        assert_eq!(
            apply(BuiltinType::Date, "2024-02-30"),
            Err(TransformError::InvalidDate)
        );
        assert_eq!(
            apply(BuiltinType::Date, "13/01/2024"),
            Err(TransformError::InvalidDate)
        );
    }
}
