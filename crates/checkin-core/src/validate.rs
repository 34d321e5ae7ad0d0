//! Submission payload validation.
//!
//! The submit endpoint accepts arbitrary JSON. Text fields are trimmed and
//! truncated; ratings are coerced loosely (numeric strings, booleans and
//! `null` all count as numbers) and then range-checked. Anything that does
//! not coerce is reported as a range violation.

use serde_json::{Map, Value};

use crate::error::ValidationError;
use crate::model::{Metric, SubmissionInput};

/// Maximum name length, in characters, after trimming.
pub const MAX_NAME_CHARS: usize = 50;
/// Maximum note length, in characters, after trimming.
pub const MAX_NOTE_CHARS: usize = 500;
/// Inclusive bounds for every rating.
pub const RATING_RANGE: std::ops::RangeInclusive<u8> = 1..=10;

/// Validate and normalize a raw submission payload.
///
/// Rules are checked in order and the first failure is returned: the name
/// must be non-empty, then motivation, energy and happiness must each be an
/// integer in `1..=10`. A payload that is not a JSON object is treated as an
/// empty object.
pub fn validate_submission(payload: &Value) -> Result<SubmissionInput, ValidationError> {
    let empty = Map::new();
    let fields = payload.as_object().unwrap_or(&empty);

    let name = clean_text(fields.get("name"), MAX_NAME_CHARS);
    let note = clean_text(fields.get("note"), MAX_NOTE_CHARS);

    if name.is_empty() {
        return Err(ValidationError::NameRequired);
    }

    let mut ratings = [0u8; 3];
    for (slot, metric) in ratings.iter_mut().zip(Metric::ALL) {
        *slot = coerce_rating(fields.get(metric.as_str()))
            .ok_or(ValidationError::RatingOutOfRange { metric })?;
    }
    let [motivation, energy, happiness] = ratings;

    Ok(SubmissionInput {
        name,
        motivation,
        energy,
        happiness,
        note,
    })
}

/// Trim a string field and cap it at `max_chars`. Non-strings become empty.
fn clean_text(value: Option<&Value>, max_chars: usize) -> String {
    match value {
        Some(Value::String(s)) => s.trim().chars().take(max_chars).collect(),
        _ => String::new(),
    }
}

fn coerce_rating(value: Option<&Value>) -> Option<u8> {
    let n = coerce_number(value)?;
    if n.fract() != 0.0 {
        return None;
    }
    let min = f64::from(*RATING_RANGE.start());
    let max = f64::from(*RATING_RANGE.end());
    (min..=max).contains(&n).then_some(n as u8)
}

/// Loose numeric coercion. `None` means "not a number".
fn coerce_number(value: Option<&Value>) -> Option<f64> {
    match value? {
        Value::Null => Some(0.0),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::Number(n) => n.as_f64(),
        Value::String(s) => {
            let s = s.trim();
            if s.is_empty() {
                Some(0.0)
            } else {
                s.parse::<f64>().ok().filter(|n| n.is_finite())
            }
        }
        Value::Array(_) | Value::Object(_) => None,
    }
}
