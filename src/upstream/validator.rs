//! Shape validation for upstream payloads
//!
//! Pure functions checking decoded JSON against the Hero and HeroProfile
//! shapes before it is trusted as a domain value. Validation is fail-closed.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::models::{Hero, HeroProfile};

static INT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-?\d+$").expect("int pattern is valid"));
static ALPHABET_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z ]+$").expect("alphabet pattern is valid"));
static URL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https?://[^\s/$.?#].[^\s]*$").expect("url pattern is valid")
});

/// Why a payload failed validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShapeError {
    #[error("expected {expected}, got {found}")]
    WrongType {
        expected: &'static str,
        found: &'static str,
    },

    #[error("missing field `{0}`")]
    MissingField(&'static str),

    #[error("field `{field}` does not match the expected pattern")]
    BadField { field: &'static str },

    #[error("element {index}: {source}")]
    Element {
        index: usize,
        #[source]
        source: Box<ShapeError>,
    },
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn as_object(value: &Value) -> Result<&Map<String, Value>, ShapeError> {
    value.as_object().ok_or(ShapeError::WrongType {
        expected: "object",
        found: type_name(value),
    })
}

fn string_field(
    obj: &Map<String, Value>,
    field: &'static str,
    pattern: &Regex,
) -> Result<String, ShapeError> {
    let value = obj.get(field).ok_or(ShapeError::MissingField(field))?;
    let s = value.as_str().ok_or(ShapeError::WrongType {
        expected: "string",
        found: type_name(value),
    })?;

    if !pattern.is_match(s) {
        return Err(ShapeError::BadField { field });
    }
    Ok(s.to_string())
}

/// Integral JSON numbers only; `7.0` is accepted, `7.5` and `"7"` are not.
fn integer_field(obj: &Map<String, Value>, field: &'static str) -> Result<i64, ShapeError> {
    let value = obj.get(field).ok_or(ShapeError::MissingField(field))?;
    let Value::Number(number) = value else {
        return Err(ShapeError::WrongType {
            expected: "number",
            found: type_name(value),
        });
    };

    if let Some(n) = number.as_i64() {
        return Ok(n);
    }
    match number.as_f64() {
        Some(f) if f.fract() == 0.0 && f.abs() < i64::MAX as f64 => Ok(f as i64),
        _ => Err(ShapeError::BadField { field }),
    }
}

/// Validates a single hero payload.
///
/// A `profile` field on the payload is ignored; enrichment attaches it later.
pub fn validate_hero(value: &Value) -> Result<Hero, ShapeError> {
    let obj = as_object(value)?;

    Ok(Hero {
        id: string_field(obj, "id", &INT_REGEX)?,
        name: string_field(obj, "name", &ALPHABET_REGEX)?,
        image: string_field(obj, "image", &URL_REGEX)?,
        profile: None,
    })
}

/// Validates a hero list. One bad element rejects the whole list.
pub fn validate_heroes(value: &Value) -> Result<Vec<Hero>, ShapeError> {
    let items = value.as_array().ok_or(ShapeError::WrongType {
        expected: "array",
        found: type_name(value),
    })?;

    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            validate_hero(item).map_err(|e| ShapeError::Element {
                index,
                source: Box::new(e),
            })
        })
        .collect()
}

/// Validates a profile payload; all four attributes must be integers.
pub fn validate_profile(value: &Value) -> Result<HeroProfile, ShapeError> {
    let obj = as_object(value)?;

    Ok(HeroProfile {
        str: integer_field(obj, "str")?,
        int: integer_field(obj, "int")?,
        agi: integer_field(obj, "agi")?,
        luk: integer_field(obj, "luk")?,
    })
}
