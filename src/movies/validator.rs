//! Movie payload validation
//!
//! Two modes over the same per-field rules:
//! - full: every required field present, `rate` defaults when absent
//! - partial: nothing required, only supplied fields are checked
//!
//! Unknown fields (including a client-supplied `id`) are dropped.
//! Every failing field is reported, not only the first one.

use std::sync::OnceLock;

use regex::Regex;
use serde_json::{Map, Value};

use super::errors::{FieldError, ValidationErrors};
use super::types::{Genre, MoviePatch, NewMovie, DEFAULT_RATE};

/// Earliest accepted release year.
pub const MIN_YEAR: i64 = 1900;
/// Latest accepted release year.
pub const MAX_YEAR: i64 = 2024;
/// Lowest accepted rating.
pub const MIN_RATE: f64 = 0.0;
/// Highest accepted rating.
pub const MAX_RATE: f64 = 10.0;

static URL_PATTERN: OnceLock<Regex> = OnceLock::new();

fn url_pattern() -> &'static Regex {
    URL_PATTERN.get_or_init(|| {
        Regex::new(r"^https?://[^\s/$.?#][^\s]*$").expect("poster URL pattern is valid")
    })
}

/// Validates a create payload.
///
/// # Errors
///
/// Returns every field that is missing or violates its rule. A non-object
/// payload yields a single `$root` error.
pub fn validate_full(payload: &Value) -> Result<NewMovie, ValidationErrors> {
    let obj = as_object(payload)?;
    let mut reader = FieldReader::new(obj, true);

    let title = reader.read("title", check_non_empty_string);
    let year = reader.read("year", check_year);
    let director = reader.read("director", check_non_empty_string);
    let duration = reader.read("duration", check_duration);
    let rate = reader.read_optional("rate", check_rate);
    let poster = reader.read("poster", check_poster);
    let genre = reader.read("genre", check_genres);

    match (title, year, director, duration, poster, genre) {
        (Some(title), Some(year), Some(director), Some(duration), Some(poster), Some(genre)) => {
            reader.errors.into_result(NewMovie {
                title,
                year,
                director,
                duration,
                rate: rate.unwrap_or(DEFAULT_RATE),
                poster,
                genre,
            })
        }
        _ => Err(reader.errors),
    }
}

/// Validates an update payload. `{}` is valid and yields an empty patch.
///
/// # Errors
///
/// Returns every supplied field that violates its rule.
pub fn validate_partial(payload: &Value) -> Result<MoviePatch, ValidationErrors> {
    let obj = as_object(payload)?;
    let mut reader = FieldReader::new(obj, false);

    let patch = MoviePatch {
        title: reader.read("title", check_non_empty_string),
        year: reader.read("year", check_year),
        director: reader.read("director", check_non_empty_string),
        duration: reader.read("duration", check_duration),
        rate: reader.read("rate", check_rate),
        poster: reader.read("poster", check_poster),
        genre: reader.read("genre", check_genres),
    };

    reader.errors.into_result(patch)
}

/// Walks the declared fields of one payload, collecting failures.
struct FieldReader<'a> {
    obj: &'a Map<String, Value>,
    required: bool,
    errors: ValidationErrors,
}

impl<'a> FieldReader<'a> {
    fn new(obj: &'a Map<String, Value>, required: bool) -> Self {
        Self {
            obj,
            required,
            errors: ValidationErrors::new(),
        }
    }

    /// Reads a field that is required in full mode.
    fn read<T, E, F>(&mut self, name: &str, rule: F) -> Option<T>
    where
        E: Into<ValidationErrors>,
        F: Fn(&str, &Value) -> Result<T, E>,
    {
        match self.obj.get(name) {
            Some(value) => self.apply(name, value, rule),
            None => {
                if self.required {
                    self.errors.push(FieldError::missing_field(name));
                }
                None
            }
        }
    }

    /// Reads a field that is never required.
    fn read_optional<T, E, F>(&mut self, name: &str, rule: F) -> Option<T>
    where
        E: Into<ValidationErrors>,
        F: Fn(&str, &Value) -> Result<T, E>,
    {
        let value = self.obj.get(name)?;
        self.apply(name, value, rule)
    }

    fn apply<T, E, F>(&mut self, name: &str, value: &Value, rule: F) -> Option<T>
    where
        E: Into<ValidationErrors>,
        F: Fn(&str, &Value) -> Result<T, E>,
    {
        match rule(name, value) {
            Ok(v) => Some(v),
            Err(e) => {
                self.errors.extend(e.into());
                None
            }
        }
    }
}

fn as_object(payload: &Value) -> Result<&Map<String, Value>, ValidationErrors> {
    payload.as_object().ok_or_else(|| {
        ValidationErrors::single(FieldError::type_mismatch(
            "$root",
            "an object",
            json_type_name(payload),
        ))
    })
}

fn check_non_empty_string(field: &str, value: &Value) -> Result<String, FieldError> {
    let s = value
        .as_str()
        .ok_or_else(|| FieldError::type_mismatch(field, "a string", json_type_name(value)))?;

    if s.trim().is_empty() {
        return Err(FieldError::new(
            field,
            format!("Movie {} must not be empty", field),
        ));
    }
    Ok(s.to_string())
}

/// Whole-number JSON value, `2010.0` included.
///
/// Integers beyond `i64` come back as their nearest `f64` so the caller's
/// range check reports them.
fn check_integer(field: &str, value: &Value) -> Result<f64, FieldError> {
    value
        .as_f64()
        .filter(|n| n.fract() == 0.0)
        .ok_or_else(|| FieldError::type_mismatch(field, "an integer", json_type_name(value)))
}

fn check_year(field: &str, value: &Value) -> Result<i32, FieldError> {
    let year = check_integer(field, value)?;

    if year < MIN_YEAR as f64 || year > MAX_YEAR as f64 {
        return Err(FieldError::new(
            field,
            format!(
                "Movie year must be between {} and {}, got {}",
                MIN_YEAR, MAX_YEAR, year
            ),
        ));
    }
    // Range check above keeps this in bounds.
    Ok(year as i32)
}

fn check_duration(field: &str, value: &Value) -> Result<u32, FieldError> {
    let minutes = check_integer(field, value)?;

    if minutes <= 0.0 {
        return Err(FieldError::new(
            field,
            format!("Movie duration must be a positive number of minutes, got {}", minutes),
        ));
    }
    if minutes > u32::MAX as f64 {
        return Err(FieldError::new(
            field,
            format!("Movie duration of {} minutes is out of range", minutes),
        ));
    }
    Ok(minutes as u32)
}

fn check_rate(field: &str, value: &Value) -> Result<f64, FieldError> {
    let rate = value
        .as_f64()
        .ok_or_else(|| FieldError::type_mismatch(field, "a number", json_type_name(value)))?;

    if !(MIN_RATE..=MAX_RATE).contains(&rate) {
        return Err(FieldError::new(
            field,
            format!(
                "Movie rate must be between {} and {}, got {}",
                MIN_RATE, MAX_RATE, rate
            ),
        ));
    }
    Ok(rate)
}

fn check_poster(field: &str, value: &Value) -> Result<String, FieldError> {
    let url = value
        .as_str()
        .ok_or_else(|| FieldError::type_mismatch(field, "a string", json_type_name(value)))?;

    if !url_pattern().is_match(url) {
        return Err(FieldError::new(
            field,
            "Poster must be a valid URL",
        ));
    }
    Ok(url.to_string())
}

fn check_genres(field: &str, value: &Value) -> Result<Vec<Genre>, ValidationErrors> {
    let items = value
        .as_array()
        .ok_or_else(|| FieldError::type_mismatch(field, "an array", json_type_name(value)))?;

    if items.is_empty() {
        return Err(FieldError::new(field, "Movie genre must list at least one genre").into());
    }

    let mut errors = ValidationErrors::new();
    let mut genres = Vec::with_capacity(items.len());

    for (i, item) in items.iter().enumerate() {
        let path = format!("{}[{}]", field, i);
        match item.as_str() {
            Some(name) => match Genre::from_name(name) {
                Some(genre) => genres.push(genre),
                None => errors.push(FieldError::new(
                    path,
                    format!(
                        "Movie genre must be one of {}, got '{}'",
                        allowed_genres(),
                        name
                    ),
                )),
            },
            None => errors.push(FieldError::type_mismatch(path, "a string", json_type_name(item))),
        }
    }

    errors.into_result(genres)
}

fn allowed_genres() -> String {
    Genre::ALL
        .iter()
        .map(Genre::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Returns the JSON type name for error messages.
fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(n) => {
            if n.is_i64() || n.is_u64() {
                "int"
            } else {
                "float"
            }
        }
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
