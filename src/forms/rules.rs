use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::utils::clock::parse_date;

static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-zÀ-ÖØ-öø-ÿ ]+$").unwrap());
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());
static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9+\-() ]+$").unwrap());

/// Closed set of validation rules. Fields are bound to rules by the fixed
/// table in `rules_for`, so adding a rule kind is a compile-time concern
/// rather than a stringly-typed dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    Required,
    LengthRange { min: usize, max: usize },
    LettersAndSpaces,
    Email,
    Phone,
    FutureDate,
    PositiveNumber,
}

impl Rule {
    /// Check `value` against this rule. Empty values only ever fail
    /// `Required`; every other rule applies to non-empty input.
    pub fn check(&self, value: &str, today: NaiveDate) -> Result<(), String> {
        let value = value.trim();
        if value.is_empty() {
            return match self {
                Rule::Required => Err("This field is required".to_string()),
                _ => Ok(()),
            };
        }
        match self {
            Rule::Required => Ok(()),
            Rule::LengthRange { min, max } => {
                let n = value.chars().count();
                if n < *min || n > *max {
                    Err(format!("Must be between {min} and {max} characters"))
                } else {
                    Ok(())
                }
            }
            Rule::LettersAndSpaces => {
                if NAME_RE.is_match(value) {
                    Ok(())
                } else {
                    Err("Only letters and spaces are allowed".to_string())
                }
            }
            Rule::Email => {
                if EMAIL_RE.is_match(value) {
                    Ok(())
                } else {
                    Err("Please enter a valid email address".to_string())
                }
            }
            Rule::Phone => {
                if PHONE_RE.is_match(value) {
                    Ok(())
                } else {
                    Err("Please enter a valid contact number".to_string())
                }
            }
            Rule::FutureDate => match parse_date(value) {
                Some(d) if d >= today => Ok(()),
                Some(_) => Err("Please choose today or a future date".to_string()),
                None => Err("Please enter a valid date (YYYY-MM-DD)".to_string()),
            },
            Rule::PositiveNumber => match value.parse::<f64>() {
                Ok(n) if n > 0.0 => Ok(()),
                _ => Err("Please enter a positive number".to_string()),
            },
        }
    }
}

/// Fixed field-name → rules table. Fields not listed here are checked only
/// for required-ness by the form that declares them required.
pub fn rules_for(field: &str) -> &'static [Rule] {
    match field {
        "Name" => &[
            Rule::Required,
            Rule::LengthRange { min: 2, max: 50 },
            Rule::LettersAndSpaces,
        ],
        "Email" => &[Rule::Required, Rule::Email],
        "Contact Number" => &[Rule::Required, Rule::Phone],
        "Preferred Date" => &[Rule::Required, Rule::FutureDate],
        "Service Type" => &[Rule::Required],
        "Bust" | "Waist" | "Shoulder Width" | "Sleeve Length" => {
            &[Rule::Required, Rule::PositiveNumber]
        }
        _ => &[],
    }
}
