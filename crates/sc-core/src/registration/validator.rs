//! Per-field validation rules.
//!
//! Every rule is a pure function of the form snapshot and the date bounds; no
//! rule performs I/O. Rules are looked up through [`FieldValidator::rule_for`]
//! so that any field can be validated generically.

use chrono::{Months, NaiveDate};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::{FieldError, RegistrationField, RegistrationForm};

pub const MIN_PASSWORD_LEN: usize = 8;

lazy_static! {
    /// Exactly eight ASCII digits.
    static ref PHONE_REGEX: Regex = Regex::new(r"^[0-9]{8}$").unwrap();

    /// Deliberately loose: something, `@`, something, `.`, something.
    static ref EMAIL_REGEX: Regex = Regex::new(r"\S+@\S+\.\S+").unwrap();
}

/// Open interval of accepted birth dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateBounds {
    pub min: NaiveDate,
    pub max: NaiveDate,
}

impl DateBounds {
    pub const DEFAULT_MIN_AGE_YEARS: u32 = 15;
    pub const DEFAULT_MAX_AGE_YEARS: u32 = 100;

    pub fn new(min: NaiveDate, max: NaiveDate) -> Self {
        Self { min, max }
    }

    /// Bounds for users aged between 15 and 100 years on `today`.
    pub fn for_today(today: NaiveDate) -> Self {
        Self::from_ages(
            today,
            Self::DEFAULT_MIN_AGE_YEARS,
            Self::DEFAULT_MAX_AGE_YEARS,
        )
    }

    /// `min` is `today - max_age_years`, `max` is `today - min_age_years`.
    ///
    /// Feb 29 clamps to Feb 28 in non-leap target years.
    pub fn from_ages(today: NaiveDate, min_age_years: u32, max_age_years: u32) -> Self {
        Self {
            min: years_before(today, max_age_years),
            max: years_before(today, min_age_years),
        }
    }

    /// Strict on both ends: a date equal to either bound is rejected.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date > self.min && date < self.max
    }
}

fn years_before(today: NaiveDate, years: u32) -> NaiveDate {
    today
        .checked_sub_months(Months::new(years.saturating_mul(12)))
        .unwrap_or(NaiveDate::MIN)
}

type FieldRule = fn(&RegistrationForm, &DateBounds) -> Option<FieldError>;

pub struct FieldValidator;

impl FieldValidator {
    /// Validates `field` against the current form snapshot.
    ///
    /// Returns `None` when the value is acceptable.
    pub fn validate(
        field: RegistrationField,
        form: &RegistrationForm,
        bounds: &DateBounds,
    ) -> Option<FieldError> {
        (Self::rule_for(field))(form, bounds)
    }

    /// Validates a picked birth date, `None` meaning nothing usable was picked.
    pub fn validate_date(date: Option<NaiveDate>, bounds: &DateBounds) -> Option<FieldError> {
        match date {
            Some(date) if bounds.contains(date) => None,
            _ => Some(FieldError::InvalidDateOfBirth),
        }
    }

    fn rule_for(field: RegistrationField) -> FieldRule {
        match field {
            RegistrationField::FirstName => |form, _| {
                form.first_name
                    .trim()
                    .is_empty()
                    .then_some(FieldError::FirstNameRequired)
            },
            RegistrationField::LastName => |form, _| {
                form.last_name
                    .trim()
                    .is_empty()
                    .then_some(FieldError::LastNameRequired)
            },
            RegistrationField::Phone => |form, _| check_phone(&form.phone),
            RegistrationField::Email => |form, _| {
                (!EMAIL_REGEX.is_match(&form.email)).then_some(FieldError::InvalidEmail)
            },
            RegistrationField::Username => |form, _| check_username(&form.username),
            RegistrationField::Password => |form, _| {
                (form.password.chars().count() < MIN_PASSWORD_LEN).then_some(
                    FieldError::PasswordTooShort {
                        min_len: MIN_PASSWORD_LEN,
                    },
                )
            },
            RegistrationField::ConfirmPassword => |form, _| {
                (form.confirm_password != form.password).then_some(FieldError::PasswordMismatch)
            },
            RegistrationField::DateOfBirth => {
                |form, bounds| FieldValidator::validate_date(form.date_of_birth, bounds)
            }
        }
    }
}

fn check_phone(phone: &str) -> Option<FieldError> {
    if phone.trim().is_empty() || !PHONE_REGEX.is_match(phone) {
        return Some(FieldError::InvalidPhone);
    }
    None
}

fn check_username(username: &str) -> Option<FieldError> {
    let blank = username.trim().is_empty();
    let has_whitespace = username.chars().any(char::is_whitespace);
    let only_digits = username.chars().all(|c| c.is_ascii_digit());
    let has_special = username.chars().any(|c| !c.is_ascii_alphanumeric());

    if blank || has_whitespace || only_digits || has_special {
        return Some(FieldError::InvalidUsername);
    }
    None
}
