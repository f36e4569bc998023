use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::RegistrationField;

/// Data collected across the wizard steps.
///
/// The field set is fixed: every [`RegistrationField`] maps to exactly one
/// member of this struct.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationForm {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    /// Absent until a date inside the accepted range is picked.
    pub date_of_birth: Option<NaiveDate>,
}

impl RegistrationForm {
    /// Returns the text value of `field`, or `None` for the date field.
    pub fn text(&self, field: RegistrationField) -> Option<&str> {
        let value = match field {
            RegistrationField::Username => &self.username,
            RegistrationField::FirstName => &self.first_name,
            RegistrationField::LastName => &self.last_name,
            RegistrationField::Phone => &self.phone,
            RegistrationField::Email => &self.email,
            RegistrationField::Password => &self.password,
            RegistrationField::ConfirmPassword => &self.confirm_password,
            RegistrationField::DateOfBirth => return None,
        };
        Some(value.as_str())
    }

    /// Stores a text value. Returns `false` (and changes nothing) for the date field.
    pub fn set_text(&mut self, field: RegistrationField, value: impl Into<String>) -> bool {
        let slot = match field {
            RegistrationField::Username => &mut self.username,
            RegistrationField::FirstName => &mut self.first_name,
            RegistrationField::LastName => &mut self.last_name,
            RegistrationField::Phone => &mut self.phone,
            RegistrationField::Email => &mut self.email,
            RegistrationField::Password => &mut self.password,
            RegistrationField::ConfirmPassword => &mut self.confirm_password,
            RegistrationField::DateOfBirth => return false,
        };
        *slot = value.into();
        true
    }

    pub fn passwords_match(&self) -> bool {
        self.password == self.confirm_password
    }
}

// Passwords never reach logs.
impl fmt::Debug for RegistrationForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistrationForm")
            .field("username", &self.username)
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("phone", &self.phone)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .field("confirm_password", &"[REDACTED]")
            .field("date_of_birth", &self.date_of_birth)
            .finish()
    }
}
