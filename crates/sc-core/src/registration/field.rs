use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Closed set of fields collected by the registration wizard.
///
/// Wire and UI names are camelCase (`firstName`, `dateOfBirth`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RegistrationField {
    Username,
    FirstName,
    LastName,
    Phone,
    Email,
    Password,
    ConfirmPassword,
    DateOfBirth,
}

impl RegistrationField {
    pub const ALL: [RegistrationField; 8] = [
        RegistrationField::Username,
        RegistrationField::FirstName,
        RegistrationField::LastName,
        RegistrationField::Phone,
        RegistrationField::Email,
        RegistrationField::Password,
        RegistrationField::ConfirmPassword,
        RegistrationField::DateOfBirth,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RegistrationField::Username => "username",
            RegistrationField::FirstName => "firstName",
            RegistrationField::LastName => "lastName",
            RegistrationField::Phone => "phone",
            RegistrationField::Email => "email",
            RegistrationField::Password => "password",
            RegistrationField::ConfirmPassword => "confirmPassword",
            RegistrationField::DateOfBirth => "dateOfBirth",
        }
    }

    /// Whether the field holds free text (everything except the date picker).
    pub fn is_text(&self) -> bool {
        !matches!(self, RegistrationField::DateOfBirth)
    }
}

impl fmt::Display for RegistrationField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown registration field: {0}")]
pub struct UnknownFieldError(pub String);

impl FromStr for RegistrationField {
    type Err = UnknownFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RegistrationField::ALL
            .iter()
            .copied()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| UnknownFieldError(s.to_string()))
    }
}
