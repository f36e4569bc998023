use serde::{Deserialize, Serialize};

/// Per-field validation verdicts shown next to the offending input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum FieldError {
    #[error("El nombre es obligatorio")]
    FirstNameRequired,
    #[error("El apellido es obligatorio")]
    LastNameRequired,
    #[error("El número de teléfono debe tener 8 dígitos")]
    InvalidPhone,
    #[error("El correo electrónico es inválido")]
    InvalidEmail,
    #[error("El nombre de usuario es obligatorio, no debe contener espacios, no debe ser solo números y no debe contener caracteres especiales")]
    InvalidUsername,
    #[error("La contraseña debe tener al menos {min_len} caracteres")]
    PasswordTooShort { min_len: usize },
    #[error("Las contraseñas no coinciden")]
    PasswordMismatch,
    #[error("Fecha de nacimiento no válida")]
    InvalidDateOfBirth,
    /// The backend already has an account with this email.
    #[error("El correo electrónico ya está en uso")]
    EmailInUse,
    /// The backend already has an account with this username.
    #[error("El nombre de usuario ya está en uso")]
    UsernameInUse,
}

impl FieldError {
    pub fn message(&self) -> String {
        self.to_string()
    }
}

/// Banner summarising whatever currently blocks the wizard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum GlobalMessage {
    #[error("Por favor, completa correctamente todos los campos obligatorios")]
    RequiredFields,
    #[error("El correo electrónico ya está registrado")]
    EmailInUse,
    #[error("El nombre de usuario ya está registrado")]
    UsernameInUse,
    #[error("Las contraseñas no coinciden")]
    PasswordMismatch,
    #[error("No se pudo verificar la disponibilidad de los datos. Inténtalo de nuevo más tarde.")]
    AvailabilityCheckFailed,
    #[error("No se pudo completar el registro. Inténtalo de nuevo más tarde.")]
    RegistrationFailed,
    /// Message sent by the backend, shown verbatim.
    #[error("{0}")]
    Backend(String),
}

impl GlobalMessage {
    pub fn message(&self) -> String {
        self.to_string()
    }
}
