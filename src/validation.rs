// ============================================================================
// VALIDACIÓN DE FORMULARIOS (cliente)
// ============================================================================
// Si algo falla acá no se hace ninguna llamada de red
// ============================================================================

use thiserror::Error;

use crate::models::{LoginRequest, RegisterRequest};
use crate::utils::MIN_PASSWORD_LENGTH;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Completa el campo {0}")]
    MissingField(&'static str),
    #[error("El email debe ser válido")]
    InvalidEmail,
    #[error("Las contraseñas no coinciden")]
    PasswordMismatch,
    #[error("La contraseña debe tener al menos {} caracteres", MIN_PASSWORD_LENGTH)]
    PasswordTooShort,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<LoginRequest, ValidationError> {
        let email = self.email.trim();
        if email.is_empty() {
            return Err(ValidationError::MissingField("email"));
        }
        if self.password.is_empty() {
            return Err(ValidationError::MissingField("contraseña"));
        }
        Ok(LoginRequest {
            email: email.to_string(),
            password: self.password.clone(),
        })
    }
}

/// Datos del formulario de registro; nunca se persisten
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegistrationForm {
    pub nombre: String,
    pub apellido: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub telefono: String,
}

impl RegistrationForm {
    pub fn validate(&self) -> Result<RegisterRequest, ValidationError> {
        let required = [
            ("nombre", &self.nombre),
            ("apellido", &self.apellido),
            ("email", &self.email),
            ("teléfono", &self.telefono),
        ];
        if let Some((name, _)) = required.iter().find(|(_, v)| v.trim().is_empty()) {
            return Err(ValidationError::MissingField(*name));
        }
        if !self.email.contains('@') {
            return Err(ValidationError::InvalidEmail);
        }
        if self.password != self.confirm_password {
            return Err(ValidationError::PasswordMismatch);
        }
        // Unidades UTF-16, igual que `String.length` en el navegador
        if self.password.encode_utf16().count() < MIN_PASSWORD_LENGTH {
            return Err(ValidationError::PasswordTooShort);
        }

        Ok(RegisterRequest {
            nombre: self.nombre.trim().to_string(),
            apellido: self.apellido.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password.clone(),
            telefono: self.telefono.trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> RegistrationForm {
        RegistrationForm {
            nombre: "Lucía".into(),
            apellido: "Pérez".into(),
            email: "lucia@correo.com".into(),
            password: "secreto1".into(),
            confirm_password: "secreto1".into(),
            telefono: "1122334455".into(),
        }
    }

    #[test]
    fn valid_form_becomes_a_register_request() {
        let request = filled_form().validate().unwrap();
        assert_eq!(request.nombre, "Lucía");
        assert_eq!(request.telefono, "1122334455");
    }

    #[test]
    fn mismatched_passwords_are_rejected() {
        let form = RegistrationForm { confirm_password: "otra-cosa".into(), ..filled_form() };
        assert_eq!(form.validate(), Err(ValidationError::PasswordMismatch));
    }

    #[test]
    fn short_passwords_are_rejected() {
        let form = RegistrationForm {
            password: "12345".into(),
            confirm_password: "12345".into(),
            ..filled_form()
        };
        assert_eq!(form.validate(), Err(ValidationError::PasswordTooShort));
    }

    #[test]
    fn six_characters_is_enough() {
        let form = RegistrationForm {
            password: "ñandú1".into(),
            confirm_password: "ñandú1".into(),
            ..filled_form()
        };
        assert!(form.validate().is_ok());
    }

    #[test]
    fn length_counts_utf16_units() {
        // Cada emoji ocupa dos unidades UTF-16
        let form = RegistrationForm {
            password: "😀😀😀".into(),
            confirm_password: "😀😀😀".into(),
            ..filled_form()
        };
        assert!(form.validate().is_ok());

        let form = RegistrationForm {
            password: "😀😀".into(),
            confirm_password: "😀😀".into(),
            ..filled_form()
        };
        assert_eq!(form.validate(), Err(ValidationError::PasswordTooShort));
    }

    #[test]
    fn blank_required_fields_are_reported_by_name() {
        let form = RegistrationForm { apellido: "   ".into(), ..filled_form() };
        assert_eq!(form.validate(), Err(ValidationError::MissingField("apellido")));
    }

    #[test]
    fn validation_messages_are_user_facing() {
        assert_eq!(ValidationError::PasswordMismatch.to_string(), "Las contraseñas no coinciden");
        assert_eq!(
            ValidationError::PasswordTooShort.to_string(),
            "La contraseña debe tener al menos 6 caracteres"
        );
    }

    #[test]
    fn login_requires_both_fields() {
        let form = LoginForm { email: "a@b.com".into(), password: String::new() };
        assert_eq!(form.validate(), Err(ValidationError::MissingField("contraseña")));

        let form = LoginForm { email: " a@b.com ".into(), password: "pw".into() };
        assert_eq!(form.validate().unwrap().email, "a@b.com");
    }
}
