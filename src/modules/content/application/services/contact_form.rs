use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::shared::validation::ValidationErrors;

pub const NAME_REQUIRED: &str = "El nombre es obligatorio.";
pub const EMAIL_REQUIRED: &str = "El email es obligatorio.";
pub const EMAIL_INVALID: &str = "Por favor, introduce una dirección de email válida.";
pub const MESSAGE_REQUIRED: &str = "El mensaje no puede estar vacío.";
pub const THANK_YOU: &str = "¡Gracias por tu mensaje! Este es un formulario de demostración.";

/// Something, an `@`, something, a dot, something. Deliberately loose.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("Invalid regex"));

/// Contact section form on the home page.
///
/// Submitting validates every field; a valid submission is acknowledged and the
/// form is cleared. Nothing leaves the page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn new(name: &str, email: &str, message: &str) -> Self {
        Self {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        errors.require("name", &self.name, NAME_REQUIRED);

        let email = self.email.trim();
        if email.is_empty() {
            errors.add("email", EMAIL_REQUIRED);
        } else if !EMAIL_RE.is_match(email) {
            errors.add("email", EMAIL_INVALID);
        }

        errors.require("message", &self.message, MESSAGE_REQUIRED);

        errors.into_result(())
    }

    /// Validate, then reset the form. Returns the acknowledgement to display.
    pub fn submit(&mut self) -> Result<&'static str, ValidationErrors> {
        self.validate()?;

        info!("Contact form submitted");
        *self = Self::default();

        Ok(THANK_YOU)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_submission_resets_form() {
        let mut form = ContactForm::new("Ana", "ana@example.com", "Hola");

        let ack = form.submit().unwrap();

        assert_eq!(ack, THANK_YOU);
        assert_eq!(form, ContactForm::default());
    }

    #[test]
    fn test_all_fields_missing() {
        let mut form = ContactForm::new("", "  ", "\n");

        let errors = form.submit().unwrap_err();

        assert_eq!(errors.get("name"), Some(NAME_REQUIRED));
        assert_eq!(errors.get("email"), Some(EMAIL_REQUIRED));
        assert_eq!(errors.get("message"), Some(MESSAGE_REQUIRED));
        // Blocked submission keeps what the visitor typed.
        assert_eq!(form.message, "\n");
    }

    #[test]
    fn test_malformed_email_is_rejected() {
        for email in ["ana", "ana@example", "@.", "ana example@com"] {
            let form = ContactForm::new("Ana", email, "Hola");

            let errors = form.validate().unwrap_err();

            assert_eq!(errors.get("email"), Some(EMAIL_INVALID), "email: {email}");
            assert_eq!(errors.len(), 1);
        }
    }

    #[test]
    fn test_loose_email_shapes_are_accepted() {
        for email in ["a@b.c", "first.last@sub.domain.org"] {
            let form = ContactForm::new("Ana", email, "Hola");
            assert!(form.validate().is_ok(), "email: {email}");
        }
    }
}
