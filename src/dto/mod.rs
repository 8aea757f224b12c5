//! Transfer shapes exchanged with API clients, and their conversions.
//!
//! Per entity: a create shape (no id, no status), a read shape (id plus
//! every patchable field) and an update shape where every field is
//! optional. Conversions are plain field copies; relations travel as ids.

pub mod medico;
pub mod paziente;
pub mod prenotazione;
pub mod segretario;

pub use medico::*;
pub use paziente::*;
pub use prenotazione::*;
pub use segretario::*;

use validator::ValidationError;

/// Digits with an optional leading `+`; spaces are allowed between groups.
pub(crate) fn validate_telefono(telefono: &str) -> Result<(), ValidationError> {
    let digits = telefono.chars().filter(|c| c.is_ascii_digit()).count();
    let body = telefono.strip_prefix('+').unwrap_or(telefono);
    let well_formed = body.chars().all(|c| c.is_ascii_digit() || c == ' ');
    if well_formed && (6..=20).contains(&telefono.len()) && digits >= 6 {
        Ok(())
    } else {
        Err(ValidationError::new("validation.telefono.format"))
    }
}

/// Sixteen ASCII alphanumerics, any case.
pub(crate) fn validate_codice_fiscale(codice_fiscale: &str) -> Result<(), ValidationError> {
    if codice_fiscale.len() == 16 && codice_fiscale.chars().all(|c| c.is_ascii_alphanumeric()) {
        Ok(())
    } else {
        Err(ValidationError::new("validation.codiceFiscale.format"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn telefono_accepts_common_formats() {
        assert!(validate_telefono("+39 06 1234567").is_ok());
        assert!(validate_telefono("3331234567").is_ok());
    }

    #[test]
    fn telefono_rejects_letters_and_short_numbers() {
        assert!(validate_telefono("12345").is_err());
        assert!(validate_telefono("333-123-4567").is_err());
        assert!(validate_telefono("chiamami").is_err());
        assert!(validate_telefono("+").is_err());
    }

    #[test]
    fn codice_fiscale_requires_sixteen_alphanumerics() {
        assert!(validate_codice_fiscale("RSSMRA80A01H501U").is_ok());
        assert!(validate_codice_fiscale("rssmra80a01h501u").is_ok());
        assert!(validate_codice_fiscale("RSSMRA80A01H501").is_err());
        assert!(validate_codice_fiscale("RSSMRA80A01H501-").is_err());
    }

    #[test]
    fn validation_codes_are_message_keys() {
        let err = validate_telefono("x").unwrap_err();
        assert_eq!(err.code, "validation.telefono.format");
    }
}
