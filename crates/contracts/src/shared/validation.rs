//! Shallow client-side form checks. The server remains authoritative.

use thiserror::Error;

pub const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    Required(&'static str),

    #[error("Valid email is required")]
    InvalidEmail,

    #[error("{field} must be at least {min} characters")]
    TooShort { field: &'static str, min: usize },

    #[error("{0}")]
    Invalid(String),
}

pub fn require(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::Required(field))
    } else {
        Ok(())
    }
}

/// Same shape check as the login and user forms: `local@domain.tld`
/// without whitespace and with exactly one `@`.
pub fn is_valid_email(value: &str) -> bool {
    let value = value.trim();
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

pub fn validate_email(value: &str) -> Result<(), ValidationError> {
    if is_valid_email(value) {
        Ok(())
    } else {
        Err(ValidationError::InvalidEmail)
    }
}

pub fn validate_password(value: &str) -> Result<(), ValidationError> {
    require("Password", value)?;
    if value.chars().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::TooShort {
            field: "Password",
            min: MIN_PASSWORD_LEN,
        });
    }
    Ok(())
}

/// Parse a strictly positive amount typed into a form
pub fn parse_positive(field: &'static str, value: &str) -> Result<f64, ValidationError> {
    require(field, value)?;
    match value.trim().parse::<f64>() {
        Ok(v) if v.is_finite() && v > 0.0 => Ok(v),
        _ => Err(ValidationError::Invalid(format!(
            "{field} must be a number greater than 0"
        ))),
    }
}

/// Parse a percentage in `0..=100`; blank means zero
pub fn parse_percentage(field: &'static str, value: &str) -> Result<f64, ValidationError> {
    if value.trim().is_empty() {
        return Ok(0.0);
    }
    match value.trim().parse::<f64>() {
        Ok(v) if (0.0..=100.0).contains(&v) => Ok(v),
        _ => Err(ValidationError::Invalid(format!(
            "{field} must be between 0 and 100"
        ))),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordStrength {
    Poor,
    Fair,
    Strong,
}

impl PasswordStrength {
    /// Width of the strength bar in percent
    pub fn level(&self) -> u8 {
        match self {
            PasswordStrength::Poor => 33,
            PasswordStrength::Fair => 66,
            PasswordStrength::Strong => 100,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PasswordStrength::Poor => "Poor",
            PasswordStrength::Fair => "Fair",
            PasswordStrength::Strong => "Strong",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            PasswordStrength::Poor => "strength--poor",
            PasswordStrength::Fair => "strength--fair",
            PasswordStrength::Strong => "strength--strong",
        }
    }
}

/// Strength estimate for the indicator under password inputs. `None` for an
/// empty password.
pub fn password_strength(password: &str) -> Option<PasswordStrength> {
    if password.is_empty() {
        return None;
    }
    let len = password.chars().count();
    let mut score = 0;
    if len >= 8 {
        score += 1;
    }
    if len >= 12 {
        score += 1;
    }
    if password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_uppercase())
    {
        score += 1;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        score += 1;
    }
    if password.chars().any(|c| !c.is_ascii_alphanumeric()) {
        score += 1;
    }

    Some(match score {
        0..=2 => PasswordStrength::Poor,
        3 => PasswordStrength::Fair,
        _ => PasswordStrength::Strong,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_shape() {
        assert!(is_valid_email("admin@shop.io"));
        assert!(is_valid_email("  first.last@mail.example.com "));
        assert!(!is_valid_email("admin@shop"));
        assert!(!is_valid_email("admin@.io"));
        assert!(!is_valid_email("admin@shop."));
        assert!(!is_valid_email("@shop.io"));
        assert!(!is_valid_email("ad min@shop.io"));
        assert!(!is_valid_email("a@b@c.io"));
    }

    #[test]
    fn test_password_rules() {
        assert_eq!(
            validate_password(""),
            Err(ValidationError::Required("Password"))
        );
        assert_eq!(
            validate_password("abc12"),
            Err(ValidationError::TooShort {
                field: "Password",
                min: 6
            })
        );
        assert!(validate_password("abc123").is_ok());
    }

    #[test]
    fn test_password_strength_levels() {
        assert_eq!(password_strength(""), None);
        assert_eq!(password_strength("abc"), Some(PasswordStrength::Poor));
        assert_eq!(password_strength("abcdefgh1"), Some(PasswordStrength::Poor));
        assert_eq!(password_strength("Abcdefgh1"), Some(PasswordStrength::Fair));
        assert_eq!(
            password_strength("Abcdefgh1234!"),
            Some(PasswordStrength::Strong)
        );
    }

    #[test]
    fn test_numeric_fields() {
        assert_eq!(parse_positive("Price", "12.5"), Ok(12.5));
        assert!(parse_positive("Price", "0").is_err());
        assert!(parse_positive("Price", "abc").is_err());
        assert_eq!(
            parse_positive("Price", " "),
            Err(ValidationError::Required("Price"))
        );
        assert_eq!(parse_percentage("Discount", ""), Ok(0.0));
        assert_eq!(parse_percentage("Discount", "15"), Ok(15.0));
        assert!(parse_percentage("Discount", "120").is_err());
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            ValidationError::Required("First name").to_string(),
            "First name is required"
        );
        assert_eq!(
            ValidationError::InvalidEmail.to_string(),
            "Valid email is required"
        );
    }
}
