use std::sync::LazyLock;

use regex::Regex;

/// Minimum password length, counted in characters.
pub const MIN_PASSWORD_CHARS: usize = 6;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern should compile")
});

/// Which login fields failed local validation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoginErrors {
    pub email: bool,
    pub password: bool,
}

impl LoginErrors {
    #[must_use]
    pub fn any(&self) -> bool {
        self.email || self.password
    }
}

/// A syntactically valid email/password pair.
///
/// Nothing is checked against a credential store.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    email: String,
}

impl Credentials {
    /// Validate raw form input.
    ///
    /// # Errors
    ///
    /// Returns `LoginErrors` flagging every field that failed.
    pub fn validate(email: &str, password: &str) -> Result<Self, LoginErrors> {
        let errors = LoginErrors {
            email: !is_valid_email(email),
            password: password.chars().count() < MIN_PASSWORD_CHARS,
        };
        if errors.any() {
            return Err(errors);
        }
        Ok(Self {
            email: email.to_owned(),
        })
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_well_formed_pair() {
        let creds = Credentials::validate("a@b.co", "secret").unwrap();
        assert_eq!(creds.email(), "a@b.co");
    }

    #[test]
    fn rejects_malformed_emails() {
        for email in ["", "a@b", "a b@c.d", "@b.co", "a@@b.co", "plain"] {
            assert!(!is_valid_email(email), "{email} should be rejected");
        }
    }

    #[test]
    fn short_password_is_flagged() {
        let err = Credentials::validate("a@b.co", "12345").unwrap_err();
        assert_eq!(
            err,
            LoginErrors {
                email: false,
                password: true
            }
        );
    }

    #[test]
    fn both_fields_can_fail_together() {
        let err = Credentials::validate("nope", "").unwrap_err();
        assert!(err.email && err.password);
    }

    #[test]
    fn password_length_counts_characters() {
        assert!(Credentials::validate("a@b.co", "ñandú!").is_ok());
    }
}
