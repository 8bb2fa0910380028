use portal_core::model::{Credentials, LoginErrors};

/// Login form state. Editing a field clears that field's error.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginFormVm {
    pub email: String,
    pub password: String,
    pub errors: LoginErrors,
}

impl LoginFormVm {
    pub fn set_email(&mut self, value: String) {
        self.email = value;
        self.errors.email = false;
    }

    pub fn set_password(&mut self, value: String) {
        self.password = value;
        self.errors.password = false;
    }

    /// Validate the current fields, recording any failures.
    pub fn submit(&mut self) -> Option<Credentials> {
        match Credentials::validate(&self.email, &self.password) {
            Ok(credentials) => {
                self.errors = LoginErrors::default();
                Some(credentials)
            }
            Err(errors) => {
                self.errors = errors;
                None
            }
        }
    }

    #[must_use]
    pub fn email_class(&self) -> &'static str {
        if self.errors.email { "field-input invalid" } else { "field-input" }
    }

    #[must_use]
    pub fn password_class(&self) -> &'static str {
        if self.errors.password { "field-input invalid" } else { "field-input" }
    }
}
