//! The locally registered user.

use serde::{Deserialize, Serialize};

use crate::error::{EventlyResult, ValidationErrors};

/// Characters of which a password must contain at least one.
pub const PASSWORD_SPECIALS: &str = "@$!%*?&#";

/// Registration details. The password is stored as entered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
}

impl User {
    /// Check every registration rule, reporting all failures at once.
    pub fn validate(&self) -> EventlyResult<()> {
        let mut errors = ValidationErrors::new();

        if self.name.trim().is_empty() {
            errors.add("name", "Name is required");
        }

        let email = self.email.trim();
        if email.is_empty() {
            errors.add("email", "Email is required");
        } else if !is_valid_email(email) {
            errors.add("email", "Invalid email");
        }

        if self.phone.is_empty() {
            errors.add("phone", "Phone number is required");
        } else if self.phone.len() != 10 || !self.phone.bytes().all(|b| b.is_ascii_digit()) {
            errors.add("phone", "Must be 10 digits");
        }

        validate_password(&self.password, &mut errors);

        errors.into_result()
    }
}

fn validate_password(password: &str, errors: &mut ValidationErrors) {
    if password.is_empty() {
        errors.add("password", "Password is required");
        return;
    }

    let len = password.chars().count();
    if len < 8 {
        errors.add("password", "At least 8 characters");
    }
    if len > 16 {
        errors.add("password", "Max 16 characters");
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        errors.add("password", "Include at least one uppercase letter");
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        errors.add("password", "Include at least one lowercase letter");
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        errors.add("password", "Include at least one number");
    }
    if !password.chars().any(|c| PASSWORD_SPECIALS.contains(c)) {
        errors.add("password", "Include at least one special character");
    }
}

/// `local@domain.tld` with no whitespace and non-empty domain labels.
fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.contains('@') {
        return false;
    }

    let labels: Vec<&str> = domain.split('.').collect();
    labels.len() >= 2 && labels.iter().all(|l| !l.is_empty())
}
