//! # Form Validation
//!
//! Field validators for the login and signup forms. Each validator returns the
//! user-facing message for the first rule the value breaks, or `None`.

use std::collections::BTreeMap;

/// A form input the validators know about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Password,
}

impl Field {
    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Full Name",
            Field::Email => "Email",
            Field::Password => "Password",
        }
    }
}

/// Validation messages keyed by field. Empty means the form is valid.
pub type FieldErrors = BTreeMap<Field, String>;

pub const MIN_PASSWORD_LEN: usize = 6;
pub const MIN_NAME_LEN: usize = 2;

pub fn validate_email(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        return Some("Email is required".to_string());
    }
    if !looks_like_email(value) {
        return Some("Please enter a valid email address".to_string());
    }
    None
}

pub fn validate_password(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        return Some("Password is required".to_string());
    }
    if value.chars().count() < MIN_PASSWORD_LEN {
        return Some(format!(
            "Password must be at least {MIN_PASSWORD_LEN} characters long"
        ));
    }
    None
}

pub fn validate_name(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Some("Name is required".to_string());
    }
    if trimmed.chars().count() < MIN_NAME_LEN {
        return Some(format!(
            "Name must be at least {MIN_NAME_LEN} characters long"
        ));
    }
    None
}

pub fn validate_login(email: &str, password: &str) -> FieldErrors {
    collect([
        (Field::Email, validate_email(email)),
        (Field::Password, validate_password(password)),
    ])
}

pub fn validate_signup(name: &str, email: &str, password: &str) -> FieldErrors {
    collect([
        (Field::Name, validate_name(name)),
        (Field::Email, validate_email(email)),
        (Field::Password, validate_password(password)),
    ])
}

fn collect<const N: usize>(results: [(Field, Option<String>); N]) -> FieldErrors {
    results
        .into_iter()
        .filter_map(|(field, error)| error.map(|message| (field, message)))
        .collect()
}

/// `local@domain.tld` with no whitespace anywhere and exactly one `@`.
fn looks_like_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_rules() {
        assert_eq!(validate_email("  ").as_deref(), Some("Email is required"));
        assert_eq!(
            validate_email("demo@example").as_deref(),
            Some("Please enter a valid email address")
        );
        assert!(validate_email("demo @example.com").is_some());
        assert!(validate_email("@example.com").is_some());
        assert!(validate_email("a@b@example.com").is_some());
        assert!(validate_email("demo@.com").is_some());
        assert_eq!(validate_email("demo@example.com"), None);
        assert_eq!(validate_email("first.last@mail.example.co"), None);
    }

    #[test]
    fn test_password_rules() {
        assert_eq!(validate_password("").as_deref(), Some("Password is required"));
        assert_eq!(
            validate_password("12345").as_deref(),
            Some("Password must be at least 6 characters long")
        );
        assert_eq!(validate_password("123456"), None);
    }

    #[test]
    fn test_name_rules() {
        assert_eq!(validate_name(" ").as_deref(), Some("Name is required"));
        assert_eq!(
            validate_name(" A ").as_deref(),
            Some("Name must be at least 2 characters long")
        );
        assert_eq!(validate_name("Al"), None);
    }

    #[test]
    fn test_validate_login_collects_all_errors() {
        let errors = validate_login("nope", "");
        assert_eq!(errors.len(), 2);
        assert!(errors.contains_key(&Field::Email));
        assert!(errors.contains_key(&Field::Password));

        assert!(validate_login("demo@example.com", "secret1").is_empty());
    }

    #[test]
    fn test_validate_signup() {
        let errors = validate_signup("", "demo@example.com", "secret1");
        assert_eq!(errors.keys().copied().collect::<Vec<_>>(), vec![Field::Name]);
    }
}
