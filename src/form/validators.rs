//! Field Validators
//!
//! Reusable validation functions for form inputs. Each returns `None` when
//! the value is acceptable, or a human-readable message suitable for inline
//! display.

// == Empty Check ==
/// True if the value is empty or only whitespace.
pub fn is_empty(value: &str) -> bool {
    value.trim().is_empty()
}

// == Required ==
/// Validates that a field has a non-blank value.
pub fn validate_required(value: &str, field_name: &str) -> Option<String> {
    if is_empty(value) {
        return Some(format!("{field_name} is required"));
    }
    None
}

// == Email ==
/// Validates a plausible email shape: one `@`, a non-empty local part, and
/// a domain containing a dot. Not RFC-complete; good enough for inline
/// feedback.
pub fn validate_email(email: &str) -> Option<String> {
    if is_empty(email) {
        return Some("Email is required".to_string());
    }

    let mut parts = email.split('@');
    let local = parts.next().unwrap_or_default();
    let domain = parts.next().unwrap_or_default();
    let well_formed = parts.next().is_none()
        && !local.is_empty()
        && !domain.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !email.chars().any(char::is_whitespace);

    if !well_formed {
        return Some("Please enter a valid email address".to_string());
    }
    None
}

// == Password ==
/// Validates password strength: at least 8 characters with an uppercase
/// letter, a lowercase letter, and a digit.
pub fn validate_password(password: &str) -> Option<String> {
    if is_empty(password) {
        return Some("Password is required".to_string());
    }
    if password.chars().count() < 8 {
        return Some("Password must be at least 8 characters long".to_string());
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        return Some("Password must contain at least one uppercase letter".to_string());
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        return Some("Password must contain at least one lowercase letter".to_string());
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Some("Password must contain at least one number".to_string());
    }
    None
}

// == Password Match ==
/// Validates that the confirmation matches the password.
pub fn validate_password_match(password: &str, confirm: &str) -> Option<String> {
    if is_empty(confirm) {
        return Some("Please confirm your password".to_string());
    }
    if password != confirm {
        return Some("Passwords do not match".to_string());
    }
    None
}

// == Length ==
/// Validates a minimum character count (required implicitly).
pub fn validate_min_length(value: &str, min: usize, field_name: &str) -> Option<String> {
    if is_empty(value) {
        return Some(format!("{field_name} is required"));
    }
    if value.chars().count() < min {
        return Some(format!(
            "{field_name} must be at least {min} characters long"
        ));
    }
    None
}

/// Validates a maximum character count. Empty values pass.
pub fn validate_max_length(value: &str, max: usize, field_name: &str) -> Option<String> {
    if value.chars().count() > max {
        return Some(format!("{field_name} must not exceed {max} characters"));
    }
    None
}

// == Username ==
/// Validates a username: 3-20 characters, letters, digits, underscores, and
/// hyphens only.
pub fn validate_username(username: &str) -> Option<String> {
    if is_empty(username) {
        return Some("Username is required".to_string());
    }
    let count = username.chars().count();
    if count < 3 {
        return Some("Username must be at least 3 characters long".to_string());
    }
    if count > 20 {
        return Some("Username must not exceed 20 characters".to_string());
    }
    if !username
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    {
        return Some(
            "Username can only contain letters, numbers, underscores, and hyphens".to_string(),
        );
    }
    None
}

// == Numbers ==
/// Validates that the value parses as a number.
pub fn validate_number(value: &str, field_name: &str) -> Option<String> {
    if is_empty(value) {
        return Some(format!("{field_name} is required"));
    }
    if value.trim().parse::<f64>().is_err() {
        return Some(format!("{field_name} must be a valid number"));
    }
    None
}

/// Validates that the value is a number within `[min, max]`.
pub fn validate_number_range(
    value: &str,
    min: f64,
    max: f64,
    field_name: &str,
) -> Option<String> {
    if let Some(message) = validate_number(value, field_name) {
        return Some(message);
    }
    // validate_number guarantees this parses
    let number: f64 = value.trim().parse().ok()?;
    if number < min || number > max {
        return Some(format!("{field_name} must be between {min} and {max}"));
    }
    None
}

// == Compose ==
/// Chains validators, returning the first failure.
pub fn compose(
    validators: Vec<Box<dyn Fn(&str) -> Option<String>>>,
) -> impl Fn(&str) -> Option<String> {
    move |value| validators.iter().find_map(|validator| validator(value))
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required() {
        assert_eq!(
            validate_required("", "Name"),
            Some("Name is required".to_string())
        );
        assert_eq!(
            validate_required("   ", "Name"),
            Some("Name is required".to_string())
        );
        assert_eq!(validate_required("ada", "Name"), None);
    }

    #[test]
    fn test_email_accepts_plausible_addresses() {
        assert_eq!(validate_email("user@example.com"), None);
        assert_eq!(validate_email("a.b+c@sub.domain.org"), None);
    }

    #[test]
    fn test_email_rejects_malformed_addresses() {
        for bad in ["", "plainaddress", "@no-local.com", "user@", "user@nodot",
                    "two@@ats.com", "spaced user@example.com", "user@.com"] {
            assert!(validate_email(bad).is_some(), "should reject {bad:?}");
        }
    }

    #[test]
    fn test_password_strength_rules() {
        assert_eq!(
            validate_password("short1A"),
            Some("Password must be at least 8 characters long".to_string())
        );
        assert_eq!(
            validate_password("alllower1"),
            Some("Password must contain at least one uppercase letter".to_string())
        );
        assert_eq!(
            validate_password("ALLUPPER1"),
            Some("Password must contain at least one lowercase letter".to_string())
        );
        assert_eq!(
            validate_password("NoNumbers"),
            Some("Password must contain at least one number".to_string())
        );
        assert_eq!(validate_password("Correct1Horse"), None);
    }

    #[test]
    fn test_password_match() {
        assert_eq!(validate_password_match("abc", "abc"), None);
        assert_eq!(
            validate_password_match("abc", "abd"),
            Some("Passwords do not match".to_string())
        );
        assert_eq!(
            validate_password_match("abc", ""),
            Some("Please confirm your password".to_string())
        );
    }

    #[test]
    fn test_length_bounds() {
        assert!(validate_min_length("ab", 3, "Code").is_some());
        assert_eq!(validate_min_length("abc", 3, "Code"), None);
        assert!(validate_max_length("abcd", 3, "Code").is_some());
        assert_eq!(validate_max_length("", 3, "Code"), None);
    }

    #[test]
    fn test_username_rules() {
        assert_eq!(validate_username("ada_lovelace-1"), None);
        assert!(validate_username("ab").is_some());
        assert!(validate_username(&"x".repeat(21)).is_some());
        assert!(validate_username("bad name").is_some());
        assert!(validate_username("emoji😀").is_some());
    }

    #[test]
    fn test_number_range() {
        assert_eq!(validate_number_range("5", 1.0, 10.0, "Qty"), None);
        assert_eq!(
            validate_number_range("11", 1.0, 10.0, "Qty"),
            Some("Qty must be between 1 and 10".to_string())
        );
        assert_eq!(
            validate_number_range("abc", 1.0, 10.0, "Qty"),
            Some("Qty must be a valid number".to_string())
        );
    }

    #[test]
    fn test_compose_returns_first_failure() {
        let validator = compose(vec![
            Box::new(|v| validate_required(v, "Username")),
            Box::new(validate_username),
        ]);

        assert_eq!(validator(""), Some("Username is required".to_string()));
        assert_eq!(
            validator("ab"),
            Some("Username must be at least 3 characters long".to_string())
        );
        assert_eq!(validator("ada"), None);
    }
}
