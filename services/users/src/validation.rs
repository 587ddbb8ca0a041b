//! Input validation utilities

use regex::Regex;
use std::sync::OnceLock;

use crate::models::{CreateUserRequest, NewUser};

pub const INVALID_PAYLOAD: &str = "Invalid payload";
pub const NAME_AND_EMAIL_REQUIRED: &str = "Name and email are required";
pub const INVALID_EMAIL_FORMAT: &str = "Invalid email format";

/// Maximum length of an email address (RFC 5321 path limit)
const MAX_EMAIL_LEN: usize = 254;

/// Parse a raw request body into a creation request
pub fn parse_create_request(raw: &[u8]) -> Result<CreateUserRequest, String> {
    serde_json::from_slice(raw).map_err(|_| INVALID_PAYLOAD.to_string())
}

/// Validate email syntax
pub fn validate_email(email: &str) -> Result<(), String> {
    if email.len() > MAX_EMAIL_LEN {
        return Err(INVALID_EMAIL_FORMAT.to_string());
    }

    static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = EMAIL_REGEX.get_or_init(|| {
        Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
            .expect("Failed to compile email regex")
    });

    if !regex.is_match(email) {
        return Err(INVALID_EMAIL_FORMAT.to_string());
    }

    Ok(())
}

/// Turn a creation request into trimmed, checked insert values
///
/// Presence is checked first, then email syntax on the trimmed value.
pub fn validate_new_user(request: CreateUserRequest) -> Result<NewUser, String> {
    let name = request.name.as_deref().map(str::trim).unwrap_or_default();
    let email = request.email.as_deref().map(str::trim).unwrap_or_default();

    if name.is_empty() || email.is_empty() {
        return Err(NAME_AND_EMAIL_REQUIRED.to_string());
    }

    validate_email(email)?;

    Ok(NewUser {
        name: name.to_string(),
        email: email.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(name: Option<&str>, email: Option<&str>) -> CreateUserRequest {
        CreateUserRequest {
            name: name.map(str::to_string),
            email: email.map(str::to_string),
        }
    }

    #[test]
    fn test_valid_request_is_trimmed() {
        let new_user =
            validate_new_user(request(Some("  Alice  "), Some(" alice@example.com "))).unwrap();
        assert_eq!(new_user.name, "Alice");
        assert_eq!(new_user.email, "alice@example.com");
    }

    #[test]
    fn test_missing_or_blank_fields_are_rejected() {
        for req in [
            request(None, Some("alice@example.com")),
            request(Some("Alice"), None),
            request(Some("   "), Some("alice@example.com")),
            request(Some("Alice"), Some("")),
        ] {
            assert_eq!(
                validate_new_user(req).unwrap_err(),
                NAME_AND_EMAIL_REQUIRED
            );
        }
    }

    #[test]
    fn test_malformed_email_is_rejected() {
        for email in ["not-an-email", "a@b", "@example.com", "alice@exa mple.com"] {
            assert_eq!(
                validate_new_user(request(Some("Alice"), Some(email))).unwrap_err(),
                INVALID_EMAIL_FORMAT,
                "{email} should be rejected"
            );
        }
    }

    #[test]
    fn test_overlong_email_is_rejected() {
        let email = format!("{}@example.com", "a".repeat(250));
        assert_eq!(validate_email(&email).unwrap_err(), INVALID_EMAIL_FORMAT);
    }

    #[test]
    fn test_parse_rejects_non_json_and_wrong_types() {
        assert_eq!(parse_create_request(b"{not json").unwrap_err(), INVALID_PAYLOAD);
        assert_eq!(parse_create_request(b"[1, 2]").unwrap_err(), INVALID_PAYLOAD);
        assert_eq!(
            parse_create_request(br#"{"name": 42, "email": "a@example.com"}"#).unwrap_err(),
            INVALID_PAYLOAD
        );
    }

    #[test]
    fn test_parse_accepts_partial_object() {
        let req = parse_create_request(br#"{"name": "Alice"}"#).unwrap();
        assert_eq!(req.name.as_deref(), Some("Alice"));
        assert!(req.email.is_none());
    }
}
