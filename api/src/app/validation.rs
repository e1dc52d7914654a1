//! Input validation shared by the entity use cases

use crate::error::DomainError;

pub const MAX_NAME_CHARS: usize = 100;

/// Trim a name and check its length. Returns the trimmed name.
pub fn validate_name(name: &str) -> Result<String, DomainError> {
    let name = name.trim();
    let len = name.chars().count();
    if len == 0 || len > MAX_NAME_CHARS {
        return Err(DomainError::Validation(format!(
            "Name must be between 1 and {} characters",
            MAX_NAME_CHARS
        )));
    }
    Ok(name.to_string())
}

/// Trim an email and check it has the `local@domain` shape
pub fn validate_email(email: &str) -> Result<String, DomainError> {
    let email = email.trim();
    match email.split_once('@') {
        Some((local, domain))
            if !local.is_empty() && !domain.is_empty() && !domain.contains('@') =>
        {
            Ok(email.to_string())
        }
        _ => Err(DomainError::Validation(format!(
            "Invalid email address: '{}'",
            email
        ))),
    }
}
