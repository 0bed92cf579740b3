//! Password policy and hashing.

use argon2::Argon2;
use argon2::password_hash::{PasswordHasher, SaltString, rand_core::OsRng};

use crate::error::ApiError;

const MIN_LEN: usize = 8;
const MAX_LEN: usize = 72;
const SPECIAL_CHARS: &str = "!@#$%^&";

/// Check `password` against the registration policy.
///
/// Returns the message of the first rule that fails, or `None` when the
/// password is acceptable.
pub fn validate_password(password: &str) -> Option<&'static str> {
    let len = password.chars().count();
    if len > MAX_LEN {
        return Some("Password must be less than 72 characters");
    }
    if len < MIN_LEN {
        return Some("Password must be longer than 8 characters");
    }
    if password.starts_with(' ') || password.ends_with(' ') {
        return Some("Password must not start or end with empty spaces");
    }
    let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_special = password.chars().any(|c| SPECIAL_CHARS.contains(c));
    if !(has_lower && has_upper && has_digit && has_special) {
        return Some(
            "Password must contain one upper case, lower case, number and special character",
        );
    }
    None
}

/// Argon2id hash with a fresh random salt, PHC-encoded.
pub fn hash_password(password: &str) -> Result<String, ApiError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default().hash_password(password.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

/// Hashing is CPU-bound; keep it off the async workers.
pub async fn hash_password_blocking(password: String) -> Result<String, ApiError> {
    tokio::task::spawn_blocking(move || hash_password(&password)).await?
}

#[cfg(test)]
mod tests {
    use super::*;
    use argon2::password_hash::{PasswordHash, PasswordVerifier};

    fn verify_password(password: &str, phc: &str) -> bool {
        let parsed = PasswordHash::new(phc).unwrap();
        Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok()
    }

    #[test]
    fn strong_password_passes() {
        assert_eq!(validate_password("Wanderlust1!"), None);
    }

    #[test]
    fn length_limits() {
        assert_eq!(
            validate_password("Ab1!"),
            Some("Password must be longer than 8 characters")
        );
        let long = format!("Ab1!{}", "a".repeat(70));
        assert_eq!(
            validate_password(&long),
            Some("Password must be less than 72 characters")
        );
    }

    #[test]
    fn surrounding_spaces_rejected() {
        assert_eq!(
            validate_password(" Wanderlust1!"),
            Some("Password must not start or end with empty spaces")
        );
        assert_eq!(
            validate_password("Wanderlust1! "),
            Some("Password must not start or end with empty spaces")
        );
    }

    #[test]
    fn character_classes_required() {
        let msg =
            Some("Password must contain one upper case, lower case, number and special character");
        assert_eq!(validate_password("wanderlust1!"), msg);
        assert_eq!(validate_password("WANDERLUST1!"), msg);
        assert_eq!(validate_password("Wanderlust!!"), msg);
        assert_eq!(validate_password("Wanderlust11"), msg);
    }

    #[test]
    fn hash_differs_from_plaintext_and_verifies() {
        let hash = hash_password("Wanderlust1!").unwrap();
        assert_ne!(hash, "Wanderlust1!");
        assert!(hash.starts_with("$argon2id$"));
        assert!(verify_password("Wanderlust1!", &hash));
        assert!(!verify_password("Wanderlust2!", &hash));
    }
}
