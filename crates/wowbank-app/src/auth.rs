//! Demo credential check.
//!
//! Intentionally a fixed-credential comparison, not an authentication
//! mechanism -- the whole app is a client-side simulation.

use wowbank_core::ValidationError;

/// Usernames accepted by the demo login.
pub const DEMO_USERNAMES: [&str; 2] = ["demo@wowbank.com", "demo"];

/// Password accepted by the demo login.
pub const DEMO_PASSWORD: &str = "demo123";

/// Validate a credential pair against the fixed demo credentials.
pub fn check_credentials(username: &str, password: &str) -> Result<(), ValidationError> {
    if DEMO_USERNAMES.contains(&username) && password == DEMO_PASSWORD {
        Ok(())
    } else {
        Err(ValidationError::InvalidCredentials)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_usernames_accepted() {
        assert!(check_credentials("demo@wowbank.com", "demo123").is_ok());
        assert!(check_credentials("demo", "demo123").is_ok());
    }

    #[test]
    fn test_wrong_password_rejected() {
        assert_eq!(
            check_credentials("demo", "demo124"),
            Err(ValidationError::InvalidCredentials)
        );
        assert_eq!(
            check_credentials("demo", ""),
            Err(ValidationError::InvalidCredentials)
        );
    }

    #[test]
    fn test_unknown_username_rejected() {
        assert_eq!(
            check_credentials("admin", "demo123"),
            Err(ValidationError::InvalidCredentials)
        );
        // Case matters: this is a literal comparison
        assert_eq!(
            check_credentials("Demo", "demo123"),
            Err(ValidationError::InvalidCredentials)
        );
    }
}
