//! Value objects produced by the user service.

use std::fmt;

const REDACTED: &str = "****";

/// Credential derived from the password the user typed.
///
/// Never printed: `Debug` and `Display` both mask the value.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn from_password(password: &str) -> Self {
        Self(password.to_string())
    }

    /// Check a candidate password against this credential.
    pub fn verify(&self, password: &str) -> bool {
        self.0 == password
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Credential").field(&REDACTED).finish()
    }
}

impl fmt::Display for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(REDACTED)
    }
}

/// An account created by the service. Owned by the caller; never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub email: String,
    pub credential: Credential,
}

impl User {
    pub fn new(email: impl Into<String>, password: &str) -> Self {
        Self {
            email: email.into(),
            credential: Credential::from_password(password),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credential_is_masked_in_debug_output() {
        let user = User::new("a@b.com", "hunter2");
        let rendered = format!("{:?}", user);
        assert!(rendered.contains("a@b.com"));
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains(REDACTED));
    }

    #[test]
    fn credential_verifies_original_password() {
        let credential = Credential::from_password("xyz");
        assert!(credential.verify("xyz"));
        assert!(!credential.verify("xy"));
        assert_eq!(credential.to_string(), REDACTED);
    }
}
