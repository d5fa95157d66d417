//! Credential port
//!
//! Where the backend API key comes from.

use std::fmt;

/// An API key for the generation backend.
///
/// The key never appears in `Debug` output or logs.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// The raw key, for placing on the wire
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(<redacted>)")
    }
}

/// Resolves the credential for a council request.
///
/// Resolution happens once per request, before any backend call.
pub trait CredentialProvider: Send + Sync {
    fn resolve(&self) -> Option<Credential>;

    /// How to fix a missing credential
    fn hint(&self) -> String {
        "configure an API key for the generation backend".to_string()
    }
}

/// Provider holding a fixed credential (or none)
#[derive(Debug, Clone, Default)]
pub struct StaticCredential(Option<Credential>);

impl StaticCredential {
    pub fn new(key: impl Into<String>) -> Self {
        Self(Some(Credential::new(key)))
    }

    pub fn missing() -> Self {
        Self(None)
    }
}

impl CredentialProvider for StaticCredential {
    fn resolve(&self) -> Option<Credential> {
        self.0.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_key() {
        let credential = Credential::new("sk-secret-123");
        let debug = format!("{:?}", credential);
        assert!(!debug.contains("secret"));
        assert_eq!(credential.expose(), "sk-secret-123");
    }

    #[test]
    fn test_static_provider() {
        assert!(StaticCredential::missing().resolve().is_none());
        assert_eq!(
            StaticCredential::new("k").resolve().unwrap().expose(),
            "k"
        );
    }
}
