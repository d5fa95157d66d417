//! Credential resolution from environment variables

use council_application::{Credential, CredentialProvider};
use tracing::debug;

/// Looks the API key up in a list of environment variables.
///
/// The first variable holding a non-blank value wins.
#[derive(Debug, Clone)]
pub struct EnvCredentialProvider {
    vars: Vec<String>,
}

impl EnvCredentialProvider {
    pub fn new(vars: Vec<String>) -> Self {
        Self { vars }
    }

    /// Resolve through `lookup` instead of the process environment
    fn resolve_with(&self, lookup: impl Fn(&str) -> Option<String>) -> Option<Credential> {
        self.vars.iter().find_map(|name| {
            let value = lookup(name)?;
            let value = value.trim();
            if value.is_empty() {
                return None;
            }
            debug!(var = %name, "Resolved API key");
            Some(Credential::new(value))
        })
    }
}

impl CredentialProvider for EnvCredentialProvider {
    fn resolve(&self) -> Option<Credential> {
        self.resolve_with(|name| std::env::var(name).ok())
    }

    fn hint(&self) -> String {
        format!(
            "set one of {} to your Gemini API key",
            self.vars.join(", ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn provider() -> EnvCredentialProvider {
        EnvCredentialProvider::new(vec![
            "API_KEY".to_string(),
            "VITE_API_KEY".to_string(),
            "GEMINI_API_KEY".to_string(),
        ])
    }

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_first_non_blank_wins() {
        let vars = env(&[("VITE_API_KEY", "vite"), ("GEMINI_API_KEY", "gemini")]);
        let credential = provider().resolve_with(|n| vars.get(n).cloned()).unwrap();
        assert_eq!(credential.expose(), "vite");
    }

    #[test]
    fn test_blank_values_are_ignored() {
        let vars = env(&[("API_KEY", "   "), ("GEMINI_API_KEY", " gemini ")]);
        let credential = provider().resolve_with(|n| vars.get(n).cloned()).unwrap();
        assert_eq!(credential.expose(), "gemini");
    }

    #[test]
    fn test_nothing_set() {
        let vars = env(&[("API_KEY", "")]);
        assert!(provider().resolve_with(|n| vars.get(n).cloned()).is_none());
    }

    #[test]
    fn test_hint_names_every_variable() {
        let hint = provider().hint();
        assert!(hint.contains("API_KEY"));
        assert!(hint.contains("VITE_API_KEY"));
        assert!(hint.contains("GEMINI_API_KEY"));
    }
}
