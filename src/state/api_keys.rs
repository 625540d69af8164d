// src/state/api_keys.rs
use std::collections::HashMap;
use std::fmt;

pub const PROVIDERS: [&str; 4] = ["OpenAI", "Anthropic", "Google AI", "Cohere"];

/// Session-only key store. Never written anywhere and never printed.
#[derive(Clone, Default)]
pub struct ApiKeyMap {
    keys: HashMap<String, String>,
}

impl ApiKeyMap {
    pub fn set(&mut self, provider: impl Into<String>, key: impl Into<String>) {
        self.keys.insert(provider.into(), key.into());
    }

    pub fn get(&self, provider: &str) -> &str {
        self.keys.get(provider).map(String::as_str).unwrap_or("")
    }

    pub fn configured(&self) -> usize {
        self.keys.values().filter(|k| !k.is_empty()).count()
    }
}

impl fmt::Debug for ApiKeyMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut providers: Vec<_> = self.keys.keys().collect();
        providers.sort();
        f.debug_struct("ApiKeyMap")
            .field("providers", &providers)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_and_overwrite() {
        let mut keys = ApiKeyMap::default();
        assert_eq!(keys.get("OpenAI"), "");
        keys.set("OpenAI", "sk-one");
        keys.set("OpenAI", "sk-two");
        keys.set("Cohere", "");
        assert_eq!(keys.get("OpenAI"), "sk-two");
        assert_eq!(keys.configured(), 1);
    }

    #[test]
    fn debug_output_redacts_values() {
        let mut keys = ApiKeyMap::default();
        keys.set("Anthropic", "secret-value");
        let printed = format!("{:?}", keys);
        assert!(printed.contains("Anthropic"));
        assert!(!printed.contains("secret-value"));
    }
}
