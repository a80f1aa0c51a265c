//! Locale identity for the rendering boundary

use std::fmt;

use crate::value::{PropertyRead, Value};

/// A language/country pair.
///
/// This crate does no locale-specific formatting itself; the locale is
/// carried through to the rendering engine. It also participates in
/// property-path navigation, so a pattern can address it as a parameter
/// (`{locale.language}`).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Locale {
    language: String,
    country: String,
}

impl Locale {
    pub fn new(language: &str, country: &str) -> Self {
        Self {
            language: language.to_string(),
            country: country.to_string(),
        }
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn country(&self) -> &str {
        &self.country
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.country.is_empty() {
            f.write_str(&self.language)
        } else {
            write!(f, "{}_{}", self.language, self.country)
        }
    }
}

impl PropertyRead for Locale {
    fn property(&self, name: &str) -> Option<Value> {
        match name {
            "language" => Some(Value::Str(self.language.clone())),
            "country" => Some(Value::Str(self.country.clone())),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_tag() {
        assert_eq!(Locale::new("en", "US").to_string(), "en_US");
        assert_eq!(Locale::new("en", "").to_string(), "en");
    }

    #[test]
    fn test_locale_is_property_readable() {
        let locale = Locale::new("en", "US");
        assert_eq!(locale.property("language"), Some(Value::from("en")));
        assert_eq!(locale.property("script"), None);
    }
}
