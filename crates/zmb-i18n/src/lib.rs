//! # zmb-i18n
//!
//! Static translation dictionaries for the Zumbara storefront client.
//!
//! English, Amharic and Arabic dictionaries are compiled into the binary.
//! Lookup order for a dotted key: the active language, then English, then the
//! key itself. A missing translation never fails; it degrades to something
//! printable.

mod dictionary;
mod error;

pub use dictionary::Dictionary;
pub use error::I18nError;

use std::collections::HashMap;

use zmb_core::enums::{Language, TextDirection};

const EN: &str = include_str!("../locales/en.json");
const AM: &str = include_str!("../locales/am.json");
const AR: &str = include_str!("../locales/ar.json");

/// Result of resolving a key, including where the text came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved<'a> {
    pub text: &'a str,
    /// `None` when no dictionary had the key and `text` is the key itself.
    pub source: Option<Language>,
}

/// Dictionaries for every supported language plus the active one.
#[derive(Debug, Clone)]
pub struct Translator {
    dictionaries: HashMap<Language, Dictionary>,
    language: Language,
}

impl Translator {
    /// Load the built-in dictionaries with `language` active.
    ///
    /// # Errors
    ///
    /// Returns [`I18nError::Dictionary`] if a bundled dictionary is malformed.
    pub fn builtin(language: Language) -> Result<Self, I18nError> {
        let mut dictionaries = HashMap::with_capacity(Language::ALL.len());
        for (lang, source) in [(Language::En, EN), (Language::Am, AM), (Language::Ar, AR)] {
            dictionaries.insert(lang, Dictionary::parse(lang.as_str(), source)?);
        }
        Ok(Self::with_dictionaries(dictionaries, language))
    }

    /// Load the built-in dictionaries from a language code such as `am`.
    ///
    /// # Errors
    ///
    /// Returns [`I18nError::UnsupportedLanguage`] for unknown codes.
    pub fn from_code(code: &str) -> Result<Self, I18nError> {
        let language = code
            .parse::<Language>()
            .map_err(|_| I18nError::UnsupportedLanguage(code.to_string()))?;
        Self::builtin(language)
    }

    /// Build from caller-supplied dictionaries. English is the fallback
    /// language and should normally be present.
    #[must_use]
    pub fn with_dictionaries(
        dictionaries: HashMap<Language, Dictionary>,
        language: Language,
    ) -> Self {
        Self {
            dictionaries,
            language,
        }
    }

    #[must_use]
    pub const fn language(&self) -> Language {
        self.language
    }

    #[must_use]
    pub const fn direction(&self) -> TextDirection {
        self.language.direction()
    }

    /// Switch the active language.
    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    /// Resolve `key` and report which dictionary answered.
    #[must_use]
    pub fn resolve<'a>(&'a self, key: &'a str) -> Resolved<'a> {
        let mut order = vec![self.language];
        if self.language != Language::En {
            order.push(Language::En);
        }

        for language in order {
            if let Some(text) = self
                .dictionaries
                .get(&language)
                .and_then(|dictionary| dictionary.get(key))
            {
                if language != self.language {
                    tracing::debug!(key, language = %self.language, "falling back to English");
                }
                return Resolved {
                    text,
                    source: Some(language),
                };
            }
        }

        tracing::debug!(key, language = %self.language, "missing translation key");
        Resolved {
            text: key,
            source: None,
        }
    }

    /// Translate `key`, falling back to English and then to the key itself.
    #[must_use]
    pub fn t<'a>(&'a self, key: &'a str) -> &'a str {
        self.resolve(key).text
    }

    /// Translate `key` and substitute `{name}` placeholders from `args`.
    ///
    /// Placeholders without a matching argument are left as written.
    #[must_use]
    pub fn format(&self, key: &str, args: &[(&str, &str)]) -> String {
        let mut text = self.t(key).to_string();
        for (name, value) in args {
            text = text.replace(&format!("{{{name}}}"), value);
        }
        text
    }

    /// Keys present in English but missing from `language`.
    #[must_use]
    pub fn missing_keys(&self, language: Language) -> Vec<String> {
        let (Some(english), Some(other)) = (
            self.dictionaries.get(&Language::En),
            self.dictionaries.get(&language),
        ) else {
            return Vec::new();
        };
        english
            .keys()
            .into_iter()
            .filter(|key| other.get(key).is_none())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn translator(language: Language) -> Translator {
        Translator::builtin(language).expect("bundled dictionaries parse")
    }

    #[rstest]
    #[case(Language::En, "Home")]
    #[case(Language::Am, "መነሻ")]
    #[case(Language::Ar, "الرئيسية")]
    fn translates_home_label(#[case] language: Language, #[case] expected: &str) {
        assert_eq!(translator(language).t("nav.home"), expected);
    }

    #[test]
    fn missing_translation_falls_back_to_english() {
        let tr = translator(Language::Ar);
        let resolved = tr.resolve("order.end_of_list");
        assert_eq!(resolved.text, "No more orders");
        assert_eq!(resolved.source, Some(Language::En));
    }

    #[test]
    fn unknown_key_falls_back_to_key() {
        let tr = translator(Language::Am);
        let resolved = tr.resolve("checkout.unknown.label");
        assert_eq!(resolved.text, "checkout.unknown.label");
        assert_eq!(resolved.source, None);
    }

    #[test]
    fn format_substitutes_placeholders() {
        let tr = translator(Language::En);
        assert_eq!(
            tr.format("errors.rate_limited", &[("seconds", "30")]),
            "Too many requests. Try again in 30 seconds."
        );
        assert_eq!(
            tr.format("errors.validation.required", &[]),
            "{field} is required"
        );
    }

    #[test]
    fn direction_follows_language() {
        let mut tr = translator(Language::En);
        assert_eq!(tr.direction(), TextDirection::Ltr);
        tr.set_language(Language::Ar);
        assert_eq!(tr.direction(), TextDirection::Rtl);
    }

    #[test]
    fn custom_dictionaries_fall_back_to_english() {
        let english = Dictionary::parse("en", r#"{"cart": {"title": "Cart", "empty": "Empty"}}"#).unwrap();
        let amharic = Dictionary::parse("am", r#"{"cart": {"title": "ጋሪ"}}"#).unwrap();
        let tr = Translator::with_dictionaries(
            HashMap::from([(Language::En, english), (Language::Am, amharic)]),
            Language::Am,
        );

        assert_eq!(tr.t("cart.title"), "ጋሪ");
        assert_eq!(tr.resolve("cart.empty").source, Some(Language::En));
        assert_eq!(tr.missing_keys(Language::Am), vec!["cart.empty".to_string()]);
    }

    #[test]
    fn from_code_rejects_unknown_language() {
        assert!(matches!(
            Translator::from_code("fr"),
            Err(I18nError::UnsupportedLanguage(code)) if code == "fr"
        ));
        assert_eq!(Translator::from_code("AM").unwrap().language(), Language::Am);
    }

    #[test]
    fn every_order_status_has_an_english_label() {
        use zmb_core::enums::OrderStatus;

        let tr = translator(Language::En);
        for status in [
            OrderStatus::PendingPayment,
            OrderStatus::ProofSubmitted,
            OrderStatus::Paid,
            OrderStatus::Processing,
            OrderStatus::Shipped,
            OrderStatus::Delivered,
            OrderStatus::Cancelled,
        ] {
            let key = format!("order.status.{status}");
            assert_eq!(tr.resolve(&key).source, Some(Language::En), "missing {key}");
        }
    }

    #[test]
    fn english_is_complete_reference() {
        let tr = translator(Language::En);
        assert!(tr.missing_keys(Language::En).is_empty());
        let missing_ar = tr.missing_keys(Language::Ar);
        assert!(missing_ar.contains(&"order.end_of_list".to_string()));
        assert!(!missing_ar.contains(&"nav.home".to_string()));
    }
}
