//! Site configuration collected for one scaffolding run

use super::validate::{self, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Text direction of a language
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Ltr,
    Rtl,
}

impl Direction {
    pub const ALL: [Direction; 2] = [Direction::Ltr, Direction::Rtl];

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Ltr => "ltr",
            Direction::Rtl => "rtl",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Homepage content type installed by the deploy hooks
///
/// The named variants are the stock homepages shipped with the platform;
/// `Custom` carries a free-form homepage name supplied by the operator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Homepage {
    #[default]
    None,
    Britannia,
    Conqueror,
    Dreadnought,
    Endeavour,
    GoldenHind,
    Macbeth,
    Custom(String),
}

impl Homepage {
    /// Stock homepages in the order they are offered
    pub const STOCK: [Homepage; 7] = [
        Homepage::None,
        Homepage::Britannia,
        Homepage::Conqueror,
        Homepage::Dreadnought,
        Homepage::Endeavour,
        Homepage::GoldenHind,
        Homepage::Macbeth,
    ];

    /// Sentinel choice that triggers the custom homepage prompt
    pub const CUSTOM_CHOICE: &'static str = "custom";

    /// Value substituted into templates
    pub fn as_str(&self) -> &str {
        match self {
            Homepage::None => "none",
            Homepage::Britannia => "britannia",
            Homepage::Conqueror => "conqueror",
            Homepage::Dreadnought => "dreadnought",
            Homepage::Endeavour => "endeavour",
            Homepage::GoldenHind => "golden_hind",
            Homepage::Macbeth => "macbeth",
            Homepage::Custom(name) => name,
        }
    }

    /// Parse a homepage value; anything outside the stock list is custom
    pub fn parse(value: &str) -> Self {
        Self::STOCK
            .iter()
            .find(|h| h.as_str() == value)
            .cloned()
            .unwrap_or_else(|| Homepage::Custom(value.to_string()))
    }
}

impl fmt::Display for Homepage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Homepage {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Homepage {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Ok(Homepage::parse(&value))
    }
}

/// An additional site language
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageEntry {
    /// Language name in English
    pub english_name: String,

    /// The language's endonym
    pub native_name: String,

    /// Locale code, embedded verbatim into generated identifiers
    pub code: String,

    #[serde(default)]
    pub direction: Direction,

    #[serde(default)]
    pub is_default: bool,

    /// Site name as written in this language
    pub site_name: String,
}

/// Answers for one scaffolding run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    pub site_name: String,

    /// Machine-safe code embedded in generated module names and paths
    pub site_code: String,

    /// IANA timezone identifier
    pub timezone: String,

    /// ISO-3166 alpha-2 country code (not checked against the standard)
    pub iso_country_code: String,

    pub fqdn: String,

    #[serde(default)]
    pub homepage: Homepage,

    #[serde(default)]
    pub languages: Vec<LanguageEntry>,
}

impl SiteConfig {
    /// Add a language; an entry with an existing code replaces it in place
    ///
    /// Returns true when an earlier entry was overwritten.
    pub fn add_language(&mut self, language: LanguageEntry) -> bool {
        match self.languages.iter_mut().find(|l| l.code == language.code) {
            Some(existing) => {
                *existing = language;
                true
            }
            None => {
                self.languages.push(language);
                false
            }
        }
    }

    /// Collapse duplicate language codes the way `add_language` does
    ///
    /// Answers files bypass the interactive loop, so entries are replayed
    /// through `add_language`. Returns the codes that replaced an earlier entry.
    pub fn normalize(&mut self) -> Vec<String> {
        let languages = std::mem::take(&mut self.languages);
        let mut replaced = Vec::new();
        for language in languages {
            let code = language.code.clone();
            if self.add_language(language) {
                replaced.push(code);
            }
        }
        replaced
    }

    /// Re-apply every field validator, e.g. for answers loaded from a file
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate::required(validate::SITE_NAME, &self.site_name)?;
        validate::required(validate::SITE_CODE, &self.site_code)?;
        validate::timezone(&self.timezone)?;
        validate::required(validate::ISO_CODE, &self.iso_country_code)?;
        validate::required(validate::FQDN, &self.fqdn)?;
        if let Homepage::Custom(name) = &self.homepage {
            validate::required(validate::CUSTOM_HOMEPAGE, name)?;
        }

        for language in &self.languages {
            validate::required(validate::LANGUAGE_NAME, &language.english_name)?;
            validate::required(validate::LANGUAGE_NATIVE_NAME, &language.native_name)?;
            validate::required(validate::LANGUAGE_CODE, &language.code)?;
            validate::required(validate::LANGUAGE_SITE_NAME, &language.site_name)?;
        }

        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn language(code: &str, is_default: bool) -> LanguageEntry {
        LanguageEntry {
            english_name: format!("{} english", code),
            native_name: format!("{} native", code),
            code: code.to_string(),
            direction: Direction::Ltr,
            is_default,
            site_name: format!("{} site", code),
        }
    }

    pub(crate) fn test_site() -> SiteConfig {
        SiteConfig {
            site_name: "Test Site".to_string(),
            site_code: "ts".to_string(),
            timezone: "Europe/London".to_string(),
            iso_country_code: "GB".to_string(),
            fqdn: "test.example.com".to_string(),
            homepage: Homepage::None,
            languages: Vec::new(),
        }
    }

    #[test]
    fn test_homepage_parse() {
        assert_eq!(Homepage::parse("golden_hind"), Homepage::GoldenHind);
        assert_eq!(Homepage::parse("none"), Homepage::None);
        assert_eq!(
            Homepage::parse("my_special_page"),
            Homepage::Custom("my_special_page".to_string())
        );
        assert_eq!(Homepage::Custom("x".to_string()).as_str(), "x");
    }

    #[test]
    fn test_add_language_last_write_wins_in_place() {
        let mut site = test_site();
        assert!(!site.add_language(language("fr", false)));
        assert!(!site.add_language(language("de", false)));

        let mut replacement = language("fr", true);
        replacement.site_name = "Nouveau".to_string();
        assert!(site.add_language(replacement));

        assert_eq!(site.languages.len(), 2);
        assert_eq!(site.languages[0].code, "fr");
        assert_eq!(site.languages[0].site_name, "Nouveau");
        assert!(site.languages[0].is_default);
        assert_eq!(site.languages[1].code, "de");
    }

    #[test]
    fn test_normalize_replays_duplicates() {
        let mut site = test_site();
        let mut second_fr = language("fr", false);
        second_fr.site_name = "Nouveau".to_string();
        site.languages = vec![language("fr", true), language("de", false), second_fr];

        assert_eq!(site.normalize(), vec!["fr".to_string()]);
        assert_eq!(site.languages.len(), 2);
        assert_eq!(site.languages[0].code, "fr");
        assert_eq!(site.languages[0].site_name, "Nouveau");
        assert!(!site.languages[0].is_default);
        assert_eq!(site.languages[1].code, "de");

        assert!(site.normalize().is_empty());
    }

    #[test]
    fn test_validate_rejects_bad_timezone() {
        let mut site = test_site();
        assert!(site.validate().is_ok());

        site.timezone = "Mars/Olympus".to_string();
        assert!(matches!(
            site.validate(),
            Err(ValidationError::UnknownTimezone { .. })
        ));
    }

    #[test]
    fn test_answers_yaml_fields() {
        let yaml = r#"
site_name: Test Site
site_code: ts
timezone: Europe/London
iso_country_code: GB
fqdn: test.example.com
homepage: my_special_page
languages:
  - english_name: Arabic
    native_name: العربية
    code: ar
    direction: rtl
    site_name: المجلس الثقافي البريطاني
"#;
        let site: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(site.homepage, Homepage::Custom("my_special_page".to_string()));
        assert_eq!(site.languages[0].direction, Direction::Rtl);
        assert!(!site.languages[0].is_default);
        assert!(site.validate().is_ok());
    }
}
