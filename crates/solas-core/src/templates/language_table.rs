//! Composite language fragments for the region and deploy templates

use super::expand::{expand, TokenMap};
use super::tokens;
use crate::config::LanguageEntry;

/// Exported language record, one per additional language
const LANGUAGE_RECORD: &str = "    
  // Exported language: [solas:language:code].
  $languages['[solas:language:code]'] = array(
    'language' => '[solas:language:code]',
    'name' => '[solas:language:name]',
    'native' => '[solas:language:native_name]',
    'direction' => '[solas:language:direction]',
    'enabled' => 1,
    'plurals' => 0,
    'formula' => '',
    'domain' => '',
    'prefix' => '',
    'weight' => -10,
  );";

/// Organisation name set as every language's site name
pub const ORGANISATION_NAME: &str = "British Council";

/// Direction written for the fallback language.
///
/// Generated region modules have always carried the literal `0` here rather
/// than `ltr`; downstream content may rely on it, so it is kept as is.
pub const FALLBACK_DIRECTION: &str = "0";

/// Default language as substituted into the region templates
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultLanguage {
    pub code: String,
    pub english_name: String,
    pub native_name: String,
    pub direction: String,
}

impl DefaultLanguage {
    /// English, used when no language is flagged as default
    pub fn fallback() -> Self {
        Self {
            code: "en".to_string(),
            english_name: "English".to_string(),
            native_name: "English".to_string(),
            direction: FALLBACK_DIRECTION.to_string(),
        }
    }
}

impl From<&LanguageEntry> for DefaultLanguage {
    fn from(language: &LanguageEntry) -> Self {
        Self {
            code: language.code.clone(),
            english_name: language.english_name.clone(),
            native_name: language.native_name.clone(),
            direction: language.direction.to_string(),
        }
    }
}

/// Fragments derived from the additional languages
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageTable {
    /// Concatenated exported language records
    pub blocks: String,
    /// `features[language][] = <code>` lines for the feature .info file
    pub info_lines: String,
    /// `, '<code>'` per language, appended to a locale list literal
    pub date_suffix: String,
    /// Additional languages plus the implicit base language
    pub count: usize,
    /// i18n site name and slogan assignments for the deploy hooks
    pub name_slogan: String,
    pub default_language: DefaultLanguage,
}

impl LanguageTable {
    /// Build every fragment in a single pass over `languages`
    ///
    /// When several languages are flagged as default the earliest wins.
    pub fn build(languages: &[LanguageEntry]) -> Self {
        let mut blocks = String::new();
        let mut info_lines = String::new();
        let mut date_suffix = String::new();
        let mut name_slogan = String::new();
        let mut default_language = None;

        for language in languages {
            blocks.push_str(&expand(LANGUAGE_RECORD, &record_tokens(language)));
            info_lines.push_str(&format!("features[language][] = {}\n", language.code));
            date_suffix.push_str(&format!(", '{}'", language.code));
            name_slogan.push_str(&format!(
                "\n  i18n_variable_set('site_name', '{}', '{}');\n  i18n_variable_set('site_slogan', '{}', '{}');",
                ORGANISATION_NAME, language.code, language.site_name, language.code
            ));

            if language.is_default && default_language.is_none() {
                default_language = Some(DefaultLanguage::from(language));
            }
        }

        Self {
            blocks,
            info_lines,
            date_suffix,
            count: languages.len() + 1,
            name_slogan,
            default_language: default_language.unwrap_or_else(DefaultLanguage::fallback),
        }
    }

    /// Tokens filled from this table in the region unit
    pub fn region_tokens(&self) -> TokenMap {
        let default = &self.default_language;
        TokenMap::new()
            .with(tokens::LANGUAGES, self.blocks.as_str())
            .with(tokens::LANGUAGE_INFO, self.info_lines.as_str())
            .with(tokens::LANGUAGE_COUNT, self.count.to_string())
            .with(tokens::DATE_LANGUAGES, self.date_suffix.as_str())
            .with(tokens::DEFAULT_LANGUAGE_CODE, default.code.as_str())
            .with(tokens::DEFAULT_LANGUAGE_NAME, default.english_name.as_str())
            .with(tokens::DEFAULT_LANGUAGE_NATIVE_NAME, default.native_name.as_str())
            .with(tokens::DEFAULT_LANGUAGE_DIRECTION, default.direction.as_str())
    }
}

fn record_tokens(language: &LanguageEntry) -> TokenMap {
    TokenMap::new()
        .with(tokens::LANGUAGE_CODE, language.code.as_str())
        .with(tokens::LANGUAGE_NAME, language.english_name.as_str())
        .with(tokens::LANGUAGE_NATIVE_NAME, language.native_name.as_str())
        .with(tokens::LANGUAGE_DIRECTION, language.direction.as_str())
}
