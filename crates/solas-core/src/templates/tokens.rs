//! Placeholder tokens understood by the site templates
//!
//! Templates may only use the tokens listed here; anything else is left in
//! the output untouched.

/// Placeholder embedded in template directory and file names, and inside
/// all-caps constants such as `SOLAS_COUNTRY_SITE`
pub const PLACEHOLDER: &str = "SOLAS_COUNTRY";

pub const COUNTRY_NAME_ENGLISH: &str = "[solas:country:name:english]";
pub const COUNTRY_NAME_LOWERCASE: &str = "[solas:country:name:lowercase]";
pub const COUNTRY_LIVE_FQDN: &str = "[solas:country:live_fqdn]";
pub const COUNTRY_TIMEZONE: &str = "[solas:country:timezone]";
pub const COUNTRY_DEFAULT: &str = "[solas:country:default]";

pub const HOMEPAGE: &str = "[solas:homepage]";
pub const LANGUAGES_NAME_SLOGAN: &str = "[solas:languages:nameslogan]";

pub const LANGUAGES: &str = "[solas:languages]";
pub const LANGUAGE_INFO: &str = "[solas:language:info]";
pub const LANGUAGE_COUNT: &str = "[solas:language:count]";
pub const DATE_LANGUAGES: &str = "[solas:date:languages]";

pub const LANGUAGE_CODE: &str = "[solas:language:code]";
pub const LANGUAGE_NAME: &str = "[solas:language:name]";
pub const LANGUAGE_NATIVE_NAME: &str = "[solas:language:native_name]";
pub const LANGUAGE_DIRECTION: &str = "[solas:language:direction]";

pub const DEFAULT_LANGUAGE_CODE: &str = "[solas:language:default:code]";
pub const DEFAULT_LANGUAGE_NAME: &str = "[solas:language:default:name]";
pub const DEFAULT_LANGUAGE_NATIVE_NAME: &str = "[solas:language:default:native_name]";
pub const DEFAULT_LANGUAGE_DIRECTION: &str = "[solas:language:default:direction]";
