//! Answer validators

use super::timezones::CANONICAL_TIMEZONES;
use chrono_tz::Tz;
use thiserror::Error;

pub const SITE_NAME: &str = "Site name";
pub const SITE_CODE: &str = "Site code";
pub const TIMEZONE: &str = "Timezone";
pub const ISO_CODE: &str = "ISO-ALPHA2 code";
pub const FQDN: &str = "FQDN";
pub const CUSTOM_HOMEPAGE: &str = "Homepage";
pub const LANGUAGE_NAME: &str = "Language name";
pub const LANGUAGE_NATIVE_NAME: &str = "Native language endonym";
pub const LANGUAGE_CODE: &str = "Language code";
pub const LANGUAGE_SITE_NAME: &str = "Site name in language";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} cannot be empty.")]
    Empty { field: &'static str },

    #[error("Timezone must be a valid timezone, '{value}' is not one.")]
    UnknownTimezone { value: String },

    #[error("'{value}' is not a valid choice for {field}.")]
    InvalidChoice { field: &'static str, value: String },
}

/// Reject answers that are empty once trimmed
pub fn required(field: &'static str, answer: &str) -> Result<(), ValidationError> {
    if answer.trim().is_empty() {
        return Err(ValidationError::Empty { field });
    }
    Ok(())
}

/// Timezone must be non-empty and a canonical IANA identifier
///
/// The emptiness check runs first so the two failures read differently.
/// Names the tz database only knows as links (`US/Eastern`, `GB`) are
/// rejected like unknown ones.
pub fn timezone(answer: &str) -> Result<(), ValidationError> {
    required(TIMEZONE, answer)?;
    let unknown = || ValidationError::UnknownTimezone {
        value: answer.to_string(),
    };

    let tz = answer.parse::<Tz>().map_err(|_| unknown())?;
    if CANONICAL_TIMEZONES.binary_search(&tz.name()).is_err() {
        return Err(unknown());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_trims() {
        assert_eq!(
            required(SITE_NAME, "   "),
            Err(ValidationError::Empty { field: SITE_NAME })
        );
        assert!(required(SITE_NAME, " Test ").is_ok());
    }

    #[test]
    fn test_timezone_empty_before_unknown() {
        assert_eq!(
            timezone(""),
            Err(ValidationError::Empty { field: TIMEZONE })
        );
        assert!(matches!(
            timezone("Europe/Nowhere"),
            Err(ValidationError::UnknownTimezone { .. })
        ));
        assert!(timezone("Europe/London").is_ok());
        assert!(timezone("Asia/Kolkata").is_ok());
    }

    #[test]
    fn test_timezone_rejects_backward_links() {
        for link in ["US/Eastern", "GB", "Zulu", "Europe/Kiev", "Asia/Calcutta", "Etc/GMT+5"] {
            assert!(
                matches!(timezone(link), Err(ValidationError::UnknownTimezone { .. })),
                "{} should be rejected",
                link
            );
        }
        for zone in ["UTC", "Europe/Kyiv", "Europe/Amsterdam", "America/New_York"] {
            assert!(timezone(zone).is_ok(), "{} should be accepted", zone);
        }
    }

    #[test]
    fn test_canonical_list_is_sorted() {
        assert!(CANONICAL_TIMEZONES.windows(2).all(|w| w[0] < w[1]));
        for zone in CANONICAL_TIMEZONES {
            assert!(zone.parse::<Tz>().is_ok(), "{} unknown to the tz database", zone);
        }
    }

    #[test]
    fn test_error_text_names_field() {
        let err = required(FQDN, "").unwrap_err();
        assert_eq!(err.to_string(), "FQDN cannot be empty.");

        let err = timezone("Nope").unwrap_err();
        assert!(err.to_string().contains("valid timezone"));
        assert!(err.to_string().contains("Nope"));
    }
}
