//! Answer collection for a new site
//!
//! Every scalar field follows the same loop: prompt, validate, and on
//! failure report the reason and prompt again. The additional-language loop
//! repeats that per field for as long as the operator asks for another
//! language.

use super::site::{Direction, Homepage, LanguageEntry, SiteConfig};
use super::validate::{self, ValidationError};
use anyhow::Result;

/// Interactive surface the collector talks to
pub trait Prompter {
    /// Ask for free text
    fn input(&mut self, prompt: &str) -> Result<String>;

    /// Pick one of `options`, returning its index
    fn select(&mut self, prompt: &str, options: &[&str], default: usize) -> Result<usize>;

    /// Yes/no question
    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool>;

    /// Tell the operator why the last answer was rejected
    fn invalid(&mut self, error: &ValidationError) -> Result<()>;

    /// Progress message
    fn info(&mut self, message: &str) -> Result<()>;

    /// A step finished
    fn success(&mut self, message: &str) -> Result<()>;

    /// Non-fatal notice
    fn warn(&mut self, message: &str) -> Result<()>;

    /// Show the rendered answer summary
    fn summary(&mut self, summary: &str) -> Result<()>;
}

/// Collect a complete site configuration
///
/// Returns `Ok(None)` when the operator declines the final confirmation.
pub fn collect_answers<P: Prompter>(prompter: &mut P) -> Result<Option<SiteConfig>> {
    let site_name = ask_required(prompter, "Site name:", validate::SITE_NAME)?;
    let site_code = ask_required(prompter, "Site code:", validate::SITE_CODE)?;
    let timezone = ask(prompter, "Timezone:", validate::timezone)?;
    let iso_country_code = ask_required(prompter, "ISO-ALPHA2 code:", validate::ISO_CODE)?;
    let fqdn = ask_required(prompter, "FQDN:", validate::FQDN)?;
    let homepage = ask_homepage(prompter)?;

    let mut site = SiteConfig {
        site_name,
        site_code,
        timezone,
        iso_country_code,
        fqdn,
        homepage,
        languages: Vec::new(),
    };

    while prompter.confirm("Would you like to add an additional language?", false)? {
        let language = ask_language(prompter)?;
        let code = language.code.clone();
        if site.add_language(language) {
            prompter.warn(&duplicate_language_warning(&code))?;
        }
    }

    confirm_site(prompter, site)
}

/// Warning shown when a later language entry replaces an earlier one
pub fn duplicate_language_warning(code: &str) -> String {
    format!(
        "Language '{}' was already added; the earlier entry has been replaced.",
        code
    )
}

/// Show the summary and ask for the go-ahead
pub fn confirm_site<P: Prompter>(prompter: &mut P, site: SiteConfig) -> Result<Option<SiteConfig>> {
    prompter.summary(&super::render_summary(&site))?;
    if prompter.confirm("Are these details correct?", false)? {
        Ok(Some(site))
    } else {
        Ok(None)
    }
}

fn ask<P, F>(prompter: &mut P, prompt: &str, validator: F) -> Result<String>
where
    P: Prompter,
    F: Fn(&str) -> Result<(), ValidationError>,
{
    loop {
        let answer = prompter.input(prompt)?;
        match validator(&answer) {
            Ok(()) => return Ok(answer),
            Err(e) => prompter.invalid(&e)?,
        }
    }
}

fn ask_required<P: Prompter>(prompter: &mut P, prompt: &str, field: &'static str) -> Result<String> {
    ask(prompter, prompt, |answer| validate::required(field, answer))
}

fn ask_homepage<P: Prompter>(prompter: &mut P) -> Result<Homepage> {
    let stock = Homepage::STOCK;
    let mut options: Vec<&str> = stock.iter().map(Homepage::as_str).collect();
    options.push(Homepage::CUSTOM_CHOICE);

    let idx = prompter.select("Homepage:", &options, 0)?;
    match stock.get(idx) {
        Some(stock) => Ok(stock.clone()),
        None => {
            let name = ask_required(prompter, "Custom homepage:", validate::CUSTOM_HOMEPAGE)?;
            Ok(Homepage::Custom(name))
        }
    }
}

fn ask_language<P: Prompter>(prompter: &mut P) -> Result<LanguageEntry> {
    let english_name = ask_required(prompter, "Language name in English:", validate::LANGUAGE_NAME)?;
    let native_name = ask_required(
        prompter,
        "Native language's endonym:",
        validate::LANGUAGE_NATIVE_NAME,
    )?;
    let code = ask_required(prompter, "Language code:", validate::LANGUAGE_CODE)?;

    let directions: Vec<&str> = Direction::ALL.iter().map(Direction::as_str).collect();
    let idx = prompter.select("Language direction:", &directions, 0)?;
    let direction = Direction::ALL.get(idx).copied().unwrap_or_default();

    let is_default = prompter.confirm("Is this language the default?", false)?;
    let site_name = ask_required(prompter, "Site name in language:", validate::LANGUAGE_SITE_NAME)?;

    Ok(LanguageEntry {
        english_name,
        native_name,
        code,
        direction,
        is_default,
        site_name,
    })
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::collections::VecDeque;

    #[derive(Debug)]
    pub(crate) enum Answer {
        Text(&'static str),
        Choice(usize),
        Yes,
        No,
    }

    /// Replays a fixed list of answers and records what was shown
    #[derive(Default)]
    pub(crate) struct ScriptedPrompter {
        answers: VecDeque<Answer>,
        pub(crate) prompts: Vec<String>,
        pub(crate) errors: Vec<ValidationError>,
        pub(crate) warnings: Vec<String>,
        pub(crate) summaries: Vec<String>,
        pub(crate) messages: Vec<String>,
    }

    impl ScriptedPrompter {
        pub(crate) fn new(answers: Vec<Answer>) -> Self {
            Self {
                answers: answers.into(),
                ..Default::default()
            }
        }

        fn next(&mut self, prompt: &str) -> Answer {
            self.prompts.push(prompt.to_string());
            self.answers
                .pop_front()
                .unwrap_or_else(|| panic!("no scripted answer for '{}'", prompt))
        }
    }

    impl Prompter for ScriptedPrompter {
        fn input(&mut self, prompt: &str) -> Result<String> {
            match self.next(prompt) {
                Answer::Text(t) => Ok(t.to_string()),
                other => panic!("expected text for '{}', got {:?}", prompt, other),
            }
        }

        fn select(&mut self, prompt: &str, options: &[&str], _default: usize) -> Result<usize> {
            match self.next(prompt) {
                Answer::Choice(i) => {
                    assert!(i < options.len());
                    Ok(i)
                }
                other => panic!("expected choice for '{}', got {:?}", prompt, other),
            }
        }

        fn confirm(&mut self, prompt: &str, _default: bool) -> Result<bool> {
            match self.next(prompt) {
                Answer::Yes => Ok(true),
                Answer::No => Ok(false),
                other => panic!("expected yes/no for '{}', got {:?}", prompt, other),
            }
        }

        fn invalid(&mut self, error: &ValidationError) -> Result<()> {
            self.errors.push(error.clone());
            Ok(())
        }

        fn info(&mut self, message: &str) -> Result<()> {
            self.messages.push(message.to_string());
            Ok(())
        }

        fn success(&mut self, message: &str) -> Result<()> {
            self.messages.push(message.to_string());
            Ok(())
        }

        fn warn(&mut self, message: &str) -> Result<()> {
            self.warnings.push(message.to_string());
            Ok(())
        }

        fn summary(&mut self, summary: &str) -> Result<()> {
            self.summaries.push(summary.to_string());
            Ok(())
        }
    }

    use Answer::*;

    fn base_answers() -> Vec<Answer> {
        vec![
            Text("Test Site"),
            Text("ts"),
            Text("Europe/London"),
            Text("GB"),
            Text("test.example.com"),
            Choice(0),
        ]
    }

    fn language_answers(name: &'static str, code: &'static str, default: bool) -> Vec<Answer> {
        vec![
            Yes,
            Text(name),
            Text(name),
            Text(code),
            Choice(0),
            if default { Yes } else { No },
            Text(name),
        ]
    }

    #[test]
    fn test_collect_without_languages() {
        let mut answers = base_answers();
        answers.extend([No, Yes]);
        let mut prompter = ScriptedPrompter::new(answers);

        let site = collect_answers(&mut prompter).unwrap().unwrap();
        assert_eq!(site.site_name, "Test Site");
        assert_eq!(site.site_code, "ts");
        assert_eq!(site.homepage, Homepage::None);
        assert!(site.languages.is_empty());
        assert_eq!(prompter.summaries.len(), 1);
        assert!(prompter.errors.is_empty());
    }

    #[test]
    fn test_invalid_answers_reprompt() {
        let answers = vec![
            Text(""),
            Text("Test Site"),
            Text("ts"),
            Text(""),
            Text("Atlantis/Capital"),
            Text("Europe/London"),
            Text("  "),
            Text("GB"),
            Text("test.example.com"),
            Choice(1),
            No,
            Yes,
        ];
        let mut prompter = ScriptedPrompter::new(answers);

        let site = collect_answers(&mut prompter).unwrap().unwrap();
        assert_eq!(site.timezone, "Europe/London");
        assert_eq!(site.homepage, Homepage::Britannia);
        assert_eq!(
            prompter.errors,
            vec![
                ValidationError::Empty {
                    field: validate::SITE_NAME
                },
                ValidationError::Empty {
                    field: validate::TIMEZONE
                },
                ValidationError::UnknownTimezone {
                    value: "Atlantis/Capital".to_string()
                },
                ValidationError::Empty {
                    field: validate::ISO_CODE
                },
            ]
        );
        assert_eq!(
            prompter.prompts.iter().filter(|p| *p == "Timezone:").count(),
            3
        );
    }

    #[test]
    fn test_custom_homepage_has_no_sentinel() {
        let mut answers = base_answers();
        answers[5] = Choice(7);
        answers.extend([Text(""), Text("my_special_page"), No, Yes]);
        let mut prompter = ScriptedPrompter::new(answers);

        let site = collect_answers(&mut prompter).unwrap().unwrap();
        assert_eq!(site.homepage, Homepage::Custom("my_special_page".to_string()));
        assert_eq!(site.homepage.as_str(), "my_special_page");
        assert_eq!(prompter.errors.len(), 1);
    }

    #[test]
    fn test_collect_two_languages_in_order() {
        let mut answers = base_answers();
        answers.extend(language_answers("French", "fr", true));
        answers.extend(language_answers("German", "de", false));
        answers.extend([No, Yes]);
        let mut prompter = ScriptedPrompter::new(answers);

        let site = collect_answers(&mut prompter).unwrap().unwrap();
        let codes: Vec<&str> = site.languages.iter().map(|l| l.code.as_str()).collect();
        assert_eq!(codes, vec!["fr", "de"]);
        assert!(site.languages[0].is_default);
        assert!(!site.languages[1].is_default);
        assert!(prompter.summaries[0].contains("Additional languages"));
    }

    #[test]
    fn test_duplicate_language_code_warns() {
        let mut answers = base_answers();
        answers.extend(language_answers("French", "fr", false));
        answers.extend(language_answers("Francais", "fr", true));
        answers.extend([No, Yes]);
        let mut prompter = ScriptedPrompter::new(answers);

        let site = collect_answers(&mut prompter).unwrap().unwrap();
        assert_eq!(site.languages.len(), 1);
        assert_eq!(site.languages[0].english_name, "Francais");
        assert_eq!(prompter.warnings.len(), 1);
    }

    #[test]
    fn test_declined_confirmation_returns_none() {
        let mut answers = base_answers();
        answers.extend([No, No]);
        let mut prompter = ScriptedPrompter::new(answers);

        assert!(collect_answers(&mut prompter).unwrap().is_none());
        assert_eq!(prompter.summaries.len(), 1);
    }
}
