//! Literal token substitution over opaque template text

/// Ordered (token, replacement) pairs, unique by token
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenMap {
    pairs: Vec<(String, String)>,
}

impl TokenMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a token's replacement; an existing token keeps its position
    pub fn insert(&mut self, token: impl Into<String>, replacement: impl Into<String>) {
        let token = token.into();
        let replacement = replacement.into();
        match self.pairs.iter_mut().find(|(t, _)| *t == token) {
            Some(pair) => pair.1 = replacement,
            None => self.pairs.push((token, replacement)),
        }
    }

    /// Builder form of [`TokenMap::insert`]
    pub fn with(mut self, token: impl Into<String>, replacement: impl Into<String>) -> Self {
        self.insert(token, replacement);
        self
    }

    /// Append every pair of `other`, overriding tokens already present
    pub fn extend(&mut self, other: TokenMap) {
        for (token, replacement) in other.pairs {
            self.insert(token, replacement);
        }
    }

    pub fn get(&self, token: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(t, _)| t == token)
            .map(|(_, r)| r.as_str())
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(t, r)| (t.as_str(), r.as_str()))
    }

    /// First token, in map order, that `text` starts with
    fn match_prefix(&self, text: &str) -> Option<(&str, &str)> {
        self.iter()
            .find(|(token, _)| !token.is_empty() && text.starts_with(token))
    }
}

impl<T: Into<String>, R: Into<String>> FromIterator<(T, R)> for TokenMap {
    fn from_iter<I: IntoIterator<Item = (T, R)>>(iter: I) -> Self {
        let mut map = TokenMap::new();
        for (token, replacement) in iter {
            map.insert(token, replacement);
        }
        map
    }
}

/// Replace every token occurrence in one left-to-right pass
///
/// Replacement text is emitted and never rescanned, so a replacement that
/// happens to look like another token stays as written. When two tokens
/// match at the same position the one listed first wins. Tokens with no
/// occurrence are ignored.
pub fn expand(template: &str, tokens: &TokenMap) -> String {
    if tokens.is_empty() {
        return template.to_string();
    }

    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while !rest.is_empty() {
        if let Some((token, replacement)) = tokens.match_prefix(rest) {
            out.push_str(replacement);
            rest = &rest[token.len()..];
            continue;
        }

        let mut chars = rest.chars();
        if let Some(c) = chars.next() {
            out.push(c);
        }
        rest = chars.as_str();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map() -> TokenMap {
        TokenMap::new()
            .with("[solas:country:name:english]", "Test Site")
            .with("SOLAS_COUNTRY", "ts")
            .with("[solas:country:live_fqdn]", "test.example.com")
    }

    #[test]
    fn test_empty_map_is_identity() {
        let text = "name = [solas:country:name:english]\nSOLAS_COUNTRY\n";
        assert_eq!(expand(text, &TokenMap::new()), text);
    }

    #[test]
    fn test_replaces_every_occurrence() {
        let text = "solas_SOLAS_COUNTRY_region / solas_SOLAS_COUNTRY_general_settings";
        assert_eq!(
            expand(text, &map()),
            "solas_ts_region / solas_ts_general_settings"
        );
    }

    #[test]
    fn test_absent_tokens_are_noops() {
        let text = "nothing to see [solas:unknown]";
        assert_eq!(expand(text, &map()), text);
    }

    #[test]
    fn test_replacements_are_not_rescanned() {
        let tokens = TokenMap::new().with("[A]", "[B]").with("[B]", "b");
        assert_eq!(expand("[A] [B]", &tokens), "[B] b");

        let tokens = TokenMap::new().with("[A]", "[B]");
        assert_eq!(expand("[A] and [B]", &tokens), "[B] and [B]");
    }

    #[test]
    fn test_concatenation_is_position_independent() {
        let t1 = "define('SOLAS_COUNTRY_SITE', '[solas:country:name:english]');\n";
        let t2 = "$conf['fqdn'] = '[solas:country:live_fqdn]'; // é ü\n";
        let joined = format!("{}{}", t1, t2);
        assert_eq!(
            expand(&joined, &map()),
            format!("{}{}", expand(t1, &map()), expand(t2, &map()))
        );
    }

    #[test]
    fn test_first_listed_token_wins_at_same_position() {
        let tokens = TokenMap::new().with("[a]", "short").with("[a]x", "long");
        assert_eq!(expand("[a]x", &tokens), "shortx");
    }

    #[test]
    fn test_insert_overrides_in_place() {
        let mut tokens = TokenMap::new().with("[a]", "1").with("[b]", "2");
        tokens.insert("[a]", "3");
        let pairs: Vec<_> = tokens.iter().collect();
        assert_eq!(pairs, vec![("[a]", "3"), ("[b]", "2")]);
        assert_eq!(tokens.get("[a]"), Some("3"));
    }

    #[test]
    fn test_multibyte_text_survives() {
        let tokens = TokenMap::new().with("[n]", "العربية");
        assert_eq!(expand("«[n]» — ok", &tokens), "«العربية» — ok");
    }
}
