//! The `key:value` properties file.

use crate::error::ConfigError;

/// Parsed contents of a properties file.
///
/// Entries keep their original order, and unrecognized keys are preserved
/// verbatim so a file round-trips through parse and
/// [`to_text`](Properties::to_text). The simulation only consults the
/// recognized keys via [`GameConfig::from_properties`].
///
/// [`GameConfig::from_properties`]: crate::sim::GameConfig::from_properties
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Properties {
    /// `(key, value)` pairs in file order.
    entries: Vec<(String, String)>,
}

impl Properties {
    /// Parse newline-separated `key:value` lines.
    ///
    /// Blank lines are skipped. The key is everything before the first `:`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingSeparator`] for a non-blank line
    /// without `:`.
    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        let mut entries = Vec::new();
        for (idx, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }
            let Some((key, value)) = line.split_once(':') else {
                return Err(ConfigError::MissingSeparator { line: idx + 1 });
            };
            entries.push((key.trim().to_string(), value.trim().to_string()));
        }
        Ok(Self { entries })
    }

    /// Look up a key's value. The last occurrence wins, matching how
    /// repeated keys overwrite each other.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Append a `key:value` entry.
    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.push((key.into(), value.into()));
    }

    /// Iterate over entries in file order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether there are no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Write the entries back out as `key:value` lines.
    #[must_use]
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for (key, value) in &self.entries {
            out.push_str(key);
            out.push(':');
            out.push_str(value);
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic() {
        let props = Properties::parse("width:30\nheight:20\n").unwrap();
        assert_eq!(props.get("width"), Some("30"));
        assert_eq!(props.get("height"), Some("20"));
        assert_eq!(props.get("refresh"), None);
    }

    #[test]
    fn test_blank_lines_skipped() {
        let props = Properties::parse("width:30\n\n  \nheight:20\n").unwrap();
        assert_eq!(props.len(), 2);
    }

    #[test]
    fn test_missing_separator() {
        let err = Properties::parse("width:30\nnonsense\n").unwrap_err();
        assert_eq!(err, ConfigError::MissingSeparator { line: 2 });
    }

    #[test]
    fn test_unrecognized_keys_preserved_in_order() {
        let text = "width:30\nauthor:someone\nto-kill:3\n";
        let props = Properties::parse(text).unwrap();
        assert_eq!(props.get("author"), Some("someone"));
        assert_eq!(props.to_text(), text);
    }

    #[test]
    fn test_last_occurrence_wins() {
        let props = Properties::parse("width:30\nwidth:40\n").unwrap();
        assert_eq!(props.get("width"), Some("40"));
    }

    #[test]
    fn test_value_with_colon() {
        // Only the first `:` separates key from value
        let props = Properties::parse("note:a:b\n").unwrap();
        assert_eq!(props.get("note"), Some("a:b"));
    }
}
