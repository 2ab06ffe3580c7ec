// src/core/types.rs
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One raw dictionary row as supplied by the provider.
///
/// The legacy payloads name the pattern field `braillePattern`; both spellings
/// are accepted. Extra fields (id, language, ...) are ignored on decode.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DictionaryRecord {
    pub word: String,
    #[serde(alias = "braillePattern")]
    pub pattern: String,
    /// Usage-frequency weight; feeds the logarithmic confidence boost.
    #[serde(default)]
    pub frequency: u64,
}

/// Table value held per canonical lowercase word after a load.
#[derive(Debug, Clone)]
pub struct DictEntry {
    /// Encoded dot pattern, whitespace stripped.
    pub pattern: String,
    pub frequency: u64,
}

/// Which stage or metric produced a suggestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchKind {
    Exact,
    Prefix,
    Levenshtein,
    Damerau,
    Jaro,
    Pattern,
}

impl fmt::Display for MatchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            MatchKind::Exact => "exact",
            MatchKind::Prefix => "prefix",
            MatchKind::Levenshtein => "levenshtein",
            MatchKind::Damerau => "damerau",
            MatchKind::Jaro => "jaro",
            MatchKind::Pattern => "pattern",
        };
        f.write_str(tag)
    }
}

/// Selector for the fuzzy metric used in the full-scan stage.
/// The set is closed, so a match on the tag replaces dynamic dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    #[default]
    Levenshtein,
    Damerau,
    Jaro,
}

impl Metric {
    /// The tag stamped on results produced with this metric.
    pub fn kind(self) -> MatchKind {
        match self {
            Metric::Levenshtein => MatchKind::Levenshtein,
            Metric::Damerau => MatchKind::Damerau,
            Metric::Jaro => MatchKind::Jaro,
        }
    }
}

#[derive(Debug)]
pub struct UnknownMetric(pub String);

impl fmt::Display for UnknownMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown metric '{}' (expected levenshtein, damerau or jaro)",
            self.0
        )
    }
}

impl std::error::Error for UnknownMetric {}

impl FromStr for Metric {
    type Err = UnknownMetric;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "levenshtein" => Ok(Metric::Levenshtein),
            "damerau" => Ok(Metric::Damerau),
            "jaro" => Ok(Metric::Jaro),
            other => Err(UnknownMetric(other.to_string())),
        }
    }
}

/// One ranked suggestion. Produced fresh per query, never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct SuggestionResult {
    pub word: String,
    /// 0-99; the value 100 is reserved for the exact-match short circuit.
    pub confidence: u8,
    /// Edit distance for the edit metrics, `1 - similarity` for Jaro.
    pub distance: f64,
    pub algorithm: MatchKind,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metric_parses_case_insensitively() {
        assert_eq!("Damerau".parse::<Metric>().unwrap(), Metric::Damerau);
        assert_eq!("jaro".parse::<Metric>().unwrap(), Metric::Jaro);
        assert!("cosine".parse::<Metric>().is_err());
    }

    #[test]
    fn record_accepts_legacy_field_name() {
        let rec: DictionaryRecord =
            serde_json::from_str(r#"{"id":3,"word":"run","braillePattern":"1235","frequency":90,"language":"en"}"#)
                .unwrap();
        assert_eq!(rec.pattern, "1235");
        assert_eq!(rec.frequency, 90);
    }

    #[test]
    fn frequency_defaults_to_zero() {
        let rec: DictionaryRecord =
            serde_json::from_str(r#"{"word":"cat","pattern":"14"}"#).unwrap();
        assert_eq!(rec.frequency, 0);
    }

    #[test]
    fn match_kind_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&MatchKind::Exact).unwrap(), "\"exact\"");
        assert_eq!(MatchKind::Damerau.to_string(), "damerau");
    }
}
