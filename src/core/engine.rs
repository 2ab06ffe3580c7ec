// src/core/engine.rs
use std::collections::{BTreeMap, HashSet};

use tracing::{debug, warn};

use crate::core::metrics::{damerau_levenshtein, jaro_winkler, levenshtein};
use crate::core::trie::WordTrie;
use crate::core::types::{DictEntry, DictionaryRecord, MatchKind, Metric, SuggestionResult};
use crate::core::{MAX_SUGGESTIONS, PREFIX_LIMIT};

/// The suggestion engine: a word-keyed prefix index plus a flat table of
/// entries, both rebuilt wholesale on every dictionary load.
///
/// An explicitly constructed instance owned by the caller; `&mut self` for
/// loads and `&self` for queries gives the single-writer/many-readers
/// discipline for free. Callers sharing one instance across threads wrap it
/// in an `RwLock`.
pub struct AutocorrectEngine {
    trie: WordTrie,
    /// Canonical lowercase word -> entry. A `BTreeMap` keeps full scans in a
    /// deterministic (lexicographic) order, which makes ranking ties stable.
    dictionary: BTreeMap<String, DictEntry>,
}

impl AutocorrectEngine {
    pub fn new() -> Self {
        Self {
            trie: WordTrie::new(),
            dictionary: BTreeMap::new(),
        }
    }

    /// Rebuilds the index and the table from `records`, then swaps both in.
    /// A failed or partial build is never observable from a reader.
    ///
    /// Words are lowercased and trimmed, patterns lose all whitespace.
    /// Records left with an empty word or pattern are skipped with a warning
    /// so one bad row cannot take down a reload; duplicates resolve to the
    /// last record. Returns the number of words kept.
    pub fn load_dictionary(&mut self, records: &[DictionaryRecord]) -> usize {
        let mut trie = WordTrie::new();
        let mut table: BTreeMap<String, DictEntry> = BTreeMap::new();
        let mut skipped = 0usize;

        for record in records {
            let word = record.word.trim().to_lowercase();
            let pattern: String = record.pattern.split_whitespace().collect();
            if word.is_empty() || pattern.is_empty() {
                skipped += 1;
                warn!(
                    word = %record.word,
                    pattern = %record.pattern,
                    "skipping malformed dictionary record"
                );
                continue;
            }
            trie.insert(&word, &word, record.frequency);
            table.insert(
                word,
                DictEntry {
                    pattern,
                    frequency: record.frequency,
                },
            );
        }

        self.trie = trie;
        self.dictionary = table;
        debug!(words = self.dictionary.len(), skipped, "dictionary loaded");
        self.dictionary.len()
    }

    /// Ranked suggestions for a decoded-text query.
    ///
    /// Pipeline: exact match short-circuits with the confidence-100
    /// sentinel; otherwise up to three prefix completions, then a full scan
    /// under the selected metric with `0 < distance <= max_distance`.
    /// Merged results are deduplicated by word (first stage wins), sorted by
    /// confidence descending then distance ascending, and capped at five.
    pub fn get_suggestions(
        &self,
        query: &str,
        max_distance: usize,
        metric: Metric,
    ) -> Vec<SuggestionResult> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Vec::new();
        }

        if let Some(word) = self.trie.lookup_exact(&query) {
            return vec![SuggestionResult {
                word: word.to_string(),
                confidence: 100,
                distance: 0.0,
                algorithm: MatchKind::Exact,
            }];
        }

        let mut suggestions = Vec::new();
        let query_len = query.chars().count();

        for m in self.trie.collect_prefix(&query).into_iter().take(PREFIX_LIMIT) {
            let completion = m.key.chars().count() - query_len;
            // Clamped at 0 so very long completions rank last instead of
            // wrapping; they stay visible either way.
            let confidence = (90i64 - 5 * completion as i64).clamp(0, 99) as u8;
            suggestions.push(SuggestionResult {
                word: m.word,
                confidence,
                distance: completion as f64,
                algorithm: MatchKind::Prefix,
            });
        }

        let bound = max_distance as f64;
        for (word, entry) in &self.dictionary {
            let (distance, base) = match metric {
                Metric::Levenshtein => {
                    let d = levenshtein(&query, word);
                    (d as f64, 100.0 - 15.0 * d as f64)
                }
                Metric::Damerau => {
                    let d = damerau_levenshtein(&query, word);
                    (d as f64, 100.0 - 20.0 * d as f64)
                }
                Metric::Jaro => {
                    let similarity = jaro_winkler(&query, word);
                    (1.0 - similarity, similarity * 100.0)
                }
            };
            // Distance 0 already went through the exact short circuit.
            if distance <= 0.0 || distance > bound {
                continue;
            }
            suggestions.push(SuggestionResult {
                word: word.clone(),
                confidence: boosted_confidence(base, entry.frequency),
                distance,
                algorithm: metric.kind(),
            });
        }

        let ranked = Self::rank(suggestions);
        debug!(query = %query, metric = ?metric, results = ranked.len(), "query served");
        ranked
    }

    /// Ranked suggestions for a raw encoded-pattern query: plain Levenshtein
    /// over the stored dot patterns. There is no exact short circuit on this
    /// side, so a perfect pattern match surfaces as a `Pattern` result
    /// capped at 99. Scoring, sorting and the cap of five match the fuzzy
    /// stage of `get_suggestions`.
    pub fn get_pattern_suggestions(
        &self,
        pattern: &str,
        max_distance: usize,
    ) -> Vec<SuggestionResult> {
        let pattern: String = pattern.split_whitespace().collect();
        if pattern.is_empty() {
            return Vec::new();
        }

        let mut suggestions = Vec::new();
        for (word, entry) in &self.dictionary {
            let d = levenshtein(&pattern, &entry.pattern);
            if d > max_distance {
                continue;
            }
            suggestions.push(SuggestionResult {
                word: word.clone(),
                confidence: boosted_confidence(100.0 - 20.0 * d as f64, entry.frequency),
                distance: d as f64,
                algorithm: MatchKind::Pattern,
            });
        }

        let ranked = Self::rank(suggestions);
        debug!(pattern = %pattern, results = ranked.len(), "pattern query served");
        ranked
    }

    /// Number of words currently loaded.
    pub fn word_count(&self) -> usize {
        self.dictionary.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dictionary.is_empty()
    }

    /// Dedup by word keeping the first-seen occurrence (prefix-stage entries
    /// were pushed first, so they win over fuzzy hits for the same word),
    /// stable-sort by confidence descending then distance ascending, cap.
    fn rank(mut suggestions: Vec<SuggestionResult>) -> Vec<SuggestionResult> {
        let mut seen = HashSet::new();
        suggestions.retain(|s| seen.insert(s.word.clone()));
        suggestions.sort_by(|a, b| {
            b.confidence
                .cmp(&a.confidence)
                .then(a.distance.total_cmp(&b.distance))
        });
        suggestions.truncate(MAX_SUGGESTIONS);
        suggestions
    }
}

impl Default for AutocorrectEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Frequency boost: `min(99, base + 2 ln(frequency + 1))`, rounded to the
/// nearest integer. The cap keeps every fuzzy result below the exact-match
/// sentinel.
fn boosted_confidence(base: f64, frequency: u64) -> u8 {
    let boosted = (base.max(0.0) + 2.0 * ((frequency + 1) as f64).ln()).min(99.0);
    boosted.round() as u8
}
