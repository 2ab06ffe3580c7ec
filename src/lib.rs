// src/lib.rs

pub mod core;
pub mod dict;
pub mod input;

pub use crate::core::engine::AutocorrectEngine;
pub use crate::core::types::{DictionaryRecord, MatchKind, Metric, SuggestionResult};
pub use crate::core::{DEFAULT_MAX_DISTANCE, MAX_SUGGESTIONS, PREFIX_LIMIT};
