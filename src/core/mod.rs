// src/core/mod.rs

pub mod engine;
pub mod metrics;
pub mod trie;
pub mod types;

/// Hard cap on the number of suggestions returned from any query.
pub const MAX_SUGGESTIONS: usize = 5;

/// Cap on the prefix-completion stage of the pipeline.
pub const PREFIX_LIMIT: usize = 3;

/// Default edit-distance bound when the caller has no opinion.
pub const DEFAULT_MAX_DISTANCE: usize = 2;
