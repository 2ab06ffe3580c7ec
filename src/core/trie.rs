// src/core/trie.rs
use std::collections::HashMap;

#[derive(Debug, Clone)]
struct Terminal {
    word: String,
    frequency: u64,
}

#[derive(Debug, Clone, Default)]
struct Node {
    children: HashMap<char, usize>,
    terminal: Option<Terminal>,
}

/// One completed word found under a prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixMatch {
    pub word: String,
    /// The full trie key of the terminal, prefix included.
    pub key: String,
    pub frequency: u64,
}

/// Arena-backed prefix index over symbol sequences. Node 0 is the root
/// (empty sequence); children are reachable only through their parent, so
/// the structure is a strict tree and dropping the arena drops everything.
#[derive(Debug, Clone)]
pub struct WordTrie {
    nodes: Vec<Node>,
    terminals: usize,
}

impl WordTrie {
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::default()],
            terminals: 0,
        }
    }

    /// Walks/creates one node per symbol of `key` and marks the final node
    /// terminal with `word`/`frequency`. Re-inserting the same key
    /// overwrites the terminal (last write wins).
    pub fn insert(&mut self, word: &str, key: &str, frequency: u64) {
        let mut node_idx = 0;
        for symbol in key.chars() {
            let next_idx = if let Some(&id) = self.nodes[node_idx].children.get(&symbol) {
                id
            } else {
                let new_node_id = self.nodes.len();
                self.nodes.push(Node::default());
                self.nodes[node_idx].children.insert(symbol, new_node_id);
                new_node_id
            };
            node_idx = next_idx;
        }
        if self.nodes[node_idx].terminal.is_none() {
            self.terminals += 1;
        }
        self.nodes[node_idx].terminal = Some(Terminal {
            word: word.to_string(),
            frequency,
        });
    }

    /// Exact lookup: the whole path must exist and end on a terminal node.
    /// A path that merely passes through (non-terminal) is not a hit.
    pub fn lookup_exact(&self, key: &str) -> Option<&str> {
        let node_idx = self.walk(key)?;
        self.nodes[node_idx]
            .terminal
            .as_ref()
            .map(|t| t.word.as_str())
    }

    /// Collects every terminal under `prefix`, each with its complete
    /// reconstructed key, ordered by frequency descending. The sort is
    /// stable over a DFS that visits children in ascending symbol order, so
    /// equal frequencies tie-break lexicographically by key.
    pub fn collect_prefix(&self, prefix: &str) -> Vec<PrefixMatch> {
        let Some(node_idx) = self.walk(prefix) else {
            return Vec::new();
        };
        let mut results = Vec::new();
        let mut key = String::from(prefix);
        self.dfs(node_idx, &mut key, &mut results);
        results.sort_by(|a, b| b.frequency.cmp(&a.frequency));
        results
    }

    /// Number of terminal words in the index.
    pub fn len(&self) -> usize {
        self.terminals
    }

    pub fn is_empty(&self) -> bool {
        self.terminals == 0
    }

    fn walk(&self, key: &str) -> Option<usize> {
        let mut node_idx = 0;
        for symbol in key.chars() {
            node_idx = *self.nodes[node_idx].children.get(&symbol)?;
        }
        Some(node_idx)
    }

    fn dfs(&self, node_idx: usize, key: &mut String, results: &mut Vec<PrefixMatch>) {
        let node = &self.nodes[node_idx];
        if let Some(terminal) = &node.terminal {
            results.push(PrefixMatch {
                word: terminal.word.clone(),
                key: key.clone(),
                frequency: terminal.frequency,
            });
        }
        let mut symbols: Vec<char> = node.children.keys().copied().collect();
        symbols.sort_unstable();
        for symbol in symbols {
            let child_idx = node.children[&symbol];
            key.push(symbol);
            self.dfs(child_idx, key, results);
            key.pop();
        }
    }
}

impl Default for WordTrie {
    fn default() -> Self {
        Self::new()
    }
}
