// src/input.rs
//
// Input decoder for the six-key chorded layout: QWERTY home-row keys map to
// Braille dots 1-6, a completed chord's dot set maps to one letter. The
// engine never sees raw keys; this module turns chords into the decoded
// symbols its queries are made of.

/// Dot number for a chord key (D W Q K O P -> 1..=6), case-insensitive.
pub fn dot_for_key(key: char) -> Option<u8> {
    match key.to_ascii_lowercase() {
        'd' => Some(1),
        'w' => Some(2),
        'q' => Some(3),
        'k' => Some(4),
        'o' => Some(5),
        'p' => Some(6),
        _ => None,
    }
}

pub fn is_chord_key(key: char) -> bool {
    dot_for_key(key).is_some()
}

/// The 26-letter Braille cell table, keyed by ascending dot string.
pub fn letter_for_dots(dots: &str) -> Option<char> {
    let letter = match dots {
        "1" => 'a',
        "12" => 'b',
        "14" => 'c',
        "145" => 'd',
        "15" => 'e',
        "124" => 'f',
        "1245" => 'g',
        "125" => 'h',
        "24" => 'i',
        "245" => 'j',
        "13" => 'k',
        "123" => 'l',
        "134" => 'm',
        "1345" => 'n',
        "135" => 'o',
        "1234" => 'p',
        "12345" => 'q',
        "1235" => 'r',
        "234" => 's',
        "2345" => 't',
        "136" => 'u',
        "1236" => 'v',
        "2456" => 'w',
        "1346" => 'x',
        "13456" => 'y',
        "1356" => 'z',
        _ => return None,
    };
    Some(letter)
}

/// Inverse of [`letter_for_dots`]; accepts either case.
pub fn dots_for_letter(letter: char) -> Option<&'static str> {
    let dots = match letter.to_ascii_lowercase() {
        'a' => "1",
        'b' => "12",
        'c' => "14",
        'd' => "145",
        'e' => "15",
        'f' => "124",
        'g' => "1245",
        'h' => "125",
        'i' => "24",
        'j' => "245",
        'k' => "13",
        'l' => "123",
        'm' => "134",
        'n' => "1345",
        'o' => "135",
        'p' => "1234",
        'q' => "12345",
        'r' => "1235",
        's' => "234",
        't' => "2345",
        'u' => "136",
        'v' => "1236",
        'w' => "2456",
        'x' => "1346",
        'y' => "13456",
        'z' => "1356",
        _ => return None,
    };
    Some(dots)
}

/// Encodes a word as per-letter dot codes joined by spaces (display form;
/// dictionary load strips the spaces again). Letters without a cell are
/// skipped.
pub fn encode_word(word: &str) -> String {
    word.chars()
        .filter_map(dots_for_letter)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Strips all whitespace from an encoded pattern.
pub fn normalize_pattern(pattern: &str) -> String {
    pattern.split_whitespace().collect()
}

/// Accumulates the dots of one in-progress chord. Dots are kept as an
/// ordered set so `pattern()` always yields the canonical ascending form
/// regardless of press order.
#[derive(Debug, Clone, Default)]
pub struct ChordBuilder {
    dots: Vec<u8>,
}

impl ChordBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a chord key press; returns false for non-chord keys.
    pub fn press_key(&mut self, key: char) -> bool {
        match dot_for_key(key) {
            Some(dot) => {
                if let Err(pos) = self.dots.binary_search(&dot) {
                    self.dots.insert(pos, dot);
                }
                true
            }
            None => false,
        }
    }

    /// Adds the dot if absent, removes it if present. Returns false for
    /// non-chord keys. The interactive demo uses this for press-to-toggle.
    pub fn toggle_key(&mut self, key: char) -> bool {
        match dot_for_key(key) {
            Some(dot) => {
                match self.dots.binary_search(&dot) {
                    Ok(pos) => {
                        self.dots.remove(pos);
                    }
                    Err(pos) => self.dots.insert(pos, dot),
                }
                true
            }
            None => false,
        }
    }

    pub fn dots(&self) -> &[u8] {
        &self.dots
    }

    /// Ascending dot string, e.g. dots {1,4} -> "14".
    pub fn pattern(&self) -> String {
        self.dots.iter().map(|d| char::from(b'0' + d)).collect()
    }

    /// The letter this chord decodes to, if the dot set is a valid cell.
    pub fn letter(&self) -> Option<char> {
        letter_for_dots(&self.pattern())
    }

    pub fn is_empty(&self) -> bool {
        self.dots.is_empty()
    }

    pub fn clear(&mut self) {
        self.dots.clear();
    }
}
