// src/core/metrics.rs
//
// The three distance metrics the suggestion pipeline can run. All are pure,
// operate per `char` (one char = one decoded symbol), and share the same
// edge-case behavior: empty-vs-empty is distance 0 / similarity 1.0, and a
// fully disjoint pair costs the longer length / scores 0.0.

use std::collections::HashMap;

/// Classic edit distance with unit insert/delete/substitute costs.
/// Two-row DP, O(len_a * len_b) time, O(len_b) space.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0usize; b.len() + 1];

    for (i, &ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let cost = usize::from(ca != cb);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}

/// Unrestricted Damerau-Levenshtein: Levenshtein plus a unit-cost
/// transposition, detected with the last-occurrence bookkeeping (`da` holds
/// the last row where each symbol of `a` matched, `db` the last matching
/// column in the current row) over an (n+2)x(m+2) matrix seeded with a
/// `len_a + len_b` sentinel. Still O(len_a * len_b), and unlike the OSA
/// variant it prices non-adjacent transpositions correctly.
pub fn damerau_levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let (n, m) = (a.len(), b.len());
    if n == 0 {
        return m;
    }
    if m == 0 {
        return n;
    }

    let inf = n + m;
    let mut h = vec![vec![inf; m + 2]; n + 2];
    for i in 0..=n {
        h[i + 1][1] = i;
    }
    for j in 0..=m {
        h[1][j + 1] = j;
    }

    let mut da: HashMap<char, usize> = HashMap::new();
    for i in 1..=n {
        let mut db = 0;
        for j in 1..=m {
            let k = *da.get(&b[j - 1]).unwrap_or(&0);
            let l = db;
            let cost = if a[i - 1] == b[j - 1] {
                db = j;
                0
            } else {
                1
            };
            h[i + 1][j + 1] = (h[i][j] + cost)
                .min(h[i + 1][j] + 1)
                .min(h[i][j + 1] + 1)
                .min(h[k][l] + (i - k - 1) + 1 + (j - l - 1));
        }
        da.insert(a[i - 1], i);
    }
    h[n + 1][m + 1]
}

/// Jaro-Winkler similarity in [0, 1]; 1.0 iff the strings are identical.
///
/// Matches are sought inside the half-length window
/// `floor(max(len)/2) - 1` (clamped at 0), first unmatched hit wins so no
/// symbol is counted twice. Transpositions are matched-but-misordered pairs,
/// halved in the Jaro formula. The Winkler prefix bonus (up to 4 leading
/// symbols, weight 0.1) is scaled by `1 - jaro` so the result stays <= 1.0.
pub fn jaro_winkler(a: &str, b: &str) -> f64 {
    if a == b {
        return 1.0;
    }
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let (len_a, len_b) = (a.len(), b.len());
    if len_a == 0 || len_b == 0 {
        return 0.0;
    }

    let window = (len_a.max(len_b) / 2).saturating_sub(1);
    let mut a_matched = vec![false; len_a];
    let mut b_matched = vec![false; len_b];
    let mut matches = 0usize;

    for i in 0..len_a {
        let start = i.saturating_sub(window);
        let end = (i + window + 1).min(len_b);
        for j in start..end {
            if b_matched[j] || a[i] != b[j] {
                continue;
            }
            a_matched[i] = true;
            b_matched[j] = true;
            matches += 1;
            break;
        }
    }

    if matches == 0 {
        return 0.0;
    }

    let mut transpositions = 0usize;
    let mut k = 0usize;
    for i in 0..len_a {
        if !a_matched[i] {
            continue;
        }
        while !b_matched[k] {
            k += 1;
        }
        if a[i] != b[k] {
            transpositions += 1;
        }
        k += 1;
    }

    let m = matches as f64;
    let jaro = (m / len_a as f64 + m / len_b as f64 + (m - transpositions as f64 / 2.0) / m) / 3.0;

    let prefix = a
        .iter()
        .zip(b.iter())
        .take(4)
        .take_while(|(x, y)| x == y)
        .count();

    jaro + 0.1 * prefix as f64 * (1.0 - jaro)
}
