// src/bin/engine_test.rs
//
// Replays the error-injection scenarios against the built-in dictionary:
// missing, extra, substituted and transposed symbols, plus the exact and
// case-folding paths. A scenario passes when the expected word surfaces in
// the ranked output of its designated metric; exact scenarios must hit the
// confidence-100 short circuit. Exits nonzero on any failure.

use std::process::ExitCode;
use std::time::Instant;

use braille_core::{dict, AutocorrectEngine, MatchKind, Metric, DEFAULT_MAX_DISTANCE};

struct Scenario {
    name: &'static str,
    input: &'static str,
    expected: &'static str,
    metric: Metric,
    exact: bool,
}

const SCENARIOS: [Scenario; 10] = [
    Scenario { name: "missing last symbol", input: "ca", expected: "cat", metric: Metric::Levenshtein, exact: false },
    Scenario { name: "extra trailing symbol", input: "catt", expected: "cat", metric: Metric::Levenshtein, exact: false },
    Scenario { name: "substituted symbol", input: "cot", expected: "cat", metric: Metric::Levenshtein, exact: false },
    Scenario { name: "adjacent transposition", input: "act", expected: "cat", metric: Metric::Damerau, exact: false },
    Scenario { name: "double substitution", input: "dag", expected: "dog", metric: Metric::Levenshtein, exact: false },
    Scenario { name: "exact input", input: "run", expected: "run", metric: Metric::Levenshtein, exact: true },
    Scenario { name: "missing first symbol", input: "og", expected: "dog", metric: Metric::Levenshtein, exact: false },
    Scenario { name: "extra leading symbol", input: "rrun", expected: "run", metric: Metric::Levenshtein, exact: false },
    Scenario { name: "uppercase input", input: "CAT", expected: "cat", metric: Metric::Levenshtein, exact: true },
    Scenario { name: "double transposition", input: "mujp", expected: "jump", metric: Metric::Damerau, exact: false },
];

fn main() -> ExitCode {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let mut engine = AutocorrectEngine::new();
    engine.load_dictionary(&dict::builtin_dictionary());

    println!("Replaying {} scenarios against {} words\n", SCENARIOS.len(), engine.word_count());
    println!("{:<24} {:<6} {:<8} {:<12} {:>9}  result", "scenario", "input", "expected", "metric", "time");

    let mut failures = 0usize;
    for scenario in &SCENARIOS {
        let start = Instant::now();
        let suggestions = engine.get_suggestions(scenario.input, DEFAULT_MAX_DISTANCE, scenario.metric);
        let elapsed = start.elapsed();

        let passed = if scenario.exact {
            suggestions.first().is_some_and(|top| {
                top.word == scenario.expected
                    && top.confidence == 100
                    && top.algorithm == MatchKind::Exact
            })
        } else {
            suggestions.iter().any(|s| s.word == scenario.expected)
        };
        if !passed {
            failures += 1;
        }

        let top = suggestions
            .first()
            .map(|s| format!("top '{}' ({}%)", s.word, s.confidence))
            .unwrap_or_else(|| "no suggestions".to_string());
        println!(
            "{:<24} {:<6} {:<8} {:<12} {:>7}us  {} {}",
            scenario.name,
            scenario.input,
            scenario.expected,
            format!("{:?}", scenario.metric),
            elapsed.as_micros(),
            if passed { "PASS" } else { "FAIL" },
            top
        );
    }

    println!();
    if failures == 0 {
        println!("All {} scenarios passed.", SCENARIOS.len());
        ExitCode::SUCCESS
    } else {
        println!("{failures} of {} scenarios failed.", SCENARIOS.len());
        ExitCode::FAILURE
    }
}
