// src/bin/simulator.rs
//
// Line-protocol bridge for embedding the engine under a frontend process.
// One command per stdin line, one response per stdout line; diagnostics go
// to stderr so stdout stays protocol-clean.
//
//   QUERY <text>      -> SUGGESTIONS <json array>
//   PATTERN <dots>    -> SUGGESTIONS <json array>
//   METRIC <name>     -> OK metric <name> | ERR ...
//   MAXDIST <n>       -> OK maxdist <n>  | ERR ...
//   LOAD <path>       -> OK loaded <n> words | ERR ...
//   EXIT

use std::io::{self, BufRead, Write};
use std::path::Path;
use std::str::FromStr;

use tracing::info;

use braille_core::{dict, AutocorrectEngine, Metric, DEFAULT_MAX_DISTANCE};

fn main() -> io::Result<()> {
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let mut engine = AutocorrectEngine::new();
    engine.load_dictionary(&dict::builtin_dictionary());
    let mut metric = Metric::default();
    let mut max_distance = DEFAULT_MAX_DISTANCE;

    info!(words = engine.word_count(), "simulator ready");

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line in stdin.lock().lines() {
        let line = line?;
        let (command, rest) = match line.trim().split_once(' ') {
            Some((command, rest)) => (command, rest.trim()),
            None => (line.trim(), ""),
        };

        match command {
            "QUERY" => {
                let suggestions = engine.get_suggestions(rest, max_distance, metric);
                let json = serde_json::to_string(&suggestions)
                    .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
                writeln!(stdout, "SUGGESTIONS {json}")?;
            }
            "PATTERN" => {
                let suggestions = engine.get_pattern_suggestions(rest, max_distance);
                let json = serde_json::to_string(&suggestions)
                    .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
                writeln!(stdout, "SUGGESTIONS {json}")?;
            }
            "METRIC" => match Metric::from_str(rest) {
                Ok(m) => {
                    metric = m;
                    writeln!(stdout, "OK metric {rest}")?;
                }
                Err(e) => writeln!(stdout, "ERR {e}")?,
            },
            "MAXDIST" => match rest.parse::<usize>() {
                Ok(n) => {
                    max_distance = n;
                    writeln!(stdout, "OK maxdist {n}")?;
                }
                Err(_) => writeln!(stdout, "ERR bad max distance '{rest}'")?,
            },
            "LOAD" => match dict::load_records_from_path(Path::new(rest)) {
                Ok(records) => {
                    let kept = engine.load_dictionary(&records);
                    writeln!(stdout, "OK loaded {kept} words")?;
                }
                Err(e) => writeln!(stdout, "ERR {e}")?,
            },
            "EXIT" => break,
            "" => {}
            other => writeln!(stdout, "ERR unknown command '{other}'")?,
        }
        stdout.flush()?;
    }

    info!("simulator shutting down");
    Ok(())
}
