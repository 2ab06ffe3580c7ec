// src/bin/main.rs
//
// Interactive chorded-typing demo. D/W/Q/K/O/P toggle dots 1-6, Space
// completes the chord into a letter, digits 1-5 pick a suggestion, Tab
// accepts the top one, Esc quits.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::str::FromStr;

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::style::Stylize;
use crossterm::{cursor, execute, terminal};

use braille_core::input::ChordBuilder;
use braille_core::{dict, AutocorrectEngine, Metric, SuggestionResult, DEFAULT_MAX_DISTANCE};

struct Options {
    dict_path: Option<PathBuf>,
    metric: Metric,
    max_distance: usize,
}

fn parse_args() -> Result<Options, String> {
    let mut options = Options {
        dict_path: None,
        metric: Metric::default(),
        max_distance: DEFAULT_MAX_DISTANCE,
    };
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--dict" => {
                let path = args.next().ok_or("--dict needs a path")?;
                options.dict_path = Some(PathBuf::from(path));
            }
            "--metric" => {
                let name = args.next().ok_or("--metric needs a name")?;
                options.metric = Metric::from_str(&name).map_err(|e| e.to_string())?;
            }
            "--max-distance" => {
                let n = args.next().ok_or("--max-distance needs a number")?;
                options.max_distance = n
                    .parse()
                    .map_err(|_| format!("bad --max-distance '{n}'"))?;
            }
            other => return Err(format!("unknown argument '{other}'")),
        }
    }
    Ok(options)
}

fn main() -> ExitCode {
    let options = match parse_args() {
        Ok(options) => options,
        Err(e) => {
            eprintln!("braille_engine: {e}");
            eprintln!("usage: braille_engine [--dict <path>] [--metric <name>] [--max-distance <n>]");
            return ExitCode::from(2);
        }
    };

    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let records = match &options.dict_path {
        Some(path) => match dict::load_records_from_path(path) {
            Ok(records) => records,
            Err(e) => {
                eprintln!("braille_engine: cannot load {}: {e}", path.display());
                return ExitCode::FAILURE;
            }
        },
        None => dict::builtin_dictionary(),
    };

    let mut engine = AutocorrectEngine::new();
    engine.load_dictionary(&records);

    if let Err(e) = run(&engine, &options) {
        let _ = terminal::disable_raw_mode();
        eprintln!("braille_engine: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn run(engine: &AutocorrectEngine, options: &Options) -> io::Result<()> {
    terminal::enable_raw_mode()?;

    let mut committed: Vec<String> = Vec::new();
    let mut query = String::new();
    let mut chord = ChordBuilder::new();
    let mut notice = String::new();

    loop {
        let suggestions = engine.get_suggestions(&query, options.max_distance, options.metric);
        draw(engine, options, &committed, &query, &chord, &suggestions, &notice)?;
        notice.clear();

        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        match key.code {
            KeyCode::Esc => break,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => break,
            KeyCode::Char(c) if braille_core::input::is_chord_key(c) => {
                chord.toggle_key(c);
            }
            KeyCode::Char(' ') => {
                if chord.is_empty() {
                    continue;
                }
                match chord.letter() {
                    Some(letter) => query.push(letter),
                    None => notice = format!("dots {} are not a letter cell", chord.pattern()),
                }
                chord.clear();
            }
            KeyCode::Char(c @ '1'..='5') => {
                let index = c as usize - '1' as usize;
                if let Some(s) = suggestions.get(index) {
                    committed.push(s.word.clone());
                    query.clear();
                    chord.clear();
                }
            }
            KeyCode::Tab | KeyCode::Enter => {
                if let Some(top) = suggestions.first() {
                    committed.push(top.word.clone());
                } else if !query.is_empty() {
                    committed.push(query.clone());
                }
                query.clear();
                chord.clear();
            }
            KeyCode::Backspace => {
                if !chord.is_empty() {
                    chord.clear();
                } else {
                    query.pop();
                }
            }
            _ => {}
        }
    }

    terminal::disable_raw_mode()?;
    println!();
    Ok(())
}

fn draw(
    engine: &AutocorrectEngine,
    options: &Options,
    committed: &[String],
    query: &str,
    chord: &ChordBuilder,
    suggestions: &[SuggestionResult],
    notice: &str,
) -> io::Result<()> {
    let mut stdout = io::stdout();
    execute!(
        stdout,
        terminal::Clear(terminal::ClearType::All),
        cursor::MoveTo(0, 0)
    )?;

    print!("Braille Autocorrect Demo  ({} words, metric {:?}, max distance {})\r\n",
        engine.word_count(), options.metric, options.max_distance);
    print!("Keys: D W Q K O P toggle dots | Space = letter | 1-5 select | Tab top | Esc quit\r\n");
    print!("---------------------------------------------------------------\r\n");
    print!("Text: {}\r\n", committed.join(" "));
    print!("Word: [{}]   chord dots: {}\r\n", query, chord.pattern());
    if !notice.is_empty() {
        print!("{}\r\n", notice.red());
    }

    if suggestions.is_empty() {
        print!("\r\nNo suggestions.\r\n");
    } else {
        print!("\r\nSuggestions:\r\n");
        for (i, s) in suggestions.iter().enumerate() {
            let line = format!(
                "  {}: {}  {}%  d={:.2}  [{}]",
                i + 1,
                s.word,
                s.confidence,
                s.distance,
                s.algorithm
            );
            let styled = match s.confidence {
                90..=100 => line.green(),
                70..=89 => line.yellow(),
                50..=69 => line.dark_yellow(),
                _ => line.red(),
            };
            print!("{}\r\n", styled);
        }
    }
    stdout.flush()
}
