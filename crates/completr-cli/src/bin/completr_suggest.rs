// completr-suggest: Print completions for partial words.
//
// Loads one or more word lists, then prints suggestions for each query given
// on the command line, or for each line read from stdin.
//
// Usage:
//   completr-suggest [-s SETTINGS] [-w WORDLIST]... [OPTIONS] [QUERY...]
//
// Options:
//   -s, --settings PATH         Settings JSON file
//   -w, --word-list PATH        Word list, one word per line (repeatable)
//   -m, --mode LABEL            Insertion mode: exact, ignore-case, append
//       --ignore-diacritics     Match words regardless of diacritics
//   -t, --min-trigger N         Minimum query length
//   -n, --max-suggestions N     Maximum number of suggestions (0: unlimited)
//   -h, --help                  Print help

use std::io::{self, BufRead, Write};

use completr_core::enums::InsertionMode;
use completr_core::policy::Policy;
use completr_core::settings::Settings;
use completr_dict::provider::{DictionaryProvider, WordListProvider, suggest_all};

fn print_help() {
    println!("completr-suggest: Print completions for partial words.");
    println!();
    println!("Usage: completr-suggest [-s SETTINGS] [-w WORDLIST]... [OPTIONS] [QUERY...]");
    println!();
    println!("If QUERY arguments are given, suggests for each query.");
    println!("Otherwise reads queries from stdin (one per line).");
    println!();
    println!("Options:");
    println!("  -s, --settings PATH        Settings JSON file (or COMPLETR_SETTINGS)");
    println!("  -w, --word-list PATH       Word list file, repeatable (or COMPLETR_WORD_LISTS)");
    println!("  -m, --mode LABEL           Insertion mode: exact, ignore-case, append");
    println!("      --ignore-diacritics    Match words regardless of diacritics");
    println!("  -t, --min-trigger N        Minimum query length");
    println!("  -n, --max-suggestions N    Maximum number of suggestions (0: unlimited)");
    println!("  -h, --help                 Print this help");
}

fn parse_number(value: &str, flag: &str) -> usize {
    value
        .parse()
        .unwrap_or_else(|_| completr_cli::fatal(&format!("invalid number for {flag}")))
}

/// Apply per-run overrides to the loaded settings; returns the queries.
fn apply_overrides(args: &[String], settings: &mut Settings) -> Vec<String> {
    let mut queries = Vec::new();
    let mut skip_next = false;

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        match arg.as_str() {
            "--ignore-diacritics" => settings.ignore_diacritics_when_filtering = true,
            "-m" | "--mode" | "-t" | "--min-trigger" | "-n" | "--max-suggestions" => {
                let Some(value) = args.get(i + 1) else {
                    completr_cli::fatal(&format!("{arg} requires a value"));
                };
                match arg.as_str() {
                    "-m" | "--mode" => {
                        settings.word_insertion_mode = value
                            .parse::<InsertionMode>()
                            .unwrap_or_else(|e| completr_cli::fatal(&e.to_string()));
                    }
                    "-t" | "--min-trigger" => {
                        settings.min_word_trigger_length = parse_number(value, arg);
                    }
                    _ => settings.max_suggestions = parse_number(value, arg),
                }
                skip_next = true;
            }
            other if other.starts_with('-') && other.len() > 1 => {
                completr_cli::fatal(&format!("unknown option: {other}"));
            }
            _ => queries.push(arg.clone()),
        }
    }

    queries
}

fn print_suggestions(
    query: &str,
    provider: &WordListProvider,
    policy: &Policy,
    limit: Option<usize>,
    out: &mut impl Write,
) -> io::Result<()> {
    let providers: [&dyn DictionaryProvider; 1] = [provider];
    let suggestions = suggest_all(&providers, query, policy, limit);
    if suggestions.is_empty() {
        return writeln!(out, "{query}: (no suggestions)");
    }
    writeln!(out, "{query}:")?;
    for s in &suggestions {
        writeln!(out, "  {}", s.insertion_text)?;
    }
    Ok(())
}

fn main() {
    completr_cli::init_logging();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if completr_cli::wants_help(&args) {
        print_help();
        return;
    }

    let (sources, args) = completr_cli::parse_source_args(&args);
    let mut settings = completr_cli::load_settings(sources.settings_path.as_deref())
        .unwrap_or_else(|e| completr_cli::fatal(&e.to_string()));
    let queries = apply_overrides(&args, &mut settings);

    let paths = completr_cli::word_list_paths(&sources.word_lists);
    if paths.is_empty() {
        completr_cli::fatal("no word lists given (use -w PATH or COMPLETR_WORD_LISTS)");
    }
    let provider = completr_cli::load_provider(&paths, &settings)
        .unwrap_or_else(|e| completr_cli::fatal(&e.to_string()));
    tracing::info!(words = provider.word_count(), lists = provider.list_count(), "ready");

    let policy = Policy::from_settings(&settings);
    let limit = settings.suggestion_limit();

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    let result = if queries.is_empty() {
        let stdin = io::stdin();
        stdin.lock().lines().try_for_each(|line| {
            let line = line?;
            let query = line.trim();
            if query.is_empty() {
                return Ok(());
            }
            print_suggestions(query, &provider, &policy, limit, &mut out)
        })
    } else {
        queries
            .iter()
            .try_for_each(|query| print_suggestions(query, &provider, &policy, limit, &mut out))
    };

    if let Err(e) = result.and_then(|()| out.flush()) {
        completr_cli::fatal(&format!("I/O error: {e}"));
    }
}
