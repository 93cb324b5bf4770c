// completr-cli: shared utilities for CLI tools.

use std::path::PathBuf;
use std::process;

use completr_core::error::CompletrError;
use completr_core::settings::Settings;
use completr_dict::provider::WordListProvider;
use tracing_subscriber::EnvFilter;

/// Environment variable naming a settings JSON file.
pub const SETTINGS_ENV: &str = "COMPLETR_SETTINGS";

/// Environment variable listing word-list files, separated like `PATH`.
pub const WORD_LISTS_ENV: &str = "COMPLETR_WORD_LISTS";

/// Options shared by every tool: where settings and word lists come from.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SourceArgs {
    pub settings_path: Option<String>,
    pub word_lists: Vec<String>,
}

/// Install a stderr `fmt` subscriber filtered by `RUST_LOG` (default `warn`).
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    // A subscriber may already be installed when called twice; keep the first.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Load settings.
///
/// Search order:
/// 1. `settings_path` argument (if provided)
/// 2. `COMPLETR_SETTINGS` environment variable
/// 3. Built-in defaults
pub fn load_settings(settings_path: Option<&str>) -> Result<Settings, CompletrError> {
    let path = settings_path
        .map(PathBuf::from)
        .or_else(|| std::env::var_os(SETTINGS_ENV).map(PathBuf::from));

    let Some(path) = path else {
        tracing::debug!("no settings file, using defaults");
        return Ok(Settings::default());
    };

    let json = std::fs::read_to_string(&path).map_err(|e| CompletrError::io(&path, e))?;
    let settings = Settings::from_json(&json)?;
    tracing::debug!(path = %path.display(), "loaded settings");
    Ok(settings)
}

/// Collect word-list paths from arguments, falling back to
/// `COMPLETR_WORD_LISTS` when none were given.
pub fn word_list_paths(word_lists: &[String]) -> Vec<PathBuf> {
    if !word_lists.is_empty() {
        return word_lists.iter().map(PathBuf::from).collect();
    }
    match std::env::var_os(WORD_LISTS_ENV) {
        Some(value) => std::env::split_paths(&value)
            .filter(|p| !p.as_os_str().is_empty())
            .collect(),
        None => Vec::new(),
    }
}

/// Build a word-list provider from every list in `paths`.
pub fn load_provider(
    paths: &[PathBuf],
    settings: &Settings,
) -> Result<WordListProvider, CompletrError> {
    let mut provider = WordListProvider::new(settings);
    for path in paths {
        provider.add_list_file(path)?;
    }
    Ok(provider)
}

/// Parse `--settings`/`-s` and `--word-list`/`-w` arguments (both also
/// accepted as `--flag=VALUE`).
///
/// Returns `(sources, remaining_args)`.
pub fn parse_source_args(args: &[String]) -> (SourceArgs, Vec<String>) {
    let mut sources = SourceArgs::default();
    let mut remaining = Vec::new();
    let mut skip_next = false;

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        if let Some(val) = arg.strip_prefix("--settings=") {
            sources.settings_path = Some(val.to_string());
        } else if let Some(val) = arg.strip_prefix("--word-list=") {
            sources.word_lists.push(val.to_string());
        } else if matches!(arg.as_str(), "--settings" | "-s" | "--word-list" | "-w") {
            let Some(val) = args.get(i + 1) else {
                fatal(&format!("{arg} requires a value"));
            };
            if arg == "--settings" || arg == "-s" {
                sources.settings_path = Some(val.clone());
            } else {
                sources.word_lists.push(val.clone());
            }
            skip_next = true;
        } else {
            remaining.push(arg.clone());
        }
    }

    (sources, remaining)
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parse_sources_short_and_long() {
        let (sources, rest) =
            parse_source_args(&args(&["-s", "s.json", "-w", "a.txt", "--word-list=b.txt", "foo"]));
        assert_eq!(sources.settings_path.as_deref(), Some("s.json"));
        assert_eq!(sources.word_lists, ["a.txt", "b.txt"]);
        assert_eq!(rest, ["foo"]);
    }

    #[test]
    fn parse_sources_keeps_unknown_flags() {
        let (sources, rest) = parse_source_args(&args(&["--settings=x.json", "-n", "3"]));
        assert_eq!(sources.settings_path.as_deref(), Some("x.json"));
        assert!(sources.word_lists.is_empty());
        assert_eq!(rest, ["-n", "3"]);
    }

    #[test]
    fn explicit_word_lists_win() {
        let paths = word_list_paths(&args(&["one.txt", "two.txt"]));
        assert_eq!(paths, [PathBuf::from("one.txt"), PathBuf::from("two.txt")]);
    }

    #[test]
    fn missing_settings_file_is_io_error() {
        let err = load_settings(Some("/nonexistent/completr/settings.json")).unwrap_err();
        assert!(matches!(err, CompletrError::Io { .. }));
    }

    #[test]
    fn wants_help_detects_flags() {
        assert!(wants_help(&args(&["foo", "-h"])));
        assert!(wants_help(&args(&["--help"])));
        assert!(!wants_help(&args(&["help"])));
    }
}
