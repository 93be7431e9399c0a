//! Command implementations for the spel CLI.

use log::{debug, info};

use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::Result;
use crate::spelling::*;
use crate::util::path::expand_home;

/// Process exit code when every word checked out.
pub const EXIT_CLEAN: i32 = 0;
/// Process exit code when `files` found misspellings.
pub const EXIT_MISSPELLED: i32 = 1;

/// Execute a CLI command and return the process exit code.
pub fn execute_command(args: SpelArgs) -> Result<i32> {
    match &args.command {
        Command::Check(check_args) => check_words(check_args, &args),
        Command::Files(files_args) => check_files(files_args, &args),
        Command::Ignore(ignore_args) => manage_ignore(ignore_args, &args),
    }
}

/// Load the dictionary selected on the command line.
pub fn load_dictionary(args: &SpelArgs) -> Result<Dictionary> {
    match &args.dictionary {
        Some(path) => {
            info!("Loading dictionary from {}", path.display());
            Dictionary::load_from_file(path)
        }
        None => Ok(BuiltinDictionary::english()),
    }
}

/// Combine the ignore file with the `--ignore` list.
pub fn load_ignore_set(args: &SpelArgs) -> IgnoreSet {
    let mut ignore = IgnoreSet::load_file(&args.ignore_file);
    if let Some(list) = &args.ignore {
        ignore.merge(IgnoreSet::from_list(list));
    }
    debug!("{} ignored words", ignore.len());
    ignore
}

/// Build the engine shared by `check` and `files`.
pub fn build_engine(args: &SpelArgs, config: SuggestionConfig) -> Result<SuggestionEngine> {
    let dictionary = load_dictionary(args)?;
    let ignore = load_ignore_set(args);
    Ok(SuggestionEngine::with_config(dictionary, ignore, config))
}

/// Check words given on the command line.
fn check_words(args: &CheckArgs, cli_args: &SpelArgs) -> Result<i32> {
    let config = SuggestionConfig {
        top_n: usize::from(args.top),
    };
    debug!("top_n: {}", config.top_n);
    let engine = build_engine(cli_args, config)?;

    let words = args
        .words
        .iter()
        .map(|word| -> Result<WordReport> {
            Ok(WordReport::new(word.clone(), engine.check(word)?))
        })
        .collect::<Result<Vec<_>>>()?;

    output_result(&CheckReport { words }, cli_args)?;
    Ok(EXIT_CLEAN)
}

/// Check the words in text files.
fn check_files(args: &FilesArgs, cli_args: &SpelArgs) -> Result<i32> {
    let engine = build_engine(cli_args, SuggestionConfig::default())?;
    let checker = FileChecker::new(&engine);

    let mut report = FilesReport {
        misspellings: Vec::new(),
        skipped: Vec::new(),
    };
    for file in checker.check_files(&args.files) {
        match file.error {
            Some(error) => report.skipped.push(SkippedFile {
                path: file.path,
                error,
            }),
            None => report.misspellings.extend(file.misspellings),
        }
    }
    info!(
        "Found {} misspelling(s) in {} file(s)",
        report.misspellings.len(),
        args.files.len()
    );

    output_result(&report, cli_args)?;

    if report.misspellings.is_empty() || args.no_fail {
        Ok(EXIT_CLEAN)
    } else {
        Ok(EXIT_MISSPELLED)
    }
}

/// Append to or list the ignore file.
fn manage_ignore(args: &IgnoreArgs, cli_args: &SpelArgs) -> Result<i32> {
    let path = expand_home(&cli_args.ignore_file);

    let report = if args.words.is_empty() {
        let words = IgnoreSet::load_file(&path)
            .sorted_words()
            .into_iter()
            .map(str::to_string)
            .collect();
        IgnoreReport::Listed { path, words }
    } else {
        let words = IgnoreSet::append_to_file(&path, &args.words)?;
        IgnoreReport::Added { path, words }
    };

    output_result(&report, cli_args)?;
    Ok(EXIT_CLEAN)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    fn parse(dir: &TempDir, rest: &[&str]) -> SpelArgs {
        let ignore_file = dir.path().join("ignore");
        let mut argv = vec![
            "spel".to_string(),
            "--quiet".to_string(),
            "-I".to_string(),
            ignore_file.to_string_lossy().into_owned(),
        ];
        argv.extend(rest.iter().map(|s| s.to_string()));
        SpelArgs::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_build_engine_with_custom_dictionary() {
        let dir = TempDir::new().unwrap();
        let dict_path = dir.path().join("words.txt");
        fs::write(&dict_path, "alpha\nbeta\n").unwrap();
        fs::write(dir.path().join("ignore"), "gamma\n").unwrap();

        let args = parse(
            &dir,
            &[
                "--dictionary",
                dict_path.to_str().unwrap(),
                "--ignore",
                "delta",
                "check",
                "alpha",
            ],
        );
        let engine = build_engine(&args, SuggestionConfig::default()).unwrap();

        assert_eq!(engine.dictionary().word_count(), 2);
        assert!(engine.is_correct("beta"));
        assert!(engine.is_correct("gamma"));
        assert!(engine.is_correct("delta"));
        assert!(!engine.is_correct("epsilon"));
    }

    #[test]
    fn test_missing_dictionary_is_an_error() {
        let dir = TempDir::new().unwrap();
        let args = parse(&dir, &["-d", "/nonexistent/spel/words", "check", "word"]);
        assert!(execute_command(args).is_err());
    }

    #[test]
    fn test_files_exit_code() {
        let dir = TempDir::new().unwrap();
        let text = dir.path().join("text.txt");
        fs::write(&text, "the world\n").unwrap();
        let args = parse(&dir, &["files", text.to_str().unwrap()]);
        assert_eq!(execute_command(args).unwrap(), EXIT_CLEAN);

        fs::write(&text, "the wrold\n").unwrap();
        let args = parse(&dir, &["files", text.to_str().unwrap()]);
        assert_eq!(execute_command(args).unwrap(), EXIT_MISSPELLED);

        let args = parse(&dir, &["files", "--no-fail", text.to_str().unwrap()]);
        assert_eq!(execute_command(args).unwrap(), EXIT_CLEAN);
    }

    #[test]
    fn test_ignore_command_appends() {
        let dir = TempDir::new().unwrap();
        let args = parse(&dir, &["ignore", "wrold", "Spel"]);
        assert_eq!(execute_command(args).unwrap(), EXIT_CLEAN);

        let contents = fs::read_to_string(dir.path().join("ignore")).unwrap();
        assert_eq!(contents, "wrold\nspel\n");

        let text = dir.path().join("text.txt");
        fs::write(&text, "the wrold\n").unwrap();
        let args = parse(&dir, &["files", text.to_str().unwrap()]);
        assert_eq!(execute_command(args).unwrap(), EXIT_CLEAN);
    }

    #[test]
    fn test_check_empty_word_fails() {
        let dir = TempDir::new().unwrap();
        let args = parse(&dir, &["check", ""]);
        assert!(execute_command(args).is_err());
    }
}
