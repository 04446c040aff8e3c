//! Word list loading utilities
//!
//! Reads the tiered dictionary files (`{language}-words.{tier}`) or a plain word file,
//! keeping only purely alphabetic words.

use crate::config::{DictionaryLevel, Language};
use log::{debug, info, warn};
use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::Path;

/// Base list loaded regardless of the selected variants
const BASE_LANGUAGE: &str = "english";

/// Words excluded from every dictionary
const PROFANITY_FILE: &str = "profanities.txt";

/// Whether a word consists only of ASCII letters
///
/// # Examples
/// ```
/// use spellcast_solver::wordlists::loader::is_all_alpha;
///
/// assert!(is_all_alpha("Quartz"));
/// assert!(!is_all_alpha("don't"));
/// assert!(!is_all_alpha(""));
/// ```
#[must_use]
pub fn is_all_alpha(word: &str) -> bool {
    !word.is_empty() && word.bytes().all(|b| b.is_ascii_alphabetic())
}

/// Load words from a file, one per line
///
/// Blank lines and words with non-letter characters are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use spellcast_solver::wordlists::load_from_file;
///
/// let words = load_from_file("dictionary/english-words.10").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(alpha_lines(&content).map(str::to_string).collect())
}

/// Load the tiered dictionary from `dir`
///
/// Every tier up to `level` is read for the base English list and for each variant in
/// `languages`. Words listed in `profanities.txt` are dropped when that file exists.
///
/// # Errors
///
/// Returns an I/O error if a base English tier is missing or unreadable. Missing
/// variant tiers are skipped with a warning.
pub fn load_dictionary<P: AsRef<Path>>(
    dir: P,
    level: DictionaryLevel,
    languages: &[Language],
) -> io::Result<Vec<String>> {
    let dir = dir.as_ref();
    let profanities = load_profanities(dir)?;

    let mut words = Vec::new();
    for tier in level.included_tiers() {
        for language in languages {
            let path = dir.join(format!("{}-words.{tier}", language.file_prefix()));
            match load_from_file(&path) {
                Ok(list) => words.extend(list),
                Err(e) if e.kind() == io::ErrorKind::NotFound => {
                    warn!("Skipping missing word list {}", path.display());
                }
                Err(e) => return Err(e),
            }
        }

        let path = dir.join(format!("{BASE_LANGUAGE}-words.{tier}"));
        let list = load_from_file(&path).map_err(|e| {
            io::Error::new(e.kind(), format!("Failed to read {}: {e}", path.display()))
        })?;
        debug!("Read {} words from {}", list.len(), path.display());
        words.extend(list);
    }

    let before = words.len();
    words.retain(|word| !profanities.contains(word.as_str()));
    info!(
        "Loaded {} words at level {level} ({} filtered)",
        words.len(),
        before - words.len()
    );

    Ok(words)
}

fn load_profanities(dir: &Path) -> io::Result<FxHashSet<String>> {
    let path = dir.join(PROFANITY_FILE);
    match fs::read_to_string(&path) {
        Ok(content) => Ok(alpha_lines(&content).map(str::to_string).collect()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!("No profanity list at {}", path.display());
            Ok(FxHashSet::default())
        }
        Err(e) => Err(e),
    }
}

fn alpha_lines(content: &str) -> impl Iterator<Item = &str> {
    content.lines().map(str::trim).filter(|line| is_all_alpha(line))
}

/// Convert an embedded string slice to owned words
///
/// # Examples
/// ```
/// use spellcast_solver::wordlists::loader::words_from_slice;
/// use spellcast_solver::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    slice
        .iter()
        .filter(|s| is_all_alpha(s))
        .map(|&s| s.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    /// Scratch directory removed on drop
    struct TempDir(PathBuf);

    impl TempDir {
        fn new(name: &str) -> Self {
            let path =
                std::env::temp_dir().join(format!("spellcast-{name}-{}", std::process::id()));
            let _ = fs::remove_dir_all(&path);
            fs::create_dir_all(&path).unwrap();
            Self(path)
        }

        fn write(&self, file: &str, content: &str) {
            fs::write(self.0.join(file), content).unwrap();
        }
    }

    impl Drop for TempDir {
        fn drop(&mut self) {
            let _ = fs::remove_dir_all(&self.0);
        }
    }

    fn level(tier: u8) -> DictionaryLevel {
        DictionaryLevel::new(tier).unwrap()
    }

    #[test]
    fn words_from_slice_skips_non_alpha() {
        let words = words_from_slice(&["cat", "don't", "", "Dog"]);
        assert_eq!(words, vec!["cat", "Dog"]);
    }

    #[test]
    fn load_from_file_filters_lines() {
        let dir = TempDir::new("file");
        dir.write("list.txt", "cat\n\n  dog  \ne-mail\nx2\n");

        let words = load_from_file(dir.0.join("list.txt")).unwrap();
        assert_eq!(words, vec!["cat", "dog"]);
    }

    #[test]
    fn load_from_missing_file_errors() {
        let dir = TempDir::new("missing");
        assert!(load_from_file(dir.0.join("nope.txt")).is_err());
    }

    #[test]
    fn levels_accumulate_tiers() {
        let dir = TempDir::new("tiers");
        dir.write("english-words.10", "cat\n");
        dir.write("english-words.20", "dog\n");
        dir.write("english-words.35", "emu\n");

        let words = load_dictionary(&dir.0, level(20), &[]).unwrap();
        assert_eq!(words, vec!["cat", "dog"]);
    }

    #[test]
    fn variants_added_and_missing_ones_skipped() {
        let dir = TempDir::new("variants");
        dir.write("english-words.10", "color\n");
        dir.write("british-words.10", "colour\n");

        let words = load_dictionary(
            &dir.0,
            level(10),
            &[Language::British, Language::Canadian],
        )
        .unwrap();
        assert!(words.contains(&"colour".to_string()));
        assert!(words.contains(&"color".to_string()));
        assert_eq!(words.len(), 2);
    }

    #[test]
    fn missing_english_tier_errors() {
        let dir = TempDir::new("no-english");
        dir.write("english-words.10", "cat\n");

        let err = load_dictionary(&dir.0, level(20), &[]).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn profanities_filtered() {
        let dir = TempDir::new("profanity");
        dir.write("english-words.10", "cat\nheck\ndog\n");
        dir.write(PROFANITY_FILE, "heck\n");

        let words = load_dictionary(&dir.0, level(10), &[]).unwrap();
        assert_eq!(words, vec!["cat", "dog"]);
    }
}
