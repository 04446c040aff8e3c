//! Word lists for SpellCast solving
//!
//! A small embedded dictionary for zero-setup use, plus loaders for the tiered
//! word list files.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
pub use loader::{load_dictionary, load_from_file};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn words_are_lowercase_letters() {
        for &word in WORDS {
            assert!(!word.is_empty());
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn common_words_present() {
        for word in ["cat", "the", "word"] {
            assert!(WORDS.contains(&word), "'{word}' missing");
        }
    }
}
