//! Solver configuration
//!
//! Plain values chosen at start-up: how many results to keep, how large a dictionary
//! to load, and how the board graph and search behave.

use crate::core::AdjacencyPolicy;
use std::fmt;
use std::time::Duration;

/// Number of ranked results kept by default
pub const DEFAULT_TOP_N: usize = 5;

/// Inclusiveness tier of the word list
///
/// Each tier adds rarer words on top of all lower tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct DictionaryLevel(u8);

impl DictionaryLevel {
    /// Every tier shipped with the word lists, smallest first
    pub const TIERS: [u8; 8] = [10, 20, 35, 40, 50, 55, 60, 70];

    /// The largest tier
    pub const MAX: Self = Self(70);

    /// Create a level from a tier number
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidLevel` for numbers that are not a tier.
    ///
    /// # Examples
    /// ```
    /// use spellcast_solver::config::DictionaryLevel;
    ///
    /// let level = DictionaryLevel::new(35).unwrap();
    /// assert_eq!(level.included_tiers().collect::<Vec<_>>(), vec![10, 20, 35]);
    /// assert!(DictionaryLevel::new(30).is_err());
    /// ```
    pub fn new(tier: u8) -> Result<Self, ConfigError> {
        if Self::TIERS.contains(&tier) {
            Ok(Self(tier))
        } else {
            Err(ConfigError::InvalidLevel(tier))
        }
    }

    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Tiers at or below this level, smallest first
    pub fn included_tiers(self) -> impl Iterator<Item = u8> {
        Self::TIERS.into_iter().filter(move |&tier| tier <= self.0)
    }
}

impl Default for DictionaryLevel {
    fn default() -> Self {
        Self::MAX
    }
}

impl fmt::Display for DictionaryLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Regional variant word lists loaded on top of the base English list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    American,
    Australian,
    British,
    Canadian,
}

impl Language {
    /// File name prefix used by the word list files
    #[must_use]
    pub const fn file_prefix(self) -> &'static str {
        match self {
            Self::American => "american",
            Self::Australian => "australian",
            Self::British => "british",
            Self::Canadian => "canadian",
        }
    }

    /// Create a language from its name
    ///
    /// # Errors
    /// Returns `ConfigError::UnknownLanguage` for unsupported names.
    pub fn from_name(name: &str) -> Result<Self, ConfigError> {
        match name.to_ascii_lowercase().as_str() {
            "american" | "us" => Ok(Self::American),
            "australian" | "au" => Ok(Self::Australian),
            "british" | "uk" | "gb" => Ok(Self::British),
            "canadian" | "ca" => Ok(Self::Canadian),
            _ => Err(ConfigError::UnknownLanguage(name.to_string())),
        }
    }
}

/// Error type for invalid configuration values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidLevel(u8),
    UnknownLanguage(String),
    UnknownAdjacency(String),
    ZeroTopN,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLevel(level) => write!(
                f,
                "Dictionary level must be one of {:?}, got {level}",
                DictionaryLevel::TIERS
            ),
            Self::UnknownLanguage(name) => write!(
                f,
                "Unknown language '{name}' (expected american, australian, british or canadian)"
            ),
            Self::UnknownAdjacency(name) => {
                write!(f, "Unknown adjacency '{name}' (expected moore or legacy)")
            }
            Self::ZeroTopN => write!(f, "Number of results must be at least 1"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Everything the solver needs besides the board and the dictionary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverConfig {
    /// Number of ranked results kept
    pub top_n: usize,
    /// Inclusiveness tier of the word list
    pub dictionary_level: DictionaryLevel,
    /// Regional variants loaded on top of English
    pub languages: Vec<Language>,
    /// Swaps available on the board
    pub swap_budget: u32,
    /// Boundary rule for tile neighbourhoods
    pub adjacency: AdjacencyPolicy,
    /// Optional wall-clock limit for one search
    pub deadline: Option<Duration>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
            dictionary_level: DictionaryLevel::default(),
            languages: Vec::new(),
            swap_budget: 0,
            adjacency: AdjacencyPolicy::default(),
            deadline: None,
        }
    }
}

impl SolverConfig {
    #[must_use]
    pub fn with_swap_budget(mut self, swap_budget: u32) -> Self {
        self.swap_budget = swap_budget;
        self
    }

    /// Set how many ranked results to keep
    ///
    /// # Errors
    /// Returns `ConfigError::ZeroTopN` for zero.
    pub fn with_top_n(mut self, top_n: usize) -> Result<Self, ConfigError> {
        if top_n == 0 {
            return Err(ConfigError::ZeroTopN);
        }
        self.top_n = top_n;
        Ok(self)
    }

    #[must_use]
    pub fn with_adjacency(mut self, adjacency: AdjacencyPolicy) -> Self {
        self.adjacency = adjacency;
        self
    }

    #[must_use]
    pub fn with_deadline(mut self, deadline: Option<Duration>) -> Self {
        self.deadline = deadline;
        self
    }
}

/// Parse an adjacency policy name
///
/// # Errors
/// Returns `ConfigError::UnknownAdjacency` for anything but "moore" or "legacy".
pub fn parse_adjacency(name: &str) -> Result<AdjacencyPolicy, ConfigError> {
    AdjacencyPolicy::from_name(name).ok_or_else(|| ConfigError::UnknownAdjacency(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = SolverConfig::default();
        assert_eq!(config.top_n, 5);
        assert_eq!(config.dictionary_level.value(), 70);
        assert!(config.languages.is_empty());
        assert_eq!(config.swap_budget, 0);
        assert_eq!(config.adjacency, AdjacencyPolicy::Moore);
        assert!(config.deadline.is_none());
    }

    #[test]
    fn every_tier_is_accepted() {
        for tier in DictionaryLevel::TIERS {
            assert_eq!(DictionaryLevel::new(tier).unwrap().value(), tier);
        }
    }

    #[test]
    fn non_tier_levels_rejected() {
        assert_eq!(
            DictionaryLevel::new(0).unwrap_err(),
            ConfigError::InvalidLevel(0)
        );
        assert!(DictionaryLevel::new(71).is_err());
    }

    #[test]
    fn lowest_tier_includes_only_itself() {
        let level = DictionaryLevel::new(10).unwrap();
        assert_eq!(level.included_tiers().collect::<Vec<_>>(), vec![10]);
    }

    #[test]
    fn max_tier_includes_all() {
        assert_eq!(DictionaryLevel::MAX.included_tiers().count(), 8);
    }

    #[test]
    fn language_names() {
        assert_eq!(Language::from_name("British").unwrap(), Language::British);
        assert_eq!(Language::from_name("us").unwrap(), Language::American);
        assert_eq!(Language::Canadian.file_prefix(), "canadian");
        assert!(Language::from_name("klingon").is_err());
    }

    #[test]
    fn top_n_must_be_positive() {
        assert_eq!(
            SolverConfig::default().with_top_n(0).unwrap_err(),
            ConfigError::ZeroTopN
        );
        assert_eq!(SolverConfig::default().with_top_n(10).unwrap().top_n, 10);
    }

    #[test]
    fn adjacency_names() {
        assert_eq!(parse_adjacency("LEGACY").unwrap(), AdjacencyPolicy::Legacy);
        assert!(parse_adjacency("hex").is_err());
    }
}
