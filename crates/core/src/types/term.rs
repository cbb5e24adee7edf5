//! Academic term codes (`W25`, `S25`, `F25`) and selectable term options

use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Season band of an academic year
///
/// Declaration order is the rank used for ordering: Winter < Spring < Fall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Season {
    Winter,
    Spring,
    Fall,
}

impl Season {
    /// All seasons in calendar order
    pub const ALL: [Season; 3] = [Season::Winter, Season::Spring, Season::Fall];

    /// Single-letter code used in term codes
    pub fn letter(self) -> char {
        match self {
            Season::Winter => 'W',
            Season::Spring => 'S',
            Season::Fall => 'F',
        }
    }

    /// Human-readable name used in labels
    pub fn name(self) -> &'static str {
        match self {
            Season::Winter => "Winter",
            Season::Spring => "Spring",
            Season::Fall => "Fall",
        }
    }

    /// Parse a season letter (uppercase only)
    pub fn from_letter(c: char) -> Option<Self> {
        match c {
            'W' => Some(Season::Winter),
            'S' => Some(Season::Spring),
            'F' => Some(Season::Fall),
            _ => None,
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Term code: one season letter followed by a two-digit year
///
/// Ordered by (year, season). Field order matters for the derived `Ord`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TermCode {
    year: u8,
    season: Season,
}

impl TermCode {
    /// Build a term code from a season and a full calendar year
    ///
    /// Only the last two digits of `year` are kept.
    ///
    /// # Example
    /// ```
    /// # use bakeoff_core::{Season, TermCode};
    /// let code = TermCode::new(Season::Spring, 2025);
    /// assert_eq!(code.to_string(), "S25");
    /// ```
    pub fn new(season: Season, year: i32) -> Self {
        Self {
            year: year.rem_euclid(100) as u8,
            season,
        }
    }

    pub fn season(&self) -> Season {
        self.season
    }

    /// Two-digit year (0..=99)
    pub fn short_year(&self) -> u8 {
        self.year
    }
}

impl fmt::Display for TermCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:02}", self.season.letter(), self.year)
    }
}

impl FromStr for TermCode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || CoreError::InvalidTermCode(s.to_string());

        let mut chars = s.chars();
        let season = chars
            .next()
            .and_then(Season::from_letter)
            .ok_or_else(invalid)?;

        let digits = chars.as_str();
        if digits.len() != 2 || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let year = digits.parse::<u8>().map_err(|_| invalid())?;

        Ok(Self { year, season })
    }
}

impl TryFrom<String> for TermCode {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<TermCode> for String {
    fn from(code: TermCode) -> Self {
        code.to_string()
    }
}

/// One selectable entry for a term picker
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TermOption {
    pub code: TermCode,
    /// e.g. "Winter 2025"
    pub label: String,
}

impl TermOption {
    /// Create an option for `season` of the full calendar `year`
    pub fn new(season: Season, year: i32) -> Self {
        Self {
            code: TermCode::new(season, year),
            label: format!("{} {}", season.name(), year),
        }
    }
}
