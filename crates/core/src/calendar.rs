//! Semester calendar arithmetic
//!
//! The year is split into three four-month bands:
//!
//! | Months (0-based) | Season |
//! |------------------|--------|
//! | 0–3              | Winter |
//! | 4–7              | Spring |
//! | 8–11             | Fall   |

use crate::types::{Season, TermCode, TermOption};
use chrono::{Datelike, Local};

/// Default number of years offered by [`enumerate_term_options`]
pub const DEFAULT_RANGE_YEARS: i32 = 4;

/// Largest range [`term_options_from`] will cover; larger requests are capped
pub const MAX_RANGE_YEARS: i32 = 100;

/// Season for a zero-based month index
///
/// Indices past 11 fall into the last band.
pub fn season_for(month_index: u32) -> Season {
    match month_index {
        0..=3 => Season::Winter,
        4..=7 => Season::Spring,
        _ => Season::Fall,
    }
}

/// Term code containing `date`
///
/// # Example
/// ```
/// # use bakeoff_core::calendar::current_term_code;
/// let date = chrono::NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
/// assert_eq!(current_term_code(&date).to_string(), "S24");
/// ```
pub fn current_term_code<D: Datelike>(date: &D) -> TermCode {
    TermCode::new(season_for(date.month0()), date.year())
}

/// Term code for today in local time
pub fn current_term_code_now() -> TermCode {
    current_term_code(&Local::now())
}

/// Selectable terms anchored on the current local year
///
/// See [`term_options_from`].
pub fn enumerate_term_options(range_years: i32) -> Vec<TermOption> {
    term_options_from(Local::now().year(), range_years)
}

/// Selectable terms, newest first
///
/// Starts at `current_year - 1` and covers `range_years` years, three terms
/// each. Returns an empty list when `range_years <= 0`; ranges above
/// [`MAX_RANGE_YEARS`] are capped.
pub fn term_options_from(current_year: i32, range_years: i32) -> Vec<TermOption> {
    if range_years <= 0 {
        return Vec::new();
    }

    let start_year = current_year.saturating_sub(1);
    let end_year = start_year.saturating_add(range_years.min(MAX_RANGE_YEARS));
    let mut options: Vec<TermOption> = (start_year..end_year)
        .flat_map(|year| Season::ALL.into_iter().map(move |season| TermOption::new(season, year)))
        .collect();

    options.reverse();
    options
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_season_for_bands() {
        for month in 0..=3 {
            assert_eq!(season_for(month), Season::Winter, "month {month}");
        }
        for month in 4..=7 {
            assert_eq!(season_for(month), Season::Spring, "month {month}");
        }
        for month in 8..=11 {
            assert_eq!(season_for(month), Season::Fall, "month {month}");
        }
    }

    #[test]
    fn test_current_term_code_for_dates() {
        assert_eq!(current_term_code(&date(2024, 2, 1)).to_string(), "W24");
        assert_eq!(current_term_code(&date(2024, 6, 15)).to_string(), "S24");
        assert_eq!(current_term_code(&date(2024, 11, 1)).to_string(), "F24");
    }

    #[test]
    fn test_current_term_code_band_edges() {
        assert_eq!(current_term_code(&date(2025, 4, 30)).to_string(), "W25");
        assert_eq!(current_term_code(&date(2025, 5, 1)).to_string(), "S25");
        assert_eq!(current_term_code(&date(2025, 8, 31)).to_string(), "S25");
        assert_eq!(current_term_code(&date(2025, 9, 1)).to_string(), "F25");
        assert_eq!(current_term_code(&date(2025, 12, 31)).to_string(), "F25");
    }

    #[test]
    fn test_term_options_four_years() {
        let options = term_options_from(2025, 4);
        assert_eq!(options.len(), 12);

        let first = options.first().unwrap();
        assert_eq!(first.code.to_string(), "F27");
        assert_eq!(first.label, "Fall 2027");

        let last = options.last().unwrap();
        assert_eq!(last.code.to_string(), "W24");
        assert_eq!(last.label, "Winter 2024");

        let codes: Vec<String> = options.iter().take(4).map(|o| o.code.to_string()).collect();
        assert_eq!(codes, ["F27", "S27", "W27", "F26"]);
    }

    #[test]
    fn test_term_options_strictly_descending() {
        let options = term_options_from(2030, 6);
        assert!(options.windows(2).all(|w| w[0].code > w[1].code));
    }

    #[test]
    fn test_term_options_empty_range() {
        assert!(term_options_from(2025, 0).is_empty());
        assert!(term_options_from(2025, -3).is_empty());
        assert!(enumerate_term_options(0).is_empty());
    }

    #[test]
    fn test_term_options_large_range() {
        let options = term_options_from(2025, i32::MAX);
        assert_eq!(options.len(), 3 * MAX_RANGE_YEARS as usize);
        assert_eq!(options.last().unwrap().code.to_string(), "W24");
        assert_eq!(options.first().unwrap().label, "Fall 2123");
    }

    #[test]
    fn test_term_options_extreme_years() {
        assert_eq!(term_options_from(i32::MIN, 1).len(), 3);
        // The end saturates at i32::MAX, leaving a single year.
        assert_eq!(term_options_from(i32::MAX, 4).len(), 3);
    }

    #[test]
    fn test_enumerate_term_options_contains_now() {
        let options = enumerate_term_options(DEFAULT_RANGE_YEARS);
        assert_eq!(options.len(), 12);
        let now = current_term_code_now();
        assert!(options.iter().any(|o| o.code == now));
    }
}
