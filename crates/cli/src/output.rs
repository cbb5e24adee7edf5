//! Plain-text rendering for terminal output

use bakeoff_core::TermOption;

/// One `CODE  Label` line per option
pub fn options_table(options: &[TermOption]) -> String {
    options
        .iter()
        .map(|option| format!("{:<4}  {}\n", option.code.to_string(), option.label))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use bakeoff_core::calendar::term_options_from;

    #[test]
    fn test_options_table_lines() {
        let table = options_table(&term_options_from(2025, 1));
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines, ["F24   Fall 2024", "S24   Spring 2024", "W24   Winter 2024"]);
    }

    #[test]
    fn test_options_table_empty() {
        assert!(options_table(&[]).is_empty());
    }
}
