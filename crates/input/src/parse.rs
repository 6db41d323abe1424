//! Comma-separated age parsing.

use std::fmt;
use std::io::BufRead;

use anyhow::{Context, Result};

/// A field on an input line that is not an integer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseAgesError {
    /// Offending field, trimmed
    pub field: String,
    /// 1-based character column where the field starts
    pub column: usize,
}

impl ParseAgesError {
    pub fn code(&self) -> &'static str {
        if self.field.is_empty() {
            "empty_age"
        } else {
            "invalid_age"
        }
    }
}

impl fmt::Display for ParseAgesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.field.is_empty() {
            write!(f, "empty age at column {}", self.column)
        } else {
            write!(f, "invalid age {:?} at column {}", self.field, self.column)
        }
    }
}

impl std::error::Error for ParseAgesError {}

/// Parse one line of comma-separated ages.
///
/// Whitespace around fields is ignored and a blank line yields no ages.
///
/// # Examples
///
/// ```
/// use lanternfish_input::parse_line;
///
/// assert_eq!(parse_line("3,4,3,1,2").unwrap(), vec![3, 4, 3, 1, 2]);
/// assert_eq!(parse_line(" 1, -2 ").unwrap(), vec![1, -2]);
/// assert!(parse_line("").unwrap().is_empty());
/// assert!(parse_line("1,,2").is_err());
/// ```
pub fn parse_line(line: &str) -> Result<Vec<i64>, ParseAgesError> {
    if line.trim().is_empty() {
        return Ok(Vec::new());
    }

    let mut ages = Vec::new();
    let mut column = 1usize;
    for raw in line.split(',') {
        let field = raw.trim();
        let age = field.parse::<i64>().map_err(|_| ParseAgesError {
            field: field.to_string(),
            column: column + raw.chars().take_while(|c| c.is_whitespace()).count(),
        })?;
        ages.push(age);
        column += raw.chars().count() + 1;
    }
    Ok(ages)
}

/// Read every line from `reader` and concatenate the ages found.
pub fn read_ages<R: BufRead>(reader: R) -> Result<Vec<i64>> {
    let mut ages = Vec::new();
    for (n, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("read line {}", n + 1))?;
        let parsed = parse_line(&line).with_context(|| format!("parse line {}", n + 1))?;
        ages.extend(parsed);
    }
    Ok(ages)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_line() {
        assert_eq!(parse_line("3,4,3,1,2\n").unwrap(), vec![3, 4, 3, 1, 2]);
    }

    #[test]
    fn test_error_reports_column() {
        let err = parse_line("1,2,x3").unwrap_err();
        assert_eq!(err.field, "x3");
        assert_eq!(err.column, 5);
        assert_eq!(err.code(), "invalid_age");
        assert_eq!(err.to_string(), "invalid age \"x3\" at column 5");
    }

    #[test]
    fn test_error_column_skips_leading_space() {
        let err = parse_line("1,  ?").unwrap_err();
        assert_eq!(err.column, 5);
    }

    #[test]
    fn test_empty_field() {
        let err = parse_line("1,,2").unwrap_err();
        assert_eq!(err.field, "");
        assert_eq!(err.code(), "empty_age");
        assert_eq!(err.to_string(), "empty age at column 3");
    }

    #[test]
    fn test_trailing_comma_is_rejected() {
        assert!(parse_line("1,2,").is_err());
    }

    #[test]
    fn test_read_ages_concatenates_lines() {
        let input = "3,4\n\n3,1,2\n";
        assert_eq!(read_ages(input.as_bytes()).unwrap(), vec![3, 4, 3, 1, 2]);
    }

    #[test]
    fn test_read_ages_names_the_line() {
        let err = read_ages("1,2\n3,oops\n".as_bytes()).unwrap_err();
        assert_eq!(format!("{:#}", err), "parse line 2: invalid age \"oops\" at column 3");
    }
}
