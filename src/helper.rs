use std::io::{stdin, stdout, Write};

use chrono::Local;

use crate::Result;

/// Timestamp format recorded on notes at save time.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Formats the current local time the way notes record their save time.
pub fn current_timestamp() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}

/// Asks the user a yes/no question on stdout and reads the answer from stdin.
///
/// Only "y" and "yes" (case-insensitive) count as confirmation.
pub fn confirm(question: &str) -> Result<bool> {
    print!("{} [y/N]: ", question);
    stdout().flush()?;

    let mut input = String::new();
    stdin().read_line(&mut input)?;

    let input = input.trim().to_lowercase();
    Ok(input == "y" || input == "yes")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamp_matches_expected_pattern() {
        let ts = current_timestamp();

        // YYYY-MM-DD HH:mm
        assert_eq!(ts.len(), 16);
        let bytes = ts.as_bytes();
        assert_eq!(bytes[4], b'-');
        assert_eq!(bytes[7], b'-');
        assert_eq!(bytes[10], b' ');
        assert_eq!(bytes[13], b':');
        assert!(ts
            .chars()
            .enumerate()
            .all(|(i, c)| matches!(i, 4 | 7 | 10 | 13) || c.is_ascii_digit()));
    }
}
