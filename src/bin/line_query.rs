//! line-query - answer string queries about one line of input
//!
//! Prints the line without letters and its unique-letter count. When the
//! line holds at least two words, the first two are also compared, and the
//! line is echoed with the first character of word one replaced by the
//! first character of word two.
//!
//! ## Exit Codes
//! - 0: success
//! - 1: empty input
//! - 2: allocation or read failure

use std::io::{self, BufRead};
use std::process::ExitCode;

use lab_figures::settings::AppSettings;
use lab_figures::text::{
    alphabet_union, common_char_count, interleave, shares_char, strip_letters,
    substitute, unique_letter_count, LineError, LineReader,
};

fn main() -> ExitCode {
    env_logger::init();

    let settings = AppSettings::load();
    let stdin = io::stdin();
    match read_non_empty(stdin.lock(), settings.line_capacity) {
        Ok(line) => {
            for answer in describe(&line) {
                println!("{}", answer);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

/// Read one line; an empty line or end of input is `LineError::Empty`
fn read_non_empty<R: BufRead>(input: R, capacity: usize) -> Result<String, LineError> {
    let mut reader = LineReader::with_capacity(input, capacity);
    match reader.read_line()? {
        Some(line) if !line.is_empty() => Ok(line),
        _ => Err(LineError::Empty),
    }
}

/// All answers for one line, one per output line
fn describe(line: &str) -> Vec<String> {
    let mut answers = vec![
        strip_letters(line),
        unique_letter_count(line).to_string(),
    ];

    let mut words = line.split_whitespace();
    if let (Some(first), Some(second)) = (words.next(), words.next()) {
        answers.push(shares_char(first, second).to_string());
        answers.push(common_char_count(first, second).to_string());
        answers.push(alphabet_union(first, second));
        answers.push(interleave(first, second));
        if let (Some(old), Some(new)) = (first.chars().next(), second.chars().next()) {
            answers.push(substitute(line, old, new));
        }
    }

    answers
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_empty_input() {
        let err = read_non_empty(Cursor::new("\nmore"), 16).unwrap_err();
        assert!(matches!(err, LineError::Empty));
        assert_eq!(err.exit_code(), 1);
        assert!(matches!(read_non_empty(Cursor::new(""), 16), Err(LineError::Empty)));
    }

    #[test]
    fn test_describe_single_word() {
        assert_eq!(describe("abc123"), vec!["123", "3"]);
    }

    #[test]
    fn test_describe_substitutes_every_occurrence() {
        let answers = describe("banana pie");
        assert_eq!(answers.last().map(String::as_str), Some("panana pie"));
    }

    #[test]
    fn test_describe_two_words() {
        assert_eq!(
            describe("hello world"),
            vec![" ", "7", "true", "2", "dehlorw", "hweolrllod", "wello world"]
        );
    }
}
