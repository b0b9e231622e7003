use crate::domain::model::BreedSelection;
use crate::utils::error::{AnalyzerError, Result};
use std::collections::BTreeSet;
use std::io::{BufRead, Write};

pub const PROMPT: &str = "Please enter a dog breed: ";

/// Asks for a breed until the answer matches one of `valid_breeds`.
///
/// There is no retry limit. An unknown breed prints the error and asks again;
/// end of input is the only way out without a valid answer.
pub fn prompt_breed<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    valid_breeds: &BTreeSet<String>,
) -> Result<BreedSelection> {
    let mut line = String::new();
    let mut attempts = 0usize;

    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            tracing::warn!("Input closed after {} attempts", attempts);
            return Err(AnalyzerError::InputClosed);
        }
        attempts += 1;

        match BreedSelection::parse(&line, valid_breeds) {
            Ok(selection) => {
                tracing::debug!("Accepted breed {} after {} attempts", selection, attempts);
                return Ok(selection);
            }
            Err(e) if e.is_recoverable() => {
                tracing::debug!("Rejected breed input: {}", e);
                writeln!(output, "{}", e.user_friendly_message())?;
            }
            Err(e) => return Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn breeds() -> BTreeSet<String> {
        ["BOXER", "GOLDEN RETRIEVER"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    #[test]
    fn test_accepts_first_valid_line() {
        let mut input = Cursor::new("golden retriever\n");
        let mut output: Vec<u8> = Vec::new();

        let selection = prompt_breed(&mut input, &mut output, &breeds()).unwrap();

        assert_eq!(selection.as_str(), "GOLDEN RETRIEVER");
        assert_eq!(String::from_utf8(output).unwrap(), PROMPT);
    }

    #[test]
    fn test_reprompts_on_unknown_breed() {
        let mut input = Cursor::new("CHIHUAHUA\n\nBoxer\n");
        let mut output: Vec<u8> = Vec::new();

        let selection = prompt_breed(&mut input, &mut output, &breeds()).unwrap();

        assert_eq!(selection.as_str(), "BOXER");
        let expected = format!(
            "{p}Dog breed not found in data. Please try again.\n\
             {p}Dog breed not found in data. Please try again.\n\
             {p}",
            p = PROMPT
        );
        assert_eq!(String::from_utf8(output).unwrap(), expected);
    }

    #[test]
    fn test_eof_is_input_closed() {
        let mut input = Cursor::new("POODLE\n");
        let mut output: Vec<u8> = Vec::new();

        let err = prompt_breed(&mut input, &mut output, &breeds()).unwrap_err();
        assert!(matches!(err, AnalyzerError::InputClosed));
    }

    #[test]
    fn test_last_line_without_newline() {
        let mut input = Cursor::new("boxer");
        let mut output: Vec<u8> = Vec::new();

        let selection = prompt_breed(&mut input, &mut output, &breeds()).unwrap();
        assert_eq!(selection.as_str(), "BOXER");
    }
}
