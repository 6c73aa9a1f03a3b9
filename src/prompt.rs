// =============================================================================
// Interactive startup prompts
// =============================================================================

use std::io::{BufRead, Write};

use anyhow::{bail, Context, Result};
use tracing::warn;

/// Ask for the ticker symbol until a non-blank answer arrives.
///
/// The answer is trimmed and upper-cased.
pub fn prompt_symbol<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<String> {
    loop {
        let answer = ask(input, output, "Enter stock symbol: ")?;
        let symbol = answer.trim().to_uppercase();
        if symbol.is_empty() {
            writeln!(output, "Symbol cannot be empty.")?;
            continue;
        }
        if symbol.chars().any(char::is_whitespace) {
            writeln!(output, "Symbol cannot contain spaces.")?;
            continue;
        }
        return Ok(symbol);
    }
}

/// Ask for the update interval (whole seconds, at least 1).
pub fn prompt_interval<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<u64> {
    loop {
        let answer = ask(input, output, "Enter update interval (in seconds): ")?;
        match answer.trim().parse::<u64>() {
            Ok(secs) if secs > 0 => return Ok(secs),
            _ => {
                warn!(answer = %answer.trim(), "rejected update interval");
                writeln!(output, "Please enter a positive whole number of seconds.")?;
            }
        }
    }
}

/// Print `question`, then read one line.  End of input is an error.
fn ask<R: BufRead, W: Write>(input: &mut R, output: &mut W, question: &str) -> Result<String> {
    write!(output, "{question}")?;
    output.flush().context("failed to flush prompt")?;

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .context("failed to read from stdin")?;
    if read == 0 {
        bail!("input closed before an answer was given");
    }
    Ok(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn symbol_is_trimmed_and_uppercased() {
        let mut input = Cursor::new("  ibm \n");
        let mut output = Vec::new();
        assert_eq!(prompt_symbol(&mut input, &mut output).unwrap(), "IBM");
        assert_eq!(String::from_utf8(output).unwrap(), "Enter stock symbol: ");
    }

    #[test]
    fn blank_symbol_is_asked_again() {
        let mut input = Cursor::new("\n   \nmsft\n");
        let mut output = Vec::new();
        assert_eq!(prompt_symbol(&mut input, &mut output).unwrap(), "MSFT");
        let text = String::from_utf8(output).unwrap();
        assert_eq!(text.matches("Enter stock symbol: ").count(), 3);
        assert_eq!(text.matches("Symbol cannot be empty.").count(), 2);
    }

    #[test]
    fn symbol_with_spaces_is_rejected() {
        let mut input = Cursor::new("ib m\naapl\n");
        let mut output = Vec::new();
        assert_eq!(prompt_symbol(&mut input, &mut output).unwrap(), "AAPL");
    }

    #[test]
    fn interval_accepts_positive_integer() {
        let mut input = Cursor::new("60\n");
        let mut output = Vec::new();
        assert_eq!(prompt_interval(&mut input, &mut output).unwrap(), 60);
    }

    #[test]
    fn interval_rejects_zero_negative_and_garbage() {
        let mut input = Cursor::new("0\n-5\nsoon\n1.5\n30\n");
        let mut output = Vec::new();
        assert_eq!(prompt_interval(&mut input, &mut output).unwrap(), 30);
        let text = String::from_utf8(output).unwrap();
        assert_eq!(text.matches("positive whole number").count(), 4);
    }

    #[test]
    fn end_of_input_is_error() {
        let mut input = Cursor::new("");
        let mut output = Vec::new();
        assert!(prompt_symbol(&mut input, &mut output).is_err());

        let mut input = Cursor::new("abc\n");
        assert!(prompt_interval(&mut input, &mut output).is_err());
    }
}
