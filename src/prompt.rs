//! Line-oriented prompting over any reader/writer pair

use crate::Result;
use std::io::{BufRead, Write};

/// Write `message`, flush, and read one line.
///
/// The trailing newline is stripped. End of input yields an empty string,
/// which table-name validation then rejects.
pub fn prompt_line<R: BufRead, W: Write>(input: &mut R, output: &mut W, message: &str) -> Result<String> {
    write!(output, "{}", message)?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;

    let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed_len);
    Ok(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_prompt_reads_one_line() {
        let mut input = Cursor::new("wyverns\nsecond line\n");
        let mut output = Vec::new();

        let line = prompt_line(&mut input, &mut output, "Name: ").unwrap();

        assert_eq!(line, "wyverns");
        assert_eq!(String::from_utf8(output).unwrap(), "Name: ");
    }

    #[test]
    fn test_prompt_keeps_inner_whitespace() {
        let mut input = Cursor::new("  sea serpents \r\n");
        let line = prompt_line(&mut input, &mut Vec::new(), "").unwrap();
        assert_eq!(line, "  sea serpents ");
    }

    #[test]
    fn test_prompt_eof_is_empty() {
        let mut input = Cursor::new("");
        let line = prompt_line(&mut input, &mut Vec::new(), "Name: ").unwrap();
        assert!(line.is_empty());
    }
}
