//! Interactive prompts for the values not given on the command line

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use crate::output::OutputFormat;

const INVALID_DIRECTORY: &str = "Please input a valid directory.";

/// Line-based question/answer session over any reader/writer pair.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Ask until the answer names an existing directory.
    pub fn ask_directory(&mut self, question: &str) -> io::Result<PathBuf> {
        loop {
            let answer = self.ask(question)?;
            let path = PathBuf::from(clean_directory_input(&answer));
            if !answer.trim().is_empty() && path.is_dir() {
                return Ok(path);
            }
            writeln!(self.output, "{}", INVALID_DIRECTORY)?;
        }
    }

    /// Show the format menu until `1` or `2` is chosen.
    pub fn ask_format(&mut self) -> io::Result<OutputFormat> {
        loop {
            writeln!(self.output)?;
            writeln!(self.output, "Select output type:")?;
            writeln!(self.output, "1) Text - .txt")?;
            writeln!(self.output, "2) Excel - .xlsx")?;
            writeln!(self.output)?;
            match self.ask("")?.trim() {
                "1" => return Ok(OutputFormat::Text),
                "2" => return Ok(OutputFormat::Spreadsheet),
                _ => continue,
            }
        }
    }

    fn ask(&mut self, question: &str) -> io::Result<String> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "no more input",
            ));
        }
        Ok(line)
    }
}

/// Trim whitespace and one trailing separator, keeping a bare root intact.
pub fn clean_directory_input(answer: &str) -> &str {
    let trimmed = answer.trim();
    if trimmed.len() > 1 {
        if let Some(stripped) = trimmed
            .strip_suffix('/')
            .or_else(|| trimmed.strip_suffix('\\'))
        {
            return stripped;
        }
    }
    trimmed
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_clean_directory_input() {
        assert_eq!(clean_directory_input("  /tmp/dir/ \n"), "/tmp/dir");
        assert_eq!(clean_directory_input("C:\\Users\\me\\"), "C:\\Users\\me");
        assert_eq!(clean_directory_input("/"), "/");
        assert_eq!(clean_directory_input("plain"), "plain");
    }

    #[test]
    fn test_ask_directory_reprompts_until_valid() {
        let tmp = TempDir::new().unwrap();
        let input = format!("/definitely/not/here\n\n{}/\n", tmp.path().display());
        let mut p = prompter(&input);

        let dir = p.ask_directory("Input a directory for scanning: ").unwrap();
        assert_eq!(dir, tmp.path());

        let shown = String::from_utf8(p.output).unwrap();
        assert_eq!(shown.matches(INVALID_DIRECTORY).count(), 2);
        assert_eq!(shown.matches("Input a directory for scanning: ").count(), 3);
    }

    #[test]
    fn test_ask_format() {
        assert_eq!(prompter("1\n").ask_format().unwrap(), OutputFormat::Text);
        assert_eq!(
            prompter("x\n3\n2\n").ask_format().unwrap(),
            OutputFormat::Spreadsheet
        );
    }

    #[test]
    fn test_end_of_input_is_an_error() {
        let err = prompter("").ask_format().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }
}
