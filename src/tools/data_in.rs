use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use log::{error, info};

use crate::errors::{HuffmanError, Result};

/// Read the whole text source into memory.
///
/// Every line comes back terminated by exactly one '\n' ("\r\n", '\n' and a lone '\r' all end a line),
/// so a file whose last line lacks a newline still ends with one. An empty file gives "".
/// A missing file is reported before anything else is done with it.
pub fn read_text(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            error!("Cannot read from the file {}", path.display());
            return Err(HuffmanError::InputNotFound {
                path: path.to_path_buf(),
            });
        }
        Err(e) => return Err(e.into()),
    };
    let text = normalize_lines(&raw);
    info!("Read {} characters from {}", text.chars().count(), path.display());
    Ok(text)
}

/// Terminate every line with a single '\n'.
pub fn normalize_lines(raw: &str) -> String {
    let mut text = String::with_capacity(raw.len() + 1);
    for line in raw.replace("\r\n", "\n").split_terminator(&['\n', '\r'][..]) {
        text.push_str(line);
        text.push('\n');
    }
    text
}

#[cfg(test)]
mod test {
    use super::{normalize_lines, read_text};
    use crate::errors::HuffmanError;
    use test_case::test_case;

    #[test_case("" => ""; "empty")]
    #[test_case("abc" => "abc\n"; "missing final newline")]
    #[test_case("abc\n" => "abc\n"; "already terminated")]
    #[test_case("a\r\nb\r\n" => "a\nb\n"; "crlf")]
    #[test_case("a\n\nb" => "a\n\nb\n"; "blank line kept")]
    #[test_case("a\rb\r" => "a\nb\n"; "lone cr")]
    #[test_case("a\r\rb" => "a\n\nb\n"; "two lone cr")]
    fn normalize_test(raw: &str) -> String {
        normalize_lines(raw)
    }

    #[test]
    fn missing_file_test() {
        let err = read_text("no/such/file.txt").unwrap_err();
        assert!(matches!(err, HuffmanError::InputNotFound { .. }));
        assert!(err.to_string().contains("file.txt"));
    }

    #[test]
    fn read_file_test() {
        let path = std::env::temp_dir().join("huffman_text_data_in_test.txt");
        std::fs::write(&path, "hello\r\nworld").unwrap();
        let text = read_text(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(text, "hello\nworld\n");
    }
}
