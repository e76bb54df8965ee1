//! Text sources: standard input or a file path.
//!
//! Content is read whole and decoded as strict UTF-8. Files are read in
//! text mode: `\r\n` and lone `\r` line endings become `\n`. Standard
//! input is taken verbatim.

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::error::SourceError;

/// Positional marker selecting standard input.
pub const STDIN_MARKER: &str = "-";

/// Where the document text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextSource {
    /// Read standard input until end-of-stream
    Stdin,
    /// Read a file in full
    File(PathBuf),
}

impl TextSource {
    /// Read the full text.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] when the file is missing, unreadable, or not
    /// valid UTF-8.
    pub fn read_text(&self) -> Result<String, SourceError> {
        match self {
            Self::Stdin => read_stream(std::io::stdin().lock()),
            Self::File(path) => read_file(path),
        }
    }
}

impl From<&str> for TextSource {
    fn from(raw: &str) -> Self {
        if raw == STDIN_MARKER {
            Self::Stdin
        } else {
            Self::File(PathBuf::from(raw))
        }
    }
}

impl std::str::FromStr for TextSource {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl std::fmt::Display for TextSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Stdin => f.write_str("<stdin>"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

fn read_file(path: &Path) -> Result<String, SourceError> {
    if !path.exists() {
        return Err(SourceError::NotFound(path.to_path_buf()));
    }
    let buffer = fs::read(path)?;
    tracing::debug!(path = %path.display(), bytes = buffer.len(), "read text source");
    decode_text(buffer).map(|text| normalize_newlines(&text))
}

fn read_stream<R: Read>(mut reader: R) -> Result<String, SourceError> {
    let mut buffer = Vec::new();
    reader.read_to_end(&mut buffer)?;
    tracing::debug!(bytes = buffer.len(), "read text source from stdin");
    decode_text(buffer)
}

fn decode_text(buffer: Vec<u8>) -> Result<String, SourceError> {
    String::from_utf8(buffer).map_err(|_| SourceError::Encoding)
}

/// Universal newlines: `\r\n` first, then any remaining `\r`.
fn normalize_newlines(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_dash_selects_stdin() {
        assert_eq!(TextSource::from("-"), TextSource::Stdin);
        assert_eq!(
            TextSource::from("notes.md"),
            TextSource::File(PathBuf::from("notes.md"))
        );
    }

    #[test]
    fn test_file_read() {
        let dir = TempDir::new().unwrap();
        let p = dir.path().join("doc.md");
        fs::write(&p, "# Guía de estándar").unwrap();
        let text = TextSource::File(p).read_text().unwrap();
        assert_eq!(text, "# Guía de estándar");
    }

    #[test]
    fn test_file_not_found() {
        let result = TextSource::from("/nonexistent/doc.md").read_text();
        assert!(matches!(result, Err(SourceError::NotFound(_))));
    }

    #[test]
    fn test_nul_text_accepted() {
        let dir = TempDir::new().unwrap();
        let p = dir.path().join("nul.md");
        fs::write(&p, "golang func main\0 trailing").unwrap();
        let text = TextSource::File(p).read_text().unwrap();
        assert_eq!(text, "golang func main\0 trailing");
        assert_eq!(read_stream(&b"a\x00b"[..]).unwrap(), "a\0b");
    }

    #[test]
    fn test_file_newlines_normalized() {
        let dir = TempDir::new().unwrap();
        let p = dir.path().join("crlf.md");
        fs::write(&p, "a\r\nb\rc\n").unwrap();
        assert_eq!(TextSource::File(p).read_text().unwrap(), "a\nb\nc\n");
    }

    #[test]
    fn test_stdin_newlines_verbatim() {
        assert_eq!(read_stream(&b"a\r\nb"[..]).unwrap(), "a\r\nb");
    }

    #[test]
    fn test_invalid_utf8_rejected() {
        let result = read_stream(&b"caf\xe9"[..]);
        assert!(matches!(result, Err(SourceError::Encoding)));
    }

    #[test]
    fn test_stream_read() {
        assert_eq!(read_stream(&b"plan the sprint"[..]).unwrap(), "plan the sprint");
        assert_eq!(read_stream(&b""[..]).unwrap(), "");
    }
}
