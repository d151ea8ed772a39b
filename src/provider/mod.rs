use std::fs;
use std::path::PathBuf;

use crate::core::error::{Error, ErrorKind, Result};

/// Source of the raw document text. Implementations own the details of the
/// underlying format; the engine only ever sees one string blob. Extraction
/// failure is fatal to the run, there is no partial-document fallback.
pub trait TextProvider: Send + Sync {
    fn extract(&self) -> Result<String>;

    fn name(&self) -> &str;
}

/// Reads the whole document from a UTF-8 plain text file.
pub struct PlainTextProvider {
    pub path: PathBuf,
}

impl PlainTextProvider {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        PlainTextProvider { path: path.into() }
    }
}

impl TextProvider for PlainTextProvider {
    fn extract(&self) -> Result<String> {
        let text = fs::read_to_string(&self.path).map_err(|err| {
            Error::new(
                ErrorKind::Extraction,
                format!("could not read {}: {}", self.path.display(), err),
            )
        })?;
        tracing::debug!(path = %self.path.display(), bytes = text.len(), "extracted document text");
        Ok(text)
    }

    fn name(&self) -> &str {
        "plain_text"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn extracts_file_contents_verbatim() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "El contrato establece un plazo.").unwrap();

        let provider = PlainTextProvider::new(file.path());
        let text = provider.extract().unwrap();
        assert_eq!(text, "El contrato establece un plazo.");
    }

    #[test]
    fn missing_file_is_an_extraction_error() {
        let provider = PlainTextProvider::new("/nonexistent/document.txt");
        let err = provider.extract().unwrap_err();
        assert!(matches!(err.kind, ErrorKind::Extraction));
    }
}
