//! Minimal, dependency-light PDF writer.
//!
//! Quire assembles a standards-compliant binary PDF from pages of
//! pre-wrapped plain-text lines, with one built-in typeface and no
//! compression. The interesting part is the bookkeeping a strict reader
//! checks: dense object numbering, exact declared stream lengths, resolved
//! parent references and a byte-accurate cross-reference table.

use std::path::Path;

pub use builder::DocumentBuilder;
pub use error::QuireError;
pub use pdf::{content::PageGeometry, ObjectId, ObjectStore};

pub mod builder;
mod error;
pub mod pdf;
pub mod text;
pub mod writer;

/// Assemble a document from pre-wrapped pages and write it to `path`.
///
/// Convenience wrapper around [`DocumentBuilder`] for callers that already
/// hold all pages.
pub fn write_file<S: AsRef<str>>(pages: &[Vec<S>], path: &Path) -> Result<(), QuireError> {
    let mut builder = DocumentBuilder::new();
    for lines in pages {
        builder.add_page(lines)?;
    }
    builder.finish(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("two-pages.pdf");

        let pages = vec![
            vec!["first page".to_owned(), "with two lines".to_owned()],
            vec!["second page".to_owned()],
        ];
        write_file(&pages, &path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        let text = String::from_utf8_lossy(&bytes);
        assert!(bytes.starts_with(b"%PDF-1.4\n"));
        assert!(text.contains("/Count 2"));
        assert!(text.contains("(with two lines) Tj"));
    }
}
