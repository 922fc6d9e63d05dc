use crate::error::{ExtractError, Result};
use std::path::Path;

/// Extract the raw text units of a document, in natural reading order.
///
/// `.pdf` yields one unit per page; `.txt` yields the whole file as a
/// single unit, read as raw bytes with no encoding validation. Any other
/// extension fails with [`ExtractError::UnsupportedFileType`] naming the
/// extension, before any parsing is attempted.
pub fn extract_units(path: &Path) -> Result<Vec<String>> {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase());

    match ext.as_deref() {
        Some("pdf") => extract_pdf(path),
        Some("txt") => extract_plain_text(path),
        Some(other) => Err(ExtractError::UnsupportedFileType(format!(".{other}"))),
        None => Err(ExtractError::UnsupportedFileType(String::new())),
    }
}

/// One unit per page; the first page that fails to extract fails the
/// whole document.
fn extract_pdf(path: &Path) -> Result<Vec<String>> {
    let doc = lopdf::Document::load(path).map_err(|source| ExtractError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let pages = doc.get_pages();
    let mut units = Vec::with_capacity(pages.len());

    for page in pages.keys() {
        let text = doc
            .extract_text(&[*page])
            .map_err(|source| ExtractError::Page {
                page: *page,
                source,
            })?;
        units.push(text);
    }

    log::debug!("extracted {} pages from {}", units.len(), path.display());
    Ok(units)
}

fn extract_plain_text(path: &Path) -> Result<Vec<String>> {
    let bytes = std::fs::read(path)?;
    Ok(vec![String::from_utf8_lossy(&bytes).into_owned()])
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_unsupported_extension_names_it() {
        let err = extract_units(Path::new("manual.docx")).unwrap_err();
        match err {
            ExtractError::UnsupportedFileType(ext) => assert_eq!(ext, ".docx"),
            other => panic!("expected UnsupportedFileType, got: {other}"),
        }
    }

    #[test]
    fn test_extension_dispatch_is_case_insensitive() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("NOTES.TXT");
        std::fs::write(&path, "shouting file").unwrap();

        let units = extract_units(&path).unwrap();
        assert_eq!(units, vec!["shouting file"]);
    }

    #[test]
    fn test_missing_extension_is_unsupported() {
        let err = extract_units(Path::new("README")).unwrap_err();
        assert!(matches!(err, ExtractError::UnsupportedFileType(_)));
    }

    #[test]
    fn test_plain_text_is_a_single_unit() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("faq.txt");
        std::fs::write(&path, "line one\nline two\n").unwrap();

        let units = extract_units(&path).unwrap();
        assert_eq!(units, vec!["line one\nline two\n"]);
    }

    #[test]
    fn test_plain_text_tolerates_invalid_utf8() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("legacy.txt");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(&[b'o', b'k', 0xff, 0xfe, b'!']).unwrap();

        let units = extract_units(&path).unwrap();
        assert_eq!(units.len(), 1);
        assert!(units[0].starts_with("ok"));
        assert!(units[0].ends_with('!'));
    }

    #[test]
    fn test_missing_text_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let err = extract_units(&dir.path().join("gone.txt")).unwrap_err();
        assert!(matches!(err, ExtractError::Io(_)));
    }

    #[test]
    fn test_garbage_pdf_fails_to_open() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.pdf");
        std::fs::write(&path, "this is not a pdf").unwrap();

        let err = extract_units(&path).unwrap_err();
        assert!(matches!(err, ExtractError::Open { .. }));
    }
}
