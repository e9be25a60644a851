use std::path::{Path, PathBuf};

use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use pdf_extract::{Document, PlainTextOutput};
use tracing::{debug, info, warn};

use super::pages::PageSelection;
use super::security;
use crate::error::FrequentError;

/// A parsed PDF whose content is readable (decrypted if it was encrypted).
pub struct PdfDocument {
    path: PathBuf,
    inner: Document,
    /// 1-based page numbers as reported by the page tree, in document order.
    page_numbers: Vec<u32>,
}

impl PdfDocument {
    /// Open `path`, decrypting it with `password` when the document is encrypted.
    ///
    /// Both the user and the owner password unlock the document. The file
    /// handle only lives for the duration of the read.
    pub fn open(path: &Path, password: &str) -> Result<Self, FrequentError> {
        let bytes = std::fs::read(path).map_err(|source| FrequentError::NotFound {
            path: path.to_path_buf(),
            source,
        })?;
        let bytes = readable_bytes(path, bytes, password)?;

        let inner = Document::load_mem(&bytes).map_err(|e| malformed(path, e))?;

        let page_numbers: Vec<u32> = inner.get_pages().keys().copied().collect();
        debug!("{} has {} pages", path.display(), page_numbers.len());

        Ok(Self {
            path: path.to_path_buf(),
            inner,
            page_numbers,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn page_count(&self) -> usize {
        self.page_numbers.len()
    }

    /// Extract the plain text of the page at zero-based `index`.
    pub fn page_text(&self, index: usize) -> Result<String, FrequentError> {
        let page_num = *self
            .page_numbers
            .get(index)
            .ok_or_else(|| FrequentError::Extraction {
                page: index as u32 + 1,
                message: format!("document has only {} pages", self.page_count()),
            })?;

        let mut text = String::new();
        {
            let mut output = PlainTextOutput::new(&mut text);
            pdf_extract::output_doc_page(&self.inner, &mut output, page_num).map_err(|e| {
                FrequentError::Extraction {
                    page: page_num,
                    message: e.to_string(),
                }
            })?;
        }

        Ok(strip_pdf_artifacts(&text))
    }
}

/// Extract the text of the pages named by `pagenos` from the PDF at `path`.
///
/// Pages are extracted in the order requested and concatenated without a
/// separator. An empty `pagenos` extracts every page. The result is empty for
/// documents without a text layer; that is not an error.
pub fn extract(path: &Path, password: &str, pagenos: &str) -> Result<String, FrequentError> {
    let selection = PageSelection::parse(pagenos)?;
    let document = PdfDocument::open(path, password)?;
    let indices = selection.resolve(document.page_count(), pagenos)?;

    info!(
        "Extracting {} of {} pages from {}",
        indices.len(),
        document.page_count(),
        document.path().display()
    );

    let pb = ProgressBar::new(indices.len() as u64);
    pb.set_style(
        ProgressStyle::with_template("{spinner:.green} [{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {msg}")
            .map(|s| s.progress_chars("━━╸━"))
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );

    let mut text = String::new();
    for index in indices {
        pb.set_message(format!("{}", style(format!("page {}", index + 1)).dim()));
        let page_text = document.page_text(index)?;
        debug!("Page {} yielded {} characters", index + 1, page_text.len());
        text.push_str(&page_text);
        pb.inc(1);
    }
    pb.finish_and_clear();

    if text.trim().is_empty() {
        warn!(
            "No extractable text in {} (the document may be scanned images)",
            document.path().display()
        );
    }

    Ok(text)
}

/// The bytes of a document pdf-extract can read: the file as is, or a
/// decrypted copy when it is encrypted.
///
/// Documents with an empty user password are decrypted on load.
fn readable_bytes(path: &Path, bytes: Vec<u8>, password: &str) -> Result<Vec<u8>, FrequentError> {
    let mut document = lopdf::Document::load_mem(&bytes).map_err(|e| malformed(path, e))?;

    if document.is_encrypted() {
        debug!("{} is encrypted, attempting decryption", path.display());
        security::unlock(&mut document, password).map_err(|e| {
            let reason = if password.is_empty() {
                "the document is encrypted and a password is required".to_string()
            } else {
                format!("incorrect password ({})", e)
            };
            FrequentError::AccessDenied {
                path: path.to_path_buf(),
                reason,
            }
        })?;
    }

    if document.encryption_state.is_none() {
        return Ok(bytes);
    }

    let mut decrypted = Vec::new();
    document
        .save_to(&mut decrypted)
        .map_err(|e| malformed(path, e))?;
    Ok(decrypted)
}

fn malformed(path: &Path, e: impl std::fmt::Display) -> FrequentError {
    FrequentError::Malformed {
        path: path.to_path_buf(),
        message: e.to_string(),
    }
}

/// Remove characters some producers leave in text strings.
fn strip_pdf_artifacts(text: &str) -> String {
    text.replace('\u{0}', "").replace('\u{FEFF}', "")
}
