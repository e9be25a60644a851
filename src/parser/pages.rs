use indexmap::IndexSet;

use crate::error::FrequentError;

/// Which pages of a document to extract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageSelection {
    /// Every page, in document order.
    All,
    /// 1-based page numbers in the order they were requested, without repeats.
    Pages(IndexSet<u32>),
}

impl PageSelection {
    /// Parse a comma-separated list of 1-based page numbers such as `"1,4"`.
    ///
    /// An empty (or blank) input selects all pages. Repeated numbers are kept
    /// once, at the position of their first occurrence.
    pub fn parse(input: &str) -> Result<Self, FrequentError> {
        if input.trim().is_empty() {
            return Ok(PageSelection::All);
        }

        let mut pages = IndexSet::new();
        for entry in input.split(',') {
            let entry = entry.trim();
            if entry.is_empty() {
                return Err(FrequentError::invalid_page(input, "empty page number"));
            }
            let number: u32 = entry.parse().map_err(|_| {
                FrequentError::invalid_page(input, format!("'{}' is not a page number", entry))
            })?;
            if number == 0 {
                return Err(FrequentError::invalid_page(input, "page numbers start at 1"));
            }
            pages.insert(number);
        }

        Ok(PageSelection::Pages(pages))
    }

    /// Zero-based page indices for a document with `page_count` pages.
    pub fn resolve(&self, page_count: usize, input: &str) -> Result<Vec<usize>, FrequentError> {
        match self {
            PageSelection::All => Ok((0..page_count).collect()),
            PageSelection::Pages(pages) => pages
                .iter()
                .map(|&number| {
                    let index = number as usize - 1;
                    if index < page_count {
                        Ok(index)
                    } else {
                        Err(FrequentError::invalid_page(
                            input,
                            format!(
                                "page {} is out of range (document has {} pages)",
                                number, page_count
                            ),
                        ))
                    }
                })
                .collect(),
        }
    }
}
