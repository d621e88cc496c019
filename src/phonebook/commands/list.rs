use crate::commands::{CmdResult, Page};
use crate::error::Result;
use crate::store::{Phonebook, StorageBackend};

/// Number of pages needed for `total` records. An empty phonebook still has one.
pub fn page_count(total: usize, per_page: usize) -> usize {
    total.div_ceil(per_page.max(1)).max(1)
}

/// List one page of records. Out-of-range page numbers are clamped.
pub fn run<B: StorageBackend>(
    book: &Phonebook<B>,
    page: usize,
    per_page: usize,
) -> Result<CmdResult> {
    let per_page = per_page.max(1);
    let records = book.records();
    let total_pages = page_count(records.len(), per_page);
    let number = page.clamp(1, total_pages);

    let listed = records
        .chunks(per_page)
        .nth(number - 1)
        .map(|chunk| chunk.to_vec())
        .unwrap_or_default();

    Ok(CmdResult::default()
        .with_listed_records(listed)
        .with_page(Page {
            number,
            total_pages,
            per_page,
            total_records: records.len(),
        }))
}
