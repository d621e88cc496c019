use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::search::{Criteria, SearchOptions};
use crate::store::{Phonebook, StorageBackend};

pub fn run<B: StorageBackend>(
    book: &mut Phonebook<B>,
    criteria: &Criteria,
    options: SearchOptions,
) -> Result<CmdResult> {
    let found = book.search(criteria, options)?;
    let mut result = CmdResult::default();
    if found.is_empty() {
        result.add_message(CmdMessage::info("No records match the given criteria."));
    }
    Ok(result.with_listed_records(found))
}
