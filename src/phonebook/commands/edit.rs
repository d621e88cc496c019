use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Field, RecordFields};
use crate::store::{Phonebook, StorageBackend};

/// Replace every field of record `id`.
pub fn run<B: StorageBackend>(
    book: &mut Phonebook<B>,
    id: usize,
    fields: RecordFields,
) -> Result<CmdResult> {
    let record = book.edit(id, fields)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Record {} updated", record.id)));
    Ok(result.with_affected_records(vec![record]))
}

/// Overlay `changes` on the current values of record `id`, then replace it.
pub fn patch<B: StorageBackend>(
    book: &mut Phonebook<B>,
    id: usize,
    changes: &[(Field, String)],
) -> Result<CmdResult> {
    let mut fields = book.get(id)?.fields.clone();
    for (field, value) in changes {
        fields.set(*field, value.clone());
    }
    run(book, id, fields)
}
