use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::RecordFields;
use crate::store::{Phonebook, StorageBackend};

pub fn run<B: StorageBackend>(book: &mut Phonebook<B>, fields: RecordFields) -> Result<CmdResult> {
    let record = book.add(fields)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Record {} added", record.id)));
    Ok(result.with_affected_records(vec![record]))
}
