use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::{Phonebook, StorageBackend};

pub fn run<B: StorageBackend>(book: &Phonebook<B>, ids: &[usize]) -> Result<CmdResult> {
    let records = ids
        .iter()
        .map(|id| book.get(*id).cloned())
        .collect::<Result<Vec<_>>>()?;
    Ok(CmdResult::default().with_listed_records(records))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PhonebookError;
    use crate::model::{Field, RecordFields};
    use crate::store::mem_backend::MemBackend;

    #[test]
    fn views_records_in_requested_order() {
        let mut book = Phonebook::with_backend(MemBackend::new());
        book.add(RecordFields::new().with(Field::FirstName, "Ivan")).unwrap();
        book.add(RecordFields::new().with(Field::FirstName, "Petr")).unwrap();

        let result = run(&book, &[2, 1]).unwrap();
        let names: Vec<_> = result
            .listed_records
            .iter()
            .map(|r| r.fields.first_name.as_str())
            .collect();
        assert_eq!(names, vec!["Petr", "Ivan"]);
    }

    #[test]
    fn missing_id_fails() {
        let mut book = Phonebook::with_backend(MemBackend::new());
        book.add(RecordFields::new().with(Field::FirstName, "Ivan")).unwrap();
        assert!(matches!(
            run(&book, &[1, 3]),
            Err(PhonebookError::NotFound { id: 3, .. })
        ));
    }
}
