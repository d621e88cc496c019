use super::StorageBackend;
use crate::config::MIN_COLUMN_WIDTH;
use crate::error::{PhonebookError, Result};
use crate::model::{Field, Record, RecordFields};
use crate::search::{self, Criteria, SearchOptions};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Uninitialized,
    Loaded,
}

/// The record store: a backend plus the in-memory record cache.
///
/// `records[n - 1].id == n` holds for every record. Records are only ever
/// appended or replaced in place, never removed or reordered.
pub struct Phonebook<B: StorageBackend> {
    pub(crate) backend: B,
    records: Vec<Record>,
    state: State,
    column_width: usize,
}

impl<B: StorageBackend> Phonebook<B> {
    pub fn with_backend(backend: B) -> Self {
        Self {
            backend,
            records: Vec::new(),
            state: State::Uninitialized,
            column_width: MIN_COLUMN_WIDTH,
        }
    }

    /// Maximum display width accepted for any field value.
    pub fn with_column_width(mut self, column_width: usize) -> Self {
        self.column_width = column_width;
        self
    }

    pub fn column_width(&self) -> usize {
        self.column_width
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn is_loaded(&self) -> bool {
        self.state == State::Loaded
    }

    /// Canonical field order, for prompts and table headers.
    pub fn fields(&self) -> &'static [Field] {
        &Field::ALL
    }

    /// Load every record from the backend, creating a header-only file on
    /// first run. Safe to call repeatedly.
    pub fn load(&mut self) -> Result<&[Record]> {
        if !self.backend.exists()? {
            log::info!(
                "Creating new phonebook at {}",
                self.backend.location().display()
            );
            self.backend.create()?;
        }
        self.reload()?;
        self.state = State::Loaded;
        Ok(&self.records)
    }

    /// Snapshot of the cache. Empty until [`load`](Self::load) has run.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: usize) -> Result<&Record> {
        self.check_id(id)?;
        Ok(&self.records[id - 1])
    }

    /// Store a new record with the next ID and return it as read back.
    pub fn add(&mut self, fields: RecordFields) -> Result<Record> {
        fields.validate(self.column_width)?;
        self.ensure_loaded()?;

        let id = self.records.len() + 1;
        let record = Record::new(id, fields);
        self.backend.append_record(&record)?;
        self.reload()?;

        log::info!("Added record {}", id);
        self.stored(id)
    }

    /// Replace every field of record `id` (keeping the ID) and rewrite the file.
    pub fn edit(&mut self, id: usize, fields: RecordFields) -> Result<Record> {
        self.ensure_loaded()?;
        self.check_id(id)?;
        fields.validate(self.column_width)?;

        let mut updated = self.records.clone();
        updated[id - 1] = Record::new(id, fields);
        self.backend.rewrite_records(&updated)?;
        self.reload()?;

        log::info!("Edited record {}", id);
        self.stored(id)
    }

    /// Records matching every non-empty criterion, in store order.
    /// Loads the store first if needed, like `add` and `edit`.
    pub fn search(
        &mut self,
        criteria: &Criteria,
        options: SearchOptions,
    ) -> Result<Vec<Record>> {
        self.ensure_loaded()?;
        Ok(search::filter(&self.records, criteria, options)
            .into_iter()
            .cloned()
            .collect())
    }

    fn ensure_loaded(&mut self) -> Result<()> {
        if self.state == State::Uninitialized {
            self.load()?;
        }
        Ok(())
    }

    fn reload(&mut self) -> Result<()> {
        let records = self.backend.read_records()?;
        check_positions(&records)?;
        log::debug!(
            "Loaded {} records from {}",
            records.len(),
            self.backend.location().display()
        );
        self.records = records;
        Ok(())
    }

    fn check_id(&self, id: usize) -> Result<()> {
        if id == 0 || id > self.records.len() {
            return Err(PhonebookError::NotFound {
                id,
                len: self.records.len(),
            });
        }
        Ok(())
    }

    fn stored(&self, id: usize) -> Result<Record> {
        self.records
            .get(id - 1)
            .cloned()
            .ok_or_else(|| PhonebookError::Corrupt {
                row: id,
                reason: "record missing after write".to_string(),
            })
    }
}

fn check_positions(records: &[Record]) -> Result<()> {
    for (i, record) in records.iter().enumerate() {
        if record.id != i + 1 {
            return Err(PhonebookError::Corrupt {
                row: i + 1,
                reason: format!("ID {} does not match its position {}", record.id, i + 1),
            });
        }
    }
    Ok(())
}
