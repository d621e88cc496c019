use super::StorageBackend;
use crate::error::{PhonebookError, Result};
use crate::model::Record;
use std::cell::{Cell, RefCell};
use std::path::PathBuf;

/// In-memory storage backend for testing.
///
/// `rows` is `None` until `create` runs, mirroring an absent file.
#[derive(Default)]
pub struct MemBackend {
    rows: RefCell<Option<Vec<Record>>>,
    simulate_write_error: Cell<bool>,
    reads: Cell<usize>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// A backend that already holds `records`, as if loaded from an existing file.
    pub fn with_records(records: Vec<Record>) -> Self {
        let backend = Self::new();
        *backend.rows.borrow_mut() = Some(records);
        backend
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.set(simulate);
    }

    /// Number of `read_records` calls so far.
    pub fn read_count(&self) -> usize {
        self.reads.get()
    }

    /// Snapshot of the stored rows, bypassing any cache.
    pub fn rows(&self) -> Option<Vec<Record>> {
        self.rows.borrow().clone()
    }

    fn check_writable(&self) -> Result<()> {
        if self.simulate_write_error.get() {
            return Err(PhonebookError::Io(std::io::Error::other(
                "Simulated write error",
            )));
        }
        Ok(())
    }
}

impl StorageBackend for MemBackend {
    fn exists(&self) -> Result<bool> {
        Ok(self.rows.borrow().is_some())
    }

    fn create(&self) -> Result<()> {
        self.check_writable()?;
        *self.rows.borrow_mut() = Some(Vec::new());
        Ok(())
    }

    fn read_records(&self) -> Result<Vec<Record>> {
        self.reads.set(self.reads.get() + 1);
        self.rows.borrow().clone().ok_or_else(|| {
            PhonebookError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "memory phonebook was never created",
            ))
        })
    }

    fn append_record(&self, record: &Record) -> Result<()> {
        self.check_writable()?;
        let mut rows = self.rows.borrow_mut();
        match rows.as_mut() {
            Some(rows) => {
                rows.push(record.clone());
                Ok(())
            }
            None => Err(PhonebookError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "memory phonebook was never created",
            ))),
        }
    }

    fn rewrite_records(&self, records: &[Record]) -> Result<()> {
        self.check_writable()?;
        *self.rows.borrow_mut() = Some(records.to_vec());
        Ok(())
    }

    fn location(&self) -> PathBuf {
        PathBuf::from("memory://phonebook.csv")
    }
}
