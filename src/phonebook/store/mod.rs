//! # Storage Layer
//!
//! Records live in a single CSV file and are mirrored in memory by
//! [`Phonebook`]. The split follows two roles:
//!
//! - [`StorageBackend`]: the "how". Raw row I/O against some medium.
//! - [`Phonebook`]: the "what". The record cache, ID assignment, validation,
//!   and the rule that every mutation ends by reloading from the backend.
//!
//! ## Write Protocol
//!
//! - **Add** appends exactly one row. The row is encoded in memory first and
//!   written with a single call, so a failure never leaves half a row behind.
//!   If the last existing row lacks a line terminator, the buffer starts with
//!   one.
//! - **Edit** rewrites the whole file: header plus every record in order. The
//!   new contents go to a temporary sibling which is then renamed over the
//!   existing file.
//!
//! Neither operation touches the in-memory cache until the backend write has
//! succeeded; the cache is then replaced by a fresh read.
//!
//! ## File Layout
//!
//! ```text
//! ID,FirstName,MiddleName,LastName,Organization,WorkPhone,PersonalPhone
//! 1,Ivan,Ivanovich,Ivanov,Yandex,+79220000000,+79221111111
//! ```
//!
//! The header must match [`Field::ALL`](crate::model::Field::ALL) exactly. There
//! is no schema version; any other header is a fatal load error.
//!
//! ## Implementations
//!
//! - [`fs_backend::FsBackend`]: the CSV file on disk.
//! - [`mem_backend::MemBackend`]: in-memory rows for tests, with write-failure
//!   simulation.

use crate::error::Result;
use crate::model::Record;
use std::path::PathBuf;

pub mod fs_backend;
pub mod mem_backend;
pub mod phonebook;

pub use self::phonebook::Phonebook;

/// Raw record I/O. Each call opens, uses and releases the medium on its own.
pub trait StorageBackend {
    /// Whether the backing file exists yet. Errors when that cannot be told.
    fn exists(&self) -> Result<bool>;

    /// Create the backing file containing only the header row.
    fn create(&self) -> Result<()>;

    /// Read every row in file order.
    /// Fails if the header is not the canonical one or a row cannot be parsed.
    fn read_records(&self) -> Result<Vec<Record>>;

    /// Append one row. Either the whole row is written or nothing is.
    fn append_record(&self, record: &Record) -> Result<()>;

    /// Replace the file with the header followed by `records`.
    fn rewrite_records(&self, records: &[Record]) -> Result<()>;

    /// Where the records live, for display.
    fn location(&self) -> PathBuf;
}
