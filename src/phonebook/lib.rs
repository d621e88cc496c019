//! # Phonebook Architecture
//!
//! Phonebook is a small contact directory library with a CLI client on top.
//! Contacts are kept in one CSV file and mirrored in memory.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (main.rs, args.rs, print.rs)                           │
//! │  - Parses arguments, renders tables, owns stdout/stderr     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API (api.rs)                                               │
//! │  - Thin facade, applies configuration                       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Commands (commands/*.rs)                                   │
//! │  - One function per operation, returns `CmdResult`          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Store (store/) + Search (search.rs)                        │
//! │  - Phonebook cache over a StorageBackend                    │
//! │  - FsBackend (CSV file), MemBackend (tests)                 │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identifiers
//!
//! A record's `ID` is its 1-based position in the file. New records get
//! `len + 1`; edits keep the ID. Nothing deletes or reorders records, and
//! loading a file whose IDs do not match their positions fails.
//!
//! ## No I/O Assumptions in Core
//!
//! From `api.rs` inward, code never prints, prompts, or exits. Every store
//! operation finishes its file I/O before returning and refreshes the cache
//! from the file after each mutation.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Business logic for each operation
//! - [`store`]: Storage abstraction, the CSV backend and the record cache
//! - [`search`]: Criteria matching
//! - [`model`]: `Field`, `Record`, `RecordFields`
//! - [`config`]: Settings file
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod search;
pub mod store;
