//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for any front end (the bundled CLI, or an interactive menu).
//!
//! It owns the [`Phonebook`] and the effective [`PhonebookConfig`], so callers
//! never pass the column width or page size around themselves. Search flags
//! default to the configured ones and can be overridden per call.
//!
//! It does not print, prompt, or exit.

use crate::commands;
use crate::config::PhonebookConfig;
use crate::error::Result;
use crate::model::{Field, Record, RecordFields};
use crate::search::{Criteria, SearchOptions};
use crate::store::{Phonebook, StorageBackend};
use std::path::PathBuf;

pub struct PhonebookApi<B: StorageBackend> {
    book: Phonebook<B>,
    config: PhonebookConfig,
    paths: commands::PhonebookPaths,
}

impl<B: StorageBackend> PhonebookApi<B> {
    /// Build the store from `config` and load it.
    pub fn open(
        backend: B,
        config: PhonebookConfig,
        paths: commands::PhonebookPaths,
    ) -> Result<Self> {
        let config = config.normalized();
        let mut book = Phonebook::with_backend(backend).with_column_width(config.column_width);
        book.load()?;
        Ok(Self {
            book,
            config,
            paths,
        })
    }

    pub fn add_record(&mut self, fields: RecordFields) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.book, fields)
    }

    pub fn edit_record(&mut self, id: usize, fields: RecordFields) -> Result<commands::CmdResult> {
        commands::edit::run(&mut self.book, id, fields)
    }

    pub fn patch_record(
        &mut self,
        id: usize,
        changes: &[(Field, String)],
    ) -> Result<commands::CmdResult> {
        commands::edit::patch(&mut self.book, id, changes)
    }

    /// One page of the listing, sized by `records_per_page`.
    pub fn list_page(&self, page: usize) -> Result<commands::CmdResult> {
        commands::list::run(&self.book, page, self.config.records_per_page)
    }

    pub fn search_records(
        &mut self,
        criteria: &Criteria,
        options: Option<SearchOptions>,
    ) -> Result<commands::CmdResult> {
        let options = options.unwrap_or_else(|| self.config.search_options());
        commands::search::run(&mut self.book, criteria, options)
    }

    pub fn view_records(&self, ids: &[usize]) -> Result<commands::CmdResult> {
        commands::view::run(&self.book, ids)
    }

    pub fn config_action(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, action)
    }

    pub fn records(&self) -> &[Record] {
        self.book.records()
    }

    pub fn fields(&self) -> &'static [Field] {
        self.book.fields()
    }

    pub fn config(&self) -> &PhonebookConfig {
        &self.config
    }

    pub fn location(&self) -> PathBuf {
        self.book.backend().location()
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel, Page, PhonebookPaths};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::mem_backend::MemBackend;

    fn api_with(config: PhonebookConfig) -> PhonebookApi<MemBackend> {
        let paths = PhonebookPaths::new(std::env::temp_dir().join("phonebook-api-test"));
        PhonebookApi::open(MemBackend::new(), config, paths).unwrap()
    }

    fn named(first: &str) -> RecordFields {
        RecordFields::new().with(Field::FirstName, first)
    }

    #[test]
    fn open_loads_and_creates_store() {
        let api = api_with(PhonebookConfig::default());
        assert!(api.records().is_empty());
        assert_eq!(api.fields(), &Field::ALL);
    }

    #[test]
    fn open_normalizes_config() {
        let api = api_with(PhonebookConfig {
            column_width: 4,
            records_per_page: 0,
            ..Default::default()
        });
        assert_eq!(api.config().column_width, 16);
        assert_eq!(api.config().records_per_page, 10);
    }

    #[test]
    fn column_width_comes_from_config() {
        let mut api = api_with(PhonebookConfig {
            column_width: 20,
            ..Default::default()
        });
        assert!(api.add_record(named(&"a".repeat(20))).is_ok());
        assert!(api.add_record(named(&"a".repeat(21))).is_err());
    }

    #[test]
    fn list_uses_configured_page_size() {
        let mut api = api_with(PhonebookConfig {
            records_per_page: 2,
            ..Default::default()
        });
        for name in ["A", "B", "C"] {
            api.add_record(named(name)).unwrap();
        }
        let result = api.list_page(2).unwrap();
        assert_eq!(result.listed_records.len(), 1);
        assert_eq!(result.page.unwrap().total_pages, 2);
    }

    #[test]
    fn search_defaults_to_configured_flags() {
        let mut api = api_with(PhonebookConfig {
            search_strict: true,
            ..Default::default()
        });
        api.add_record(named("Ivan")).unwrap();

        let criteria = Criteria::new().with(Field::FirstName, "iv");
        assert!(api.search_records(&criteria, None).unwrap().listed_records.is_empty());

        let loose = Some(SearchOptions::new(false, false));
        assert_eq!(
            api.search_records(&criteria, loose).unwrap().listed_records.len(),
            1
        );
    }

    #[test]
    fn edit_and_patch_dispatch() {
        let mut api = api_with(PhonebookConfig::default());
        api.add_record(named("Ivan")).unwrap();

        api.patch_record(1, &[(Field::LastName, "Ivanov".into())]).unwrap();
        assert_eq!(api.records()[0].fields.first_name, "Ivan");
        assert_eq!(api.records()[0].fields.last_name, "Ivanov");

        api.edit_record(1, named("Petr")).unwrap();
        assert_eq!(api.records()[0].fields.first_name, "Petr");
        assert_eq!(api.records()[0].fields.last_name, "");
    }
}
