//! # Data Model
//!
//! A phonebook entry has a fixed shape: the seven fields in [`Field::ALL`], in
//! that order. The same order is used for the file header, for every row, and
//! for table columns in the front end, so it lives here and nowhere else.
//!
//! `ID` is positional. The record with `id == n` is always the n-th record in
//! the store, which is why records are never reordered or removed.

use crate::error::{PhonebookError, Result};
use std::borrow::Cow;
use std::fmt;
use unicode_width::UnicodeWidthStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Id,
    FirstName,
    MiddleName,
    LastName,
    Organization,
    WorkPhone,
    PersonalPhone,
}

impl Field {
    /// Canonical field order, shared by the file header and every row.
    pub const ALL: [Field; 7] = [
        Field::Id,
        Field::FirstName,
        Field::MiddleName,
        Field::LastName,
        Field::Organization,
        Field::WorkPhone,
        Field::PersonalPhone,
    ];

    /// Fields a user supplies; `ID` is always generated.
    pub const EDITABLE: [Field; 6] = [
        Field::FirstName,
        Field::MiddleName,
        Field::LastName,
        Field::Organization,
        Field::WorkPhone,
        Field::PersonalPhone,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Field::Id => "ID",
            Field::FirstName => "FirstName",
            Field::MiddleName => "MiddleName",
            Field::LastName => "LastName",
            Field::Organization => "Organization",
            Field::WorkPhone => "WorkPhone",
            Field::PersonalPhone => "PersonalPhone",
        }
    }

    pub fn header() -> [&'static str; 7] {
        Field::ALL.map(Field::name)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One stored contact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub id: usize,
    pub fields: RecordFields,
}

impl Record {
    pub fn new(id: usize, fields: RecordFields) -> Self {
        Self { id, fields }
    }

    /// Value of `field` as it appears in the file.
    pub fn get(&self, field: Field) -> Cow<'_, str> {
        match field {
            Field::Id => Cow::Owned(self.id.to_string()),
            other => Cow::Borrowed(self.fields.get(other)),
        }
    }

    /// All values in canonical order.
    pub fn values(&self) -> Vec<Cow<'_, str>> {
        Field::ALL.iter().map(|f| self.get(*f)).collect()
    }
}

/// The user-supplied part of a record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordFields {
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
    pub organization: String,
    pub work_phone: String,
    pub personal_phone: String,
}

impl RecordFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter. Setting `Field::Id` is a no-op.
    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Id => "",
            Field::FirstName => &self.first_name,
            Field::MiddleName => &self.middle_name,
            Field::LastName => &self.last_name,
            Field::Organization => &self.organization,
            Field::WorkPhone => &self.work_phone,
            Field::PersonalPhone => &self.personal_phone,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Id => return,
            Field::FirstName => &mut self.first_name,
            Field::MiddleName => &mut self.middle_name,
            Field::LastName => &mut self.last_name,
            Field::Organization => &mut self.organization,
            Field::WorkPhone => &mut self.work_phone,
            Field::PersonalPhone => &mut self.personal_phone,
        };
        *slot = value.into();
    }

    /// Rejects the first value whose display width exceeds `max_width`.
    pub fn validate(&self, max_width: usize) -> Result<()> {
        for field in Field::EDITABLE {
            let width = self.get(field).width();
            if width > max_width {
                return Err(PhonebookError::Validation {
                    field,
                    width,
                    max: max_width,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ivan() -> RecordFields {
        RecordFields::new()
            .with(Field::FirstName, "Ivan")
            .with(Field::MiddleName, "Ivanovich")
            .with(Field::LastName, "Ivanov")
            .with(Field::Organization, "Yandex")
            .with(Field::WorkPhone, "+79220000000")
            .with(Field::PersonalPhone, "+79221111111")
    }

    #[test]
    fn header_is_canonical() {
        assert_eq!(
            Field::header(),
            [
                "ID",
                "FirstName",
                "MiddleName",
                "LastName",
                "Organization",
                "WorkPhone",
                "PersonalPhone"
            ]
        );
    }

    #[test]
    fn record_values_follow_field_order() {
        let record = Record::new(3, ivan());
        let values: Vec<String> = record.values().into_iter().map(|v| v.into_owned()).collect();
        assert_eq!(
            values,
            vec![
                "3",
                "Ivan",
                "Ivanovich",
                "Ivanov",
                "Yandex",
                "+79220000000",
                "+79221111111"
            ]
        );
    }

    #[test]
    fn setting_id_is_ignored() {
        let fields = RecordFields::new().with(Field::Id, "42");
        assert_eq!(fields, RecordFields::new());
    }

    #[test]
    fn validate_accepts_values_at_the_limit() {
        let fields = RecordFields::new().with(Field::Organization, "a".repeat(16));
        assert!(fields.validate(16).is_ok());
    }

    #[test]
    fn validate_rejects_long_values() {
        let fields = ivan().with(Field::LastName, "x".repeat(17));
        match fields.validate(16) {
            Err(PhonebookError::Validation { field, width, max }) => {
                assert_eq!(field, Field::LastName);
                assert_eq!(width, 17);
                assert_eq!(max, 16);
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn validate_counts_display_width_not_bytes() {
        // 16 Cyrillic letters are 32 bytes but 16 columns wide.
        let fields = RecordFields::new().with(Field::FirstName, "Я".repeat(16));
        assert!(fields.validate(16).is_ok());
    }
}
