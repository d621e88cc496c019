//! # Search
//!
//! Attribute search over the in-memory record set. A search is a set of
//! per-field criteria plus two global switches:
//!
//! - `strict`: the criterion must equal the field value (otherwise it only has
//!   to be a substring of it).
//! - `case_sensitive`: when off, both sides are lower-cased before comparing.
//!
//! Criteria are combined with AND. Empty criteria are dropped before matching,
//! so a search with no non-empty criterion matches every record. Results keep
//! store order; there is no ranking and no index.

use crate::model::{Field, Record};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchOptions {
    pub strict: bool,
    pub case_sensitive: bool,
}

impl SearchOptions {
    pub fn new(strict: bool, case_sensitive: bool) -> Self {
        Self {
            strict,
            case_sensitive,
        }
    }
}

/// Field → optional value. `None` and `""` never constrain the result.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Criteria {
    values: BTreeMap<Field, Option<String>>,
}

impl Criteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        self.set(field, Some(value.into()));
        self
    }

    pub fn set(&mut self, field: Field, value: Option<String>) {
        self.values.insert(field, value);
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.values.get(&field).and_then(|v| v.as_deref())
    }

    /// Non-empty criteria, in canonical field order.
    pub fn active(&self) -> impl Iterator<Item = (Field, &str)> + '_ {
        self.values
            .iter()
            .filter_map(|(field, value)| match value.as_deref() {
                Some(v) if !v.is_empty() => Some((*field, v)),
                _ => None,
            })
    }

    pub fn is_unconstrained(&self) -> bool {
        self.active().next().is_none()
    }
}

impl FromIterator<(Field, String)> for Criteria {
    fn from_iter<T: IntoIterator<Item = (Field, String)>>(iter: T) -> Self {
        let mut criteria = Criteria::new();
        for (field, value) in iter {
            criteria.set(field, Some(value));
        }
        criteria
    }
}

/// Criteria prepared for matching: empties dropped, case folded once.
pub struct Matcher {
    terms: Vec<(Field, String)>,
    options: SearchOptions,
}

impl Matcher {
    pub fn new(criteria: &Criteria, options: SearchOptions) -> Self {
        let terms = criteria
            .active()
            .map(|(field, value)| (field, fold(value, options.case_sensitive)))
            .collect();
        Self { terms, options }
    }

    pub fn matches(&self, record: &Record) -> bool {
        self.terms.iter().all(|(field, wanted)| {
            let value = record.get(*field);
            let value = fold(&value, self.options.case_sensitive);
            if self.options.strict {
                value == *wanted
            } else {
                value.contains(wanted.as_str())
            }
        })
    }
}

fn fold(value: &str, case_sensitive: bool) -> String {
    if case_sensitive {
        value.to_string()
    } else {
        value.to_lowercase()
    }
}

/// Records matching every non-empty criterion, in store order.
pub fn filter<'a>(
    records: &'a [Record],
    criteria: &Criteria,
    options: SearchOptions,
) -> Vec<&'a Record> {
    let matcher = Matcher::new(criteria, options);
    records.iter().filter(|r| matcher.matches(r)).collect()
}
