use super::StorageBackend;
use crate::error::{PhonebookError, Result};
use crate::model::{Field, Record, RecordFields};
use csv::{ReaderBuilder, StringRecord, WriterBuilder};
use std::fs::{self, File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use uuid::Uuid;

pub const PHONEBOOK_FILENAME: &str = "phonebook.csv";

/// CSV file backend: comma-delimited, UTF-8, one header row.
pub struct FsBackend {
    path: PathBuf,
}

impl FsBackend {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Backend for the default file name inside `dir`.
    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join(PHONEBOOK_FILENAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(PhonebookError::Io)?;
            }
        }
        Ok(())
    }

    /// Write `content` next to the target and rename it into place.
    fn replace_with(&self, content: &[u8]) -> Result<()> {
        self.ensure_parent()?;
        let dir = self.path.parent().unwrap_or_else(|| Path::new("."));
        let tmp_file = dir.join(format!(".phonebook-{}.tmp", Uuid::new_v4()));
        if let Err(e) = fs::write(&tmp_file, content) {
            let _ = fs::remove_file(&tmp_file);
            return Err(PhonebookError::Io(e));
        }
        fs::rename(&tmp_file, &self.path).map_err(|e| {
            let _ = fs::remove_file(&tmp_file);
            PhonebookError::Io(e)
        })?;
        Ok(())
    }
}

impl StorageBackend for FsBackend {
    fn exists(&self) -> Result<bool> {
        Ok(self.path.try_exists()?)
    }

    fn create(&self) -> Result<()> {
        let content = encode(true, &[])?;
        self.replace_with(&content)
    }

    fn read_records(&self) -> Result<Vec<Record>> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .from_path(&self.path)?;

        let headers = reader.headers()?.clone();
        let expected = Field::header();
        if !headers.iter().eq(expected.iter().copied()) {
            return Err(PhonebookError::HeaderMismatch {
                expected: expected.join(","),
                found: headers.iter().collect::<Vec<_>>().join(","),
            });
        }

        let mut records = Vec::new();
        for (i, row) in reader.records().enumerate() {
            records.push(decode(&row?, i + 1)?);
        }
        Ok(records)
    }

    fn append_record(&self, record: &Record) -> Result<()> {
        let encoded = encode(false, std::slice::from_ref(record))?;
        let mut file = OpenOptions::new()
            .read(true)
            .append(true)
            .open(&self.path)?;

        // A last row without a terminator would swallow the new one.
        let mut row = Vec::with_capacity(encoded.len() + 1);
        if !ends_with_newline(&mut file)? {
            row.push(b'\n');
        }
        row.extend_from_slice(&encoded);
        file.write_all(&row)?;
        file.flush()?;
        Ok(())
    }

    fn rewrite_records(&self, records: &[Record]) -> Result<()> {
        let content = encode(true, records)?;
        self.replace_with(&content)
    }

    fn location(&self) -> PathBuf {
        self.path.clone()
    }
}

/// True for an empty file or one whose last byte is `\n`.
fn ends_with_newline(file: &mut File) -> Result<bool> {
    if file.metadata()?.len() == 0 {
        return Ok(true);
    }
    file.seek(SeekFrom::End(-1))?;
    let mut last = [0u8; 1];
    file.read_exact(&mut last)?;
    Ok(last[0] == b'\n')
}

/// Encode rows (and optionally the header) into a buffer.
fn encode(with_header: bool, records: &[Record]) -> Result<Vec<u8>> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());
    if with_header {
        writer.write_record(Field::header())?;
    }
    for record in records {
        writer.write_record(record.values().iter().map(|v| v.as_bytes()))?;
    }
    writer.flush()?;
    writer
        .into_inner()
        .map_err(|e| PhonebookError::Io(std::io::Error::other(e.to_string())))
}

/// `row` is the 1-based data row number, used in error messages.
fn decode(raw: &StringRecord, row: usize) -> Result<Record> {
    let id_text = raw.get(0).unwrap_or_default();
    let id = id_text
        .parse::<usize>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| PhonebookError::Corrupt {
            row,
            reason: format!("ID '{}' is not a positive integer", id_text),
        })?;

    let mut fields = RecordFields::new();
    for (i, field) in Field::EDITABLE.into_iter().enumerate() {
        fields.set(field, raw.get(i + 1).unwrap_or_default());
    }
    Ok(Record::new(id, fields))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_header_and_quotes_special_values() {
        let record = Record::new(
            1,
            RecordFields::new()
                .with(Field::FirstName, "Ivan")
                .with(Field::Organization, "Horns, Hooves")
                .with(Field::LastName, "\"Ivanov\""),
        );
        let bytes = encode(true, &[record]).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines[0],
            "ID,FirstName,MiddleName,LastName,Organization,WorkPhone,PersonalPhone"
        );
        assert_eq!(lines[1], "1,Ivan,,\"\"\"Ivanov\"\"\",\"Horns, Hooves\",,");
    }

    #[test]
    fn decode_rejects_non_numeric_id() {
        let raw = StringRecord::from(vec!["x", "a", "b", "c", "d", "e", "f"]);
        assert!(matches!(
            decode(&raw, 4),
            Err(PhonebookError::Corrupt { row: 4, .. })
        ));
    }

    #[test]
    fn decode_rejects_zero_id() {
        let raw = StringRecord::from(vec!["0", "a", "b", "c", "d", "e", "f"]);
        assert!(decode(&raw, 1).is_err());
    }
}
