//! In-memory record store
//!
//! Records are addressed by position. Deleting shifts every later record
//! down by one, so an index is only meaningful against the store as it is
//! right now.

use crate::domain::{Record, RecordError};

/// Ordered, index-addressable collection of records
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordStore {
    records: Vec<Record>,
}

impl RecordStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if no records are registered
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Appends a record and returns its index
    pub fn append(&mut self, record: Record) -> usize {
        self.records.push(record);
        self.records.len() - 1
    }

    /// Iterates over `(index, record)` pairs in order
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Record)> {
        self.records.iter().enumerate()
    }

    /// Returns the record at `index`, if any
    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    /// Replaces the whole record at `index`, returning the previous one
    pub fn update(&mut self, index: usize, record: Record) -> Result<Record, RecordError> {
        let len = self.records.len();
        let slot = self
            .records
            .get_mut(index)
            .ok_or_else(|| out_of_range(index, len))?;
        Ok(std::mem::replace(slot, record))
    }

    /// Removes the record at `index`; later records shift down by one
    pub fn delete(&mut self, index: usize) -> Result<Record, RecordError> {
        self.check(index)?;
        Ok(self.records.remove(index))
    }

    /// Parses raw index text and checks it against the current length.
    ///
    /// Text that is not an integer is [`RecordError::NonNumericIndex`];
    /// an integer outside `[0, len)` (negatives included) is
    /// [`RecordError::IndexOutOfRange`].
    pub fn resolve_index(&self, raw: &str) -> Result<usize, RecordError> {
        let index: i64 = raw
            .trim()
            .parse()
            .map_err(|_| RecordError::NonNumericIndex(raw.trim().to_string()))?;

        match usize::try_from(index) {
            Ok(i) if i < self.records.len() => Ok(i),
            _ => Err(RecordError::IndexOutOfRange {
                index,
                len: self.records.len(),
            }),
        }
    }

    fn check(&self, index: usize) -> Result<(), RecordError> {
        if index < self.records.len() {
            Ok(())
        } else {
            Err(out_of_range(index, self.records.len()))
        }
    }
}

impl<'a> IntoIterator for &'a RecordStore {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

fn out_of_range(index: usize, len: usize) -> RecordError {
    RecordError::IndexOutOfRange {
        index: i64::try_from(index).unwrap_or(i64::MAX),
        len,
    }
}
