//! Record Parsing
//!
//! This module defines `RecordParser` - the trait implemented by partition
//! extraction strategies. A parser looks at a record and decides which
//! directory partition(s) its log file belongs under, e.g. a date derived
//! from a timestamp field in the payload.
//!
//! The storage layer does not ship a concrete extraction strategy; it only
//! consumes the narrow contract "given a record, produce a non-empty ordered
//! sequence of partition segments".

use crate::error::Result;
use logsink_core::{Components, ParsedRecord, Record};

/// Extracts directory partition segments from record content
pub trait RecordParser: Send + Sync {
    /// Produce the ordered partition segments for one record.
    ///
    /// Must return at least one segment; failures (e.g. an unparseable
    /// payload) surface as [`crate::Error::RecordParse`].
    fn extract_partitions(&self, record: &Record) -> Result<Vec<String>>;

    /// The consumer generation stamped into file basenames
    fn generation(&self) -> u32;

    /// Parse one record: extract its partition segments and pair it with the
    /// resulting components.
    fn parse(&self, record: &Record) -> Result<ParsedRecord> {
        let segments = self.extract_partitions(record)?;
        let components = Components::for_record(segments, self.generation())?;
        Ok(ParsedRecord::new(record.clone(), components))
    }
}
