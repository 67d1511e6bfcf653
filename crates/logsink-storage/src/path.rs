//! Log File Path Codec
//!
//! This module defines `LogFilePath` - the identity of one log file on
//! storage, with a canonical, losslessly-invertible encoding to and from a
//! path string.
//!
//! ## Path Format
//!
//! ```text
//! prefix/topic/partition1/.../partitionN/generation_partition_offset[ext]
//! ```
//!
//! where:
//! - **prefix** is the top-level directory for log files. It can be a local
//!   path or an object store prefix
//! - **topic** is the source log topic
//! - **partition1, ..., partitionN** are the partition names extracted from
//!   record content, e.g. a date such as `dt=2024-01-01`
//! - **generation** is the consumer version. It allows rolling upgrades of
//!   incompatible releases to coexist on the same storage
//! - **partition** is the source log partition of the topic
//! - **offset** is the offset of the first record in the batch committed to
//!   this file, zero-padded to 20 digits
//!
//! The offset padding makes lexicographic ordering of basenames equal to
//! numeric ordering of offsets, so listing code never has to re-sort by
//! parsed offset.
//!
//! Each log file has a hidden crc sidecar in the same directory:
//! `.basename.crc`.
//!
//! ## Decoding
//!
//! Recovery logic re-derives identities purely from paths on disk, so
//! `LogFilePath::from_path` is exact: any path that does not follow the
//! scheme fails with an error naming the check that rejected it. Decoding is
//! the full inverse of encoding for identities whose filename components are
//! the single generation segment (the only kind the forward direction
//! produces).

use crate::error::{Error, Result};
use logsink_core::{Components, ParsedRecord};
use object_store::path::Path as ObjectPath;
use object_store::ObjectStore;
use std::fmt;

const PATH_DELIMITER: char = '/';
const FILENAME_DELIMITER: &str = "_";

/// Identity of a single log file: where it lives and which slice of which
/// partition it holds
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LogFilePath {
    prefix: String,
    topic: String,
    partition: u32,
    components: Components,
    generation: u32,
    offset: u64,
    extension: String,
}

impl LogFilePath {
    /// Build a path identity from its parts.
    ///
    /// `extension` must include its leading dot when non-empty; it is
    /// appended to the encoded path verbatim.
    pub fn new(
        prefix: impl Into<String>,
        topic: impl Into<String>,
        partition: u32,
        components: Components,
        generation: u32,
        offset: u64,
        extension: impl Into<String>,
    ) -> Self {
        Self {
            prefix: prefix.into(),
            topic: topic.into(),
            partition,
            components,
            generation,
            offset,
            extension: extension.into(),
        }
    }

    /// Build a path identity for a parsed record, using the record's own
    /// topic, partition and offset.
    pub fn from_parsed(
        prefix: impl Into<String>,
        parsed: &ParsedRecord,
        generation: u32,
        extension: impl Into<String>,
    ) -> Self {
        Self::new(
            prefix,
            parsed.record.topic.clone(),
            parsed.record.partition,
            parsed.components.clone(),
            generation,
            parsed.record.offset,
            extension,
        )
    }

    /// Decode a path back into its identity.
    ///
    /// `path` must start with `prefix`; the remainder must contain a topic,
    /// at least one partition segment and a well-formed basename.
    pub fn from_path(prefix: &str, path: &str) -> Result<Self> {
        let suffix = path.strip_prefix(prefix).ok_or_else(|| Error::PrefixMismatch {
            prefix: prefix.to_string(),
            path: path.to_string(),
        })?;
        let suffix = suffix.strip_prefix(PATH_DELIMITER).unwrap_or(suffix);

        let elements: Vec<&str> = suffix.split(PATH_DELIMITER).collect();
        // Suffix must contain a topic, at least one partition, and the basename.
        if elements.len() < 3 {
            return Err(Error::TooFewElements(path.to_string()));
        }

        let topic = elements[0];
        let path_components: Vec<String> = elements[1..elements.len() - 1]
            .iter()
            .map(|s| s.to_string())
            .collect();

        // Split the extension off the basename.
        let raw_basename = elements[elements.len() - 1];
        let (basename, extension) = match raw_basename.rfind('.') {
            Some(index) => raw_basename.split_at(index),
            None => (raw_basename, ""),
        };

        let tokens: Vec<&str> = basename.split(FILENAME_DELIMITER).collect();
        if tokens.len() != 3 {
            return Err(Error::BasenameTokenCount(raw_basename.to_string()));
        }
        let generation: u32 = tokens[0]
            .parse()
            .map_err(|_| Error::InvalidGeneration(tokens[0].to_string()))?;
        let partition: u32 = tokens[1]
            .parse()
            .map_err(|_| Error::InvalidPartition(tokens[1].to_string()))?;
        let offset: u64 = tokens[2]
            .parse()
            .map_err(|_| Error::InvalidOffset(tokens[2].to_string()))?;

        // The forward direction only ever emits the generation as a filename
        // component, so that is all the backward direction can reconstruct.
        let components = Components::new(path_components, vec![generation.to_string()])?;

        Ok(Self::new(
            prefix, topic, partition, components, generation, offset, extension,
        ))
    }

    /// Directory holding this log file: `prefix/topic/<path components>`
    pub fn dir(&self) -> String {
        let mut elements = Vec::with_capacity(2 + self.components.path().len());
        elements.push(self.prefix.as_str());
        elements.push(self.topic.as_str());
        for component in self.components.path() {
            elements.push(component);
        }
        elements.join("/")
    }

    /// File basename without extension:
    /// `<filename components>_partition_offset20`
    pub fn basename(&self) -> String {
        let mut elements: Vec<String> = self.components.filename().to_vec();
        elements.push(self.partition.to_string());
        elements.push(format!("{:020}", self.offset));
        elements.join(FILENAME_DELIMITER)
    }

    /// Full path of the log file, extension included
    pub fn path(&self) -> String {
        format!("{}/{}{}", self.dir(), self.basename(), self.extension)
    }

    /// Path of the hidden crc sidecar: `dir/.basename.crc`
    pub fn crc_path(&self) -> String {
        format!("{}/.{}.crc", self.dir(), self.basename())
    }

    /// Delete this log file and its crc sidecar from the object store.
    ///
    /// Missing files are not an error: deletion is used during cleanup of
    /// partially written batches, where either file may not exist yet.
    pub async fn delete(&self, store: &dyn ObjectStore) -> Result<()> {
        for target in [self.crc_path(), self.path()] {
            match store.delete(&ObjectPath::from(target)).await {
                Ok(()) | Err(object_store::Error::NotFound { .. }) => {}
                Err(e) => return Err(e.into()),
            }
        }
        logsink_observability::metrics::FILES_DELETED_TOTAL
            .with_label_values(&[&self.topic])
            .inc();
        Ok(())
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub fn partition(&self) -> u32 {
        self.partition
    }

    pub fn components(&self) -> &Components {
        &self.components
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }

    pub fn offset(&self) -> u64 {
        self.offset
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }
}

impl fmt::Display for LogFilePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;
    use logsink_core::Record;

    fn sample() -> LogFilePath {
        let components = Components::for_record(vec!["dt=2024-01-01".to_string()], 1).unwrap();
        LogFilePath::new("/logs", "orders", 3, components, 1, 123, ".json")
    }

    #[test]
    fn test_dir() {
        assert_eq!(sample().dir(), "/logs/orders/dt=2024-01-01");
    }

    #[test]
    fn test_basename_pads_offset() {
        assert_eq!(sample().basename(), "1_3_00000000000000000123");
    }

    #[test]
    fn test_path_appends_extension_verbatim() {
        assert_eq!(
            sample().path(),
            "/logs/orders/dt=2024-01-01/1_3_00000000000000000123.json"
        );
    }

    #[test]
    fn test_crc_path_is_hidden_and_unextended() {
        assert_eq!(
            sample().crc_path(),
            "/logs/orders/dt=2024-01-01/.1_3_00000000000000000123.crc"
        );
    }

    #[test]
    fn test_display_is_full_path() {
        let p = sample();
        assert_eq!(p.to_string(), p.path());
    }

    #[test]
    fn test_from_parsed() {
        let record = Record::new("orders", 7, 42, 1_700_000_000_000, None, Bytes::from("payload"));
        let components = Components::for_record(vec!["dt=2024-01-01".to_string()], 5).unwrap();
        let parsed = ParsedRecord::new(record, components);

        let path = LogFilePath::from_parsed("/logs", &parsed, 5, "");
        assert_eq!(path.topic(), "orders");
        assert_eq!(path.partition(), 7);
        assert_eq!(path.offset(), 42);
        assert_eq!(path.path(), "/logs/orders/dt=2024-01-01/5_7_00000000000000000042");
    }

    #[test]
    fn test_multi_segment_directory() {
        let components = Components::new(
            vec!["dt=2024-01-01".to_string(), "hr=23".to_string()],
            vec!["2".to_string()],
        )
        .unwrap();
        let path = LogFilePath::new("/logs", "clicks", 0, components, 2, 0, ".gz");
        assert_eq!(
            path.path(),
            "/logs/clicks/dt=2024-01-01/hr=23/2_0_00000000000000000000.gz"
        );
    }
}
