//! The set of modalias records found during a run

use std::collections::BTreeSet;
use std::io::Write;

use bstr::BStr;
use bstr::BString;

/// Sorted, deduplicated set of modalias lines.
///
/// Records are opaque byte strings (the kernel doesn't promise UTF-8), and
/// iteration order is byte-wise lexicographic.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ModaliasSet {
    records: BTreeSet<BString>,
}

impl ModaliasSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add every non-empty line of `contents`.
    ///
    /// Lines are split on `\n` only, anything else is part of the record.
    pub fn extend_from_bytes(&mut self, contents: &[u8]) {
        self.records.extend(
            contents
                .split(|&b| b == b'\n')
                .filter(|line| !line.is_empty())
                .map(BString::from),
        );
    }

    /// Insert a single record, returns true if it was not already present.
    pub fn insert(&mut self, record: impl Into<BString>) -> bool {
        self.records.insert(record.into())
    }

    pub fn contains(&self, record: impl AsRef<[u8]>) -> bool {
        self.records.contains(BStr::new(record.as_ref()))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate in output order
    pub fn iter(&self) -> impl Iterator<Item = &BStr> {
        self.records.iter().map(BStr::new)
    }

    /// Write one record per line, in sorted order.
    ///
    /// An empty set writes nothing at all.
    pub fn write_to(&self, mut output: impl Write) -> std::io::Result<()> {
        for record in &self.records {
            output.write_all(record)?;
            output.write_all(b"\n")?;
        }
        output.flush()
    }
}

impl<R: Into<BString>> FromIterator<R> for ModaliasSet {
    fn from_iter<T: IntoIterator<Item = R>>(iter: T) -> Self {
        Self {
            records: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl IntoIterator for ModaliasSet {
    type Item = BString;
    type IntoIter = std::collections::btree_set::IntoIter<BString>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}
