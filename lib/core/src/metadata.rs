use crate::record::BookRecord;
use ahash::AHashMap;

/// Title-keyed book metadata with first-wins deduplication
///
/// Raw metadata rows may contain the same title more than once (duplicate
/// print editions); the first row in table order wins and the rest are
/// discarded when the map is built.
#[derive(Debug)]
pub struct MetadataTable {
    records: AHashMap<String, BookRecord>,
}

impl MetadataTable {
    #[must_use]
    pub fn new(rows: Vec<BookRecord>) -> Self {
        let mut records = AHashMap::with_capacity(rows.len());
        for row in rows {
            records.entry(row.title.clone()).or_insert(row);
        }
        Self { records }
    }

    /// Expand a canonical title into its display record.
    ///
    /// Lookup is exact, canonical casing. `None` means the title has no
    /// metadata row; callers skip such entries rather than fail.
    #[inline]
    pub fn hydrate(&self, title: &str) -> Option<&BookRecord> {
        self.records.get(title)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
