//! Record persistence.
//!
//! The store is a plain text file holding one student record per line. Every mutation reads
//! the whole body, transforms it, and writes it back; nothing is cached between calls.
//!
//! [`RecordStore`] splits the work in two layers. Implementations only provide raw body
//! access (`read_body`, `write_body`, `append_line`); the record operations are provided
//! methods built on top of the [`codec`] so every backend shares the same semantics:
//!
//! - a missing backing file is an empty store
//! - duplicates are tolerated: lookups return the first match, deletes remove all matches
//! - update and delete of an absent roll number fail with
//!   [`RosterError::RecordNotFound`] and leave the backend untouched

pub mod codec;
pub mod flat_file;
pub mod in_memory;

pub use flat_file::FlatFileStore;
pub use in_memory::InMemoryStore;

use crate::error::{Result, RosterError};
use async_trait::async_trait;

/// One student entry. All fields are free text; marks are never parsed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Record {
    pub roll_no: String,
    pub name: String,
    pub marks: String,
}

impl Record {
    pub fn new(
        roll_no: impl Into<String>,
        name: impl Into<String>,
        marks: impl Into<String>,
    ) -> Self {
        Self {
            roll_no: roll_no.into(),
            name: name.into(),
            marks: marks.into(),
        }
    }
}

/// Result of a roll-number lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// First record carrying the roll number
    Found(Record),
    /// The store exists but no line matches
    NotFound,
    /// The backing store has never been created
    NoStore,
}

/// Core trait for record storage.
///
/// Implementations must be thread-safe so the application can hold them behind an `Arc`.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Read the full body, or `None` when the store has never been created.
    async fn read_body(&self) -> Result<Option<String>>;

    /// Replace the full body, creating the store if needed.
    async fn write_body(&self, content: String) -> Result<()>;

    /// Append one already-encoded line. The newline is added by the implementation.
    async fn append_line(&self, line: String) -> Result<()>;

    /// Human readable location, shown in the status line.
    fn describe(&self) -> String;

    /// Load every record in file order. A missing store loads as empty.
    async fn load_all(&self) -> Result<Vec<Record>> {
        let records = match self.read_body().await? {
            Some(body) => codec::decode_all(&body)?,
            None => Vec::new(),
        };
        log::debug!("loaded {} records from {}", records.len(), self.describe());
        Ok(records)
    }

    /// Append a record at the end of the store.
    async fn append(&self, record: &Record) -> Result<()> {
        self.append_line(codec::encode(record)).await?;
        log::info!("appended record {} to {}", record.roll_no, self.describe());
        Ok(())
    }

    /// Replace name and marks of every record with `roll_no`. Returns the number replaced.
    async fn rewrite_replacing(&self, roll_no: &str, name: &str, marks: &str) -> Result<usize> {
        let body = self
            .read_body()
            .await?
            .ok_or_else(|| RosterError::record_not_found(roll_no))?;

        let replacement = Record::new(roll_no, name, marks);
        let rewrite = codec::rewrite_replacing(&body, roll_no, &replacement)?;
        if rewrite.matched == 0 {
            log::warn!("update of unknown roll number {roll_no}");
            return Err(RosterError::record_not_found(roll_no));
        }

        self.write_body(rewrite.content).await?;
        log::info!("replaced {} record(s) with roll number {roll_no}", rewrite.matched);
        Ok(rewrite.matched)
    }

    /// Remove every record with `roll_no`. Returns the number removed.
    async fn rewrite_deleting(&self, roll_no: &str) -> Result<usize> {
        let body = self
            .read_body()
            .await?
            .ok_or_else(|| RosterError::record_not_found(roll_no))?;

        let rewrite = codec::rewrite_deleting(&body, roll_no)?;
        if rewrite.matched == 0 {
            log::warn!("delete of unknown roll number {roll_no}");
            return Err(RosterError::record_not_found(roll_no));
        }

        self.write_body(rewrite.content).await?;
        log::info!("deleted {} record(s) with roll number {roll_no}", rewrite.matched);
        Ok(rewrite.matched)
    }

    /// Look up the first record with `roll_no`.
    async fn find_first(&self, roll_no: &str) -> Result<SearchOutcome> {
        let outcome = match self.read_body().await? {
            None => SearchOutcome::NoStore,
            Some(body) => match codec::find_first(&body, roll_no)? {
                Some(record) => SearchOutcome::Found(record),
                None => SearchOutcome::NotFound,
            },
        };
        log::debug!("lookup of roll number {roll_no}: {outcome:?}");
        Ok(outcome)
    }

    /// Whether any record carries `roll_no`.
    async fn contains(&self, roll_no: &str) -> Result<bool> {
        Ok(matches!(
            self.find_first(roll_no).await?,
            SearchOutcome::Found(_)
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(lines: &[&str]) -> InMemoryStore {
        let mut body = lines.join("\n");
        body.push('\n');
        InMemoryStore::with_content(body)
    }

    #[tokio::test]
    async fn missing_store_loads_empty() {
        let store = InMemoryStore::new();
        assert!(store.load_all().await.unwrap().is_empty());
        assert_eq!(store.find_first("1").await.unwrap(), SearchOutcome::NoStore);
        assert!(store.content().is_none());
    }

    #[tokio::test]
    async fn append_creates_the_store() {
        let store = InMemoryStore::new();
        store.append(&Record::new("1", "Alice", "80")).await.unwrap();
        store.append(&Record::new("2", "Bob", "70")).await.unwrap();

        assert_eq!(store.content().as_deref(), Some("1,Alice,80\n2,Bob,70\n"));
        let records = store.load_all().await.unwrap();
        assert_eq!(records.last(), Some(&Record::new("2", "Bob", "70")));
    }

    #[tokio::test]
    async fn append_after_unterminated_body_starts_a_new_line() {
        let store = InMemoryStore::with_content("1,Alice,80");
        store.append(&Record::new("2", "Bob", "70")).await.unwrap();

        assert_eq!(store.content().as_deref(), Some("1,Alice,80\n2,Bob,70\n"));
    }

    #[tokio::test]
    async fn update_and_delete_on_missing_store_fail_without_creating_it() {
        let store = InMemoryStore::new();

        let err = store.rewrite_replacing("1", "A", "1").await.unwrap_err();
        assert!(matches!(err, RosterError::RecordNotFound { .. }));
        let err = store.rewrite_deleting("1").await.unwrap_err();
        assert!(matches!(err, RosterError::RecordNotFound { .. }));

        assert!(store.content().is_none());
    }

    #[tokio::test]
    async fn update_of_unknown_roll_number_leaves_body_alone() {
        let store = seeded(&["1,Alice,80"]);
        let err = store.rewrite_replacing("9", "X", "1").await.unwrap_err();
        assert!(matches!(err, RosterError::RecordNotFound { .. }));
        assert_eq!(store.content().as_deref(), Some("1,Alice,80\n"));
    }

    #[tokio::test]
    async fn duplicates_follow_first_match_and_remove_all() {
        let store = seeded(&["1,Alice,80", "1,Alice2,90", "2,Bob,70"]);

        assert_eq!(
            store.find_first("1").await.unwrap(),
            SearchOutcome::Found(Record::new("1", "Alice", "80"))
        );
        assert_eq!(store.rewrite_deleting("1").await.unwrap(), 2);
        assert_eq!(store.content().as_deref(), Some("2,Bob,70\n"));
    }

    #[tokio::test]
    async fn contains_reports_presence() {
        let store = seeded(&["1,Alice,80"]);
        assert!(store.contains("1").await.unwrap());
        assert!(!store.contains("2").await.unwrap());
    }
}
