//! Record list presenter.
//!
//! Holds the rows currently shown in the table together with the single selected row. Rows
//! are never edited in place: every change goes through the store and [`refresh`] reloads
//! the whole list in file order.
//!
//! [`refresh`]: RecordListPresenter::refresh

use crate::error::Result;
use crate::store::{Record, RecordStore};

/// Column headings of the record table
pub const COLUMNS: [&str; 3] = ["Roll No", "Name", "Marks"];

#[derive(Debug, Default)]
pub struct RecordListPresenter {
    rows: Vec<Record>,
    selected: Option<usize>,
}

impl RecordListPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the rows with a fresh load from `store`.
    ///
    /// The selection keeps its index when still in range, moves to the last row when the
    /// list shrank past it, and lands on the first row when there was none.
    pub async fn refresh(&mut self, store: &dyn RecordStore) -> Result<()> {
        self.rows.clear();
        self.rows = match store.load_all().await {
            Ok(rows) => rows,
            Err(err) => {
                self.selected = None;
                return Err(err);
            }
        };
        self.selected = match (self.selected, self.rows.len()) {
            (_, 0) => None,
            (Some(idx), len) => Some(idx.min(len - 1)),
            (None, _) => Some(0),
        };
        Ok(())
    }

    /// Rows in display order
    pub fn rows(&self) -> &[Record] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Index of the selected row
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// The selected row, if any
    pub fn selected_record(&self) -> Option<&Record> {
        self.selected.and_then(|idx| self.rows.get(idx))
    }

    pub fn select_next(&mut self) {
        if let Some(idx) = self.selected {
            self.selected = Some((idx + 1).min(self.rows.len().saturating_sub(1)));
        } else {
            self.select_first();
        }
    }

    pub fn select_previous(&mut self) {
        if let Some(idx) = self.selected {
            self.selected = Some(idx.saturating_sub(1));
        } else {
            self.select_first();
        }
    }

    pub fn select_first(&mut self) {
        self.selected = if self.rows.is_empty() { None } else { Some(0) };
    }

    pub fn select_last(&mut self) {
        self.selected = self.rows.len().checked_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryStore;

    async fn loaded(body: &str) -> RecordListPresenter {
        let store = InMemoryStore::with_content(body);
        let mut presenter = RecordListPresenter::new();
        presenter.refresh(&store).await.unwrap();
        presenter
    }

    #[tokio::test]
    async fn refresh_keeps_file_order() {
        let presenter = loaded("3,Cara,60\n1,Alice,80\n2,Bob,70\n").await;
        let rolls: Vec<&str> = presenter.rows().iter().map(|r| r.roll_no.as_str()).collect();
        assert_eq!(rolls, vec!["3", "1", "2"]);
        assert_eq!(presenter.selected(), Some(0));
    }

    #[tokio::test]
    async fn empty_store_has_no_selection() {
        let store = InMemoryStore::new();
        let mut presenter = RecordListPresenter::new();
        presenter.refresh(&store).await.unwrap();

        assert!(presenter.is_empty());
        assert_eq!(presenter.selected(), None);
        assert!(presenter.selected_record().is_none());

        presenter.select_next();
        presenter.select_last();
        assert_eq!(presenter.selected(), None);
    }

    #[tokio::test]
    async fn selection_moves_within_bounds() {
        let mut presenter = loaded("1,Alice,80\n2,Bob,70\n3,Cara,60\n").await;

        presenter.select_previous();
        assert_eq!(presenter.selected(), Some(0));
        presenter.select_next();
        presenter.select_next();
        presenter.select_next();
        assert_eq!(presenter.selected(), Some(2));
        assert_eq!(presenter.selected_record().unwrap().name, "Cara");

        presenter.select_first();
        assert_eq!(presenter.selected(), Some(0));
        presenter.select_last();
        assert_eq!(presenter.selected(), Some(2));
    }

    #[tokio::test]
    async fn selection_is_clamped_after_rows_disappear() {
        let store = InMemoryStore::with_content("1,Alice,80\n2,Bob,70\n");
        let mut presenter = RecordListPresenter::new();
        presenter.refresh(&store).await.unwrap();
        presenter.select_last();

        store.rewrite_deleting("2").await.unwrap();
        presenter.refresh(&store).await.unwrap();
        assert_eq!(presenter.selected(), Some(0));
        assert_eq!(presenter.len(), 1);
    }

    #[tokio::test]
    async fn refresh_failure_propagates() {
        let store = InMemoryStore::with_content("1,Alice\n");
        let mut presenter = RecordListPresenter::new();
        assert!(presenter.refresh(&store).await.is_err());
        assert!(presenter.is_empty());
        assert_eq!(presenter.selected(), None);
    }
}
