//! In-memory backend holding the file body as a string.
//!
//! Behaves exactly like [`FlatFileStore`](crate::store::FlatFileStore) minus the disk: `None`
//! stands for a backing file that was never created. Used by tests and by callers that want a
//! scratch roster.

use crate::error::Result;
use crate::store::RecordStore;
use async_trait::async_trait;
use parking_lot::Mutex;

#[derive(Debug, Default)]
pub struct InMemoryStore {
    body: Mutex<Option<String>>,
}

impl InMemoryStore {
    /// Store that has not been created yet
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with an existing body (same format as the backing file)
    pub fn with_content(body: impl Into<String>) -> Self {
        Self {
            body: Mutex::new(Some(body.into())),
        }
    }

    /// Snapshot of the current body
    pub fn content(&self) -> Option<String> {
        self.body.lock().clone()
    }
}

#[async_trait]
impl RecordStore for InMemoryStore {
    async fn read_body(&self) -> Result<Option<String>> {
        Ok(self.content())
    }

    async fn write_body(&self, content: String) -> Result<()> {
        *self.body.lock() = Some(content);
        Ok(())
    }

    async fn append_line(&self, line: String) -> Result<()> {
        let mut body = self.body.lock();
        let body = body.get_or_insert_with(String::new);
        if !body.is_empty() && !body.ends_with('\n') {
            body.push('\n');
        }
        body.push_str(&line);
        body.push('\n');
        Ok(())
    }

    fn describe(&self) -> String {
        "<memory>".to_string()
    }
}
