//! In-memory sink

use crate::core::{LogRecord, LogSink, Result};
use parking_lot::Mutex;
use std::sync::Arc;

/// Keeps a copy of every record it receives.
///
/// Clones share the same storage, so a test can hand one clone to a handler
/// and inspect the other.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    records: Arc<Mutex<Vec<LogRecord>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Vec<LogRecord> {
        self.records.lock().clone()
    }

    pub fn messages(&self) -> Vec<String> {
        self.records
            .lock()
            .iter()
            .map(|r| r.message().to_string())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }

    pub fn clear(&self) {
        self.records.lock().clear();
    }
}

impl LogSink for MemorySink {
    fn write(&self, record: &LogRecord) -> Result<()> {
        self.records.lock().push(record.clone());
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LogLevel;

    #[test]
    fn test_clones_share_storage() {
        let sink = MemorySink::new();
        let other = sink.clone();
        other
            .write(&LogRecord::new(LogLevel::Info, "hello", "app", None, None))
            .unwrap();
        assert_eq!(sink.messages(), vec!["hello".to_string()]);
        sink.clear();
        assert!(other.is_empty());
    }
}
