//! Test doubles shared across the crate's test modules

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;

use crate::config::StoreSettings;
use crate::domain::Todo;
use crate::error::{StoreError, StoreResult};
use crate::repository::{RecordSource, ViewSink};

/// Settings that fail fast on lock contention
pub(crate) fn settings() -> StoreSettings {
    StoreSettings {
        busy_timeout_ms: 0,
        ..StoreSettings::default()
    }
}

/// View sink that remembers every render
#[derive(Default)]
pub(crate) struct RecordingSink {
    renders: Mutex<Vec<Vec<Todo>>>,
}

impl RecordingSink {
    pub(crate) fn renders(&self) -> Vec<Vec<Todo>> {
        self.renders.lock().unwrap().clone()
    }

    pub(crate) fn last(&self) -> Option<Vec<Todo>> {
        self.renders.lock().unwrap().last().cloned()
    }
}

impl ViewSink<Todo> for RecordingSink {
    fn render(&self, records: &[Todo]) {
        self.renders.lock().unwrap().push(records.to_vec());
    }
}

/// Source that fails a fixed number of reads before succeeding
pub(crate) struct FlakySource {
    failures: u32,
    calls: AtomicU32,
    records: Vec<Todo>,
}

impl FlakySource {
    pub(crate) fn new(failures: u32, records: Vec<Todo>) -> Self {
        Self {
            failures,
            calls: AtomicU32::new(0),
            records,
        }
    }

    pub(crate) fn calls(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }
}

impl RecordSource<Todo> for FlakySource {
    fn get_all(&self) -> StoreResult<Vec<Todo>> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        if call <= self.failures {
            return Err(StoreError::Read {
                code: Some(rusqlite::ffi::SQLITE_BUSY),
                reason: "database is locked".to_string(),
            });
        }
        Ok(self.records.clone())
    }
}

/// Route tracing output to the test harness
pub(crate) fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .try_init();
}

/// In-memory log sink for asserting on emitted events
#[derive(Clone, Default)]
pub(crate) struct CapturedLogs {
    buf: std::sync::Arc<Mutex<Vec<u8>>>,
}

impl CapturedLogs {
    pub(crate) fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buf.lock().unwrap()).into_owned()
    }

    /// Subscriber writing every event at DEBUG and above into this buffer
    pub(crate) fn subscriber(&self) -> impl tracing::Subscriber + Send + Sync {
        let logs = self.clone();
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .with_writer(move || logs.clone())
            .finish()
    }
}

impl std::io::Write for CapturedLogs {
    fn write(&mut self, data: &[u8]) -> std::io::Result<usize> {
        self.buf.lock().unwrap().extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}
