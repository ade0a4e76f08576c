//! View Refresh
//!
//! Re-reads the full record set and hands it to the view. A failed read is
//! reissued against the same source until it succeeds or the retry policy
//! gives up.

use std::sync::Arc;

use super::traits::{RecordSource, ViewSink};
use crate::config::RetryPolicy;

/// Result of one refresh cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Refresh {
    /// The view received `count` records after `attempts` reads
    Delivered { count: usize, attempts: u32 },
    /// Every allowed read failed; the view was left as it was
    Abandoned { attempts: u32 },
}

pub struct Refresher<T> {
    sink: Arc<dyn ViewSink<T>>,
    policy: RetryPolicy,
}

impl<T> Refresher<T> {
    pub fn new(sink: Arc<dyn ViewSink<T>>, policy: RetryPolicy) -> Self {
        Self { sink, policy }
    }

    /// Read everything from `source` and render it
    pub fn refresh<S>(&self, source: &S) -> Refresh
    where
        S: RecordSource<T> + ?Sized,
    {
        let mut attempts = 0u32;
        loop {
            attempts = attempts.saturating_add(1);

            match source.get_all() {
                Ok(records) => {
                    tracing::debug!(count = records.len(), attempts, "Refreshing view");
                    self.sink.render(&records);
                    return Refresh::Delivered {
                        count: records.len(),
                        attempts,
                    };
                }
                Err(err) => {
                    if self.policy.exhausted(attempts) {
                        tracing::error!(code = ?err.code(), attempts, %err, "Unable to get todos, giving up");
                        return Refresh::Abandoned { attempts };
                    }
                    if attempts == 1 {
                        tracing::warn!(code = ?err.code(), %err, "Unable to get todos, retrying");
                    } else {
                        tracing::debug!(code = ?err.code(), attempts, %err, "Read retry failed");
                    }
                    if let Some(pause) = self.policy.backoff() {
                        std::thread::sleep(pause);
                    }
                }
            }
        }
    }
}
