//! Transient user notices (toasts) as a bounded, timestamp-ordered queue.
//!
//! Decoupled from the rule engine: the engine returns pure values and the
//! caller decides what to surface. The queue performs no I/O and no
//! scheduling -- callers supply `now` and sweep expired entries
//! themselves.

use std::collections::VecDeque;

use serde::Serialize;

use crate::types::Timestamp;

/// How long a notice stays visible.
pub const NOTICE_TTL_SECS: i64 = 5;

/// Upper bound on queued notices; the oldest entry is evicted beyond it.
pub const MAX_PENDING_NOTICES: usize = 16;

/// Severity of a transient notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Error,
    Success,
    Info,
}

/// A single queued notice.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Notice {
    pub message: String,
    pub level: NoticeLevel,
    pub posted_at: Timestamp,
    pub expires_at: Timestamp,
}

/// Bounded FIFO of pending notices, oldest first.
#[derive(Debug, Default)]
pub struct NoticeQueue {
    entries: VecDeque<Notice>,
}

impl NoticeQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a notice stamped at `now`, evicting the oldest entry when
    /// the bound is exceeded.
    pub fn push(&mut self, message: impl Into<String>, level: NoticeLevel, now: Timestamp) {
        self.entries.push_back(Notice {
            message: message.into(),
            level,
            posted_at: now,
            expires_at: now + chrono::Duration::seconds(NOTICE_TTL_SECS),
        });
        while self.entries.len() > MAX_PENDING_NOTICES {
            self.entries.pop_front();
        }
    }

    /// Drop entries whose expiry has passed.
    pub fn sweep(&mut self, now: Timestamp) {
        self.entries.retain(|notice| notice.expires_at > now);
    }

    /// Live notices at `now`, oldest first.
    pub fn active(&self, now: Timestamp) -> impl Iterator<Item = &Notice> {
        self.entries
            .iter()
            .filter(move |notice| notice.expires_at > now)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
