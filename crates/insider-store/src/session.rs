//! # Session Context
//!
//! Caller-owned, process-local state: the activity log and a cached copy of
//! the last listed record set. Explicitly outside the core's persisted
//! state; it dies with the caller and is never written to the ledger.

use crate::domain::entities::{short_id, InsiderRecord};
use shared_types::{DataCategory, RecordStatus};

/// Ordered audit log of human-readable activity lines.
#[derive(Debug, Clone, Default)]
pub struct ActivityLog {
    entries: Vec<String>,
}

impl ActivityLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an audit line.
    pub fn push(&mut self, line: impl Into<String>) {
        self.entries.push(line.into());
    }

    /// The most recent `n` lines, oldest first.
    pub fn recent(&self, n: usize) -> &[String] {
        let start = self.entries.len().saturating_sub(n);
        &self.entries[start..]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.entries.iter()
    }
}

/// Status tallies over a record set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RecordStats {
    pub pending: usize,
    pub verified: usize,
    pub rejected: usize,
}

impl RecordStats {
    /// Count statuses across `records`.
    pub fn tally(records: &[InsiderRecord]) -> Self {
        let mut stats = Self::default();
        for record in records {
            match record.status {
                RecordStatus::Pending => stats.pending += 1,
                RecordStatus::Verified => stats.verified += 1,
                RecordStatus::Rejected => stats.rejected += 1,
            }
        }
        stats
    }
}

/// Session-scoped context owned by the caller.
#[derive(Debug, Clone, Default)]
pub struct SessionContext {
    /// Audit lines, oldest first.
    pub activity: ActivityLog,
    /// Cache of the last `list()` result; refreshed by workflow transitions.
    pub records: Vec<InsiderRecord>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Audit line for a submission the caller just made.
    pub fn note_submission(&mut self, category: DataCategory, company: &str) {
        self.activity
            .push(format!("Submitted {category} data for {company}"));
    }

    /// Audit line for a decryption the gate just released.
    pub(crate) fn note_decryption(&mut self) {
        self.activity.push("Decrypted insider information");
    }

    /// Audit line for a status transition.
    pub(crate) fn note_transition(&mut self, id: &str, status: RecordStatus) {
        let verb = match status {
            RecordStatus::Verified => "Verified",
            RecordStatus::Rejected => "Rejected",
            RecordStatus::Pending => return,
        };
        self.activity.push(format!("{verb} data {}", short_id(id)));
    }

    /// Filter the cached records by search term and category.
    ///
    /// The term matches company or id as a case-insensitive substring; an
    /// empty term matches everything. `None` category matches all.
    pub fn filter(&self, term: &str, category: Option<DataCategory>) -> Vec<&InsiderRecord> {
        let needle = term.to_lowercase();
        self.records
            .iter()
            .filter(|record| {
                let term_hit = needle.is_empty()
                    || record.company.to_lowercase().contains(&needle)
                    || record.id.to_lowercase().contains(&needle);
                let category_hit = category.map_or(true, |c| record.category == c);
                term_hit && category_hit
            })
            .collect()
    }

    /// Status tallies over the cached records.
    pub fn stats(&self) -> RecordStats {
        RecordStats::tally(&self.records)
    }
}
