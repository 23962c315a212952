//! Bounded validation event log
//!
//! Most-recent-first, truncation-on-insert ring semantics: every append goes
//! to the head and anything past the capacity falls off the tail. Entries
//! are immutable once appended; the only other mutation is `clear`.

use std::collections::{HashMap, VecDeque};

use chrono::{DateTime, Utc};
use crewdeck_api_types::{AuditRow, ValidationEventType, ValidationOutcome};
use serde::{Deserialize, Serialize};

/// A single access-validation, role-change, or override record
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationEvent {
    /// Unique within a log, strictly increasing by creation time
    pub id: u64,
    pub event_type: ValidationEventType,
    /// Display name of the acting or subject user
    pub user: String,
    /// Free-text action descriptor
    pub action: String,
    pub result: ValidationOutcome,
    pub timestamp: DateTime<Utc>,
    pub details: Option<String>,
}

/// Chronological ordering for [`ValidationEventLog::list`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EventOrder {
    /// Descending by timestamp, the live-queue default
    #[default]
    NewestFirst,
    /// Ascending by timestamp
    OldestFirst,
}

/// Bounded, most-recent-first event log
#[derive(Debug, Clone)]
pub struct ValidationEventLog {
    capacity: usize,
    next_id: u64,
    /// Head is the newest entry
    entries: VecDeque<ValidationEvent>,
}

impl ValidationEventLog {
    /// Create an empty log retaining at most `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            next_id: 1,
            entries: VecDeque::new(),
        }
    }

    /// Append a new event at the head, dropping the oldest past capacity
    pub fn append(
        &mut self,
        event_type: ValidationEventType,
        user: impl Into<String>,
        action: impl Into<String>,
        result: ValidationOutcome,
        details: Option<String>,
    ) -> &ValidationEvent {
        let event = ValidationEvent {
            id: self.next_id,
            event_type,
            user: user.into(),
            action: action.into(),
            result,
            timestamp: Utc::now(),
            details,
        };
        self.next_id += 1;

        self.entries.push_front(event);
        self.entries.truncate(self.capacity);

        // Non-empty: we just pushed and capacity is at least 1
        &self.entries[0]
    }

    /// List retained events, optionally filtered by exact type
    ///
    /// Ids strictly increase with creation time, so ordering by id is the
    /// chronological order with insertion-order tie-breaking.
    pub fn list(
        &self,
        filter: Option<ValidationEventType>,
        order: EventOrder,
    ) -> Vec<&ValidationEvent> {
        let filtered = self
            .entries
            .iter()
            .filter(|e| filter.is_none_or(|t| e.event_type == t));

        match order {
            EventOrder::NewestFirst => filtered.collect(),
            EventOrder::OldestFirst => {
                let mut events: Vec<&ValidationEvent> = filtered.collect();
                events.reverse();
                events
            }
        }
    }

    /// Retained event count per type, for the console summary badges
    pub fn counts_by_type(&self) -> HashMap<ValidationEventType, usize> {
        let mut counts = HashMap::new();
        for event in &self.entries {
            *counts.entry(event.event_type).or_insert(0) += 1;
        }
        counts
    }

    /// Render the export projection, newest first
    pub fn audit_rows(&self) -> Vec<AuditRow> {
        self.entries
            .iter()
            .map(|e| AuditRow {
                timestamp: e.timestamp,
                type_label: e.event_type.label().to_string(),
                user: e.user.clone(),
                action: e.action.clone(),
                result: e.result,
                details: e.details.clone().unwrap_or_default(),
            })
            .collect()
    }

    /// Discard every retained entry; irreversible
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Newest retained entry, if any
    pub fn newest(&self) -> Option<&ValidationEvent> {
        self.entries.front()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
