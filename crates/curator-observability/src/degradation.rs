//! Bounded log of degradation events with their recovery status.
//!
//! Only the most recent `capacity` events are retained; `total` counts every
//! event ever recorded.

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use serde::Serialize;

use curator_core::models::DegradationEvent;

/// Events retained by [`DegradationTracker::new`].
pub const DEFAULT_RETAINED_EVENTS: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RecoveryStatus {
    Active,
    Recovered,
}

#[derive(Debug, Clone, Serialize)]
pub struct TrackedDegradation {
    pub event: DegradationEvent,
    pub recovery_status: RecoveryStatus,
    pub recovered_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone)]
pub struct DegradationTracker {
    recent: VecDeque<TrackedDegradation>,
    capacity: usize,
    total: usize,
}

impl Default for DegradationTracker {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_RETAINED_EVENTS)
    }
}

impl DegradationTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Retain at most `capacity` events (at least one).
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            recent: VecDeque::with_capacity(capacity),
            capacity,
            total: 0,
        }
    }

    pub fn record(&mut self, event: DegradationEvent) {
        crate::tracing_setup::events::degradation_triggered(
            &event.component,
            &event.failure,
            &event.fallback_used,
        );
        if self.recent.len() == self.capacity {
            self.recent.pop_front();
        }
        self.recent.push_back(TrackedDegradation {
            event,
            recovery_status: RecoveryStatus::Active,
            recovered_at: None,
        });
        self.total += 1;
    }

    pub fn record_all(&mut self, events: impl IntoIterator<Item = DegradationEvent>) {
        for event in events {
            self.record(event);
        }
    }

    /// Mark every active degradation of `component` as recovered. Returns how
    /// many were marked.
    pub fn mark_recovered(&mut self, component: &str) -> usize {
        let now = Utc::now();
        let mut marked = 0;
        for tracked in self.recent.iter_mut().filter(|t| {
            t.event.component == component && t.recovery_status == RecoveryStatus::Active
        }) {
            tracked.recovery_status = RecoveryStatus::Recovered;
            tracked.recovered_at = Some(now);
            marked += 1;
        }
        if marked > 0 {
            tracing::info!(component, recovered = marked, "component recovered");
        }
        marked
    }

    /// Retained events, oldest first.
    pub fn recent(&self) -> impl Iterator<Item = &TrackedDegradation> {
        self.recent.iter()
    }

    /// Active events among the retained ones.
    pub fn active_count(&self) -> usize {
        self.recent
            .iter()
            .filter(|t| t.recovery_status == RecoveryStatus::Active)
            .count()
    }

    /// Events recorded over the tracker's lifetime, retained or not.
    pub fn total(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}
