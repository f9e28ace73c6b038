//! Caller-owned calculation history
//!
//! Bounded, most-recent-first list of results. The calculator never
//! touches it; whoever renders results decides whether to keep them.

use std::collections::VecDeque;

use lands_types::fee::FeeCalculationResult;
use lands_types::ids::ReferenceNumber;

/// Default number of results retained
pub const DEFAULT_HISTORY_CAPACITY: usize = 10;

/// Append-only history, newest first, oldest evicted past capacity
#[derive(Debug, Clone)]
pub struct CalculationHistory {
    capacity: usize,
    entries: VecDeque<FeeCalculationResult>,
}

impl CalculationHistory {
    /// Create a history holding at most `capacity` results (minimum 1)
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            entries: VecDeque::with_capacity(capacity),
        }
    }

    /// Record a result, returning the evicted oldest result if any
    pub fn record(&mut self, result: FeeCalculationResult) -> Option<FeeCalculationResult> {
        self.entries.push_front(result);
        if self.entries.len() > self.capacity {
            self.entries.pop_back()
        } else {
            None
        }
    }

    /// Results, most recent first
    pub fn iter(&self) -> impl Iterator<Item = &FeeCalculationResult> {
        self.entries.iter()
    }

    pub fn latest(&self) -> Option<&FeeCalculationResult> {
        self.entries.front()
    }

    pub fn find(&self, reference: &ReferenceNumber) -> Option<&FeeCalculationResult> {
        self.entries
            .iter()
            .find(|r| r.reference_number() == *reference)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Owned snapshot, most recent first
    pub fn to_vec(&self) -> Vec<FeeCalculationResult> {
        self.entries.iter().cloned().collect()
    }
}

impl Default for CalculationHistory {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_CAPACITY)
    }
}
