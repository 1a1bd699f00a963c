use std::slice;

use crate::{bounded::BoundedQueue, metrics::QueueMetrics, unbounded::UnboundedQueue};

/// The model that produced a [`CalculationRecord`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[non_exhaustive]
pub enum QueueModel {
    /// An M/M/1 queue.
    Unbounded(UnboundedQueue),
    /// An M/M/1/N queue.
    Bounded(BoundedQueue),
}

impl From<UnboundedQueue> for QueueModel {
    fn from(queue: UnboundedQueue) -> Self {
        QueueModel::Unbounded(queue)
    }
}

impl From<BoundedQueue> for QueueModel {
    fn from(queue: BoundedQueue) -> Self {
        QueueModel::Bounded(queue)
    }
}

/// One past calculation: the model inputs and the metrics they produced.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculationRecord {
    /// The solved model.
    pub model: QueueModel,
    /// The metrics it produced.
    pub metrics: QueueMetrics,
}

/// An ordered log of past calculations.
///
/// Owned by the caller. The models keep no record of past solves, so anyone
/// wanting a history appends to one of these explicitly.
#[derive(Debug, Clone, Default)]
pub struct History {
    records: Vec<CalculationRecord>,
}

impl History {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a calculation.
    pub fn record(&mut self, model: impl Into<QueueModel>, metrics: QueueMetrics) {
        self.records.push(CalculationRecord {
            model: model.into(),
            metrics,
        });
    }

    /// The records, oldest first.
    pub fn records(&self) -> &[CalculationRecord] {
        &self.records
    }

    /// The most recent record, if any.
    pub fn latest(&self) -> Option<&CalculationRecord> {
        self.records.last()
    }

    /// The number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether there are no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Remove all records.
    pub fn clear(&mut self) {
        self.records.clear();
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a CalculationRecord;
    type IntoIter = slice::Iter<'a, CalculationRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
