//! Steady-state metrics for single-server Markovian queues.
//!
//! Given an arrival rate (λ) and a service rate (μ), compute the standard
//! steady-state quantities of a single-server queue: utilisation, expected
//! numbers in system and in queue, expected waiting times, the effective
//! arrival rate, and the per-state occupancy probability distribution with
//! its running cumulative sums.
//!
//! Two boundary regimes are supported:
//!
//! - [`UnboundedQueue`]: unlimited waiting room (M/M/1). Requires μ > λ,
//!   otherwise the queue grows without bound and construction fails. Its
//!   occupancy distribution is an infinite series, returned as the shortest
//!   prefix reaching a configurable probability mass (see [`SeriesLimits`]).
//! - [`BoundedQueue`]: waiting room of capacity N (M/M/1/N). Always has a
//!   steady state; arrivals finding the system full are turned away, which
//!   the effective arrival rate accounts for.
//!
//! Both solves are pure, synchronous functions producing an immutable
//! [`QueueMetrics`] snapshot. Callers wanting a record of past calculations
//! keep one in a [`History`].
//!
//! See the README for an example.

#![deny(missing_docs)]

#[cfg(doctest)]
use doc_comment::doctest;
#[cfg(doctest)]
doctest!("../README.md");

mod bounded;
mod distribution;
pub mod error;
mod history;
mod limits;
mod metrics;
mod unbounded;

pub use bounded::BoundedQueue;
pub use distribution::{OccupancyDistribution, OccupancyEntry};
pub use error::{QueueError, QueueResult};
pub use history::{CalculationRecord, History, QueueModel};
pub use limits::SeriesLimits;
pub use metrics::QueueMetrics;
pub use unbounded::UnboundedQueue;
