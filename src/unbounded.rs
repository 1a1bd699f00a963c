use bon::bon;
use tracing::debug;

use crate::{
    distribution::OccupancyDistribution,
    error::{check_rate, Parameter, QueueError, QueueResult},
    limits::SeriesLimits,
    metrics::QueueMetrics,
};

/// A single-server queue with an unbounded waiting room (M/M/1).
///
/// Entities arrive at rate λ and are served one at a time at rate μ, with
/// unlimited space to wait. A steady state exists only when the server keeps
/// up, μ > λ; construction fails otherwise, so a constructed queue is always
/// solvable and [`solve`](UnboundedQueue::solve) cannot fail.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnboundedQueue {
    arrival_rate: f64,
    service_rate: f64,
    limits: SeriesLimits,
}

#[bon]
impl UnboundedQueue {
    /// Create an unbounded queue model.
    ///
    /// # Errors
    ///
    /// - [`QueueError::InvalidParameter`] if either rate is not a positive,
    ///   finite number.
    /// - [`QueueError::Unstable`] if μ ≤ λ: the queue grows without bound
    ///   and has no steady state.
    #[builder]
    pub fn new(
        /// The arrival rate (λ), in entities per unit time.
        arrival_rate: f64,
        /// The service rate (μ), in entities per unit time.
        service_rate: f64,
        /// Truncation policy for the occupancy distribution.
        #[builder(default)]
        limits: SeriesLimits,
    ) -> QueueResult<Self> {
        let arrival_rate = check_rate(Parameter::ArrivalRate, arrival_rate)?;
        let service_rate = check_rate(Parameter::ServiceRate, service_rate)?;

        if service_rate <= arrival_rate {
            return Err(QueueError::Unstable {
                arrival_rate,
                service_rate,
            });
        }

        Ok(Self {
            arrival_rate,
            service_rate,
            limits,
        })
    }

    /// Compute the steady-state metrics.
    ///
    /// The scalar metrics are exact closed forms. The occupancy distribution
    /// is the shortest prefix of the infinite series reaching the configured
    /// mass threshold, subject to the state cap in [`SeriesLimits`].
    pub fn solve(&self) -> QueueMetrics {
        let utilization = self.arrival_rate / self.service_rate;
        let p_empty = 1.0 - utilization;

        let mean_in_system = self.arrival_rate / (self.service_rate - self.arrival_rate);
        let mean_in_queue = mean_in_system - utilization;
        let mean_time_in_system = mean_in_system / self.arrival_rate;
        let mean_time_in_queue = mean_in_queue / self.arrival_rate;

        let distribution =
            OccupancyDistribution::truncated_geometric(p_empty, utilization, self.limits);

        debug!(
            arrival_rate = self.arrival_rate,
            service_rate = self.service_rate,
            utilization,
            mean_in_system,
            states = distribution.len(),
            "solved unbounded queue"
        );

        QueueMetrics {
            utilization,
            p_empty,
            mean_in_system,
            mean_in_queue,
            mean_time_in_system,
            mean_time_in_queue,
            effective_arrival_rate: self.arrival_rate,
            distribution,
        }
    }

    /// The arrival rate (λ).
    pub fn arrival_rate(&self) -> f64 {
        self.arrival_rate
    }

    /// The service rate (μ).
    pub fn service_rate(&self) -> f64 {
        self.service_rate
    }
}
