use bon::bon;
use tracing::debug;

use crate::{
    distribution::OccupancyDistribution,
    error::{check_rate, Parameter, QueueResult},
    metrics::QueueMetrics,
};

/// A single-server queue with a bounded waiting room (M/M/1/N).
///
/// The system holds at most `capacity` entities, including the one in
/// service; arrivals finding it full are turned away. The finite state space
/// always yields a steady state, so unlike [`UnboundedQueue`] there is no
/// stability requirement and the utilisation λ/μ may exceed 1.
///
/// [`UnboundedQueue`]: crate::UnboundedQueue
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundedQueue {
    arrival_rate: f64,
    service_rate: f64,
    capacity: u32,
}

#[bon]
impl BoundedQueue {
    /// Create a bounded queue model.
    ///
    /// # Errors
    ///
    /// [`QueueError::InvalidParameter`] if either rate is not a positive,
    /// finite number.
    ///
    /// [`QueueError::InvalidParameter`]: crate::QueueError::InvalidParameter
    #[builder]
    pub fn new(
        /// The arrival rate (λ), in entities per unit time.
        arrival_rate: f64,
        /// The service rate (μ), in entities per unit time.
        service_rate: f64,
        /// The maximum number of entities the system holds, including the
        /// one in service.
        capacity: u32,
    ) -> QueueResult<Self> {
        let arrival_rate = check_rate(Parameter::ArrivalRate, arrival_rate)?;
        let service_rate = check_rate(Parameter::ServiceRate, service_rate)?;

        Ok(Self {
            arrival_rate,
            service_rate,
            capacity,
        })
    }

    /// Compute the steady-state metrics.
    ///
    /// The occupancy distribution covers the whole state space: exactly
    /// `capacity + 1` entries, summing to one.
    pub fn solve(&self) -> QueueMetrics {
        let utilization = self.arrival_rate / self.service_rate;
        let states = f64::from(self.capacity);

        // The geometric sums degenerate at ρ = 1; use the limiting forms.
        let (p_empty, mean_in_system) = if utilization == 1.0 {
            (1.0 / (states + 1.0), states / 2.0)
        } else {
            let geometric_mass = 1.0 - utilization.powf(states + 1.0);
            let p_empty = (1.0 - utilization) / geometric_mass;
            let mean_in_system = utilization
                * (1.0 - (states + 1.0) * utilization.powf(states)
                    + states * utilization.powf(states + 1.0))
                / ((1.0 - utilization) * geometric_mass);
            (p_empty, mean_in_system)
        };

        let p_full = p_empty * utilization.powf(states);
        let effective_arrival_rate = self.arrival_rate * (1.0 - p_full);
        let mean_in_queue = mean_in_system - (1.0 - p_empty);

        // A zero-capacity system admits nothing, leaving no admitted entity
        // to spend time anywhere.
        let (mean_time_in_system, mean_time_in_queue) = if effective_arrival_rate > 0.0 {
            (
                mean_in_system / effective_arrival_rate,
                mean_in_queue / effective_arrival_rate,
            )
        } else {
            (0.0, 0.0)
        };

        let distribution =
            OccupancyDistribution::finite_geometric(p_empty, utilization, self.capacity);

        debug!(
            arrival_rate = self.arrival_rate,
            service_rate = self.service_rate,
            capacity = self.capacity,
            utilization,
            effective_arrival_rate,
            "solved bounded queue"
        );

        QueueMetrics {
            utilization,
            p_empty,
            mean_in_system,
            mean_in_queue,
            mean_time_in_system,
            mean_time_in_queue,
            effective_arrival_rate,
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

    /// The system capacity (N).
    pub fn capacity(&self) -> u32 {
        self.capacity
    }
}
