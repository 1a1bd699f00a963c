use crate::distribution::OccupancyDistribution;

/// Steady-state metrics for a single-server queue.
///
/// Produced as a single immutable snapshot by a solve call. The core does no
/// formatting or serialisation: consumers read the fields.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub struct QueueMetrics {
    /// ρ: the traffic intensity λ/μ, the server's fractional utilisation.
    pub utilization: f64,
    /// P₀: the probability that the system is empty.
    pub p_empty: f64,
    /// L: the expected number of entities in the system.
    pub mean_in_system: f64,
    /// Lq: the expected number waiting, excluding the one in service.
    pub mean_in_queue: f64,
    /// W: the expected time an entity spends in the system.
    pub mean_time_in_system: f64,
    /// Wq: the expected time an entity spends waiting.
    pub mean_time_in_queue: f64,
    /// The arrival rate actually admitted into the system.
    ///
    /// Equals λ for the unbounded model. For the bounded model it is
    /// λ·(1 − P_N), discounting arrivals turned away while the system is
    /// full.
    pub effective_arrival_rate: f64,
    /// The per-state occupancy probability distribution.
    pub distribution: OccupancyDistribution,
}
