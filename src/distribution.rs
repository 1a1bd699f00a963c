use std::slice;

use tracing::warn;

use crate::limits::SeriesLimits;

/// One state of an occupancy distribution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OccupancyEntry {
    /// The state index `n`: exactly `n` entities present, waiting plus in
    /// service.
    pub state: usize,
    /// P(n): the steady-state probability of this exact state.
    pub probability: f64,
    /// The cumulative probability of states `0..=n`.
    pub cumulative: f64,
}

/// The steady-state occupancy probability distribution of a queue.
///
/// An ordered, 0-indexed sequence of states with their absolute and running
/// cumulative probabilities. For a bounded queue this covers the whole state
/// space; for an unbounded queue it is the shortest prefix of the infinite
/// series reaching the configured mass threshold (see [`SeriesLimits`]).
#[derive(Debug, Clone, PartialEq)]
pub struct OccupancyDistribution {
    entries: Vec<OccupancyEntry>,
}

impl OccupancyDistribution {
    /// Generate the truncated geometric distribution P(n) = P0·ρⁿ.
    ///
    /// Stops at the first state whose cumulative probability reaches
    /// `limits.mass_threshold`, or at `limits.max_states` states, whichever
    /// comes first.
    pub(crate) fn truncated_geometric(
        p_empty: f64,
        utilization: f64,
        limits: SeriesLimits,
    ) -> Self {
        let mut entries = Vec::new();
        let mut probability = p_empty;
        let mut cumulative = 0.0;

        for state in 0..limits.max_states {
            cumulative += probability;
            entries.push(OccupancyEntry {
                state,
                probability,
                cumulative,
            });

            if cumulative >= limits.mass_threshold {
                return Self { entries };
            }

            probability *= utilization;
        }

        warn!(
            states = entries.len(),
            total_mass = entries.last().map_or(0.0, |entry| entry.cumulative),
            %limits,
            "state cap reached before the mass threshold"
        );

        Self { entries }
    }

    /// Generate the full distribution of a system with `capacity + 1` states.
    ///
    /// P(n) = P0·ρⁿ for every state. No truncation: probabilities over the
    /// finite state space sum to one.
    pub(crate) fn finite_geometric(p_empty: f64, utilization: f64, capacity: u32) -> Self {
        let mut entries = Vec::with_capacity(capacity as usize + 1);
        let mut probability = p_empty;
        let mut cumulative = 0.0;

        for state in 0..=capacity as usize {
            cumulative += probability;
            entries.push(OccupancyEntry {
                state,
                probability,
                cumulative,
            });

            probability *= utilization;
        }

        Self { entries }
    }

    /// The entries, ordered by state.
    pub fn entries(&self) -> &[OccupancyEntry] {
        &self.entries
    }

    /// The number of states covered.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the distribution covers no states.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The total probability mass covered: the last cumulative value.
    ///
    /// 1.0 (up to rounding) for a bounded queue. For an unbounded queue this
    /// is at least the configured mass threshold, unless the state cap bound
    /// first.
    pub fn total_mass(&self) -> f64 {
        self.entries.last().map_or(0.0, |entry| entry.cumulative)
    }
}

impl<'a> IntoIterator for &'a OccupancyDistribution {
    type Item = &'a OccupancyEntry;
    type IntoIter = slice::Iter<'a, OccupancyEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
