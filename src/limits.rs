use std::fmt::{self, Display};

use bon::bon;

/// A policy controlling truncation of the unbounded model's occupancy
/// distribution.
///
/// The M/M/1 occupancy distribution is an infinite geometric series. The
/// generated prefix stops at the first state whose cumulative probability
/// reaches `mass_threshold`, and never exceeds `max_states` states.
///
/// Reaching a mass of `t` takes roughly `ln(1 - t) / ln(ρ)` states, so
/// generation slows down sharply as utilisation approaches 1. With the
/// defaults, the `max_states` cap only binds for ρ ≳ 0.999; when it binds,
/// the returned distribution covers less mass than the threshold asks for.
#[derive(Debug, Clone, Copy, PartialEq)]
#[non_exhaustive]
pub struct SeriesLimits {
    pub(crate) mass_threshold: f64,
    pub(crate) max_states: usize,
}

#[bon]
impl SeriesLimits {
    #[allow(missing_docs)]
    #[builder]
    pub fn new(
        /// The cumulative probability mass at which the series stops.
        #[builder(default = 0.9999)]
        mass_threshold: f64,
        /// A hard cap on the number of generated states.
        #[builder(default = 10_000)]
        max_states: usize,
    ) -> Self {
        Self {
            mass_threshold,
            max_states,
        }
    }
}

impl Default for SeriesLimits {
    fn default() -> Self {
        let mass_threshold = 0.9999;
        let max_states = 10_000;
        Self {
            mass_threshold,
            max_states,
        }
    }
}

impl Display for SeriesLimits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "mass_threshold: {}, max_states: {}",
            self.mass_threshold, self.max_states
        )
    }
}
