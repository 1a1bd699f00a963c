use assert_matches::assert_matches;
use steady_queue::{QueueError, SeriesLimits, UnboundedQueue};

const MASS_THRESHOLD: f64 = 0.9999;

fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() < tolerance,
        "expected {expected}, got {actual}"
    );
}

/// Given a stable queue with λ=2 and μ=5
/// When we solve it
/// Then the textbook values come out to four decimal places
#[test]
fn textbook_scenario() {
    let queue = UnboundedQueue::builder()
        .arrival_rate(2.0)
        .service_rate(5.0)
        .build()
        .unwrap();

    let metrics = queue.solve();

    assert_close(metrics.utilization, 0.4, 1e-4);
    assert_close(metrics.p_empty, 0.6, 1e-4);
    assert_close(metrics.mean_in_system, 0.6667, 1e-4);
    assert_close(metrics.mean_in_queue, 0.2667, 1e-4);
    assert_close(metrics.mean_time_in_system, 0.3333, 1e-4);
    assert_close(metrics.mean_time_in_queue, 0.1333, 1e-4);
    assert_eq!(metrics.effective_arrival_rate, 2.0);
}

/// Given any stable pair of rates
/// When we solve the model
/// Then the closed forms hold to within 1e-9 relative tolerance
#[test]
fn closed_forms_hold() {
    for (arrival_rate, service_rate) in [(0.5, 1.0), (2.0, 5.0), (9.9, 10.0), (120.0, 300.0)] {
        let metrics = UnboundedQueue::builder()
            .arrival_rate(arrival_rate)
            .service_rate(service_rate)
            .build()
            .unwrap()
            .solve();

        let utilization = arrival_rate / service_rate;
        let mean_in_system = arrival_rate / (service_rate - arrival_rate);

        assert_close(metrics.utilization, utilization, 1e-9 * utilization);
        assert_close(metrics.p_empty, 1.0 - utilization, 1e-9);
        assert_close(
            metrics.mean_in_system,
            mean_in_system,
            1e-9 * mean_in_system,
        );
    }
}

/// Given an unstable queue, μ ≤ λ
/// When we try to construct it
/// Then we get an Unstable error and no model to solve
#[test]
fn unstable_queue_is_rejected() {
    let result = UnboundedQueue::builder()
        .arrival_rate(6.0)
        .service_rate(5.0)
        .build();

    assert_matches!(
        result,
        Err(QueueError::Unstable {
            arrival_rate,
            service_rate,
        }) if arrival_rate == 6.0 && service_rate == 5.0
    );

    // Equal rates have no steady state either.
    let result = UnboundedQueue::builder()
        .arrival_rate(5.0)
        .service_rate(5.0)
        .build();

    assert_matches!(result, Err(QueueError::Unstable { .. }));
}

/// Given a solved unbounded queue
/// When we read its occupancy distribution
/// Then the cumulative column is the non-decreasing prefix sum of the
/// probabilities, and the sequence is the shortest prefix reaching the
/// mass threshold
#[test]
fn distribution_is_shortest_prefix_over_threshold() {
    let metrics = UnboundedQueue::builder()
        .arrival_rate(2.0)
        .service_rate(5.0)
        .build()
        .unwrap()
        .solve();

    let entries = metrics.distribution.entries();

    let mut sum = 0.0;
    let mut previous = 0.0;
    for entry in entries {
        sum += entry.probability;
        assert_eq!(entry.cumulative, sum);
        assert!(entry.cumulative >= previous);
        previous = entry.cumulative;
    }

    let last = entries.last().unwrap();
    assert!(last.cumulative >= MASS_THRESHOLD);
    let second_to_last = &entries[entries.len() - 2];
    assert!(second_to_last.cumulative < MASS_THRESHOLD);
}

/// Given a heavily loaded queue, ρ close to 1
/// When the state cap binds before the mass threshold is reached
/// Then the distribution stops at the cap instead of iterating on
#[test]
fn state_cap_bounds_heavy_load() {
    let metrics = UnboundedQueue::builder()
        .arrival_rate(999.0)
        .service_rate(1000.0)
        .limits(SeriesLimits::builder().max_states(100).build())
        .build()
        .unwrap()
        .solve();

    assert_eq!(metrics.distribution.len(), 100);
    assert!(metrics.distribution.total_mass() < MASS_THRESHOLD);
}

/// Given a custom mass threshold
/// When we solve the queue
/// Then truncation honours it
#[test]
fn custom_mass_threshold() {
    let metrics = UnboundedQueue::builder()
        .arrival_rate(2.0)
        .service_rate(5.0)
        .limits(SeriesLimits::builder().mass_threshold(0.9).build())
        .build()
        .unwrap()
        .solve();

    let entries = metrics.distribution.entries();
    assert!(entries.last().unwrap().cumulative >= 0.9);
    assert!(entries[entries.len() - 2].cumulative < 0.9);
    assert!(metrics.distribution.len() < 10);
}
