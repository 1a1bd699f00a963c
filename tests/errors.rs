use assert_matches::assert_matches;
use steady_queue::{
    error::{Parameter, QueueError},
    BoundedQueue, UnboundedQueue,
};

#[test]
fn invalid_parameter_names_the_offender() {
    let err = UnboundedQueue::builder()
        .arrival_rate(-2.0)
        .service_rate(5.0)
        .build()
        .unwrap_err();

    assert_matches!(
        err,
        QueueError::InvalidParameter {
            parameter: Parameter::ArrivalRate,
            value,
        } if value == -2.0
    );
    assert_eq!(
        err.to_string(),
        "arrival rate (λ) must be a positive, finite rate, got -2"
    );

    let err = BoundedQueue::builder()
        .arrival_rate(2.0)
        .service_rate(0.0)
        .capacity(1)
        .build()
        .unwrap_err();

    assert_matches!(
        err,
        QueueError::InvalidParameter {
            parameter: Parameter::ServiceRate,
            ..
        }
    );
}

#[test]
fn non_finite_rates_are_invalid() {
    for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let result = UnboundedQueue::builder()
            .arrival_rate(value)
            .service_rate(5.0)
            .build();

        assert_matches!(result, Err(QueueError::InvalidParameter { .. }));
    }
}

#[test]
fn unstable_error_reports_both_rates() {
    let err = UnboundedQueue::builder()
        .arrival_rate(6.0)
        .service_rate(5.0)
        .build()
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "no steady state: arrival rate 6 must be less than service rate 5"
    );
}

/// Validation runs before the stability check, so a queue that is both
/// invalid and unstable reports the invalid parameter.
#[test]
fn validation_precedes_stability() {
    let err = UnboundedQueue::builder()
        .arrival_rate(6.0)
        .service_rate(-5.0)
        .build()
        .unwrap_err();

    assert_matches!(
        err,
        QueueError::InvalidParameter {
            parameter: Parameter::ServiceRate,
            ..
        }
    );
}
