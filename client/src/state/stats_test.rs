use super::*;

#[test]
fn starts_at_zero() {
    assert_eq!(projected_value(5000, 0.0, 2000.0), 0);
}

#[test]
fn reaches_target_at_duration() {
    assert_eq!(projected_value(5000, 2000.0, 2000.0), 5000);
}

#[test]
fn clamps_past_duration() {
    assert_eq!(projected_value(298, 10_000.0, 2000.0), 298);
}

#[test]
fn midpoint_is_half() {
    assert_eq!(projected_value(1000, 1000.0, 2000.0), 500);
}

#[test]
fn negative_elapsed_clamps_to_zero() {
    assert_eq!(projected_value(465, -50.0, 2000.0), 0);
}

#[test]
fn zero_duration_jumps_to_target() {
    assert_eq!(projected_value(56, 0.0, 0.0), 56);
}

#[test]
fn is_monotonic_over_time() {
    let mut last = 0;
    let mut t = 0.0;
    while t <= 2000.0 {
        let v = projected_value(5000, t, 2000.0);
        assert!(v >= last);
        last = v;
        t += 50.0;
    }
    assert_eq!(last, 5000);
}

#[test]
fn completion_tracks_duration() {
    assert!(!is_complete(1999.0, 2000.0));
    assert!(is_complete(2000.0, 2000.0));
}
