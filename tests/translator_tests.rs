use approx::assert_abs_diff_eq;
use chrono::NaiveTime;
use timeline_picker::core::{label_for_offset, quantize_fraction, snap_target};

const CENTER: f64 = 195.0;
const BLOCK: f64 = 12.0;

fn label_at_distance(distance: f64) -> String {
    label_for_offset(CENTER - distance, CENTER, BLOCK).text
}

/// Distance whose pre-bucketing snap value is `value`.
fn distance_for_value(value: f64) -> f64 {
    (value - 1.0) * 4.0 * BLOCK
}

#[test]
fn label_starts_at_one_oclock() {
    assert_eq!(label_at_distance(0.0), "1:00");
    assert_eq!(label_at_distance(11.9), "1:00");
    assert_eq!(label_at_distance(12.0), "1:15");
    assert_eq!(label_at_distance(36.0), "1:45");
    assert_eq!(label_at_distance(48.0), "2:00");
    assert_eq!(label_at_distance(19.0 * BLOCK), "5:45");
    assert_eq!(label_at_distance(92.0 * BLOCK), "24:00");
}

#[test]
fn label_tolerates_negative_distances() {
    assert_eq!(label_at_distance(-1.0), "0:45");
    assert_eq!(label_at_distance(-12.0), "0:45");
    assert_eq!(label_at_distance(-12.5), "0:30");
    assert_eq!(label_at_distance(-100.0), "-2:45");
}

#[test]
fn label_exposes_clock_time() {
    let label = label_for_offset(CENTER - 19.0 * BLOCK, CENTER, BLOCK);
    assert_eq!(label.hours(), 5);
    assert_eq!(label.minutes(), 45);
    assert_eq!(label.as_naive_time(), NaiveTime::from_hms_opt(5, 45, 0));

    let end = label_for_offset(CENTER - 92.0 * BLOCK, CENTER, BLOCK);
    assert_eq!(end.total_minutes, 24 * 60);
    assert_eq!(end.as_naive_time(), None);
}

#[test]
fn snap_at_origin_targets_first_quarter() {
    assert_abs_diff_eq!(snap_target(0.0, BLOCK), 1.1, epsilon = 1e-9);
}

#[test]
fn snap_bucket_boundaries() {
    let cases = [
        (1.374, 1.1),
        (1.375, 1.2),
        (1.624, 1.2),
        (1.625, 1.3),
        (1.874, 1.3),
        (1.875, 2.0),
        (1.999, 2.0),
    ];
    for (value, expected) in cases {
        assert_abs_diff_eq!(
            snap_target(distance_for_value(value), BLOCK),
            expected,
            epsilon = 1e-9
        );
        assert_abs_diff_eq!(quantize_fraction(value), expected, epsilon = 1e-9);
    }
}

#[test]
fn snap_uses_quarter_scaled_offset() {
    // One full hour of content (four blocks) advances the snap value by one.
    assert_abs_diff_eq!(snap_target(4.0 * BLOCK, BLOCK), 2.1, epsilon = 1e-9);
    assert_abs_diff_eq!(snap_target(19.0 * BLOCK, BLOCK), 5.3, epsilon = 1e-9);
}

#[test]
fn snap_passes_negative_values_through() {
    let distance = -100.0;
    let expected = (distance / 4.0) / BLOCK + 1.0;
    assert_abs_diff_eq!(snap_target(distance, BLOCK), expected, epsilon = 1e-12);
}
