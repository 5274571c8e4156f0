use timeline_picker::api::{
    PickerConfig, PickerSnapshot, PickerStyle, SNAP_ANIMATION_SECONDS, TimelinePicker,
};
use timeline_picker::core::Viewport;
use timeline_picker::error::PickerError;
use timeline_picker::interaction::SnapPhase;
use timeline_picker::render::NullRenderer;

#[test]
fn minimal_json_config_uses_defaults() {
    let config = PickerConfig::from_json_str(r#"{ "viewport": { "width": 390, "height": 180 } }"#)
        .expect("parse config");
    assert_eq!(config.viewport, Viewport::new(390, 180));
    assert!(!config.bounces);
    assert_eq!(config.snap_animation_seconds, SNAP_ANIMATION_SECONDS);
    assert_eq!(config.style, PickerStyle::default());
}

#[test]
fn config_json_round_trips() {
    let config = PickerConfig::new(Viewport::new(640, 200))
        .with_bounces(true)
        .with_snap_animation_seconds(0.2);
    let json = config.to_json_pretty().expect("serialize");
    let parsed = PickerConfig::from_json_str(&json).expect("parse");
    assert_eq!(parsed, config);
}

#[test]
fn malformed_json_config_reports_invalid_data() {
    let result = PickerConfig::from_json_str(r#"{ "viewport": 12 }"#);
    assert!(matches!(result, Err(PickerError::InvalidData(_))));
}

#[test]
fn snapshot_reflects_pending_snap() {
    let mut picker = TimelinePicker::without_feedback(
        NullRenderer::default(),
        PickerConfig::new(Viewport::new(390, 180)),
    )
    .expect("picker init");
    picker.drag_start();
    picker.drag_update(-228.0).expect("drag");
    picker.drag_end().expect("snap");

    let snapshot = picker.snapshot();
    assert_eq!(snapshot.tick_count, 93);
    assert_eq!(snapshot.label.text, "5:45");
    assert_eq!(snapshot.selected_time.as_deref(), Some("05:45"));
    assert_eq!(snapshot.snap_phase, SnapPhase::Snapping);
    assert!(!snapshot.snap_enabled);
    assert!(snapshot.animating);

    let json = picker.snapshot_json_pretty().expect("snapshot json");
    let parsed: PickerSnapshot = serde_json::from_str(&json).expect("parse snapshot");
    assert_eq!(parsed, snapshot);
}
