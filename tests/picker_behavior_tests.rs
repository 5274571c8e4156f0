use std::cell::RefCell;
use std::rc::Rc;

use approx::assert_abs_diff_eq;
use chrono::NaiveTime;
use timeline_picker::api::{
    PickerConfig, PickerContext, PickerEvent, PickerObserver, RecordingFeedback, TimelinePicker,
    index_for_time,
};
use timeline_picker::core::Viewport;
use timeline_picker::error::PickerError;
use timeline_picker::interaction::SnapPhase;
use timeline_picker::render::NullRenderer;

type TestPicker = TimelinePicker<NullRenderer, RecordingFeedback>;

fn build_picker(config: PickerConfig) -> TestPicker {
    TimelinePicker::new(NullRenderer::default(), RecordingFeedback::default(), config)
        .expect("picker init")
}

fn default_picker() -> TestPicker {
    build_picker(PickerConfig::new(Viewport::new(390, 180)))
}

fn finish_animation(picker: &mut TestPicker) {
    for _ in 0..100 {
        if !picker.step_animation(1.0 / 60.0).expect("animation step") {
            return;
        }
    }
    panic!("snap animation did not settle");
}

struct RecordingObserver {
    events: Rc<RefCell<Vec<PickerEvent>>>,
}

impl PickerObserver for RecordingObserver {
    fn id(&self) -> &str {
        "recorder"
    }

    fn on_event(&mut self, event: PickerEvent, _context: &PickerContext) {
        self.events.borrow_mut().push(event);
    }
}

#[test]
fn picker_starts_at_one_oclock_with_snapping_armed() {
    let picker = default_picker();
    let state = picker.scroll_state();
    assert_eq!(state.current_label.text, "1:00");
    assert_eq!(state.raw_offset, 195.0);
    assert_eq!(state.distance, 0.0);
    assert!(state.snap_enabled);
    assert_eq!(state.pending_target, None);
    assert_eq!(picker.snap_phase(), SnapPhase::Idle);
    assert_eq!(picker.selected_time(), NaiveTime::from_hms_opt(1, 0, 0));
}

#[test]
fn drag_to_quarter_to_six_snaps_onto_existing_anchor() {
    let mut picker = default_picker();
    picker.drag_start();
    picker.drag_update(-100.0).expect("drag");
    picker.drag_update(-128.0).expect("drag");
    assert_eq!(picker.cursor_label().text, "5:45");

    let request = picker.drag_end().expect("snap request");
    assert_abs_diff_eq!(request.target_index, 5.3, epsilon = 1e-9);
    assert!(picker.layout().find(request.target_index).is_some());
    assert_eq!(request.target_distance, 228.0);
    assert_eq!(request.target_raw_offset, 195.0 - 228.0);
    assert_eq!(picker.snap_phase(), SnapPhase::Snapping);
    assert_eq!(picker.feedback().cues.len(), 1);

    finish_animation(&mut picker);
    assert_eq!(picker.snap_phase(), SnapPhase::Idle);
    assert_eq!(picker.cursor_label().text, "5:45");
    assert!(!picker.is_animating());
}

#[test]
fn release_near_hour_rolls_forward_and_animates_there() {
    let mut picker = default_picker();
    picker.drag_start();
    picker.drag_update(-43.2).expect("drag");
    assert_eq!(picker.cursor_label().text, "1:45");

    let request = picker.drag_end().expect("snap request");
    assert_abs_diff_eq!(request.target_index, 2.0, epsilon = 1e-9);
    assert_eq!(request.target_distance, 48.0);

    assert!(picker.step_animation(0.05).expect("step"));
    let mid = picker.scroll_state().distance;
    assert!(mid > 43.2 && mid < 48.0);

    finish_animation(&mut picker);
    assert_eq!(picker.scroll_state().distance, 48.0);
    assert_eq!(picker.cursor_label().text, "2:00");
}

#[test]
fn settled_snap_does_not_retrigger_until_next_drag() {
    let mut picker = default_picker();
    picker.drag_start();
    picker.drag_update(-24.0).expect("drag");
    picker.drag_end().expect("first snap");
    finish_animation(&mut picker);

    assert!(picker.scroll_end().is_none());
    assert_eq!(picker.feedback().cues.len(), 1);

    picker.drag_start();
    picker.drag_update(-1.0).expect("drag");
    assert!(picker.scroll_end().is_some());
    assert_eq!(picker.feedback().cues.len(), 2);
}

#[test]
fn second_drag_preempts_running_snap() {
    let mut picker = default_picker();
    picker.drag_start();
    picker.drag_update(-43.2).expect("drag");
    picker.drag_end().expect("first snap");
    assert!(picker.is_animating());

    picker.drag_start();
    assert!(!picker.is_animating());
    assert_eq!(picker.snap_phase(), SnapPhase::Dragging);
    assert!(picker.scroll_state().snap_enabled);
    assert_eq!(picker.scroll_state().pending_target, None);
}

#[test]
fn release_at_the_end_resolves_to_closing_tick() {
    let mut picker = default_picker();
    picker.drag_start();
    picker.drag_update(-5_000.0).expect("drag");
    assert_eq!(picker.scroll_state().distance, 1_104.0);
    assert_eq!(picker.cursor_label().text, "24:00");

    let request = picker.drag_end().expect("snap request");
    assert_abs_diff_eq!(request.target_index, 24.0, epsilon = 1e-9);
    assert_eq!(request.target_distance, 1_104.0);
}

#[test]
fn disabled_bounce_clamps_overscroll() {
    let mut picker = default_picker();
    picker.drag_start();
    picker.drag_update(80.0).expect("drag");
    assert_eq!(picker.scroll_state().distance, 0.0);
    assert_eq!(picker.cursor_label().text, "1:00");
}

#[test]
fn enabled_bounce_reports_cosmetic_labels_and_snaps_to_first_tick() {
    let mut picker = build_picker(PickerConfig::new(Viewport::new(390, 180)).with_bounces(true));
    picker.drag_start();
    picker.drag_update(100.0).expect("drag");
    assert_eq!(picker.scroll_state().distance, -100.0);
    assert_eq!(picker.cursor_label().text, "-2:45");
    assert_eq!(picker.selected_time(), None);

    let request = picker.drag_end().expect("snap request");
    assert_abs_diff_eq!(request.target_index, 1.0, epsilon = 1e-9);
    assert_eq!(request.target_distance, 0.0);
}

#[test]
fn host_reported_offsets_update_the_label() {
    let mut picker = default_picker();
    picker
        .scroll_offset_changed(195.0 - 60.0)
        .expect("offset change");
    assert_eq!(picker.cursor_label().text, "2:15");
    assert!(matches!(
        picker.scroll_offset_changed(f64::NAN),
        Err(PickerError::InvalidData(_))
    ));
}

#[test]
fn host_driven_scroll_end_and_settle() {
    let mut picker = default_picker();
    picker.drag_start();
    picker.scroll_offset_changed(195.0 - 120.0).expect("offset");
    let request = picker.scroll_end().expect("snap");
    assert_abs_diff_eq!(request.target_index, 3.2, epsilon = 1e-9);

    picker
        .scroll_offset_changed(request.target_raw_offset)
        .expect("host animation frame");
    picker.scroll_settled();
    assert_eq!(picker.snap_phase(), SnapPhase::Idle);
    assert_eq!(picker.cursor_label().text, "3:30");
}

#[test]
fn observers_receive_events_in_order() {
    let mut picker = default_picker();
    let events = Rc::new(RefCell::new(Vec::new()));
    assert!(picker.add_observer(Box::new(RecordingObserver {
        events: Rc::clone(&events),
    })));
    assert!(!picker.add_observer(Box::new(RecordingObserver {
        events: Rc::clone(&events),
    })));

    picker.drag_start();
    picker.drag_update(-12.0).expect("drag");
    picker.drag_end().expect("snap");
    finish_animation(&mut picker);

    let recorded = events.borrow().clone();
    assert_eq!(recorded[0], PickerEvent::DragStarted);
    assert_eq!(
        recorded[1],
        PickerEvent::OffsetChanged {
            raw_offset: 183.0,
            distance: 12.0
        }
    );
    assert_eq!(recorded[2], PickerEvent::LabelChanged { total_minutes: 75 });
    assert!(matches!(recorded[3], PickerEvent::SnapRequested { .. }));
    assert_eq!(recorded.last(), Some(&PickerEvent::ScrollSettled));

    assert!(picker.remove_observer("recorder"));
    assert_eq!(picker.observer_count(), 0);
}

#[test]
fn label_subscriber_sees_every_reported_position() {
    let mut picker = default_picker();
    let labels = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&labels);
    picker.add_observer(Box::new(timeline_picker::api::LabelSubscriber::new(
        "labels",
        move |label| sink.borrow_mut().push(label.text.clone()),
    )));

    picker.drag_start();
    for _ in 0..3 {
        picker.drag_update(-6.0).expect("drag");
    }
    assert_eq!(*labels.borrow(), vec!["1:00", "1:15", "1:15"]);
}

#[test]
fn resize_keeps_time_under_cursor() {
    let mut picker = default_picker();
    picker.drag_start();
    picker.drag_update(-96.0).expect("drag");
    assert_eq!(picker.cursor_label().text, "3:00");

    picker.resize(Viewport::new(800, 180)).expect("resize");
    assert_eq!(picker.cursor_label().text, "3:00");
    assert_eq!(picker.scroll_state().raw_offset, 400.0 - 96.0);
    assert!(matches!(
        picker.resize(Viewport::new(0, 180)),
        Err(PickerError::InvalidViewport { .. })
    ));
}

#[test]
fn scroll_to_time_targets_quarter_hour_anchors() {
    assert_eq!(index_for_time(NaiveTime::from_hms_opt(7, 0, 0).expect("time")), Some(7.0));
    assert_eq!(index_for_time(NaiveTime::from_hms_opt(7, 10, 0).expect("time")), None);

    let mut picker = default_picker();
    let time = NaiveTime::from_hms_opt(5, 45, 0).expect("time");
    let request = picker.scroll_to_time(time).expect("scroll to time");
    assert_eq!(request.target_distance, 228.0);
    finish_animation(&mut picker);
    assert_eq!(picker.selected_time(), Some(time));

    let midnight = NaiveTime::from_hms_opt(0, 0, 0).expect("time");
    assert!(picker.scroll_to_time(midnight).is_err());
}

#[test]
fn invalid_configs_are_rejected() {
    let zero = TimelinePicker::new(
        NullRenderer::default(),
        RecordingFeedback::default(),
        PickerConfig::new(Viewport::new(0, 100)),
    );
    assert!(matches!(zero, Err(PickerError::InvalidViewport { .. })));

    let negative_duration = TimelinePicker::new(
        NullRenderer::default(),
        RecordingFeedback::default(),
        PickerConfig::new(Viewport::new(390, 180)).with_snap_animation_seconds(-1.0),
    );
    assert!(matches!(negative_duration, Err(PickerError::InvalidData(_))));
}

#[test]
fn overflowing_drag_is_rejected_and_snapping_still_works() {
    let mut picker = build_picker(PickerConfig::new(Viewport::new(390, 180)).with_bounces(true));
    picker.drag_start();
    picker.drag_update(-f64::MAX).expect("finite distance");
    let distance = picker.scroll_state().distance;
    assert!(distance.is_finite());

    assert!(matches!(
        picker.drag_update(-f64::MAX),
        Err(PickerError::InvalidData(_))
    ));
    assert_eq!(picker.scroll_state().distance, distance);

    picker.drag_update(500.0).expect("drag back");
    assert!(picker.scroll_state().distance.is_finite());

    let request = picker.drag_end().expect("snap request");
    assert_abs_diff_eq!(request.target_index, 24.0, epsilon = 1e-9);
    assert_eq!(picker.feedback().cues.len(), 1);
}

#[test]
fn drag_update_without_start_announces_the_drag() {
    let mut picker = default_picker();
    let events = Rc::new(RefCell::new(Vec::new()));
    picker.add_observer(Box::new(RecordingObserver {
        events: Rc::clone(&events),
    }));

    picker.drag_update(-12.0).expect("drag");
    picker.drag_end().expect("snap");
    assert!(picker.is_animating());

    picker.drag_update(-12.0).expect("preempting drag");
    assert!(!picker.is_animating());
    assert_eq!(picker.snap_phase(), SnapPhase::Dragging);

    let started = events
        .borrow()
        .iter()
        .filter(|event| **event == PickerEvent::DragStarted)
        .count();
    assert_eq!(started, 2);
    assert_eq!(events.borrow()[0], PickerEvent::DragStarted);
}

#[test]
fn zero_snap_animation_duration_is_rejected() {
    let result = TimelinePicker::new(
        NullRenderer::default(),
        RecordingFeedback::default(),
        PickerConfig::new(Viewport::new(390, 180)).with_snap_animation_seconds(0.0),
    );
    assert!(matches!(result, Err(PickerError::InvalidData(_))));
}
