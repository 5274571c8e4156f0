use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gtk4 as gtk;
use gtk4::prelude::*;
use tracing::warn;

use crate::api::{LabelSubscriber, SnapFeedback, TimelinePicker};
use crate::core::{CursorLabel, Viewport};
use crate::render::CairoRenderer;

/// Snap cue for desktop hosts: rings the display bell.
#[derive(Debug, Default)]
pub struct GtkBeepFeedback {
    display: Option<gtk::gdk::Display>,
}

impl GtkBeepFeedback {
    #[must_use]
    pub fn from_default_display() -> Self {
        Self {
            display: gtk::gdk::Display::default(),
        }
    }
}

impl SnapFeedback for GtkBeepFeedback {
    fn on_snap(&mut self, _target_index: f64) {
        if let Some(display) = &self.display {
            display.beep();
        }
    }
}

pub type GtkPicker = TimelinePicker<CairoRenderer, GtkBeepFeedback>;
pub type SharedPicker = Rc<RefCell<GtkPicker>>;

/// Hosts a picker inside a `DrawingArea` with drag and animation wiring.
pub struct GtkTimelineAdapter {
    picker: SharedPicker,
    drawing_area: gtk::DrawingArea,
}

impl GtkTimelineAdapter {
    #[must_use]
    pub fn new(picker: GtkPicker) -> Self {
        let viewport = picker.viewport();
        let picker = Rc::new(RefCell::new(picker));

        let drawing_area = gtk::DrawingArea::new();
        drawing_area.set_content_width(i32::try_from(viewport.width).unwrap_or(i32::MAX));
        drawing_area.set_content_height(i32::try_from(viewport.height).unwrap_or(i32::MAX));
        drawing_area.set_hexpand(true);

        {
            let picker = Rc::clone(&picker);
            drawing_area.set_draw_func(move |_, context, _, _| {
                if let Ok(mut picker) = picker.try_borrow_mut() {
                    if let Err(err) = picker.render_on_cairo_context(context) {
                        warn!(error = %err, "timeline picker draw failed");
                    }
                }
            });
        }

        {
            let picker = Rc::clone(&picker);
            drawing_area.connect_resize(move |area, width, height| {
                let viewport = Viewport::new(
                    u32::try_from(width).unwrap_or(0),
                    u32::try_from(height).unwrap_or(0),
                );
                if let Ok(mut picker) = picker.try_borrow_mut() {
                    if let Err(err) = picker.resize(viewport) {
                        warn!(error = %err, "ignoring invalid picker resize");
                    }
                }
                area.queue_draw();
            });
        }

        attach_drag_gesture(&drawing_area, Rc::clone(&picker), FrameTickGate::default());

        Self {
            picker,
            drawing_area,
        }
    }

    #[must_use]
    pub fn picker(&self) -> SharedPicker {
        Rc::clone(&self.picker)
    }

    #[must_use]
    pub fn drawing_area(&self) -> &gtk::DrawingArea {
        &self.drawing_area
    }

    /// Invokes `callback` with the cursor label on every scroll position.
    pub fn connect_label_changed<F>(&self, id: &str, callback: F) -> bool
    where
        F: FnMut(&CursorLabel) + 'static,
    {
        match self.picker.try_borrow_mut() {
            Ok(mut picker) => picker.add_observer(Box::new(LabelSubscriber::new(id, callback))),
            Err(_) => false,
        }
    }
}

/// Keeps at most one frame-clock callback stepping the snap animation.
///
/// A release during a running snap replaces the picker's animation; the
/// already-registered callback keeps stepping it.
#[derive(Debug, Clone, Default)]
struct FrameTickGate {
    running: Rc<Cell<bool>>,
}

impl FrameTickGate {
    /// Returns `true` when the caller must register a new tick callback.
    fn acquire(&self) -> bool {
        !self.running.replace(true)
    }

    fn release(&self) {
        self.running.set(false);
    }
}

fn attach_drag_gesture(
    drawing_area: &gtk::DrawingArea,
    picker: SharedPicker,
    gate: FrameTickGate,
) {
    let drag = gtk::GestureDrag::new();
    let last_offset_x = Rc::new(Cell::new(0.0));

    {
        let picker = Rc::clone(&picker);
        let last_offset_x = Rc::clone(&last_offset_x);
        drag.connect_drag_begin(move |_, _, _| {
            last_offset_x.set(0.0);
            if let Ok(mut picker) = picker.try_borrow_mut() {
                picker.drag_start();
            }
        });
    }

    {
        let picker = Rc::clone(&picker);
        let drawing_area = drawing_area.clone();
        let last_offset_x = Rc::clone(&last_offset_x);
        drag.connect_drag_update(move |_, offset_x, _| {
            let delta_x = offset_x - last_offset_x.get();
            last_offset_x.set(offset_x);
            if let Ok(mut picker) = picker.try_borrow_mut() {
                if let Err(err) = picker.drag_update(delta_x) {
                    warn!(error = %err, "ignoring invalid drag delta");
                }
            }
            drawing_area.queue_draw();
        });
    }

    {
        let picker = Rc::clone(&picker);
        let drawing_area = drawing_area.clone();
        drag.connect_drag_end(move |_, _, _| {
            last_offset_x.set(0.0);
            let request = match picker.try_borrow_mut() {
                Ok(mut picker) => picker.drag_end(),
                Err(_) => None,
            };
            if request.is_some() && gate.acquire() {
                start_snap_animation(&drawing_area, Rc::clone(&picker), gate.clone());
            }
            drawing_area.queue_draw();
        });
    }

    drawing_area.add_controller(drag);
}

/// Steps the picker's snap animation on the widget frame clock.
fn start_snap_animation(
    drawing_area: &gtk::DrawingArea,
    picker: SharedPicker,
    gate: FrameTickGate,
) {
    let last_frame_time = Rc::new(Cell::new(None::<i64>));
    drawing_area.add_tick_callback(move |area, frame_clock| {
        let now = frame_clock.frame_time();
        let delta_seconds = last_frame_time
            .replace(Some(now))
            .map_or(0.0, |last| (now - last) as f64 / 1_000_000.0);

        let running = match picker.try_borrow_mut() {
            Ok(mut picker) => match picker.step_animation(delta_seconds) {
                Ok(running) => running,
                Err(err) => {
                    warn!(error = %err, "aborting snap animation");
                    picker.scroll_settled();
                    false
                }
            },
            Err(_) => true,
        };
        area.queue_draw();

        if running {
            gtk::glib::ControlFlow::Continue
        } else {
            gate.release();
            gtk::glib::ControlFlow::Break
        }
    });
}
