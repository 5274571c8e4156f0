use timeline_picker::api::{PickerConfig, TimelinePicker};
use timeline_picker::core::Viewport;
use timeline_picker::platform_gtk::{GtkBeepFeedback, GtkPicker, GtkTimelineAdapter};
use timeline_picker::render::CairoRenderer;
use gtk4 as gtk;
use gtk4::prelude::*;

const WIDTH: u32 = 390;
const HEIGHT: u32 = 180;

fn main() {
    let _ = timeline_picker::telemetry::init_default_tracing();

    let app = gtk::Application::builder()
        .application_id("rs.timeline_picker.demos.gtk_timeline_picker")
        .build();
    app.connect_activate(build_ui);
    app.run();
}

fn build_ui(app: &gtk::Application) {
    let picker = match build_picker() {
        Ok(picker) => picker,
        Err(err) => {
            eprintln!("failed to initialize timeline picker: {err}");
            return;
        }
    };

    let adapter = GtkTimelineAdapter::new(picker);

    let selection_label = gtk::Label::new(Some("selected: 1:00"));
    selection_label.set_xalign(0.0);
    adapter.connect_label_changed("demo-selection", {
        let selection_label = selection_label.clone();
        move |label| {
            let clock = label
                .as_naive_time()
                .map_or_else(|| "--:--".to_owned(), |time| time.format("%H:%M").to_string());
            selection_label.set_text(&format!("selected: {} ({clock})", label.text));
        }
    });

    let instructions = gtk::Label::new(Some(
        "Drag horizontally to pick a time. Releasing snaps to the nearest quarter-hour tick.",
    ));
    instructions.set_xalign(0.0);

    let root = gtk::Box::new(gtk::Orientation::Vertical, 6);
    root.set_margin_top(10);
    root.set_margin_bottom(10);
    root.set_margin_start(10);
    root.set_margin_end(10);
    root.append(&instructions);
    root.append(&selection_label);
    root.append(adapter.drawing_area());

    let window = gtk::ApplicationWindow::builder()
        .application(app)
        .title("timeline-picker GTK demo")
        .default_width(WIDTH as i32 + 20)
        .default_height(HEIGHT as i32 + 80)
        .build();
    window.set_child(Some(&root));
    window.present();
}

fn build_picker() -> timeline_picker::PickerResult<GtkPicker> {
    let renderer = CairoRenderer::new(WIDTH as i32, HEIGHT as i32)?;
    let config = PickerConfig::new(Viewport::new(WIDTH, HEIGHT)).with_bounces(false);
    TimelinePicker::new(renderer, GtkBeepFeedback::from_default_display(), config)
}
