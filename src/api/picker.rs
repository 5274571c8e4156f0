use chrono::NaiveTime;
use smallvec::SmallVec;
use tracing::debug;

use crate::core::{CursorLabel, ScrollContainer, TickLayout, Viewport, label_for_offset};
use crate::error::PickerResult;
use crate::extensions::PickerObserver;
use crate::interaction::{ScrollAnimation, SnapPhase, SnapState};
use crate::render::Renderer;

#[cfg(feature = "cairo-backend")]
use crate::render::CairoContextRenderer;

use super::validation::{validate_picker_config, validate_viewport};
use super::{NoopFeedback, PickerConfig, PickerEvent, SnapFeedback};

/// Scroll-related state owned by one picker instance.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollState {
    pub raw_offset: f64,
    pub distance: f64,
    pub current_label: CursorLabel,
    pub snap_enabled: bool,
    pub pending_target: Option<f64>,
}

/// Timeline picker facade consumed by host applications.
///
/// `TimelinePicker` composes the tick layout, the scroll container model, the
/// snap state machine, observers, and renderer calls. All methods are meant to
/// run on the thread delivering UI events.
pub struct TimelinePicker<R: Renderer, F: SnapFeedback = NoopFeedback> {
    pub(super) renderer: R,
    pub(super) feedback: F,
    pub(super) config: PickerConfig,
    pub(super) layout: TickLayout,
    pub(super) container: ScrollContainer,
    pub(super) snap: SnapState,
    pub(super) label: CursorLabel,
    pub(super) animation: Option<ScrollAnimation>,
    pub(super) observers: SmallVec<[Box<dyn PickerObserver>; 2]>,
}

impl<R: Renderer> TimelinePicker<R, NoopFeedback> {
    pub fn without_feedback(renderer: R, config: PickerConfig) -> PickerResult<Self> {
        Self::new(renderer, NoopFeedback, config)
    }
}

impl<R: Renderer, F: SnapFeedback> TimelinePicker<R, F> {
    pub fn new(renderer: R, feedback: F, config: PickerConfig) -> PickerResult<Self> {
        validate_picker_config(config)?;

        let layout = TickLayout::standard()?;
        let container = ScrollContainer::new(
            f64::from(config.viewport.width),
            layout.max_distance(),
            config.bounces,
        )?;
        let label = label_for_offset(
            container.raw_offset(),
            container.center_offset(),
            layout.block_width(),
        );
        debug!(
            ticks = layout.len(),
            width = config.viewport.width,
            bounces = config.bounces,
            "timeline picker initialized"
        );

        Ok(Self {
            renderer,
            feedback,
            config,
            layout,
            container,
            snap: SnapState::default(),
            label,
            animation: None,
            observers: SmallVec::new(),
        })
    }

    #[must_use]
    pub fn config(&self) -> PickerConfig {
        self.config
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.config.viewport
    }

    #[must_use]
    pub fn layout(&self) -> &TickLayout {
        &self.layout
    }

    #[must_use]
    pub fn container(&self) -> ScrollContainer {
        self.container
    }

    #[must_use]
    pub fn cursor_label(&self) -> &CursorLabel {
        &self.label
    }

    #[must_use]
    pub fn selected_time(&self) -> Option<NaiveTime> {
        self.label.as_naive_time()
    }

    #[must_use]
    pub fn snap_phase(&self) -> SnapPhase {
        self.snap.phase()
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    #[must_use]
    pub fn scroll_state(&self) -> ScrollState {
        ScrollState {
            raw_offset: self.container.raw_offset(),
            distance: self.container.distance(),
            current_label: self.label.clone(),
            snap_enabled: self.snap.snap_enabled(),
            pending_target: self.snap.pending_target(),
        }
    }

    #[must_use]
    pub fn feedback(&self) -> &F {
        &self.feedback
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Resizes the widget; the time under the cursor is preserved.
    pub fn resize(&mut self, viewport: Viewport) -> PickerResult<()> {
        validate_viewport(viewport)?;
        self.container.set_viewport_width(f64::from(viewport.width))?;
        self.config.viewport = viewport;
        self.apply_offset_change();
        Ok(())
    }

    pub fn render(&mut self) -> PickerResult<()> {
        let frame = self.build_render_frame()?;
        self.renderer.render(&frame)?;
        self.emit_event(PickerEvent::Rendered);
        Ok(())
    }

    /// Renders the frame into an external cairo context.
    ///
    /// Used by GTK draw callbacks while keeping the renderer decoupled from
    /// GTK-specific APIs.
    #[cfg(feature = "cairo-backend")]
    pub fn render_on_cairo_context(&mut self, context: &cairo::Context) -> PickerResult<()>
    where
        R: CairoContextRenderer,
    {
        let frame = self.build_render_frame()?;
        self.renderer.render_on_cairo_context(context, &frame)?;
        self.emit_event(PickerEvent::Rendered);
        Ok(())
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
