/// Haptic/audio cue fired when a release issues a snap.
pub trait SnapFeedback {
    fn on_snap(&mut self, target_index: f64);
}

/// Feedback sink for hosts without a haptic or audio channel.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopFeedback;

impl SnapFeedback for NoopFeedback {
    fn on_snap(&mut self, _target_index: f64) {}
}

/// Records every cue; used by headless hosts and tests.
#[derive(Debug, Default, Clone)]
pub struct RecordingFeedback {
    pub cues: Vec<f64>,
}

impl SnapFeedback for RecordingFeedback {
    fn on_snap(&mut self, target_index: f64) {
        self.cues.push(target_index);
    }
}
