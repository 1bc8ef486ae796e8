/// Commands the controller sends to whatever produces sound.
///
/// Commands are fire-and-forget: a sink that fails to honour one must not
/// panic, and reports what actually happens through [`DeviceEvent`]s.
pub trait AudioSink {
    /// Point the device at a new source. Any previous load is abandoned.
    fn load(&mut self, url: &str);
    fn play(&mut self);
    fn pause(&mut self);
    fn seek(&mut self, seconds: f64);
    /// `level` is already clamped to 0..=1.
    fn set_volume(&mut self, level: f64);
}

/// Events reported back by the device.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DeviceEvent {
    MetadataLoaded { duration: f64 },
    TimeUpdate { current_time: f64 },
    Ended,
}

/// Sink for targets without a browser audio element. Every command is dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl AudioSink for NullSink {
    fn load(&mut self, url: &str) {
        tracing::trace!(url, "no audio device; load ignored");
    }

    fn play(&mut self) {}

    fn pause(&mut self) {}

    fn seek(&mut self, _seconds: f64) {}

    fn set_volume(&mut self, _level: f64) {}
}
