//! Wall-clock driven media element.
//!
//! No frames are decoded. The element knows the media duration (probed
//! from the container header, or a configured fallback) and advances the
//! playback position with a clock while playing.

use std::cell::Cell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::time::{Duration, Instant};

use super::element::{MediaElement, MediaError, MediaEvent, PlayOutcome};
use super::probe::probe_duration;
use super::source::SourceHandle;

/// Monotonic time source.
pub trait Clock {
    /// Time elapsed since an arbitrary fixed origin.
    fn now(&self) -> Duration;
}

/// Clock backed by [`Instant`].
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl Default for SystemClock {
    fn default() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Hand-advanced clock. Clones share the same time.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<Duration>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, secs: f64) {
        self.now.set(self.now.get() + Duration::from_secs_f64(secs));
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }
}

/// Durations used when the source itself cannot tell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DurationHints {
    /// Duration reported for the built-in sample
    pub sample: f64,
    /// Duration for uploads whose container could not be probed
    pub fallback: f64,
}

impl Default for DurationHints {
    fn default() -> Self {
        Self {
            sample: 300.0,
            fallback: 300.0,
        }
    }
}

/// A [`MediaElement`] that plays back in real time without decoding.
#[derive(Debug)]
pub struct ClockMedia<C: Clock = SystemClock> {
    clock: C,
    hints: DurationHints,
    loaded: bool,
    duration: f64,
    /// Position at `anchor`
    position: f64,
    /// Clock reading when playback (re)started; `None` while paused
    anchor: Option<Duration>,
    pending: VecDeque<MediaEvent>,
}

impl ClockMedia<SystemClock> {
    pub fn new(hints: DurationHints) -> Self {
        Self::with_clock(SystemClock::default(), hints)
    }
}

impl<C: Clock> ClockMedia<C> {
    pub fn with_clock(clock: C, hints: DurationHints) -> Self {
        Self {
            clock,
            hints,
            loaded: false,
            duration: 0.0,
            position: 0.0,
            anchor: None,
            pending: VecDeque::new(),
        }
    }

    pub fn is_playing(&self) -> bool {
        self.anchor.is_some()
    }

    fn resolve_duration(&self, source: &SourceHandle) -> f64 {
        match source.path() {
            Some(path) => match probe_duration(path) {
                Some(duration) => duration,
                None => {
                    tracing::info!(
                        path = %path.display(),
                        fallback = self.hints.fallback,
                        "Container duration unavailable, using fallback"
                    );
                    self.hints.fallback
                }
            },
            None => self.hints.sample,
        }
    }
}

impl<C: Clock> MediaElement for ClockMedia<C> {
    fn load(&mut self, source: &SourceHandle) {
        self.duration = self.resolve_duration(source);
        self.loaded = true;
        self.position = 0.0;
        self.anchor = None;
        self.pending.clear();
        self.pending.push_back(MediaEvent::LoadedMetadata {
            duration: self.duration,
        });
    }

    fn unload(&mut self) {
        self.loaded = false;
        self.duration = 0.0;
        self.position = 0.0;
        self.anchor = None;
        self.pending.clear();
    }

    fn play(&mut self) -> Result<PlayOutcome, MediaError> {
        if !self.loaded {
            return Err(MediaError::NoSource);
        }
        if self.position >= self.duration {
            // Like a finished video element, replay from the start
            self.position = 0.0;
        }
        if self.anchor.is_none() {
            self.anchor = Some(self.clock.now());
        }
        Ok(PlayOutcome::Started)
    }

    fn pause(&mut self) {
        self.position = self.current_time();
        self.anchor = None;
    }

    fn set_current_time(&mut self, time: f64) {
        self.position = time.clamp(0.0, self.duration.max(0.0));
        if self.anchor.is_some() {
            self.anchor = Some(self.clock.now());
        }
    }

    fn current_time(&self) -> f64 {
        match self.anchor {
            Some(anchor) => {
                let elapsed = self.clock.now().saturating_sub(anchor).as_secs_f64();
                (self.position + elapsed).min(self.duration)
            }
            None => self.position,
        }
    }

    fn poll_events(&mut self) -> Vec<MediaEvent> {
        let mut events: Vec<MediaEvent> = self.pending.drain(..).collect();
        if self.anchor.is_some() {
            let time = self.current_time();
            events.push(MediaEvent::TimeUpdate { time });
            if time >= self.duration {
                self.position = self.duration;
                self.anchor = None;
                events.push(MediaEvent::Ended);
            }
        }
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_source() -> SourceHandle {
        SourceHandle::Sample {
            url: "sample://test".to_string(),
        }
    }

    fn loaded_media(clock: &ManualClock) -> ClockMedia<ManualClock> {
        let mut media = ClockMedia::with_clock(
            clock.clone(),
            DurationHints {
                sample: 60.0,
                fallback: 30.0,
            },
        );
        media.load(&sample_source());
        media
    }

    #[test]
    fn load_queues_metadata_once() {
        let clock = ManualClock::new();
        let mut media = loaded_media(&clock);
        assert_eq!(
            media.poll_events(),
            vec![MediaEvent::LoadedMetadata { duration: 60.0 }]
        );
        assert!(media.poll_events().is_empty());
    }

    #[test]
    fn play_without_source_fails() {
        let mut media = ClockMedia::with_clock(ManualClock::new(), DurationHints::default());
        assert_eq!(media.play(), Err(MediaError::NoSource));
    }

    #[test]
    fn position_advances_with_clock_while_playing() {
        let clock = ManualClock::new();
        let mut media = loaded_media(&clock);
        media.poll_events();

        assert_eq!(media.play(), Ok(PlayOutcome::Started));
        clock.advance(2.5);
        assert_eq!(media.poll_events(), vec![MediaEvent::TimeUpdate { time: 2.5 }]);

        media.pause();
        clock.advance(10.0);
        assert_eq!(media.current_time(), 2.5);
        assert!(media.poll_events().is_empty());
    }

    #[test]
    fn seek_while_playing_resumes_from_new_position() {
        let clock = ManualClock::new();
        let mut media = loaded_media(&clock);
        media.play().unwrap();
        clock.advance(5.0);
        media.set_current_time(40.0);
        clock.advance(1.0);
        assert_eq!(media.current_time(), 41.0);

        media.set_current_time(10.0);
        assert_eq!(media.current_time(), 10.0);
    }

    #[test]
    fn seek_clamps_to_duration() {
        let clock = ManualClock::new();
        let mut media = loaded_media(&clock);
        media.set_current_time(500.0);
        assert_eq!(media.current_time(), 60.0);
        media.set_current_time(-3.0);
        assert_eq!(media.current_time(), 0.0);
    }

    #[test]
    fn reaching_the_end_stops_playback() {
        let clock = ManualClock::new();
        let mut media = loaded_media(&clock);
        media.poll_events();
        media.set_current_time(59.0);
        media.play().unwrap();
        clock.advance(3.0);

        assert_eq!(
            media.poll_events(),
            vec![MediaEvent::TimeUpdate { time: 60.0 }, MediaEvent::Ended]
        );
        assert!(!media.is_playing());

        // Playing again restarts from the beginning
        media.play().unwrap();
        assert_eq!(media.current_time(), 0.0);
    }

    #[test]
    fn unreadable_upload_uses_fallback_duration() {
        let registry = super::super::ObjectUrlRegistry::new();
        let path = std::path::PathBuf::from("/nonexistent/clip.webm");
        let source = SourceHandle::Upload {
            url: registry.create(&path),
            path,
            content_type: "video/webm",
        };
        let mut media = ClockMedia::with_clock(
            ManualClock::new(),
            DurationHints {
                sample: 60.0,
                fallback: 30.0,
            },
        );
        media.load(&source);
        assert_eq!(
            media.poll_events(),
            vec![MediaEvent::LoadedMetadata { duration: 30.0 }]
        );
    }

    #[test]
    fn unload_forgets_source() {
        let clock = ManualClock::new();
        let mut media = loaded_media(&clock);
        media.unload();
        assert!(media.poll_events().is_empty());
        assert_eq!(media.play(), Err(MediaError::NoSource));
    }
}
