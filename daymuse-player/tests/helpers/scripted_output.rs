//! Scripted media output

use daymuse_player::{MediaBackend, MediaErrorCode, MediaEvent, MediaEventSender, PlayRejection};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Call received by the output
#[derive(Debug, Clone, PartialEq)]
pub enum OutputCall {
    Attach,
    SetSource(String),
    Play,
    Pause,
    Seek(f64),
    Release,
}

#[derive(Default)]
struct Shared {
    calls: Vec<OutputCall>,
    sender: Option<MediaEventSender>,
    playing: bool,
}

/// Output that answers like a browser audio element
///
/// `set_source` emits `LoadedMetadata`, `play` emits `Play` (or a queued
/// media error), `pause` emits `Pause`, `seek` emits `TimeUpdate`.
pub struct ScriptedOutput {
    shared: Arc<Mutex<Shared>>,
    duration: f64,
    rejections: VecDeque<PlayRejection>,
    media_errors: VecDeque<MediaErrorCode>,
}

/// Test-side view of a [`ScriptedOutput`] owned by a controller
#[derive(Clone)]
pub struct OutputHandle {
    shared: Arc<Mutex<Shared>>,
}

impl ScriptedOutput {
    /// New output reporting `duration` seconds for every source
    pub fn new(duration: f64) -> (Self, OutputHandle) {
        let shared = Arc::new(Mutex::new(Shared::default()));
        let output = Self {
            shared: Arc::clone(&shared),
            duration,
            rejections: VecDeque::new(),
            media_errors: VecDeque::new(),
        };
        (output, OutputHandle { shared })
    }

    /// Reject the next `play` call synchronously
    pub fn reject_next_play(mut self, rejection: PlayRejection) -> Self {
        self.rejections.push_back(rejection);
        self
    }

    /// Accept the next `play` call but report a media error instead of `Play`
    pub fn fail_next_play(mut self, code: MediaErrorCode) -> Self {
        self.media_errors.push_back(code);
        self
    }

    fn record(&self, call: OutputCall) {
        self.shared.lock().unwrap().calls.push(call);
    }

    /// Returns true if the flag changed
    fn set_playing(&self, playing: bool) -> bool {
        let mut shared = self.shared.lock().unwrap();
        let changed = shared.playing != playing;
        shared.playing = playing;
        changed
    }

    fn emit(&self, event: MediaEvent) {
        if let Some(sender) = self.shared.lock().unwrap().sender.as_ref() {
            let _ = sender.send(event);
        }
    }
}

impl MediaBackend for ScriptedOutput {
    fn attach(&mut self, events: MediaEventSender) {
        let mut shared = self.shared.lock().unwrap();
        shared.calls.push(OutputCall::Attach);
        shared.sender = Some(events);
    }

    fn set_source(&mut self, url: &str) {
        self.record(OutputCall::SetSource(url.to_string()));
        self.set_playing(false);
        // A source the output refuses to start never loads
        if self.rejections.is_empty() {
            self.emit(MediaEvent::LoadedMetadata {
                duration: self.duration,
            });
        }
    }

    fn play(&mut self) -> Result<(), PlayRejection> {
        self.record(OutputCall::Play);
        if let Some(rejection) = self.rejections.pop_front() {
            return Err(rejection);
        }
        if let Some(code) = self.media_errors.pop_front() {
            self.emit(MediaEvent::Error(code));
            return Ok(());
        }
        if self.set_playing(true) {
            self.emit(MediaEvent::Play);
        }
        Ok(())
    }

    fn pause(&mut self) {
        self.record(OutputCall::Pause);
        if self.set_playing(false) {
            self.emit(MediaEvent::Pause);
        }
    }

    fn seek(&mut self, position_seconds: f64) {
        self.record(OutputCall::Seek(position_seconds));
        self.emit(MediaEvent::TimeUpdate {
            current_time: position_seconds,
        });
    }

    fn release(&mut self) {
        let mut shared = self.shared.lock().unwrap();
        shared.calls.push(OutputCall::Release);
        shared.sender = None;
    }
}

impl OutputHandle {
    pub fn calls(&self) -> Vec<OutputCall> {
        self.shared.lock().unwrap().calls.clone()
    }

    /// Sources assigned so far, in order
    pub fn sources(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                OutputCall::SetSource(url) => Some(url),
                _ => None,
            })
            .collect()
    }

    pub fn count(&self, call: &OutputCall) -> usize {
        self.calls().iter().filter(|c| *c == call).count()
    }

    pub fn is_released(&self) -> bool {
        let shared = self.shared.lock().unwrap();
        shared.sender.is_none() && shared.calls.contains(&OutputCall::Release)
    }

    /// Play through to the end: `Pause` then `Ended`, like a media element
    pub fn finish(&self) {
        self.shared.lock().unwrap().playing = false;
        self.emit(MediaEvent::Pause);
        self.emit(MediaEvent::Ended);
    }

    /// Push an event as if the output produced it; false once released
    pub fn emit(&self, event: MediaEvent) -> bool {
        match self.shared.lock().unwrap().sender.as_ref() {
            Some(sender) => sender.send(event).is_ok(),
            None => false,
        }
    }
}
