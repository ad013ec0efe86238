#![allow(dead_code)]

use palm_base::Vec2;
use palm_gesture::{ActionCommand, ActionHandler, Classifier, GestureError};
use palm_image::{Image, PixelFormat};
use palm_video::{VideoError, VideoSource};
use std::collections::VecDeque;

/// Source scripted tick by tick: `Some(frame)` delivers a new frame on that
/// tick, `None` means nothing new arrived.
pub struct ScriptedSource {
    ticks: VecDeque<Option<Image>>,
    current: Option<Image>,
    fresh: bool,
    pub reads: usize,
}

impl ScriptedSource {
    pub fn new(ticks: Vec<Option<Image>>) -> Self {
        Self {
            ticks: ticks.into(),
            current: None,
            fresh: false,
            reads: 0,
        }
    }

    /// A new frame on each of `count` ticks.
    pub fn every_tick(count: usize) -> Self {
        Self::new((0..count).map(|i| Some(rgb_frame(i as u8))).collect())
    }

    pub fn current(&self) -> Option<&Image> {
        self.current.as_ref()
    }
}

impl VideoSource for ScriptedSource {
    fn has_new_frame(&mut self) -> bool {
        if let Some(Some(frame)) = self.ticks.pop_front() {
            self.current = Some(frame);
            self.fresh = true;
        }
        self.fresh
    }

    fn current_frame(&mut self) -> Result<&Image, VideoError> {
        self.reads += 1;
        self.fresh = false;
        self.current
            .as_ref()
            .ok_or_else(|| VideoError::Stream("no frame".to_string()))
    }
}

pub fn rgb_frame(value: u8) -> Image {
    Image::new(Vec2::new(2, 2), vec![value; 12], PixelFormat::Rgb8)
}

pub fn gray_frame(data: Vec<u8>, width: usize) -> Image {
    let height = data.len() / width;
    Image::new(Vec2::new(width, height), data, PixelFormat::Gray8)
}

/// Handler that records every call in order.
#[derive(Default)]
pub struct RecordingHandler {
    pub calls: Vec<ActionCommand>,
}

impl ActionHandler for RecordingHandler {
    fn on_move_left(&mut self) {
        self.calls.push(ActionCommand::MoveLeft);
    }

    fn on_move_right(&mut self) {
        self.calls.push(ActionCommand::MoveRight);
    }

    fn on_stop(&mut self) {
        self.calls.push(ActionCommand::Stop);
    }

    fn on_no_op(&mut self) {
        self.calls.push(ActionCommand::NoOp);
    }
}

/// Classifier that replays signals and keeps a copy of every frame it saw.
pub struct RecordingClassifier {
    signals: VecDeque<Result<i32, String>>,
    pub seen: Vec<Image>,
}

impl RecordingClassifier {
    pub fn new(signals: &[i32]) -> Self {
        Self {
            signals: signals.iter().map(|&s| Ok(s)).collect(),
            seen: Vec::new(),
        }
    }

    pub fn with_results(results: Vec<Result<i32, String>>) -> Self {
        Self {
            signals: results.into(),
            seen: Vec::new(),
        }
    }
}

impl Classifier for RecordingClassifier {
    fn classify(&mut self, frame: &Image) -> Result<i32, GestureError> {
        self.seen.push(frame.clone());
        match self.signals.pop_front() {
            Some(Ok(signal)) => Ok(signal),
            Some(Err(msg)) => Err(GestureError::Classify(msg)),
            None => Ok(0),
        }
    }
}
