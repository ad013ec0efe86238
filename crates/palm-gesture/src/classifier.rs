use crate::GestureError;
use palm_image::Image;

/// Turns a grayscale frame into a finger count.
///
/// The dispatch loop does not care how the count is produced; any hand
/// tracker can be plugged in here. Closures of the right shape implement
/// this trait too.
pub trait Classifier {
    fn classify(&mut self, frame: &Image) -> Result<i32, GestureError>;
}

impl<F> Classifier for F
where
    F: FnMut(&Image) -> Result<i32, GestureError>,
{
    fn classify(&mut self, frame: &Image) -> Result<i32, GestureError> {
        self(frame)
    }
}

/// Placeholder that reports the same count for every frame.
///
/// The default count is 0, which dispatches to a no-op.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ConstantClassifier {
    signal: i32,
}

impl ConstantClassifier {
    pub fn new(signal: i32) -> Self {
        Self { signal }
    }

    pub fn signal(&self) -> i32 {
        self.signal
    }

    pub fn set_signal(&mut self, signal: i32) {
        self.signal = signal;
    }
}

impl Classifier for ConstantClassifier {
    fn classify(&mut self, _frame: &Image) -> Result<i32, GestureError> {
        Ok(self.signal)
    }
}

/// Replays a fixed sequence of counts, one per classified frame.
///
/// Once the sequence is used up it either starts over (`cycle`) or keeps
/// returning the fallback count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptedClassifier {
    signals: Vec<i32>,
    position: usize,
    cycle: bool,
    fallback: i32,
}

impl ScriptedClassifier {
    pub fn new(signals: Vec<i32>) -> Self {
        Self {
            signals,
            position: 0,
            cycle: false,
            fallback: 0,
        }
    }

    pub fn with_cycle(mut self, cycle: bool) -> Self {
        self.cycle = cycle;
        self
    }

    pub fn with_fallback(mut self, fallback: i32) -> Self {
        self.fallback = fallback;
        self
    }

    /// Parse a comma separated list such as `"1,1,2,5"`.
    pub fn parse(script: &str) -> Result<Self, GestureError> {
        let signals = script
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| {
                s.parse::<i32>()
                    .map_err(|e| GestureError::Classify(format!("bad signal {s:?}: {e}")))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(signals))
    }

    pub fn signals(&self) -> &[i32] {
        &self.signals
    }

    pub fn remaining(&self) -> usize {
        self.signals.len().saturating_sub(self.position)
    }
}

impl Classifier for ScriptedClassifier {
    fn classify(&mut self, _frame: &Image) -> Result<i32, GestureError> {
        if self.position >= self.signals.len() {
            if !self.cycle || self.signals.is_empty() {
                return Ok(self.fallback);
            }
            self.position = 0;
        }
        let signal = self.signals[self.position];
        self.position += 1;
        Ok(signal)
    }
}
