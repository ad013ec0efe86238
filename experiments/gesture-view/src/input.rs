use {
    minifb::Key,
    palm_gesture::{Classifier, ConstantClassifier, GestureError, ScriptedClassifier},
    palm_image::Image,
};

/// Finger count simulated by a number key, if `key` is one.
pub fn signal_for_key(key: Key) -> Option<i32> {
    match key {
        Key::Key0 | Key::NumPad0 => Some(0),
        Key::Key1 | Key::NumPad1 => Some(1),
        Key::Key2 | Key::NumPad2 => Some(2),
        Key::Key3 | Key::NumPad3 => Some(3),
        Key::Key4 | Key::NumPad4 => Some(4),
        Key::Key5 | Key::NumPad5 => Some(5),
        Key::Key6 | Key::NumPad6 => Some(6),
        Key::Key7 | Key::NumPad7 => Some(7),
        Key::Key8 | Key::NumPad8 => Some(8),
        Key::Key9 | Key::NumPad9 => Some(9),
        _ => None,
    }
}

/// Stand-in for a hand tracker.
///
/// Either the count is held by the keyboard, or it replays a `--signal` script.
#[derive(Clone, Debug)]
pub enum HostClassifier {
    Keyboard(ConstantClassifier),
    Scripted(ScriptedClassifier),
}

impl HostClassifier {
    /// Build from the `--signal` option: a single count holds steady, a list
    /// is replayed in a loop, nothing starts the keyboard at 0.
    pub fn from_option(signal: Option<&str>) -> Result<Self, GestureError> {
        let Some(signal) = signal else {
            return Ok(Self::Keyboard(ConstantClassifier::default()));
        };
        let script = ScriptedClassifier::parse(signal)?;
        if let [count] = script.signals() {
            return Ok(Self::Keyboard(ConstantClassifier::new(*count)));
        }
        Ok(Self::Scripted(script.with_cycle(true)))
    }

    /// Apply a key press. Returns the new count if the key changed it.
    pub fn press(&mut self, key: Key) -> Option<i32> {
        match self {
            Self::Keyboard(constant) => {
                let signal = signal_for_key(key)?;
                constant.set_signal(signal);
                Some(signal)
            }
            Self::Scripted(_) => None,
        }
    }
}

impl Classifier for HostClassifier {
    fn classify(&mut self, frame: &Image) -> Result<i32, GestureError> {
        match self {
            Self::Keyboard(constant) => constant.classify(frame),
            Self::Scripted(script) => script.classify(frame),
        }
    }
}
