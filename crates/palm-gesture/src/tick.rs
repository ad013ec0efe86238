use {
    crate::*,
    palm_image::Image,
    palm_video::VideoSource,
};

/// What a single tick did.
#[derive(Debug)]
pub enum TickOutcome {
    /// No new frame; nothing was classified or dispatched.
    Skipped,
    /// A frame was classified and `command` was handed to the handler.
    Dispatched { signal: i32, command: ActionCommand },
    /// Sampling or classification failed; the handler saw a no-op.
    Recovered { error: GestureError },
}

impl TickOutcome {
    /// The command delivered to the handler, if any.
    pub fn command(&self) -> Option<ActionCommand> {
        match self {
            TickOutcome::Skipped => None,
            TickOutcome::Dispatched { command, .. } => Some(*command),
            TickOutcome::Recovered { .. } => Some(ActionCommand::NoOp),
        }
    }

    pub fn signal(&self) -> Option<i32> {
        match self {
            TickOutcome::Dispatched { signal, .. } => Some(*signal),
            _ => None,
        }
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, TickOutcome::Skipped)
    }
}

/// Run one tick: sample, classify, dispatch.
///
/// Makes no classifier or handler call when the source has no new frame,
/// and exactly one handler call otherwise. Errors are logged and reported
/// in the outcome, never returned.
pub fn tick<S, C, H>(
    sampler: &FrameSampler,
    source: &mut S,
    classifier: &mut C,
    handler: &mut H,
) -> TickOutcome
where
    S: VideoSource + ?Sized,
    C: Classifier + ?Sized,
    H: ActionHandler + ?Sized,
{
    tick_with(sampler, source, classifier, handler, |_| {})
}

/// Like [`tick`], additionally lending the grayscale frame to `inspect`
/// after classification. The frame is dropped before the tick returns.
pub fn tick_with<S, C, H, F>(
    sampler: &FrameSampler,
    source: &mut S,
    classifier: &mut C,
    handler: &mut H,
    inspect: F,
) -> TickOutcome
where
    S: VideoSource + ?Sized,
    C: Classifier + ?Sized,
    H: ActionHandler + ?Sized,
    F: FnOnce(&Image),
{
    let frame = match sampler.sample(source) {
        Ok(Some(frame)) => frame,
        Ok(None) => return TickOutcome::Skipped,
        Err(error) => return recover(handler, error),
    };

    let classified = classifier.classify(&frame);
    inspect(&frame);
    drop(frame);

    let signal = match classified {
        Ok(signal) => signal,
        Err(error) => return recover(handler, error),
    };

    let command = dispatch(signal);
    log::debug!("tick: signal {} -> {}", signal, command);
    command.apply(handler);
    TickOutcome::Dispatched { signal, command }
}

fn recover<H: ActionHandler + ?Sized>(handler: &mut H, error: GestureError) -> TickOutcome {
    log::warn!("tick: {}, treating as no-op", error);
    ActionCommand::NoOp.apply(handler);
    TickOutcome::Recovered { error }
}
