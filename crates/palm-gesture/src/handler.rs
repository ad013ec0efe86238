/// Game-side reactions to dispatched commands.
///
/// Exactly one method is called per tick that classified a frame. The
/// implementation decides what moving or stopping means.
pub trait ActionHandler {
    fn on_move_left(&mut self);
    fn on_move_right(&mut self);
    fn on_stop(&mut self);

    /// Called for counts that map to no action, and for ticks whose frame
    /// could not be converted or classified.
    fn on_no_op(&mut self) {}
}

impl<H: ActionHandler + ?Sized> ActionHandler for &mut H {
    fn on_move_left(&mut self) {
        (**self).on_move_left()
    }

    fn on_move_right(&mut self) {
        (**self).on_move_right()
    }

    fn on_stop(&mut self) {
        (**self).on_stop()
    }

    fn on_no_op(&mut self) {
        (**self).on_no_op()
    }
}

impl<H: ActionHandler + ?Sized> ActionHandler for Box<H> {
    fn on_move_left(&mut self) {
        (**self).on_move_left()
    }

    fn on_move_right(&mut self) {
        (**self).on_move_right()
    }

    fn on_stop(&mut self) {
        (**self).on_stop()
    }

    fn on_no_op(&mut self) {
        (**self).on_no_op()
    }
}

/// Handler that only writes a trace line per action.
#[derive(Debug, Default, Clone, Copy)]
pub struct TraceHandler;

impl ActionHandler for TraceHandler {
    fn on_move_left(&mut self) {
        log::info!("moving left");
    }

    fn on_move_right(&mut self) {
        log::info!("moving right");
    }

    fn on_stop(&mut self) {
        log::info!("stopping game");
    }
}
