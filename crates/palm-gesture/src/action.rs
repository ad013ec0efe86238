use crate::ActionHandler;
use std::fmt;

/// What the game should do this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionCommand {
    MoveLeft,
    MoveRight,
    Stop,
    NoOp,
}

impl ActionCommand {
    pub const ALL: [ActionCommand; 4] = [
        ActionCommand::MoveLeft,
        ActionCommand::MoveRight,
        ActionCommand::Stop,
        ActionCommand::NoOp,
    ];

    /// Invoke the handler method matching this command, exactly once.
    pub fn apply<H: ActionHandler + ?Sized>(self, handler: &mut H) {
        match self {
            ActionCommand::MoveLeft => handler.on_move_left(),
            ActionCommand::MoveRight => handler.on_move_right(),
            ActionCommand::Stop => handler.on_stop(),
            ActionCommand::NoOp => handler.on_no_op(),
        }
    }
}

impl fmt::Display for ActionCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ActionCommand::MoveLeft => "move-left",
            ActionCommand::MoveRight => "move-right",
            ActionCommand::Stop => "stop",
            ActionCommand::NoOp => "no-op",
        };
        f.write_str(name)
    }
}

/// Map a finger count to a command.
///
/// One finger moves left, two move right, an open palm (five) stops.
/// Every other value, negative ones included, is a no-op. There is no
/// debouncing: the result depends on this tick's count alone.
pub fn dispatch(signal: i32) -> ActionCommand {
    match signal {
        1 => ActionCommand::MoveLeft,
        2 => ActionCommand::MoveRight,
        5 => ActionCommand::Stop,
        _ => ActionCommand::NoOp,
    }
}
