use crate::table::rack::RackLayout;

/// Requests the input layer makes of the table.
/// Already mapped from pointer/key events; no device semantics here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// Point the cue from the cue ball toward table coordinates (x, y).
    AimAt { x: f64, y: f64 },
    /// Set the cue angle directly, in degrees. `None` hides the cue.
    SetCueAngle(Option<f64>),
    /// Strike the cue ball along the cue angle with the given force.
    Strike { magnitude: f64 },
    /// Put a fresh rack on the table.
    Rack(RackLayout),
    /// Bring every ball to rest immediately.
    StopAll,
}

impl Command {
    fn is_aim(&self) -> bool {
        matches!(self, Command::AimAt { .. } | Command::SetCueAngle(_))
    }
}

/// Commands collected between frames, drained once per tick.
///
/// Pointer moves arrive far faster than frames, so an aim update replaces
/// an aim update queued directly before it. A rack discards everything
/// queued ahead of it. Strikes are never merged, and order is kept.
pub struct CommandQueue {
    commands: Vec<Command>,
}

impl CommandQueue {
    pub fn new() -> Self {
        Self {
            commands: Vec::with_capacity(16),
        }
    }

    pub fn push(&mut self, command: Command) {
        match command {
            Command::Rack(_) => self.commands.clear(),
            _ if command.is_aim() => {
                if self.commands.last().is_some_and(Command::is_aim) {
                    self.commands.pop();
                }
            }
            _ => {}
        }
        self.commands.push(command);
    }

    /// Take all pending commands, leaving the queue empty.
    pub fn drain(&mut self) -> Vec<Command> {
        std::mem::take(&mut self.commands)
    }
}

impl Default for CommandQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drain_empties_the_queue() {
        let mut q = CommandQueue::new();
        q.push(Command::AimAt { x: 10.0, y: 20.0 });
        q.push(Command::Strike { magnitude: 50.0 });
        let commands = q.drain();
        assert_eq!(commands, vec![Command::AimAt { x: 10.0, y: 20.0 }, Command::Strike { magnitude: 50.0 }]);
        assert!(q.drain().is_empty());
    }

    #[test]
    fn consecutive_aims_keep_the_latest() {
        let mut q = CommandQueue::new();
        q.push(Command::AimAt { x: 1.0, y: 1.0 });
        q.push(Command::AimAt { x: 2.0, y: 2.0 });
        q.push(Command::SetCueAngle(Some(45.0)));
        assert_eq!(q.drain(), vec![Command::SetCueAngle(Some(45.0))]);
    }

    #[test]
    fn strike_separates_aims() {
        let mut q = CommandQueue::new();
        q.push(Command::AimAt { x: 1.0, y: 1.0 });
        q.push(Command::Strike { magnitude: 50.0 });
        q.push(Command::AimAt { x: 2.0, y: 2.0 });
        assert_eq!(q.drain().len(), 3);
    }

    #[test]
    fn rack_discards_earlier_commands() {
        let mut q = CommandQueue::new();
        q.push(Command::SetCueAngle(Some(10.0)));
        q.push(Command::Strike { magnitude: 50.0 });
        q.push(Command::Rack(RackLayout::ThreeBall));
        q.push(Command::StopAll);
        assert_eq!(q.drain(), vec![Command::Rack(RackLayout::ThreeBall), Command::StopAll]);
    }
}
