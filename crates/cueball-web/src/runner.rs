use cueball::{
    BallInstance, Command, CommandQueue, EventRecord, FrameClock, Table, TableConfig, TableError,
};

/// Drives a [`Table`] from the browser frame loop.
///
/// Commands from the page are queued and applied at the start of the next
/// tick, then the table runs as many fixed frames as the elapsed time
/// covers. After each tick the flat buffers below hold the state a
/// renderer reads through raw pointers.
pub struct TableRunner {
    table: Table,
    clock: FrameClock,
    commands: CommandQueue,
    /// One record per ball, refreshed every tick.
    balls: Vec<BallInstance>,
    /// Events from every frame run during the last tick.
    events: Vec<EventRecord>,
    /// Pocket centers as x/y pairs. Fixed for the table's lifetime.
    pockets: Vec<f32>,
    /// Cue line as [start x, start y, end x, end y]; valid when `has_cue_line`.
    cue_line: [f32; 4],
    has_cue_line: bool,
}

impl TableRunner {
    pub fn new(table: Table) -> Self {
        let config = table.config();
        let clock = FrameClock::new(config.frames_per_second, config.max_catch_up_frames);
        let pockets = table
            .hole_centers()
            .iter()
            .flat_map(|p| [p.x as f32, p.y as f32])
            .collect();

        let mut runner = Self {
            clock,
            commands: CommandQueue::new(),
            balls: Vec::with_capacity(table.balls().len()),
            events: Vec::with_capacity(64),
            pockets,
            cue_line: [0.0; 4],
            has_cue_line: false,
            table,
        };
        runner.refresh_buffers();
        runner
    }

    /// Build a runner from a JSON table config. An empty string uses defaults.
    pub fn from_json(json: &str) -> Result<Self, TableError> {
        let config = if json.trim().is_empty() {
            TableConfig::default()
        } else {
            TableConfig::from_json(json)?
        };
        Ok(Self::new(Table::new(config)?))
    }

    /// Queue a command for the next tick.
    pub fn push(&mut self, command: Command) {
        self.commands.push(command);
    }

    /// Queue a strike at the configured magnitude.
    pub fn push_strike(&mut self) {
        let magnitude = self.table.config().strike_magnitude;
        self.commands.push(Command::Strike { magnitude });
    }

    /// Apply queued commands, run the frames `dt` seconds cover, and
    /// rebuild the output buffers. Returns the number of frames run.
    pub fn tick(&mut self, dt: f32) -> u32 {
        self.events.clear();

        for command in self.commands.drain() {
            if let Err(err) = self.table.apply(command) {
                log::warn!("command {:?} rejected: {}", command, err);
            }
            if matches!(command, Command::Rack(_)) {
                self.clock.reset();
            }
        }

        let frames = self.clock.advance(dt as f64);
        for _ in 0..frames {
            self.table.time_step();
            self.events
                .extend(self.table.events().iter().map(|&e| EventRecord::from(e)));
        }

        self.refresh_buffers();
        frames
    }

    fn refresh_buffers(&mut self) {
        self.table.snapshot_into(&mut self.balls);

        let line = self
            .table
            .cue_ball()
            .map(|cue| cue.pos)
            .zip(self.table.cue_line_end());
        match line {
            Some((start, end)) => {
                self.cue_line = [start.x as f32, start.y as f32, end.x as f32, end.y as f32];
                self.has_cue_line = true;
            }
            None => self.has_cue_line = false,
        }
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    // ---- Pointer accessors for shared-buffer reads ----

    pub fn balls_ptr(&self) -> *const f32 {
        self.balls.as_ptr() as *const f32
    }

    pub fn ball_count(&self) -> u32 {
        self.balls.len() as u32
    }

    pub fn events_ptr(&self) -> *const f32 {
        self.events.as_ptr() as *const f32
    }

    pub fn event_count(&self) -> u32 {
        self.events.len() as u32
    }

    pub fn pockets_ptr(&self) -> *const f32 {
        self.pockets.as_ptr()
    }

    pub fn pocket_count(&self) -> u32 {
        (self.pockets.len() / 2) as u32
    }

    pub fn pocket_radius(&self) -> f32 {
        self.table.hole_radius() as f32
    }

    pub fn cue_line_ptr(&self) -> *const f32 {
        self.cue_line.as_ptr()
    }

    pub fn has_cue_line(&self) -> bool {
        self.has_cue_line
    }

    pub fn table_length(&self) -> f32 {
        self.table.length() as f32
    }

    pub fn table_width(&self) -> f32 {
        self.table.width() as f32
    }

    pub fn balls_remaining(&self) -> u32 {
        self.table.balls_remaining() as u32
    }

    pub fn is_settled(&self) -> bool {
        self.table.is_settled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cueball::{BallKind, RackLayout};

    const FRAME: f32 = 1.0 / 60.0;

    fn runner() -> TableRunner {
        TableRunner::from_json("").unwrap()
    }

    #[test]
    fn default_runner_exposes_a_nine_ball_rack() {
        let r = runner();
        assert_eq!(r.ball_count(), 10);
        assert_eq!(r.pocket_count(), 6);
        assert_eq!(r.table_length(), 1000.0);
        assert_eq!(r.table_width(), 500.0);
        assert!(!r.has_cue_line());
        assert_eq!(r.balls[0].kind, 0.0);
    }

    #[test]
    fn bad_config_is_rejected() {
        assert!(TableRunner::from_json("{ not json").is_err());
        assert!(TableRunner::from_json(r#"{"ball_mass": -1.0}"#).is_err());
    }

    #[test]
    fn commands_wait_for_the_next_tick() {
        let mut r = runner();
        r.push(Command::SetCueAngle(Some(0.0)));
        assert!(!r.has_cue_line());
        r.tick(0.0);
        assert!(r.has_cue_line());
        assert_eq!(r.cue_line[0], 250.0);
        assert_eq!(r.cue_line[1], 270.0);
    }

    #[test]
    fn tick_runs_whole_frames() {
        let mut r = runner();
        assert_eq!(r.tick(FRAME * 3.0), 3);
        assert_eq!(r.tick(FRAME * 0.5), 0);
    }

    #[test]
    fn strike_moves_the_cue_ball() {
        let mut r = runner();
        r.push(Command::SetCueAngle(Some(90.0)));
        r.push_strike();
        r.tick(FRAME);
        let cue = r.table().ball(BallKind::Cue).unwrap();
        assert!(cue.vel.y > 0.0);
        assert!(!r.is_settled());
    }

    #[test]
    fn events_are_flattened_per_tick() {
        let mut r = runner();
        // straight down the long axis into the rack
        r.push(Command::AimAt { x: 750.0, y: 270.0 });
        r.push_strike();
        let mut saw_collision = false;
        for _ in 0..60 {
            r.tick(FRAME * 10.0);
            let records: &[EventRecord] = &r.events;
            if records.iter().any(|e| e.kind == EventRecord::BALL_COLLISION) {
                saw_collision = true;
                break;
            }
        }
        assert!(saw_collision);
    }

    #[test]
    fn rack_command_restores_all_balls() {
        let mut r = runner();
        r.push(Command::Rack(RackLayout::ThreeBall));
        r.tick(0.0);
        assert_eq!(r.ball_count(), 4);
        assert_eq!(r.balls_remaining(), 3);
    }
}
