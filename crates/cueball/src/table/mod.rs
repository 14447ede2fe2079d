//! The pool table: owns the balls and advances the simulation one frame at a time.

pub mod aim;
pub mod pockets;
pub mod rack;

use crate::api::config::TableConfig;
use crate::api::error::TableError;
use crate::api::types::{BallInstance, BallKind, TableEvent};
use crate::components::ball::Ball;
use crate::core::bounds::Bounds;
use crate::core::collision::{check_ball_ball, check_ball_wall, reflect_off_wall, resolve_ball_ball, ContactTracker};
use crate::core::geometry::angle_between;
use crate::core::math::{Heading, Point, Vector};
use crate::input::queue::Command;

use self::rack::RackLayout;

/// A rectangular table with six pockets and the balls in play.
///
/// Balls are kept in rack order. The cue ball is never removed: pocketing
/// it puts it back on its starting spot.
pub struct Table {
    config: TableConfig,
    bounds: Bounds,
    balls: Vec<Ball>,
    hole_centers: [Point; 6],
    hole_radius: f64,
    cue_start: Point,
    cue_angle: Option<f64>,
    cue_line_end: Option<Point>,
    contacts: ContactTracker,
    events: Vec<TableEvent>,
}

impl Table {
    /// Build a table and rack the configured layout.
    pub fn new(config: TableConfig) -> Result<Self, TableError> {
        config.validate()?;
        let layout = config.layout;
        let mut table = Self::empty(config);
        table.rack(layout)?;
        Ok(table)
    }

    /// Build a table holding exactly `balls`, for custom setups.
    /// The cue ball is optional here; kinds must be unique.
    pub fn with_balls(config: TableConfig, balls: Vec<Ball>) -> Result<Self, TableError> {
        config.validate()?;
        for (i, ball) in balls.iter().enumerate() {
            if balls[..i].iter().any(|b| b.kind == ball.kind) {
                return Err(TableError::DuplicateBall(ball.kind));
            }
        }
        let mut table = Self::empty(config);
        table.balls = balls;
        table.refresh_cue_line();
        Ok(table)
    }

    fn empty(config: TableConfig) -> Self {
        let bounds = Bounds::from_size(config.length, config.table_width());
        Self {
            hole_centers: pockets::pocket_centers(&bounds),
            hole_radius: config.hole_radius(),
            cue_start: rack::cue_start(&bounds, config.cue_offset),
            bounds,
            balls: Vec::with_capacity(BallKind::ALL.len()),
            cue_angle: None,
            cue_line_end: None,
            contacts: ContactTracker::new(),
            events: Vec::new(),
            config,
        }
    }

    // -- Racking --

    /// Replace the balls with a fresh rack of `layout`.
    pub fn rack(&mut self, layout: RackLayout) -> Result<(), TableError> {
        let (mass, radius) = (self.config.ball_mass, self.config.ball_radius);
        let apex = rack::rack_apex(&self.bounds);

        let mut balls = Vec::with_capacity(layout.kinds().len());
        balls.push(Ball::new(BallKind::Cue, self.cue_start, mass, radius)?);
        for (kind, pos) in rack::rack_positions(layout, apex, radius) {
            balls.push(Ball::new(kind, pos, mass, radius)?);
        }

        self.balls = balls;
        self.contacts.clear();
        self.events.clear();
        self.cue_angle = None;
        self.cue_line_end = None;
        log::info!("Racked {:?} ({} balls)", layout, self.balls.len());
        Ok(())
    }

    // -- Frame --

    /// Advance the simulation by one frame.
    ///
    /// Order: integrate every ball, then in ball order check each ball
    /// against the cushions and against every later ball, resolving hits
    /// immediately. Then pocket, then refresh the cue line.
    pub fn time_step(&mut self) {
        self.events.clear();

        let damping = self.config.damping;
        for ball in &mut self.balls {
            ball.time_step(damping);
        }

        self.resolve_collisions();
        self.pocket_balls();
        self.refresh_cue_line();
    }

    fn resolve_collisions(&mut self) {
        let n = self.balls.len();
        for i in 0..n {
            let ball = &mut self.balls[i];
            if let Some(wall) = check_ball_wall(ball, &self.bounds) {
                ball.vel = reflect_off_wall(ball.vel, wall);
                self.contacts.record_wall(ball.kind);
                self.events.push(TableEvent::WallCollision { ball: ball.kind, wall });
            }

            for j in (i + 1)..n {
                let (head, tail) = self.balls.split_at_mut(j);
                let (a, b) = (&mut head[i], &mut tail[0]);
                if self.contacts.is_suppressed(a.kind, b.kind) || !check_ball_ball(a, b) {
                    continue;
                }

                let (a_vel, b_vel) = resolve_ball_ball(a.pos, a.vel, a.mass(), b.pos, b.vel, b.mass());
                let exchanged = a_vel != a.vel || b_vel != b.vel;
                a.vel = a_vel;
                b.vel = b_vel;
                self.contacts.record_pair(a.kind, b.kind);
                if exchanged {
                    log::debug!("{:?} hit {:?}", a.kind, b.kind);
                    self.events.push(TableEvent::BallCollision { a: a.kind, b: b.kind });
                }
            }
        }
    }

    /// Drop balls whose center lies inside a pocket's capture radius.
    /// The cue ball goes back to its starting spot at rest.
    fn pocket_balls(&mut self) {
        let mut pocketed = Vec::new();
        for ball in &mut self.balls {
            let Some(pocket) = pockets::capturing_pocket(ball.pos, &self.hole_centers, self.hole_radius) else {
                continue;
            };
            if ball.kind.is_cue() {
                log::info!("Scratch: cue ball in pocket {}", pocket);
                ball.pos = self.cue_start;
                ball.stop();
                self.events.push(TableEvent::Scratch { pocket });
            } else {
                log::info!("Ball {:?} pocketed into pocket {}", ball.kind, pocket);
                self.events.push(TableEvent::Pocketed { ball: ball.kind, pocket });
                pocketed.push(ball.kind);
            }
        }
        if pocketed.is_empty() {
            return;
        }
        self.balls.retain(|b| !pocketed.contains(&b.kind));
        for kind in pocketed {
            self.contacts.forget(kind);
        }
    }

    // -- Cue --

    /// Where a stroke at the current cue angle would stop, without touching
    /// any state. `None` when no cue is shown.
    pub fn predict_cue_line(&self) -> Option<Point> {
        let angle = self.cue_angle?;
        let Some(cue) = self.cue_ball() else {
            log::error!("cue angle set with no cue ball on the table");
            debug_assert!(false, "cue path requested with no cue ball in play");
            return None;
        };
        aim::predict(cue, angle, &self.balls, &self.bounds)
    }

    fn refresh_cue_line(&mut self) {
        self.cue_line_end = self.predict_cue_line();
    }

    pub fn cue_angle(&self) -> Option<f64> {
        self.cue_angle
    }

    /// Set the cue angle in degrees (`None` hides the cue) and refresh the cue line.
    pub fn set_cue_angle(&mut self, angle: Option<f64>) {
        self.cue_angle = angle.filter(|a| a.is_finite()).map(|a| {
            // rem_euclid rounds tiny negatives up to 360
            let a = a.rem_euclid(360.0);
            if a >= 360.0 { 0.0 } else { a }
        });
        self.refresh_cue_line();
    }

    /// Point the cue from the cue ball toward `target`.
    pub fn aim_at(&mut self, target: Point) {
        let angle = self.cue_ball().and_then(|cue| angle_between(target, cue.pos));
        self.set_cue_angle(angle);
    }

    pub fn cue_line_end(&self) -> Option<Point> {
        self.cue_line_end
    }

    /// Hit the cue ball along the cue angle. Returns false when there is no
    /// cue angle or no cue ball.
    pub fn strike(&mut self, magnitude: f64) -> bool {
        let Some(angle) = self.cue_angle else {
            log::warn!("strike ignored: no cue angle");
            return false;
        };
        let Some(cue) = self.ball_mut(BallKind::Cue) else {
            log::warn!("strike ignored: no cue ball");
            return false;
        };
        let force = Vector::from_heading(angle) * magnitude;
        cue.apply_force(force);
        log::debug!("Strike at {:.1} deg, force {:?}", angle, force);
        true
    }

    /// Execute one input command.
    pub fn apply(&mut self, command: Command) -> Result<(), TableError> {
        match command {
            Command::AimAt { x, y } => self.aim_at(Point::new(x, y)),
            Command::SetCueAngle(angle) => self.set_cue_angle(angle),
            Command::Strike { magnitude } => {
                self.strike(magnitude);
            }
            Command::Rack(layout) => self.rack(layout)?,
            Command::StopAll => {
                for ball in &mut self.balls {
                    ball.stop();
                }
            }
        }
        Ok(())
    }

    // -- Accessors --

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    pub fn length(&self) -> f64 {
        self.bounds.length()
    }

    pub fn width(&self) -> f64 {
        self.bounds.width()
    }

    pub fn hole_centers(&self) -> &[Point; 6] {
        &self.hole_centers
    }

    pub fn hole_radius(&self) -> f64 {
        self.hole_radius
    }

    pub fn cue_start(&self) -> Point {
        self.cue_start
    }

    /// Balls in play, in rack order.
    pub fn balls(&self) -> &[Ball] {
        &self.balls
    }

    pub fn ball(&self, kind: BallKind) -> Option<&Ball> {
        self.balls.iter().find(|b| b.kind == kind)
    }

    pub fn ball_mut(&mut self, kind: BallKind) -> Option<&mut Ball> {
        self.balls.iter_mut().find(|b| b.kind == kind)
    }

    pub fn cue_ball(&self) -> Option<&Ball> {
        self.ball(BallKind::Cue)
    }

    /// Object balls still on the table.
    pub fn balls_remaining(&self) -> usize {
        self.balls.iter().filter(|b| !b.kind.is_cue()).count()
    }

    /// Whether every ball has slowed to the configured rest speed.
    pub fn is_settled(&self) -> bool {
        self.balls.iter().all(|b| b.speed() <= self.config.rest_speed)
    }

    pub fn contacts(&self) -> &ContactTracker {
        &self.contacts
    }

    /// Events from the most recent `time_step`.
    pub fn events(&self) -> &[TableEvent] {
        &self.events
    }

    /// Fill `out` with one render record per ball, in rack order.
    pub fn snapshot_into(&self, out: &mut Vec<BallInstance>) {
        out.clear();
        out.extend(self.balls.iter().map(|b| BallInstance {
            x: b.pos.x as f32,
            y: b.pos.y as f32,
            radius: b.radius() as f32,
            kind: b.kind.number() as f32,
        }));
    }
}
