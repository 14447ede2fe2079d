use bytemuck::{Pod, Zeroable};

use crate::core::collision::Wall;

/// Identity of a ball on the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BallKind {
    Cue,
    One,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
}

impl BallKind {
    pub const ALL: [BallKind; 10] = [
        BallKind::Cue,
        BallKind::One,
        BallKind::Two,
        BallKind::Three,
        BallKind::Four,
        BallKind::Five,
        BallKind::Six,
        BallKind::Seven,
        BallKind::Eight,
        BallKind::Nine,
    ];

    /// Number printed on the ball; 0 for the cue ball.
    pub fn number(self) -> u8 {
        self as u8
    }

    pub fn from_number(number: u8) -> Option<Self> {
        Self::ALL.get(number as usize).copied()
    }

    pub fn is_cue(self) -> bool {
        self == BallKind::Cue
    }
}

/// Something that happened during the last `Table::time_step`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TableEvent {
    /// Two balls touched and exchanged momentum.
    BallCollision { a: BallKind, b: BallKind },
    /// A ball bounced off a cushion.
    WallCollision { ball: BallKind, wall: Wall },
    /// An object ball dropped into pocket `pocket` and left play.
    Pocketed { ball: BallKind, pocket: usize },
    /// The cue ball dropped into pocket `pocket` and was put back.
    Scratch { pocket: usize },
}

/// Flat form of a [`TableEvent`] for shared-buffer readers.
/// `kind` identifies the event, `a/b/c` carry payload.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct EventRecord {
    pub kind: f32,
    pub a: f32,
    pub b: f32,
    pub c: f32,
}

impl EventRecord {
    pub const FLOATS: usize = 4;

    pub const BALL_COLLISION: f32 = 1.0;
    pub const WALL_COLLISION: f32 = 2.0;
    pub const POCKETED: f32 = 3.0;
    pub const SCRATCH: f32 = 4.0;
}

impl From<TableEvent> for EventRecord {
    fn from(event: TableEvent) -> Self {
        match event {
            TableEvent::BallCollision { a, b } => EventRecord {
                kind: Self::BALL_COLLISION,
                a: a.number() as f32,
                b: b.number() as f32,
                c: 0.0,
            },
            TableEvent::WallCollision { ball, wall } => EventRecord {
                kind: Self::WALL_COLLISION,
                a: ball.number() as f32,
                b: wall as u8 as f32,
                c: 0.0,
            },
            TableEvent::Pocketed { ball, pocket } => EventRecord {
                kind: Self::POCKETED,
                a: ball.number() as f32,
                b: pocket as f32,
                c: 0.0,
            },
            TableEvent::Scratch { pocket } => EventRecord {
                kind: Self::SCRATCH,
                a: 0.0,
                b: pocket as f32,
                c: 0.0,
            },
        }
    }
}

/// Per-ball data a renderer needs, packed for a shared buffer.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct BallInstance {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    /// [`BallKind::number`] as a float.
    pub kind: f32,
}

impl BallInstance {
    pub const FLOATS: usize = 4;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_round_trip() {
        for kind in BallKind::ALL {
            assert_eq!(BallKind::from_number(kind.number()), Some(kind));
        }
        assert_eq!(BallKind::from_number(10), None);
        assert_eq!(BallKind::Nine.number(), 9);
        assert!(BallKind::Cue.is_cue());
        assert!(!BallKind::Eight.is_cue());
    }

    #[test]
    fn event_record_layout() {
        assert_eq!(std::mem::size_of::<EventRecord>(), EventRecord::FLOATS * 4);
        assert_eq!(std::mem::size_of::<BallInstance>(), BallInstance::FLOATS * 4);
    }

    #[test]
    fn pocketed_event_flattens() {
        let rec = EventRecord::from(TableEvent::Pocketed { ball: BallKind::Seven, pocket: 3 });
        assert_eq!(rec.kind, EventRecord::POCKETED);
        assert_eq!(rec.a, 7.0);
        assert_eq!(rec.b, 3.0);
    }

    #[test]
    fn wall_event_flattens() {
        let rec = EventRecord::from(TableEvent::WallCollision { ball: BallKind::Cue, wall: Wall::South });
        assert_eq!(rec.kind, EventRecord::WALL_COLLISION);
        assert_eq!(rec.a, 0.0);
        assert_eq!(rec.b, 2.0);
    }
}
