use crate::collision::Hitbox;
use crate::{PADDING, SCREEN_WIDTH};

/// The three alien breeds. Spawn rows cycle through them, so every wave
/// mixes all three.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlienKind {
    Crab,
    Squid,
    Octopus,
}

impl AlienKind {
    /// Kind for a spawn row; rows cycle Crab, Squid, Octopus, Crab, ...
    pub fn from_row(row: u32) -> Self {
        match row % 3 {
            0 => AlienKind::Crab,
            1 => AlienKind::Squid,
            _ => AlienKind::Octopus,
        }
    }

    /// Collision size in screen units; matches the drawn sprite.
    pub fn size(self) -> (f32, f32) {
        match self {
            AlienKind::Crab => (12.0, 8.0),
            AlienKind::Squid => (10.0, 9.0),
            AlienKind::Octopus => (8.0, 13.0),
        }
    }

    /// Tile coordinate of this kind's sprite in the shared sheet.
    pub fn sprite_tile(self) -> (i32, i32) {
        match self {
            AlienKind::Crab => (0, 2),
            AlienKind::Squid => (1, 2),
            AlienKind::Octopus => (2, 2),
        }
    }

    /// Where this kind's cannon sits relative to its position.
    ///
    /// Note: Currently unused. Alien shots spawn from a fixed offset
    /// shared by every kind; kept for per-kind shot origins.
    #[allow(dead_code)]
    pub fn shot_offset(self) -> (f32, f32) {
        match self {
            AlienKind::Crab => (5.0, 7.0),
            AlienKind::Squid => (4.0, 7.0),
            AlienKind::Octopus => (3.0, 10.0),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Alien {
    pub x: f32,
    pub y: f32,
    pub kind: AlienKind,
    pub id: u32,
}

impl Alien {
    pub fn new(x: f32, y: f32, kind: AlienKind, id: u32) -> Self {
        Alien { x, y, kind, id }
    }

    pub fn hitbox(&self) -> Hitbox {
        let (width, height) = self.kind.size();
        Hitbox::new(self.x, self.y, width, height)
    }
}

/// Direction the formation moves this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormationMove {
    Right,
    Left,
    Down,
}

/// Movement state for the whole swarm.
///
/// The aliens march as one rigid body: sideways one unit per frame until
/// any of them reaches a screen margin, then down 10 units for a single
/// frame, then back the other way. `Down` never persists: the frame
/// after a drop the formation is already moving horizontally again.
///
/// The sideways and downward steps are fixed integer amounts on purpose,
/// NOT scaled by delta time; the swarm is meant to march in visible
/// pixel steps.
#[derive(Debug, Clone)]
pub struct Formation {
    pub current: FormationMove,
    pub last_horizontal: FormationMove,
}

impl Formation {
    pub fn new() -> Self {
        Formation {
            current: FormationMove::Right,
            last_horizontal: FormationMove::Right,
        }
    }

    /// Advance the state machine for this frame.
    ///
    /// While moving horizontally, remember the direction and switch to
    /// `Down` as soon as any alien touches a margin. While `Down`, flip
    /// to the opposite of the remembered direction immediately.
    pub fn update(&mut self, aliens: &[Alien]) {
        if self.current != FormationMove::Down {
            self.last_horizontal = self.current;
            let at_edge = aliens.iter().any(|alien| {
                alien.x < PADDING
                    || alien.x > SCREEN_WIDTH - PADDING - alien.kind.size().0
            });
            if at_edge {
                self.current = FormationMove::Down;
            }
        } else {
            self.current = if self.last_horizontal == FormationMove::Left {
                FormationMove::Right
            } else {
                FormationMove::Left
            };
        }
    }

    /// Per-alien displacement for the current state.
    pub fn step(&self) -> (f32, f32) {
        match self.current {
            FormationMove::Right => (1.0, 0.0),
            FormationMove::Left => (-1.0, 0.0),
            FormationMove::Down => (0.0, 10.0),
        }
    }
}

impl Default for Formation {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_cycles_by_row() {
        assert_eq!(AlienKind::from_row(0), AlienKind::Crab);
        assert_eq!(AlienKind::from_row(1), AlienKind::Squid);
        assert_eq!(AlienKind::from_row(2), AlienKind::Octopus);
        assert_eq!(AlienKind::from_row(3), AlienKind::Crab);
    }

    #[test]
    fn test_formation_stays_right_within_bounds() {
        let mut formation = Formation::new();
        let aliens = vec![Alien::new(100.0, 20.0, AlienKind::Crab, 0)];

        formation.update(&aliens);

        assert_eq!(formation.current, FormationMove::Right);
        assert_eq!(formation.step(), (1.0, 0.0));
    }

    #[test]
    fn test_formation_drops_at_right_margin_then_goes_left() {
        let mut formation = Formation::new();
        // Crab is 12 wide, so the right margin sits at x = 312 - 20 - 12
        let aliens = vec![Alien::new(281.0, 20.0, AlienKind::Crab, 0)];

        formation.update(&aliens);
        assert_eq!(formation.current, FormationMove::Down);
        assert_eq!(formation.step(), (0.0, 10.0));

        // Down is a one-frame pulse; the next update flips direction even
        // though the alien has not moved back inside the margin yet
        formation.update(&aliens);
        assert_eq!(formation.current, FormationMove::Left);
    }

    #[test]
    fn test_formation_drops_at_left_margin_then_goes_right() {
        let mut formation = Formation::new();
        formation.current = FormationMove::Left;
        let aliens = vec![Alien::new(19.0, 20.0, AlienKind::Squid, 0)];

        formation.update(&aliens);
        assert_eq!(formation.current, FormationMove::Down);
        assert_eq!(formation.last_horizontal, FormationMove::Left);

        formation.update(&aliens);
        assert_eq!(formation.current, FormationMove::Right);
    }
}
