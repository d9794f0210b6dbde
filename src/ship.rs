use crate::collision::Hitbox;
use crate::game::FrameTime;
use crate::input_system::InputState;
use crate::{PADDING, SCREEN_HEIGHT, SCREEN_WIDTH};

/// Ship travel speed in screen units per second.
pub const SHIP_SPEED: f32 = 100.0;

/// Tile coordinate of the ship sprite in the shared sheet.
pub const SHIP_TILE: (i32, i32) = (0, 0);

const SHIP_WIDTH: f32 = 12.0;
const SHIP_HEIGHT: f32 = 15.0;

/// The player's ship.
///
/// There is exactly one ship for the whole game, so destruction is soft:
/// the ship is flagged dead and parked off-screen until the respawn
/// countdown runs out, instead of being removed from the world.
#[derive(Debug, Clone)]
pub struct Ship {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub dead: bool,
    /// Seconds until control returns after death.
    pub respawn: f32,
}

impl Ship {
    pub fn new() -> Self {
        let (x, y) = Ship::spawn_position();
        Ship {
            x,
            y,
            width: SHIP_WIDTH,
            height: SHIP_HEIGHT,
            dead: false,
            respawn: 0.0,
        }
    }

    /// Center of the bottom row, above the padding margin.
    pub fn spawn_position() -> (f32, f32) {
        (
            (SCREEN_WIDTH - SHIP_WIDTH) / 2.0,
            SCREEN_HEIGHT - SHIP_HEIGHT - PADDING,
        )
    }

    /// Per-frame ship movement and respawn handling.
    ///
    /// Horizontal velocity comes straight from the held keys and is
    /// integrated over delta time, then clamped to the screen margins.
    /// A dead ship counts its respawn timer down and returns to the spawn
    /// point once the timer expires, but only while lives remain.
    pub fn update(&mut self, input: &InputState, time: &FrameTime, lives: i32) {
        let direction = input.right.hold as i32 - input.left.hold as i32;
        self.x += SHIP_SPEED * direction as f32 * time.delta;

        if self.x < PADDING {
            self.x = PADDING;
        } else if self.x > SCREEN_WIDTH - self.width - PADDING {
            self.x = SCREEN_WIDTH - self.width - PADDING;
        }

        if self.dead {
            self.respawn -= time.delta;
            if self.respawn < 0.0 && lives > 0 {
                let (x, y) = Ship::spawn_position();
                self.x = x;
                self.y = y;
                self.dead = false;
            }
        }
    }

    /// Park the ship off-screen and start the respawn countdown.
    pub fn destroy(&mut self) {
        self.x = -100.0;
        self.y = -100.0;
        self.dead = true;
        self.respawn = 1.0;
    }

    pub fn hitbox(&self) -> Hitbox {
        Hitbox::new(self.x, self.y, self.width, self.height)
    }
}

impl Default for Ship {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(delta: f32) -> FrameTime {
        FrameTime {
            now_mus: 0,
            delta_mus: (delta * 1_000_000.0) as i64,
            delta,
        }
    }

    #[test]
    fn test_hold_right_for_one_second() {
        let mut ship = Ship::new();
        ship.x = 150.0;
        let mut input = InputState::default();
        input.right.hold = true;

        ship.update(&input, &frame(1.0), 3);

        assert_eq!(ship.x, 250.0);
    }

    #[test]
    fn test_clamped_at_right_margin() {
        let mut ship = Ship::new();
        ship.x = 279.0;
        let mut input = InputState::default();
        input.right.hold = true;

        ship.update(&input, &frame(1.0), 3);

        // 312 - 12 - 20
        assert_eq!(ship.x, 280.0);
    }

    #[test]
    fn test_clamped_at_left_margin() {
        let mut ship = Ship::new();
        ship.x = 21.0;
        let mut input = InputState::default();
        input.left.hold = true;

        ship.update(&input, &frame(1.0), 3);

        assert_eq!(ship.x, PADDING);
    }

    #[test]
    fn test_respawns_after_timer_with_lives_left() {
        let mut ship = Ship::new();
        ship.destroy();
        let input = InputState::default();

        ship.update(&input, &frame(0.6), 2);
        assert!(ship.dead);

        ship.update(&input, &frame(0.6), 2);
        assert!(!ship.dead);
        assert_eq!((ship.x, ship.y), Ship::spawn_position());
    }

    #[test]
    fn test_no_respawn_when_out_of_lives() {
        let mut ship = Ship::new();
        ship.destroy();
        let input = InputState::default();

        ship.update(&input, &frame(2.0), 0);

        assert!(ship.dead);
        assert_eq!(ship.y, -100.0);
    }
}
