use crate::collision::Hitbox;

/// Laser travel speed in screen units per second (delta-scaled).
pub const LASER_SPEED: f32 = 150.0;

/// Hard cap on simultaneously live player lasers.
pub const MAX_PLAYER_LASERS: usize = 2;

/// A laser bolt, fired either by the ship (travels up) or by an alien
/// (travels down). Both kinds share the same shape; the world keeps them
/// in separate collections so they collide with the right targets.
#[derive(Debug, Clone)]
pub struct Laser {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub sprite_tile: (i32, i32),
    pub id: u32,
}

impl Laser {
    /// A bolt fired by the ship, spawned just above the ship's cannon.
    pub fn player_shot(ship_x: f32, ship_y: f32, id: u32) -> Self {
        Laser {
            x: ship_x + 5.0,
            y: ship_y + 16.0,
            width: 2.0,
            height: 7.0,
            sprite_tile: (0, 1),
            id,
        }
    }

    /// A bolt dropped by an alien. Every kind fires from the same fixed
    /// offset; the per-kind shot offsets are not read here.
    pub fn alien_shot(alien_x: f32, alien_y: f32, id: u32) -> Self {
        Laser {
            x: alien_x + 5.0,
            y: alien_y + 8.0,
            width: 2.0,
            height: 7.0,
            sprite_tile: (0, 4),
            id,
        }
    }

    pub fn hitbox(&self) -> Hitbox {
        Hitbox::new(self.x, self.y, self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_shot_spawn_offset() {
        let laser = Laser::player_shot(150.0, 221.0, 7);
        assert_eq!((laser.x, laser.y), (155.0, 237.0));
        assert_eq!(laser.sprite_tile, (0, 1));
        assert_eq!(laser.id, 7);
    }

    #[test]
    fn test_alien_shot_spawn_offset() {
        let laser = Laser::alien_shot(20.0, 20.0, 3);
        assert_eq!((laser.x, laser.y), (25.0, 28.0));
        assert_eq!(laser.sprite_tile, (0, 4));
    }
}
