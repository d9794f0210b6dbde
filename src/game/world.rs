// GameWorld struct and entity management
//
// This module contains the GameWorld struct which owns every game entity
// and runs the per-frame simulation step. Rendering reads the world after
// each step but never writes to it.

use std::collections::HashSet;

use rand::Rng;

use crate::SCREEN_HEIGHT;
use crate::alien::{Alien, AlienKind, Formation};
use crate::animation::{Animation, AnimationData};
use crate::collision::overlaps;
use crate::input_system::InputState;
use crate::laser::{LASER_SPEED, Laser, MAX_PLAYER_LASERS};
use crate::ship::Ship;

/// Chance in thousandths that a single alien fires on a given frame.
const ALIEN_SHOOT_CHANCE: u32 = 2;

/// Aliens per spawn row.
const ALIENS_PER_ROW: u32 = 8;

/// Timing sample for one frame, taken once per loop iteration from the
/// monotonic microsecond clock.
#[derive(Debug, Clone, Copy)]
pub struct FrameTime {
    /// Microseconds since the game started.
    pub now_mus: i64,
    /// Microseconds elapsed since the previous frame.
    pub delta_mus: i64,
    /// `delta_mus` in seconds, for delta-scaled motion.
    pub delta: f32,
}

/// GameWorld owns all game entities and world state.
///
/// Transient entities (lasers, aliens, animations) each carry a unique id
/// minted by `next_id()`. During the update pass collisions and finished
/// animations only *mark* ids for removal; the marked entities stay in
/// their collections (and keep participating in the remaining checks of
/// the same frame) until `remove_by_ids` filters everything in one pass
/// at the end. The ship is not id-managed; it is never removed, only
/// flagged dead and respawned.
pub struct GameWorld {
    pub ship: Ship,
    pub lasers: Vec<Laser>,
    pub alien_lasers: Vec<Laser>,
    pub aliens: Vec<Alien>,
    pub animations: Vec<Animation>,
    pub formation: Formation,
    pub level: u32,
    pub lives: i32,
    /// Explosion animation parameters from the animations config.
    pub explosion: AnimationData,
    id_counter: u32,
}

impl GameWorld {
    /// A fresh game: level 1, three lives, the first wave already spawned.
    pub fn new(explosion: AnimationData) -> Self {
        let mut world = GameWorld {
            ship: Ship::new(),
            lasers: Vec::new(),
            alien_lasers: Vec::new(),
            aliens: Vec::new(),
            animations: Vec::new(),
            formation: Formation::new(),
            level: 1,
            lives: 3,
            explosion,
            id_counter: 0,
        };
        world.spawn_wave();
        world
    }

    /// Mint a fresh entity id. Ids are process-unique and never reused.
    pub fn next_id(&mut self) -> u32 {
        let id = self.id_counter;
        self.id_counter += 1;
        id
    }

    /// Spawn the wave for the current level: `level` rows of eight
    /// aliens, rows cycling through the three kinds.
    pub fn spawn_wave(&mut self) {
        for row in 0..self.level {
            for col in 0..ALIENS_PER_ROW {
                let id = self.next_id();
                self.aliens.push(Alien::new(
                    crate::PADDING + col as f32 * 16.0,
                    crate::PADDING + row as f32 * 16.0,
                    AlienKind::from_row(row),
                    id,
                ));
            }
        }
    }

    /// Advance the whole simulation by one frame.
    ///
    /// The order of the sub-steps is load-bearing: movement happens
    /// before collision checks, collisions and animation expiry only mark
    /// ids, and the batched removal runs before the level transition so
    /// an emptied wave is refilled within the same call.
    pub fn update(&mut self, input: &mut InputState, time: &FrameTime, rng: &mut impl Rng) {
        // Ship
        self.ship.update(input, time, self.lives);

        // Player firing. The press edge is consumed only when a laser
        // actually spawns; a press made at the cap stays pending.
        if input.shoot.press && self.lasers.len() < MAX_PLAYER_LASERS {
            let id = self.next_id();
            self.lasers.push(Laser::player_shot(self.ship.x, self.ship.y, id));
            input.shoot.press = false;
        }

        // Player lasers: drop the ones past the top, move the rest up
        self.lasers.retain(|laser| laser.y >= -10.0);
        for laser in &mut self.lasers {
            laser.y -= LASER_SPEED * time.delta;
        }

        // Formation: update the swarm state, then march every alien
        self.formation.update(&self.aliens);
        let (dx, dy) = self.formation.step();
        for alien in &mut self.aliens {
            alien.x += dx;
            alien.y += dy;
        }

        // Alien firing
        for i in 0..self.aliens.len() {
            if rng.gen_ratio(ALIEN_SHOOT_CHANCE, 1000) {
                let (x, y) = (self.aliens[i].x, self.aliens[i].y);
                let id = self.next_id();
                self.alien_lasers.push(Laser::alien_shot(x, y, id));
            }
        }

        // Alien lasers: drop the ones past the bottom, move the rest down
        self.alien_lasers.retain(|laser| laser.y <= SCREEN_HEIGHT);
        for laser in &mut self.alien_lasers {
            laser.y += LASER_SPEED * time.delta;
        }

        // Collisions. Checks run against this frame's snapshot: marked
        // entities are still compared until the removal pass below.
        // Explosion positions are collected first (immutable borrows),
        // the animations are spawned afterwards (mutable).
        let mut ids_to_remove: HashSet<u32> = HashSet::new();
        let mut explosions: Vec<(f32, f32)> = Vec::new();

        for laser in &self.lasers {
            let laser_box = laser.hitbox();

            for alien in &self.aliens {
                if overlaps(&laser_box, &alien.hitbox()) {
                    explosions.push((alien.x, alien.y));
                    ids_to_remove.insert(laser.id);
                    ids_to_remove.insert(alien.id);
                }
            }

            for shot in &self.alien_lasers {
                if overlaps(&laser_box, &shot.hitbox()) {
                    ids_to_remove.insert(laser.id);
                    ids_to_remove.insert(shot.id);
                }
            }
        }

        // The ship's box is captured once, before it can be teleported by
        // a hit earlier in the loop.
        let ship_box = self.ship.hitbox();
        for shot in &self.alien_lasers {
            if overlaps(&shot.hitbox(), &ship_box) {
                explosions.push((self.ship.x, self.ship.y));
                self.ship.destroy();
                self.lives -= 1;
            }
        }

        for (x, y) in explosions {
            let id = self.next_id();
            let animation = Animation::new(x, y, &self.explosion, time.now_mus, id);
            self.animations.push(animation);
        }

        // Animations: advance frames, mark the finished ones
        for animation in &mut self.animations {
            if animation.advance(time.now_mus) {
                ids_to_remove.insert(animation.id);
            }
        }

        // Remove everything that was marked this frame
        self.remove_by_ids(&ids_to_remove);

        // New level once the wave is cleared
        if self.aliens.is_empty() {
            self.level += 1;
            self.spawn_wave();
        }
    }

    /// Filter all four entity collections in one pass. Removing an id
    /// that is not present is a no-op.
    fn remove_by_ids(&mut self, ids: &HashSet<u32>) {
        if ids.is_empty() {
            return;
        }
        self.lasers.retain(|laser| !ids.contains(&laser.id));
        self.alien_lasers.retain(|laser| !ids.contains(&laser.id));
        self.aliens.retain(|alien| !ids.contains(&alien.id));
        self.animations.retain(|animation| !ids.contains(&animation.id));
    }
}
