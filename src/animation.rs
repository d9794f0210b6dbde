use serde::{Deserialize, Serialize};

/// Animation parameters loaded from `assets/config/animations.json`.
///
/// Keeping frame counts and durations in config means sprite-sheet tweaks
/// don't require touching game logic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimationConfig {
    pub explosion: AnimationData,
}

/// One animation's shape on the sprite sheet: its first tile, how many
/// frames follow it on the same row, and how long each frame holds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimationData {
    pub sprite_start: (i32, i32),
    pub frames: i32,
    pub mus_per_frame: i64,
}

impl AnimationConfig {
    pub fn load_from_file(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let config: AnimationConfig = serde_json::from_str(&content)?;
        Ok(config)
    }
}

/// A one-shot animation playing at a fixed position (explosions).
///
/// Frames advance on the simulation's microsecond clock rather than a
/// wall-clock `Instant`, so the whole game shares one time source. The
/// animation plays every frame exactly once and then reports itself
/// finished; it never loops and cannot be restarted.
#[derive(Debug, Clone)]
pub struct Animation {
    pub x: f32,
    pub y: f32,
    pub sprite_start: (i32, i32),
    pub current_frame: i32,
    pub frames: i32,
    pub mus_per_frame: i64,
    /// Timestamp at which the current frame started showing.
    pub mus_start: i64,
    pub id: u32,
}

impl Animation {
    pub fn new(x: f32, y: f32, data: &AnimationData, now_mus: i64, id: u32) -> Self {
        Animation {
            x,
            y,
            sprite_start: data.sprite_start,
            current_frame: 0,
            frames: data.frames,
            mus_per_frame: data.mus_per_frame,
            mus_start: now_mus,
            id,
        }
    }

    /// Advance the animation if the current frame's time is up.
    ///
    /// Returns true once the last frame has played; the caller is then
    /// expected to mark the animation for removal.
    pub fn advance(&mut self, now_mus: i64) -> bool {
        if now_mus - self.mus_start > self.mus_per_frame {
            self.current_frame += 1;
            if self.current_frame < self.frames {
                self.mus_start = now_mus;
            } else {
                return true;
            }
        }
        false
    }

    /// Tile to draw this frame; frames sit side by side on one sheet row.
    pub fn current_tile(&self) -> (i32, i32) {
        (self.sprite_start.0 + self.current_frame, self.sprite_start.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn explosion() -> AnimationData {
        AnimationData {
            sprite_start: (0, 3),
            frames: 4,
            mus_per_frame: 100_000,
        }
    }

    #[test]
    fn test_frame_holds_until_duration_elapsed() {
        let mut animation = Animation::new(0.0, 0.0, &explosion(), 0, 1);

        // Exactly at the duration is not yet an advance
        assert!(!animation.advance(100_000));
        assert_eq!(animation.current_frame, 0);

        assert!(!animation.advance(100_001));
        assert_eq!(animation.current_frame, 1);
        assert_eq!(animation.current_tile(), (1, 3));
    }

    #[test]
    fn test_finishes_after_all_frames() {
        let mut animation = Animation::new(0.0, 0.0, &explosion(), 0, 1);

        // Each step lands just past the per-frame duration
        assert!(!animation.advance(100_001));
        assert!(!animation.advance(200_002));
        assert!(!animation.advance(300_003));
        assert!(animation.advance(400_004));
        assert_eq!(animation.current_frame, 4);
    }

    #[test]
    fn test_config_round_trip() {
        let json = r#"{
            "explosion": {
                "sprite_start": [0, 3],
                "frames": 4,
                "mus_per_frame": 100000
            }
        }"#;
        let config: AnimationConfig = serde_json::from_str(json).unwrap();

        assert_eq!(config.explosion.sprite_start, (0, 3));
        assert_eq!(config.explosion.frames, 4);
        assert_eq!(config.explosion.mus_per_frame, 100_000);
    }
}
