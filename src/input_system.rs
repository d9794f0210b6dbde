use sdl2::EventPump;
use sdl2::event::Event;
use sdl2::keyboard::Keycode;

/// One logical action's key state.
///
/// `hold` mirrors whether any bound key is currently down. `press` is
/// edge-triggered: it becomes true only on the frame the key goes from up
/// to down, and is cleared on key-up or when the firing logic consumes
/// it. OS key-repeat events see `hold` already set and therefore never
/// re-arm `press`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ActionState {
    pub hold: bool,
    pub press: bool,
}

/// Key state for the game's logical actions.
///
/// Movement and firing are read by the simulation every frame; the debug
/// action is bound but currently does nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputState {
    pub left: ActionState,
    pub right: ActionState,
    pub shoot: ActionState,
    #[allow(dead_code)] // Bound to Z, kept as a hook for debug tooling
    pub debug: ActionState,
}

/// InputSystem translates SDL2 key events into the `InputState` flags the
/// simulation reads.
///
/// Left/right each accept a letter key or an arrow key. The system only
/// tracks state; deciding what the state means (movement direction, fire
/// rate limiting) is the simulation's job.
pub struct InputSystem {
    pub input: InputState,
}

impl InputSystem {
    pub fn new() -> Self {
        InputSystem {
            input: InputState::default(),
        }
    }

    /// Drain pending SDL2 events into the input state.
    ///
    /// Returns true when the window-close signal was observed, which is
    /// the game's only shutdown path.
    pub fn poll_events(&mut self, event_pump: &mut EventPump) -> bool {
        for event in event_pump.poll_iter() {
            match event {
                Event::Quit { .. } => return true,
                Event::KeyDown {
                    keycode: Some(key), ..
                } => self.key_down(key),
                Event::KeyUp {
                    keycode: Some(key), ..
                } => self.key_up(key),
                _ => {
                    // Ignore other event types
                }
            }
        }
        false
    }

    fn key_down(&mut self, key: Keycode) {
        match key {
            Keycode::A | Keycode::Left => self.input.left.hold = true,
            Keycode::D | Keycode::Right => self.input.right.hold = true,
            Keycode::Space => {
                self.input.shoot.press = !self.input.shoot.hold;
                self.input.shoot.hold = true;
            }
            Keycode::Z => {
                self.input.debug.press = !self.input.debug.hold;
                self.input.debug.hold = true;
            }
            _ => {
                // Unbound key
            }
        }
    }

    fn key_up(&mut self, key: Keycode) {
        match key {
            Keycode::A | Keycode::Left => self.input.left.hold = false,
            Keycode::D | Keycode::Right => self.input.right.hold = false,
            Keycode::Space => {
                self.input.shoot.hold = false;
                self.input.shoot.press = false;
            }
            Keycode::Z => {
                self.input.debug.hold = false;
                self.input.debug.press = false;
            }
            _ => {}
        }
    }
}

impl Default for InputSystem {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shoot_press_is_edge_triggered() {
        let mut system = InputSystem::new();

        system.key_down(Keycode::Space);
        assert!(system.input.shoot.hold);
        assert!(system.input.shoot.press);

        // A repeat key-down while held must not re-arm the press edge
        system.input.shoot.press = false; // consumed by firing
        system.key_down(Keycode::Space);
        assert!(system.input.shoot.hold);
        assert!(!system.input.shoot.press);
    }

    #[test]
    fn test_shoot_release_clears_both_flags() {
        let mut system = InputSystem::new();

        system.key_down(Keycode::Space);
        system.key_up(Keycode::Space);

        assert!(!system.input.shoot.hold);
        assert!(!system.input.shoot.press);

        // A fresh press after release arms the edge again
        system.key_down(Keycode::Space);
        assert!(system.input.shoot.press);
    }

    #[test]
    fn test_movement_accepts_both_bindings() {
        let mut system = InputSystem::new();

        system.key_down(Keycode::A);
        assert!(system.input.left.hold);
        system.key_up(Keycode::A);
        assert!(!system.input.left.hold);

        system.key_down(Keycode::Left);
        assert!(system.input.left.hold);

        system.key_down(Keycode::Right);
        system.key_down(Keycode::D);
        assert!(system.input.right.hold);
    }
}
