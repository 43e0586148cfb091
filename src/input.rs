//! Keyboard state to semantic tick input
//!
//! Hosts report key presses and releases as they arrive; the driver takes
//! one `TickInput` snapshot per simulation tick. Held keys (movement, jump)
//! are level-triggered. Pause and start are edge-triggered one-shots that
//! stay latched until a tick consumes them.

use std::collections::HashSet;

use crate::sim::TickInput;

/// Keys the game understands. Anything else never reaches the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    A,
    D,
    W,
    Left,
    Right,
    Up,
    Space,
    Enter,
    Escape,
}

impl Key {
    /// Map a DOM-style key code (`"KeyA"`, `"ArrowLeft"`, ...) to a key.
    /// Unknown codes map to `None` and are ignored.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "KeyA" => Some(Key::A),
            "KeyD" => Some(Key::D),
            "KeyW" => Some(Key::W),
            "ArrowLeft" => Some(Key::Left),
            "ArrowRight" => Some(Key::Right),
            "ArrowUp" => Some(Key::Up),
            "Space" => Some(Key::Space),
            "Enter" | "NumpadEnter" => Some(Key::Enter),
            "Escape" => Some(Key::Escape),
            _ => None,
        }
    }
}

/// Live keyboard state
#[derive(Debug, Clone, Default)]
pub struct KeyboardState {
    held: HashSet<Key>,
    pause_pressed: bool,
    start_pressed: bool,
    /// Jump ignored until every jump key has been released
    jump_suppressed: bool,
}

impl KeyboardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_down(&mut self, key: Key) {
        // Auto-repeat arrives as repeated presses; only the first counts
        if !self.held.insert(key) {
            return;
        }
        match key {
            Key::Escape => self.pause_pressed = true,
            Key::Space | Key::Enter => self.start_pressed = true,
            _ => {}
        }
    }

    pub fn key_up(&mut self, key: Key) {
        self.held.remove(&key);
        if !self.jump_held() {
            self.jump_suppressed = false;
        }
    }

    fn jump_held(&self) -> bool {
        self.is_held(Key::W) || self.is_held(Key::Up) || self.is_held(Key::Space)
    }

    /// Ignore jump keys that are down right now until they are released.
    /// Space doubles as start, so the press that leaves a menu must not
    /// also launch the player.
    pub fn suppress_held_jump(&mut self) {
        self.jump_suppressed = self.jump_held();
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held.contains(&key)
    }

    /// Release everything, e.g. when the window loses focus
    pub fn release_all(&mut self) {
        self.held.clear();
        self.jump_suppressed = false;
    }

    /// Request a pause toggle without a key press (focus loss)
    pub fn request_pause(&mut self) {
        self.pause_pressed = true;
    }

    /// Input for the next tick. One-shots remain latched until
    /// `clear_one_shots` is called.
    pub fn snapshot(&self) -> TickInput {
        TickInput {
            left: self.is_held(Key::A) || self.is_held(Key::Left),
            right: self.is_held(Key::D) || self.is_held(Key::Right),
            jump: self.jump_held() && !self.jump_suppressed,
            pause: self.pause_pressed,
            start: self.start_pressed,
        }
    }

    /// Forget one-shot presses after a tick has consumed them
    pub fn clear_one_shots(&mut self) {
        self.pause_pressed = false;
        self.start_pressed = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bindings() {
        let mut keys = KeyboardState::new();
        assert_eq!(keys.snapshot(), TickInput::default());

        keys.key_down(Key::Left);
        keys.key_down(Key::W);
        let input = keys.snapshot();
        assert!(input.left);
        assert!(!input.right);
        assert!(input.jump);

        keys.key_up(Key::Left);
        keys.key_down(Key::D);
        assert!(keys.snapshot().right);
        assert!(!keys.snapshot().left);
    }

    #[test]
    fn test_one_shots_latch_until_cleared() {
        let mut keys = KeyboardState::new();
        keys.key_down(Key::Escape);
        keys.key_up(Key::Escape);
        assert!(keys.snapshot().pause);
        assert!(keys.snapshot().pause);
        keys.clear_one_shots();
        assert!(!keys.snapshot().pause);
    }

    #[test]
    fn test_auto_repeat_does_not_retrigger() {
        let mut keys = KeyboardState::new();
        keys.key_down(Key::Space);
        keys.clear_one_shots();
        keys.key_down(Key::Space);
        let input = keys.snapshot();
        assert!(!input.start);
        assert!(input.jump);
    }

    #[test]
    fn test_suppressed_jump_waits_for_release() {
        let mut keys = KeyboardState::new();
        keys.key_down(Key::Space);
        keys.suppress_held_jump();
        assert!(!keys.snapshot().jump);

        // Another jump key going up is not enough while Space is down
        keys.key_down(Key::W);
        keys.key_up(Key::W);
        assert!(!keys.snapshot().jump);

        keys.key_up(Key::Space);
        keys.key_down(Key::Space);
        assert!(keys.snapshot().jump);

        // Nothing held means nothing to suppress
        let mut keys = KeyboardState::new();
        keys.suppress_held_jump();
        keys.key_down(Key::Up);
        assert!(keys.snapshot().jump);
    }

    #[test]
    fn test_unknown_codes_are_inert() {
        assert_eq!(Key::from_code("KeyQ"), None);
        assert_eq!(Key::from_code(""), None);
        assert_eq!(Key::from_code("ArrowUp"), Some(Key::Up));
    }

    #[test]
    fn test_release_all() {
        let mut keys = KeyboardState::new();
        keys.key_down(Key::Right);
        keys.release_all();
        assert!(!keys.snapshot().right);
    }
}
