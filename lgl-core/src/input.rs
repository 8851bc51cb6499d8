use std::collections::HashSet;
use std::hash::Hash;

/// The current state of the keyboard.
///
/// `pressed` and `released` only hold keys that changed during the current
/// frame; call [`KeyboardState::begin_frame`] before feeding new events.
#[derive(Debug, Clone)]
pub struct KeyboardState<K> {
    pub down: HashSet<K>,
    pub pressed: HashSet<K>,
    pub released: HashSet<K>,
}

impl<K: Eq + Hash + Copy> KeyboardState<K> {
    pub fn begin_frame(&mut self) {
        self.pressed.clear();
        self.released.clear();
    }

    /// Records a key going down. Repeats of an already held key are ignored.
    pub fn key_down(&mut self, key: K) {
        if self.down.insert(key) {
            self.pressed.insert(key);
        }
    }

    pub fn key_up(&mut self, key: K) {
        if self.down.remove(&key) {
            self.released.insert(key);
        }
    }

    pub fn is_down(&self, key: K) -> bool {
        self.down.contains(&key)
    }

    pub fn was_pressed(&self, key: K) -> bool {
        self.pressed.contains(&key)
    }
}

impl<K> Default for KeyboardState<K> {
    fn default() -> Self {
        Self {
            down: HashSet::new(),
            pressed: HashSet::new(),
            released: HashSet::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_hold_release() {
        let mut keys = KeyboardState::default();
        keys.key_down('a');
        assert!(keys.is_down('a'));
        assert!(keys.was_pressed('a'));

        keys.begin_frame();
        keys.key_down('a');
        assert!(keys.is_down('a'));
        assert!(!keys.was_pressed('a'));

        keys.key_up('a');
        assert!(!keys.is_down('a'));
        assert!(keys.released.contains(&'a'));

        keys.begin_frame();
        assert!(keys.released.is_empty());
    }

    #[test]
    fn release_without_press_is_ignored() {
        let mut keys: KeyboardState<u8> = KeyboardState::default();
        keys.key_up(7);
        assert!(keys.released.is_empty());
    }
}
