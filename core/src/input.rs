/// # Input
/// What the CPU needs from the hexadecimal keypad.
pub trait Input {
    /// Whether `key` (0x0..=0xF) is currently held down.
    fn is_down(&self, key: u8) -> bool;

    /// Whether any key went down since the last call, resetting that state.
    fn consume_pressed(&mut self) -> bool;
}

/// # Keypad
/// The 16 key Chip-8 keypad, driven by whatever reads the physical keyboard.
///
/// ```text
/// |1|2|3|C|
/// |4|5|6|D|
/// |7|8|9|E|
/// |A|0|B|F|
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Keypad {
    keys: [bool; 16],
    pressed: bool,
}

impl Keypad {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the pressed status of key
    ///
    /// # Arguments
    /// * `key` the 4-bit representation of the key that was pressed
    /// Only a key going from up to down counts as a press; repeats of a held
    /// key don't.
    pub fn key_press(&mut self, key: u8) {
        let down = &mut self.keys[usize::from(key & 0xF)];
        if !*down {
            *down = true;
            self.pressed = true;
        }
    }

    /// Unset the pressed status of key
    ///
    /// # Arguments
    /// * `key` the 4-bit representation of the key that was released
    pub fn key_release(&mut self, key: u8) {
        self.keys[usize::from(key & 0xF)] = false;
    }

}

impl Input for Keypad {
    fn is_down(&self, key: u8) -> bool {
        self.keys[usize::from(key & 0xF)]
    }

    fn consume_pressed(&mut self) -> bool {
        std::mem::take(&mut self.pressed)
    }
}
