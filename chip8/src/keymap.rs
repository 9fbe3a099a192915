use clap::ValueEnum;
use sdl2::keyboard::Keycode;

/// # Keymap
/// Chip-8 input is generated with a hexadecimal keypad.
///
/// Both layouts use the left 4 alphanumeric columns of the keyboard.
/// `Cosmac` keeps the shape of the COSMAC VIP keypad:
/// ```text
/// |1|2|3|C|      |1|2|3|4|
/// |4|5|6|D|  ->  |Q|W|E|R|
/// |7|8|9|E|  ->  |A|S|D|F|
/// |A|0|B|F|      |Z|X|C|V|
/// ```
/// `Sequential` reads the same keys in order as 0x0..=0xF.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Layout {
    #[default]
    Cosmac,
    Sequential,
}

const KEYS: [Keycode; 16] = [
    Keycode::Num1,
    Keycode::Num2,
    Keycode::Num3,
    Keycode::Num4,
    Keycode::Q,
    Keycode::W,
    Keycode::E,
    Keycode::R,
    Keycode::A,
    Keycode::S,
    Keycode::D,
    Keycode::F,
    Keycode::Z,
    Keycode::X,
    Keycode::C,
    Keycode::V,
];

#[rustfmt::skip]
const COSMAC: [u8; 16] = [
    0x1, 0x2, 0x3, 0xC,
    0x4, 0x5, 0x6, 0xD,
    0x7, 0x8, 0x9, 0xE,
    0xA, 0x0, 0xB, 0xF,
];

impl Layout {
    /// The hex key bound to a physical key, if any.
    pub fn keymap(self, key: Keycode) -> Option<u8> {
        let position = KEYS.iter().position(|&k| k == key)?;
        match self {
            Layout::Cosmac => Some(COSMAC[position]),
            Layout::Sequential => Some(position as u8),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cosmac_layout() {
        assert_eq!(Layout::Cosmac.keymap(Keycode::X), Some(0x0));
        assert_eq!(Layout::Cosmac.keymap(Keycode::Num4), Some(0xC));
        assert_eq!(Layout::Cosmac.keymap(Keycode::A), Some(0x7));
        assert_eq!(Layout::Cosmac.keymap(Keycode::V), Some(0xF));
    }

    #[test]
    fn test_sequential_layout() {
        assert_eq!(Layout::Sequential.keymap(Keycode::Num1), Some(0x0));
        assert_eq!(Layout::Sequential.keymap(Keycode::Q), Some(0x4));
        assert_eq!(Layout::Sequential.keymap(Keycode::X), Some(0xD));
        assert_eq!(Layout::Sequential.keymap(Keycode::V), Some(0xF));
    }

    #[test]
    fn test_layouts_cover_every_key_once() {
        for layout in [Layout::Cosmac, Layout::Sequential] {
            let mut seen: Vec<u8> = KEYS.iter().filter_map(|&k| layout.keymap(k)).collect();
            seen.sort_unstable();
            assert_eq!(seen, (0x0..=0xF).collect::<Vec<u8>>());
        }
    }

    #[test]
    fn test_unmapped_keys() {
        assert_eq!(Layout::Cosmac.keymap(Keycode::Space), None);
        assert_eq!(Layout::Sequential.keymap(Keycode::Escape), None);
    }
}
