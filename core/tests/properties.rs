use std::time::Duration;

use chip8_core::constants::{FLAG, MAX_PROGRAM_SIZE, PROGRAM_START};
use chip8_core::{Chip8, Config, Display, FrameBuffer, Keypad, LoadError};
use proptest::prelude::*;
use rand::rngs::mock::StepRng;

fn boot(words: &[u16], config: Config) -> Chip8<FrameBuffer, Keypad, StepRng> {
    let rom: Vec<u8> = words.iter().flat_map(|word| word.to_be_bytes()).collect();
    let mut chip8 = Chip8::new(FrameBuffer::new(), Keypad::new(), StepRng::new(0, 1), config);
    chip8.load_rom(&rom).unwrap();
    chip8
}

fn run(words: &[u16]) -> Chip8<FrameBuffer, Keypad, StepRng> {
    let mut chip8 = boot(words, Config::default());
    for _ in words {
        chip8.step().unwrap();
    }
    chip8
}

proptest! {
    #[test]
    fn register_writes_wrap_at_256(x in 0u16..0xF, a in any::<u8>(), b in any::<u8>()) {
        let chip8 = run(&[0x6000 | x << 8 | u16::from(a), 0x7000 | x << 8 | u16::from(b)]);
        let expected = (u16::from(a) + u16::from(b)) % 256;
        prop_assert_eq!(u16::from(chip8.state().v[usize::from(x)]), expected);
    }

    #[test]
    fn add_registers_sets_carry(a in any::<u8>(), b in any::<u8>()) {
        let chip8 = run(&[0x6000 | u16::from(a), 0x6100 | u16::from(b), 0x8014]);
        let sum = u16::from(a) + u16::from(b);
        prop_assert_eq!(u16::from(chip8.state().v[0x0]), sum % 256);
        prop_assert_eq!(chip8.state().v[FLAG], u8::from(sum > 0xFF));
    }

    #[test]
    fn subtract_sets_not_borrow(a in any::<u8>(), b in any::<u8>()) {
        let chip8 = run(&[0x6000 | u16::from(a), 0x6100 | u16::from(b), 0x8015]);
        prop_assert_eq!(chip8.state().v[0x0], a.wrapping_sub(b));
        prop_assert_eq!(chip8.state().v[FLAG], u8::from(a >= b));
    }

    #[test]
    fn addresses_wrap_at_4096(i in 0u16..0x1000, v in any::<u8>()) {
        let chip8 = run(&[0xA000 | i, 0x6000 | u16::from(v), 0xF01E]);
        prop_assert_eq!(chip8.state().i, (i + u16::from(v)) % 0x1000);
    }

    #[test]
    fn load_places_every_byte(rom in proptest::collection::vec(any::<u8>(), 0..=MAX_PROGRAM_SIZE)) {
        let mut chip8 = boot(&[], Config::default());
        chip8.load_rom(&rom).unwrap();
        for (k, byte) in rom.iter().enumerate() {
            prop_assert_eq!(chip8.state().memory.read(PROGRAM_START + k as u16), *byte);
        }
    }

    #[test]
    fn oversized_load_leaves_program_region_empty(extra in 1usize..64) {
        let mut chip8 = boot(&[0x1234, 0x5678], Config::default());
        let result = chip8.load_rom(&vec![0xEE; MAX_PROGRAM_SIZE + extra]);
        let too_large = matches!(result, Err(LoadError::TooLarge { .. }));
        prop_assert!(too_large);
        prop_assert!(chip8.state().memory.program().iter().all(|&byte| byte == 0));
    }

    #[test]
    fn drawing_twice_restores_the_frame(
        background in proptest::collection::vec(any::<u8>(), 8),
        x in any::<u8>(),
        y in any::<u8>(),
        sprite in proptest::collection::vec(any::<u8>(), 1..=15),
    ) {
        let mut frame = FrameBuffer::new();
        frame.draw(3, 7, &background);
        let before = frame.clone();

        frame.draw(x, y, &sprite);
        let erased = frame.draw(x, y, &sprite);

        // the second draw erases whatever the first one turned on
        let turned_on = sprite.iter().enumerate().any(|(row, &bits)| {
            (0..8).any(|column| {
                bits >> (7 - column) & 1 == 1
                    && !before.pixel(usize::from(x) + column, usize::from(y) + row)
            })
        });
        prop_assert_eq!(&frame, &before);
        prop_assert_eq!(erased, turned_on);
    }

    #[test]
    fn timers_decrement_once_per_period(ticks in 1u64..20) {
        let config = Config::new(Duration::from_millis(1), Duration::from_millis(ticks)).unwrap();
        // DT = 0x20, then spin on a jump to self
        let mut chip8 = boot(&[0x6020, 0xF015, 0x1204], config);
        chip8.step().unwrap();
        chip8.step().unwrap();
        let delay = chip8.state().delay_timer;
        chip8.display_mut().set_render_due(false);

        let mut frames = 0;
        for _ in 0..ticks {
            chip8.step().unwrap();
            if chip8.display().render_due() {
                frames += 1;
                chip8.display_mut().set_render_due(false);
            }
        }
        prop_assert_eq!(frames, 1);
        prop_assert_eq!(chip8.state().delay_timer, delay - 1);
    }
}
