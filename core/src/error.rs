use std::io;

use thiserror::Error;

/// Failure to place a ROM in memory.
///
/// The machine is reset before the ROM is copied, so after a `LoadError` it is
/// still in a valid (empty) state.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("ROM is too large ({size} bytes), max size is {max} bytes")]
    TooLarge { size: usize, max: usize },

    #[error("unable to read ROM")]
    Io(#[from] io::Error),
}

/// A condition the instruction stream can reach that has no defined outcome.
///
/// The faulting instruction has no effect and the program counter is left
/// pointing at it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Fault {
    #[error("stack overflow: call at {pc:#05X} with every stack slot in use")]
    StackOverflow { pc: u16 },

    #[error("stack underflow: return at {pc:#05X} with an empty stack")]
    StackUnderflow { pc: u16 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("the cycle period must be longer than zero")]
    ZeroCyclePeriod,

    #[error("the timer period must not be shorter than the cycle period")]
    TimerFasterThanCycle,
}
