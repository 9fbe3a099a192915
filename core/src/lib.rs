pub use chip8::Chip8;
pub use config::Config;
pub use display::{Display, FrameBuffer};
pub use error::{ConfigError, Fault, LoadError};
pub use input::{Input, Keypad};
pub use instruction::Instruction;
pub use opcode::Opcode;

mod chip8;
mod config;
pub mod constants;
mod display;
mod error;
mod input;
mod instruction;
pub mod memory;
mod opcode;
mod operations;
pub mod state;
