pub use display::{frame_to_rgb24, Screen};

mod display;
