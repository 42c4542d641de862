//!
//! # Strokes captured from a pointer device
//!
//! A `Stroke` accumulates the positions a pointer reports while a gesture is in
//! progress, exactly as they arrive. `smooth_path` generates the denser Catmull-Rom
//! interpolated sequence that presents the gesture as a continuous curve, always as a
//! new sequence so the raw capture stays available for undo or for smoothing again
//! with different settings.
//!

mod stroke;
mod smooth;
mod catmull_rom;

pub use self::stroke::*;
pub use self::smooth::*;
pub use self::catmull_rom::*;
