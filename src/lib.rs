//!
//! Library for smoothing strokes captured from a pointer device
//!
//! Pointer input arrives as a jittery sequence of sampled positions. This library turns
//! such a sequence into a denser, visually smooth path by interpolating along a uniform
//! Catmull-Rom spline, without ever moving the points that were actually captured.
//!
#![warn(bare_trait_objects)]

#[macro_use]
extern crate serde_derive;
extern crate serde;
extern crate itertools;
extern crate log;
extern crate thiserror;

pub mod stroke;

pub mod coordinate;
pub use self::coordinate::*;

pub mod consts;
pub use self::consts::*;

pub use self::stroke::Stroke;
pub use self::stroke::smooth_path;
