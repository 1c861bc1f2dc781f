//! Engine-agnostic building blocks shared by the simulation and presentation
//! crates: box geometry, logical input and the frame clock.

pub mod geometry;
pub mod input;
pub mod time;
