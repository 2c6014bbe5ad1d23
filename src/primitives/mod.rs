//! Leaf building blocks of the notation model: rational arithmetic, note
//! values, durations and pitches.

pub mod duration;
pub mod pitch;
pub mod rational;
pub mod value;

pub use duration::Duration;
pub use pitch::{Octave, Pitch, PitchClass};
pub use rational::{Integer, Rational};
pub use value::Value;
