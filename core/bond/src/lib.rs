#![deny(clippy::pedantic)]
#![no_std]

//! Bounded `f64` newtypes that carry the domain preconditions of the
//! elementary functions in their type.

mod non_negative_f64;
mod positive_f64;

pub use non_negative_f64::{NonNegativeF64, NonNegativeF64Error};
pub use positive_f64::{PositiveF64, PositiveF64Error};
