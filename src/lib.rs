#![doc = include_str!("../README.md")]

mod error;
mod evenness;
pub mod lux;
mod magic;
pub mod mask;
pub mod siamese;
mod square;
mod symmetry;
mod verify;
#[cfg(feature = "wasm")]
mod wasm;

pub use error::{MagicError, Result};
pub use evenness::{Evenness, half_width, required_sum};
pub use lux::{Lux, LuxTemplate};
pub use magic::{MagicSquare, construct, construct_with};
pub use square::{PartialSquare, Square};
pub use symmetry::{Symmetry, random_variant};
pub use verify::{VerificationReport, verify, verify_rows};
