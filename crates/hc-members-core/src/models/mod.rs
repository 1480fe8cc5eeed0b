//! Domain models for the member system.

mod member;
mod validate;

pub use member::*;
pub use validate::*;
