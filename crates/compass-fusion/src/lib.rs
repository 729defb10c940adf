//! # compass-fusion
//!
//! Turns vector matches and graph facts into a bounded `FusedContext` and
//! renders it into the two-message prompt the generator sends. Pure: no I/O,
//! no logging, same input gives the same output.

pub mod fuser;
pub mod render;

pub use fuser::ContextFuser;
