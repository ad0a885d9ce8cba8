//! Demonstration case groups
//!
//! Each case is a plain `fn(&Transcript) -> Result<(), Failure>`; the
//! catalog decides their order.

pub mod basics;
pub mod closures;
pub mod collections;
pub mod contracts;
pub mod control_flow;
pub mod entities;
pub mod errors;
pub mod functions;
pub mod optionals;
pub mod values;

pub use errors::Failure;
