#![warn(missing_debug_implementations, rust_2018_idioms)]

//! Decode ATM link-layer traffic: cell headers, AAL1, AAL3/4 and OAM cells,
//! reassembled AAL5 PDUs and LAN Emulation control frames.

#[macro_use]
extern crate quick_error;

#[macro_use]
mod macros;

mod error;
pub use error::Error;

mod cursors;
pub use cursors::Cursor;

pub mod bits;
pub mod tree;

pub mod aal;
pub mod aal5;
pub mod cell;
pub mod lane;
pub mod pseudo;

pub mod dissector;

mod decoder;
pub use decoder::{AtmDecoder, AtmDissection, AtmFrame};
