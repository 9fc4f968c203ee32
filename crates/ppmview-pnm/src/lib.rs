//! Raw-binary PPM (P6) decoding.
//!
//! Only 8-bit channels (`maxval == 255`) are accepted. The decoded [`Image`]
//! holds tightly packed RGB8 rows, top row first.

mod decoder;
mod error;
mod image;

pub use decoder::decode;
pub use error::{DecodeError, FormatError};
pub use image::{rgb_to_rgba, Image};
