//! Convert images into RGB565 hex literals for display firmware.
//!
//! Every pixel is truncated to a 5-6-5 word and written as `0x....,` text,
//! 32 values per line, ready to paste into an array initializer.

pub mod convert;
pub mod hex_dump;
pub mod rgb565;

pub use convert::{convert_file, output_path, run, ConvertError};
pub use hex_dump::{write_hex_dump, WRAP_COLUMNS};
pub use rgb565::{pack, pack_image, unpack_image, Rgb565Pixel};
