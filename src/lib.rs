#![warn(missing_docs)]

//! Color vision deficiency simulation for 8-bit indexed BMP images.
//!
//! Because every pixel of an indexed image is just a reference into the
//! palette, simulating how a dichromat sees the image only needs the 256
//! palette colors to be transformed. The pixel data passes through untouched.
//!
//! ```
//! use cvd_bmp::{bmp, cvd, Bitmap};
//!
//! let mut bitmap = Bitmap::new(2, 2).unwrap();
//! bitmap.palette[1] = cvd_bmp::r8g8b8_Srgb { r: 255, g: 0, b: 0 };
//! bitmap[(1, 0)] = 1;
//!
//! let bytes = bmp::encode_to_vec(&bitmap).unwrap();
//! let mut decoded = bmp::decode_bytes(&bytes).unwrap();
//! cvd::simulate_cvd(&mut decoded);
//! assert_eq!(decoded.color_at(1, 0), Some(cvd_bmp::r8g8b8_Srgb { r: 109, g: 72, b: 0 }));
//! ```

pub use pixel_formats::r8g8b8_Srgb;

pub mod ascii_array;
pub use ascii_array::*;

mod error;
pub use error::*;

pub mod stream;

pub mod image;
pub use image::{Bitmap, PALETTE_CAPACITY};

pub mod bmp;

pub mod cvd;

/// Decodes a BMP from `src`, simulates color vision deficiency on its palette,
/// and encodes the result to `sink`.
///
/// The output is fully encoded in memory first, so nothing reaches `sink`
/// unless decoding and encoding both succeeded.
pub fn simulate_bmp<R, W>(src: &mut R, sink: &mut W) -> BmpResult<()>
where
  R: stream::ByteSource + ?Sized,
  W: std::io::Write + ?Sized,
{
  let mut bitmap = bmp::decode(src)?;
  cvd::simulate_cvd(&mut bitmap);
  let bytes = bmp::encode_to_vec(&bitmap)?;
  sink.write_all(&bytes).map_err(|e| BmpError::WriteFailure(e.kind()))
}
