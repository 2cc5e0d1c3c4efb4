#![forbid(unsafe_code)]

//! Module for 8-bit indexed Windows Bitmap files (BMP).
//!
//! ## The Format
//!
//! Note: All multi-byte values in BMP are always little-endian encoded.
//!
//! * A bitmap file always starts with a "file header". This is always 14 bytes.
//!   * The `BM` tag.
//!   * A total size of the file.
//!   * The position of the pixel data within the file.
//! * Next is an "info header". There's many versions of this header, but the
//!   only one handled here is the 40 byte `BITMAPINFOHEADER`. It has the image
//!   dimensions, the bit depth (must be 8), the compression (must be none), and
//!   the number of palette entries (where 0 means `2**8`).
//! * Next is the color table. Each entry is a `[u8; 4]` value, `[b, g, r, 0]`.
//! * Next is the pixel array. Each row is `width` palette indexes followed by
//!   enough padding bytes to make the row a multiple of 4 bytes long.
//!
//! The file size and pixel offset fields of the file header are never trusted
//! when reading: the pixel data is always taken to follow the palette
//! directly. Rows are kept in the order they're stored, there's no flipping.
//!
//! When writing, the full 256 entry palette is always written and every size
//! field is computed fresh from the image dimensions.

mod decode;
mod encode;
mod headers;

pub use decode::*;
pub use encode::*;
pub use headers::*;

/// Rounds `x` up to the nearest multiple of `n`.
///
/// ## Panics
/// * If `n` is 0.
#[inline]
#[must_use]
pub const fn round_up(x: u64, n: u64) -> u64 {
  match x % n {
    0 => x,
    r => x + (n - r),
  }
}

/// Bytes per row of pixel data (including padding) for an 8-bit image.
#[inline]
#[must_use]
pub const fn row_stride(width: u32) -> u64 {
  round_up(width as u64, 4)
}

#[test]
fn test_row_stride() {
  for w in 0..=1025_u32 {
    let s = row_stride(w);
    let w = u64::from(w);
    assert!(s >= w, "w: {w}");
    assert!(s < w + 4, "w: {w}");
    assert_eq!(s % 4, 0, "w: {w}");
  }
  assert_eq!(row_stride(u32::MAX), 1 << 32);
  assert_eq!(round_up(10, 3), 12);
  assert_eq!(round_up(12, 3), 12);
}
