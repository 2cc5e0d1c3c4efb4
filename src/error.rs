use std::{collections::TryReserveError, io::ErrorKind};

/// An error from the `cvd_bmp` crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BmpError {
  /// The byte source ran out before a complete value could be read.
  #[error("unexpected end of input")]
  UnexpectedEndOfInput,

  /// The byte sink refused to take a byte.
  #[error("unable to write output: {0}")]
  WriteFailure(ErrorKind),

  /// The data isn't a BMP this crate can process.
  #[error("invalid BMP file: {0}")]
  InvalidFormat(FormatProblem),

  /// The allocator couldn't give us enough space for the pixel grid.
  #[error("memory allocation failed")]
  AllocationFailure,
}
impl From<TryReserveError> for BmpError {
  #[inline]
  fn from(_: TryReserveError) -> Self {
    Self::AllocationFailure
  }
}
impl From<FormatProblem> for BmpError {
  #[inline]
  fn from(p: FormatProblem) -> Self {
    Self::InvalidFormat(p)
  }
}

/// Which check made a file fail to parse as an 8-bit indexed BMP.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FormatProblem {
  /// The first two bytes weren't `BM`.
  #[error("signature is {0:?}, expected \"BM\"")]
  Signature([u8; 2]),

  /// Only the 40 byte `BITMAPINFOHEADER` is supported.
  #[error("info header is {0} bytes, expected 40")]
  InfoHeaderSize(u32),

  /// Only 8 bits per pixel is supported.
  #[error("{0} bits per pixel, expected 8")]
  BitsPerPixel(u16),

  /// Only uncompressed pixel data is supported.
  #[error("compression method {0}, expected 0 (uncompressed)")]
  Compression(u32),

  /// More colors than an 8-bit palette can hold.
  #[error("{0} palette colors declared, at most 256 allowed")]
  PaletteTooLong(u32),

  /// The image is too large for the size fields of a BMP file.
  #[error("a {0}x{1} image doesn't fit the BMP size fields")]
  DimensionsTooLarge(u32, u32),
}

/// Shorthand for results with a [`BmpError`].
pub type BmpResult<T> = Result<T, BmpError>;
