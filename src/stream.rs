#![forbid(unsafe_code)]

//! Little-endian integer reads and writes over byte streams.
//!
//! Wider values are always built out of narrower ones: a `u16` is two `u8`
//! values (low byte first) and a `u32` is two `u16` values (low word first).
//! Nothing is buffered here and nothing seeks, so whatever buffering you want
//! should be in the stream you pass in (eg: a `BufReader`).
//!
//! Any [`Read`] type is a [`ByteSource`] and any [`Write`] type is a
//! [`ByteSink`], including `&[u8]` and `Vec<u8>`.
//!
//! ```
//! use cvd_bmp::stream::{ByteSink, ByteSource};
//!
//! let mut out = Vec::new();
//! out.write_u32(0x0403_0201).unwrap();
//! assert_eq!(out, [1, 2, 3, 4]);
//!
//! let mut src: &[u8] = &out;
//! assert_eq!(src.read_u16().unwrap(), 0x0201);
//! assert_eq!(src.read_u16().unwrap(), 0x0403);
//! ```

use crate::error::{BmpError, BmpResult};
use std::io::{Read, Write};

/// Something that bytes can be pulled out of.
pub trait ByteSource {
  /// Reads one byte.
  ///
  /// ## Failure
  /// * [`BmpError::UnexpectedEndOfInput`] if no byte is available.
  fn read_u8(&mut self) -> BmpResult<u8>;

  /// Reads a little-endian `u16`.
  #[inline]
  fn read_u16(&mut self) -> BmpResult<u16> {
    let lo = self.read_u8()?;
    let hi = self.read_u8()?;
    Ok(u16::from(hi) << 8 | u16::from(lo))
  }

  /// Reads a little-endian `u32`.
  #[inline]
  fn read_u32(&mut self) -> BmpResult<u32> {
    let lo = self.read_u16()?;
    let hi = self.read_u16()?;
    Ok(u32::from(hi) << 16 | u32::from(lo))
  }

  /// Reads and throws away `count` bytes.
  #[inline]
  fn skip(&mut self, count: usize) -> BmpResult<()> {
    for _ in 0..count {
      self.read_u8()?;
    }
    Ok(())
  }
}

impl<R: Read + ?Sized> ByteSource for R {
  #[inline]
  fn read_u8(&mut self) -> BmpResult<u8> {
    let mut buf = [0_u8; 1];
    // `read_exact` already retries on `Interrupted`, every other error means
    // the byte just isn't coming.
    self.read_exact(&mut buf).map_err(|_| BmpError::UnexpectedEndOfInput)?;
    Ok(buf[0])
  }
}

/// Something that bytes can be pushed into.
pub trait ByteSink {
  /// Writes one byte.
  ///
  /// ## Failure
  /// * [`BmpError::WriteFailure`] if the sink won't accept the byte.
  fn write_u8(&mut self, x: u8) -> BmpResult<()>;

  /// Writes a `u16`, little-endian.
  #[inline]
  fn write_u16(&mut self, x: u16) -> BmpResult<()> {
    self.write_u8((x & 0xFF) as u8)?;
    self.write_u8((x >> 8) as u8)
  }

  /// Writes a `u32`, little-endian.
  #[inline]
  fn write_u32(&mut self, x: u32) -> BmpResult<()> {
    self.write_u16((x & 0xFFFF) as u16)?;
    self.write_u16((x >> 16) as u16)
  }

  /// Writes `count` zero bytes.
  #[inline]
  fn write_zeroes(&mut self, count: usize) -> BmpResult<()> {
    for _ in 0..count {
      self.write_u8(0)?;
    }
    Ok(())
  }
}

impl<W: Write + ?Sized> ByteSink for W {
  #[inline]
  fn write_u8(&mut self, x: u8) -> BmpResult<()> {
    self.write_all(&[x]).map_err(|e| BmpError::WriteFailure(e.kind()))
  }
}
