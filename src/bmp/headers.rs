//! The two fixed headers at the front of every BMP file.
//!
//! Both are plain-old-data structs whose in-memory layout is exactly the file
//! layout (`pack1` integers have an alignment of 1), so they can be viewed as
//! bytes with `bytemuck`. They're still read and written field by field
//! through the [stream](crate::stream) traits, because the file comes to us as
//! a stream and not as a slice.

use crate::{
  ascii_array::AsciiArray,
  error::BmpResult,
  stream::{ByteSink, ByteSource},
};
use pack1::{U16LE, U32LE};

/// The tag at the start of a Windows 3.1 (or later) bitmap.
pub const BMP_TAG: AsciiArray<2> = AsciiArray(*b"BM");

/// Byte length of [`BitmapFileHeader`].
pub const FILE_HEADER_LEN: u32 = 14;

/// Byte length of [`BitmapInfoHeader`], this is also its `size` field.
pub const INFO_HEADER_LEN: u32 = 40;

/// Compression value for plain, uncompressed pixel data.
pub const BI_RGB: u32 = 0;

/// 72 DPI, expressed in pixels per meter.
pub const PIXELS_PER_METER: u32 = 2835;

/// `BITMAPFILEHEADER`
#[derive(Debug, Clone, Copy, bytemuck::Zeroable, bytemuck::Pod)]
#[repr(C)]
pub struct BitmapFileHeader {
  /// Should be [`BMP_TAG`].
  pub ty: AsciiArray<2>,
  /// Total size of the file in bytes.
  pub file_size: U32LE,
  /// Unused, 0.
  pub reserved1: U16LE,
  /// Unused, 0.
  pub reserved2: U16LE,
  /// Where the pixel data starts within the file.
  pub bitmap_offset: U32LE,
}
impl BitmapFileHeader {
  /// Reads the header's 14 bytes from a stream.
  #[inline]
  pub fn read_from<S: ByteSource + ?Sized>(src: &mut S) -> BmpResult<Self> {
    Ok(Self {
      ty: AsciiArray([src.read_u8()?, src.read_u8()?]),
      file_size: U32LE::new(src.read_u32()?),
      reserved1: U16LE::new(src.read_u16()?),
      reserved2: U16LE::new(src.read_u16()?),
      bitmap_offset: U32LE::new(src.read_u32()?),
    })
  }

  /// Writes the header's 14 bytes to a stream.
  #[inline]
  pub fn write_to<S: ByteSink + ?Sized>(&self, sink: &mut S) -> BmpResult<()> {
    let [t0, t1] = self.ty.0;
    sink.write_u8(t0)?;
    sink.write_u8(t1)?;
    sink.write_u32(self.file_size.get())?;
    sink.write_u16(self.reserved1.get())?;
    sink.write_u16(self.reserved2.get())?;
    sink.write_u32(self.bitmap_offset.get())
  }
}

/// `BITMAPINFOHEADER`, the 40 byte info header.
///
/// Other BMP versions use longer (or shorter) info headers, but those aren't
/// supported.
#[derive(Debug, Clone, Copy, bytemuck::Zeroable, bytemuck::Pod)]
#[repr(C)]
pub struct BitmapInfoHeader {
  /// Size of this header, should be [`INFO_HEADER_LEN`].
  pub size: U32LE,
  /// Width in pixels.
  pub width: U32LE,
  /// Height in pixels.
  pub height: U32LE,
  /// Must be 1, but readers don't check.
  pub planes: U16LE,
  /// Bits per pixel, only 8 is supported.
  pub bits_per_pixel: U16LE,
  /// Should be [`BI_RGB`].
  pub compression: U32LE,
  /// Bytes of pixel data, including row padding.
  pub image_size: U32LE,
  /// Horizontal resolution.
  pub x_pixels_per_meter: U32LE,
  /// Vertical resolution.
  pub y_pixels_per_meter: U32LE,
  /// Populated palette entries, 0 means "all of them".
  pub colors_used: U32LE,
  /// Generally ignored.
  pub important_colors: U32LE,
}
impl BitmapInfoHeader {
  /// Reads the header's 40 bytes from a stream.
  #[inline]
  pub fn read_from<S: ByteSource + ?Sized>(src: &mut S) -> BmpResult<Self> {
    Ok(Self {
      size: U32LE::new(src.read_u32()?),
      width: U32LE::new(src.read_u32()?),
      height: U32LE::new(src.read_u32()?),
      planes: U16LE::new(src.read_u16()?),
      bits_per_pixel: U16LE::new(src.read_u16()?),
      compression: U32LE::new(src.read_u32()?),
      image_size: U32LE::new(src.read_u32()?),
      x_pixels_per_meter: U32LE::new(src.read_u32()?),
      y_pixels_per_meter: U32LE::new(src.read_u32()?),
      colors_used: U32LE::new(src.read_u32()?),
      important_colors: U32LE::new(src.read_u32()?),
    })
  }

  /// Writes the header's 40 bytes to a stream.
  #[inline]
  #[rustfmt::skip]
  pub fn write_to<S: ByteSink + ?Sized>(&self, sink: &mut S) -> BmpResult<()> {
    sink.write_u32(self.size.get())?;
    sink.write_u32(self.width.get())?;
    sink.write_u32(self.height.get())?;
    sink.write_u16(self.planes.get())?;
    sink.write_u16(self.bits_per_pixel.get())?;
    sink.write_u32(self.compression.get())?;
    sink.write_u32(self.image_size.get())?;
    sink.write_u32(self.x_pixels_per_meter.get())?;
    sink.write_u32(self.y_pixels_per_meter.get())?;
    sink.write_u32(self.colors_used.get())?;
    sink.write_u32(self.important_colors.get())
  }
}
