use super::*;
use crate::{
  error::{BmpResult, FormatProblem},
  image::{Bitmap, PALETTE_CAPACITY},
  stream::ByteSink,
};
use pack1::{U16LE, U32LE};

/// Where everything goes in an encoded file.
///
/// All of this is computed from the image dimensions alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BmpLayout {
  /// Bytes per padded row.
  pub stride: u32,
  /// Bytes of pixel data.
  pub image_size: u32,
  /// Start of the pixel data.
  pub pixel_offset: u32,
  /// Total bytes in the file.
  pub file_size: u32,
}
impl BmpLayout {
  /// Byte length of the full palette that's always written.
  pub const PALETTE_SIZE: u32 = 4 * PALETTE_CAPACITY as u32;

  /// Computes the layout, or `None` if some size won't fit the `u32` fields of
  /// the headers.
  #[inline]
  #[must_use]
  pub fn new(width: u32, height: u32) -> Option<Self> {
    let stride = u32::try_from(row_stride(width)).ok()?;
    let image_size = stride.checked_mul(height)?;
    let pixel_offset = FILE_HEADER_LEN + INFO_HEADER_LEN + Self::PALETTE_SIZE;
    let file_size = pixel_offset.checked_add(image_size)?;
    Some(Self { stride, image_size, pixel_offset, file_size })
  }
}

/// The number of bytes [`encode`] writes for an image of the given size, or
/// `None` if that image can't be stored as a BMP.
#[inline]
#[must_use]
pub fn encoded_size(width: u32, height: u32) -> Option<u32> {
  BmpLayout::new(width, height).map(|l| l.file_size)
}

/// Encodes a bitmap as an uncompressed 8-bit BMP.
///
/// The output always has all 256 palette entries, whatever `colors_used` is,
/// and every size and offset field is computed from the dimensions.
///
/// ## Failure
/// * [`FormatProblem::DimensionsTooLarge`] if the sizes don't fit the header
///   fields. Nothing is written in this case.
/// * [`BmpError::WriteFailure`](crate::BmpError::WriteFailure) if the sink
///   rejects a byte.
pub fn encode<S: ByteSink + ?Sized>(bitmap: &Bitmap, sink: &mut S) -> BmpResult<()> {
  let (width, height) = (bitmap.width(), bitmap.height());
  let layout =
    BmpLayout::new(width, height).ok_or(FormatProblem::DimensionsTooLarge(width, height))?;
  log::debug!("encoding {width}x{height} BMP, {} bytes", layout.file_size);

  let file = BitmapFileHeader {
    ty: BMP_TAG,
    file_size: U32LE::new(layout.file_size),
    reserved1: U16LE::new(0),
    reserved2: U16LE::new(0),
    bitmap_offset: U32LE::new(layout.pixel_offset),
  };
  let info = BitmapInfoHeader {
    size: U32LE::new(INFO_HEADER_LEN),
    width: U32LE::new(width),
    height: U32LE::new(height),
    planes: U16LE::new(1),
    bits_per_pixel: U16LE::new(8),
    compression: U32LE::new(BI_RGB),
    image_size: U32LE::new(layout.image_size),
    x_pixels_per_meter: U32LE::new(PIXELS_PER_METER),
    y_pixels_per_meter: U32LE::new(PIXELS_PER_METER),
    colors_used: U32LE::new(PALETTE_CAPACITY as u32),
    important_colors: U32LE::new(PALETTE_CAPACITY as u32),
  };
  file.write_to(sink)?;
  info.write_to(sink)?;

  for c in &bitmap.palette {
    sink.write_u8(c.b)?;
    sink.write_u8(c.g)?;
    sink.write_u8(c.r)?;
    sink.write_u8(0)?;
  }

  let padding = (layout.stride - width) as usize;
  for y in 0..height {
    for x in 0..width {
      sink.write_u8(bitmap[(x, y)])?;
    }
    sink.write_zeroes(padding)?;
  }
  Ok(())
}

/// Encodes a bitmap into a new `Vec`.
///
/// The full size is reserved up front, so allocation failure is reported as
/// an error instead of happening part way through.
pub fn encode_to_vec(bitmap: &Bitmap) -> BmpResult<Vec<u8>> {
  let (width, height) = (bitmap.width(), bitmap.height());
  let size = encoded_size(width, height).ok_or(FormatProblem::DimensionsTooLarge(width, height))?;
  let mut v = Vec::new();
  v.try_reserve_exact(size as usize)?;
  encode(bitmap, &mut v)?;
  Ok(v)
}
