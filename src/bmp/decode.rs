use super::*;
use crate::{
  error::{BmpResult, FormatProblem},
  image::{Bitmap, PALETTE_CAPACITY},
  stream::ByteSource,
};
use log::{debug, trace, warn};
use pixel_formats::r8g8b8_Srgb;

/// Checks that the headers describe an uncompressed 8-bit indexed image.
///
/// On success you get the number of palette entries that follow the headers.
///
/// ## Failure
/// * [`BmpError::InvalidFormat`](crate::BmpError::InvalidFormat) naming the
///   first field that's wrong.
pub fn check_headers(file: &BitmapFileHeader, info: &BitmapInfoHeader) -> BmpResult<usize> {
  use FormatProblem::*;
  if file.ty != BMP_TAG {
    return Err(Signature(file.ty.0).into());
  }
  if info.size.get() != INFO_HEADER_LEN {
    return Err(InfoHeaderSize(info.size.get()).into());
  }
  if info.bits_per_pixel.get() != 8 {
    return Err(BitsPerPixel(info.bits_per_pixel.get()).into());
  }
  if info.compression.get() != BI_RGB {
    return Err(Compression(info.compression.get()).into());
  }
  match info.colors_used.get() {
    0 => Ok(PALETTE_CAPACITY),
    n if n as usize <= PALETTE_CAPACITY => Ok(n as usize),
    n => Err(PaletteTooLong(n).into()),
  }
}

/// Decodes an 8-bit indexed BMP from a stream.
///
/// Exactly the headers, the palette, and `height` padded rows are read. Any
/// bytes after that are left in the stream.
///
/// ## Failure
/// * [`UnexpectedEndOfInput`](crate::BmpError::UnexpectedEndOfInput) if the
///   stream ends early.
/// * [`InvalidFormat`](crate::BmpError::InvalidFormat) if this isn't an
///   uncompressed 8-bit BMP with a 40 byte info header.
/// * [`AllocationFailure`](crate::BmpError::AllocationFailure) if the pixel
///   grid can't be allocated.
///
/// No partial image is ever returned.
pub fn decode<S: ByteSource + ?Sized>(src: &mut S) -> BmpResult<Bitmap> {
  let file = BitmapFileHeader::read_from(src)?;
  let info = BitmapInfoHeader::read_from(src)?;
  trace!("{file:?}");
  trace!("{info:?}");
  let palette_len = check_headers(&file, &info)?;
  let width = info.width.get();
  let height = info.height.get();
  debug!("decoding {width}x{height} BMP with {palette_len} palette entries");

  let mut palette = [r8g8b8_Srgb { r: 0, g: 0, b: 0 }; PALETTE_CAPACITY];
  for entry in &mut palette[..palette_len] {
    let b = src.read_u8()?;
    let g = src.read_u8()?;
    let r = src.read_u8()?;
    let _pad = src.read_u8()?;
    *entry = r8g8b8_Srgb { r, g, b };
  }

  let stride = row_stride(width);
  let pixel_offset = u64::from(FILE_HEADER_LEN + INFO_HEADER_LEN) + 4 * palette_len as u64;
  if u64::from(file.bitmap_offset.get()) != pixel_offset {
    warn!(
      "header says pixel data is at {}, reading it from {pixel_offset} instead",
      file.bitmap_offset.get()
    );
  }
  let file_size = pixel_offset + stride * u64::from(height);
  if u64::from(file.file_size.get()) != file_size {
    warn!("header says the file is {} bytes, expected {file_size}", file.file_size.get());
  }

  // The grid grows one row at a time as data actually arrives, so a header
  // with huge dimensions on a short file fails at end of input instead of
  // allocating for pixels that aren't there.
  let row_len = width as usize;
  let padding = (stride - u64::from(width)) as usize;
  let mut indexes: Vec<u8> = Vec::new();
  for _y in 0..height {
    indexes.try_reserve(row_len)?;
    for _x in 0..width {
      indexes.push(src.read_u8()?);
    }
    src.skip(padding)?;
  }
  trace!("read {} pixel rows", height);

  let mut bitmap = Bitmap::from_indexes(width, height, indexes);
  bitmap.palette = palette;
  bitmap.colors_used = palette_len;
  Ok(bitmap)
}

/// Decodes an 8-bit indexed BMP held in memory.
///
/// Bytes after the pixel data are ignored.
#[inline]
pub fn decode_bytes(mut bytes: &[u8]) -> BmpResult<Bitmap> {
  decode(&mut bytes)
}
