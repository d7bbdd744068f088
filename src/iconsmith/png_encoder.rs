use std::io::Write;

use flate2::{Compression, Crc, write::ZlibEncoder};

use crate::iconsmith::Rgb;
use crate::iconsmith::byte_writer::ByteWriter;

/// The eight signature bytes every PNG stream starts with
pub const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

const BIT_DEPTH_8: u8 = 8;
const COLOR_TYPE_RGBA: u8 = 6;

/// A single PNG chunk: a 4-byte ASCII type tag plus its payload.
///
/// Serialized as `length(4B BE) || type || payload || CRC32(type || payload)(4B BE)`,
/// where the CRC32 is the standard reflected-0xEDB88320 variant shared by PNG
/// and zlib.
pub struct PngChunk {
    kind: [u8; 4],
    payload: Vec<u8>,
}

impl PngChunk {
    // Create a new chunk
    // @param kind: The 4-byte ASCII chunk type
    // @param payload: The chunk payload bytes
    // @return: The new chunk
    pub fn new(kind: [u8; 4], payload: Vec<u8>) -> Self {
        Self { kind, payload }
    }

    /// Serialize this chunk, including the length prefix and CRC trailer
    ///
    /// ### Arguments
    /// - `out`: The writer to append to
    pub fn write_to(&self, out: &mut ByteWriter) {
        out.put_u32_be(self.payload.len() as u32);
        out.put_bytes(&self.kind);
        out.put_bytes(&self.payload);
        let mut crc = Crc::new();
        crc.update(&self.kind);
        crc.update(&self.payload);
        out.put_u32_be(crc.sum());
    }
}

/// Encode a single-frame 8-bit RGBA PNG from a per-pixel accessor
///
/// The accessor is called once per pixel in row-major order (top row first,
/// left to right) and must return an RGBA quadruple. `width` and `height`
/// must both be positive; this is a precondition, not a checked error.
///
/// ### Arguments
/// - `width`: The image width in pixels
/// - `height`: The image height in pixels
/// - `pixel_at`: Accessor returning the RGBA value at (x, y)
///
/// ### Returns
/// - `Vec<u8>`: A spec-valid PNG byte stream (signature + IHDR + IDAT + IEND)
pub fn encode_png<F>(width: u32, height: u32, mut pixel_at: F) -> Vec<u8>
where
    F: FnMut(u32, u32) -> [u8; 4],
{
    // Raw scanline stream: each row is one filter byte (0 = none) followed
    // by width RGBA quadruples.
    let row_len = 1 + width as usize * 4;
    let mut raw = Vec::with_capacity(row_len * height as usize);
    for y in 0..height {
        raw.push(0);
        for x in 0..width {
            raw.extend_from_slice(&pixel_at(x, y));
        }
    }

    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::best());
    encoder
        .write_all(&raw)
        .expect("writing to an in-memory zlib stream cannot fail");
    let idat = encoder
        .finish()
        .expect("finishing an in-memory zlib stream cannot fail");

    let mut ihdr = ByteWriter::with_capacity(13);
    ihdr.put_u32_be(width);
    ihdr.put_u32_be(height);
    ihdr.put_u8(BIT_DEPTH_8);
    ihdr.put_u8(COLOR_TYPE_RGBA);
    ihdr.put_u8(0); // compression method
    ihdr.put_u8(0); // filter method
    ihdr.put_u8(0); // interlace method

    let mut out = ByteWriter::with_capacity(PNG_SIGNATURE.len() + 12 + 13 + 12 + idat.len() + 12);
    out.put_bytes(&PNG_SIGNATURE);
    PngChunk::new(*b"IHDR", ihdr.into_bytes()).write_to(&mut out);
    PngChunk::new(*b"IDAT", idat).write_to(&mut out);
    PngChunk::new(*b"IEND", Vec::new()).write_to(&mut out);
    out.into_bytes()
}

/// Encode a square solid-color PNG, with alpha forced to 255
///
/// ### Arguments
/// - `size`: The square edge length in pixels
/// - `color`: The fill color
///
/// ### Returns
/// - `Vec<u8>`: A spec-valid PNG byte stream
pub fn encode_solid(size: u32, color: Rgb) -> Vec<u8> {
    encode_png(size, size, |_, _| [color.r, color.g, color.b, 255])
}
