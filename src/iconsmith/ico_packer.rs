use crate::iconsmith::byte_writer::ByteWriter;

const HEADER_LEN: u32 = 6;
const DIR_ENTRY_LEN: u32 = 16;
const RESOURCE_TYPE_ICON: u16 = 1;

/// One image destined for an ICO container.
///
/// The payload bytes are opaque to the packer: modern ICO containers accept
/// whole PNG streams as entries, and legacy DIB payloads pass through the
/// same way. The nominal size is the logical square edge length the entry
/// advertises in the directory, independent of the payload encoding.
pub struct IcoImage {
    pub data: Vec<u8>,
    pub nominal_size: u32,
}

impl IcoImage {
    // Create a new ICO entry
    // @param data: The image payload bytes (PNG or legacy bitmap)
    // @param nominal_size: The logical square edge length in pixels (1..=256)
    // @return: The new entry
    pub fn new(data: Vec<u8>, nominal_size: u32) -> Self {
        Self { data, nominal_size }
    }
}

/// A fixed 16-byte ICO directory record
struct IcoDirEntry {
    size_byte: u8,
    data_len: u32,
    data_offset: u32,
}

impl IcoDirEntry {
    fn new(nominal_size: u32, data_len: u32, data_offset: u32) -> Self {
        // A directory byte cannot hold 256, which the format encodes as 0.
        let size_byte = if nominal_size >= 256 {
            0
        } else {
            nominal_size as u8
        };
        Self {
            size_byte,
            data_len,
            data_offset,
        }
    }

    fn write_to(&self, out: &mut ByteWriter) {
        out.put_u8(self.size_byte); // width
        out.put_u8(self.size_byte); // height
        out.put_u8(0); // color palette count
        out.put_u8(0); // reserved
        out.put_u16_le(1); // color planes
        out.put_u16_le(32); // bits per pixel
        out.put_u32_le(self.data_len);
        out.put_u32_le(self.data_offset);
    }
}

/// Pack images into a single ICO container
///
/// Directory entries keep the caller's order, and each entry's offset is the
/// payload's absolute position in the file (the first payload starts right
/// after the header and directory). Duplicate nominal sizes are emitted
/// as-is; the packer never deduplicates.
///
/// The input must be nonempty; this is a precondition, not a checked error.
///
/// ### Arguments
/// - `images`: The ordered images to embed
///
/// ### Returns
/// - `Vec<u8>`: A spec-valid ICO byte stream (header + directory + payloads)
pub fn pack_ico(images: &[IcoImage]) -> Vec<u8> {
    let count = images.len() as u32;
    let payload_len: usize = images.iter().map(|image| image.data.len()).sum();
    let mut out =
        ByteWriter::with_capacity((HEADER_LEN + DIR_ENTRY_LEN * count) as usize + payload_len);

    out.put_u16_le(0); // reserved
    out.put_u16_le(RESOURCE_TYPE_ICON);
    out.put_u16_le(count as u16);

    let mut offset = HEADER_LEN + DIR_ENTRY_LEN * count;
    for image in images {
        IcoDirEntry::new(image.nominal_size, image.data.len() as u32, offset).write_to(&mut out);
        offset += image.data.len() as u32;
    }
    for image in images {
        out.put_bytes(&image.data);
    }
    out.into_bytes()
}
